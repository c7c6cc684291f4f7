use clap::{Parser, Subcommand};

use initials_cli::commands::{charmap_ops, config_ops, initials_ops};
use initials_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "initool", about = "Pinyin initials table generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the CJK pinyin initials table as quoted string literals (default)
    Initials,
    /// Show the resolved initial of each character
    Lookup {
        /// Characters to look up
        text: String,
    },
    /// Check a generated initials table file
    Verify {
        /// File holding the output of `initool initials`
        file: String,
    },
    /// Build a dense character map from a transliteration table
    Charmap {
        /// Input table (one `char<TAB>ascii` pair per line)
        input: String,
        /// Output file
        output: String,
    },
    /// Export the built-in table layout and overrides as TOML
    ConfigExport,
    /// Show the built-in table layout and overrides
    ConfigShow,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Initials) {
        Command::Initials => initials_ops::generate(),
        Command::Lookup { text } => initials_ops::lookup(&text),
        Command::Verify { file } => initials_ops::verify(&file),
        Command::Charmap { input, output } => charmap_ops::charmap(&input, &output),
        Command::ConfigExport => config_ops::config_export(),
        Command::ConfigShow => config_ops::config_show(),
    }
}
