use std::fs;

use tracing::debug;

use initials_core::config::config;
use initials_core::literal::verify_literal;
use initials_core::romanizer::{PinyinRomanizer, Romanizer};
use initials_core::{generate_default_table, resolve_initial};

/// Print the full initials literal to stdout.
pub fn generate() {
    let table = die!(generate_default_table(), "Error: {}");
    println!("{table}");
}

/// Show how each character of `text` resolves.
pub fn lookup(text: &str) {
    let overrides = &config().overrides;
    let romanizer = PinyinRomanizer;
    let mut failed = false;

    for c in text.chars().filter(|c| !c.is_whitespace()) {
        let source = if overrides.get(c).is_some() {
            "override".to_string()
        } else {
            romanizer.readings(c).join(",")
        };
        match resolve_initial(c, overrides, &romanizer) {
            Ok(letter) => println!("{c}\tU+{:04X}\t{letter}\t{source}", c as u32),
            Err(e) => {
                eprintln!("{c}\tU+{:04X}\terror: {e}", c as u32);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Check a previously generated literal file against the built-in layout.
pub fn verify(file: &str) {
    let text = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let layout = &config().layout;
    debug!(file, bytes = text.len(), "verifying");
    let summary = die!(verify_literal(&text, layout), "Error: {}");
    println!(
        "OK: {} segments, {} letters (U+{:04X}..U+{:04X})",
        summary.segments,
        summary.letters,
        layout.start,
        layout.start + layout.count - 1
    );
}
