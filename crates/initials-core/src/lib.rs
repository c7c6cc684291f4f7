pub mod charmap;
pub mod config;
pub mod generator;
pub mod literal;
pub mod overrides;
pub mod romanizer;
#[cfg(test)]
pub(crate) mod testutil;
pub mod unicode;

pub use generator::{generate_table, resolve_initial, GenerateError, TableLayout};
pub use overrides::{default_overrides, OverrideTable};
pub use romanizer::{PinyinRomanizer, Romanizer};

/// Generate the default CJK initials table with the built-in overrides and
/// the `pinyin` crate's data.
pub fn generate_default_table() -> Result<String, GenerateError> {
    let cfg = config::config();
    generate_table(&cfg.layout, &cfg.overrides, &PinyinRomanizer)
}
