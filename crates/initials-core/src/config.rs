//! Embedded generator configuration, following the same OnceLock pattern as
//! the override table.
//!
//! - `config()` returns `&'static InitialsConfig` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_initials.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::generator::TableLayout;
use crate::overrides::OverrideTable;

pub const DEFAULT_INITIALS_TOML: &str = include_str!("default_initials.toml");

/// Get or initialize the embedded configuration singleton.
pub fn config() -> &'static InitialsConfig {
    static INSTANCE: OnceLock<InitialsConfig> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_config_toml(DEFAULT_INITIALS_TOML).expect("embedded initials TOML must be valid")
    })
}

/// Returns the embedded default configuration TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_INITIALS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct InitialsConfig {
    pub layout: TableLayout,
    pub overrides: OverrideTable,
}

#[derive(Deserialize)]
struct RawConfig {
    table: RawTable,
    #[serde(default)]
    overrides: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct RawTable {
    start: u32,
    count: u32,
    chunk: usize,
}

pub fn parse_config_toml(toml_str: &str) -> Result<InitialsConfig, ConfigError> {
    let raw: RawConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    let layout = validate_table(&raw.table)?;
    let overrides = parse_overrides(&raw.overrides)?;
    Ok(InitialsConfig { layout, overrides })
}

fn invalid(field: impl Into<String>, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        reason: reason.to_string(),
    }
}

fn validate_table(t: &RawTable) -> Result<TableLayout, ConfigError> {
    if t.count == 0 {
        return Err(invalid("table.count", "must be positive"));
    }
    if t.chunk == 0 {
        return Err(invalid("table.chunk", "must be positive"));
    }
    match t.start.checked_add(t.count - 1) {
        Some(last) if last <= char::MAX as u32 => {}
        _ => return Err(invalid("table.count", "range exceeds the Unicode code space")),
    }
    Ok(TableLayout {
        start: t.start,
        count: t.count,
        chunk: t.chunk,
    })
}

fn parse_overrides(raw: &BTreeMap<String, String>) -> Result<OverrideTable, ConfigError> {
    let mut map = BTreeMap::new();
    for (key, value) in raw {
        let field = format!("overrides.{key}");
        let mut key_chars = key.chars();
        let (Some(c), None) = (key_chars.next(), key_chars.next()) else {
            return Err(invalid(field, "key must be a single character"));
        };
        let mut value_chars = value.chars();
        let letter = match (value_chars.next(), value_chars.next()) {
            (Some(l), None) if l.is_ascii_lowercase() => l,
            _ => return Err(invalid(field, "value must be a single letter a-z")),
        };
        map.insert(c, letter);
    }
    Ok(OverrideTable::new(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let c = parse_config_toml(DEFAULT_INITIALS_TOML).unwrap();
        assert_eq!(c.layout, TableLayout::CJK_UNIFIED);
        assert_eq!(c.overrides.len(), 10);
        assert_eq!(c.overrides.get('兙'), Some('s'));
        assert_eq!(c.overrides.get('甅'), Some('l'));
    }

    #[test]
    fn singleton_matches_default() {
        assert_eq!(config().layout.count, 20902);
        assert_eq!(config().overrides.len(), 10);
    }

    #[test]
    fn overrides_section_is_optional() {
        let toml = "[table]\nstart = 19968\ncount = 4\nchunk = 2\n";
        let c = parse_config_toml(toml).unwrap();
        assert!(c.overrides.is_empty());
        assert_eq!(c.layout.count, 4);
    }

    #[test]
    fn error_zero_count() {
        let toml = "[table]\nstart = 19968\ncount = 0\nchunk = 128\n";
        let err = parse_config_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "table.count"));
    }

    #[test]
    fn error_zero_chunk() {
        let toml = "[table]\nstart = 19968\ncount = 10\nchunk = 0\n";
        let err = parse_config_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "table.chunk"));
    }

    #[test]
    fn error_range_past_code_space() {
        let toml = "[table]\nstart = 1114111\ncount = 2\nchunk = 128\n";
        assert!(matches!(
            parse_config_toml(toml),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn error_multi_char_key() {
        let toml = r#"
[table]
start = 19968
count = 1
chunk = 1

[overrides]
"一二" = "y"
"#;
        assert!(matches!(
            parse_config_toml(toml),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn error_uppercase_value() {
        let toml = r#"
[table]
start = 19968
count = 1
chunk = 1

[overrides]
"一" = "Y"
"#;
        assert!(matches!(
            parse_config_toml(toml),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_config_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
