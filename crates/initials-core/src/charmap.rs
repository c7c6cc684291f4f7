//! Dense character map built from a `char<TAB>ascii` transliteration table.
//!
//! The output holds one character per code point from U+0000 up to the
//! highest code point in the table: the lowercase initial when known and
//! `\0` otherwise. ASCII `A`..=`Z` always map to their lowercase form.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, debug_span};

/// Placeholder for code points without an initial.
pub const UNMAPPED: char = '\0';

#[derive(Debug, thiserror::Error)]
pub enum CharmapError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Build the dense map from transliteration table text.
///
/// Each line is `char<TAB>ascii`. The first ASCII letter of the second field
/// is the initial; lines without one are skipped.
pub fn build_charmap(table_text: &str) -> String {
    let _span = debug_span!("build_charmap", bytes = table_text.len()).entered();

    let mut map: HashMap<u32, char> = HashMap::new();
    let mut end = 0u32;
    let mut skipped = 0usize;

    for line in table_text.lines() {
        let mut fields = line.split('\t');
        let source = fields.next().and_then(|f| f.chars().next());
        let alpha = fields
            .next()
            .and_then(|ascii| ascii.chars().find(char::is_ascii_alphabetic));
        let (Some(source), Some(alpha)) = (source, alpha) else {
            skipped += 1;
            continue;
        };
        let code = source as u32;
        end = end.max(code);
        map.insert(code, alpha.to_ascii_lowercase());
    }

    for upper in 'A'..='Z' {
        map.insert(upper as u32, upper.to_ascii_lowercase());
    }

    debug!(entries = map.len(), skipped, end, "charmap parsed");

    (0..=end)
        .map(|code| map.get(&code).copied().unwrap_or(UNMAPPED))
        .collect()
}

/// Read a transliteration table from `input` and write the dense map to
/// `output`. Returns the number of code points written.
pub fn write_charmap(input: &Path, output: &Path) -> Result<usize, CharmapError> {
    let text = fs::read_to_string(input)?;
    let charmap = build_charmap(&text);
    fs::write(output, &charmap)?;
    Ok(charmap.chars().count())
}
