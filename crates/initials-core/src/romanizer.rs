//! Mandarin romanization lookup.
//!
//! The generator never romanizes on its own; it asks a [`Romanizer`] for
//! the readings of each character and keeps the initial of the first one.

use pinyin::ToPinyinMulti;

use crate::unicode::fold_diacritic;

/// A pluggable source of pinyin readings.
pub trait Romanizer {
    /// Plain (toneless) readings for `c`, primary reading first.
    ///
    /// Returns an empty list for characters the source does not know.
    fn readings(&self, c: char) -> Vec<String>;
}

/// Romanizer backed by the `pinyin` crate's heteronym data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinRomanizer;

impl Romanizer for PinyinRomanizer {
    fn readings(&self, c: char) -> Vec<String> {
        c.to_pinyin_multi()
            .map(|multi| multi.into_iter().map(|p| p.plain().to_string()).collect())
            .unwrap_or_default()
    }
}

/// The lowercase ASCII initial of a reading.
///
/// Tone marks and the diaeresis are folded away first, so `"ê"` yields `e`
/// and `"ǹg"` yields `n`. Returns `None` when the reading does not start
/// with a pinyin letter.
pub fn initial_of(reading: &str) -> Option<char> {
    let first = reading.chars().next()?;
    let folded = fold_diacritic(first).to_ascii_lowercase();
    folded.is_ascii_lowercase().then_some(folded)
}
