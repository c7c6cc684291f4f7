//! Initials table generation.
//!
//! Walks a fixed code point range, resolves one pinyin initial per code
//! point and emits the result as adjacent quoted string literals.

use tracing::{debug, debug_span};

use crate::overrides::OverrideTable;
use crate::romanizer::{initial_of, Romanizer};
use crate::unicode::{CJK_COUNT, CJK_START};


/// Number of letters per quoted segment.
pub const CHUNK_SIZE: usize = 128;

/// Delimiter wrapped around every segment.
pub const QUOTE: char = '\'';

/// Inserted between segments: close quote, comma, newline, open quote.
pub const CHUNK_BREAK: &str = "',\n'";

/// Which code points to cover and how to wrap them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub start: u32,
    pub count: u32,
    pub chunk: usize,
}

impl TableLayout {
    /// The frozen CJK Unified Ideographs snapshot, 128 letters per segment.
    pub const CJK_UNIFIED: TableLayout = TableLayout {
        start: CJK_START,
        count: CJK_COUNT,
        chunk: CHUNK_SIZE,
    };

    /// Code points in range order (`start..start + count`).
    pub fn code_points(&self) -> std::ops::Range<u32> {
        self.start..self.start.saturating_add(self.count)
    }

    /// Number of quoted segments [`format_literal`] emits for this layout.
    pub fn segment_count(&self) -> usize {
        self.count as usize / self.chunk.max(1) + 1
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::CJK_UNIFIED
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("no reading for {ch} (U+{code_point:04X})", ch = display_char(.code_point))]
    LookupMiss { code_point: u32 },

    #[error("reading {reading:?} for U+{code_point:04X} has no ASCII initial")]
    InvalidInitial { code_point: u32, reading: String },

    #[error("U+{0:04X} is not a Unicode scalar value")]
    InvalidCodePoint(u32),
}

fn display_char(code_point: &u32) -> char {
    char::from_u32(*code_point).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Resolve the pinyin initial of a single character.
///
/// An override entry always wins; otherwise the initial of the romanizer's
/// first reading is used.
pub fn resolve_initial(
    c: char,
    overrides: &OverrideTable,
    romanizer: &dyn Romanizer,
) -> Result<char, GenerateError> {
    if let Some(letter) = overrides.get(c) {
        debug!(ch = %c, %letter, "override");
        return Ok(letter);
    }

    let code_point = c as u32;
    let readings = romanizer.readings(c);
    let reading = readings
        .first()
        .ok_or(GenerateError::LookupMiss { code_point })?;
    initial_of(reading).ok_or_else(|| GenerateError::InvalidInitial {
        code_point,
        reading: reading.clone(),
    })
}

/// One initial per code point of `layout`, in range order, without any
/// quoting or chunk breaks.
pub fn generate_payload(
    layout: &TableLayout,
    overrides: &OverrideTable,
    romanizer: &dyn Romanizer,
) -> Result<String, GenerateError> {
    let _span = debug_span!("generate_payload", start = layout.start, count = layout.count)
        .entered();

    let mut payload = String::with_capacity(layout.count as usize);
    for code_point in layout.code_points() {
        let c = char::from_u32(code_point).ok_or(GenerateError::InvalidCodePoint(code_point))?;
        payload.push(resolve_initial(c, overrides, romanizer)?);
    }

    debug!(letters = payload.len(), "payload complete");
    Ok(payload)
}

/// Wrap a payload into quoted segments of `chunk` characters.
///
/// A break follows every `chunk`-th character, including the last one, so a
/// payload whose length is an exact multiple of `chunk` ends with an empty
/// `''` segment.
pub fn format_literal(payload: &str, chunk: usize) -> String {
    let chunk = chunk.max(1);
    let mut out = String::with_capacity(payload.len() + payload.len() / chunk * 4 + 2);
    out.push(QUOTE);
    for (i, c) in payload.chars().enumerate() {
        out.push(c);
        if (i + 1) % chunk == 0 {
            out.push_str(CHUNK_BREAK);
        }
    }
    out.push(QUOTE);
    out
}

/// Generate the complete literal text for `layout`.
///
/// Any lookup failure aborts generation; no partial table is returned.
pub fn generate_table(
    layout: &TableLayout,
    overrides: &OverrideTable,
    romanizer: &dyn Romanizer,
) -> Result<String, GenerateError> {
    let _span = debug_span!("generate_table", chunk = layout.chunk).entered();
    let payload = generate_payload(layout, overrides, romanizer)?;
    let literal = format_literal(&payload, layout.chunk);
    debug!(segments = layout.segment_count(), bytes = literal.len(), "table formatted");
    Ok(literal)
}
