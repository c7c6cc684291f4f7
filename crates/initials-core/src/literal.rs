//! Reading generated literals back, for checking a table before it is
//! pasted somewhere.

use crate::generator::{TableLayout, QUOTE};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("line {line}: expected a quoted segment")]
    Malformed { line: usize },

    #[error("segment {segment}: expected {expected} letters, found {found}")]
    SegmentLength {
        segment: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} segments, found {found}")]
    SegmentCount { expected: usize, found: usize },

    #[error("segment {segment}: {ch:?} is not a letter a-z")]
    InvalidLetter { segment: usize, ch: char },
}

/// Shape of a verified literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSummary {
    pub segments: usize,
    pub letters: usize,
}

/// Split generated literal text into its segment contents.
///
/// Every line except the last must read `'...',`; the last reads `'...'`.
/// A single trailing newline is ignored.
pub fn parse_literal(text: &str) -> Result<Vec<String>, LiteralError> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line = if i == last {
                Some(*line)
            } else {
                line.strip_suffix(',')
            };
            line.and_then(|l| l.strip_prefix(QUOTE))
                .and_then(|l| l.strip_suffix(QUOTE))
                .filter(|l| !l.contains(QUOTE))
                .map(str::to_string)
                .ok_or(LiteralError::Malformed { line: i + 1 })
        })
        .collect()
}

/// Check that `text` is a complete table for `layout`.
pub fn verify_literal(text: &str, layout: &TableLayout) -> Result<LiteralSummary, LiteralError> {
    let segments = parse_literal(text)?;

    let expected = layout.segment_count();
    if segments.len() != expected {
        return Err(LiteralError::SegmentCount {
            expected,
            found: segments.len(),
        });
    }

    let chunk = layout.chunk.max(1);
    let tail = layout.count as usize % chunk;
    let mut letters = 0;
    for (i, segment) in segments.iter().enumerate() {
        let want = if i + 1 == expected { tail } else { chunk };
        let found = segment.chars().count();
        if found != want {
            return Err(LiteralError::SegmentLength {
                segment: i + 1,
                expected: want,
                found,
            });
        }
        if let Some(ch) = segment.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(LiteralError::InvalidLetter {
                segment: i + 1,
                ch,
            });
        }
        letters += found;
    }

    Ok(LiteralSummary {
        segments: segments.len(),
        letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::format_literal;

    fn layout(count: u32, chunk: usize) -> TableLayout {
        TableLayout {
            start: 0x4E00,
            count,
            chunk,
        }
    }

    #[test]
    fn parse_segments() {
        let segs = parse_literal("'ab',\n'cd',\n'e'").unwrap();
        assert_eq!(segs, vec!["ab", "cd", "e"]);
    }

    #[test]
    fn parse_ignores_trailing_newline() {
        let segs = parse_literal("'ab',\n'c'\n").unwrap();
        assert_eq!(segs, vec!["ab", "c"]);
    }

    #[test]
    fn parse_rejects_missing_comma() {
        let err = parse_literal("'ab'\n'c'").unwrap_err();
        assert_eq!(err, LiteralError::Malformed { line: 1 });
    }

    #[test]
    fn parse_rejects_unquoted() {
        assert_eq!(
            parse_literal("'ab',\ncd").unwrap_err(),
            LiteralError::Malformed { line: 2 }
        );
        assert_eq!(
            parse_literal("'a'b'").unwrap_err(),
            LiteralError::Malformed { line: 1 }
        );
    }

    #[test]
    fn verify_formatted_payload() {
        let text = format_literal("abcde", 2);
        let summary = verify_literal(&text, &layout(5, 2)).unwrap();
        assert_eq!(
            summary,
            LiteralSummary {
                segments: 3,
                letters: 5
            }
        );
    }

    #[test]
    fn verify_exact_multiple_has_empty_tail() {
        let text = format_literal("abcd", 2);
        let summary = verify_literal(&text, &layout(4, 2)).unwrap();
        assert_eq!(summary.segments, 3);
        assert_eq!(summary.letters, 4);
    }

    #[test]
    fn verify_wrong_segment_count() {
        let text = format_literal("abcd", 2);
        assert_eq!(
            verify_literal(&text, &layout(6, 2)).unwrap_err(),
            LiteralError::SegmentCount {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn verify_short_segment() {
        assert_eq!(
            verify_literal("'ab',\n'c',\n'de'", &layout(5, 2)).unwrap_err(),
            LiteralError::SegmentLength {
                segment: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn verify_rejects_non_letters() {
        assert_eq!(
            verify_literal("'aB',\n'c'", &layout(3, 2)).unwrap_err(),
            LiteralError::InvalidLetter {
                segment: 1,
                ch: 'B'
            }
        );
    }
}
