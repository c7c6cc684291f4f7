use std::cell::Cell;
use std::collections::HashMap;

use crate::romanizer::Romanizer;

/// In-memory romanizer for tests: one reading per listed character, extra
/// heteronyms via [`StubRomanizer::with`], and an optional reading returned
/// for every other character.
pub(crate) struct StubRomanizer {
    readings: HashMap<char, Vec<String>>,
    fallback: Option<String>,
    calls: Cell<usize>,
}

impl StubRomanizer {
    pub fn new(entries: &[(char, &str)]) -> Self {
        Self {
            readings: entries
                .iter()
                .map(|&(c, r)| (c, vec![r.to_string()]))
                .collect(),
            fallback: None,
            calls: Cell::new(0),
        }
    }

    /// Every character reads as `reading`.
    pub fn uniform(reading: &str) -> Self {
        Self::new(&[]).with_fallback(reading)
    }

    pub fn with(mut self, c: char, readings: &[&str]) -> Self {
        self.readings
            .insert(c, readings.iter().map(|r| r.to_string()).collect());
        self
    }

    pub fn with_fallback(mut self, reading: &str) -> Self {
        self.fallback = Some(reading.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Romanizer for StubRomanizer {
    fn readings(&self, c: char) -> Vec<String> {
        self.calls.set(self.calls.get() + 1);
        match self.readings.get(&c) {
            Some(rs) => rs.clone(),
            None => self.fallback.iter().cloned().collect(),
        }
    }
}
