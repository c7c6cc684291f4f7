//! Hand-maintained exceptions for characters the pinyin data does not cover.

use std::collections::BTreeMap;

use crate::config::config;

/// Immutable map from a Han character to its pinyin initial (`a`..=`z`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: BTreeMap<char, char>,
}

impl OverrideTable {
    pub fn new(entries: BTreeMap<char, char>) -> Self {
        Self { entries }
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.entries.get(&c).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().map(|(&c, &l)| (c, l))
    }
}

impl FromIterator<(char, char)> for OverrideTable {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The ten built-in overrides from the embedded configuration.
pub fn default_overrides() -> &'static OverrideTable {
    &config().overrides
}
