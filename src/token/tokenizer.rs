//! Punctuation stripping and literal-space tokenization
//!
//! Splitting is on the space character only, not general whitespace: tabs
//! and newlines stay inside tokens, and consecutive spaces produce empty
//! tokens that are counted like any other. This quirk is load-bearing for
//! digest compatibility and is covered by tests.

use crate::{Error, Result};
use std::collections::HashMap;

/// Token frequencies in first-appearance order
///
/// The order in which tokens first occur decides the creation sequence of
/// their leaf nodes, which in turn breaks weight ties during the merge.
/// Built once per input; never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    fn record(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frequency of a token, if present
    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&i| self.entries[i].1)
    }

    /// Iterate `(token, count)` in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }
}

/// Remove ASCII punctuation from the input
///
/// `char::is_ascii_punctuation` matches exactly the set stripped by the
/// reference pipeline.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Tokenize already-stripped text into a frequency table
///
/// Fails with [`Error::EmptyInput`] when no token contains a non-whitespace
/// character, so empty and whitespace-only inputs never reach the tree
/// builder. Interior empty tokens (from runs of spaces) are kept.
pub fn tokenize(stripped: &str) -> Result<FrequencyTable> {
    if !stripped.chars().any(|c| !c.is_whitespace()) {
        return Err(Error::EmptyInput);
    }

    let mut table = FrequencyTable::default();
    for token in stripped.split(' ') {
        table.record(token);
    }
    Ok(table)
}
