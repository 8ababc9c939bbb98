//! Dictionary membership oracle.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Normalised dictionary: trimmed, lower-cased, non-empty words.
///
/// Normalisation happens once on insertion; lookups are exact matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim().to_lowercase();
    (!word.is_empty()).then_some(word)
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read newline-delimited words.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a stray Latin-1 entry only
    /// spoils its own line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut list = Self::new();
        for line in reader.split(b'\n') {
            list.insert(&String::from_utf8_lossy(&line?));
        }
        Ok(list)
    }

    /// Load a newline-delimited word file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Insert a word after normalising it. Blank input is ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        match normalize(word) {
            Some(w) => self.words.insert(w),
            None => false,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for w in iter {
            list.insert(w.as_ref());
        }
        list
    }
}
