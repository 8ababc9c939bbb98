//! Enumeration of word sums.
//!
//! The search runs in two phases. A linear scan over `[0, max_sum)` marks
//! every integer whose decoded letters are a dictionary word. The pair phase
//! then walks only the marked integers below `max_sum / 2`, pairing each `i`
//! with every marked `j >= i` and keeping the pair when `i + j` is marked too.
//! Both addends are bounded by `max_sum / 2`, so an addend at or above half
//! the bound is never considered even when its partner is small.

use serde::Serialize;
use tracing::{debug, trace};

use crate::cipher::{Cipher, Word};
use crate::word_list::WordList;

/// Three words with `addend1 + addend2 = sum` in the cipher's base.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triplet {
    pub addend1: Word,
    pub addend2: Word,
    pub sum: Word,
}

impl Triplet {
    pub fn words(&self) -> [&Word; 3] {
        [&self.addend1, &self.addend2, &self.sum]
    }

    /// Flat `(numbers, letters)` columns for all three words.
    pub fn record(&self) -> [&str; 6] {
        [
            &self.addend1.numbers,
            &self.addend1.letters,
            &self.addend2.numbers,
            &self.addend2.letters,
            &self.sum.numbers,
            &self.sum.letters,
        ]
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Integers decoded during the scan phase.
    pub scanned: u64,
    /// Integers whose letters are dictionary words.
    pub valid: u64,
    /// Valid integers below the addend bound.
    pub addends: u64,
    /// Triplets emitted.
    pub triplets: u64,
}

/// Search engine over a fixed cipher and dictionary.
pub struct SumFinder<'a> {
    cipher: &'a Cipher,
    words: &'a WordList,
}

impl<'a> SumFinder<'a> {
    pub fn new(cipher: &'a Cipher, words: &'a WordList) -> Self {
        Self { cipher, words }
    }

    /// Stream every triplet with sum below `max_sum` to `action`.
    ///
    /// Triplets arrive ordered by first addend, then second addend. A
    /// non-positive `max_sum` yields nothing.
    pub fn run<F>(&self, max_sum: i64, mut action: F) -> SearchStats
    where
        F: FnMut(&Triplet),
    {
        let mut stats = SearchStats::default();
        if max_sum <= 0 {
            return stats;
        }
        let max = usize::try_from(max_sum).unwrap_or(usize::MAX);
        let half = max / 2;

        let mut valid: Vec<Option<Word>> = vec![None; max];
        let mut valid_numbers: Vec<usize> = Vec::new();
        for (k, slot) in valid.iter_mut().enumerate() {
            let letters = self.cipher.letters_for(k as u64);
            if self.words.contains(&letters) {
                *slot = Some(self.cipher.word_for(k as u64));
                valid_numbers.push(k);
            }
        }
        stats.scanned = max as u64;
        stats.valid = valid_numbers.len() as u64;

        let addends = &valid_numbers[..valid_numbers.partition_point(|&k| k < half)];
        stats.addends = addends.len() as u64;
        debug!(
            scanned = stats.scanned,
            valid = stats.valid,
            addends = stats.addends,
            "validity scan complete"
        );

        for (pos, &i) in addends.iter().enumerate() {
            for &j in &addends[pos..] {
                if let (Some(a), Some(b), Some(s)) = (&valid[i], &valid[j], &valid[i + j]) {
                    let triplet = Triplet {
                        addend1: a.clone(),
                        addend2: b.clone(),
                        sum: s.clone(),
                    };
                    trace!(a = i, b = j, sum = i + j, "triplet");
                    action(&triplet);
                    stats.triplets += 1;
                }
            }
        }
        debug!(triplets = stats.triplets, "pair scan complete");
        stats
    }

    /// Collect every triplet with sum below `max_sum`.
    pub fn collect(&self, max_sum: i64) -> Vec<Triplet> {
        let mut out = Vec::new();
        self.run(max_sum, |t| out.push(t.clone()));
        out
    }
}

/// Convenience wrapper around [`SumFinder::collect`].
pub fn find_all(max_sum: i64, cipher: &Cipher, words: &WordList) -> Vec<Triplet> {
    SumFinder::new(cipher, words).collect(max_sum)
}
