//! Find dictionary word triples `word1 + word2 = word3` under a
//! letter-to-digit substitution cipher.
//!
//! A [`Cipher`] built from a key of `L` distinct letters turns every integer
//! into a base-`L` numeral spelled in key letters. [`SumFinder`] scans an
//! integer range for values that spell [`WordList`] entries and reports every
//! pair of such values whose sum spells one too.

pub mod cipher;
pub mod config;
pub mod error;
pub mod finder;
pub mod io_utils;
pub mod numeral;
pub mod output;
pub mod word_list;

pub use cipher::{make_numbers, Cipher, Word};
pub use config::SearchConfig;
pub use error::{Result, WordsumError};
pub use finder::{find_all, SearchStats, SumFinder, Triplet};
pub use numeral::{base_add, base_times, parse as parse_numeral, to_base};
pub use output::{CsvEmitter, HEADER};
pub use word_list::WordList;
