//! Bijective letter ↔ digit cipher.
//!
//! A key of `L` distinct symbols defines a base-`L` numeral system: each key
//! letter is assigned one digit symbol, so any integer can be written in
//! base `L` and read back as a string of key letters.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, WordsumError};
use crate::numeral::{digit_symbol, digits_of, MAX_BASE};

/// An integer rendered in cipher digits and in cipher letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    /// Integer value of the word.
    pub value: u64,
    /// Base-`L` representation using `0-9a-z`.
    pub numbers: String,
    /// The same representation decoded to key letters.
    pub letters: String,
}

/// Digit symbols assigned to key positions for a key of `len` letters.
///
/// Digits `1..len` come first in increasing order (`1-9`, then `a-z`) and the
/// reserved `0` is placed at the front when `leading0` is set, otherwise at
/// the end.
pub fn make_numbers(len: usize, leading0: bool) -> Result<Vec<char>> {
    if len >= MAX_BASE as usize {
        return Err(WordsumError::KeyTooLong { len });
    }
    let mut numbers: Vec<char> = (1..len as u32).map(digit_symbol).collect();
    if leading0 {
        numbers.insert(0, '0');
    } else {
        numbers.push('0');
    }
    Ok(numbers)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cipher {
    key: Vec<char>,
    letter_to_value: HashMap<char, char>,
    value_to_letter: HashMap<char, char>,
    /// Letter for each digit value, indexed by the digit.
    letters_by_digit: Vec<char>,
    base: u32,
}

impl Cipher {
    /// Build a cipher from a key of distinct symbols.
    pub fn from_key(key: &str, leading0: bool) -> Result<Self> {
        let letters: Vec<char> = key.chars().collect();
        let len = letters.len();
        if len >= MAX_BASE as usize {
            return Err(WordsumError::KeyTooLong { len });
        }
        if len < 2 {
            return Err(WordsumError::KeyTooShort { len });
        }
        let mut seen = HashSet::with_capacity(len);
        for &l in &letters {
            if !seen.insert(l) {
                return Err(WordsumError::DuplicateKeyLetter(l));
            }
        }

        let numbers = make_numbers(len, leading0)?;
        let mut letter_to_value = HashMap::with_capacity(len);
        let mut value_to_letter = HashMap::with_capacity(len);
        for (&l, &n) in letters.iter().zip(&numbers) {
            letter_to_value.insert(l, n);
            value_to_letter.insert(n, l);
        }

        let base = len as u32;
        let letters_by_digit = (0..base)
            .map(|d| {
                let symbol = digit_symbol(d);
                value_to_letter
                    .get(&symbol)
                    .copied()
                    .ok_or(WordsumError::UnmappedSymbol(symbol))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            key: letters,
            letter_to_value,
            value_to_letter,
            letters_by_digit,
            base,
        })
    }

    /// Numeral radix, equal to the key length.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Key letters in their original order.
    pub fn key(&self) -> &[char] {
        &self.key
    }

    /// Digit symbol assigned to `letter`.
    pub fn value_of(&self, letter: char) -> Option<char> {
        self.letter_to_value.get(&letter).copied()
    }

    /// Letter assigned to the digit symbol `value`.
    pub fn letter_of(&self, value: char) -> Option<char> {
        self.value_to_letter.get(&value).copied()
    }

    /// Translate key letters to digit symbols.
    pub fn encode(&self, letters: &str) -> Result<String> {
        letters
            .chars()
            .map(|l| self.value_of(l).ok_or(WordsumError::UnmappedSymbol(l)))
            .collect()
    }

    /// Translate digit symbols back to key letters.
    pub fn decode(&self, numbers: &str) -> Result<String> {
        numbers
            .chars()
            .map(|n| self.letter_of(n).ok_or(WordsumError::UnmappedSymbol(n)))
            .collect()
    }

    /// Render `value` in this cipher's base and decode it to letters.
    pub fn word_for(&self, value: u64) -> Word {
        let digits = digits_of(value, self.base);
        let numbers = digits.iter().map(|&d| digit_symbol(d)).collect();
        let letters = digits
            .iter()
            .map(|&d| self.letters_by_digit[d as usize])
            .collect();
        Word {
            value,
            numbers,
            letters,
        }
    }

    /// Decoded letters of `value` without building the digit string.
    pub fn letters_for(&self, value: u64) -> String {
        digits_of(value, self.base)
            .into_iter()
            .map(|d| self.letters_by_digit[d as usize])
            .collect()
    }
}
