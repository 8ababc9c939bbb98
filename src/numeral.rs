//! Positional numerals in bases 2 through 36.
//!
//! Digits are `0-9` followed by `a-z`. Formatting never produces leading
//! zeros; parsing accepts an optional sign and either letter case.

use crate::error::{Result, WordsumError};

/// Largest supported radix.
pub const MAX_BASE: u32 = 36;

/// Digit symbols in ascending value order.
pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn check_base(base: u32) -> Result<()> {
    if (2..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(WordsumError::InvalidBase(base))
    }
}

/// Symbol for a single digit value. `digit` must be below 36.
pub fn digit_symbol(digit: u32) -> char {
    DIGITS[digit as usize] as char
}

/// Digit values of `value` in `base`, most significant first.
///
/// Zero yields a single `0` digit. `base` must already be validated.
pub(crate) fn digits_of(mut value: u64, base: u32) -> Vec<u32> {
    let base = base as u64;
    let mut out = Vec::new();
    loop {
        out.push((value % base) as u32);
        value /= base;
        if value == 0 {
            break;
        }
    }
    out.reverse();
    out
}

/// Format a non-negative integer in `base`.
pub fn to_base(value: u64, base: u32) -> Result<String> {
    check_base(base)?;
    Ok(digits_of(value, base).into_iter().map(digit_symbol).collect())
}

/// Format a signed integer in `base`, prefixing `-` for negatives.
pub fn format_signed(value: i64, base: u32) -> Result<String> {
    let magnitude = to_base(value.unsigned_abs(), base)?;
    if value < 0 {
        Ok(format!("-{magnitude}"))
    } else {
        Ok(magnitude)
    }
}

/// Parse a numeral in `base` into a signed integer.
pub fn parse(numeral: &str, base: u32) -> Result<i64> {
    check_base(base)?;
    i64::from_str_radix(numeral, base).map_err(|_| WordsumError::InvalidNumeral {
        numeral: numeral.to_string(),
        base,
    })
}

/// Add two base-`base` numerals and format the sum in the same base.
pub fn base_add(n1: &str, n2: &str, base: u32) -> Result<String> {
    let sum = parse(n1, base)?
        .checked_add(parse(n2, base)?)
        .ok_or(WordsumError::Overflow)?;
    format_signed(sum, base)
}

/// Multiply two base-`base` numerals and format the product in the same base.
pub fn base_times(n1: &str, n2: &str, base: u32) -> Result<String> {
    let product = parse(n1, base)?
        .checked_mul(parse(n2, base)?)
        .ok_or(WordsumError::Overflow)?;
    format_signed(product, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_leading_zeros() {
        assert_eq!(to_base(0, 2).unwrap(), "0");
        assert_eq!(to_base(6, 2).unwrap(), "110");
        assert_eq!(to_base(35, 36).unwrap(), "z");
        assert_eq!(to_base(121, 11).unwrap(), "100");
    }

    #[test]
    fn rejects_bad_base() {
        assert!(matches!(to_base(1, 1), Err(WordsumError::InvalidBase(1))));
        assert!(matches!(parse("1", 37), Err(WordsumError::InvalidBase(37))));
    }

    #[test]
    fn signed_formatting() {
        assert_eq!(format_signed(-255, 16).unwrap(), "-ff");
        assert_eq!(digit_symbol(11), 'b');
    }
}
