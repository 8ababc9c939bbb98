use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordsumError {
    /// Cipher key has 36 or more symbols and cannot map onto `0-9a-z`.
    #[error("cipher key too long: {len} symbols (must be fewer than 36)")]
    KeyTooLong { len: usize },

    /// Cipher key cannot form a positional base.
    #[error("cipher key too short: {len} symbols (need at least 2)")]
    KeyTooShort { len: usize },

    /// Cipher key repeats a symbol.
    #[error("cipher key contains repeat letter '{0}'")]
    DuplicateKeyLetter(char),

    /// Encode/decode met a symbol outside the cipher's domain.
    #[error("symbol '{0}' is not mapped by the cipher")]
    UnmappedSymbol(char),

    /// String is not a numeral in the given base.
    #[error("invalid base-{base} numeral '{numeral}'")]
    InvalidNumeral { numeral: String, base: u32 },

    /// Radix outside `2..=36`.
    #[error("unsupported base {0} (must be in 2..=36)")]
    InvalidBase(u32),

    /// Arithmetic result does not fit in 64 bits.
    #[error("numeral arithmetic overflowed")]
    Overflow,

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV sink failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, WordsumError>;
