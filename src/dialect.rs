//! Dialect configuration: the quote/delimiter byte pair a CSV stream is
//! parsed with.
//!
//! The quote and delimiter characters are closed enums shared by the CLI
//! flags and the config file, so an invalid configuration byte is
//! unrepresentable rather than checked at runtime.

use clap::ValueEnum;
use serde::Deserialize;

/// Quote character delimiting quoted cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteChar {
    /// `"` (0x22)
    #[default]
    Double,
    /// `'` (0x27)
    Single,
}

impl QuoteChar {
    pub fn byte(self) -> u8 {
        match self {
            QuoteChar::Double => b'"',
            QuoteChar::Single => b'\'',
        }
    }
}

/// Delimiter character separating cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterChar {
    /// `,` (0x2c)
    #[default]
    Comma,
    /// Horizontal tab (0x09)
    Tab,
}

impl DelimiterChar {
    pub fn byte(self) -> u8 {
        match self {
            DelimiterChar::Comma => b',',
            DelimiterChar::Tab => b'\t',
        }
    }
}

/// The configured byte pair.
///
/// The space-padding tolerances (padding ahead of an opening quote, a space
/// run standing in for the delimiter between quoted cells) are part of every
/// dialect; only the quote and delimiter bytes vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dialect {
    pub quote: QuoteChar,
    pub delimiter: DelimiterChar,
}

impl Dialect {
    pub fn new(quote: QuoteChar, delimiter: DelimiterChar) -> Self {
        Self { quote, delimiter }
    }

    pub fn quote_byte(&self) -> u8 {
        self.quote.byte()
    }

    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.byte()
    }
}
