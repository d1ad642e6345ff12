// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A literal (`true`, `false`, `null`) or number did not match the grammar.
    InvalidValue,
    /// Non-whitespace content followed a complete value.
    RootNotSingular,
    /// A number's magnitude overflowed `f64`.
    NumberTooBig,
    /// A string was not terminated by a closing quote.
    MissQuotationMark,
    /// Unknown character after a backslash.
    InvalidStringEscape,
    /// Unescaped control character (below 0x20) inside a string.
    InvalidStringChar,
    /// Invalid hex digits in Unicode escape sequence.
    InvalidUnicodeHex,
    /// Unpaired or mismatched UTF-16 surrogate in a Unicode escape.
    InvalidUnicodeSurrogate,
    /// A decoded string was not valid UTF-8.
    ///
    /// Never returned by the parser itself, only by [`crate::JsonString::as_str`].
    InvalidUtf8(core::str::Utf8Error),
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ExpectValue => f.write_str("expected a value"),
            ParseError::InvalidValue => f.write_str("invalid value"),
            ParseError::RootNotSingular => f.write_str("unexpected content after value"),
            ParseError::NumberTooBig => f.write_str("number too big"),
            ParseError::MissQuotationMark => f.write_str("missing closing quotation mark"),
            ParseError::InvalidStringEscape => f.write_str("invalid string escape"),
            ParseError::InvalidStringChar => f.write_str("invalid character in string"),
            ParseError::InvalidUnicodeHex => f.write_str("invalid unicode hex digits"),
            ParseError::InvalidUnicodeSurrogate => f.write_str("invalid unicode surrogate"),
            ParseError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {e}"),
        }
    }
}

impl core::error::Error for ParseError {}
