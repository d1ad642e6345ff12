// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;

/// Pure helpers for decoding JSON escape sequences.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or `InvalidStringEscape` for anything other
    /// than `" \ / b f n r t`. The `u` escape is handled separately.
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        match escape_char {
            b'n' => Ok(b'\n'),
            b't' => Ok(b'\t'),
            b'r' => Ok(b'\r'),
            b'\\' => Ok(b'\\'),
            b'"' => Ok(b'"'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            _ => Err(ParseError::InvalidStringEscape),
        }
    }

    /// Validate that a byte represents a valid hexadecimal digit.
    ///
    /// # Returns
    /// The numeric value (0-15) of the hex digit, or `InvalidUnicodeHex`.
    pub fn validate_hex_digit(byte: u8) -> Result<u16, ParseError> {
        match byte {
            b'0'..=b'9' => Ok(u16::from(byte - b'0')),
            b'a'..=b'f' => Ok(u16::from(byte - b'a') + 10),
            b'A'..=b'F' => Ok(u16::from(byte - b'A') + 10),
            _ => Err(ParseError::InvalidUnicodeHex),
        }
    }

    /// Reads exactly four hex digits from the cursor into a UTF-16 code unit.
    ///
    /// End of input counts as an invalid digit.
    pub fn read_hex4(input: &mut SliceInputBuffer<'_>) -> Result<u16, ParseError> {
        let mut unit = 0u16;
        for _ in 0..4 {
            let byte = input.consume_byte().ok_or(ParseError::InvalidUnicodeHex)?;
            unit = (unit << 4) | Self::validate_hex_digit(byte)?;
        }
        Ok(unit)
    }

    /// Check if a code unit is a high surrogate (0xD800-0xDBFF)
    pub fn is_high_surrogate(unit: u16) -> bool {
        (0xD800..=0xDBFF).contains(&unit)
    }

    /// Check if a code unit is a low surrogate (0xDC00-0xDFFF)
    pub fn is_low_surrogate(unit: u16) -> bool {
        (0xDC00..=0xDFFF).contains(&unit)
    }

    /// Combine a high and low surrogate pair into a single code point
    pub fn combine_surrogate_pair(high: u16, low: u16) -> Result<u32, ParseError> {
        if !Self::is_high_surrogate(high) || !Self::is_low_surrogate(low) {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        let high = u32::from(high - 0xD800);
        let low = u32::from(low - 0xDC00);
        Ok(0x10000 + high * 0x400 + low)
    }

    /// Decodes the body of a `\u` escape, with the cursor just past the `u`.
    ///
    /// A high surrogate must be followed immediately by `\u` and a low
    /// surrogate; the pair is combined into one code point. The returned
    /// value is never a surrogate.
    pub fn decode_unicode_escape(input: &mut SliceInputBuffer<'_>) -> Result<u32, ParseError> {
        let mut state = SurrogateState::ExpectUnit;
        loop {
            state = match state {
                SurrogateState::ExpectUnit => {
                    let unit = Self::read_hex4(input)?;
                    if Self::is_high_surrogate(unit) {
                        SurrogateState::ExpectLowPrefix { high: unit }
                    } else if Self::is_low_surrogate(unit) {
                        return Err(ParseError::InvalidUnicodeSurrogate);
                    } else {
                        return Ok(u32::from(unit));
                    }
                }
                SurrogateState::ExpectLowPrefix { high } => {
                    if !(input.consume_if(b'\\') && input.consume_if(b'u')) {
                        return Err(ParseError::InvalidUnicodeSurrogate);
                    }
                    SurrogateState::ExpectLowDigits { high }
                }
                SurrogateState::ExpectLowDigits { high } => {
                    if input.is_at_end() {
                        return Err(ParseError::InvalidUnicodeSurrogate);
                    }
                    let low = Self::read_hex4(input)?;
                    return Self::combine_surrogate_pair(high, low);
                }
            };
        }
    }
}

/// Progress through a `\uXXXX` escape that may be the first half of a surrogate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurrogateState {
    /// Reading the first four hex digits.
    ExpectUnit,
    /// Got a high surrogate; the next bytes must be `\u`.
    ExpectLowPrefix { high: u16 },
    /// Reading the low surrogate's four hex digits.
    ExpectLowDigits { high: u16 },
}

/// Encodes a code point (0..=0x10FFFF) as UTF-8.
///
/// Returns the encoded bytes in a fixed array along with the number of bytes
/// used. Continuation bytes carry six data bits under a `10` marker.
pub fn encode_utf8(codepoint: u32) -> ([u8; 4], usize) {
    debug_assert!(codepoint <= 0x10FFFF, "code point out of range: {codepoint:#x}");
    let mut out = [0u8; 4];
    let len = match codepoint {
        0..=0x7F => {
            out[0] = codepoint as u8;
            1
        }
        0x80..=0x7FF => {
            out[0] = 0xC0 | (codepoint >> 6) as u8;
            out[1] = 0x80 | (codepoint & 0x3F) as u8;
            2
        }
        0x800..=0xFFFF => {
            out[0] = 0xE0 | (codepoint >> 12) as u8;
            out[1] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            out[2] = 0x80 | (codepoint & 0x3F) as u8;
            3
        }
        _ => {
            out[0] = 0xF0 | ((codepoint >> 18) & 0x07) as u8;
            out[1] = 0x80 | ((codepoint >> 12) & 0x3F) as u8;
            out[2] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            out[3] = 0x80 | (codepoint & 0x3F) as u8;
            4
        }
    };
    (out, len)
}
