// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;

fn is_digit(byte: Option<u8>) -> bool {
    matches!(byte, Some(b'0'..=b'9'))
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while is_digit(bytes.get(pos).copied()) {
        pos += 1;
    }
    pos
}

/// Matches a JSON number at the start of `bytes` and returns its length.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?`
///
/// A `0` integer part directly followed by another digit is rejected as a
/// leading zero. Nothing past the returned length is inspected beyond the
/// single byte of lookahead each optional part needs.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let at = |i: usize| bytes.get(i).copied();
    let mut pos = 0;

    if at(pos) == Some(b'-') {
        pos += 1;
    }

    match at(pos) {
        Some(b'0') => {
            pos += 1;
            if is_digit(at(pos)) {
                return Err(ParseError::InvalidValue);
            }
        }
        Some(b'1'..=b'9') => pos = skip_digits(bytes, pos + 1),
        _ => return Err(ParseError::InvalidValue),
    }

    if at(pos) == Some(b'.') {
        pos += 1;
        if !is_digit(at(pos)) {
            return Err(ParseError::InvalidValue);
        }
        pos = skip_digits(bytes, pos);
    }

    if let Some(b'e' | b'E') = at(pos) {
        pos += 1;
        if let Some(b'+' | b'-') = at(pos) {
            pos += 1;
        }
        if !is_digit(at(pos)) {
            return Err(ParseError::InvalidValue);
        }
        pos = skip_digits(bytes, pos);
    }

    Ok(pos)
}

/// Converts an already-validated number span to `f64`.
///
/// The grammar admits no `inf`/`nan` spellings, so an infinite result can
/// only mean the magnitude overflowed.
pub fn convert_number(number_bytes: &[u8]) -> Result<f64, ParseError> {
    let text = core::str::from_utf8(number_bytes).map_err(|_| ParseError::InvalidValue)?;
    let value = f64::from_str(text).map_err(|_| ParseError::InvalidValue)?;
    if value.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(value)
}

/// Parses the number at the cursor. The cursor only moves on success.
pub fn parse_number(input: &mut SliceInputBuffer<'_>) -> Result<f64, ParseError> {
    let remaining = input.remaining();
    let len = scan_number(remaining)?;
    let number_bytes = remaining.get(..len).ok_or(ParseError::InvalidValue)?;
    let value = convert_number(number_bytes)?;
    log::trace!("number_parser: {len} bytes -> {value}");
    input.advance(len);
    Ok(value)
}
