// SPDX-License-Identifier: Apache-2.0

//! Quoted string decoding into the scratch buffer.
//!
//! Decoded bytes are pushed above a checkpoint taken when the string begins.
//! On the closing quote exactly those bytes are popped into the resulting
//! [`JsonString`]; on any error the buffer is truncated back to the
//! checkpoint so no partial output survives.

use crate::escape_processor::{encode_utf8, EscapeProcessor};
use crate::json_string::JsonString;
use crate::parse_error::ParseError;
use crate::scratch_buffer::ScratchBuffer;
use crate::slice_input_buffer::SliceInputBuffer;

/// Decodes the string starting at the cursor, which must be on the opening quote.
pub fn parse_string(
    input: &mut SliceInputBuffer<'_>,
    scratch: &mut ScratchBuffer,
) -> Result<JsonString, ParseError> {
    let checkpoint = scratch.top();
    match decode_into_scratch(input, scratch) {
        Ok(()) => {
            let len = scratch.top().saturating_sub(checkpoint);
            log::trace!("string_parser: decoded {len} bytes");
            Ok(JsonString::from_vec(scratch.pop(len)))
        }
        Err(e) => {
            scratch.truncate(checkpoint);
            Err(e)
        }
    }
}

/// Pushes decoded bytes until the closing quote has been consumed.
fn decode_into_scratch(
    input: &mut SliceInputBuffer<'_>,
    scratch: &mut ScratchBuffer,
) -> Result<(), ParseError> {
    let opened = input.consume_if(b'"');
    debug_assert!(opened, "string parser entered without an opening quote");

    loop {
        match input.consume_byte() {
            None => return Err(ParseError::MissQuotationMark),
            Some(b'"') => return Ok(()),
            Some(b'\\') => match input.consume_byte() {
                Some(b'u') => {
                    let codepoint = EscapeProcessor::decode_unicode_escape(input)?;
                    let (bytes, len) = encode_utf8(codepoint);
                    scratch.push(bytes.get(..len).unwrap_or(&bytes));
                }
                Some(escape_char) => {
                    scratch.push_byte(EscapeProcessor::process_simple_escape(escape_char)?);
                }
                None => return Err(ParseError::InvalidStringEscape),
            },
            Some(byte) if byte < 0x20 => return Err(ParseError::InvalidStringChar),
            Some(byte) => scratch.push_byte(byte),
        }
    }
}
