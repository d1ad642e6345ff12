// SPDX-License-Identifier: Apache-2.0

//! Per-parse state and the value dispatcher.
//!
//! A `ParseContext` lives for exactly one top-level parse. It owns the input
//! cursor and the scratch buffer used by the string decoder, and releases the
//! buffer when the parse finishes, whether it succeeded or not.

use crate::number_parser::parse_number;
use crate::options::ParserOptions;
use crate::parse_error::ParseError;
use crate::scratch_buffer::ScratchBuffer;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::string_parser::parse_string;
use crate::value::Value;

pub(crate) struct ParseContext<'a> {
    input: SliceInputBuffer<'a>,
    scratch: ScratchBuffer,
}

impl<'a> ParseContext<'a> {
    pub fn new(input: &'a [u8], options: &ParserOptions) -> Self {
        Self {
            input: SliceInputBuffer::new(input, options.nul_terminates),
            scratch: ScratchBuffer::with_initial_capacity(options.initial_scratch_capacity),
        }
    }

    /// Parses exactly one value surrounded by optional whitespace.
    pub fn parse_root(&mut self) -> Result<Value, ParseError> {
        self.input.skip_whitespace();
        let value = self.parse_value()?;
        self.input.skip_whitespace();
        if !self.input.is_at_end() {
            // The parsed value is dropped; callers only ever see Null on error
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    /// Picks a sub-parser from the next byte.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let next = self.input.peek();
        log::trace!(
            "parse_value at {}: {:?}",
            self.input.current_pos(),
            next.map(char::from)
        );
        match next {
            Some(b't') => self.parse_literal(b"true", Value::True),
            Some(b'f') => self.parse_literal(b"false", Value::False),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b'"') => parse_string(&mut self.input, &mut self.scratch).map(Value::String),
            None => Err(ParseError::ExpectValue),
            Some(_) => parse_number(&mut self.input).map(Value::Number),
        }
    }

    /// Matches the full keyword text at the cursor.
    fn parse_literal(&mut self, literal: &'static [u8], value: Value) -> Result<Value, ParseError> {
        if !self.input.remaining().starts_with(literal) {
            return Err(ParseError::InvalidValue);
        }
        self.input.advance(literal.len());
        Ok(value)
    }

    #[cfg(test)]
    pub fn scratch_top(&self) -> usize {
        self.scratch.top()
    }

    /// Tears down the scratch buffer and returns the final cursor position.
    pub fn finish(mut self) -> usize {
        debug_assert!(self.scratch.is_empty(), "unbalanced scratch buffer");
        self.scratch.release();
        self.input.current_pos()
    }
}
