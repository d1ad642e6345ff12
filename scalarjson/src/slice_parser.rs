// SPDX-License-Identifier: Apache-2.0

use crate::options::ParserOptions;
use crate::parse_error::ParseError;
use crate::parser_core::ParseContext;
use crate::value::Value;

/// Parses a single JSON scalar from an in-memory buffer.
///
/// Each call to [`Parser::parse`] runs a fresh parse over the whole input
/// with its own scratch buffer, so a `Parser` can be re-run and separate
/// parsers can be used from separate threads.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    input: &'a [u8],
    options: ParserOptions,
    /// Byte offset where the last parse stopped.
    position: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use scalarjson::Parser;
    /// let mut parser = Parser::new(r#""value""#);
    /// assert_eq!(parser.parse().unwrap().get_string(), b"value");
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// A NUL byte ends the input, so a C string may be passed with its
    /// terminator included.
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a new parser from a byte slice with custom options.
    pub fn with_options(input: &'a [u8], options: ParserOptions) -> Self {
        Self {
            input,
            options,
            position: 0,
        }
    }

    /// Parses the input into a new value.
    pub fn parse(&mut self) -> Result<Value, ParseError> {
        let mut context = ParseContext::new(self.input, &self.options);
        let result = context.parse_root();
        self.position = context.finish();
        if let Err(e) = &result {
            log::debug!("parse failed at byte {}: {e}", self.position);
        }
        result
    }

    /// Parses the input into an existing value.
    ///
    /// Whatever `value` held before is released first. On failure `value`
    /// is left as `Null`.
    pub fn parse_into(&mut self, value: &mut Value) -> Result<(), ParseError> {
        value.clear();
        *value = self.parse()?;
        Ok(())
    }

    /// Byte offset in the input where the last parse stopped.
    ///
    /// After a failure this points at or just past the offending byte.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Parses a JSON scalar from a string.
///
/// ```
/// use scalarjson::{parse, ParseError, ValueType};
///
/// assert_eq!(parse(" true ").unwrap().get_type(), ValueType::True);
/// assert_eq!(parse("0 123"), Err(ParseError::RootNotSingular));
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    Parser::new(input).parse()
}

/// Parses a JSON scalar from bytes. A NUL byte ends the input.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    Parser::new_from_slice(input).parse()
}

/// Parses a JSON scalar into `value`, which is `Null` if parsing fails.
pub fn parse_into(value: &mut Value, input: &[u8]) -> Result<(), ParseError> {
    Parser::new_from_slice(input).parse_into(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueType;
    use test_log::test;

    #[test]
    fn test_parse_reports_position() {
        let mut parser = Parser::new("  12x");
        assert_eq!(parser.parse(), Err(ParseError::RootNotSingular));
        assert_eq!(parser.position(), 4);

        let mut parser = Parser::new(r#""ab\q""#);
        assert_eq!(parser.parse(), Err(ParseError::InvalidStringEscape));
        assert_eq!(parser.position(), 5);
    }

    #[test]
    fn test_parse_is_repeatable() {
        let mut parser = Parser::new(r#""again""#);
        let first = parser.parse();
        let second = parser.parse();
        assert_eq!(first, second);
        assert_eq!(parser.position(), 7);
    }

    #[test]
    fn test_parse_into_resets_on_failure() {
        let mut value = Value::from("previous");
        assert_eq!(parse_into(&mut value, b"nope"), Err(ParseError::InvalidValue));
        assert_eq!(value.get_type(), ValueType::Null);

        assert_eq!(parse_into(&mut value, b"\"next\""), Ok(()));
        assert_eq!(value.get_string(), b"next");

        assert_eq!(parse_into(&mut value, b"1 2"), Err(ParseError::RootNotSingular));
        assert!(value.is_null());
    }

    #[test]
    fn test_nul_terminates_by_default() {
        assert_eq!(parse_slice(b"true\0garbage"), Ok(Value::True));
        assert_eq!(parse_slice(b"\0"), Err(ParseError::ExpectValue));
    }

    #[test]
    fn test_nul_as_ordinary_byte() {
        let options = ParserOptions {
            nul_terminates: false,
            ..Default::default()
        };
        let mut parser = Parser::with_options(b"true\0", options);
        assert_eq!(parser.parse(), Err(ParseError::RootNotSingular));

        let mut parser = Parser::with_options(b"\"a\0b\"", options);
        assert_eq!(parser.parse(), Err(ParseError::InvalidStringChar));
    }

    #[test]
    fn test_small_initial_scratch_capacity() {
        let options = ParserOptions {
            initial_scratch_capacity: 1,
            ..Default::default()
        };
        let mut parser = Parser::with_options(br#""a longer string than one byte""#, options);
        assert_eq!(
            parser.parse().unwrap().get_string(),
            b"a longer string than one byte"
        );
    }
}
