// SPDX-License-Identifier: Apache-2.0

//! A single-pass parser for documents holding one JSON scalar.
//!
//! Numbers are validated against the JSON grammar before conversion, and
//! strings are fully unescaped, including UTF-16 surrogate pairs, into owned
//! UTF-8 bytes.
//!
//! ```
//! use scalarjson::{parse, ParseError, Value};
//!
//! assert_eq!(parse("-1.5e3"), Ok(Value::Number(-1500.0)));
//! assert_eq!(
//!     parse(r#""\uD834\uDD1E""#).unwrap().get_string(),
//!     &[0xF0, 0x9D, 0x84, 0x9E]
//! );
//! assert_eq!(parse("1e309"), Err(ParseError::NumberTooBig));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod escape_processor;

mod json_string;
pub use json_string::JsonString;

mod number_parser;

mod options;
pub use options::ParserOptions;

mod parse_error;
pub use parse_error::ParseError;

mod parser_core;

mod scratch_buffer;

mod slice_input_buffer;

mod slice_parser;
pub use slice_parser::{parse, parse_into, parse_slice, Parser};

mod string_parser;

mod value;
pub use value::{Value, ValueType};
