// SPDX-License-Identifier: Apache-2.0

use crate::scratch_buffer::DEFAULT_INITIAL_CAPACITY;

/// Configuration options for [`crate::Parser`].
///
/// # Examples
///
/// ```
/// use scalarjson::{Parser, ParserOptions};
///
/// let options = ParserOptions {
///     nul_terminates: false,
///     ..Default::default()
/// };
/// let mut parser = Parser::with_options(b"\"abc\"", options);
/// assert!(parser.parse().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Size of the scratch buffer's first allocation, in bytes.
    ///
    /// The buffer is only allocated once a string is decoded and grows by
    /// half its size whenever it fills up.
    ///
    /// # Default
    ///
    /// `256`
    pub initial_scratch_capacity: usize,

    /// Whether a NUL byte ends the input, as it would for a C string.
    ///
    /// When `false` a NUL is an ordinary byte: inside a string it is an
    /// unescaped control character, and after a value it is trailing content.
    ///
    /// # Default
    ///
    /// `true`
    pub nul_terminates: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            initial_scratch_capacity: DEFAULT_INITIAL_CAPACITY,
            nul_terminates: true,
        }
    }
}
