// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Deref;

use crate::parse_error::ParseError;

/// Owned bytes of a decoded JSON string.
///
/// The semantic length is explicit; a trailing NUL is kept after the content
/// so the bytes can be handed to C-style consumers, but it is never part of
/// [`JsonString::as_bytes`]. Content may contain embedded NUL bytes (from
/// `\u0000`) and is not guaranteed to be UTF-8, since raw input bytes are
/// copied through unchanged.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct JsonString {
    /// Content followed by a single terminating NUL.
    bytes: Vec<u8>,
}

impl JsonString {
    /// Copies `content` into a new terminated string.
    pub fn new(content: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(content.len().saturating_add(1));
        bytes.extend_from_slice(content);
        bytes.push(0);
        Self { bytes }
    }

    /// Takes ownership of `content` and appends the terminator.
    pub fn from_vec(mut content: Vec<u8>) -> Self {
        content.push(0);
        Self { bytes: content }
    }

    /// The string content, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        match self.bytes.split_last() {
            Some((_, content)) => content,
            None => &[],
        }
    }

    /// The string content followed by its NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// Content length in bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.bytes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the content as `&str` if it is valid UTF-8.
    pub fn as_str(&self) -> Result<&str, ParseError> {
        Ok(core::str::from_utf8(self.as_bytes())?)
    }

    /// Consumes the string and returns its content without the terminator.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bytes.pop();
        self.bytes
    }
}

impl Default for JsonString {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl Deref for JsonString {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for JsonString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for JsonString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for JsonString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for JsonString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl From<&str> for JsonString {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl core::fmt::Debug for JsonString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("JsonString")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

impl core::fmt::Display for JsonString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_terminator_is_not_content() {
        let s = JsonString::new(b"abc");
        assert_eq!(s.as_bytes(), b"abc");
        assert_eq!(s.as_bytes_with_nul(), b"abc\0");
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_empty_string() {
        let s = JsonString::new(&[]);
        assert!(s.is_empty());
        assert_eq!(s.as_bytes_with_nul(), b"\0");
        assert_eq!(s, JsonString::default());
    }

    #[test]
    fn test_embedded_nul_keeps_length() {
        let s = JsonString::from_vec(vec![b'a', 0, b'b']);
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_bytes(), b"a\0b");
        assert_eq!(s.into_bytes(), vec![b'a', 0, b'b']);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(JsonString::from("héllo").as_str(), Ok("héllo"));
        let invalid = JsonString::new(&[0xFF, 0xFE]);
        assert!(matches!(invalid.as_str(), Err(ParseError::InvalidUtf8(_))));
    }

    #[test]
    fn test_deref_and_comparisons() {
        let s = JsonString::from("test");
        assert_eq!(&*s, b"test");
        assert_eq!(s, "test");
        assert!(s == *"test");
        assert_eq!(s.first(), Some(&b't'));
    }
}
