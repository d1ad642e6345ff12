// SPDX-License-Identifier: Apache-2.0

use crate::json_string::JsonString;

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
}

/// A decoded JSON scalar.
///
/// Values start out as `Null`. Assigning a new payload through any of the
/// setters drops whatever string the value held before.
///
/// The `get_*` accessors treat a tag mismatch as a caller bug and panic;
/// the `as_*` accessors return `None` instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A finite number.
    Number(f64),
    /// A decoded string.
    String(JsonString),
}

impl Value {
    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::True => ValueType::True,
            Value::False => ValueType::False,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
        }
    }

    /// Releases any owned string and resets the value to `Null`.
    ///
    /// Safe to call any number of times.
    pub fn clear(&mut self) {
        *self = Value::Null;
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean if this is `True` or `False`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    /// Returns the number if this is `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string if this is `String`.
    pub fn as_json_string(&self) -> Option<&JsonString> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// # Panics
    /// If the value is not `True` or `False`.
    pub fn get_boolean(&self) -> bool {
        match self.as_bool() {
            Some(b) => b,
            None => self.mismatch("get_boolean"),
        }
    }

    /// # Panics
    /// If the value is not a `Number`.
    pub fn get_number(&self) -> f64 {
        match self.as_f64() {
            Some(n) => n,
            None => self.mismatch("get_number"),
        }
    }

    /// String content without the terminator.
    ///
    /// # Panics
    /// If the value is not a `String`.
    pub fn get_string(&self) -> &[u8] {
        match self.as_json_string() {
            Some(s) => s.as_bytes(),
            None => self.mismatch("get_string"),
        }
    }

    /// # Panics
    /// If the value is not a `String`.
    pub fn get_string_length(&self) -> usize {
        match self.as_json_string() {
            Some(s) => s.len(),
            None => self.mismatch("get_string_length"),
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = Value::from(b);
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Copies `content` into a new owned string. An empty slice is allowed.
    pub fn set_string(&mut self, content: &[u8]) {
        *self = Value::String(JsonString::new(content));
    }

    #[cold]
    #[track_caller]
    fn mismatch(&self, accessor: &str) -> ! {
        panic!("{accessor} called on a {:?} value", self.get_type())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(JsonString::from(s))
    }
}

impl From<JsonString> for Value {
    fn from(s: JsonString) -> Self {
        Value::String(s)
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::True => f.write_str("true"),
            Value::False => f.write_str("false"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "\"{s}\""),
        }
    }
}
