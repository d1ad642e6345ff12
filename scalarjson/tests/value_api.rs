// SPDX-License-Identifier: Apache-2.0

//! Accessors, mutators and lifecycle of `Value`.

use scalarjson::{parse, parse_into, JsonString, ParseError, Value, ValueType};
use test_log::test;

#[test]
fn test_parse_into_replaces_previous_value() {
    let mut value = Value::Null;
    parse_into(&mut value, b"\"first\"").unwrap();
    assert_eq!(value.get_string(), b"first");

    parse_into(&mut value, b"2.5").unwrap();
    assert_eq!(value.get_type(), ValueType::Number);
    assert_eq!(value.get_number(), 2.5);

    parse_into(&mut value, b"false").unwrap();
    assert!(!value.get_boolean());
}

#[test]
fn test_failed_parse_leaves_null() {
    let mut value = Value::from(3.0);
    assert_eq!(parse_into(&mut value, b"0 123"), Err(ParseError::RootNotSingular));
    assert_eq!(value.get_type(), ValueType::Null);
}

#[test]
fn test_clear_is_idempotent() {
    let mut value = parse("\"owned\"").unwrap();
    value.clear();
    assert!(value.is_null());
    value.clear();
    assert!(value.is_null());
}

#[test]
fn test_setters_replace_payload() {
    let mut value = Value::default();
    value.set_string(b"abc");
    assert_eq!(value.get_string_length(), 3);

    value.set_boolean(true);
    assert_eq!(value.get_type(), ValueType::True);

    value.set_number(-7.25);
    assert_eq!(value.get_number(), -7.25);

    value.set_string(b"");
    assert_eq!(value.get_type(), ValueType::String);
    assert_eq!(value.get_string(), b"");
    assert_eq!(value.get_string_length(), 0);
}

#[test]
fn test_option_accessors() {
    let value = parse("true").unwrap();
    assert_eq!(value.as_bool(), Some(true));
    assert_eq!(value.as_f64(), None);
    assert!(value.as_json_string().is_none());

    let value = parse("\"s\"").unwrap();
    assert_eq!(value.as_json_string(), Some(&JsonString::from("s")));
}

#[test]
#[should_panic(expected = "get_number called on a String value")]
fn test_number_accessor_on_string_panics() {
    let value = parse("\"not a number\"").unwrap();
    let _ = value.get_number();
}

#[test]
#[should_panic(expected = "get_boolean called on a Null value")]
fn test_boolean_accessor_on_null_panics() {
    let _ = Value::Null.get_boolean();
}

#[test]
fn test_display() {
    assert_eq!(parse("null").unwrap().to_string(), "null");
    assert_eq!(parse("false").unwrap().to_string(), "false");
    assert_eq!(parse("1.5").unwrap().to_string(), "1.5");
    assert_eq!(parse("\"hi\"").unwrap().to_string(), "\"hi\"");
}

#[test]
fn test_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
    assert_send_sync::<JsonString>();
    assert_send_sync::<ParseError>();
    assert_send_sync::<scalarjson::Parser<'static>>();
}

#[test]
fn test_independent_parses_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let json = format!("\"thread {i}\"");
                parse(&json).map(|v| v.get_string().to_vec())
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let decoded = handle.join().unwrap().unwrap();
        assert_eq!(decoded, format!("thread {i}").into_bytes());
    }
}
