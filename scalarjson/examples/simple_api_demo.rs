// Example demonstrating the simple API

use scalarjson::{ParseError, Parser, Value};

fn main() -> Result<(), ParseError> {
    let inputs = [
        "null",
        " true ",
        "-12.5e-1",
        r#""tab\tand \u00e9""#,
        "0 123",
        r#""unterminated"#,
    ];

    for json in inputs {
        let mut parser = Parser::new(json);
        println!("Input: {json}");
        match parser.parse() {
            Ok(Value::String(s)) => println!("  String: '{s}' ({} bytes)", s.len()),
            Ok(Value::Number(n)) => println!("  Number: {n}"),
            Ok(value) => println!("  {:?}: {value}", value.get_type()),
            Err(e) => println!("  Error at byte {}: {e}", parser.position()),
        }
    }

    // Parsing into an existing value replaces what it held
    let mut value = Value::from("old");
    scalarjson::parse_into(&mut value, b"42")?;
    println!();
    println!("Reused value: {value}");
    Ok(())
}
