use scalarjson::parse;

fn main() {
    let test_cases = [
        (r#""\uD801\udc37""#, "Deseret long I", '\u{10437}'),
        (r#""\uD834\uDD1E""#, "Musical G clef symbol", '\u{1D11E}'),
        (r#""\uD83D\uDE00""#, "Grinning face emoji", '\u{1F600}'),
    ];

    for (json, description, expected) in test_cases {
        println!("Testing {description}: {json}");
        let value = match parse(json) {
            Ok(value) => value,
            Err(e) => panic!("Parser error: {e:?}"),
        };
        let bytes = value.get_string();
        println!("  String content as bytes: {bytes:02X?}");

        let mut buf = [0u8; 4];
        assert_eq!(
            bytes,
            expected.encode_utf8(&mut buf).as_bytes(),
            "{json} should decode to U+{:X}",
            u32::from(expected)
        );
    }

    // A high surrogate must be followed by a low one
    for json in [r#""\uD801""#, r#""\uD801A""#, r#""\udc37""#] {
        println!("Testing invalid {json}: {:?}", parse(json));
        assert!(parse(json).is_err());
    }

    println!("All surrogate pairs decoded correctly");
}
