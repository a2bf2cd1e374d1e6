mod test_manifest;

/// Parse back a C string literal body as produced by the escaper, like a C compiler would.
pub fn unescape_c_literal(literal: &[u8]) -> Vec<u8> {
    let mut result = vec![];
    let mut iter = literal.iter().copied();
    while let Some(b) = iter.next() {
        if b == b'\\' {
            match iter.next() {
                Some(b'n') => result.push(b'\n'),
                Some(e @ (b'\\' | b'"' | b'\'')) => result.push(e),
                other => panic!("unexpected escape sequence {other:?}"),
            }
        } else {
            assert_ne!(b, b'"', "unescaped quote in literal");
            assert_ne!(b, b'\n', "raw newline in literal");
            result.push(b);
        }
    }
    result
}

/// Extract the string literal body from a header in the string literal format.
pub fn literal_body(header: &[u8]) -> &[u8] {
    let start_marker = b"= {\"";
    let end_marker = b"\"};\n\n#endif\n";
    let start = header
        .windows(start_marker.len())
        .position(|w| w == start_marker)
        .expect("start of literal")
        + start_marker.len();
    assert!(header.ends_with(end_marker));
    &header[start..header.len() - end_marker.len()]
}
