use std::borrow::Cow;

/// Append `input` to `out`, escaped so it can be placed between double quotes in a C string literal.
///
/// Newlines become the two characters `\n`, so the literal stays on a single source line.
/// Backslashes and both quote characters get a backslash prefix.
/// Single quotes don't strictly need one inside a double-quoted literal,
/// but existing headers were generated with it and the output is kept byte-identical.
/// Everything else, including non-ASCII bytes, is copied as-is.
///
/// Returns the number of input bytes that were escaped.
pub fn escape_c_string(input: &[u8], out: &mut Vec<u8>) -> usize {
    out.reserve(input.len());

    let mut escaped = 0;
    for &b in input {
        match b {
            b'\n' => {
                out.extend_from_slice(b"\\n");
                escaped += 1;
            }
            b'\\' | b'"' | b'\'' => {
                out.push(b'\\');
                out.push(b);
                escaped += 1;
            }
            _ => out.push(b),
        }
    }
    escaped
}

/// Translate `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(input: &[u8]) -> Cow<'_, [u8]> {
    if !input.contains(&b'\r') {
        return Cow::Borrowed(input);
    }

    let mut result = Vec::with_capacity(input.len());
    let mut iter = input.iter().copied().peekable();
    while let Some(b) = iter.next() {
        if b == b'\r' {
            iter.next_if_eq(&b'\n');
            result.push(b'\n');
        } else {
            result.push(b);
        }
    }
    Cow::Owned(result)
}

/// Remove `;` line comments: everything from a `;` up to and including the next newline is dropped.
///
/// This is purely byte-based, a `;` inside a deeprose string literal also starts a comment.
pub fn strip_line_comments(input: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(input.len());
    let mut in_comment = false;
    for &b in input {
        if in_comment {
            if b == b'\n' {
                in_comment = false;
            }
        } else if b == b';' {
            in_comment = true;
        } else {
            result.push(b);
        }
    }
    result
}
