use crate::escape::{escape_c_string, normalize_newlines, strip_line_comments};
use crate::settings::{EmbedSettings, HeaderFormat, NewlineMode};
use deeprose_util::constants::{STDLIB_DEFAULT_INPUT, STDLIB_HEADER_GUARD, STDLIB_SYMBOL_NAME};
use deeprose_util::{bwrite, bwriteln};
use std::borrow::Cow;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderedHeader {
    pub content: Vec<u8>,
    /// Number of source bytes that needed an escape sequence.
    pub escaped_bytes: usize,
    /// Number of source bytes dropped as comments.
    pub stripped_bytes: usize,
}

/// Render the full header for the given stdlib source.
///
/// The result only depends on `source` and `settings`, so rendering the same input twice gives identical bytes.
pub fn render_header(source: &[u8], settings: &EmbedSettings) -> RenderedHeader {
    let EmbedSettings { format, newlines } = *settings;

    let source = match newlines {
        NewlineMode::Preserve => Cow::Borrowed(source),
        NewlineMode::Universal => normalize_newlines(source),
    };

    match format {
        HeaderFormat::StringLiteral => render_string_literal(&source),
        HeaderFormat::ByteArray => render_byte_array(&source),
    }
}

fn render_string_literal(source: &[u8]) -> RenderedHeader {
    let mut f = Vec::with_capacity(source.len() + 256);

    bwriteln!(f);
    bwriteln!(f, "#ifndef {STDLIB_HEADER_GUARD}");
    bwriteln!(f, "#define {STDLIB_HEADER_GUARD}");
    bwriteln!(f);
    bwriteln!(f, "/* this code was generated using the script create_stdlib_header.py */");
    bwriteln!(f);
    bwrite!(f, "const char * const {STDLIB_SYMBOL_NAME} = {{\"");
    let escaped_bytes = escape_c_string(source, &mut f);
    bwriteln!(f, "\"}};");
    bwriteln!(f);
    bwriteln!(f, "#endif");

    RenderedHeader {
        content: f,
        escaped_bytes,
        stripped_bytes: 0,
    }
}

fn render_byte_array(source: &[u8]) -> RenderedHeader {
    let stripped = strip_line_comments(source);
    let mut f = Vec::with_capacity(stripped.len() * 5 + 256);

    bwriteln!(f, "#ifndef {STDLIB_HEADER_GUARD}");
    bwriteln!(f, "#define {STDLIB_HEADER_GUARD}");
    bwriteln!(f);
    bwriteln!(f, "/* this code was generated using the \"script\" create_stdlib_header.c */");
    bwriteln!(f, "/* look at {STDLIB_DEFAULT_INPUT} for original program */");
    bwriteln!(f);
    bwrite!(f, "const char {STDLIB_SYMBOL_NAME}[] = {{");
    for &b in &stripped {
        // printed as (signed) `char` values, so bytes above 0x7f come out negative
        bwrite!(f, "{}, ", b as i8);
    }
    bwriteln!(f, "}};");
    bwriteln!(f);
    bwriteln!(f, "#endif");

    RenderedHeader {
        content: f,
        escaped_bytes: 0,
        stripped_bytes: source.len() - stripped.len(),
    }
}
