/// Layout of the generated header.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, serde::Deserialize)]
pub enum HeaderFormat {
    /// `const char * const stdlib = {"..."};`, with the source as an escaped string literal.
    #[default]
    #[serde(rename = "string")]
    StringLiteral,
    /// `const char stdlib[] = {..., };`, with the source as decimal byte values and `;` line comments removed.
    #[serde(rename = "bytes")]
    ByteArray,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineMode {
    /// Keep the input bytes exactly as they are.
    #[default]
    Preserve,
    /// Translate `\r\n` and lone `\r` to `\n` before embedding.
    Universal,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct EmbedSettings {
    pub format: HeaderFormat,
    pub newlines: NewlineMode,
}
