use crate::error::{EmbedError, EmbedResult};
use crate::header::{render_header, RenderedHeader};
use crate::settings::EmbedSettings;
use deeprose_util::constants::STDLIB_HEADER_FILE_NAME;
use deeprose_util::io::{write_atomic, IoErrorExt};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EmbedStats {
    pub output_path: PathBuf,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub escaped_bytes: usize,
    pub stripped_bytes: usize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CheckOutcome {
    UpToDate,
    Differs,
    Missing,
}

/// Path of the header that gets generated inside `output_dir`.
pub fn header_path(output_dir: &Path) -> PathBuf {
    output_dir.join(STDLIB_HEADER_FILE_NAME)
}

/// Generate `stdlib.h` in `output_dir` from the source at `input_path`, with the default settings.
pub fn embed(input_path: &Path, output_dir: &Path) -> EmbedResult<EmbedStats> {
    embed_with_settings(input_path, output_dir, &EmbedSettings::default())
}

/// Generate `stdlib.h` in `output_dir` from the source at `input_path`.
///
/// The input is read completely before the output is touched, so a missing or unreadable input
/// never creates or modifies the header. The header itself is replaced atomically.
pub fn embed_with_settings(input_path: &Path, output_dir: &Path, settings: &EmbedSettings) -> EmbedResult<EmbedStats> {
    let source = read_source(input_path)?;
    let rendered = render_header(&source, settings);

    let output_path = header_path(output_dir);
    write_atomic(&output_path, &rendered.content).map_err(EmbedError::Output)?;

    let RenderedHeader {
        content,
        escaped_bytes,
        stripped_bytes,
    } = rendered;
    Ok(EmbedStats {
        output_path,
        input_bytes: source.len(),
        output_bytes: content.len(),
        escaped_bytes,
        stripped_bytes,
    })
}

/// Check whether the header in `output_dir` matches what [embed_with_settings] would generate, without writing anything.
pub fn check(input_path: &Path, output_dir: &Path, settings: &EmbedSettings) -> EmbedResult<CheckOutcome> {
    let source = read_source(input_path)?;
    let rendered = render_header(&source, settings);

    let output_path = header_path(output_dir);
    match std::fs::read(&output_path) {
        Ok(existing) if existing == rendered.content => Ok(CheckOutcome::UpToDate),
        Ok(_) => Ok(CheckOutcome::Differs),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(CheckOutcome::Missing),
        Err(e) => Err(EmbedError::Output(e.with_path(output_path))),
    }
}

fn read_source(input_path: &Path) -> EmbedResult<Vec<u8>> {
    std::fs::read(input_path).map_err(|e| EmbedError::Input(e.with_path(input_path)))
}
