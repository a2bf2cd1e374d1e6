use clap::{Parser, ValueEnum};
use deeprose_std::settings::{HeaderFormat, NewlineMode};
use deeprose_util::constants::DEEPROSE_VERSION;
use deeprose_util::{deeprose_default_input_macro, deeprose_manifest_file_name_macro};
use std::path::PathBuf;

/// Generate the C header that embeds the deeprose stdlib source into the interpreter.
#[derive(Parser, Debug)]
#[command(version=DEEPROSE_VERSION)]
pub struct Args {
    /// Directory in which `stdlib.h` is created or overwritten.
    pub output_dir: PathBuf,

    // input
    #[arg(long, help = concat!("Stdlib source file [default: ", deeprose_default_input_macro!(), "]"))]
    pub input: Option<PathBuf>,
    #[arg(long, help = concat!("Manifest file, by default `", deeprose_manifest_file_name_macro!(), "` is searched for in the parent directories"))]
    pub manifest: Option<PathBuf>,

    // output
    #[arg(long, value_enum)]
    pub format: Option<ArgsHeaderFormat>,
    #[arg(long, value_enum)]
    pub newlines: Option<ArgsNewlineMode>,

    /// Don't write anything, fail if the existing header is missing or out of date.
    #[arg(long)]
    pub check: bool,
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Copy, Clone)]
pub enum ArgsHeaderFormat {
    /// Escaped string literal
    String,
    /// Array of byte values, with `;` comments removed
    Bytes,
}

#[derive(ValueEnum, Debug, Copy, Clone)]
pub enum ArgsNewlineMode {
    Preserve,
    Universal,
}

impl From<ArgsHeaderFormat> for HeaderFormat {
    fn from(value: ArgsHeaderFormat) -> Self {
        match value {
            ArgsHeaderFormat::String => HeaderFormat::StringLiteral,
            ArgsHeaderFormat::Bytes => HeaderFormat::ByteArray,
        }
    }
}

impl From<ArgsNewlineMode> for NewlineMode {
    fn from(value: ArgsNewlineMode) -> Self {
        match value {
            ArgsNewlineMode::Preserve => NewlineMode::Preserve,
            ArgsNewlineMode::Universal => NewlineMode::Universal,
        }
    }
}
