use crate::manifest::Manifest;
use crate::settings::{EmbedSettings, HeaderFormat, NewlineMode};
use std::path::{Path, PathBuf};

#[test]
fn test_full_manifest() {
    let src = r#"
[embed]
input = "lib/stdlib.deeprose"
format = "bytes"
newlines = "universal"
"#;
    let manifest = Manifest::from_toml(src).unwrap();
    let embed = &manifest.embed;

    assert_eq!(
        embed.input_path(Path::new("/project")),
        Some(PathBuf::from("/project/lib/stdlib.deeprose"))
    );
    assert_eq!(
        embed.settings(),
        EmbedSettings {
            format: HeaderFormat::ByteArray,
            newlines: NewlineMode::Universal,
        }
    );
}

#[test]
fn test_empty_manifest() {
    let manifest = Manifest::from_toml("").unwrap();
    assert_eq!(manifest.embed.input_path(Path::new("/project")), None);
    assert_eq!(manifest.embed.settings(), EmbedSettings::default());
}

#[test]
fn test_partial_manifest() {
    let manifest = Manifest::from_toml("[embed]\nformat = \"string\"\n").unwrap();
    assert_eq!(manifest.embed.settings().format, HeaderFormat::StringLiteral);
    assert_eq!(manifest.embed.settings().newlines, NewlineMode::Preserve);
}

#[test]
fn test_unknown_key_rejected() {
    assert!(Manifest::from_toml("[embed]\noutput = \"include\"\n").is_err());
    assert!(Manifest::from_toml("[other]\n").is_err());
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Manifest::from_toml("[embed]\nformat = \"hex\"\n").is_err());
    assert!(Manifest::from_toml("[embed]\nnewlines = \"crlf\"\n").is_err());
}
