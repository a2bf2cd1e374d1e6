use crate::settings::{EmbedSettings, HeaderFormat, NewlineMode};
use std::path::{Path, PathBuf};

/// Contents of a `deeprose.toml` project manifest.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub embed: ManifestEmbed,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEmbed {
    /// Stdlib source, relative to the directory containing the manifest.
    pub input: Option<PathBuf>,
    pub format: Option<HeaderFormat>,
    pub newlines: Option<NewlineMode>,
}

impl Manifest {
    pub fn from_toml(src: &str) -> Result<Manifest, toml::de::Error> {
        toml::from_str(src)
    }
}

impl ManifestEmbed {
    /// The input path, resolved against the manifest directory.
    pub fn input_path(&self, manifest_parent: &Path) -> Option<PathBuf> {
        self.input.as_ref().map(|input| manifest_parent.join(input))
    }

    /// Settings from the manifest, with defaults for anything left unspecified.
    pub fn settings(&self) -> EmbedSettings {
        let default = EmbedSettings::default();
        EmbedSettings {
            format: self.format.unwrap_or(default.format),
            newlines: self.newlines.unwrap_or(default.newlines),
        }
    }
}
