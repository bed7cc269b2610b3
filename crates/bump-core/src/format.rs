//! Target file formats

use serde::Serialize;

use crate::editors::{JsonEditor, ManifestEditor, SpecEditor, VersionEditor};

/// How a target file stores its version.
///
/// The format of a target is declared in its [`TargetTable`](crate::TargetTable)
/// entry and never inferred from the file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileFormat {
    /// JSON object with a top-level `"version"` string
    JsonManifest,
    /// TOML manifest with a `version = "..."` line
    TomlManifest,
    /// RPM spec file with a `Version:` header
    SpecFile,
}

impl FileFormat {
    /// The editor that applies this format's substitution rule.
    pub fn editor(self) -> Box<dyn VersionEditor> {
        match self {
            Self::JsonManifest => Box::new(JsonEditor::new()),
            Self::TomlManifest => Box::new(ManifestEditor::new()),
            Self::SpecFile => Box::new(SpecEditor::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JsonManifest => "JSON manifest",
            Self::TomlManifest => "TOML manifest",
            Self::SpecFile => "RPM spec",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
