//! TOML manifest editor (`Cargo.toml`)

use std::sync::LazyLock;

use regex::Regex;
use toml_edit::DocumentMut;

use super::{VersionEditor, replace_first};
use crate::error::EditError;
use crate::format::FileFormat;
use crate::version::VersionString;

static VERSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^version = "([^"]+)""#).unwrap());

/// Rewrites the first line-anchored `version = "..."` assignment.
///
/// Only the matched assignment changes; comments, ordering and line endings
/// elsewhere are preserved byte for byte. The document must parse as TOML
/// both before and after the substitution.
#[derive(Debug, Default)]
pub struct ManifestEditor;

impl ManifestEditor {
    pub fn new() -> Self {
        Self
    }

    fn validate(source: &str) -> Result<(), EditError> {
        source
            .parse::<DocumentMut>()
            .map(|_| ())
            .map_err(|e| EditError::malformed(FileFormat::TomlManifest, e.to_string()))
    }
}

impl VersionEditor for ManifestEditor {
    fn current_version(&self, source: &str) -> Result<Option<String>, EditError> {
        Self::validate(source)?;
        Ok(VERSION_LINE
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()))
    }

    fn apply(&self, source: &str, version: &VersionString) -> Result<String, EditError> {
        Self::validate(source)?;
        let replacement = format!("version = \"{version}\"");
        let updated = replace_first(source, &VERSION_LINE, &replacement)
            .ok_or_else(|| EditError::pattern_not_found(r#"version = "...""#))?;
        Self::validate(&updated)?;
        Ok(updated)
    }
}
