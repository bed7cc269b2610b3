//! JSON manifest editor (`package.json`, `tauri.conf.json`)

use serde_json::{Map, Value};

use super::VersionEditor;
use crate::error::EditError;
use crate::format::FileFormat;
use crate::version::VersionString;

const VERSION_KEY: &str = "version";

/// Sets the top-level `"version"` key and re-serializes the document.
///
/// Output uses two-space indentation and ends with a newline. Key order is
/// kept as read; any other formatting of the original is not.
#[derive(Debug, Default)]
pub struct JsonEditor;

impl JsonEditor {
    pub fn new() -> Self {
        Self
    }

    fn parse(source: &str) -> Result<Map<String, Value>, EditError> {
        let value: Value = serde_json::from_str(source)
            .map_err(|e| EditError::malformed(FileFormat::JsonManifest, e.to_string()))?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(EditError::malformed(
                FileFormat::JsonManifest,
                "root must be an object",
            )),
        }
    }
}

impl VersionEditor for JsonEditor {
    fn current_version(&self, source: &str) -> Result<Option<String>, EditError> {
        let map = Self::parse(source)?;
        Ok(map
            .get(VERSION_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn apply(&self, source: &str, version: &VersionString) -> Result<String, EditError> {
        let mut map = Self::parse(source)?;
        map.insert(
            VERSION_KEY.to_string(),
            Value::String(version.as_str().to_string()),
        );

        let mut rendered = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| EditError::malformed(FileFormat::JsonManifest, e.to_string()))?;
        rendered.push('\n');
        Ok(rendered)
    }
}
