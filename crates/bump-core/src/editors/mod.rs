//! Format-specific version editors

mod json;
mod manifest;
mod spec;

pub use self::json::JsonEditor;
pub use self::manifest::ManifestEditor;
pub use self::spec::SpecEditor;

use crate::error::EditError;
use crate::version::VersionString;

/// Reads and rewrites the version stored in one file format.
///
/// Editors work on whole-file text; I/O stays with the caller.
pub trait VersionEditor: Send + Sync {
    /// The version currently recorded in `source`, if there is one.
    fn current_version(&self, source: &str) -> Result<Option<String>, EditError>;

    /// Return `source` with its version replaced by `version`.
    fn apply(&self, source: &str, version: &VersionString) -> Result<String, EditError>;
}

/// Replace the first match of `pattern` in `source`.
///
/// Returns `None` when nothing matches; bytes outside the match are copied
/// through untouched.
fn replace_first(source: &str, pattern: &regex::Regex, replacement: &str) -> Option<String> {
    let found = pattern.find(source)?;
    let mut out = String::with_capacity(source.len() + replacement.len());
    out.push_str(&source[..found.start()]);
    out.push_str(replacement);
    out.push_str(&source[found.end()..]);
    Some(out)
}
