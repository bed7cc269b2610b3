//! RPM spec editor

use std::sync::LazyLock;

use regex::Regex;

use super::{VersionEditor, replace_first};
use crate::error::EditError;
use crate::version::VersionString;

// CRLF mode keeps `.` and `$` off the `\r` of Windows line endings.
static VERSION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^Version:[ \t]+(.*)$").unwrap());

/// Label plus padding, aligned with the other spec headers.
const HEADER_PREFIX: &str = "Version:        ";

/// Rewrites the first `Version:` header line of an RPM spec.
#[derive(Debug, Default)]
pub struct SpecEditor;

impl SpecEditor {
    pub fn new() -> Self {
        Self
    }
}

impl VersionEditor for SpecEditor {
    fn current_version(&self, source: &str) -> Result<Option<String>, EditError> {
        Ok(VERSION_HEADER
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim_end().to_string())
            .filter(|value| !value.is_empty()))
    }

    fn apply(&self, source: &str, version: &VersionString) -> Result<String, EditError> {
        let replacement = format!("{HEADER_PREFIX}{version}");
        replace_first(source, &VERSION_HEADER, &replacement)
            .ok_or_else(|| EditError::pattern_not_found("Version: ..."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn v(s: &str) -> VersionString {
        VersionString::parse(s).unwrap()
    }

    const SPEC: &str = "Name:           uti-daemon
Version:        0.1.0
Release:        1%{?dist}
Summary:        Input daemon for uti

%description
  Version: indented lines are not headers
";

    #[test]
    fn rewrites_header_with_fixed_padding() {
        let result = SpecEditor::new().apply(SPEC, &v("0.2.0")).unwrap();
        assert_eq!(result, SPEC.replacen("Version:        0.1.0", "Version:        0.2.0", 1));
    }

    #[test]
    fn normalizes_irregular_padding() {
        let source = "Name: x\nVersion:\t0.1.0  \nRelease: 1\n";
        let result = SpecEditor::new().apply(source, &v("1.0.0")).unwrap();
        assert_eq!(result, "Name: x\nVersion:        1.0.0\nRelease: 1\n");
    }

    #[test]
    fn keeps_crlf_terminator() {
        let source = "Name: x\r\nVersion: 0.1.0\r\nRelease: 1\r\n";
        let result = SpecEditor::new().apply(source, &v("0.2.0")).unwrap();
        assert_eq!(result, "Name: x\r\nVersion:        0.2.0\r\nRelease: 1\r\n");
    }

    #[test]
    fn header_must_start_the_line() {
        let source = "Name: x\n  Version: 0.1.0\n";
        let err = SpecEditor::new().apply(source, &v("0.2.0")).unwrap_err();
        assert_eq!(err, EditError::pattern_not_found("Version: ..."));
    }

    #[test]
    fn header_without_whitespace_is_not_matched() {
        let err = SpecEditor::new().apply("Version:0.1.0\n", &v("0.2.0")).unwrap_err();
        assert!(matches!(err, EditError::PatternNotFound { .. }));
    }

    #[test]
    fn current_version_trims_padding() {
        let editor = SpecEditor::new();
        assert_eq!(editor.current_version(SPEC).unwrap(), Some("0.1.0".to_string()));
        assert_eq!(editor.current_version("Name: x\n").unwrap(), None);
    }
}
