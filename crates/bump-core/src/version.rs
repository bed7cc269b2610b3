//! Release version validation

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap());

/// A release version of the form `X.Y.Z`.
///
/// Exactly three runs of ASCII digits separated by single dots. Pre-release
/// and build metadata are rejected. The original text is kept verbatim so
/// that files receive exactly what was passed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionString(String);

impl VersionString {
    pub fn parse(input: &str) -> Result<Self> {
        if VERSION_PATTERN.is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(Error::InvalidVersion {
                input: input.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Semver view of this version, if the components are representable.
    ///
    /// Components with leading zeros or beyond `u64` yield `None`.
    pub fn to_semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.0).ok()
    }
}

impl FromStr for VersionString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for VersionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
