//! The table of files a release bump rewrites

use crate::format::FileFormat;

/// One file to update: a root-relative, slash-separated path and its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    pub path: String,
    pub format: FileFormat,
}

impl TargetFile {
    pub fn new(path: impl Into<String>, format: FileFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }
}

/// Ordered list of target files.
///
/// Order only affects the order of writes and of console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTable {
    targets: Vec<TargetFile>,
}

impl TargetTable {
    pub fn new(targets: Vec<TargetFile>) -> Self {
        Self { targets }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TargetFile> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }
}

impl Default for TargetTable {
    /// The six version locations of the desktop app and its daemon.
    fn default() -> Self {
        use FileFormat::{JsonManifest, SpecFile, TomlManifest};

        Self::new(vec![
            TargetFile::new("package.json", JsonManifest),
            TargetFile::new("app/package.json", JsonManifest),
            TargetFile::new("app/src-tauri/tauri.conf.json", JsonManifest),
            TargetFile::new("app/src-tauri/Cargo.toml", TomlManifest),
            TargetFile::new("daemon/Cargo.toml", TomlManifest),
            TargetFile::new("daemon/uti-daemon.spec", SpecFile),
        ])
    }
}

impl<'a> IntoIterator for &'a TargetTable {
    type Item = &'a TargetFile;
    type IntoIter = std::slice::Iter<'a, TargetFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
