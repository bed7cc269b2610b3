//! [`TestProject`] builder: a temporary tree shaped like the desktop app and
//! daemon repository whose versions the tool rewrites.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const ROOT_PACKAGE_JSON: &str = r#"{
  "name": "uti",
  "version": "0.1.0",
  "private": true,
  "workspaces": [
    "app"
  ]
}
"#;

pub const APP_PACKAGE_JSON: &str = r#"{
  "name": "uti-app",
  "version": "0.1.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "tauri": "tauri"
  }
}
"#;

pub const TAURI_CONF_JSON: &str = r#"{
  "$schema": "https://schema.tauri.app/config/2",
  "productName": "uti",
  "version": "0.1.0",
  "identifier": "dev.uti.app",
  "bundle": {
    "active": true
  }
}
"#;

pub const APP_CARGO_TOML: &str = r#"[package]
name = "uti"
version = "0.1.0"
edition = "2021"

[dependencies]
tauri = { version = "2", features = [] }
serde = { version = "1", features = ["derive"] }
"#;

pub const DAEMON_CARGO_TOML: &str = r#"[package]
name = "uti-daemon"
version = "0.1.0"
edition = "2021"

[dependencies]
evdev = "0.12"
"#;

pub const DAEMON_SPEC: &str = "Name:           uti-daemon
Version:        0.1.0
Release:        1%{?dist}
Summary:        Input helper daemon for uti
License:        MIT

%description
Background daemon used by the uti desktop app.
";

/// A temporary project root with all six versioned files in place.
///
/// # Example
///
/// ```rust,no_run
/// use bump_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write("daemon/Cargo.toml", "[package]\nversion = \"1.0.0\"\n");
/// assert!(project.read("daemon/Cargo.toml").contains("1.0.0"));
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create the full project layout, every file at version `0.1.0`.
    pub fn new() -> Self {
        let project = Self::empty();
        project.write(
            "Cargo.toml",
            "[workspace]\nmembers = [\"app/src-tauri\", \"daemon\"]\nresolver = \"2\"\n",
        );
        project.write("package.json", ROOT_PACKAGE_JSON);
        project.write("app/package.json", APP_PACKAGE_JSON);
        project.write("app/src-tauri/tauri.conf.json", TAURI_CONF_JSON);
        project.write("app/src-tauri/Cargo.toml", APP_CARGO_TOML);
        project.write("daemon/Cargo.toml", DAEMON_CARGO_TOML);
        project.write("daemon/uti-daemon.spec", DAEMON_SPEC);
        project
    }

    /// An empty temporary directory with no root markers.
    pub fn empty() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to a root-relative file, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("TestProject::read: {relative}: {e}"))
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.path(relative)).unwrap();
    }

    /// Contents of every default target, in table order.
    pub fn snapshot(&self) -> Vec<String> {
        Self::TARGETS.iter().map(|rel| self.read(rel)).collect()
    }

    /// Root-relative paths of the six versioned files.
    pub const TARGETS: [&'static str; 6] = [
        "package.json",
        "app/package.json",
        "app/src-tauri/tauri.conf.json",
        "app/src-tauri/Cargo.toml",
        "daemon/Cargo.toml",
        "daemon/uti-daemon.spec",
    ];
}
