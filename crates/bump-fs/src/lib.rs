//! Filesystem layer for bump-version
//!
//! Locates the project root and provides the read/write primitives the
//! version editors run on.

pub mod checksum;
pub mod error;
pub mod io;
pub mod path;
pub mod root;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use root::{ProjectRoot, RootMarkers, find_project_root};
