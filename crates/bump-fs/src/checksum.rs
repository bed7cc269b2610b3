//! SHA-256 checksum utilities
//!
//! Checksums (`sha256:<hex>`) let the synchronizer detect a target that was
//! modified between planning and writing.

use sha2::{Digest, Sha256};

use crate::{Error, NormalizedPath, Result};

const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of string content.
pub fn compute_content_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
pub fn compute_file_checksum(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let content = std::fs::read(&native_path).map_err(|e| Error::io(&native_path, e))?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{}{:x}", PREFIX, hasher.finalize()))
}
