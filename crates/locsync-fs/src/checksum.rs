//! SHA-256 checksum utilities
//!
//! A single canonical checksum format (`sha256:<hex>`) is used for UI
//! resource fingerprints.

use sha2::{Digest, Sha256};

use crate::{NormalizedPath, Result, io};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of raw bytes.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
pub fn compute_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn compute_file_checksum(path: &NormalizedPath) -> Result<String> {
    let content = io::read_bytes(path)?;
    Ok(compute_checksum(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_has_prefix() {
        let checksum = compute_checksum(b"hello world");
        assert!(checksum.starts_with("sha256:"));
    }

    #[test]
    fn different_content_different_checksum() {
        let a = compute_checksum(b"aaa");
        let b = compute_checksum(b"bbb");
        assert_ne!(a, b);
    }

    #[test]
    fn checksum_known_value() {
        let checksum = compute_checksum(b"hello world");
        assert_eq!(
            checksum,
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn file_checksum_matches_byte_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("Main.xib"));
        std::fs::write(path.to_native(), "hello world").unwrap();

        let file_cs = compute_file_checksum(&path).unwrap();
        assert_eq!(file_cs, compute_checksum(b"hello world"));
    }
}
