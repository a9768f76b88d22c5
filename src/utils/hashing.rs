//! Stable content digests for generated artifacts

use sha2::{Digest, Sha256};

/// Short SHA-256 digest of the exact bytes that get written.
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)[..16].to_string()
}
