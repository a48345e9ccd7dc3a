//! Content hashing for stable identities.
//!
//! Rule sets and participant biographies are identified by the SHA-256 of
//! their text so the same content always yields the same name.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest of `text`.
pub fn content_hash(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_sha256_hex() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(content_hash("rules"), content_hash("rules"));
        assert_ne!(content_hash("rules"), content_hash("rules "));
    }

    #[test]
    fn hash_format() {
        let hash = content_hash("Deployment Directive: hold the line");
        assert_eq!(hash.len(), 64, "SHA-256 should be 64 hex chars");
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
