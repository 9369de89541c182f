//! # Hashing Utilities
//!
//! SHA-256 is the only hash function in the signing contract. It produces the
//! transaction ID and the pre-hash that both signature schemes sign.

use sha2::{Digest, Sha256};

use crate::config::HASH_OUTPUT_LENGTH;

/// A SHA-256 digest.
pub type Digest256 = [u8; HASH_OUTPUT_LENGTH];

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use sigil_protocol::crypto::sha256;
///
/// let hash = sha256(b"sigil");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Digest256 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SHA-256 and return the digest as lowercase hex.
///
/// This is the textual form of a transaction ID.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_deterministic() {
        let a = sha256(b"sigil");
        let b = sha256(b"sigil");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sha256_different_inputs() {
        assert_ne!(sha256(b"sigil"), sha256(b"Sigil"));
    }

    #[test]
    fn hex_form_is_lowercase_and_64_chars() {
        let h = sha256_hex(b"abc");
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(
            h,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
