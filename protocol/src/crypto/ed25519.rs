//! # Ed25519 Key Material
//!
//! A drop-in substitute for the RSA provider. Transactions signed with it use
//! the same canonical digest; only the scheme changes. Ed25519 signs the
//! 32-byte SHA-256 digest directly as its message.

use std::fmt;

use ed25519_dalek::{
    Signature as DalekSignature, Signer as DalekSigner, SigningKey, Verifier as DalekVerifier,
    VerifyingKey,
};
use rand::rngs::OsRng;

use super::hash::Digest256;
use super::keys::KeyError;
use super::signatures::{SignatureError, SignatureScheme, Signer, VerifierKey};
use crate::config::{ED25519_KEY_LENGTH, ED25519_SIGNATURE_LENGTH};

/// An Ed25519 signing keypair.
pub struct Ed25519Keypair {
    signing_key: SigningKey,
}

/// The public half of an Ed25519 keypair.
#[derive(Clone, PartialEq, Eq)]
pub struct Ed25519PublicKey {
    verifying_key: VerifyingKey,
}

impl Ed25519Keypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Constructs a keypair deterministically from a 32-byte seed.
    pub fn from_seed(seed: &[u8; ED25519_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Returns the public key associated with this keypair.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey {
            verifying_key: self.signing_key.verifying_key(),
        }
    }
}

impl Clone for Ed25519Keypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl Signer for Ed25519Keypair {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    fn sign_digest(&self, digest: &Digest256) -> Result<Vec<u8>, SignatureError> {
        Ok(self.signing_key.sign(digest).to_bytes().to_vec())
    }
}

impl VerifierKey for Ed25519Keypair {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    fn verify_digest(&self, digest: &Digest256, signature: &[u8]) -> bool {
        self.public_key().verify_digest(digest, signature)
    }
}

impl fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Keypair(pub={})", self.public_key().to_hex())
    }
}

impl Ed25519PublicKey {
    /// Parse raw 32-byte public key material.
    ///
    /// Rejects wrong lengths and byte strings that are not valid curve points.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let arr: [u8; ED25519_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            KeyError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                ED25519_KEY_LENGTH,
                bytes.len()
            ))
        })?;
        let verifying_key = VerifyingKey::from_bytes(&arr)
            .map_err(|e| KeyError::InvalidPublicKey(e.to_string()))?;
        Ok(Self { verifying_key })
    }

    /// Parse a hex-encoded public key.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|e| KeyError::InvalidPublicKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Hex-encoded representation. 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.verifying_key.to_bytes())
    }
}

impl VerifierKey for Ed25519PublicKey {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    fn verify_digest(&self, digest: &Digest256, signature: &[u8]) -> bool {
        let Ok(sig_bytes) = <[u8; ED25519_SIGNATURE_LENGTH]>::try_from(signature) else {
            return false;
        };
        let sig = DalekSignature::from_bytes(&sig_bytes);
        self.verifying_key.verify(digest, &sig).is_ok()
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519PublicKey({})", &self.to_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::sha256;

    #[test]
    fn sign_verify_roundtrip() {
        let kp = Ed25519Keypair::generate();
        let digest = sha256(b"pay 10");
        let sig = kp.sign_digest(&digest).unwrap();
        assert_eq!(sig.len(), ED25519_SIGNATURE_LENGTH);
        assert!(kp.public_key().verify_digest(&digest, &sig));
    }

    #[test]
    fn wrong_key_fails() {
        let kp1 = Ed25519Keypair::generate();
        let kp2 = Ed25519Keypair::generate();
        let digest = sha256(b"pay 10");
        let sig = kp1.sign_digest(&digest).unwrap();
        assert!(!kp2.public_key().verify_digest(&digest, &sig));
    }

    #[test]
    fn truncated_signature_is_false() {
        let kp = Ed25519Keypair::generate();
        let digest = sha256(b"pay 10");
        let sig = kp.sign_digest(&digest).unwrap();
        assert!(!kp.public_key().verify_digest(&digest, &sig[..63]));
    }

    #[test]
    fn from_seed_is_deterministic() {
        let seed = [7u8; 32];
        let a = Ed25519Keypair::from_seed(&seed);
        let b = Ed25519Keypair::from_seed(&seed);
        assert_eq!(a.public_key(), b.public_key());
    }

    #[test]
    fn hex_roundtrip() {
        let kp = Ed25519Keypair::generate();
        let pk = kp.public_key();
        let parsed = Ed25519PublicKey::from_hex(&pk.to_hex()).unwrap();
        assert_eq!(parsed, pk);
    }

    #[test]
    fn malformed_public_key_is_an_error() {
        assert!(Ed25519PublicKey::from_hex("zz").is_err());
        assert!(Ed25519PublicKey::from_bytes(&[1, 2, 3]).is_err());
    }
}
