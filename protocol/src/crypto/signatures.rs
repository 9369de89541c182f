//! # Digital Signatures
//!
//! The transaction layer never talks to a concrete crypto library. It only
//! knows two capabilities:
//!
//! - [`Signer`] — something holding private key material that can turn a
//!   SHA-256 digest into signature bytes.
//! - [`VerifierKey`] — something holding public key material that can say
//!   yes or no to a (digest, signature) pair.
//!
//! A public key cannot sign because it simply does not implement [`Signer`].
//! The RSA provider lives in [`super::keys`], the Ed25519 one in
//! [`super::ed25519`].

use std::fmt;

use thiserror::Error;

use super::hash::Digest256;
use crate::config::{ED25519_SIGNATURE_SCHEME, RSA_SIGNATURE_SCHEME};

/// Errors during signature production.
///
/// Verification has no error type on purpose: a bad signature is a `false`,
/// not an exceptional condition.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("signing failed: {0}")]
    Signing(String),
}

/// The signature schemes this crate knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    /// RSASSA-PKCS1-v1_5 over a SHA-256 digest.
    RsaPkcs1v15Sha256,
    /// Ed25519 over the 32-byte SHA-256 digest.
    Ed25519,
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureScheme::RsaPkcs1v15Sha256 => write!(f, "{}/SHA-256", RSA_SIGNATURE_SCHEME),
            SignatureScheme::Ed25519 => write!(f, "{}", ED25519_SIGNATURE_SCHEME),
        }
    }
}

/// Private-key capability: produce a signature over a SHA-256 digest.
pub trait Signer {
    /// The scheme the produced signatures belong to.
    fn scheme(&self) -> SignatureScheme;

    /// Sign a 32-byte digest.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::Signing`] when the key cannot produce a
    /// signature (e.g. the modulus is too small for the padding).
    fn sign_digest(&self, digest: &Digest256) -> Result<Vec<u8>, SignatureError>;
}

/// Public-key capability: check a signature over a SHA-256 digest.
pub trait VerifierKey {
    /// The scheme this key verifies.
    fn scheme(&self) -> SignatureScheme;

    /// Returns `true` only if `signature` is valid for `digest` under this key.
    ///
    /// Malformed signature bytes are a `false`, never a panic or an error.
    fn verify_digest(&self, digest: &Digest256, signature: &[u8]) -> bool;
}

impl<T: Signer + ?Sized> Signer for &T {
    fn scheme(&self) -> SignatureScheme {
        (**self).scheme()
    }

    fn sign_digest(&self, digest: &Digest256) -> Result<Vec<u8>, SignatureError> {
        (**self).sign_digest(digest)
    }
}

impl<T: Signer + ?Sized> Signer for Box<T> {
    fn scheme(&self) -> SignatureScheme {
        (**self).scheme()
    }

    fn sign_digest(&self, digest: &Digest256) -> Result<Vec<u8>, SignatureError> {
        (**self).sign_digest(digest)
    }
}

impl<T: VerifierKey + ?Sized> VerifierKey for &T {
    fn scheme(&self) -> SignatureScheme {
        (**self).scheme()
    }

    fn verify_digest(&self, digest: &Digest256, signature: &[u8]) -> bool {
        (**self).verify_digest(digest, signature)
    }
}

impl<T: VerifierKey + ?Sized> VerifierKey for Box<T> {
    fn scheme(&self) -> SignatureScheme {
        (**self).scheme()
    }

    fn verify_digest(&self, digest: &Digest256, signature: &[u8]) -> bool {
        (**self).verify_digest(digest, signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::sha256;
    use crate::crypto::Ed25519Keypair;

    /// A signer whose backing key has been revoked.
    struct RevokedSigner;

    impl Signer for RevokedSigner {
        fn scheme(&self) -> SignatureScheme {
            SignatureScheme::RsaPkcs1v15Sha256
        }

        fn sign_digest(&self, _digest: &Digest256) -> Result<Vec<u8>, SignatureError> {
            Err(SignatureError::Signing("key revoked".to_string()))
        }
    }

    #[test]
    fn boxed_trait_objects_delegate() {
        let kp = Ed25519Keypair::generate();
        let signer: Box<dyn Signer> = Box::new(kp.clone());
        let verifier: Box<dyn VerifierKey> = Box::new(kp.public_key());

        let digest = sha256(b"boxed");
        let sig = signer.sign_digest(&digest).unwrap();
        assert!(verifier.verify_digest(&digest, &sig));
        assert_eq!(signer.scheme(), verifier.scheme());
    }

    #[test]
    fn failing_signer_reports_reason() {
        let err = RevokedSigner.sign_digest(&sha256(b"x")).unwrap_err();
        assert_eq!(err.to_string(), "signing failed: key revoked");
    }

    #[test]
    fn scheme_display() {
        assert_eq!(
            SignatureScheme::RsaPkcs1v15Sha256.to_string(),
            "RSASSA-PKCS1-v1_5/SHA-256"
        );
        assert_eq!(SignatureScheme::Ed25519.to_string(), "Ed25519");
    }
}
