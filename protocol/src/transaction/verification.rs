//! Signature verification and the transaction error type.
//!
//! Verification is a yes/no question. Missing signatures, wrong keys,
//! tampered content and corrupted signature bytes all answer `false`. The
//! reason is logged at debug level.

use thiserror::Error;

use super::builder::Transaction;
use crate::crypto::signatures::{SignatureError, VerifierKey};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors from building, encoding, parsing or signing a transaction.
///
/// A failed verification is not one of them.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The canonical encoding could not be produced.
    #[error("canonical serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The signer refused or failed to produce a signature.
    #[error("transaction signing failed: {0}")]
    Signing(#[from] SignatureError),

    /// A signature on the wire could not be decoded.
    #[error("malformed signature: {reason}")]
    MalformedSignature { reason: String },

    /// The wire representation is not a valid transaction.
    #[error("invalid transaction JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

impl Transaction {
    /// Checks the stored signature against the current content and `key`.
    ///
    /// Returns `false` when unsigned, and for any content, key or signature
    /// mismatch. Never returns an error and never panics.
    pub fn verify_signature<K: VerifierKey + ?Sized>(&self, key: &K) -> bool {
        let Some(signature) = self.signature.as_deref() else {
            tracing::debug!("verification failed: transaction is unsigned");
            return false;
        };

        let digest = match self.signing_digest() {
            Ok(digest) => digest,
            Err(e) => {
                tracing::debug!(error = %e, "verification failed: cannot encode transaction");
                return false;
            }
        };

        let valid = key.verify_digest(&digest, signature);
        if !valid {
            tracing::debug!(
                scheme = %key.scheme(),
                digest = %hex::encode(digest),
                "verification failed: signature does not match"
            );
        }
        valid
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::test_keypairs;
    use crate::crypto::Ed25519Keypair;
    use crate::transaction::TransactionBuilder;

    fn sample_tx() -> Transaction {
        TransactionBuilder::new()
            .input("abcd1234", 0)
            .output("recipient_address", 10)
            .build()
    }

    #[test]
    fn unsigned_is_false() {
        let (kp, _) = test_keypairs();
        assert!(!sample_tx().verify_signature(&kp.public_key()));
    }

    #[test]
    fn matching_rsa_key_is_true() {
        let (kp, _) = test_keypairs();
        let mut tx = sample_tx();
        tx.sign(kp).unwrap();
        assert!(tx.verify_signature(&kp.public_key()));
    }

    #[test]
    fn other_rsa_key_is_false() {
        let (kp1, kp2) = test_keypairs();
        let mut tx = sample_tx();
        tx.sign(kp1).unwrap();
        assert!(!tx.verify_signature(&kp2.public_key()));
    }

    #[test]
    fn tampered_amount_is_false() {
        let (kp, _) = test_keypairs();
        let mut tx = sample_tx();
        tx.sign(kp).unwrap();

        tx.outputs[0].amount = 1_000;
        assert!(!tx.verify_signature(&kp.public_key()));
    }

    #[test]
    fn tampered_input_is_false() {
        let (kp, _) = test_keypairs();
        let mut tx = sample_tx();
        tx.sign(kp).unwrap();

        tx.inputs[0].output_index = 1;
        assert!(!tx.verify_signature(&kp.public_key()));
    }

    #[test]
    fn reordered_outputs_are_false() {
        let kp = Ed25519Keypair::generate();
        let mut tx = TransactionBuilder::new()
            .input("abcd1234", 0)
            .output("a", 1)
            .output("b", 2)
            .build();
        tx.sign(&kp).unwrap();

        tx.outputs.swap(0, 1);
        assert!(!tx.verify_signature(&kp.public_key()));
    }

    #[test]
    fn corrupted_signature_is_false() {
        let (kp, _) = test_keypairs();
        let mut tx = sample_tx();
        tx.sign(kp).unwrap();

        let mut corrupted = tx.clone();
        if let Some(sig) = corrupted.signature.as_mut() {
            sig[0] ^= 0x01;
        }
        assert!(!corrupted.verify_signature(&kp.public_key()));

        let mut truncated = tx.clone();
        if let Some(sig) = truncated.signature.as_mut() {
            sig.truncate(10);
        }
        assert!(!truncated.verify_signature(&kp.public_key()));
    }

    #[test]
    fn scheme_mismatch_is_false() {
        let (rsa, _) = test_keypairs();
        let ed = Ed25519Keypair::generate();

        let mut tx = sample_tx();
        tx.sign(rsa).unwrap();
        assert!(!tx.verify_signature(&ed.public_key()));

        let mut tx = sample_tx();
        tx.sign(&ed).unwrap();
        assert!(!tx.verify_signature(&rsa.public_key()));
    }

    #[test]
    fn verifies_through_trait_object() {
        let kp = Ed25519Keypair::generate();
        let mut tx = sample_tx();
        tx.sign(&kp).unwrap();

        let key: Box<dyn VerifierKey> = Box::new(kp.public_key());
        assert!(tx.verify_signature(&key));
        assert!(tx.verify_signature(key.as_ref()));
    }

    #[test]
    fn error_messages() {
        let err = TransactionError::MalformedSignature {
            reason: "odd length".to_string(),
        };
        assert_eq!(err.to_string(), "malformed signature: odd length");

        let err: TransactionError = SignatureError::Signing("no".to_string()).into();
        assert_eq!(
            err.to_string(),
            "transaction signing failed: signing failed: no"
        );
    }
}
