//! Transaction signing.
//!
//! Signing is a separate step from building because the key may not be
//! available at construction time. The signed message is the SHA-256 digest
//! of the canonical encoding without the signature.

use super::builder::Transaction;
use super::verification::TransactionError;
use crate::crypto::signatures::{SignatureError, Signer};

impl Transaction {
    /// Signs the transaction in place.
    ///
    /// 1. `digest = sha256(serialize(false))`
    /// 2. `signature = signer.sign_digest(digest)`
    /// 3. store the signature and `id = hash()`
    ///
    /// Signing an already-signed transaction is allowed and overwrites the
    /// previous signature. Since the ID is content-addressed it stays the same
    /// unless the content changed in between.
    ///
    /// # Errors
    ///
    /// [`TransactionError::Signing`] if the signer fails or returns an empty
    /// signature. On error the transaction is left exactly as it was.
    pub fn sign<S: Signer + ?Sized>(&mut self, signer: &S) -> Result<(), TransactionError> {
        let digest = self.signing_digest()?;
        let signature = signer.sign_digest(&digest)?;
        if signature.is_empty() {
            return Err(SignatureError::Signing(
                "signer returned an empty signature".to_string(),
            )
            .into());
        }

        let id = hex::encode(digest);
        if self.is_signed() {
            tracing::debug!(txid = %id, "re-signing transaction, previous signature discarded");
        }

        tracing::debug!(
            txid = %id,
            scheme = %signer.scheme(),
            signature_len = signature.len(),
            "transaction signed"
        );

        self.signature = Some(signature);
        self.id = Some(id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
