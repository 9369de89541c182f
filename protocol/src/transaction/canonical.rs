//! Canonical serialization, hashing and wire parsing.
//!
//! The canonical form is compact JSON with keys sorted at every level:
//!
//! ```text
//! {"inputs":[{"output_index":0,"txid":"abcd1234"}],"outputs":[{"address":"recipient_address","amount":10}]}
//! ```
//!
//! `signature` (lowercase hex) is appended as a third key only when the
//! caller asks for it and the transaction is signed. Hashing and signing
//! always use the form without it.
//!
//! Nothing is cached. Every call re-encodes from the current field values,
//! which is what makes post-signing tampering detectable.

use serde::{Deserialize, Serialize};

use super::builder::Transaction;
use super::types::{TransactionInput, TransactionOutput};
use super::verification::TransactionError;
use crate::crypto::hash::{sha256, sha256_hex, Digest256};

/// Borrowed view in canonical key order.
#[derive(Serialize)]
struct CanonicalView<'a> {
    inputs: &'a [TransactionInput],
    outputs: &'a [TransactionOutput],
    #[serde(skip_serializing_if = "Option::is_none")]
    signature: Option<String>,
}

/// Owned wire form, as produced by `serialize(true)`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WireTransaction {
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
    #[serde(default)]
    signature: Option<String>,
}

impl Transaction {
    fn canonical_view(&self, include_signature: bool) -> CanonicalView<'_> {
        let signature = if include_signature {
            self.signature_hex()
        } else {
            None
        };
        CanonicalView {
            inputs: &self.inputs,
            outputs: &self.outputs,
            signature,
        }
    }

    /// Structured (display/wire) representation.
    ///
    /// The `signature` key is present only if `include_signature` is set and
    /// the transaction is signed.
    pub fn to_dict(&self, include_signature: bool) -> Result<serde_json::Value, TransactionError> {
        Ok(serde_json::to_value(self.canonical_view(include_signature))?)
    }

    /// Canonical bytes: compact JSON, sorted keys, no whitespace.
    ///
    /// Two transactions with identical inputs and outputs always produce
    /// byte-identical output, however they were constructed.
    pub fn serialize(&self, include_signature: bool) -> Result<Vec<u8>, TransactionError> {
        Ok(serde_json::to_vec(&self.canonical_view(include_signature))?)
    }

    /// SHA-256 of the canonical bytes without the signature.
    ///
    /// This is what gets signed.
    pub fn signing_digest(&self) -> Result<Digest256, TransactionError> {
        Ok(sha256(&self.serialize(false)?))
    }

    /// Content-addressed transaction ID: lowercase hex of
    /// `sha256(serialize(false))`. 64 characters.
    pub fn hash(&self) -> Result<String, TransactionError> {
        Ok(sha256_hex(&self.serialize(false)?))
    }

    /// Parse the wire representation produced by [`serialize`](Self::serialize).
    ///
    /// A present `signature` must be non-empty lowercase or uppercase hex.
    /// For signed input the ID is re-derived from content, so the result
    /// satisfies the same invariants as a locally signed transaction. The
    /// signature is not checked here; call
    /// [`verify_signature`](Self::verify_signature) for that.
    pub fn from_json(bytes: &[u8]) -> Result<Self, TransactionError> {
        let wire: WireTransaction =
            serde_json::from_slice(bytes).map_err(TransactionError::Parse)?;
        let mut tx = Transaction::new(wire.inputs, wire.outputs);

        if let Some(sig_hex) = wire.signature {
            let signature =
                hex::decode(&sig_hex).map_err(|e| TransactionError::MalformedSignature {
                    reason: format!("hex decode failed: {}", e),
                })?;
            if signature.is_empty() {
                return Err(TransactionError::MalformedSignature {
                    reason: "empty signature".to_string(),
                });
            }
            tx.id = Some(tx.hash()?);
            tx.signature = Some(signature);
        }

        Ok(tx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
