//! The [`Transaction`] type and its fluent [`TransactionBuilder`].
//!
//! The builder does not sign. That happens in [`super::signing`], so
//! construction stays testable without key material.

use super::types::{TransactionInput, TransactionOutput};

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A transaction: ordered inputs, ordered outputs, and once signed, a
/// signature plus the derived ID.
///
/// `signature` and `id` have no public setters. Both are written together by
/// [`Transaction::sign`], so either both are present or neither is.
///
/// The `id` is content-addressed: `hex(sha256(serialize(false)))`. It covers
/// inputs and outputs only, never the signature, so the same content signed
/// by two different keys has the same ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Spent outputs. Order is part of the signed payload.
    pub inputs: Vec<TransactionInput>,

    /// New outputs. Order is part of the signed payload.
    pub outputs: Vec<TransactionOutput>,

    pub(crate) signature: Option<Vec<u8>>,

    pub(crate) id: Option<String>,
}

impl Transaction {
    /// Creates an unsigned transaction.
    pub fn new(inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>) -> Self {
        Self {
            inputs,
            outputs,
            signature: None,
            id: None,
        }
    }

    /// Raw signature bytes, if signed.
    pub fn signature(&self) -> Option<&[u8]> {
        self.signature.as_deref()
    }

    /// Lowercase hex of the signature, if signed.
    pub fn signature_hex(&self) -> Option<String> {
        self.signature.as_ref().map(hex::encode)
    }

    /// Transaction ID as computed at sign time, if signed.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns `true` if the transaction carries a signature.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unsigned [`Transaction`] instances.
///
/// ```
/// use sigil_protocol::transaction::TransactionBuilder;
///
/// let tx = TransactionBuilder::new()
///     .input("abcd1234", 0)
///     .output("recipient_address", 10)
///     .build();
///
/// assert!(!tx.is_signed());
/// assert_eq!(tx.outputs[0].amount, 10);
/// ```
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an input spending output `output_index` of transaction `txid`.
    pub fn input(mut self, txid: &str, output_index: u32) -> Self {
        self.inputs.push(TransactionInput::new(txid, output_index));
        self
    }

    /// Appends an output paying `amount` to `address`.
    pub fn output(mut self, address: &str, amount: u64) -> Self {
        self.outputs.push(TransactionOutput::new(address, amount));
        self
    }

    /// Consumes the builder and produces an unsigned [`Transaction`].
    pub fn build(self) -> Transaction {
        Transaction::new(self.inputs, self.outputs)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
