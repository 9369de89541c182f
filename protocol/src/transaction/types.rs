//! Value types a transaction is built from.
//!
//! Both types derive `Serialize`/`Deserialize` with their fields declared in
//! sorted key order, because derived serializers emit fields in declaration
//! order and the canonical encoding requires sorted keys.

use serde::{Deserialize, Serialize};

/// A reference to an output of an earlier transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionInput {
    /// Zero-based position of the referenced output.
    pub output_index: u32,

    /// ID of the transaction whose output is being spent. Opaque.
    pub txid: String,
}

impl TransactionInput {
    pub fn new(txid: impl Into<String>, output_index: u32) -> Self {
        Self {
            output_index,
            txid: txid.into(),
        }
    }
}

/// A payment to an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionOutput {
    /// Destination identifier. Opaque.
    pub address: String,

    /// Amount in the smallest unit. Integer only.
    pub amount: u64,
}

impl TransactionOutput {
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}
