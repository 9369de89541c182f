//! # Transaction Module
//!
//! Construction, canonical encoding, signing and verification.
//!
//! ```text
//! types.rs        — TransactionInput, TransactionOutput
//! builder.rs      — Transaction and the fluent TransactionBuilder
//! canonical.rs    — to_dict / serialize / hash, and wire parsing
//! signing.rs      — Transaction::sign
//! verification.rs — Transaction::verify_signature, TransactionError
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Build** — [`TransactionBuilder`] or [`Transaction::new`].
//! 2. **Sign** — [`Transaction::sign`] with any [`Signer`](crate::crypto::Signer).
//! 3. **Verify** — [`Transaction::verify_signature`] with any
//!    [`VerifierKey`](crate::crypto::VerifierKey).
//! 4. **Ship** — [`Transaction::serialize`] with the signature included.
//!
//! ## Design Decisions
//!
//! - The ID is `hex(sha256(serialize(false)))`: content-addressed and
//!   independent of who signed or how. Re-signing never moves it.
//! - Amounts are `u64` in the smallest unit. No floating point.
//! - The canonical encoding is compact JSON with sorted keys, so any JSON
//!   library that sorts keys and emits no whitespace can reproduce it.

pub mod builder;
pub mod canonical;
pub mod signing;
pub mod types;
pub mod verification;

pub use builder::{Transaction, TransactionBuilder};
pub use types::{TransactionInput, TransactionOutput};
pub use verification::TransactionError;
