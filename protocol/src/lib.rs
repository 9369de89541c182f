// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # SIGIL — Signed Transaction Library
//!
//! A small, strict transaction model: inputs that point at earlier outputs,
//! outputs that pay an address, and a signature that binds the two together.
//!
//! The only interesting part is the contract between the canonical byte
//! encoding and the signature scheme. Everything that gets hashed or signed
//! goes through [`Transaction::serialize`], and that encoding is deterministic
//! down to the byte.
//!
//! ## Modules
//!
//! - **crypto** — SHA-256 helpers, the [`Signer`](crypto::Signer) /
//!   [`VerifierKey`](crypto::VerifierKey) capability traits, and the RSA
//!   (PKCS#1 v1.5) and Ed25519 providers that implement them.
//! - **transaction** — inputs, outputs, the transaction itself, canonical
//!   serialization, signing and verification.
//! - **config** — protocol constants.
//!
//! ## Quick tour
//!
//! ```rust,no_run
//! use sigil_protocol::crypto::SigilKeypair;
//! use sigil_protocol::transaction::TransactionBuilder;
//!
//! let keypair = SigilKeypair::generate(2048).unwrap();
//! let mut tx = TransactionBuilder::new()
//!     .input("abcd1234", 0)
//!     .output("recipient_address", 10)
//!     .build();
//!
//! tx.sign(&keypair).unwrap();
//! assert!(tx.verify_signature(&keypair.public_key()));
//! ```

pub mod config;
pub mod crypto;
pub mod transaction;

pub use transaction::{Transaction, TransactionError, TransactionInput, TransactionOutput};
