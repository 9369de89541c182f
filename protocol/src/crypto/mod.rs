//! # Cryptographic Primitives
//!
//! SHA-256 for digests, plus two interchangeable signature providers behind
//! the [`Signer`] / [`VerifierKey`] traits:
//!
//! - **RSA** (PKCS#1 v1.5, SHA-256) — the reference scheme. See [`keys`].
//! - **Ed25519** — a substitute with the same external interface. See [`ed25519`].
//!
//! Nothing here is hand-rolled. These are thin, typed wrappers around the
//! `rsa`, `ed25519-dalek` and `sha2` crates.

pub mod ed25519;
pub mod hash;
pub mod keys;
pub mod signatures;

pub use ed25519::{Ed25519Keypair, Ed25519PublicKey};
pub use hash::{sha256, sha256_hex, Digest256};
pub use keys::{KeyError, SigilKeypair, SigilPublicKey};
pub use signatures::{SignatureError, SignatureScheme, Signer, VerifierKey};
