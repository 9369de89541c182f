//! # Protocol Configuration & Constants
//!
//! Every fixed parameter of the signing contract lives here. Changing any of
//! them changes which signatures verify, so treat edits as breaking changes.

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// The full version string of the signing contract.
pub const PROTOCOL_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// Digest used for transaction IDs and as the signature pre-hash.
pub const DIGEST_ALGORITHM: &str = "SHA-256";

/// Digest length in bytes.
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// Length of a hex-encoded transaction ID. Two characters per digest byte.
pub const TXID_HEX_LENGTH: usize = HASH_OUTPUT_LENGTH * 2;

// ---------------------------------------------------------------------------
// RSA
// ---------------------------------------------------------------------------

/// Reference signature scheme.
pub const RSA_SIGNATURE_SCHEME: &str = "RSASSA-PKCS1-v1_5";

/// Modulus size used when the caller does not ask for one.
pub const DEFAULT_RSA_KEY_BITS: usize = 2048;

/// Smallest modulus we agree to generate. Anything below 2048 bits is
/// factorable by a motivated adversary.
pub const MIN_RSA_KEY_BITS: usize = 2048;

// ---------------------------------------------------------------------------
// Ed25519
// ---------------------------------------------------------------------------

/// Substitute signature scheme.
pub const ED25519_SIGNATURE_SCHEME: &str = "Ed25519";

/// Ed25519 secret seed and public key length in bytes.
pub const ED25519_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. Always 64 bytes.
pub const ED25519_SIGNATURE_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Canonical form
// ---------------------------------------------------------------------------

/// Top-level keys of the canonical mapping, in emission order.
pub const CANONICAL_KEYS: [&str; 3] = ["inputs", "outputs", "signature"];
