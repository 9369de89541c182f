//! # CLI Interface
//!
//! Command-line structure for `sigil`, using `clap` derive. Every option has
//! an environment fallback so the binary can be configured without flags.
//!
//! Running `sigil` with no subcommand is the same as `sigil demo`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use sigil_protocol::config::DEFAULT_RSA_KEY_BITS;

use crate::logging::LogFormat;

/// Sign and verify transactions.
///
/// With no subcommand, generates an ephemeral keypair, signs a sample
/// transaction, and prints its ID, the verification result and its JSON form.
#[derive(Parser, Debug)]
#[command(
    name = "sigil",
    about = "Sign and verify transactions",
    version,
    propagate_version = true,
    args_conflicts_with_subcommands = true
)]
pub struct SigilCli {
    /// Subcommand to execute. Defaults to `demo`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub demo: DemoArgs,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign and verify a sample transaction with an ephemeral keypair.
    Demo(DemoArgs),
    /// Verify a transaction in wire format against a public key.
    Verify(VerifyArgs),
    /// Print version information and exit.
    Version,
}

/// Signature scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    Rsa,
    /// Ed25519.
    Ed25519,
}

/// Options shared by every subcommand that logs.
#[derive(Args, Debug, Clone)]
pub struct LoggingArgs {
    /// Log output format. Logs go to stderr; filter with `RUST_LOG`.
    #[arg(long, env = "SIGIL_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Arguments for the `demo` subcommand.
#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Signature scheme for the ephemeral keypair.
    #[arg(long, env = "SIGIL_SCHEME", value_enum, default_value_t = SchemeArg::Rsa)]
    pub scheme: SchemeArg,

    /// RSA modulus size in bits. Ignored for Ed25519.
    #[arg(long, env = "SIGIL_KEY_BITS", default_value_t = DEFAULT_RSA_KEY_BITS)]
    pub key_bits: usize,

    /// Also print the ephemeral public key (SPKI PEM for RSA, hex for
    /// Ed25519), in the form `sigil verify` accepts.
    #[arg(long)]
    pub print_public_key: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the `verify` subcommand.
#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Transaction JSON file, or `-` for stdin.
    #[arg(long, short = 't')]
    pub tx: PathBuf,

    /// Public key file: SPKI PEM for RSA, hex for Ed25519.
    #[arg(long, short = 'k')]
    pub public_key: PathBuf,

    /// Signature scheme the public key belongs to.
    #[arg(long, env = "SIGIL_SCHEME", value_enum, default_value_t = SchemeArg::Rsa)]
    pub scheme: SchemeArg,

    #[command(flatten)]
    pub logging: LoggingArgs,
}
