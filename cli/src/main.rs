// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # SIGIL
//!
//! Entry point for the `sigil` binary. Parses CLI arguments, initializes
//! logging, and runs the requested flow.
//!
//! The binary supports three subcommands:
//!
//! - `demo`    — sign and verify a sample transaction (the default)
//! - `verify`  — verify a wire-format transaction against a public key
//! - `version` — print build version information

mod cli;
mod demo;
mod logging;
mod verify;

use anyhow::Result;
use clap::Parser;

use cli::{Commands, SigilCli};

fn main() -> Result<()> {
    let cli = SigilCli::parse();

    match cli.command.unwrap_or(Commands::Demo(cli.demo)) {
        Commands::Demo(args) => {
            logging::init_logging(logging::DEFAULT_LOG_FILTER, args.logging.log_format);
            let report = demo::run_demo(&args)?;
            print!("{}", report.render(args.print_public_key));
            Ok(())
        }
        Commands::Verify(args) => {
            logging::init_logging(logging::DEFAULT_LOG_FILTER, args.logging.log_format);
            let report = verify::run_verify(&args)?;
            print!("{}", report.render());
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Prints version and build information.
fn print_version() {
    println!("sigil {}", env!("CARGO_PKG_VERSION"));
    println!("  protocol:   {}", sigil_protocol::config::PROTOCOL_VERSION);
    println!(
        "  signature:  {}/{}",
        sigil_protocol::config::RSA_SIGNATURE_SCHEME,
        sigil_protocol::config::DIGEST_ALGORITHM
    );
    println!(
        "  alternate:  {}",
        sigil_protocol::config::ED25519_SIGNATURE_SCHEME
    );
    println!("  serialization: canonical JSON (sorted keys, compact)");
}
