//! The `verify` flow: check a wire-format transaction against a public key.
//!
//! Bad inputs (unreadable files, malformed JSON, malformed keys) are errors.
//! A well-formed transaction whose signature does not check out is not an
//! error; it is reported as `false`.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use sigil_protocol::crypto::{Ed25519PublicKey, SigilPublicKey, VerifierKey};
use sigil_protocol::transaction::Transaction;

use crate::cli::{SchemeArg, VerifyArgs};

/// Outcome of verifying one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub txid: String,
    pub signature_valid: bool,
}

impl VerifyReport {
    pub fn render(&self) -> String {
        format!(
            "Transaction ID: {}\nSignature valid: {}\n",
            self.txid, self.signature_valid
        )
    }
}

fn parse_public_key(scheme: SchemeArg, text: &str) -> Result<Box<dyn VerifierKey>> {
    match scheme {
        SchemeArg::Rsa => {
            let key = SigilPublicKey::from_public_key_pem(text)
                .context("public key is not a valid SPKI PEM RSA key")?;
            tracing::debug!(
                fingerprint = %key.fingerprint(),
                bits = key.key_bits(),
                "loaded RSA public key"
            );
            Ok(Box::new(key))
        }
        SchemeArg::Ed25519 => {
            let key = Ed25519PublicKey::from_hex(text.trim())
                .context("public key is not a valid hex Ed25519 key")?;
            Ok(Box::new(key))
        }
    }
}

/// Verify `tx_json` (wire format) against a public key in text form.
pub fn verify_wire(scheme: SchemeArg, tx_json: &[u8], public_key: &str) -> Result<VerifyReport> {
    let key = parse_public_key(scheme, public_key)?;
    let tx = Transaction::from_json(tx_json).context("transaction is not valid wire JSON")?;

    let signature_valid = tx.verify_signature(key.as_ref());
    let txid = tx.hash().context("failed to hash transaction")?;
    if !signature_valid {
        tracing::warn!(%txid, signed = tx.is_signed(), "signature did not verify");
    }

    Ok(VerifyReport {
        txid,
        signature_valid,
    })
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read transaction from stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Read the files named in `args` and verify.
pub fn run_verify(args: &VerifyArgs) -> Result<VerifyReport> {
    let tx_json = read_input(&args.tx)?;
    let public_key = std::fs::read_to_string(&args.public_key)
        .with_context(|| format!("failed to read {}", args.public_key.display()))?;
    verify_wire(args.scheme, &tx_json, &public_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_protocol::crypto::Ed25519Keypair;
    use sigil_protocol::transaction::TransactionBuilder;

    fn signed_wire(keypair: &Ed25519Keypair) -> Vec<u8> {
        let mut tx = TransactionBuilder::new()
            .input("abcd1234", 0)
            .output("recipient_address", 10)
            .build();
        tx.sign(keypair).unwrap();
        tx.serialize(true).unwrap()
    }

    #[test]
    fn valid_signature_reports_true() {
        let keypair = Ed25519Keypair::generate();
        let wire = signed_wire(&keypair);
        let key_hex = format!("{}\n", keypair.public_key().to_hex());

        let report = verify_wire(SchemeArg::Ed25519, &wire, &key_hex).unwrap();
        assert!(report.signature_valid);
        assert_eq!(report.render().lines().nth(1), Some("Signature valid: true"));
    }

    #[test]
    fn wrong_key_reports_false_not_error() {
        let keypair = Ed25519Keypair::generate();
        let other = Ed25519Keypair::generate();
        let wire = signed_wire(&keypair);

        let report = verify_wire(SchemeArg::Ed25519, &wire, &other.public_key().to_hex()).unwrap();
        assert!(!report.signature_valid);
    }

    #[test]
    fn unsigned_transaction_reports_false() {
        let keypair = Ed25519Keypair::generate();
        let wire = br#"{"inputs":[],"outputs":[{"address":"a","amount":1}]}"#;

        let report = verify_wire(SchemeArg::Ed25519, wire, &keypair.public_key().to_hex()).unwrap();
        assert!(!report.signature_valid);
    }

    #[test]
    fn malformed_inputs_are_errors() {
        let keypair = Ed25519Keypair::generate();
        let wire = signed_wire(&keypair);

        assert!(verify_wire(SchemeArg::Ed25519, &wire, "zz").is_err());
        assert!(verify_wire(SchemeArg::Rsa, &wire, "not a pem").is_err());
        assert!(verify_wire(
            SchemeArg::Ed25519,
            b"{not json",
            &keypair.public_key().to_hex()
        )
        .is_err());
    }
}
