//! The `demo` flow: ephemeral keypair, sample transaction, sign, verify.

use anyhow::{Context, Result};

use sigil_protocol::crypto::{Ed25519Keypair, SigilKeypair, SignatureScheme, Signer, VerifierKey};
use sigil_protocol::transaction::{Transaction, TransactionBuilder};

use crate::cli::{DemoArgs, SchemeArg};

/// Previous output spent by the sample transaction.
const SAMPLE_INPUT_TXID: &str = "abcd1234";
const SAMPLE_INPUT_INDEX: u32 = 0;
const SAMPLE_RECIPIENT: &str = "recipient_address";
const SAMPLE_AMOUNT: u64 = 10;

/// Everything the demo prints.
#[derive(Debug)]
pub struct DemoReport {
    pub scheme: SignatureScheme,
    pub txid: String,
    pub signature_valid: bool,
    pub transaction: serde_json::Value,
    /// SPKI PEM for RSA, hex for Ed25519.
    pub public_key: String,
}

impl DemoReport {
    /// Render the report as printed on stdout.
    pub fn render(&self, with_public_key: bool) -> String {
        let mut out = format!(
            "Transaction ID: {}\nSignature valid: {}\nTransaction JSON: {}\n",
            self.txid, self.signature_valid, self.transaction
        );
        if with_public_key {
            out.push_str("Public key:\n");
            out.push_str(self.public_key.trim_end());
            out.push('\n');
        }
        out
    }
}

/// A signer together with its public half, both type-erased.
struct EphemeralKeys {
    signer: Box<dyn Signer>,
    verifier: Box<dyn VerifierKey>,
    public_key: String,
}

fn ephemeral_keys(scheme: SchemeArg, key_bits: usize) -> Result<EphemeralKeys> {
    match scheme {
        SchemeArg::Rsa => {
            let keypair = SigilKeypair::generate(key_bits)
                .with_context(|| format!("failed to generate {}-bit RSA keypair", key_bits))?;
            let public = keypair.public_key();
            let public_key = public
                .to_public_key_pem()
                .context("failed to encode RSA public key")?;
            Ok(EphemeralKeys {
                signer: Box::new(keypair),
                verifier: Box::new(public),
                public_key,
            })
        }
        SchemeArg::Ed25519 => {
            let keypair = Ed25519Keypair::generate();
            let public = keypair.public_key();
            let public_key = public.to_hex();
            Ok(EphemeralKeys {
                signer: Box::new(keypair),
                verifier: Box::new(public),
                public_key,
            })
        }
    }
}

fn sample_transaction() -> Transaction {
    TransactionBuilder::new()
        .input(SAMPLE_INPUT_TXID, SAMPLE_INPUT_INDEX)
        .output(SAMPLE_RECIPIENT, SAMPLE_AMOUNT)
        .build()
}

/// Run the demo flow and collect its results.
pub fn run_demo(args: &DemoArgs) -> Result<DemoReport> {
    let keys = ephemeral_keys(args.scheme, args.key_bits)?;
    let scheme = keys.signer.scheme();
    tracing::info!(%scheme, "generated ephemeral keypair");

    let mut tx = sample_transaction();
    tx.sign(keys.signer.as_ref())
        .context("failed to sign sample transaction")?;

    let signature_valid = tx.verify_signature(keys.verifier.as_ref());
    let txid = tx
        .id()
        .context("signed transaction has no id")?
        .to_string();
    let transaction = tx
        .to_dict(true)
        .context("failed to render transaction as JSON")?;

    tracing::info!(%txid, signature_valid, "demo transaction processed");

    Ok(DemoReport {
        scheme,
        txid,
        signature_valid,
        transaction,
        public_key: keys.public_key,
    })
}
