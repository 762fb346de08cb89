//! Symmetric AEAD suite: AES-GCM at each key size, then ChaCha20-Poly1305.
//!
//! The axis is key size, not security level. Each run encrypts then
//! decrypts the same random plaintext under a fresh key and nonce.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::info;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::harness::run_round_trips;
use crate::params::AES_KEY_BITS;
use crate::primitives::{AeadRoundTrip, SymmetricCipher};
use crate::types::{ConfigCell, Domain, Operation, ResultTable};

pub fn ciphers() -> Vec<SymmetricCipher> {
    AES_KEY_BITS
        .iter()
        .map(|&key_bits| SymmetricCipher::AesGcm { key_bits })
        .chain(std::iter::once(SymmetricCipher::ChaCha20Poly1305))
        .collect()
}

/// # Errors
/// [`BenchError::IntegrityViolation`](crate::BenchError::IntegrityViolation)
/// if a decryption does not return the plaintext.
pub fn run(config: &BenchConfig) -> Result<ResultTable> {
    let mut table = ResultTable::new(Domain::Symmetric, config.runs);
    let mut plaintext = vec![0u8; config.plaintext_size];
    OsRng.fill_bytes(&mut plaintext);

    for cipher in ciphers() {
        let encrypt = ConfigCell::symmetric(cipher.name(), cipher.key_bits(), Operation::Encrypt);
        let decrypt = ConfigCell::symmetric(cipher.name(), cipher.key_bits(), Operation::Decrypt);
        info!(cipher = cipher.name(), key_bits = cipher.key_bits(), runs = config.runs, "benchmarking AEAD");

        let trip = AeadRoundTrip {
            cipher,
            plaintext: &plaintext,
        };
        let trials = run_round_trips(&trip, &encrypt, &decrypt, config.runs)?;
        table.push(encrypt, trials.forward);
        table.push(decrypt, trials.inverse);
    }

    Ok(table)
}
