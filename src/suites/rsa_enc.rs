//! RSA-OAEP suite: one key pair per security level, reused for all runs.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{info, warn};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::harness::run_round_trips;
use crate::params::RSA_MODULUS_BITS;
use crate::primitives::{KeyAlgorithm, KeyPair, OaepRoundTrip};
use crate::types::{ConfigCell, Domain, Operation, ResultTable};

pub fn run(config: &BenchConfig) -> Result<ResultTable> {
    let mut table = ResultTable::new(Domain::RsaEncryption, config.runs);
    let mut message = vec![0u8; config.rsa_message_size];
    OsRng.fill_bytes(&mut message);

    for &level in &config.security_levels {
        let Some(bits) = RSA_MODULUS_BITS.get(level) else {
            continue;
        };
        // Key setup is not measured here; a failure skips the level.
        let keys = match KeyPair::generate(KeyAlgorithm::Rsa { bits }) {
            Ok(keys) => keys,
            Err(e) => {
                warn!(bits, %level, error = %e, "RSA key setup failed, skipping level");
                continue;
            }
        };

        let encrypt = ConfigCell::rsa_encryption(bits, Operation::Encrypt);
        let decrypt = ConfigCell::rsa_encryption(bits, Operation::Decrypt);
        info!(bits, runs = config.runs, "benchmarking RSA-OAEP");

        let trip = OaepRoundTrip {
            keys: &keys,
            message: &message,
        };
        let trials = run_round_trips(&trip, &encrypt, &decrypt, config.runs)?;
        table.push(encrypt, trials.forward);
        table.push(decrypt, trials.inverse);
    }

    Ok(table)
}
