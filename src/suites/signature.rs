//! Digital signature suite: RSA-PSS, DSA and ECDSA per security level.
//!
//! One key pair per algorithm and level, reused across runs. A rejected
//! signature is recorded as a failed verify run, never a halt.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{info, warn};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::harness::run_round_trips;
use crate::params::{SecurityLevel, DSA_MODULUS_BITS, EC_CURVES, RSA_MODULUS_BITS};
use crate::primitives::{KeyAlgorithm, KeyPair, SignatureRoundTrip};
use crate::types::{ConfigCell, Domain, Operation, ResultTable};

/// Signature algorithms defined at `level`, in table order.
pub fn algorithms(level: SecurityLevel) -> Vec<KeyAlgorithm> {
    [
        RSA_MODULUS_BITS.get(level).map(|bits| KeyAlgorithm::Rsa { bits }),
        DSA_MODULUS_BITS.get(level).map(|bits| KeyAlgorithm::Dsa { bits }),
        EC_CURVES.get(level).map(KeyAlgorithm::Ec),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn run(config: &BenchConfig) -> Result<ResultTable> {
    let mut table = ResultTable::new(Domain::Signature, config.runs);
    let mut message = vec![0u8; config.signature_message_size];
    OsRng.fill_bytes(&mut message);

    for &level in &config.security_levels {
        for algorithm in algorithms(level) {
            let keys = match KeyPair::generate(algorithm) {
                Ok(keys) => keys,
                Err(e) => {
                    warn!(key = %algorithm, %level, error = %e, "signing key setup failed, skipping");
                    continue;
                }
            };

            let name = algorithm.signature_name();
            let sign = ConfigCell::signature(name, algorithm.param(), Operation::Sign);
            let verify = ConfigCell::signature(name, algorithm.param(), Operation::Verify);
            info!(algorithm = name, param = %algorithm.param(), runs = config.runs, "benchmarking signatures");

            let trip = SignatureRoundTrip {
                keys: &keys,
                message: &message,
            };
            let trials = run_round_trips(&trip, &sign, &verify, config.runs)?;
            table.push(sign, trials.forward);
            table.push(verify, trials.inverse);
        }
    }

    Ok(table)
}
