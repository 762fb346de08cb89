//! Key-pair generation suite.
//!
//! Per security level: RSA, then DSA (where defined), then ECC. Every run
//! generates a fresh private key; generation itself is the measured cost.

use tracing::info;

use crate::config::BenchConfig;
use crate::harness::run_trials;
use crate::params::{SecurityLevel, DSA_MODULUS_BITS, EC_CURVES, RSA_MODULUS_BITS};
use crate::primitives::KeyAlgorithm;
use crate::types::{ConfigCell, Domain, ResultTable};

/// Enumerate the key-generation cells for `levels`, skipping levels where a
/// family has no parameter.
pub fn cells(levels: &[SecurityLevel]) -> Vec<(ConfigCell, KeyAlgorithm)> {
    let mut cells = Vec::new();
    for &level in levels {
        let algorithms = [
            RSA_MODULUS_BITS.get(level).map(|bits| KeyAlgorithm::Rsa { bits }),
            DSA_MODULUS_BITS.get(level).map(|bits| KeyAlgorithm::Dsa { bits }),
            EC_CURVES.get(level).map(KeyAlgorithm::Ec),
        ];
        for algorithm in algorithms.into_iter().flatten() {
            cells.push((ConfigCell::keygen(algorithm.name(), level, algorithm.param()), algorithm));
        }
    }
    cells
}

pub fn run(config: &BenchConfig) -> ResultTable {
    let mut table = ResultTable::new(Domain::KeyGeneration, config.runs);

    for (cell, algorithm) in cells(&config.security_levels) {
        info!(cell = %cell, runs = config.runs, "benchmarking key generation");
        let runs = run_trials(&cell, config.runs, || algorithm.generate_private());
        table.push(cell, runs);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_in_level_order() {
        let cells = cells(&SecurityLevel::ALL);
        let labels: Vec<String> = cells.iter().map(|(cell, _)| cell.to_string()).collect();
        assert_eq!(labels.len(), 13);
        assert_eq!(labels[0], "RSA 1024 (80-bit)");
        assert_eq!(labels[1], "DSA 1024 (80-bit)");
        assert_eq!(labels[2], "ECC secp192r1 (80-bit)");
        assert_eq!(labels[12], "ECC secp521r1 (256-bit)");
    }

    #[test]
    fn test_dsa_omitted_above_128() {
        let cells = cells(&[SecurityLevel::Bits192, SecurityLevel::Bits256]);
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|(cell, _)| cell.algorithm() != "DSA"));
    }
}
