//! End-to-end suite runs with cheap settings (few runs, 80-bit level).

use crypto_bench::report::{load_table, write_table};
use crypto_bench::suites::{keygen, rsa_enc, signature, symmetric};
use crypto_bench::types::Operation;
use crypto_bench::{BenchConfig, Domain, SecurityLevel};

fn cheap_config() -> BenchConfig {
    BenchConfig::default()
        .with_runs(3)
        .with_plaintext_size(1024)
        .with_security_levels([SecurityLevel::Bits80])
}

#[test]
fn test_symmetric_suite_has_eight_rows() {
    let table = symmetric::run(&cheap_config()).unwrap();
    assert_eq!(table.domain(), Domain::Symmetric);
    assert_eq!(table.len(), 8);

    let ids: Vec<[String; 3]> = table.results().iter().map(|r| r.cell.id_values()).collect();
    let expected = [
        ("AES-GCM", "128"),
        ("AES-GCM", "192"),
        ("AES-GCM", "256"),
        ("ChaCha20", "256"),
    ];
    for (i, (alg, bits)) in expected.iter().enumerate() {
        assert_eq!(ids[2 * i], [alg.to_string(), bits.to_string(), "encrypt".into()]);
        assert_eq!(ids[2 * i + 1], [alg.to_string(), bits.to_string(), "decrypt".into()]);
    }

    for result in table.results() {
        assert_eq!(result.runs.len(), 3);
        assert_eq!(result.failed_runs(), 0, "{} had failures", result.cell);
        assert!(result.mean.unwrap() > 0.0);
    }
}

#[test]
fn test_rsa_suite_round_trips() {
    let table = rsa_enc::run(&cheap_config()).unwrap();
    let ops: Vec<Option<Operation>> = table.results().iter().map(|r| r.cell.operation()).collect();
    assert_eq!(ops, vec![Some(Operation::Encrypt), Some(Operation::Decrypt)]);
    assert!(table.results().iter().all(|r| r.cell.param() == "1024"));
    assert!(table.results().iter().all(|r| r.failed_runs() == 0));
}

#[test]
fn test_signature_suite_at_lowest_level() {
    let table = signature::run(&cheap_config()).unwrap();
    let labels: Vec<String> = table.results().iter().map(|r| r.cell.to_string()).collect();
    assert_eq!(
        labels,
        vec![
            "RSA-PSS 1024 sign",
            "RSA-PSS 1024 verify",
            "DSA 1024 sign",
            "DSA 1024 verify",
            "ECDSA secp192r1 sign",
            "ECDSA secp192r1 verify",
        ]
    );
    // Every verify run succeeded, so every signature verified.
    assert!(table.results().iter().all(|r| r.failed_runs() == 0));
}

#[test]
fn test_dsa_absent_from_high_level_enumeration() {
    let levels = [SecurityLevel::Bits192, SecurityLevel::Bits256];
    assert!(keygen::cells(&levels).iter().all(|(cell, _)| cell.algorithm() != "DSA"));
    for level in levels {
        assert!(signature::algorithms(level).iter().all(|a| a.signature_name() != "DSA"));
    }
    // Present, not blank, where a parameter exists.
    assert!(signature::algorithms(SecurityLevel::Bits128)
        .iter()
        .any(|a| a.signature_name() == "DSA"));
}

#[test]
fn test_keygen_csv_has_no_dsa_row_at_192_bits() {
    let dir = tempfile::tempdir().unwrap();
    let config = BenchConfig::default()
        .with_runs(2)
        .with_security_levels([SecurityLevel::Bits192]);
    let table = keygen::run(&config);
    let path = dir.path().join(Domain::KeyGeneration.file_name());
    write_table(&table, &path).unwrap();

    let loaded = load_table(&path, Domain::KeyGeneration).unwrap();
    let rows: Vec<[String; 3]> = loaded.rows.iter().map(|r| r.id.clone()).collect();
    assert_eq!(
        rows,
        vec![
            ["RSA".to_string(), "192".into(), "4096".into()],
            ["ECC".to_string(), "192".into(), "secp384r1".into()],
        ]
    );
}

#[test]
fn test_symmetric_suite_ignores_security_levels() {
    let config = cheap_config().with_security_levels([SecurityLevel::Bits256]);
    assert_eq!(symmetric::run(&config).unwrap().len(), 8);
}
