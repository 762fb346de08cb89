//! Result files: layout, overwrite semantics and read-back.

use crypto_bench::report::{load_table, write_table};
use crypto_bench::types::Operation;
use crypto_bench::{BenchError, ConfigCell, Domain, ResultTable, SecurityLevel, TrialResult};
use tempfile::tempdir;

fn signature_table() -> ResultTable {
    let mut table = ResultTable::new(Domain::Signature, 3);
    table.push(
        ConfigCell::signature("ECDSA", "secp256r1", Operation::Sign),
        vec![
            TrialResult::Measured(0.000412),
            TrialResult::Measured(0.0001234567),
            TrialResult::Measured(0.000131),
        ],
    );
    table.push(
        ConfigCell::signature("ECDSA", "secp256r1", Operation::Verify),
        vec![TrialResult::Measured(0.0003), TrialResult::Failed, TrialResult::Failed],
    );
    table
}

#[test]
fn test_reload_preserves_ids_and_averages() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(Domain::Signature.file_name());
    let table = signature_table();
    write_table(&table, &path).unwrap();

    let loaded = load_table(&path, Domain::Signature).unwrap();
    assert_eq!(loaded.runs, 3);
    assert_eq!(loaded.rows.len(), table.len());
    for (row, result) in loaded.rows.iter().zip(table.results()) {
        assert_eq!(row.id, result.cell.id_values());
        match (row.average, result.mean) {
            (Some(read), Some(mean)) => assert!((read - mean).abs() <= 5e-7),
            (None, None) => {}
            other => panic!("average mismatch: {:?}", other),
        }
    }
    // Six-decimal rounding of the stored runs.
    assert_eq!(loaded.rows[0].runs[1], Some(0.000123));
    assert_eq!(loaded.rows[1].runs, vec![Some(0.0003), None, None]);
}

#[test]
fn test_file_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("signature_results.csv");
    write_table(&signature_table(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "algorithm,param,operation,run_1,run_2,run_3,average_time");
    assert_eq!(lines[1], "ECDSA,secp256r1,sign,0.000412,0.000123,0.000131,0.000127");
    assert_eq!(lines[2], "ECDSA,secp256r1,verify,0.000300,,,");
    assert!(!text.contains("NaN"));
}

#[test]
fn test_write_overwrites_previous_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keygen_results.csv");
    std::fs::write(&path, "stale,content\n1,2\n3,4\n5,6\n").unwrap();

    let mut table = ResultTable::new(Domain::KeyGeneration, 2);
    table.push(
        ConfigCell::keygen("ECC", SecurityLevel::Bits112, "secp224r1"),
        vec![TrialResult::Measured(0.001), TrialResult::Measured(0.002)],
    );
    write_table(&table, &path).unwrap();

    let loaded = load_table(&path, Domain::KeyGeneration).unwrap();
    assert_eq!(loaded.rows.len(), 1);
    assert_eq!(loaded.rows[0].id, ["ECC".to_string(), "112".into(), "secp224r1".into()]);
    assert_eq!(loaded.rows[0].average, Some(0.002));
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("rsa_enc_results.csv");
    let err = write_table(&ResultTable::new(Domain::RsaEncryption, 1), &path).unwrap_err();
    assert!(matches!(err, BenchError::Io { .. }));
}

#[test]
fn test_malformed_duration_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rsa_enc_results.csv");
    std::fs::write(
        &path,
        "algorithm,key_bits,operation,run_1,average_time\nRSA-OAEP,1024,encrypt,fast,\n",
    )
    .unwrap();
    let err = load_table(&path, Domain::RsaEncryption).unwrap_err();
    assert!(err.to_string().contains("not a duration"));
}
