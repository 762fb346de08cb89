//! Result table CSV files.
//!
//! Layout: three identifying columns (see [`Domain::id_columns`]), then
//! `run_1..run_N`, then `average_time`. Durations are seconds with six
//! decimals; failed runs and undefined averages are empty fields.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};
use crate::types::{Domain, ResultTable};

pub const AVERAGE_COLUMN: &str = "average_time";

/// Full header row for `domain` with `runs` run columns.
pub fn header(domain: Domain, runs: usize) -> Vec<String> {
    domain
        .id_columns()
        .iter()
        .map(|c| c.to_string())
        .chain((1..=runs).map(|i| format!("run_{i}")))
        .chain(std::iter::once(AVERAGE_COLUMN.to_string()))
        .collect()
}

pub fn format_seconds(value: Option<f64>) -> String {
    value.map(|secs| format!("{secs:.6}")).unwrap_or_default()
}

/// Write `table` to `path`, replacing any existing file.
pub fn write_table(table: &ResultTable, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(header(table.domain(), table.runs()))?;
    for result in table.results() {
        let record = result
            .cell
            .id_values()
            .into_iter()
            .chain(result.runs.iter().map(|run| format_seconds(run.seconds())))
            .chain(std::iter::once(format_seconds(result.mean)));
        writer.write_record(record)?;
    }

    writer.flush().map_err(|e| BenchError::io(path, e))
}

/// One row read back from a result file.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedRow {
    pub id: [String; 3],
    pub runs: Vec<Option<f64>>,
    pub average: Option<f64>,
}

impl LoadedRow {
    pub fn algorithm(&self) -> &str {
        &self.id[0]
    }
}

/// A result file parsed back into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedTable {
    pub domain: Domain,
    pub path: PathBuf,
    pub runs: usize,
    pub rows: Vec<LoadedRow>,
}

impl LoadedTable {
    /// Rows whose average is defined.
    pub fn with_average(&self) -> impl Iterator<Item = (&LoadedRow, f64)> {
        self.rows.iter().filter_map(|row| row.average.map(|avg| (row, avg)))
    }
}

fn parse_cell(raw: &str) -> core::result::Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| format!("not a duration: {raw:?}"))
}

/// Read a result file written by [`write_table`].
///
/// # Errors
/// [`BenchError::Load`] if the file is missing, the header does not match
/// `domain`, or a field is malformed.
pub fn load_table(path: &Path, domain: Domain) -> Result<LoadedTable> {
    let load_err = |reason: String| BenchError::Load {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = csv::Reader::from_path(path).map_err(|e| load_err(e.to_string()))?;
    let headers = reader.headers().map_err(|e| load_err(e.to_string()))?.clone();

    if headers.len() < 4 {
        return Err(load_err(format!("expected at least 4 columns, found {}", headers.len())));
    }
    let runs = headers.len() - 4;
    let expected = header(domain, runs);
    if headers.iter().ne(expected.iter().map(String::as_str)) {
        return Err(load_err(format!(
            "header {:?} does not match {:?}",
            headers.iter().collect::<Vec<_>>(),
            expected
        )));
    }

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| load_err(e.to_string()))?;
        let row_err = |reason: String| load_err(format!("row {}: {reason}", line + 1));

        let id = [0, 1, 2].map(|i| record.get(i).unwrap_or_default().to_string());
        let values = (3..3 + runs)
            .map(|i| parse_cell(record.get(i).unwrap_or_default()))
            .collect::<core::result::Result<Vec<_>, _>>()
            .map_err(row_err)?;
        let average = parse_cell(record.get(3 + runs).unwrap_or_default()).map_err(row_err)?;
        rows.push(LoadedRow {
            id,
            runs: values,
            average,
        });
    }

    Ok(LoadedTable {
        domain,
        path: path.to_path_buf(),
        runs,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SecurityLevel;
    use crate::types::{ConfigCell, TrialResult};

    #[test]
    fn test_header_layout() {
        assert_eq!(
            header(Domain::Signature, 2),
            vec!["algorithm", "param", "operation", "run_1", "run_2", "average_time"]
        );
    }

    #[test]
    fn test_failed_runs_are_empty_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Domain::KeyGeneration.file_name());

        let mut table = ResultTable::new(Domain::KeyGeneration, 3);
        table.push(
            ConfigCell::keygen("DSA", SecurityLevel::Bits80, "1024"),
            vec![TrialResult::Failed, TrialResult::Measured(0.25), TrialResult::Failed],
        );
        write_table(&table, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "algorithm,security_bits,param,run_1,run_2,run_3,average_time");
        assert_eq!(lines[1], "DSA,80,1024,,0.250000,,");
    }

    #[test]
    fn test_wrong_domain_header_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sym.csv");
        let mut table = ResultTable::new(Domain::Symmetric, 2);
        table.push(
            ConfigCell::symmetric("ChaCha20", 256, crate::types::Operation::Encrypt),
            vec![TrialResult::Measured(0.1), TrialResult::Measured(0.2)],
        );
        write_table(&table, &path).unwrap();

        assert!(load_table(&path, Domain::Symmetric).is_ok());
        assert!(matches!(load_table(&path, Domain::Signature), Err(BenchError::Load { .. })));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&dir.path().join("absent.csv"), Domain::RsaEncryption).unwrap_err();
        assert!(err.to_string().contains("absent.csv"));
    }
}
