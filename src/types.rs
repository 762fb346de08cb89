//! Core data model for benchmark results.
//!
//! A [`ConfigCell`] names one benchmarked condition, a [`TrialResult`] is one
//! timed run of it, and a [`ResultTable`] collects the [`AggregateResult`]s
//! of one suite in enumeration order.

use core::fmt;

use crate::harness::aggregate::mean_excluding_first;
use crate::params::SecurityLevel;

/// Benchmark domain; one suite and one result file each.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    KeyGeneration,
    Symmetric,
    RsaEncryption,
    Signature,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::KeyGeneration,
        Domain::Symmetric,
        Domain::RsaEncryption,
        Domain::Signature,
    ];

    /// Result file name inside the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Domain::KeyGeneration => "keygen_results.csv",
            Domain::Symmetric => "symmetric_results.csv",
            Domain::RsaEncryption => "rsa_enc_results.csv",
            Domain::Signature => "signature_results.csv",
        }
    }

    /// Identifying columns that precede the run columns.
    pub fn id_columns(&self) -> [&'static str; 3] {
        match self {
            Domain::KeyGeneration => ["algorithm", "security_bits", "param"],
            Domain::Symmetric | Domain::RsaEncryption => ["algorithm", "key_bits", "operation"],
            Domain::Signature => ["algorithm", "param", "operation"],
        }
    }

    /// Header of the console summary table.
    pub fn summary_headers(&self) -> [&'static str; 4] {
        match self {
            Domain::KeyGeneration => ["Algorithm", "Security", "Parameter", "Avg Time"],
            Domain::Symmetric | Domain::RsaEncryption => ["Algorithm", "Key", "Op", "Avg Time"],
            Domain::Signature => ["Algorithm", "Parameter", "Op", "Avg Time"],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Domain::KeyGeneration => "Key generation",
            Domain::Symmetric => "Symmetric cipher",
            Domain::RsaEncryption => "RSA-OAEP",
            Domain::Signature => "Digital signature",
        }
    }
}

/// Operation measured within a cell (absent for key generation).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Encrypt,
    Decrypt,
    Sign,
    Verify,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
            Operation::Sign => "sign",
            Operation::Verify => "verify",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "encrypt" => Some(Operation::Encrypt),
            "decrypt" => Some(Operation::Decrypt),
            "sign" => Some(Operation::Sign),
            "verify" => Some(Operation::Verify),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One benchmarked condition. Fixed once enumerated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigCell {
    domain: Domain,
    algorithm: &'static str,
    security_level: Option<SecurityLevel>,
    param: String,
    operation: Option<Operation>,
}

impl ConfigCell {
    /// Key-generation cell: `(algorithm, security_bits, param)`.
    pub fn keygen(algorithm: &'static str, level: SecurityLevel, param: impl Into<String>) -> Self {
        Self {
            domain: Domain::KeyGeneration,
            algorithm,
            security_level: Some(level),
            param: param.into(),
            operation: None,
        }
    }

    /// Symmetric cipher cell: `(algorithm, key_bits, operation)`.
    pub fn symmetric(algorithm: &'static str, key_bits: u16, operation: Operation) -> Self {
        Self {
            domain: Domain::Symmetric,
            algorithm,
            security_level: None,
            param: key_bits.to_string(),
            operation: Some(operation),
        }
    }

    /// RSA-OAEP cell: `("RSA-OAEP", key_bits, operation)`.
    pub fn rsa_encryption(key_bits: u32, operation: Operation) -> Self {
        Self {
            domain: Domain::RsaEncryption,
            algorithm: "RSA-OAEP",
            security_level: None,
            param: key_bits.to_string(),
            operation: Some(operation),
        }
    }

    /// Signature cell: `(algorithm, param, operation)`.
    pub fn signature(algorithm: &'static str, param: impl Into<String>, operation: Operation) -> Self {
        Self {
            domain: Domain::Signature,
            algorithm,
            security_level: None,
            param: param.into(),
            operation: Some(operation),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn security_level(&self) -> Option<SecurityLevel> {
        self.security_level
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Values for the domain's identifying columns, in column order.
    pub fn id_values(&self) -> [String; 3] {
        let operation = self.operation.map(|op| op.as_str()).unwrap_or_default();
        match self.domain {
            Domain::KeyGeneration => [
                self.algorithm.to_string(),
                self.security_level.map(|l| l.to_string()).unwrap_or_default(),
                self.param.clone(),
            ],
            Domain::Symmetric | Domain::RsaEncryption | Domain::Signature => [
                self.algorithm.to_string(),
                self.param.clone(),
                operation.to_string(),
            ],
        }
    }
}

impl fmt::Display for ConfigCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.algorithm, self.param)?;
        if let Some(level) = self.security_level {
            write!(f, " ({}-bit)", level)?;
        }
        if let Some(op) = self.operation {
            write!(f, " {}", op)?;
        }
        Ok(())
    }
}

/// Outcome of one timed run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TrialResult {
    /// Elapsed wall time in seconds.
    Measured(f64),
    /// The operation returned an error; no timing recorded.
    Failed,
}

impl TrialResult {
    pub fn seconds(&self) -> Option<f64> {
        match self {
            TrialResult::Measured(secs) => Some(*secs),
            TrialResult::Failed => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TrialResult::Failed)
    }
}

/// A cell, its ordered runs and the derived representative time.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateResult {
    pub cell: ConfigCell,
    pub runs: Vec<TrialResult>,
    /// `None` when fewer than two runs succeeded.
    pub mean: Option<f64>,
}

impl AggregateResult {
    pub fn new(cell: ConfigCell, runs: Vec<TrialResult>) -> Self {
        let mean = mean_excluding_first(&runs);
        Self { cell, runs, mean }
    }

    pub fn failed_runs(&self) -> usize {
        self.runs.iter().filter(|r| r.is_failed()).count()
    }
}

/// All aggregate results of one suite, in enumeration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultTable {
    domain: Domain,
    runs: usize,
    results: Vec<AggregateResult>,
}

impl ResultTable {
    pub fn new(domain: Domain, runs: usize) -> Self {
        Self {
            domain,
            runs,
            results: Vec::new(),
        }
    }

    /// Append the trials of one cell and aggregate them.
    ///
    /// # Panics
    /// If the cell belongs to another domain or the trial count differs
    /// from the table's run count.
    pub fn push(&mut self, cell: ConfigCell, runs: Vec<TrialResult>) {
        assert_eq!(cell.domain(), self.domain, "cell {} pushed into {:?} table", cell, self.domain);
        assert_eq!(runs.len(), self.runs, "cell {} has {} runs, table expects {}", cell, runs.len(), self.runs);
        self.results.push(AggregateResult::new(cell, runs));
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn results(&self) -> &[AggregateResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keygen_id_values() {
        let cell = ConfigCell::keygen("ECC", SecurityLevel::Bits128, "secp256r1");
        assert_eq!(cell.id_values(), ["ECC".to_string(), "128".into(), "secp256r1".into()]);
        assert_eq!(cell.to_string(), "ECC secp256r1 (128-bit)");
    }

    #[test]
    fn test_symmetric_id_values() {
        let cell = ConfigCell::symmetric("AES-GCM", 192, Operation::Decrypt);
        assert_eq!(cell.id_values(), ["AES-GCM".to_string(), "192".into(), "decrypt".into()]);
        assert_eq!(cell.to_string(), "AES-GCM 192 decrypt");
    }

    #[test]
    fn test_table_aggregates_on_push() {
        let mut table = ResultTable::new(Domain::RsaEncryption, 3);
        table.push(
            ConfigCell::rsa_encryption(2048, Operation::Encrypt),
            vec![TrialResult::Measured(0.05), TrialResult::Measured(0.03), TrialResult::Measured(0.04)],
        );
        let mean = table.results()[0].mean.unwrap();
        assert!((mean - 0.035).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_table_rejects_wrong_run_count() {
        let mut table = ResultTable::new(Domain::Symmetric, 3);
        table.push(
            ConfigCell::symmetric("ChaCha20", 256, Operation::Encrypt),
            vec![TrialResult::Measured(0.1)],
        );
    }

    #[test]
    fn test_operation_parse() {
        assert_eq!(Operation::parse("verify"), Some(Operation::Verify));
        assert_eq!(Operation::parse("VERIFY"), None);
    }
}
