//! Error types for benchmark runs.
//!
//! Two layers, mirroring how failures are treated by the harness:
//! - [`CryptoError`]: one primitive call failed. Recoverable; the trial runner
//!   records a failure marker and moves on.
//! - [`BenchError`]: the run cannot continue (I/O, broken round trip,
//!   unreadable result file).

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single cryptographic operation.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("OpenSSL error: {0}")]
    OpenSsl(#[from] openssl::error::ErrorStack),
    #[error("AEAD operation failed")]
    Aead,
    #[error("Invalid key length: {0} bytes")]
    InvalidKeyLength(usize),
    #[error("Signature rejected by verifier")]
    SignatureRejected,
    #[error("{operation} is not supported for {algorithm} keys")]
    Unsupported {
        operation: &'static str,
        algorithm: String,
    },
}

impl From<aes_gcm::Error> for CryptoError {
    fn from(_: aes_gcm::Error) -> Self {
        Self::Aead
    }
}

/// Errors that abort a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Decrypted output did not match the original input.
    #[error("Round-trip integrity violation: {cell} run {run} produced mismatching output")]
    IntegrityViolation { cell: String, run: usize },
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A result file could not be opened or parsed back.
    #[error("Failed to load results from {path}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("Plot rendering failed for {path}: {reason}")]
    Plot { path: PathBuf, reason: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BenchError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for benchmark operations.
pub type Result<T> = core::result::Result<T, BenchError>;
