//! Benchmark run configuration.
//!
//! Defaults reproduce the standard run: 10 trials per cell, a 10 KiB
//! symmetric plaintext, a 32-byte RSA-OAEP message, a 128-byte signed
//! message, output under `results/`, and every security level.
//!
//! There are no command-line flags. [`BenchConfig::from_env`] layers, in
//! order: defaults, the JSON file named by `CRYPTO_BENCH_CONFIG` (any subset
//! of fields), then `CRYPTO_BENCH_RUNS` and `CRYPTO_BENCH_OUT_DIR`.
//!
//! The security levels are not part of the file format: a run from the
//! environment always covers every level. Only embedding code narrows them,
//! through [`BenchConfig::with_security_levels`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};
use crate::params::{SecurityLevel, RSA_MODULUS_BITS};

pub const CONFIG_PATH_VAR: &str = "CRYPTO_BENCH_CONFIG";
pub const RUNS_VAR: &str = "CRYPTO_BENCH_RUNS";
pub const OUT_DIR_VAR: &str = "CRYPTO_BENCH_OUT_DIR";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Trials per configuration cell (N).
    pub runs: usize,
    /// Symmetric plaintext size in bytes.
    pub plaintext_size: usize,
    /// RSA-OAEP message size in bytes.
    pub rsa_message_size: usize,
    /// Signed message size in bytes.
    pub signature_message_size: usize,
    pub output_dir: PathBuf,
    /// Security levels the key-generation, RSA and signature suites visit.
    #[serde(skip)]
    pub security_levels: Vec<SecurityLevel>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runs: 10,
            plaintext_size: 10 * 1024,
            rsa_message_size: 32,
            signature_message_size: 128,
            output_dir: PathBuf::from("results"),
            security_levels: SecurityLevel::ALL.to_vec(),
        }
    }
}

impl BenchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with the process environment.
    ///
    /// # Errors
    /// If the config file cannot be read or parsed, or `CRYPTO_BENCH_RUNS`
    /// is not a number.
    pub fn from_env() -> Result<Self> {
        let base = match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_json_file(Path::new(&path))?,
            None => Self::default(),
        };
        base.with_overrides(
            std::env::var(RUNS_VAR).ok().as_deref(),
            std::env::var(OUT_DIR_VAR).ok().as_deref(),
        )
    }

    /// Load a (possibly partial) JSON configuration.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| BenchError::InvalidConfig(e.to_string()))
    }

    /// Apply string overrides as read from environment variables.
    pub fn with_overrides(mut self, runs: Option<&str>, output_dir: Option<&str>) -> Result<Self> {
        if let Some(runs) = runs {
            self.runs = runs
                .trim()
                .parse()
                .map_err(|_| BenchError::InvalidConfig(format!("{RUNS_VAR} must be a count, got {runs:?}")))?;
        }
        if let Some(dir) = output_dir {
            self.output_dir = PathBuf::from(dir);
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_security_levels(mut self, levels: impl IntoIterator<Item = SecurityLevel>) -> Self {
        self.security_levels = levels.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_rsa_message_size(mut self, bytes: usize) -> Self {
        self.rsa_message_size = bytes;
        self
    }

    #[must_use]
    pub fn with_plaintext_size(mut self, bytes: usize) -> Self {
        self.plaintext_size = bytes;
        self
    }

    /// Largest RSA-OAEP message the smallest selected modulus accepts.
    ///
    /// OAEP with SHA-256 leaves `k - 2 * 32 - 2` bytes of a `k`-byte modulus.
    pub fn rsa_message_capacity(&self) -> Option<usize> {
        self.security_levels
            .iter()
            .filter_map(|&level| RSA_MODULUS_BITS.get(level))
            .min()
            .map(|bits| (bits as usize / 8).saturating_sub(66))
    }

    /// # Errors
    ///
    /// Returns an error if:
    /// - `runs` is zero
    /// - any payload size is zero
    /// - the RSA message does not fit OAEP-SHA-256 at the smallest selected modulus
    /// - no security level is selected, or one is selected twice
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(BenchError::InvalidConfig("runs must be at least 1".into()));
        }
        if self.plaintext_size == 0 || self.rsa_message_size == 0 || self.signature_message_size == 0 {
            return Err(BenchError::InvalidConfig("payload sizes must be non-zero".into()));
        }
        if self.security_levels.is_empty() {
            return Err(BenchError::InvalidConfig("no security levels selected".into()));
        }
        let levels = &self.security_levels;
        if let Some(level) = levels.iter().enumerate().find_map(|(i, l)| levels[..i].contains(l).then_some(l)) {
            return Err(BenchError::InvalidConfig(format!("security level {level} selected twice")));
        }
        if let Some(capacity) = self.rsa_message_capacity() {
            if self.rsa_message_size > capacity {
                return Err(BenchError::InvalidConfig(format!(
                    "rsa_message_size {} exceeds the {capacity}-byte OAEP limit of the smallest RSA key",
                    self.rsa_message_size
                )));
            }
        }
        Ok(())
    }
}
