//! Plotting stage: result CSVs back in, PNG line charts out.
//!
//! | Result file             | Charts                                              |
//! |-------------------------|-----------------------------------------------------|
//! | `keygen_results.csv`    | `plot_keygen.png` (log time axis)                   |
//! | `symmetric_results.csv` | `plot_symmetric_enc.png`, `plot_symmetric_dec.png`  |
//! | `rsa_enc_results.csv`   | `plot_rsa_enc_dec.png`                              |
//! | `signature_results.csv` | `plot_signatures_sign.png`, `plot_signatures_verify.png` |

pub mod charts;
pub mod render;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::report::{load_table, LoadedTable};
use crate::types::{Domain, Operation};

pub use charts::{LineChart, Series};
pub use render::render;

/// Charts derived from one domain's table.
pub fn charts_for(table: &LoadedTable) -> Vec<LineChart> {
    match table.domain {
        Domain::KeyGeneration => vec![charts::keygen_chart(table)],
        Domain::Symmetric => vec![
            charts::symmetric_chart(table, Operation::Encrypt),
            charts::symmetric_chart(table, Operation::Decrypt),
        ],
        Domain::RsaEncryption => vec![charts::rsa_chart(table)],
        Domain::Signature => vec![
            charts::signature_chart(table, Operation::Sign),
            charts::signature_chart(table, Operation::Verify),
        ],
    }
}

/// Load `domain`'s result file from `dir` and render its charts next to it.
///
/// # Errors
/// [`BenchError::Load`](crate::BenchError::Load) if the CSV is absent or
/// malformed; nothing is rendered in that case.
pub fn plot_domain(dir: &Path, domain: Domain) -> Result<Vec<PathBuf>> {
    let table = load_table(&dir.join(domain.file_name()), domain)?;
    let mut written = Vec::new();
    for chart in charts_for(&table) {
        let path = dir.join(chart.file_name);
        render(&chart, &path)?;
        info!(path = %path.display(), series = chart.series.len(), "plot rendered");
        println!("Saved plot to {}", path.display());
        written.push(path);
    }
    Ok(written)
}
