//! Fixed-order benchmark run: four suites, then all plots.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::report::{summarize, write_table};
use crate::suites;
use crate::types::{Domain, ResultTable};

fn banner(domain: Domain) -> &'static str {
    match domain {
        Domain::KeyGeneration => "==== Key Generation Benchmarks ====",
        Domain::Symmetric => "==== Symmetric Cipher Benchmarks ====",
        Domain::RsaEncryption => "==== RSA Encryption Benchmarks ====",
        Domain::Signature => "==== Digital Signature Benchmarks ====",
    }
}

fn run_suite(domain: Domain, config: &BenchConfig) -> Result<ResultTable> {
    match domain {
        Domain::KeyGeneration => Ok(suites::keygen::run(config)),
        Domain::Symmetric => suites::symmetric::run(config),
        Domain::RsaEncryption => suites::rsa_enc::run(config),
        Domain::Signature => suites::signature::run(config),
    }
}

/// Write `table` into `dir` and print its summary.
pub fn persist(table: &ResultTable, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(table.domain().file_name());
    write_table(table, &path)?;
    println!("[+] {} benchmark complete -> {}", table.domain().title(), path.display());
    print!("{}", summarize(table));
    println!();
    Ok(path)
}

/// Run every suite in order, writing each table as soon as it is complete.
///
/// # Errors
/// Stops at the first I/O failure or round-trip integrity violation.
pub fn run_benchmarks(config: &BenchConfig) -> Result<Vec<ResultTable>> {
    config.validate()?;
    std::fs::create_dir_all(&config.output_dir).map_err(|e| BenchError::io(&config.output_dir, e))?;

    let mut tables = Vec::with_capacity(Domain::ALL.len());
    for (i, domain) in Domain::ALL.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", banner(domain));
        info!(suite = domain.title(), runs = config.runs, "suite started");

        let table = run_suite(domain, config)?;
        let failed: usize = table.results().iter().map(|r| r.failed_runs()).sum();
        info!(suite = domain.title(), cells = table.len(), failed_runs = failed, "suite finished");

        persist(&table, &config.output_dir)?;
        tables.push(table);
    }

    println!("\n==== Benchmarking complete! Data saved to '{}' ====\n", config.output_dir.display());
    Ok(tables)
}

/// Render every chart from the result files in `dir`.
#[cfg(feature = "plots")]
pub fn generate_plots(dir: &Path) -> Result<Vec<PathBuf>> {
    println!("Generating plots...");
    let mut written = Vec::new();
    for domain in Domain::ALL {
        written.extend(crate::plot::plot_domain(dir, domain)?);
    }
    println!("All plots generated successfully!");
    Ok(written)
}

/// Benchmarks followed by plots.
#[cfg(feature = "plots")]
pub fn run(config: &BenchConfig) -> Result<()> {
    run_benchmarks(config)?;
    generate_plots(&config.output_dir)?;
    Ok(())
}
