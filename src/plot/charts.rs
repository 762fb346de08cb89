//! Chart descriptions built from loaded result tables.
//!
//! Only rows with a defined average are plotted. Times are converted to
//! milliseconds. Series keep the order in which their algorithm first
//! appears in the file; points within a series are sorted by x.

use crate::params::{EcCurve, SecurityLevel, DSA_MODULUS_BITS, EC_CURVES, RSA_MODULUS_BITS};
use crate::report::{LoadedRow, LoadedTable};
use crate::types::Operation;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    /// `(x, milliseconds)`.
    pub points: Vec<(f64, f64)>,
}

/// A line chart ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    /// Image file name inside the output directory.
    pub file_name: &'static str,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub log_y: bool,
    pub series: Vec<Series>,
}

impl LineChart {
    fn new(file_name: &'static str, title: impl Into<String>, x_label: &'static str) -> Self {
        Self {
            file_name,
            title: title.into(),
            x_label,
            y_label: "Time (ms)",
            log_y: false,
            series: Vec::new(),
        }
    }

    fn push_point(&mut self, label: &str, x: f64, millis: f64) {
        match self.series.iter_mut().find(|s| s.label == label) {
            Some(series) => series.points.push((x, millis)),
            None => self.series.push(Series {
                label: label.to_string(),
                points: vec![(x, millis)],
            }),
        }
    }

    fn sorted(mut self) -> Self {
        for series in &mut self.series {
            series.points.sort_by(|a, b| a.0.total_cmp(&b.0));
        }
        self
    }

    /// Copy holding only points with a strictly positive time. A log axis
    /// cannot place zero, so this is what a log-scaled chart draws.
    pub fn positive_only(&self) -> LineChart {
        let mut chart = self.clone();
        for series in &mut chart.series {
            series.points.retain(|&(_, y)| y > 0.0);
        }
        chart
    }

    /// Inclusive data bounds `((x_min, x_max), (y_min, y_max))`, or `None`
    /// when there are no points.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut points = self.series.iter().flat_map(|s| s.points.iter().copied());
        let (x0, y0) = points.next()?;
        Some(points.fold(((x0, x0), (y0, y0)), |((xl, xh), (yl, yh)), (x, y)| {
            ((xl.min(x), xh.max(x)), (yl.min(y), yh.max(y)))
        }))
    }
}

fn operation_of(row: &LoadedRow) -> Option<Operation> {
    Operation::parse(&row.id[2])
}

fn numeric(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

/// Security level a signature row's parameter belongs to.
fn signature_level(row: &LoadedRow) -> Option<SecurityLevel> {
    let param = row.id[1].as_str();
    match row.algorithm() {
        "RSA-PSS" => RSA_MODULUS_BITS.level_of(param.parse().ok()?),
        "DSA" => DSA_MODULUS_BITS.level_of(param.parse().ok()?),
        "ECDSA" => EC_CURVES.level_of(EcCurve::from_name(param)?),
        _ => None,
    }
}

/// Key generation time per security level, log-scaled.
pub fn keygen_chart(table: &LoadedTable) -> LineChart {
    let mut chart = LineChart::new("plot_keygen.png", "Key Pair Generation", "Security level (bits)");
    chart.y_label = "Time (ms, log scale)";
    chart.log_y = true;
    for (row, avg) in table.with_average() {
        if let Some(bits) = numeric(&row.id[1]) {
            chart.push_point(row.algorithm(), bits, avg * 1000.0);
        }
    }
    chart.sorted()
}

/// One chart per symmetric operation, time against key size.
pub fn symmetric_chart(table: &LoadedTable, operation: Operation) -> LineChart {
    let (file_name, title) = match operation {
        Operation::Decrypt => ("plot_symmetric_dec.png", "Symmetric Decryption (AES & ChaCha20)"),
        _ => ("plot_symmetric_enc.png", "Symmetric Encryption (AES & ChaCha20)"),
    };
    let mut chart = LineChart::new(file_name, title, "Key size (bits)");
    for (row, avg) in table.with_average() {
        if operation_of(row) != Some(operation) {
            continue;
        }
        if let Some(bits) = numeric(&row.id[1]) {
            chart.push_point(row.algorithm(), bits, avg * 1000.0);
        }
    }
    chart.sorted()
}

/// Encrypt and decrypt series on one chart, time against modulus size.
pub fn rsa_chart(table: &LoadedTable) -> LineChart {
    let mut chart = LineChart::new("plot_rsa_enc_dec.png", "RSA Encryption & Decryption", "RSA key size (bits)");
    for (row, avg) in table.with_average() {
        let label = match operation_of(row) {
            Some(Operation::Encrypt) => "Encrypt",
            Some(Operation::Decrypt) => "Decrypt",
            _ => continue,
        };
        if let Some(bits) = numeric(&row.id[1]) {
            chart.push_point(label, bits, avg * 1000.0);
        }
    }
    chart.sorted()
}

/// One chart per signature operation, placed on the security-level axis.
pub fn signature_chart(table: &LoadedTable, operation: Operation) -> LineChart {
    let (file_name, title) = match operation {
        Operation::Verify => ("plot_signatures_verify.png", "Digital Signatures — Verify"),
        _ => ("plot_signatures_sign.png", "Digital Signatures — Sign"),
    };
    let mut chart = LineChart::new(file_name, title, "Security level (bits)");
    for (row, avg) in table.with_average() {
        if operation_of(row) != Some(operation) {
            continue;
        }
        if let Some(level) = signature_level(row) {
            chart.push_point(row.algorithm(), f64::from(level.bits()), avg * 1000.0);
        }
    }
    chart.sorted()
}
