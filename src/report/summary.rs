//! Console summary printed after each suite.

use crate::types::ResultTable;

/// Average cell as shown on the console.
fn average_label(mean: Option<f64>) -> String {
    match mean {
        Some(secs) => format!("{secs:.6}s"),
        None => "Failed".to_string(),
    }
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Left-aligned columns separated by two spaces, with a dashed rule under
/// the header and after the last row. Empty tables render as nothing.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let rule = "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1));

    let mut out = String::new();
    out.push_str(&format_row(headers.iter().copied(), &widths));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Summary of one suite's table: identifying values plus the average.
pub fn summarize(table: &ResultTable) -> String {
    let rows: Vec<Vec<String>> = table
        .results()
        .iter()
        .map(|result| {
            let mut row = result.cell.id_values().to_vec();
            row.push(average_label(result.mean));
            row
        })
        .collect();
    render_table(&table.domain().summary_headers(), &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConfigCell, Domain, Operation, TrialResult};

    #[test]
    fn test_columns_align() {
        let out = render_table(&["A", "Long header"], &[vec!["wide value".into(), "x".into()]]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "A           Long header");
        assert_eq!(lines[1], "-".repeat(23));
        assert_eq!(lines[2], "wide value  x          ");
        assert_eq!(lines[3], lines[1]);
    }

    #[test]
    fn test_empty_table_prints_nothing() {
        assert!(render_table(&["A"], &[]).is_empty());
    }

    #[test]
    fn test_failed_average_label() {
        let mut table = ResultTable::new(Domain::RsaEncryption, 2);
        table.push(
            ConfigCell::rsa_encryption(1024, Operation::Decrypt),
            vec![TrialResult::Measured(0.5), TrialResult::Failed],
        );
        table.push(
            ConfigCell::rsa_encryption(1024, Operation::Encrypt),
            vec![TrialResult::Measured(0.5), TrialResult::Measured(0.001234)],
        );
        let out = summarize(&table);
        assert!(out.contains("Failed"));
        assert!(out.contains("0.001234s"));
        assert!(out.starts_with("Algorithm  Key   Op       Avg Time"));
    }
}
