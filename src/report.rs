//! Text rendering of a code construction result

use crate::pipeline::CodeReport;

/// Render a report as a fixed-width result table followed by the three
/// summary statistics.
pub fn render(report: &CodeReport) -> String {
    let mut out = String::new();

    out.push_str("| symbol | count | probability | codeword\n");
    for row in &report.symbols {
        out.push_str(&format!(
            "|   {}    |  {:>3}  |   {:.5}   | {}\n",
            row.symbol, row.count, row.probability, row.codeword
        ));
    }

    out.push('\n');
    out.push_str(&format!("entropy H(A)        : {:.6}\n", report.stats.entropy));
    out.push_str(&format!("average code length : {:.6}\n", report.stats.average_length));
    out.push_str(&format!("efficiency          : {:.6}\n", report.stats.efficiency));

    out
}
