use huffc::{encode_text, render_report, HuffcConfig};

fn main() {
	let config = HuffcConfig::default();
	let report = encode_text("peppermint", &config).unwrap();

	for row in &report.symbols {
		println!("'{}' x{} -> {}", row.symbol, row.count, row.codeword);
	}
	println!(
		"entropy {:.4} bits, average length {:.4} bits, efficiency {:.4}",
		report.stats.entropy, report.stats.average_length, report.stats.efficiency
	);

	print!("{}", render_report(&report));
}
