use crate::coding::{assign_codewords, build_tree, compute_stats, occurrence_probabilities, CodeStats};
use crate::config::HuffcConfig;
use crate::error::{HuffcError, Result};
use crate::freq::{self, FrequencyEntry};
use log::debug;

/// One row of the result: a symbol with its count, probability and codeword.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolCode {
	pub symbol: char,
	pub count: usize,
	pub probability: f64,
	pub codeword: String,
}

/// Complete result of a code construction run.
///
/// Rows appear in frequency order (descending count, ties by first
/// appearance), matching the order of the frequency table the code was
/// built from.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeReport {
	pub input_len: usize,
	pub symbols: Vec<SymbolCode>,
	pub stats: CodeStats,
}

/// Build a Huffman code for an already-validated frequency table.
///
/// `entries` must be ordered by descending count and `total_len` must equal
/// the sum of all counts; both are the caller's contract.
pub fn build_code(entries: &[FrequencyEntry], total_len: usize) -> Result<CodeReport> {
	if entries.is_empty() {
		return Err(HuffcError::InvalidInput("frequency table is empty".to_string()));
	}

	let probabilities = occurrence_probabilities(entries, total_len)?;
	let symbols: Vec<char> = entries.iter().map(|e| e.symbol).collect();

	let root = build_tree(&symbols, &probabilities)?;
	let table = assign_codewords(&root);
	debug!("assigned {} codewords for {} input symbols", table.len(), total_len);

	// Re-align rows to frequency order by lookup, so the stats pairing never
	// depends on the traversal order of the tree.
	let mut rows = Vec::with_capacity(entries.len());
	for (entry, &probability) in entries.iter().zip(&probabilities) {
		let codeword = table.get(entry.symbol).ok_or_else(|| {
			HuffcError::InvalidInput(format!("no codeword assigned for '{}'", entry.symbol))
		})?;
		rows.push(SymbolCode {
			symbol: entry.symbol,
			count: entry.count,
			probability,
			codeword: codeword.to_string(),
		});
	}

	let lengths: Vec<usize> = rows.iter().map(|r| r.codeword.len()).collect();
	let stats = compute_stats(&probabilities, &lengths)?;

	Ok(CodeReport { input_len: total_len, symbols: rows, stats })
}

/// Validate `text` against `config`, count its symbol frequencies and build
/// the Huffman code.
pub fn encode(text: &str, config: &HuffcConfig) -> Result<CodeReport> {
	freq::validate(text, config)?;

	let entries = freq::count_frequencies(text);
	let total_len = text.chars().count();
	debug!("{} distinct symbols over {} characters", entries.len(), total_len);

	build_code(&entries, total_len)
}
