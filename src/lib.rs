//! # huffc
//!
//! Builds a variable-length prefix code (a Huffman code) for a small alphabet
//! of symbols drawn from an input sequence and reports how good the code is:
//! the entropy of the symbol distribution, the average codeword length, and
//! the coding efficiency.
//!
//! ## Features
//!
//! - **Deterministic construction**: the same input always yields the same
//!   code table, byte for byte
//! - **Full result set**: per-symbol counts, probabilities and codewords plus
//!   entropy, average length and efficiency in one call
//! - **Configurable input policy**: alphabet, input length and alphabet-size
//!   limits are enforced up front with precise errors
//!
//! ## Quick Start
//!
//! ```rust
//! use huffc::{encode_text, HuffcConfig};
//!
//! let report = encode_text("aaaabbcd", &HuffcConfig::default()).unwrap();
//!
//! assert_eq!(report.symbols.len(), 4);
//! assert_eq!(report.symbols[0].codeword, "0"); // most frequent symbol
//! assert!(report.stats.efficiency <= 1.0 + 1e-9);
//! ```
//!
//! ### Building from a pre-counted frequency table
//!
//! ```rust
//! use huffc::{build_code, FrequencyEntry};
//!
//! let entries = vec![
//!     FrequencyEntry { symbol: 'x', count: 3 },
//!     FrequencyEntry { symbol: 'y', count: 1 },
//! ];
//! let report = build_code(&entries, 4).unwrap();
//! assert_eq!(report.symbols[0].codeword, "0");
//! assert_eq!(report.symbols[1].codeword, "1");
//! ```

pub mod cli;
pub mod coding;
pub mod config;
pub mod error;
pub mod freq;
pub mod pipeline;
pub mod report;

// Re-export commonly used types for convenience
pub use coding::{CodeStats, CodeTable, Node};
pub use config::{Alphabet, HuffcConfig};
pub use error::{HuffcError, Result};
pub use freq::FrequencyEntry;
pub use pipeline::{build_code, CodeReport, SymbolCode};

/// Build a Huffman code for a text input.
///
/// Validates `text` against `config`, counts symbol frequencies, builds the
/// tree and returns the complete [`CodeReport`]. This is the one-call API;
/// callers that already hold a validated frequency table can use
/// [`build_code`] directly.
pub fn encode_text(text: &str, config: &HuffcConfig) -> Result<CodeReport> {
    pipeline::encode(text, config)
}

/// Render a report as the standard text table.
pub fn render_report(report: &CodeReport) -> String {
    report::render(report)
}

/// huffc library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
