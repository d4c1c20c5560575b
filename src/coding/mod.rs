pub mod codebook;
pub mod model;
pub mod stats;
pub mod tree;

pub use codebook::{assign_codewords, CodeTable};
pub use model::occurrence_probabilities;
pub use stats::{average_code_length, compute_stats, entropy, CodeStats};
pub use tree::{build_tree, Node};
