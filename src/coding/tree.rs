//! Huffman tree construction
//!
//! The working list starts sorted by descending weight and is never
//! re-sorted: each step merges the two last elements and appends the new
//! internal node at the end. This append-only variant is the defining
//! behavior of the coder and is kept as-is, even though it does not always
//! pick the two globally smallest weights the way a priority-queue merge
//! would.

use crate::error::{HuffcError, Result};

/// A node of the Huffman tree: a leaf carrying a symbol, or an internal node
/// owning exactly two children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf { symbol: char, weight: f64 },
    Internal { weight: f64, up: Box<Node>, down: Box<Node> },
}

impl Node {
    pub fn weight(&self) -> f64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Build the Huffman tree for symbols and their probabilities, both ordered
/// by descending weight, and return its root.
///
/// A single-symbol alphabet yields the leaf itself as a degenerate tree; the
/// codeword assigner maps it to "0".
pub fn build_tree(symbols: &[char], probabilities: &[f64]) -> Result<Node> {
    if symbols.is_empty() || probabilities.is_empty() {
        return Err(HuffcError::InvalidInput(
            "cannot build a tree from an empty symbol set".to_string(),
        ));
    }
    if symbols.len() != probabilities.len() {
        return Err(HuffcError::InvalidInput(format!(
            "{} symbols but {} probabilities",
            symbols.len(),
            probabilities.len()
        )));
    }

    let mut nodes: Vec<Node> = symbols
        .iter()
        .zip(probabilities)
        .map(|(&symbol, &weight)| Node::Leaf { symbol, weight })
        .collect();

    if nodes.len() == 1 {
        return Ok(nodes.remove(0));
    }

    while nodes.len() > 1 {
        // First pop is the last (lightest-positioned) element and becomes the
        // "down" child; the second pop becomes the "up" child.
        if let (Some(down), Some(up)) = (nodes.pop(), nodes.pop()) {
            let weight = up.weight() + down.weight();
            nodes.push(Node::Internal {
                weight,
                up: Box::new(up),
                down: Box::new(down),
            });
        }
    }

    nodes
        .pop()
        .ok_or_else(|| HuffcError::InvalidInput("working list drained without a root".to_string()))
}
