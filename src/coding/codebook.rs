//! Codeword assignment
//!
//! Walks a completed Huffman tree and assigns a binary codeword to every
//! leaf: "up" edges append '0', "down" edges append '1'.

use crate::coding::tree::Node;

/// Ordered symbol-to-codeword table.
///
/// Entries appear in the order leaves are first visited by the depth-first,
/// up-before-down traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(char, String)>,
}

impl CodeTable {
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, code)| code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(s, code)| (*s, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assign a codeword to every leaf of the tree.
///
/// A degenerate single-leaf tree gets the one-bit codeword "0"; otherwise
/// the accumulated code starts empty at the root and grows by one bit per
/// edge, so every codeword is non-empty and the set is a prefix code.
pub fn assign_codewords(root: &Node) -> CodeTable {
    let entries = match root {
        Node::Leaf { symbol, .. } => vec![(*symbol, "0".to_string())],
        Node::Internal { .. } => collect(root, String::new()),
    };
    CodeTable { entries }
}

fn collect(node: &Node, code: String) -> Vec<(char, String)> {
    match node {
        Node::Leaf { symbol, .. } => vec![(*symbol, code)],
        Node::Internal { up, down, .. } => {
            let mut entries = collect(up, format!("{}0", code));
            entries.extend(collect(down, format!("{}1", code)));
            entries
        }
    }
}
