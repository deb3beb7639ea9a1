//! Derives the symbol -> code table from a finished tree.
//!
//! Codes are the root-to-leaf paths: 0 for every step left, 1 for every step right. Distinct leaves
//! give distinct paths, and no path to a leaf passes through another leaf, so the code set is
//! prefix-free by construction.
//!
//! A tree made of a single leaf has no paths at all. That symbol gets the one-bit code "0".

use std::fmt::{Display, Formatter};

use log::trace;
use rustc_hash::FxHashMap;

use super::node::{Node, NodeData};
use super::tree_builder::HuffmanTree;

/// The bits of one symbol's code, first bit first. Each element is 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<u8>);

impl Code {
    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every bit of self starts `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Symbol -> code mapping, read-only once derived.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: FxHashMap<u8, Code>,
}

impl CodeTable {
    /// Walk `tree` depth first (left before right) and record the path to every leaf.
    pub fn derive(tree: &HuffmanTree) -> CodeTable {
        let mut codes = FxHashMap::default();
        let root = tree.root();

        match root.node_data {
            NodeData::Leaf(symbol) => {
                codes.insert(symbol, Code(vec![0]));
            }
            NodeData::Kids(..) => {
                let mut path = Vec::with_capacity(tree.depth());
                collect_codes(root, &mut path, &mut codes);
            }
        }

        let table = CodeTable { codes };
        for (symbol, code) in table.iter() {
            trace!("Symbol: 0x{:02x} ({:?}), Code: {}", symbol, symbol as char, code);
        }
        table
    }

    /// The code for `symbol`, if the tree contained it.
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        let mut entries: Vec<(u8, &Code)> = self.codes.iter().map(|(&s, c)| (s, c)).collect();
        entries.sort_unstable_by_key(|&(s, _)| s);
        entries.into_iter()
    }

    /// Length of the longest code.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Number of bits the symbols counted in `freqs` will encode to.
    /// Symbols missing from the table are not counted.
    pub fn encoded_bits(&self, freqs: &[(u8, u64)]) -> u64 {
        freqs
            .iter()
            .filter_map(|&(symbol, weight)| self.get(symbol).map(|c| c.len() as u64 * weight))
            .sum()
    }
}

/// Recursively walk the tree, growing and shrinking `path` as we go down and back up.
fn collect_codes(node: &Node, path: &mut Vec<u8>, codes: &mut FxHashMap<u8, Code>) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            path.push(0);
            collect_codes(left, path, codes);
            path.pop();

            path.push(1);
            collect_codes(right, path, codes);
            path.pop();
        }
        NodeData::Leaf(symbol) => {
            codes.insert(*symbol, Code(path.clone()));
        }
    }
}
