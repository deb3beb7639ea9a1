//! Builds the huffman tree from a set of weighted leaves.
//!
//! Every leaf goes into the priority queue in the order given. The two lightest nodes are then
//! repeatedly pulled off and joined under a new parent (first extracted on the left), and the parent is
//! put back, until one node is left. That node is the root.
//!
//! A single leaf is its own root (a tree of height 0). Code derivation and decoding handle that case
//! separately.

use log::{debug, trace};
use rustc_hash::FxHashSet;

use super::node::Node;
use super::priority_queue::PriorityQueue;
use crate::error::{HuffError, Result};

/// A finished, immutable coding tree. Owns every node through the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build a tree from a frequency table of (symbol, weight) pairs.
    ///
    /// Table order is the leaf insertion order, so the same table always gives the same tree.
    /// Zero weights are skipped. An empty (or all-zero) table, a repeated symbol, or weights whose
    /// total does not fit in a u64 are rejected.
    pub fn from_frequencies(freqs: &[(u8, u64)]) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let mut leaves = Vec::with_capacity(freqs.len());
        let mut total = 0_u64;
        for &(symbol, weight) in freqs {
            if !seen.insert(symbol) {
                return Err(HuffError::InvalidInput(format!(
                    "symbol 0x{:02x} appears twice in the frequency table",
                    symbol
                )));
            }
            total = total.checked_add(weight).ok_or_else(|| {
                HuffError::InvalidInput(format!(
                    "total weight overflows at symbol 0x{:02x}",
                    symbol
                ))
            })?;
            if weight > 0 {
                leaves.push(Node::leaf(symbol, weight));
            }
        }
        build(leaves)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total weight of all leaves.
    pub fn weight(&self) -> u64 {
        self.root.weight
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest code the tree produces (0 for a single leaf).
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// True when the whole alphabet is a single symbol.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }
}

/// Merge `leaves` into a single tree. Fails if there are no leaves.
pub fn build(leaves: Vec<Node>) -> Result<HuffmanTree> {
    if leaves.is_empty() {
        return Err(HuffError::InvalidInput(
            "cannot build a tree without any symbols".to_string(),
        ));
    }
    let leaf_count = leaves.len();

    let mut queue = PriorityQueue::with_capacity(leaf_count);
    leaves.into_iter().for_each(|leaf| queue.insert(leaf));

    // Pare the queue down to one node, joining the two lightest each time.
    while queue.len() > 1 {
        let left = queue.extract_min()?;
        let right = queue.extract_min()?;
        trace!("merging {} + {}", left.weight, right.weight);
        queue.insert(Node::merge(left, right)?);
    }

    let root = queue.extract_min()?;
    debug!(
        "Built huffman tree: {} leaves, depth {}, total weight {}",
        leaf_count,
        root.depth(),
        root.weight
    );
    Ok(HuffmanTree { root })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::node::NodeData;

    fn textbook() -> Vec<(u8, u64)> {
        vec![
            (b'a', 5),
            (b'b', 9),
            (b'c', 12),
            (b'd', 13),
            (b'e', 16),
            (b'f', 45),
        ]
    }

    /// Check parent weight == sum of children everywhere, and return the leaf weight total.
    fn check_weights(node: &Node) -> u64 {
        match &node.node_data {
            NodeData::Kids(left, right) => {
                let sum = check_weights(left) + check_weights(right);
                assert_eq!(node.weight, sum);
                sum
            }
            NodeData::Leaf(_) => node.weight,
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(build(vec![]), Err(HuffError::InvalidInput(_))));
        assert!(matches!(
            HuffmanTree::from_frequencies(&[]),
            Err(HuffError::InvalidInput(_))
        ));
        assert!(matches!(
            HuffmanTree::from_frequencies(&[(b'a', 0), (b'b', 0)]),
            Err(HuffError::InvalidInput(_))
        ));
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let result = HuffmanTree::from_frequencies(&[(b'a', 1), (b'a', 2)]);
        assert!(matches!(result, Err(HuffError::InvalidInput(_))));
    }

    #[test]
    fn overflowing_weights_are_rejected() {
        assert!(matches!(
            HuffmanTree::from_frequencies(&[(b'a', u64::MAX), (b'b', u64::MAX)]),
            Err(HuffError::InvalidInput(_))
        ));
        // build() on its own also refuses a merge that would wrap.
        let leaves = vec![Node::leaf(b'a', u64::MAX), Node::leaf(b'b', 2)];
        assert!(matches!(build(leaves), Err(HuffError::InvalidInput(_))));

        let tree = HuffmanTree::from_frequencies(&[(b'a', u64::MAX - 1), (b'b', 1)]).unwrap();
        assert_eq!(tree.weight(), u64::MAX);
    }

    #[test]
    fn single_leaf_is_the_root() {
        let tree = HuffmanTree::from_frequencies(&[(b'A', 5)]).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.root().symbol(), Some(b'A'));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.weight(), 5);
    }

    #[test]
    fn zero_weights_are_skipped() {
        let tree = HuffmanTree::from_frequencies(&[(b'a', 0), (b'b', 3), (b'c', 0)]).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.root().symbol(), Some(b'b'));
    }

    #[test]
    fn textbook_merges_lightest_first() {
        let tree = HuffmanTree::from_frequencies(&textbook()).unwrap();
        let root = tree.root();
        assert_eq!(tree.weight(), 100);
        assert_eq!(tree.leaf_count(), 6);
        assert_eq!(tree.depth(), 4);

        // f (45) is extracted before the 55 node, so it sits on the left of the root.
        assert_eq!(root.child(0).and_then(Node::symbol), Some(b'f'));

        // a + b = 14 is the first merge and lands at the bottom of the right side.
        let fourteen = root
            .child(1)
            .and_then(|n| n.child(1))
            .and_then(|n| n.child(0))
            .unwrap();
        assert_eq!(fourteen.weight, 14);
        assert_eq!(fourteen.child(0).and_then(Node::symbol), Some(b'a'));
        assert_eq!(fourteen.child(1).and_then(Node::symbol), Some(b'b'));
    }

    #[test]
    fn weights_are_consistent() {
        let tree = HuffmanTree::from_frequencies(&textbook()).unwrap();
        assert_eq!(check_weights(tree.root()), 100);

        let freqs: Vec<(u8, u64)> = (0..=255_u8).map(|s| (s, (s as u64 % 7) + 1)).collect();
        let total: u64 = freqs.iter().map(|&(_, w)| w).sum();
        let tree = HuffmanTree::from_frequencies(&freqs).unwrap();
        assert_eq!(check_weights(tree.root()), total);
        assert_eq!(tree.leaf_count(), 256);
    }

    #[test]
    fn building_twice_gives_the_same_tree() {
        let freqs: Vec<(u8, u64)> = b"abracadabra alakazam"
            .iter()
            .map(|&s| (s, 1 + (s as u64 % 3)))
            .fold(Vec::new(), |mut acc, (s, w)| {
                if !acc.iter().any(|&(seen, _)| seen == s) {
                    acc.push((s, w));
                }
                acc
            });
        let first = HuffmanTree::from_frequencies(&freqs).unwrap();
        let second = HuffmanTree::from_frequencies(&freqs).unwrap();
        assert_eq!(first, second);
    }
}
