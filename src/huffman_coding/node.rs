//! Tree nodes for the huffman coding tree.
//!
//! A node is either a leaf holding one symbol, or an internal node owning exactly two children. The
//! enum makes it impossible to build an internal node with a missing child.

use crate::error::{HuffError, Result};

/// Payload of a node: two owned children, or a symbol.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Sum of the weights of every leaf below (or at) this node.
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf for `symbol` seen `weight` times.
    pub fn leaf(symbol: u8, weight: u64) -> Node {
        Node {
            weight,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Join two nodes under a new parent. `left` is the node extracted first.
    /// Fails if the combined weight does not fit in a u64.
    pub fn merge(left: Node, right: Node) -> Result<Node> {
        let weight = left.weight.checked_add(right.weight).ok_or_else(|| {
            HuffError::InvalidInput(format!(
                "weights {} and {} overflow when merged",
                left.weight, right.weight
            ))
        })?;
        Ok(Node {
            weight,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The symbol held by a leaf, None for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    /// Follow one bit down the tree. 0 is left, 1 is right. Leaves and other bit values give None.
    pub fn child(&self, bit: u8) -> Option<&Node> {
        match (&self.node_data, bit) {
            (NodeData::Kids(left, _), 0) => Some(&**left),
            (NodeData::Kids(_, right), 1) => Some(&**right),
            _ => None,
        }
    }

    /// Number of edges on the longest path to a leaf.
    pub fn depth(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => 1 + left.depth().max(right.depth()),
            NodeData::Leaf(_) => 0,
        }
    }

    /// Number of leaves below (or at) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }
}
