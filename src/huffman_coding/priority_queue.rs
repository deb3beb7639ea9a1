//! Min-priority queue of tree nodes, keyed by weight.
//!
//! Built on a binary heap. Every entry carries a sequence number taken at insertion time, so entries of
//! equal weight leave the queue in the order they entered it. The tree (and so every code) depends on
//! this order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::node::Node;
use crate::error::{HuffError, Result};

#[derive(Debug)]
struct Entry {
    weight: u64,
    seq: u64,
    node: Node,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    /// Reversed so the max-heap pops the lightest, oldest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Add a node. Ties on weight are broken by insertion order.
    pub fn insert(&mut self, node: Node) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            weight: node.weight,
            seq,
            node,
        });
    }

    /// Remove and return the lightest node (the earliest inserted among equals).
    pub fn extract_min(&mut self) -> Result<Node> {
        self.heap
            .pop()
            .map(|entry| entry.node)
            .ok_or(HuffError::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extracts_in_weight_order() {
        let mut pq = PriorityQueue::new();
        for (sym, w) in [(b'x', 7), (b'y', 2), (b'z', 5)] {
            pq.insert(Node::leaf(sym, w));
        }
        let order: Vec<u64> = (0..3).map(|_| pq.extract_min().unwrap().weight).collect();
        assert_eq!(order, vec![2, 5, 7]);
        assert!(pq.is_empty());
    }

    #[test]
    fn equal_weights_leave_in_insertion_order() {
        let mut pq = PriorityQueue::with_capacity(5);
        for sym in [9_u8, 3, 7, 1, 5] {
            pq.insert(Node::leaf(sym, 4));
        }
        let order: Vec<u8> = (0..5)
            .map(|_| pq.extract_min().unwrap().symbol().unwrap())
            .collect();
        assert_eq!(order, vec![9, 3, 7, 1, 5]);
    }

    #[test]
    fn later_insert_of_equal_weight_goes_last() {
        let mut pq = PriorityQueue::new();
        pq.insert(Node::leaf(b'a', 3));
        pq.insert(Node::leaf(b'b', 5));
        let first = pq.extract_min().unwrap();
        pq.insert(Node::merge(first, Node::leaf(b'c', 2)).unwrap());
        // The merged node weighs 5, same as 'b', but was inserted after it.
        assert_eq!(pq.extract_min().unwrap().symbol(), Some(b'b'));
        assert_eq!(pq.extract_min().unwrap().weight, 5);
    }

    #[test]
    fn empty_queue_errors() {
        let mut pq = PriorityQueue::new();
        assert_eq!(pq.len(), 0);
        assert!(matches!(pq.extract_min(), Err(HuffError::EmptyQueue)));
    }
}
