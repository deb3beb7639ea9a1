//! The huffman module builds a prefix-free code for a byte alphabet from symbol frequencies, and
//! uses it to turn symbols into bits and back.
//!
//! The pieces, leaf first:
//! - priority_queue: min-queue of tree nodes, stable on equal weights.
//! - tree_builder: merges the two lightest nodes until one root remains.
//! - code_table: root-to-leaf paths as codes (left = 0, right = 1).
//! - encoder: symbols to bits through the code table.
//! - decoder: bits to symbols by walking the tree.
//!
//! The tree and the code table are immutable once built and can be shared freely between threads.
//! Only the queue holds mutable state, and it lives inside a single build call.

pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod node;
pub mod priority_queue;
pub mod tree_builder;

pub use code_table::{Code, CodeTable};
pub use decoder::{decode, decode_str, Decoder};
pub use encoder::{encode, encode_to_string, encode_with};
pub use node::{Node, NodeData};
pub use tree_builder::{build, HuffmanTree};
