//! Huffman coding of byte streams.
//!
//! Version 0.1.0
//!
//! Builds a prefix-free code from the byte frequencies of the input, and uses it to turn the input
//! into a stream of bits and back. The core (the huffman_coding module) works purely in memory: a
//! frequency table goes in, a tree and code table come out, and the encoder and decoder move
//! between symbols and bits.
//!
//! Around the core sit a byte-aligned container (compression), the bit packing it relies on
//! (bitstream), and the frequency counting and command line helpers (tools).
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> hufftree -z test.txt`
//!
//! This will compress the file and create the file test.txt.huf. `hufftree -t test.txt` prints the
//! code table instead.
//!
//! In code:
//!
//! ```
//! use hufftree::huffman_coding::{decode, encode, CodeTable, HuffmanTree};
//!
//! let tree = HuffmanTree::from_frequencies(&[(b'a', 5), (b'b', 9), (b'c', 12)]).unwrap();
//! let table = CodeTable::derive(&tree);
//! let bits = encode(b"cab", &table).unwrap();
//! assert_eq!(decode(&bits, &tree).unwrap(), b"cab".to_vec());
//! ```
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::{HuffError, Result};
