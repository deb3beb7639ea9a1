//! The tools module provides helper functions around the huffman core.
//!
//! The tools are:
//! - cli: Command line interface and the resolved run options.
//! - freq_count: Frequency count of the input data.
//!
pub mod cli;
pub mod freq_count;
