//! The bitstream module forms the I/O subsystem for the container format.
//!
//! Huffman codes are produced one bit at a time and are not byte aligned. The BitPacker gathers
//! them (and the fixed width header fields) into bytes, most significant bit first. The BitReader
//! walks the same layout back.
//!
pub mod bitpacker;
pub mod bitreader;
