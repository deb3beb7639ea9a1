//! The compression module wraps the huffman core in a byte-aligned container.
//!
//! The core only deals in symbols and abstract bits. To get back from a file of packed bits, the
//! decoder needs the same tree the encoder used. Rather than serialising the tree, the container
//! stores the frequency table, and the decoder rebuilds the tree from it with the same insertion
//! order. Tree construction is deterministic, so this reproduces the encoder's tree exactly.
//!
//! Layout (big-endian, bits packed most significant first):
//! - magic: the four bytes `HUF1`
//! - symbol count: u16, 0..=256
//! - per symbol: u8 symbol, u64 weight (strictly ascending symbols, non-zero weights)
//! - bit count: u64, number of meaningful payload bits
//! - payload: the code bits, zero padded to a whole byte
//!
//! Empty input is stored with a symbol count of 0 and no payload.
//!
//! Compression:
//! - Frequency count of the input.
//! - Tree build and code table derivation.
//! - Header, then every input byte's code onto the bitstream.
//!
//! Decompression follows the inverse of the compression process.
//! - Header check and frequency table read.
//! - Tree rebuild.
//! - Bit by bit tree walk until the recorded bit count is used up.
//!

pub mod compress;
pub mod decompress;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::info;

use crate::error::{HuffError, Result};
use crate::tools::cli::{Opts, Output};

/// Container signature.
pub const MAGIC: [u8; 4] = *b"HUF1";
/// At most one entry per byte value.
pub const MAX_SYMBOLS: usize = 256;
/// Extension added to compressed files.
pub const EXTENSION: &str = ".huf";

/// Send `data` wherever the options say output goes. Refuses to clobber an existing file unless
/// forced.
pub(crate) fn write_output(opts: &Opts, fname: &str, data: &[u8]) -> Result<()> {
    match opts.output {
        Output::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(data)?;
            out.flush()?;
        }
        Output::File => {
            if !opts.force_overwrite && Path::new(fname).exists() {
                return Err(HuffError::OutputExists(fname.to_string()));
            }
            fs::write(fname, data)?;
            info!("Wrote {} bytes to {}", data.len(), fname);
        }
    }
    Ok(())
}

/// The input file named in the options.
pub(crate) fn input_file(opts: &Opts) -> Result<&str> {
    opts.file
        .as_deref()
        .ok_or_else(|| HuffError::InvalidInput("no input file given".to_string()))
}
