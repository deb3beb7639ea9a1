use std::fs;

use log::{debug, info, trace};

use super::{input_file, write_output, EXTENSION, MAGIC, MAX_SYMBOLS};
use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};
use crate::huffman_coding::{Decoder, HuffmanTree};
use crate::tools::cli::Opts;

/// Read a fixed width header field, treating running out of data as a bad container.
fn read_field<R: std::io::Read>(br: &mut BitReader<R>, bits: usize, what: &str) -> Result<u64> {
    br.bint(bits)?.ok_or_else(|| {
        HuffError::InvalidContainer(format!("unexpected end of data while reading {}", what))
    })
}

/// Read and validate the frequency table stored in the header.
fn read_freqs<R: std::io::Read>(br: &mut BitReader<R>) -> Result<Vec<(u8, u64)>> {
    let count = read_field(br, 16, "symbol count")? as usize;
    if count > MAX_SYMBOLS {
        return Err(HuffError::InvalidContainer(format!(
            "{} symbols listed, at most {} allowed",
            count, MAX_SYMBOLS
        )));
    }

    let mut freqs: Vec<(u8, u64)> = Vec::with_capacity(count);
    let mut total = 0_u64;
    for _ in 0..count {
        let symbol = read_field(br, 8, "symbol")? as u8;
        let weight = read_field(br, 64, "weight")?;
        if weight == 0 {
            return Err(HuffError::InvalidContainer(format!(
                "symbol 0x{:02x} has a zero weight",
                symbol
            )));
        }
        total = total.checked_add(weight).ok_or_else(|| {
            HuffError::InvalidContainer(format!(
                "header weights overflow at symbol 0x{:02x}",
                symbol
            ))
        })?;
        // Ascending order is what the encoder writes, and rules out duplicates.
        if let Some(&(prev, _)) = freqs.last() {
            if symbol <= prev {
                return Err(HuffError::InvalidContainer(format!(
                    "symbol 0x{:02x} follows 0x{:02x}, table must be ascending",
                    symbol, prev
                )));
            }
        }
        freqs.push((symbol, weight));
    }
    Ok(freqs)
}

/// Decompress a complete container produced by compress_bytes.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut br = BitReader::new(data);

    // Look for a valid signature.
    match br.bytes(MAGIC.len())? {
        Some(magic) if magic == MAGIC => trace!("Found a valid signature."),
        _ => {
            return Err(HuffError::InvalidContainer(
                "missing HUF1 signature".to_string(),
            ))
        }
    }

    let freqs = read_freqs(&mut br)?;
    let bit_count = read_field(&mut br, 64, "bit count")?;
    debug!(
        "Header lists {} symbols and {} payload bits, payload starts at {}.",
        freqs.len(),
        bit_count,
        br.loc()
    );

    if freqs.is_empty() {
        if bit_count != 0 {
            return Err(HuffError::InvalidContainer(format!(
                "{} payload bits but no symbols",
                bit_count
            )));
        }
        return Ok(Vec::new());
    }

    // Same frequency table, same insertion order: the encoder's tree.
    let tree = HuffmanTree::from_frequencies(&freqs)?;
    let expected = tree.weight();

    let mut decoder = Decoder::new(&tree);
    let mut output = Vec::with_capacity((expected as usize).min(data.len() * 8));
    for _ in 0..bit_count {
        let bit = br.bit()?.ok_or_else(|| {
            HuffError::InvalidContainer(format!(
                "payload ends before the {} bits the header promises",
                bit_count
            ))
        })?;
        if let Some(symbol) = decoder.push_bit(bit)? {
            output.push(symbol);
        }
    }
    decoder.finish()?;

    if output.len() as u64 != expected {
        return Err(HuffError::InvalidContainer(format!(
            "decoded {} bytes, header weights add up to {}",
            output.len(),
            expected
        )));
    }
    Ok(output)
}

/// Name of the decompressed file: strip .huf if present, otherwise add .out
fn output_name(fname: &str) -> String {
    match fname.strip_suffix(EXTENSION) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}.out", fname),
    }
}

/// Decompress the file specified in opts.
pub fn decompress(opts: &Opts) -> Result<()> {
    let fname = input_file(opts)?;
    let data = fs::read(fname)?;
    info!("Decompressing {} ({} bytes).", fname, data.len());

    let output = decompress_bytes(&data)?;
    write_output(opts, &output_name(fname), &output)
}
