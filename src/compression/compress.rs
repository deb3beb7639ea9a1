use std::fs;
use std::io::{self, Write};

use log::{debug, info};

use super::{input_file, write_output, EXTENSION, MAGIC};
use crate::bitstream::bitpacker::BitPacker;
use crate::error::{HuffError, Result};
use crate::huffman_coding::{encode_with, CodeTable, HuffmanTree};
use crate::tools::cli::Opts;
use crate::tools::freq_count::frequency_table;

/// Compress `data` into a complete container (header plus packed payload).
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let freqs = frequency_table(data);
    debug!("Found {} distinct symbols in {} bytes.", freqs.len(), data.len());

    // Header: magic, then the frequency table the decoder will rebuild the tree from.
    let mut bp = BitPacker::new(data.len() / 2 + 16 + freqs.len() * 9);
    MAGIC.iter().for_each(|&b| bp.out8(b));
    bp.out16(freqs.len() as u16);
    for &(symbol, weight) in &freqs {
        bp.out8(symbol);
        bp.out64(weight);
    }

    if freqs.is_empty() {
        bp.out64(0);
        bp.flush();
        info!("Empty input, wrote header only.");
        return Ok(bp.output);
    }

    let tree = HuffmanTree::from_frequencies(&freqs)?;
    let table = CodeTable::derive(&tree);
    let bit_count = table.encoded_bits(&freqs);
    bp.out64(bit_count);

    let header_loc = bp.loc();
    let start = bp.bit_count();
    encode_with(data, &table, |bit| bp.out_bit(bit))?;
    let written = bp.bit_count() - start;
    if written != bit_count {
        return Err(HuffError::InvalidInput(format!(
            "header promises {} payload bits but {} were written",
            bit_count, written
        )));
    }
    bp.flush();

    debug!(
        "Payload of {} bits written after header ending at {}. Longest code is {} bits.",
        bit_count,
        header_loc,
        table.max_len()
    );
    if !data.is_empty() {
        info!(
            "{} bytes -> {} bytes ({:.3} bits/byte)",
            data.len(),
            bp.output.len(),
            bit_count as f64 / data.len() as f64
        );
    }
    Ok(bp.output)
}

/// Compress the input file defined in opts to FILE.huf (or stdout).
pub fn compress(opts: &Opts) -> Result<()> {
    let fname = input_file(opts)?;
    let data = fs::read(fname)?;
    info!("Compressing {} ({} bytes).", fname, data.len());

    let packed = compress_bytes(&data)?;
    let out_name = format!("{}{}", fname, EXTENSION);
    write_output(opts, &out_name, &packed)
}

/// Build a printable report of the frequency and code table for `data`.
pub fn code_report(data: &[u8]) -> Result<String> {
    let freqs = frequency_table(data);
    let tree = HuffmanTree::from_frequencies(&freqs)?;
    let table = CodeTable::derive(&tree);

    let mut report = String::from("symbol  char   weight  code\n");
    for &(symbol, weight) in &freqs {
        let shown = if symbol.is_ascii_graphic() {
            symbol as char
        } else {
            '.'
        };
        if let Some(code) = table.get(symbol) {
            report.push_str(&format!(
                "  0x{:02x}     {} {:>8}  {}\n",
                symbol, shown, weight, code
            ));
        }
    }
    report.push_str(&format!(
        "{} symbols, {} bytes, {} payload bits\n",
        table.len(),
        tree.weight(),
        table.encoded_bits(&freqs)
    ));
    Ok(report)
}

/// Print the frequency and code table of the input file to stdout.
pub fn print_code_table(opts: &Opts) -> Result<()> {
    let fname = input_file(opts)?;
    let data = fs::read(fname)?;
    let report = code_report(&data)?;
    let mut out = io::stdout().lock();
    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}
