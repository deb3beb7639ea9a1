//! Turns a sequence of symbols into a sequence of bits using a code table.

use super::code_table::CodeTable;
use crate::error::{HuffError, Result};

/// Feed the code bits of every symbol to `sink`, in order. Returns the number of bits produced.
///
/// Stops at the first symbol the table has no code for.
pub fn encode_with<F>(symbols: &[u8], table: &CodeTable, mut sink: F) -> Result<usize>
where
    F: FnMut(u8),
{
    let mut bit_count = 0;
    for &symbol in symbols {
        let code = table
            .get(symbol)
            .ok_or(HuffError::UnknownSymbol { symbol })?;
        code.bits().iter().for_each(|&bit| sink(bit));
        bit_count += code.len();
    }
    Ok(bit_count)
}

/// Encode `symbols` into a vec of bits (each 0 or 1).
pub fn encode(symbols: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(symbols.len());
    encode_with(symbols, table, |bit| bits.push(bit))?;
    Ok(bits)
}

/// Encode `symbols` into a string of '0' and '1' characters.
pub fn encode_to_string(symbols: &[u8], table: &CodeTable) -> Result<String> {
    let mut text = String::with_capacity(symbols.len());
    encode_with(symbols, table, |bit| text.push(if bit == 0 { '0' } else { '1' }))?;
    Ok(text)
}
