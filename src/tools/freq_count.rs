//! Byte frequency counting. Produces the frequency table the tree is built from.

use rayon::prelude::*;

/// Inputs larger than this are counted in parallel.
const PARALLEL_THRESHOLD: usize = 64_000;
/// 16k is pretty much the sweet spot for chunk size.
const CHUNK_SIZE: usize = 16_000;

/// Returns a 256 entry count of every byte value in `data`.
pub fn freqs(data: &[u8]) -> Vec<u64> {
    if data.len() <= PARALLEL_THRESHOLD {
        return count_chunk(vec![0_u64; 256], data);
    }
    data.par_chunks(CHUNK_SIZE)
        .fold(|| vec![0_u64; 256], count_chunk)
        .reduce(
            || vec![0_u64; 256],
            |mut total, part| {
                total.iter_mut().zip(&part).for_each(|(t, p)| *t += p);
                total
            },
        )
}

fn count_chunk(mut counts: Vec<u64>, chunk: &[u8]) -> Vec<u64> {
    chunk.iter().for_each(|&byte| counts[byte as usize] += 1);
    counts
}

/// Returns the (symbol, weight) pairs of every byte that occurs in `data`, in ascending byte order.
/// This order is the leaf insertion order used to build the tree.
pub fn frequency_table(data: &[u8]) -> Vec<(u8, u64)> {
    freqs(data)
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(symbol, &count)| (symbol as u8, count))
        .collect()
}
