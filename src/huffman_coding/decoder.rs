//! Turns a sequence of bits back into symbols by walking the tree.
//!
//! The decoder is a small state machine. It keeps a cursor that starts at the root and moves one
//! child per bit (0 left, 1 right). When the cursor lands on a leaf, that symbol is emitted and the
//! cursor goes back to the root. Bits can be pushed one at a time, so callers can decode as data
//! arrives rather than buffering a whole stream.
//!
//! When the tree is a single leaf, every bit stands for one occurrence of that symbol, whatever its
//! value. This mirrors the one-bit "0" code the code table assigns in that case.

use super::node::Node;
use super::tree_builder::HuffmanTree;
use crate::error::{HuffError, Result};

#[derive(Debug, Clone)]
pub struct Decoder<'t> {
    root: &'t Node,
    cursor: &'t Node,
    /// Bits consumed so far, used to locate errors.
    position: usize,
}

impl<'t> Decoder<'t> {
    pub fn new(tree: &'t HuffmanTree) -> Self {
        Self {
            root: tree.root(),
            cursor: tree.root(),
            position: 0,
        }
    }

    /// Consume one bit. Returns the decoded symbol when this bit completes a code.
    pub fn push_bit(&mut self, bit: u8) -> Result<Option<u8>> {
        let position = self.position;
        self.position += 1;

        if let Some(symbol) = self.root.symbol() {
            return Ok(Some(symbol));
        }

        if bit > 1 {
            return Err(HuffError::corrupt(
                position,
                format!("bit value {} is neither 0 nor 1", bit),
            ));
        }
        self.cursor = self
            .cursor
            .child(bit)
            .ok_or_else(|| HuffError::corrupt(position, "path leaves the tree"))?;

        match self.cursor.symbol() {
            Some(symbol) => {
                self.cursor = self.root;
                Ok(Some(symbol))
            }
            None => Ok(None),
        }
    }

    /// True when the decoder sits between codes.
    pub fn is_at_root(&self) -> bool {
        std::ptr::eq(self.cursor, self.root)
    }

    /// Number of bits pushed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check that the stream ended on a code boundary.
    pub fn finish(self) -> Result<()> {
        if self.is_at_root() {
            Ok(())
        } else {
            Err(HuffError::TruncatedStream {
                bits: self.position,
            })
        }
    }
}

/// Decode a whole buffer of bits.
pub fn decode(bits: &[u8], tree: &HuffmanTree) -> Result<Vec<u8>> {
    let mut decoder = Decoder::new(tree);
    let mut symbols = Vec::with_capacity(bits.len() / tree.depth().max(1));
    for &bit in bits {
        if let Some(symbol) = decoder.push_bit(bit)? {
            symbols.push(symbol);
        }
    }
    decoder.finish()?;
    Ok(symbols)
}

/// Decode a textual bit string. Each character is read as a decimal digit, so "2" reaches the
/// decoder as the (invalid) bit value 2. Characters that are not digits are rejected outright.
pub fn decode_str(text: &str, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let bits = text
        .chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| HuffError::corrupt(position, format!("{:?} is not a bit", c)))
        })
        .collect::<Result<Vec<u8>>>()?;
    decode(&bits, tree)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::code_table::CodeTable;
    use crate::huffman_coding::encoder::encode;

    fn textbook() -> HuffmanTree {
        HuffmanTree::from_frequencies(&[
            (b'a', 5),
            (b'b', 9),
            (b'c', 12),
            (b'd', 13),
            (b'e', 16),
            (b'f', 45),
        ])
        .unwrap()
    }

    #[test]
    fn single_symbol_stream() {
        let tree = HuffmanTree::from_frequencies(&[(b'A', 5)]).unwrap();
        assert_eq!(decode_str("000", &tree).unwrap(), b"AAA".to_vec());
        // Any bit value stands for one occurrence.
        assert_eq!(decode(&[0, 1, 7], &tree).unwrap(), b"AAA".to_vec());
        assert!(decode(&[], &tree).unwrap().is_empty());
    }

    #[test]
    fn textbook_stream() {
        let tree = textbook();
        assert_eq!(decode_str("01100100111", &tree).unwrap(), b"face".to_vec());
    }

    #[test]
    fn invalid_bit_is_corrupt() {
        let tree = textbook();
        assert!(matches!(
            decode_str("2", &tree),
            Err(HuffError::CorruptStream { position: 0, .. })
        ));
        assert!(matches!(
            decode(&[0, 1, 3], &tree),
            Err(HuffError::CorruptStream { position: 2, .. })
        ));
        assert!(matches!(
            decode_str("01x", &tree),
            Err(HuffError::CorruptStream { position: 2, .. })
        ));
    }

    #[test]
    fn partial_code_is_truncated() {
        // "0" decodes f, then "11" stops inside the right subtree.
        assert!(matches!(
            decode_str("011", &textbook()),
            Err(HuffError::TruncatedStream { bits: 3 })
        ));
    }

    #[test]
    fn zero_alone_is_truncated_when_left_is_internal() {
        // a,b merge first and sit on the left of c (weight 3): "0" stops at an internal node.
        let tree = HuffmanTree::from_frequencies(&[(b'a', 1), (b'b', 1), (b'c', 3)]).unwrap();
        assert!(!tree.root().child(0).unwrap().is_leaf());
        assert!(matches!(
            decode_str("0", &tree),
            Err(HuffError::TruncatedStream { bits: 1 })
        ));
    }

    #[test]
    fn push_bit_emits_incrementally() {
        let tree = textbook();
        let mut decoder = Decoder::new(&tree);
        assert!(decoder.is_at_root());
        assert_eq!(decoder.push_bit(1).unwrap(), None);
        assert!(!decoder.is_at_root());
        assert_eq!(decoder.push_bit(0).unwrap(), None);
        assert_eq!(decoder.push_bit(1).unwrap(), Some(b'd'));
        assert!(decoder.is_at_root());
        assert_eq!(decoder.push_bit(0).unwrap(), Some(b'f'));
        assert_eq!(decoder.position(), 4);
        assert!(decoder.finish().is_ok());
    }

    #[test]
    fn round_trip() {
        let text = b"the quick brown fox jumps over the lazy dog, again and again";
        let mut counts = [0_u64; 256];
        text.iter().for_each(|&b| counts[b as usize] += 1);
        let freqs: Vec<(u8, u64)> = counts
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0)
            .map(|(s, &w)| (s as u8, w))
            .collect();

        let tree = HuffmanTree::from_frequencies(&freqs).unwrap();
        let table = CodeTable::derive(&tree);
        let bits = encode(text, &table).unwrap();
        assert_eq!(table.encoded_bits(&freqs), bits.len() as u64);
        assert_eq!(decode(&bits, &tree).unwrap(), text.to_vec());
    }
}
