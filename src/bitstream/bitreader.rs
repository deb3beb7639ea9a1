//! BitReader: reads a packed, MSB-first bitstream from any I/O source that supports read().
//!
//! Every read returns `Ok(None)` once the source runs dry, and passes I/O failures up to the caller.

use std::io::{self, Read};

const BUFFER_SIZE: usize = 64 * 1024;

/// Reads bits from a byte source.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    /// Bytes of `buffer` holding valid data.
    filled: usize,
    cursor: usize,
    bit_index: usize,
    source: R,
}

impl<R: Read> BitReader<R> {
    /// Creates a new BitReader (with a 64k buffer).
    pub fn new(source: R) -> Self {
        Self {
            buffer: vec![0; BUFFER_SIZE],
            filled: 0,
            cursor: 0,
            bit_index: 0,
            source,
        }
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more
    fn have_data(&mut self) -> io::Result<bool> {
        if self.cursor < self.filled {
            return Ok(true);
        }
        loop {
            match self.source.read(&mut self.buffer) {
                Ok(0) => return Ok(false),
                Ok(size) => {
                    self.filled = size;
                    self.cursor = 0;
                    self.bit_index = 0;
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Return the next bit (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> io::Result<Option<u8>> {
        if !self.have_data()? {
            return Ok(None);
        }
        let bit = (self.buffer[self.cursor] >> (7 - self.bit_index)) & 1;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Ok(Some(bit))
    }

    /// Return the next n bits (n <= 64) as a big-endian number, or None if the data runs out
    /// part way.
    pub fn bint(&mut self, n: usize) -> io::Result<Option<u64>> {
        debug_assert!(n <= 64);
        let mut result = 0_u64;
        let mut needed = n;

        while needed > 0 {
            if !self.have_data()? {
                return Ok(None);
            }
            // Take as many bits as we can from the current byte.
            let available = 8 - self.bit_index;
            let take = needed.min(available);
            let byte = self.buffer[self.cursor] as u64;
            let chunk = (byte >> (available - take)) & ((1_u64 << take) - 1);
            result = (result << take) | chunk;

            self.bit_index += take;
            if self.bit_index == 8 {
                self.bit_index = 0;
                self.cursor += 1;
            }
            needed -= take;
        }
        Ok(Some(result))
    }

    /// Returns the next byte, or None if there is no more data to read.
    pub fn byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.bint(8)?.map(|byte| byte as u8))
    }

    /// Returns the next n bytes, or None if there are fewer than n left.
    pub fn bytes(&mut self, n: usize) -> io::Result<Option<Vec<u8>>> {
        let mut result: Vec<u8> = Vec::with_capacity(n);
        for _ in 0..n {
            match self.byte()? {
                Some(byte) => result.push(byte),
                None => return Ok(None),
            }
        }
        Ok(Some(result))
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
