use log::error;

/// Packs bits MSB-first into a byte buffer.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    /// Total bits written, not counting flush padding.
    bit_count: u64,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the capacity specified. Call flush() to move
    /// the last partial byte into the buffer before taking the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts a single bit on the stream. Any non-zero value is written as 1.
    pub fn out_bit(&mut self, bit: u8) {
        self.queue = (self.queue << 1) | (bit != 0) as u64;
        self.q_bits += 1;
        self.bit_count += 1;
        self.write_stream();
    }

    /// Writes 0-24 bits encoded with the number of bits to write in the most
    /// significant byte of a 32 bit word.
    /// Eg 00000100_00000000_00000000_00000010 writes out 0010.
    pub fn out24(&mut self, data: u32) {
        let depth = (data >> 24) as u8; //get bit length by shifting out the 24 data bits
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data & (0xffffffff >> (32 - depth))) as u64; //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.bit_count += depth as u64;
        self.write_stream();
    }

    /// Puts a byte on the stream.
    pub fn out8(&mut self, data: u8) {
        self.out24((8 << 24) | data as u32);
    }

    /// Puts a 16 bit word on the stream, big-endian.
    pub fn out16(&mut self, data: u16) {
        self.queue <<= 16;
        self.queue |= data as u64;
        self.q_bits += 16;
        self.bit_count += 16;
        self.write_stream();
    }

    /// Puts a 32 bit word on the stream, big-endian.
    pub fn out32(&mut self, data: u32) {
        self.queue <<= 32;
        self.queue |= data as u64;
        self.q_bits += 32;
        self.bit_count += 32;
        self.write_stream();
    }

    /// Puts a 64 bit word on the stream as two 32 bit halves.
    pub fn out64(&mut self, data: u64) {
        self.out32((data >> 32) as u32);
        self.out32(data as u32);
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Number of bits written so far, excluding padding.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!(
            "[{}.{}]",
            ((self.output.len() * 8) + self.q_bits as usize) / 8,
            ((self.output.len() * 8) + self.q_bits as usize) % 8
        )
    }
}
