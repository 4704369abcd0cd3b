#[cfg(test)]
use super::BitSequence;

/// A packed bit sequence: a hanging bit count byte followed by the content bytes.
pub type PackedBuffer = Vec<u8>;

/// Creates a packed buffer for output.
pub struct BitPacker {
    output: PackedBuffer,
    queue: u8,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with room for `size` content bytes. Call flush() to
    /// write the final partial byte and the header.
    pub fn new(size: usize) -> Self {
        let mut output = Vec::with_capacity(size + 1);
        // Placeholder for the hanging bit count, set by flush()
        output.push(0);
        Self {
            output,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Puts one bit on the stream. Bits fill each byte from the least significant end.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue |= (bit as u8) << self.q_bits;
        self.q_bits += 1;
        // Emit the byte as soon as its 8th bit is set
        if self.q_bits == 8 {
            self.output.push(self.queue);
            self.queue = 0;
            self.q_bits = 0;
        }
    }

    /// Puts a run of bits on the stream, in order.
    pub fn out_bits(&mut self, bits: &[bool]) {
        bits.iter().for_each(|&bit| self.out_bit(bit));
    }

    /// Number of bits written so far.
    pub fn bit_count(&self) -> usize {
        (self.output.len() - 1) * 8 + self.q_bits as usize
    }

    /// Flushes the remaining bits (1-7) padded with 0s in the most significant bits,
    /// records the hanging bit count in the first byte, and returns the buffer.
    pub fn flush(mut self) -> PackedBuffer {
        let hanging = self.q_bits;
        if hanging > 0 {
            self.output.push(self.queue);
        }
        self.output[0] = hanging;
        self.output
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.output.len() - 1, self.q_bits)
    }
}

/// Pack a bit sequence. Zero bits give the single byte buffer [0].
pub fn pack(bits: &[bool]) -> PackedBuffer {
    let mut bp = BitPacker::new(bits.len().div_ceil(8));
    bp.out_bits(bits);
    bp.flush()
}

/// Turn a string of '0' and '1' characters into bits. Anything else is skipped.
#[cfg(test)]
pub fn bits_from_str(s: &str) -> BitSequence {
    s.chars()
        .filter_map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{bits_from_str, pack, BitPacker};

    #[test]
    fn empty_test() {
        assert_eq!(pack(&[]), vec![0]);
    }

    #[test]
    fn full_byte_test() {
        // LSB first: bit 0 of the sequence is the low bit of the byte
        let bits = bits_from_str("1000_0100");
        assert_eq!(pack(&bits), vec![0, 0b0010_0001]);
    }

    #[test]
    fn partial_byte_test() {
        let bits = bits_from_str("1111_1111 101");
        assert_eq!(pack(&bits), vec![3, 0xff, 0b0000_0101]);
        let bits = bits_from_str("1");
        assert_eq!(pack(&bits), vec![1, 1]);
    }

    #[test]
    fn out_bit_and_loc_test() {
        let mut bp = BitPacker::new(4);
        assert_eq!("[0.0]", &bp.loc());
        bp.out_bits(&bits_from_str("0110 0001 11"));
        assert_eq!(bp.bit_count(), 10);
        assert_eq!("[1.2]", &bp.loc());
        bp.out_bit(false);
        let out = bp.flush();
        assert_eq!(out, vec![3, 0b1000_0110, 0b0000_0011]);
    }
}
