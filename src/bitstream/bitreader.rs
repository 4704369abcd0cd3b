//! BitReader: reads the bits back out of a packed buffer.
//!
//! The header byte is validated up front, so iteration itself can not fail. The reader
//! stops after the last meaningful bit; padding in the final byte is never returned.
//!

use super::BitSequence;
use crate::error::{HuffError, Result};

/// Reads a packed buffer one bit at a time, least significant bit first.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    content: &'a [u8],
    bit_len: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    /// Check the header and prepare to read. Fails on an empty buffer, a hanging bit
    /// count over 7, or a nonzero hanging bit count with no content byte.
    pub fn new(buffer: &'a [u8]) -> Result<Self> {
        let (&hanging, content) = buffer
            .split_first()
            .ok_or_else(|| HuffError::format("packed buffer is empty"))?;
        if hanging > 7 {
            return Err(HuffError::format(format!(
                "hanging bit count {} is over 7",
                hanging
            )));
        }
        if content.is_empty() && hanging != 0 {
            return Err(HuffError::format(format!(
                "hanging bit count {} with no content bytes",
                hanging
            )));
        }
        // Drop the padding from the final byte
        let padding = if hanging > 0 { 8 - hanging as usize } else { 0 };
        Ok(Self {
            content,
            bit_len: content.len() * 8 - padding,
            bit_index: 0,
        })
    }

    /// Bits left to read.
    pub fn remaining(&self) -> usize {
        self.bit_len - self.bit_index
    }

    /// Debugging function. Report current position in the content.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_index / 8, self.bit_index % 8)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.bit_index >= self.bit_len {
            return None;
        }
        let bit = (self.content[self.bit_index / 8] >> (self.bit_index % 8)) & 1 == 1;
        self.bit_index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

/// Unpack a buffer made by pack() back into its bit sequence.
pub fn unpack(buffer: &[u8]) -> Result<BitSequence> {
    Ok(BitReader::new(buffer)?.collect())
}

#[cfg(test)]
mod test {
    use super::{unpack, BitReader};
    use crate::bitstream::bitpacker::{bits_from_str, pack};
    use crate::error::HuffError;

    #[test]
    fn basic_test() {
        let x = [0_u8, 0b1000_0001];
        let mut br = BitReader::new(&x).unwrap();
        assert_eq!(br.len(), 8);
        assert_eq!(br.next(), Some(true));
        assert_eq!(br.next(), Some(false));
        assert_eq!(br.loc(), "[0.2]");
        assert_eq!(br.by_ref().count(), 6);
        assert_eq!(br.next(), None);
    }

    #[test]
    fn padding_test() {
        // Three meaningful bits, the rest of the byte is padding
        let x = [3_u8, 0b1111_1110];
        assert_eq!(unpack(&x).unwrap(), bits_from_str("011"));
    }

    #[test]
    fn empty_payload_test() {
        assert_eq!(unpack(&[0]).unwrap(), Vec::<bool>::new());
    }

    #[test]
    fn malformed_test() {
        assert!(matches!(unpack(&[]), Err(HuffError::Format(_))));
        assert!(matches!(unpack(&[5]), Err(HuffError::Format(_))));
        assert!(matches!(unpack(&[8, 0xff]), Err(HuffError::Format(_))));
    }

    #[test]
    fn roundtrip_test() {
        let mut state = 0x9e37_79b9_u32;
        for len in 0..70 {
            let bits = (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    state & 1 == 1
                })
                .collect::<Vec<bool>>();
            let packed = pack(&bits);
            assert_eq!(packed.len(), 1 + (len as usize).div_ceil(8));
            assert_eq!(unpack(&packed).unwrap(), bits, "length {}", len);
        }
    }
}
