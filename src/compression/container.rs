//! The container wraps a packed buffer with the symbol frequencies it was coded from,
//! so the decode side can rebuild the same tree.
//!
//! Layout:
//! - magic: 4 bytes, `HUF1`
//! - count: u16 little endian, the number of distinct symbols (0-256)
//! - count entries of { symbol: u8, weight: u64 little endian }, ascending by symbol
//! - the packed buffer, to the end of the data
//!
//! A count of 0 is an empty file and its packed buffer must be the single byte [0].

use log::{debug, info};

use super::codec::{decode, Codec};
use crate::bitstream::bitpacker::PackedBuffer;
use crate::error::{HuffError, Result};
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::freq_count::FrequencyTable;

pub const MAGIC: [u8; 4] = *b"HUF1";
const ENTRY_SIZE: usize = 9;
const EMPTY_PAYLOAD: [u8; 1] = [0];

/// A frequency header plus the packed data it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub freqs: FrequencyTable,
    pub payload: PackedBuffer,
}

impl Container {
    /// Compress data. Empty data gives an empty header and the empty payload.
    pub fn encode(data: &[u8]) -> Result<Self> {
        let freqs = FrequencyTable::build(data);
        if freqs.is_empty() {
            return Ok(Self {
                freqs,
                payload: EMPTY_PAYLOAD.to_vec(),
            });
        }
        let codec = Codec::new(HuffmanTree::construct(&freqs)?);
        let payload = codec.encode(data)?;
        info!(
            "Compressed {} bytes over {} symbols into {} payload bytes",
            data.len(),
            freqs.len(),
            payload.len()
        );
        Ok(Self { freqs, payload })
    }

    /// The tree for this container, or None if it is empty.
    pub fn tree(&self) -> Result<Option<HuffmanTree>> {
        if self.freqs.is_empty() {
            return Ok(None);
        }
        HuffmanTree::construct(&self.freqs).map(Some)
    }

    /// Decompress, checking that exactly as many symbols come out as were counted.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let tree = match self.tree()? {
            Some(tree) => tree,
            None if self.payload == EMPTY_PAYLOAD => return Ok(Vec::new()),
            None => {
                return Err(HuffError::format(
                    "empty frequency table with a non-empty payload",
                ))
            }
        };
        let data = decode(&self.payload, &tree)?;
        if data.len() as u64 != self.freqs.total() {
            return Err(HuffError::format(format!(
                "decoded {} bytes, header counts {}",
                data.len(),
                self.freqs.total()
            )));
        }
        Ok(data)
    }

    /// Serialize the header followed by the payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        let count = self.freqs.len();
        let mut bytes = Vec::with_capacity(MAGIC.len() + 2 + count * ENTRY_SIZE + self.payload.len());
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&(count as u16).to_le_bytes());
        for (symbol, weight) in self.freqs.iter() {
            bytes.push(symbol);
            bytes.extend_from_slice(&weight.to_le_bytes());
        }
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Parse and validate a serialized container. The payload itself is checked when
    /// it is decoded.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let (magic, rest) = split(bytes, MAGIC.len(), "magic")?;
        if magic != MAGIC {
            return Err(HuffError::format(format!(
                "bad magic {:02x?}, expected {:02x?}",
                magic, MAGIC
            )));
        }

        let (count, mut rest) = split(rest, 2, "symbol count")?;
        let count = u16::from_le_bytes([count[0], count[1]]) as usize;
        if count > 256 {
            return Err(HuffError::format(format!("symbol count {} is over 256", count)));
        }

        let mut pairs = Vec::with_capacity(count);
        // Every merged node weighs at most the total, so a total that fits keeps the
        // tree build from overflowing
        let mut total = 0_u64;
        for _ in 0..count {
            let (entry, tail) = split(rest, ENTRY_SIZE, "frequency entry")?;
            rest = tail;
            let symbol = entry[0];
            let mut weight = [0_u8; 8];
            weight.copy_from_slice(&entry[1..]);
            let weight = u64::from_le_bytes(weight);

            if weight == 0 {
                return Err(HuffError::format(format!("symbol {} has zero weight", symbol)));
            }
            total = total
                .checked_add(weight)
                .ok_or_else(|| HuffError::format("weight sum overflows"))?;
            if let Some(&(last, _)) = pairs.last() {
                if symbol <= last {
                    return Err(HuffError::format(format!(
                        "symbol {} out of order after {}",
                        symbol, last
                    )));
                }
            }
            pairs.push((symbol, weight));
        }
        debug!("Read {} frequency entries", pairs.len());

        Ok(Self {
            freqs: FrequencyTable::from_counts(pairs),
            payload: rest.to_vec(),
        })
    }
}

/// Compress data straight to container bytes.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    Ok(Container::encode(data)?.to_bytes())
}

/// Decompress container bytes.
pub fn decompress_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    Container::parse(bytes)?.decode()
}

/// Split n bytes off the front, or report which field was truncated.
fn split<'a>(bytes: &'a [u8], n: usize, field: &str) -> Result<(&'a [u8], &'a [u8])> {
    if bytes.len() < n {
        return Err(HuffError::format(format!(
            "truncated {}: need {} bytes, have {}",
            field,
            n,
            bytes.len()
        )));
    }
    Ok(bytes.split_at(n))
}
