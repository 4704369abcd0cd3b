use log::{debug, info, trace};

use crate::bitstream::bitpacker::{BitPacker, PackedBuffer};
use crate::bitstream::bitreader::BitReader;
use crate::bitstream::BitSequence;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::{HuffmanTree, Lookup};
use crate::tools::freq_count::FrequencyTable;

/// A coding session: one tree and the code table derived from it.
///
/// The tree is never changed after construction, so a Codec can be shared freely
/// between threads for decoding.
#[derive(Debug, Clone)]
pub struct Codec {
    tree: HuffmanTree,
    codes: CodeTable,
}

impl Codec {
    pub fn new(tree: HuffmanTree) -> Self {
        let codes = CodeTable::derive(&tree);
        Self { tree, codes }
    }

    /// Build a session from the symbol frequencies of data.
    pub fn from_data(data: &[u8]) -> Result<Self> {
        let freqs = FrequencyTable::build(data);
        Ok(Self::new(HuffmanTree::construct(&freqs)?))
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// Encode and pack data. Fails with UnknownSymbol if data holds a byte the tree
    /// was not built over.
    pub fn encode(&self, data: &[u8]) -> Result<PackedBuffer> {
        let mut bp = BitPacker::new(data.len());
        for_each_code(data, &self.codes, |code| bp.out_bits(code))?;
        trace!("Packed {} symbols, ending at {}", data.len(), bp.loc());
        Ok(bp.flush())
    }

    pub fn decode(&self, buffer: &[u8]) -> Result<Vec<u8>> {
        decode(buffer, &self.tree)
    }
}

/// Encode data with a tree built from its own frequencies. Returns the tree, which is
/// needed to decode, along with the packed bits.
///
/// Empty data fails with EmptyAlphabet, the same as building a tree over no symbols.
pub fn encode(data: &[u8]) -> Result<(HuffmanTree, PackedBuffer)> {
    let codec = Codec::from_data(data)?;
    let packed = codec.encode(data)?;
    info!(
        "Encoded {} bytes into {} bytes ({} codes)",
        data.len(),
        packed.len(),
        codec.codes.len()
    );
    Ok((codec.tree, packed))
}

/// Encode data with an externally supplied code table, without packing.
pub fn encode_with_table(data: &[u8], codes: &CodeTable) -> Result<BitSequence> {
    let mut bits = BitSequence::with_capacity(data.len() * 2);
    for_each_code(data, codes, |code| bits.extend_from_slice(code))?;
    Ok(bits)
}

/// Look up the code for every byte in order and hand it to sink.
fn for_each_code<F>(data: &[u8], codes: &CodeTable, mut sink: F) -> Result<()>
where
    F: FnMut(&[bool]),
{
    for &symbol in data {
        let code = codes
            .get(symbol)
            .ok_or(HuffError::UnknownSymbol { symbol })?;
        sink(code);
    }
    Ok(())
}

/// Decode a packed buffer by walking the tree. Running out of bits part way through
/// a code ends decoding; those are the padding bits of the last byte.
pub fn decode(buffer: &[u8], tree: &HuffmanTree) -> Result<Vec<u8>> {
    let mut bits = BitReader::new(buffer)?;
    let mut result = Vec::with_capacity(bits.len() / tree.depth().max(1));

    while let Lookup::Symbol(symbol) = tree.code_lookup(&mut bits) {
        result.push(symbol);
    }

    debug!("Decoded {} bytes from {} bytes", result.len(), buffer.len());
    Ok(result)
}
