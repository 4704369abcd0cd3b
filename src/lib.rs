//! Static Huffman coding of byte streams.
//!
//! Version 0.1.0
//!
//! Builds a Huffman tree from the byte frequencies of an input, derives a prefix code for
//! every byte value present, and packs the coded bits into a byte aligned buffer whose
//! first byte counts the meaningful bits in the last byte. Decoding walks the same tree
//! over the unpacked bits and reproduces the input exactly.
//!
//! ```
//! let (tree, packed) = huffman::encode(b"abracadabra")?;
//! assert_eq!(huffman::decode(&packed, &tree)?, b"abracadabra");
//! # Ok::<(), huffman::HuffError>(())
//! ```
//!
//! The `huffman` binary applies this to files, storing the frequency table ahead of the
//! packed data:
//!
//! `$> huffman test.txt`
//!
//! This will compress the file and create the file test.txt.huf.
//! The original file will be deleted unless -k is given.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::bitpacker::{pack, BitPacker, PackedBuffer};
pub use bitstream::bitreader::{unpack, BitReader};
pub use bitstream::BitSequence;
pub use compression::codec::{decode, encode, encode_with_table, Codec};
pub use compression::container::{compress_bytes, decompress_bytes, Container};
pub use error::{HuffError, Result};
pub use huffman_coding::code_table::CodeTable;
pub use huffman_coding::huffman::{HuffmanTree, Lookup};
pub use tools::freq_count::FrequencyTable;
