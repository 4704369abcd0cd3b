//! The compression module manages both directions of Huffman coding.
//!
//! Encoding happens in the following steps:
//! - Frequency count: how often each byte value occurs in the input.
//! - Tree construction: merge the two lightest nodes until one root is left.
//! - Code table: the root to leaf path of each symbol is its code.
//! - Bit packing: the codes for every input byte, in order, packed least significant bit
//!   first behind a hanging bit count byte.
//!
//! Decoding unpacks the bits and walks the same tree from the root, emitting a symbol at
//! every leaf. Bits that run out part way down the tree are padding and are dropped.
//!
//! The codec works on in-memory buffers and needs the tree on both sides. The container
//! stores the frequency table ahead of the packed data so a file can be decoded on its
//! own, and compress/decompress apply that to files for the command line.
//!

pub mod codec;
pub mod compress;
pub mod container;
pub mod decompress;
pub mod files;
