//! The bitstream module forms the I/O subsystem between the Huffman codes and bytes.
//!
//! Encoded data is an arbitrary length sequence of bits. The packer stores it in a
//! byte aligned buffer whose first byte is the count of meaningful bits in the final
//! content byte (0 meaning all 8 are used). Bits are placed least significant bit first
//! within each byte. A single zero byte is the packed form of zero bits.
//!
//! The reader validates that header and gives the bits back, without the padding.
//!
pub mod bitpacker;
pub mod bitreader;

/// An ordered sequence of bits, in message order.
pub type BitSequence = Vec<bool>;
