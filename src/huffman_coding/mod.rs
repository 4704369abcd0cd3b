//! The huffman module builds the coding tree and the code table.
//!
//! A tree is built once per session from a frequency table by repeatedly merging the
//! two lightest nodes. It is immutable afterwards: the encode side derives a code table
//! from it, and the decode side walks it directly one bit at a time.
//!
//! Ties between equal weights are broken by creation order, so the same frequency
//! table always produces the same tree. The container format depends on that to
//! rebuild the tree on the decode side from the stored frequencies.

pub mod code_table;
pub mod huffman;
