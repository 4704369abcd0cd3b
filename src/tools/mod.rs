//! The tools module provides several helper functions for the Huffman coder.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Frequency count of the input bytes.
//! - hexdump: Hex dump of packed data, for diagnostics.
//!
pub mod cli;
pub mod freq_count;
pub mod hexdump;
