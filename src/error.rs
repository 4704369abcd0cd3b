//! Error types for the Huffman coder.
//!
//! Every error is local and fatal to the call that raised it. Running out of bits
//! part way through a code while decoding is NOT an error; it is how the decoder
//! discards the padding in the last packed byte.

use std::io;
use thiserror::Error;

/// The error type for all coding, packing and container operations.
#[derive(Debug, Error)]
pub enum HuffError {
    /// A tree can not be built over zero symbols.
    #[error("Can not build a Huffman tree from an empty alphabet")]
    EmptyAlphabet,

    /// A symbol in the input has no code in the supplied code table.
    #[error("Symbol {symbol:#04x} is not in the code table")]
    UnknownSymbol {
        /// The byte that could not be encoded.
        symbol: u8,
    },

    /// A packed buffer or container header is malformed.
    #[error("Malformed data: {0}")]
    Format(String),

    /// I/O error from the file layer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HuffError {
    /// Shorthand for building a `Format` error.
    pub fn format(message: impl Into<String>) -> Self {
        HuffError::Format(message.into())
    }
}

/// Result type alias for the Huffman coder.
pub type Result<T> = std::result::Result<T, HuffError>;

#[cfg(test)]
mod test {
    use super::HuffError;

    #[test]
    fn display_test() {
        assert_eq!(
            HuffError::UnknownSymbol { symbol: b'a' }.to_string(),
            "Symbol 0x61 is not in the code table"
        );
        assert_eq!(
            HuffError::format("empty buffer").to_string(),
            "Malformed data: empty buffer"
        );
    }

    #[test]
    fn io_conversion_test() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HuffError = io_err.into();
        assert!(matches!(err, HuffError::Io(_)));
    }
}
