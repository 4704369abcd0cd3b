//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::io;

use huffman::compression::compress::compress;
use huffman::compression::decompress::decompress;
use huffman::tools::cli::{huffopts_init, Mode};
use huffman::HuffError;

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), HuffError> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The cli narrows this.
    // Log to stderr so compressed data on stdout stays clean.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let options = huffopts_init();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress(&options),
        Mode::Unzip | Mode::Test => decompress(&options),
    };

    match &result {
        Ok(()) => info!("Done.\n"),
        Err(e) => error!("Failed: {}", e),
    }
    result
}
