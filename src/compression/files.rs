//! File and stream helpers shared by compress and decompress.

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};

use log::{debug, info};

use crate::error::Result;
use crate::tools::cli::{HuffOpts, Output};

/// Suffix added to compressed files.
pub const SUFFIX: &str = ".huf";

/// Read all of stdin.
pub fn read_stdin() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Write bytes to stdout, or to fname when the output channel is a file. An existing
/// file is only replaced when force_overwrite is set.
pub fn write_output(opts: &HuffOpts, fname: &str, bytes: &[u8]) -> Result<()> {
    match opts.output {
        Output::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(bytes)?;
            out.flush()?;
        }
        Output::File => {
            let mut f_out = if opts.force_overwrite {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(fname)?
            } else {
                OpenOptions::new().write(true).create_new(true).open(fname)?
            };
            f_out.write_all(bytes)?;
            info!("Wrote {} bytes to {}", bytes.len(), fname);
        }
    }
    Ok(())
}

/// Remove the input file once its output is safely written, unless asked to keep it.
/// Nothing is removed when writing to stdout.
pub fn remove_input(opts: &HuffOpts, fname: &str) -> Result<()> {
    if opts.keep_input_files || opts.output == Output::Stdout {
        return Ok(());
    }
    fs::remove_file(fname)?;
    debug!("Removed input file {}", fname);
    Ok(())
}

/// Output name for a compressed file: strip the suffix, or add ".out" if it is missing.
pub fn decompressed_name(fname: &str) -> String {
    match fname.strip_suffix(SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}.out", fname),
    }
}

#[cfg(test)]
mod test {
    use super::decompressed_name;

    #[test]
    fn decompressed_name_test() {
        assert_eq!(decompressed_name("notes.txt.huf"), "notes.txt");
        assert_eq!(decompressed_name("notes.txt"), "notes.txt.out");
        assert_eq!(decompressed_name(".huf"), ".huf.out");
    }
}
