use std::fs;

use log::{error, info};

use super::container::Container;
use super::files::{decompressed_name, read_stdin, remove_input, write_output};
use crate::error::Result;
use crate::tools::cli::{HuffOpts, Mode};

/// Decompress (or test) the files specified in opts (HuffOpts), or stdin if there are none.
pub fn decompress(opts: &HuffOpts) -> Result<()> {
    if opts.files.is_empty() {
        let data = decompress_one(opts, "stdin", &read_stdin()?)?;
        if opts.op_mode == Mode::Test {
            return Ok(());
        }
        return write_output(opts, "stdout", &data);
    }

    for fname in &opts.files {
        let data = decompress_one(opts, fname, &fs::read(fname)?)?;
        if opts.op_mode == Mode::Test {
            continue;
        }
        write_output(opts, &decompressed_name(fname), &data)?;
        remove_input(opts, fname)?;
    }
    Ok(())
}

/// Parse and decode one container, logging the outcome.
fn decompress_one(opts: &HuffOpts, name: &str, bytes: &[u8]) -> Result<Vec<u8>> {
    match Container::parse(bytes).and_then(|container| container.decode()) {
        Ok(data) => {
            if opts.op_mode == Mode::Test {
                info!("{}: ok", name);
            } else {
                info!("{}: {} -> {} bytes", name, bytes.len(), data.len());
            }
            Ok(data)
        }
        Err(e) => {
            error!("{}: {}", name, e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod test {
    use super::decompress;
    use crate::error::HuffError;
    use crate::tools::cli::{HuffOpts, Mode};
    use std::fs;

    #[test]
    fn corrupt_file_test() {
        let dir = std::env::temp_dir().join(format!("huffman_corrupt_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("junk.huf");
        fs::write(&path, b"not a huffman file").unwrap();

        let mut opts = HuffOpts::new();
        opts.op_mode = Mode::Test;
        opts.files = vec![path.to_string_lossy().to_string()];
        assert!(matches!(decompress(&opts), Err(HuffError::Format(_))));
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_test() {
        let mut opts = HuffOpts::new();
        opts.op_mode = Mode::Unzip;
        opts.files = vec!["/nonexistent/huffman/input.huf".to_string()];
        assert!(matches!(decompress(&opts), Err(HuffError::Io(_))));
    }
}
