use std::fs;

use log::{info, warn};

use super::container::Container;
use super::files::{read_stdin, remove_input, write_output, SUFFIX};
use crate::error::Result;
use crate::tools::cli::HuffOpts;
use crate::tools::hexdump::hexdump;

/// Compress the input files defined in opts <HuffOpts>, or stdin if there are none.
pub fn compress(opts: &HuffOpts) -> Result<()> {
    if opts.files.is_empty() {
        let data = read_stdin()?;
        let bytes = compress_one(opts, "stdin", &data)?;
        return write_output(opts, "stdout", &bytes);
    }

    for fname in &opts.files {
        // Don't compress twice
        if fname.ends_with(SUFFIX) {
            warn!("{} already has {} suffix, skipping", fname, SUFFIX);
            continue;
        }

        let data = fs::read(fname)?;
        let bytes = compress_one(opts, fname, &data)?;

        let out_name = format!("{}{}", fname, SUFFIX);
        write_output(opts, &out_name, &bytes)?;
        remove_input(opts, fname)?;
    }
    Ok(())
}

/// Build and serialize the container for one input, and report on it.
fn compress_one(opts: &HuffOpts, name: &str, data: &[u8]) -> Result<Vec<u8>> {
    let container = Container::encode(data)?;
    let bytes = container.to_bytes();
    let size = bytes.len();
    info!(
        "{}: {} -> {} bytes ({:.3}:1)",
        name,
        data.len(),
        size,
        data.len() as f64 / size as f64
    );

    // Diagnostics go to stderr so they never mix with stdout output
    if opts.dump {
        match container.tree()? {
            Some(tree) => eprintln!("{}:\n{}", name, tree),
            None => eprintln!("{}: empty, no tree", name),
        }
        eprint!("{}", hexdump(&container.payload));
    }
    Ok(bytes)
}
