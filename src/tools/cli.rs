use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Print the tree and a hex dump of the packed data while compressing
    pub dump: bool,
    /// Vec of names of files to read for input. Empty means stdin.
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            dump: false,
            files: vec![],
            force_overwrite: false,
            keep_input_files: false,
            op_mode: Mode::Zip,
            output: Output::File,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Static Huffman file compressor",
    long_about = "
    Compresses each file to <file>.huf using a Huffman code built from that file's own
    byte frequencies. The frequencies are stored ahead of the packed data so the same
    tree can be rebuilt to decompress.

    With no file names, reads standard input and writes standard output."
)]
pub struct Args {
    /// Files to process
    #[clap()]
    files: Vec<String>,

    /// Perform compression on the input files (default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Test compressed file integrity
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Suppress noncritical messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u64,

    /// Print the tree and a hex dump of the packed data while compressing
    #[clap(long = "dump")]
    dump: bool,
}

impl From<Args> for HuffOpts {
    /// Put command line information from CLAP into our internal structure.
    fn from(args: Args) -> Self {
        let mut opts = HuffOpts::new();

        // Test beats decompress beats compress. Compress is the default.
        opts.op_mode = match (args.test, args.decompress, args.compress) {
            (true, _, _) => Mode::Test,
            (false, true, _) => Mode::Unzip,
            _ => Mode::Zip,
        };

        opts.files = args.files;
        opts.force_overwrite = args.force;
        opts.keep_input_files = args.keep;
        opts.dump = args.dump;

        // No file names means a filter from stdin to stdout
        if args.stdout || opts.files.is_empty() {
            opts.output = Output::Stdout;
        }

        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.verbose {
                0 => Verbosity::Warnings,
                1 => Verbosity::Info,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };
        opts
    }
}

/// Parse the command line, set the log level, and report the settings.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    // Below we report initialization status to the user
    info!("---- Huffman Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match opts.files.len() {
        0 => warn!("No input files, reading from stdin"),
        n => info!("Processing {} file(s)", n),
    }
    info!("Output set to {}", opts.output);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    info!("---- Huffman Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::{Args, HuffOpts, Mode, Output, Verbosity};
    use clap::Parser;

    fn opts(args: &[&str]) -> HuffOpts {
        HuffOpts::from(Args::try_parse_from(args.iter().copied()).unwrap())
    }

    #[test]
    fn default_test() {
        let o = opts(&["huffman", "a.txt"]);
        assert_eq!(o.op_mode, Mode::Zip);
        assert_eq!(o.output, Output::File);
        assert_eq!(o.files, vec!["a.txt".to_string()]);
        assert_eq!(o.verbose, Verbosity::Warnings);
        assert!(!o.keep_input_files && !o.force_overwrite && !o.dump);
    }

    #[test]
    fn short_flags_test() {
        let o = opts(&["huffman", "-dkf", "-vv", "a.huf", "b.huf"]);
        assert_eq!(o.op_mode, Mode::Unzip);
        assert!(o.keep_input_files);
        assert!(o.force_overwrite);
        assert_eq!(o.verbose, Verbosity::Debug);
        assert_eq!(o.files.len(), 2);
        assert_eq!(opts(&["huffman", "-v", "a"]).verbose, Verbosity::Info);
        assert_eq!(opts(&["huffman", "-vvvv", "a"]).verbose, Verbosity::Trace);
    }

    #[test]
    fn stdin_test() {
        let o = opts(&["huffman", "-q"]);
        assert_eq!(o.output, Output::Stdout);
        assert_eq!(o.verbose, Verbosity::Quiet);
        let o = opts(&["huffman", "-t", "--dump", "x.huf"]);
        assert_eq!(o.op_mode, Mode::Test);
        assert!(o.dump);
    }
}
