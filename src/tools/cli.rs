use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, warn};

/// Compress, decompress, or show the code table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Table,
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

/// Resolved run options.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Name of the file to read for input
    pub file: Option<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Compress/Decompress/Table
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information, 1 (off) to 5 (trace)
    pub verbosity: u8,
}

impl Opts {
    pub fn new() -> Self {
        Self {
            file: None,
            force_overwrite: false,
            op_mode: Mode::Zip,
            output: Output::File,
            verbosity: 3,
        }
    }
}

impl Default for Opts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman compression of a single file",
    long_about = None)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: Option<String>,

    /// Perform compression on the input file (default)
    #[clap(short = 'z', long = "zip")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Print the frequency and code table of the input file
    #[clap(short = 't', long = "table")]
    table: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Sets verbosity. -v 1 shows nothing, -v 5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

impl Args {
    /// Copy the parsed arguments into run options. Later mode flags win.
    pub fn into_opts(self) -> Opts {
        let mut opts = Opts::new();
        opts.file = self.filename;
        if self.compress {
            opts.op_mode = Mode::Zip
        };
        if self.decompress {
            opts.op_mode = Mode::Unzip
        };
        if self.table {
            opts.op_mode = Mode::Table
        };
        opts.force_overwrite = self.force;
        if self.stdout {
            opts.output = Output::Stdout
        };
        opts.verbosity = self.v;
        opts
    }
}

/// Map the -v value onto a log level.
pub fn level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 | 1 => log::LevelFilter::Off,
        2 => log::LevelFilter::Error,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Parse the command line, set the log level, and report what we are about to do.
pub fn opts_init() -> Opts {
    let opts = Args::parse().into_opts();
    log::set_max_level(level_for(opts.verbosity));

    // Below we log initialization status to the user
    info!("---- Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => warn!("No input file given"),
    }
    info!("Output goes to {}", opts.output);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- Initialization End ----\n");
    opts
}
