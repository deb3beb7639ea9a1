//! Error types shared by the coding core, the container layer and the command line tool.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffError>;

/// Everything that can go wrong while building, encoding or decoding.
#[derive(Debug, Error)]
pub enum HuffError {
    /// No symbols to build a tree from, or a malformed frequency table.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Extraction from an empty priority queue. Never surfaces under correct use.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// The symbol has no code in the table it is being encoded with.
    #[error("symbol 0x{symbol:02x} has no code in the table")]
    UnknownSymbol { symbol: u8 },

    /// A bit that is not 0 or 1, or a path that leaves the tree.
    #[error("corrupt stream at bit {position}: {reason}")]
    CorruptStream { position: usize, reason: String },

    /// Input ended part way down a code path.
    #[error("stream truncated: ended mid-code after {bits} bits")]
    TruncatedStream { bits: usize },

    /// Container header or payload does not describe a valid stream.
    #[error("invalid container: {0}")]
    InvalidContainer(String),

    /// Refusing to overwrite an existing output file.
    #[error("output file {0} already exists (use -f to overwrite)")]
    OutputExists(String),

    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffError {
    /// Create a corrupt stream error at the given bit position.
    pub fn corrupt(position: usize, reason: impl Into<String>) -> Self {
        HuffError::CorruptStream {
            position,
            reason: reason.into(),
        }
    }
}
