//! Error types for the toolkit.
//!
//! All operations return structured errors rather than panicking.
//! Every error is local to the failing call; none is fatal to the
//! host simulation.

use thiserror::Error;

/// Top-level error type for all toolkit operations.
///
/// Each variant corresponds to a failure domain:
/// - Search: algorithm discriminator parsing
/// - Registry: bounded open-addressed table inserts
/// - Huffman: codec construction or encode/decode failures
#[derive(Debug, Error)]
pub enum Error {
    /// Search dispatch error (e.g., unknown algorithm name)
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// Recency registry error (e.g., table full)
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Huffman codec error (e.g., empty input, malformed bit stream)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),
}

/// Search dispatch errors.
///
/// Algorithm selection itself is a closed enum, so "unknown algorithm"
/// can only arise at the one place free-form text is parsed into an
/// [`Algorithm`](crate::search::Algorithm).
#[derive(Debug, Error)]
pub enum SearchError {
    /// The discriminator names no known algorithm
    #[error("unknown search algorithm: {0:?} (expected sequential, binary, or pattern)")]
    UnknownAlgorithm(String),
}

/// Recency registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Every slot was probed and the key is not present
    #[error("registry full: all {capacity} slots occupied")]
    TableFull { capacity: usize },
}

/// Huffman codec errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No symbols to build a code from
    #[error("empty input: cannot build a prefix code for zero symbols")]
    EmptyInput,

    /// A symbol of the input has no entry in the code table
    #[error("symbol {symbol:?} has no code in the table")]
    UnknownSymbol { symbol: char },

    /// The bit stream walked off the code trie
    #[error("invalid code at bit position {position}")]
    InvalidCode { position: usize },

    /// The bit stream ended in the middle of a codeword
    #[error("bit stream truncated mid-codeword at bit position {position}")]
    TruncatedStream { position: usize },

    /// A code table entry contains a character other than '0' or '1'
    #[error("malformed code table entry for {symbol:?}: {code:?}")]
    MalformedCode { symbol: char, code: String },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
