//! tradesim-core: algorithmic services for an educational trading simulation
//!
//! This library provides the algorithm toolkit a stock-trading
//! simulation calls into:
//! - Searching instrument listings (sequential, binary, rolling-hash
//!   substring matching)
//! - Recording "recently bought" / "recently sold" events in bounded
//!   open-addressed registries
//! - Estimating the compressed size of the trade activity log with a
//!   Huffman prefix code
//!
//! # Architecture
//!
//! The components are independent services with no dependencies on one
//! another:
//! - `search`: algorithm dispatch and the three search strategies
//! - `registry`: the two fixed-capacity recency registries
//! - `huffman`: prefix-code construction, encoding, and size reporting
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured and recoverable
//! - **Bounded work**: table probes are capped at capacity; every
//!   operation is bounded by its algorithmic complexity
//! - **Deterministic**: same inputs produce the same outputs, including
//!   Huffman tie-breaking
//! - **Pure services**: no I/O, no clocks, no randomness; instances own
//!   their state and calls are atomic with respect to the caller

pub mod error;
pub mod huffman;
pub mod registry;
pub mod search;

// Re-export commonly used types
pub use error::{Error, Result};
