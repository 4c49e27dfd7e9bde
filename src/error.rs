use std::collections::TryReserveError;

use thiserror::Error;

/// The error type used by this crate.
///
/// Apart from [`TrieError::InvalidAlphabetSize`], every variant means the node table could
/// not grow any further. Those are fatal for the trie: nodes allocated for the leading
/// symbols of the failed key stay in place and nothing is rolled back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The configured alphabet cannot be addressed by `u8` symbols
    #[error("Alphabet size must be between 1 and {max}, got {size}")]
    InvalidAlphabetSize { size: usize, max: usize },

    /// The requested number of rows does not fit in memory addressing
    #[error("Node table capacity overflow: cannot hold {rows} rows")]
    CapacityOverflow { rows: usize },

    /// Every representable node handle has been issued
    #[error("Node index space exhausted after {nodes} nodes")]
    IndexSpaceExhausted { nodes: usize },

    /// The allocator refused to grow the node table
    #[error("Node table allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}
