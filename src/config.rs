use crate::error::TrieError;
use crate::key::LOWERCASE_ALPHABET_SIZE;

/// Largest alphabet a trie can be built over. Symbols are `u8`.
pub const MAX_ALPHABET_SIZE: usize = 256;

/// Number of rows reserved up front when no hint is given.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Construction parameters for a [`CountingTrie`](crate::CountingTrie).
///
/// `initial_capacity` only affects how often the node table has to grow; it never changes
/// what the trie counts.
///
/// # Examples
///
/// ```
/// # use tallytrie::{CountingTrie, TrieConfig};
/// let config = TrieConfig::default()
///     .with_alphabet_size(4)
///     .with_initial_capacity(16);
/// let trie = CountingTrie::with_config(config).unwrap();
/// assert_eq!(trie.alphabet_size(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrieConfig {
    /// Number of distinct symbols a key position may take.
    pub alphabet_size: usize,
    /// Rows to reserve before the first growth.
    pub initial_capacity: usize,
}

impl Default for TrieConfig {
    fn default() -> Self {
        TrieConfig {
            alphabet_size: LOWERCASE_ALPHABET_SIZE,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl TrieConfig {
    pub fn with_alphabet_size(mut self, alphabet_size: usize) -> Self {
        self.alphabet_size = alphabet_size;
        self
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Checks that the alphabet can be addressed with `u8` symbols.
    pub fn validate(&self) -> Result<(), TrieError> {
        if self.alphabet_size == 0 || self.alphabet_size > MAX_ALPHABET_SIZE {
            return Err(TrieError::InvalidAlphabetSize {
                size: self.alphabet_size,
                max: MAX_ALPHABET_SIZE,
            });
        }
        Ok(())
    }

    /// Row capacity actually reserved: the root always needs one row.
    pub(crate) fn effective_capacity(&self) -> usize {
        self.initial_capacity.max(1)
    }
}
