//! A flat, index-addressed counting trie.
//!
//! This crate provides a `CountingTrie`, which records insertions of keys over a small
//! fixed alphabet and answers how often a key, or any key with a given prefix, was inserted.
//!
//! # Features
//!
//! - Insert, exact count and prefix count in O(k) where k is the key length
//! - Nodes stored in one growable table addressed by integer handles
//! - Amortized O(1) node allocation by doubling, without moving existing handles
//! - Configurable alphabet size and initial capacity

mod config;
mod counting_trie;
mod error;
mod key;
mod node;
mod node_table;

pub use config::{DEFAULT_INITIAL_CAPACITY, MAX_ALPHABET_SIZE, TrieConfig};
pub use counting_trie::{CountingTrie, TrieStats};
pub use error::TrieError;
pub use key::{Key, LOWERCASE_ALPHABET_SIZE, Lowercase};

pub type Result<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod proptest_trie;
