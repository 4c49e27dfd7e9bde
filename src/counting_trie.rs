use crate::config::TrieConfig;
use crate::error::TrieError;
use crate::key::Key;
use crate::node::NodeIdx;
use crate::node_table::NodeTable;

/// A `CountingTrie` counts how often keys, and prefixes of keys, have been inserted.
///
/// Nodes live in a flat, index-addressed table that grows by doubling, so inserting,
/// counting exact matches and counting prefix matches are all `O(L)` in the key length
/// with no per-node heap allocation.
///
/// Keys are sequences of symbols in `[0, A)`, where `A` is the alphabet size chosen at
/// construction (26 by default). Symbols outside the alphabet are a contract violation:
/// the trie does not validate them.
///
/// # Examples
///
/// ```
/// use tallytrie::{CountingTrie, Lowercase};
///
/// let mut trie = CountingTrie::new();
/// for word in ["cat", "car", "cat", "dog"] {
///     trie.insert(Lowercase(word));
/// }
///
/// assert_eq!(trie.count_exact(Lowercase("cat")), 2);
/// assert_eq!(trie.count_exact(Lowercase("ca")), 0);
/// assert_eq!(trie.count_prefix(Lowercase("ca")), 3);
/// assert_eq!(trie.count_prefix(Lowercase("")), 4);
/// ```
#[derive(Clone)]
pub struct CountingTrie {
    pub(crate) config: TrieConfig,
    pub(crate) table: NodeTable,
}

/// A snapshot of a trie's size and storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrieStats {
    /// Total number of insertions, counting repeats.
    pub insertions: usize,
    /// Allocated nodes, root included.
    pub nodes: usize,
    /// Rows the node table can hold before growing again.
    pub capacity: usize,
    /// Times the node table doubled while inserting.
    pub growths: usize,
    pub alphabet_size: usize,
}

impl Default for CountingTrie {
    /// Creates an empty trie over the lowercase alphabet.
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CountingTrie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("CountingTrie")
            .field("insertions", &stats.insertions)
            .field("nodes", &stats.nodes)
            .field("capacity", &stats.capacity)
            .field("alphabet_size", &stats.alphabet_size)
            .finish()
    }
}

impl<K: Key> Extend<K> for CountingTrie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Key> FromIterator<K> for CountingTrie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = CountingTrie::new();
        trie.extend(iter);
        trie
    }
}

impl CountingTrie {
    /// Creates an empty trie with the default [`TrieConfig`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tallytrie::CountingTrie;
    /// let trie = CountingTrie::new();
    /// assert!(trie.is_empty());
    /// assert_eq!(trie.alphabet_size(), 26);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(TrieConfig::default().initial_capacity)
    }

    /// Creates an empty trie over the lowercase alphabet with room for `capacity` nodes.
    ///
    /// # Panics
    ///
    /// Panics if the node table cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        let config = TrieConfig::default().with_initial_capacity(capacity);
        match Self::with_config(config) {
            Ok(trie) => trie,
            Err(err) => panic!("failed to allocate trie: {err}"),
        }
    }

    /// Creates an empty trie whose keys use symbols in `[0, alphabet_size)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tallytrie::CountingTrie;
    /// let mut trie = CountingTrie::with_alphabet_size(4).unwrap();
    /// trie.insert([0u8, 3, 2]);
    /// assert_eq!(trie.count_prefix([0u8, 3]), 1);
    ///
    /// assert!(CountingTrie::with_alphabet_size(0).is_err());
    /// ```
    pub fn with_alphabet_size(alphabet_size: usize) -> Result<Self, TrieError> {
        Self::with_config(TrieConfig::default().with_alphabet_size(alphabet_size))
    }

    /// Creates an empty trie from an explicit configuration.
    pub fn with_config(config: TrieConfig) -> Result<Self, TrieError> {
        config.validate()?;
        let table = NodeTable::new(config.alphabet_size, config.effective_capacity())?;
        tracing::trace!(
            alphabet_size = config.alphabet_size,
            capacity = table.capacity(),
            "created counting trie"
        );
        Ok(CountingTrie { config, table })
    }

    /// Records one insertion of `key`.
    ///
    /// Inserting the same key twice counts as two insertions.
    ///
    /// # Panics
    ///
    /// Panics if the node table cannot grow. Use [`try_insert`](Self::try_insert) to get
    /// the error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tallytrie::{CountingTrie, Lowercase};
    /// let mut trie = CountingTrie::new();
    /// trie.insert(Lowercase("ab"));
    /// trie.insert(Lowercase("ab"));
    /// assert_eq!(trie.count_exact(Lowercase("ab")), 2);
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn insert<K: Key>(&mut self, key: K) {
        if let Err(err) = self.try_insert(key) {
            panic!("trie insertion failed: {err}");
        }
    }

    /// Records one insertion of `key`, returning an error if the node table cannot grow.
    ///
    /// On error the nodes created for the leading symbols of `key` stay allocated and
    /// counted, and the trie should not be used further.
    pub fn try_insert<K: Key>(&mut self, key: K) -> Result<(), TrieError> {
        let mut current = NodeIdx::ROOT;
        // The root counts every insertion, the empty key included.
        self.table.increment_prefix(current);

        for symbol in key.symbols() {
            current = match self.table.child(current, symbol) {
                Some(child) => child,
                None => {
                    let child = self.table.allocate()?;
                    self.table.set_child(current, symbol, child);
                    child
                }
            };
            self.table.increment_prefix(current);
        }

        self.table.increment_end(current);
        Ok(())
    }

    /// Walks from the root along `key` without allocating.
    fn find<K: Key>(&self, key: K) -> Option<NodeIdx> {
        let mut current = NodeIdx::ROOT;
        for symbol in key.symbols() {
            current = self.table.child(current, symbol)?;
        }
        Some(current)
    }

    /// Returns how many times exactly `key` was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tallytrie::{CountingTrie, Lowercase};
    /// let mut trie = CountingTrie::new();
    /// trie.insert(Lowercase("car"));
    /// assert_eq!(trie.count_exact(Lowercase("car")), 1);
    /// assert_eq!(trie.count_exact(Lowercase("ca")), 0);
    /// assert_eq!(trie.count_exact(Lowercase("cart")), 0);
    /// ```
    pub fn count_exact<K: Key>(&self, key: K) -> usize {
        self.find(key).map_or(0, |idx| self.table.node(idx).end_count)
    }

    /// Returns how many insertions had `prefix` as a prefix, exact matches included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tallytrie::{CountingTrie, Lowercase};
    /// let mut trie = CountingTrie::new();
    /// trie.insert(Lowercase("car"));
    /// trie.insert(Lowercase("cat"));
    /// assert_eq!(trie.count_prefix(Lowercase("ca")), 2);
    /// assert_eq!(trie.count_prefix(Lowercase("cat")), 1);
    /// assert_eq!(trie.count_prefix(Lowercase("d")), 0);
    /// ```
    pub fn count_prefix<K: Key>(&self, prefix: K) -> usize {
        self.find(prefix).map_or(0, |idx| self.table.node(idx).prefix_count)
    }

    /// Returns `true` if `key` was inserted at least once.
    pub fn contains<K: Key>(&self, key: K) -> bool {
        self.count_exact(key) > 0
    }

    /// Returns `true` if any inserted key starts with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tallytrie::{CountingTrie, Lowercase};
    /// let mut trie = CountingTrie::new();
    /// trie.insert(Lowercase("dog"));
    /// assert!(trie.starts_with(Lowercase("do")));
    /// assert!(!trie.contains(Lowercase("do")));
    /// ```
    pub fn starts_with<K: Key>(&self, prefix: K) -> bool {
        self.count_prefix(prefix) > 0
    }

    /// Total number of insertions, repeats included.
    pub fn len(&self) -> usize {
        self.table.prefix_count_of(NodeIdx::ROOT)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.table.len()
    }

    /// Number of nodes the trie can hold before its table grows.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn alphabet_size(&self) -> usize {
        self.table.alphabet_size()
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    pub fn stats(&self) -> TrieStats {
        TrieStats {
            insertions: self.len(),
            nodes: self.node_count(),
            capacity: self.capacity(),
            growths: self.table.growths(),
            alphabet_size: self.alphabet_size(),
        }
    }

    /// Reserves room for at least `additional` more nodes.
    ///
    /// # Panics
    ///
    /// Panics if the node table cannot grow.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            panic!("trie reservation failed: {err}");
        }
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TrieError> {
        self.table.reserve(additional)
    }

    /// Releases table capacity beyond the allocated nodes.
    pub fn shrink_to_fit(&mut self) {
        self.table.shrink_to_fit();
    }

    /// Forgets every insertion. The table keeps its capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tallytrie::{CountingTrie, Lowercase};
    /// let mut trie = CountingTrie::new();
    /// trie.insert(Lowercase("a"));
    /// trie.clear();
    /// assert!(trie.is_empty());
    /// assert_eq!(trie.node_count(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }
}
