use crate::error::TrieError;
use crate::node::{ABSENT, Node, NodeIdx};

/// Flat storage for every node of a trie.
///
/// Rows are addressed by [`NodeIdx`]. Row `i` owns the child slots
/// `children[i * A..(i + 1) * A]` and the counters `prefix_counts[i]` and `end_counts[i]`.
/// Growth only appends, so a handle keeps naming the same row for the lifetime of the table.
#[derive(Clone, Debug)]
pub(crate) struct NodeTable {
    alphabet_size: usize,
    children: Vec<NodeIdx>,
    prefix_counts: Vec<usize>,
    end_counts: Vec<usize>,
    capacity: usize,
    growths: usize,
}

impl NodeTable {
    /// Creates a table holding only the root, with room for `capacity` rows.
    pub(crate) fn new(alphabet_size: usize, capacity: usize) -> Result<Self, TrieError> {
        let mut table = NodeTable {
            alphabet_size,
            children: Vec::new(),
            prefix_counts: Vec::new(),
            end_counts: Vec::new(),
            capacity: 0,
            growths: 0,
        };
        table.reserve_rows(capacity.max(1))?;
        let root = table.allocate()?;
        debug_assert_eq!(root, NodeIdx::ROOT);
        Ok(table)
    }

    /// Appends a fresh row with every child absent and both counters zero.
    ///
    /// Capacity doubles when exhausted, so `n` calls cost `O(n)` in total.
    pub(crate) fn allocate(&mut self) -> Result<NodeIdx, TrieError> {
        let nodes = self.len();
        let raw = u32::try_from(nodes)
            .ok()
            .filter(|&raw| raw != ABSENT.0)
            .ok_or(TrieError::IndexSpaceExhausted { nodes })?;

        if nodes == self.capacity {
            self.grow()?;
        }

        self.children.extend(std::iter::repeat_n(ABSENT, self.alphabet_size));
        self.prefix_counts.push(0);
        self.end_counts.push(0);
        Ok(NodeIdx(raw))
    }

    fn grow(&mut self) -> Result<(), TrieError> {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity
            .checked_mul(2)
            .ok_or(TrieError::CapacityOverflow { rows: old_capacity })?;
        self.reserve_rows(new_capacity)?;
        self.growths += 1;
        tracing::debug!(
            old_capacity,
            new_capacity,
            nodes = self.len(),
            "grew trie node table"
        );
        Ok(())
    }

    /// Makes room for `rows` rows in total. Never shrinks.
    fn reserve_rows(&mut self, rows: usize) -> Result<(), TrieError> {
        if rows <= self.capacity {
            return Ok(());
        }
        let additional = rows - self.len();
        let slots = additional
            .checked_mul(self.alphabet_size)
            .ok_or(TrieError::CapacityOverflow { rows })?;
        self.children.try_reserve_exact(slots)?;
        self.prefix_counts.try_reserve_exact(additional)?;
        self.end_counts.try_reserve_exact(additional)?;
        self.capacity = rows;
        Ok(())
    }

    /// Reserves room for at least `additional` more rows.
    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), TrieError> {
        let rows = self
            .len()
            .checked_add(additional)
            .ok_or(TrieError::CapacityOverflow { rows: usize::MAX })?;
        self.reserve_rows(rows)
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.children.shrink_to_fit();
        self.prefix_counts.shrink_to_fit();
        self.end_counts.shrink_to_fit();
        self.capacity = self.len();
    }

    /// Drops every node but the root and zeroes the root. Capacity is kept.
    pub(crate) fn clear(&mut self) {
        self.children.truncate(self.alphabet_size);
        self.children.fill(ABSENT);
        self.prefix_counts.truncate(1);
        self.prefix_counts[0] = 0;
        self.end_counts.truncate(1);
        self.end_counts[0] = 0;
    }

    #[inline(always)]
    pub(crate) fn node(&self, idx: NodeIdx) -> Node<'_> {
        Node {
            children: self.children_of(idx),
            prefix_count: self.prefix_count_of(idx),
            end_count: self.end_count_of(idx),
        }
    }

    #[inline(always)]
    pub(crate) fn children_of(&self, idx: NodeIdx) -> &[NodeIdx] {
        let start = idx.index() * self.alphabet_size;
        &self.children[start..start + self.alphabet_size]
    }

    #[inline(always)]
    pub(crate) fn children_of_mut(&mut self, idx: NodeIdx) -> &mut [NodeIdx] {
        let start = idx.index() * self.alphabet_size;
        &mut self.children[start..start + self.alphabet_size]
    }

    /// Gets the child reached from `idx` by `symbol`, if that edge exists.
    #[inline(always)]
    pub(crate) fn child(&self, idx: NodeIdx, symbol: u8) -> Option<NodeIdx> {
        debug_assert!((symbol as usize) < self.alphabet_size);
        let child = self.children_of(idx)[symbol as usize];
        (!child.is_absent()).then_some(child)
    }

    #[inline(always)]
    pub(crate) fn set_child(&mut self, idx: NodeIdx, symbol: u8, child: NodeIdx) {
        debug_assert!((symbol as usize) < self.alphabet_size);
        self.children_of_mut(idx)[symbol as usize] = child;
    }

    #[inline(always)]
    pub(crate) fn prefix_count_of(&self, idx: NodeIdx) -> usize {
        self.prefix_counts[idx.index()]
    }

    #[inline(always)]
    pub(crate) fn end_count_of(&self, idx: NodeIdx) -> usize {
        self.end_counts[idx.index()]
    }

    #[inline(always)]
    pub(crate) fn increment_prefix(&mut self, idx: NodeIdx) {
        self.prefix_counts[idx.index()] += 1;
    }

    #[inline(always)]
    pub(crate) fn increment_end(&mut self, idx: NodeIdx) {
        self.end_counts[idx.index()] += 1;
    }

    /// Number of allocated rows, root included.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.prefix_counts.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many times `allocate` had to double the table.
    pub(crate) fn growths(&self) -> usize {
        self.growths
    }

    pub(crate) fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }
}
