/// Handle to a row of the node table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeIdx(pub(crate) u32);

/// Marks a child slot with no outgoing edge. Never issued as a real handle.
pub(crate) const ABSENT: NodeIdx = NodeIdx(u32::MAX);

impl NodeIdx {
    pub(crate) const ROOT: NodeIdx = NodeIdx(0);

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub(crate) fn is_absent(self) -> bool {
        self == ABSENT
    }
}

/// Read-only view of one node: its transition row and both counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<'a> {
    pub(crate) children: &'a [NodeIdx],
    pub(crate) prefix_count: usize,
    pub(crate) end_count: usize,
}
