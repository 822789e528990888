//! Opaque node and edge handles.

use serde::Serialize;

/// Identifies a node within one graph instance.
///
/// Handles are plain indices into the owning graph's node storage. They stay
/// valid for the lifetime of the graph, since nodes are never removed. Passing
/// a handle to a graph other than the one that produced it is not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeHandle(pub(crate) u32);

/// Identifies an edge within one graph instance.
///
/// An edge handle becomes invalid once its edge is pruned. Slots of pruned
/// edges are not handed out again by the same graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EdgeHandle(pub(crate) u32);

impl NodeHandle {
    /// Slot index of this node in insertion order.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl EdgeHandle {
    /// Slot index of this edge in insertion order.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl std::fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl std::fmt::Display for EdgeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}
