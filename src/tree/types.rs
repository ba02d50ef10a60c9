//! Types for suffix tree construction
//!
//! Nodes and edges live in arenas owned by the tree and refer to each
//! other through the copyable handles defined here. Ownership always
//! flows parent -> edge -> child; suffix links and incoming-edge
//! back-references are plain handles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in the concatenated sequence
pub type Position = usize;

/// Handle to a node in the tree's node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

/// Handle to an edge in the tree's edge arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) u32);

/// Index of an appended sub-sequence; also identifies its terminal
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SequenceId(pub u32);

impl NodeId {
    /// The root is the first node allocated and is never replaced
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl SequenceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// End of an edge label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Internal edge produced by a split (exclusive end)
    Fixed(Position),
    /// Leaf edge; reads the tree's global counter, capped one past the
    /// terminal of the sub-sequence the leaf was created for
    Open(SequenceId),
}

impl EdgeEnd {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, EdgeEnd::Open(_))
    }
}

/// Occurrence of a pattern inside one of the indexed sub-sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SuffixMatch {
    /// Sub-sequence the match was found in
    pub sequence: SequenceId,
    /// Offset within that sub-sequence
    pub offset: usize,
    /// Global position in the concatenated sequence (for debugging)
    pub global_position: Position,
}

/// Structural statistics about a tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of appended sub-sequences
    pub sequence_count: usize,
    /// Tokens plus terminals stored in the sequence
    pub item_count: usize,
    /// All nodes, root included
    pub node_count: usize,
    /// Nodes that are neither root nor leaf
    pub internal_node_count: usize,
    /// Nodes with no outgoing edges
    pub leaf_count: usize,
    pub edge_count: usize,
    pub suffix_link_count: usize,
    /// Longest root-to-node path measured in edges
    pub max_depth: usize,
}
