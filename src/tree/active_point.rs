//! The insertion locus and the window of the suffix being extended.

use super::error::{Result, TreeError};
use super::suffix_tree::SuffixTree;
use super::types::{EdgeEnd, EdgeId, NodeId, Position};
use std::hash::Hash;

/// Window `[start, end)` of the suffix currently being inserted
///
/// The newest item of the phase sits at `end - 1`; the items before it
/// spell the path from the root to the active point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Suffix {
    pub(crate) start: Position,
    pub(crate) end: Position,
}

impl Suffix {
    pub(crate) fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Grow the window by the item of the next phase
    #[inline]
    pub(crate) fn increment(&mut self) {
        self.end += 1;
    }

    /// Move on to the next, one shorter, suffix
    #[inline]
    pub(crate) fn shorten(&mut self) {
        self.start += 1;
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Position of the newest item of the phase
    #[inline]
    pub(crate) fn end_position(&self) -> Position {
        self.end - 1
    }
}

/// Current insertion locus
///
/// `length == 0` means exactly at `node`; otherwise `length` items along
/// `edge`, which leaves `node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActivePoint {
    pub(crate) node: NodeId,
    pub(crate) edge: Option<EdgeId>,
    pub(crate) length: usize,
}

impl ActivePoint {
    pub(crate) fn new(node: NodeId) -> Self {
        Self {
            node,
            edge: None,
            length: 0,
        }
    }

    #[inline]
    pub(crate) fn is_node(&self) -> bool {
        self.edge.is_none() && self.length == 0
    }

    #[inline]
    pub(crate) fn is_edge(&self) -> bool {
        self.edge.is_some() && self.length > 0
    }

    pub(crate) fn set_position(&mut self, node: NodeId, edge: Option<EdgeId>, length: usize) {
        self.node = node;
        self.edge = edge;
        self.length = length;
    }
}

impl<T: Clone + Eq + Hash> SuffixTree<T> {
    /// Move the active point to the locus of the next, shorter suffix
    ///
    /// From the root the path loses its first item; from any other node
    /// the suffix link supplies the same path minus its first item. The
    /// remaining offset is then walked down with skip/count.
    pub(crate) fn relocate(&mut self) -> Result<()> {
        self.suffix.shorten();

        let node = self.active_point.node;
        if node == NodeId::ROOT {
            self.active_point.length = self.active_point.length.saturating_sub(1);
        } else {
            let link = self.nodes[node.index()]
                .suffix_link
                .ok_or(TreeError::MissingSuffixLink { node })?;
            self.active_point.node = link;
        }
        self.active_point.edge = None;

        self.canonicalize(self.suffix.end_position())
    }

    /// Skip/count walk-down of the active point
    ///
    /// The active path ends (exclusive) at `path_end`. Whole internal
    /// edges are skipped by comparing their span against the remaining
    /// length only; leaf edges are never stepped over.
    pub(crate) fn canonicalize(&mut self, path_end: Position) -> Result<()> {
        let mut node = self.active_point.node;
        let mut length = self.active_point.length;

        while length > 0 {
            let key_pos = path_end
                .checked_sub(length)
                .ok_or(TreeError::InvalidState("active length exceeds the suffix window"))?;
            let edge_id = self.nodes[node.index()]
                .edge(&self.sequence[key_pos])
                .ok_or(TreeError::InvalidState("active path leaves the tree"))?;
            let edge = &self.edges[edge_id.index()];

            let span = match edge.end {
                EdgeEnd::Open(_) => None,
                EdgeEnd::Fixed(end) => Some(end - edge.start),
            };
            match span {
                Some(span) if span <= length => {
                    node = edge.child;
                    length -= span;
                }
                _ => {
                    self.active_point.set_position(node, Some(edge_id), length);
                    return Ok(());
                }
            }
        }

        self.active_point.set_position(node, None, 0);
        Ok(())
    }
}
