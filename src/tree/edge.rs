//! Labelled arcs between nodes and the extension rules applied when the
//! active point sits partway along one of them.

use super::error::{Result, TreeError};
use super::suffix_tree::{Extension, SuffixTree};
use super::types::{EdgeEnd, EdgeId, NodeId, Position};
use std::hash::Hash;
use tracing::trace;

/// An edge labelled `[start, end)` in the tree's sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub(crate) start: Position,
    pub(crate) end: EdgeEnd,
    pub(crate) parent: NodeId,
    pub(crate) child: NodeId,
}

impl Edge {
    /// Leaf edges are open; split edges have a fixed end
    #[inline]
    pub fn is_terminating(&self) -> bool {
        self.end.is_open()
    }
}

impl<T> SuffixTree<T> {
    /// Resolve the exclusive end of an edge against the live counter
    pub(crate) fn edge_end(&self, edge: &Edge) -> Position {
        match edge.end {
            EdgeEnd::Fixed(end) => end,
            EdgeEnd::Open(owner) => match self.sequence.boundary(owner) {
                // leaves stop right after their own terminal
                Some(b) => self.current_end.min(b.terminal() + 1),
                None => self.current_end,
            },
        }
    }
}

impl<T: Clone + Eq + Hash> SuffixTree<T> {
    /// Apply the extension rules with the active point inside an edge
    ///
    /// Rule 3 when the next label item matches, otherwise split the
    /// edge and hang a new leaf off the fresh internal node.
    pub(crate) fn insert_at_edge(&mut self) -> Result<Extension> {
        let edge_id = self
            .active_point
            .edge
            .ok_or(TreeError::InvalidState("edge insertion without an active edge"))?;
        let offset = self.active_point.length;
        let pos = self.suffix.end_position();
        let next = self.edges[edge_id.index()].start + offset;

        if self.sequence[next] == self.sequence[pos] {
            trace!(?edge_id, offset, pos, "rule 3 on edge");
            self.active_point.length += 1;
            self.canonicalize(self.suffix.end)?;
            return Ok(Extension::Showstopper);
        }

        trace!(?edge_id, offset, pos, "rule 2 with split");
        let internal = self.split_edge(edge_id, offset)?;
        self.add_leaf(internal, pos)?;
        self.set_suffix_link(internal);
        self.inserts_this_phase += 1;
        self.relocate()?;

        Ok(Extension::Branched)
    }

    /// Split `edge_id` after `offset` items
    ///
    /// The original edge keeps its id and its place in the parent's map
    /// and now ends at the new internal node; a second edge carries the
    /// remainder of the label down to the original child.
    pub(crate) fn split_edge(&mut self, edge_id: EdgeId, offset: usize) -> Result<NodeId> {
        let Edge { start, end, child, .. } = self.edges[edge_id.index()];
        let mid = start + offset;

        if offset == 0 || mid >= self.edge_end(&self.edges[edge_id.index()]) {
            return Err(TreeError::InvalidState("split outside of the edge label"));
        }

        let internal = self.alloc_node(Some(edge_id));
        let lower = self.alloc_edge(Edge {
            start: mid,
            end,
            parent: internal,
            child,
        });
        self.nodes[child.index()].incoming_edge = Some(lower);

        let upper = &mut self.edges[edge_id.index()];
        upper.end = EdgeEnd::Fixed(mid);
        upper.child = internal;

        self.attach(internal, mid, lower)?;
        Ok(internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::sequence::Item;

    #[test]
    fn test_split_keeps_label() {
        let mut tree = SuffixTree::new();
        tree.add("abc".chars()).unwrap();

        let edge = tree.node(NodeId::ROOT).edge(&Item::Token('a')).unwrap();
        let internal = tree.split_edge(edge, 1).unwrap();

        let upper = tree.edge_ref(edge);
        assert_eq!(upper.items(), &[Item::Token('a')]);
        assert_eq!(upper.child().id(), internal);
        assert!(!upper.is_terminating());

        let lower = tree.node_ref(internal).edges().next().unwrap();
        assert_eq!(lower.items()[0], Item::Token('b'));
        assert!(lower.is_terminating());
        assert_eq!(lower.child().incoming_edge().map(|e| e.id()), Some(lower.id()));
    }

    #[test]
    fn test_split_outside_label_fails() {
        let mut tree = SuffixTree::new();
        tree.add("ab".chars()).unwrap();

        let edge = tree.node(NodeId::ROOT).edge(&Item::Token('a')).unwrap();
        assert!(matches!(
            tree.split_edge(edge, 0),
            Err(TreeError::InvalidState(_))
        ));
    }

    #[test]
    fn test_open_end_capped_at_own_terminal() {
        let mut tree = SuffixTree::new();
        tree.add("ab".chars()).unwrap();
        tree.add("cd".chars()).unwrap();

        // the leaf for "ab$0" must not run into the second sub-sequence
        let edge = tree.node(NodeId::ROOT).edge(&Item::Token('a')).unwrap();
        let edge = tree.edge_ref(edge);
        assert_eq!(edge.len(), 3);
        assert_eq!(edge.items().last(), Some(&Item::Terminal(crate::SequenceId(0))));
    }
}
