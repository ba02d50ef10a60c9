//! Branching points of the tree and the extension rules applied when
//! the active point sits exactly on one of them.

use super::edge::Edge;
use super::error::{Result, TreeError};
use super::sequence::Item;
use super::suffix_tree::{Extension, SuffixTree};
use super::types::{EdgeEnd, EdgeId, NodeId, Position};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;
use tracing::trace;

/// A node in the tree
///
/// Outgoing edges are keyed by the first item of their label and keep
/// insertion order, which fixes the traversal order.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) edges: IndexMap<Item<T>, EdgeId, FxBuildHasher>,
    pub(crate) suffix_link: Option<NodeId>,
    pub(crate) incoming_edge: Option<EdgeId>,
    /// Global position of the suffix spelled by a leaf
    pub(crate) suffix_start: Option<Position>,
}

impl<T> Node<T> {
    pub(crate) fn new(incoming_edge: Option<EdgeId>) -> Self {
        Self {
            edges: IndexMap::default(),
            suffix_link: None,
            incoming_edge,
            suffix_start: None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<T: Eq + Hash> Node<T> {
    #[inline]
    pub(crate) fn edge(&self, key: &Item<T>) -> Option<EdgeId> {
        self.edges.get(key).copied()
    }
}

impl<T: Clone + Eq + Hash> SuffixTree<T> {
    /// Apply the extension rules with the active point on a node
    ///
    /// Rule 2 hangs a new leaf off the node; Rule 3 ends the phase.
    pub(crate) fn insert_at_node(&mut self) -> Result<Extension> {
        let node = self.active_point.node;
        let pos = self.suffix.end_position();

        if let Some(edge) = self.nodes[node.index()].edge(&self.sequence[pos]) {
            trace!(?node, pos, "rule 3 at node");
            self.link_last_inserted(node);
            self.active_point.set_position(node, Some(edge), 1);
            self.canonicalize(self.suffix.end)?;
            return Ok(Extension::Showstopper);
        }

        trace!(?node, pos, "rule 2 at node");
        self.add_leaf(node, pos)?;
        self.set_suffix_link(node);
        self.inserts_this_phase += 1;
        self.relocate()?;

        Ok(Extension::Branched)
    }

    /// Create an open leaf edge labelled from `pos` below `node`
    pub(crate) fn add_leaf(&mut self, node: NodeId, pos: Position) -> Result<EdgeId> {
        let owner = self
            .sequence
            .boundaries()
            .last()
            .map(|b| b.id)
            .ok_or(TreeError::InvalidState("leaf inserted before any sequence"))?;

        let leaf = self.alloc_node(None);
        self.nodes[leaf.index()].suffix_start = Some(self.suffix.start);

        let edge = self.alloc_edge(Edge {
            start: pos,
            end: EdgeEnd::Open(owner),
            parent: node,
            child: leaf,
        });
        self.nodes[leaf.index()].incoming_edge = Some(edge);

        self.attach(node, pos, edge)?;
        Ok(edge)
    }

    /// Register `edge` below `node`, keyed by the item at `pos`
    pub(crate) fn attach(&mut self, node: NodeId, pos: Position, edge: EdgeId) -> Result<()> {
        let key = self.sequence[pos].clone();
        let edges = &mut self.nodes[node.index()].edges;

        if edges.contains_key(&key) {
            return Err(TreeError::DuplicateEdgeKey { node });
        }
        edges.insert(key, edge);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_leaf() {
        let node: Node<char> = Node::new(None);
        assert!(node.is_leaf());
        assert_eq!(node.edge_count(), 0);
        assert!(node.suffix_link.is_none());
    }

    #[test]
    fn test_duplicate_edge_key_rejected() {
        let mut tree = SuffixTree::new();
        tree.add("ab".chars()).unwrap();

        let root = NodeId::ROOT;
        let edge = tree.node(root).edge(&Item::Token('a')).unwrap();
        // position 0 holds 'a', which root already branches on
        assert_eq!(
            tree.attach(root, 0, edge),
            Err(TreeError::DuplicateEdgeKey { node: root })
        );
    }

    #[test]
    fn test_leaf_records_suffix_start() {
        let tree = SuffixTree::with_sequence("abc".chars()).unwrap();

        let mut starts: Vec<_> = tree
            .nodes
            .iter()
            .filter(|n| n.is_leaf())
            .filter_map(|n| n.suffix_start)
            .collect();
        starts.sort_unstable();
        assert_eq!(starts, vec![0, 1, 2, 3]);
    }
}
