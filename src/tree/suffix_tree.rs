//! Online construction driver
//!
//! Every appended item starts a phase. A phase grows the suffix window
//! by one item and keeps inserting the suffixes still pending in it,
//! shortest last, until one is found to be implicitly present already
//! (Rule 3) or the window is exhausted. Internal nodes created within
//! one phase are suffix-linked in creation order.

use super::active_point::{ActivePoint, Suffix};
use super::edge::Edge;
use super::error::{Result, TreeError};
use super::node::Node;
use super::sequence::Sequence;
use super::types::{EdgeId, NodeId, Position, SequenceId};
use std::hash::Hash;
use tracing::{debug, trace};

/// Outcome of a single extension step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extension {
    /// A leaf was added; shorter suffixes are still pending
    Branched,
    /// The suffix was already present; the phase is over
    Showstopper,
}

/// A generalized suffix tree over tokens of type `T`
#[derive(Debug, Clone)]
pub struct SuffixTree<T> {
    pub(crate) sequence: Sequence<T>,
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) active_point: ActivePoint,
    pub(crate) suffix: Suffix,
    /// Global open end shared by every leaf edge
    pub(crate) current_end: Position,
    pub(crate) inserts_this_phase: usize,
    pub(crate) last_node_inserted: Option<NodeId>,
}

impl<T> Default for SuffixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SuffixTree<T> {
    /// Create an empty tree holding only the root
    pub fn new() -> Self {
        Self {
            sequence: Sequence::new(),
            nodes: vec![Node::new(None)],
            edges: Vec::new(),
            active_point: ActivePoint::new(NodeId::ROOT),
            suffix: Suffix::new(0, 0),
            current_end: 0,
            inserts_this_phase: 0,
            last_node_inserted: None,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The concatenation of every indexed sub-sequence
    pub fn sequence(&self) -> &Sequence<T> {
        &self.sequence
    }

    /// Number of items inserted so far
    #[inline]
    pub fn current_end(&self) -> Position {
        self.current_end
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn alloc_node(&mut self, incoming_edge: Option<EdgeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(incoming_edge));
        id
    }

    pub(crate) fn alloc_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(edge);
        id
    }

    /// Record a structural insertion at `node`
    ///
    /// After the first insertion of a phase, the node touched by the
    /// previous insertion is linked to `node`. `node` then becomes the
    /// candidate for the next link of this phase.
    pub(crate) fn set_suffix_link(&mut self, node: NodeId) {
        if self.inserts_this_phase > 0 {
            self.link_last_inserted(node);
        }
        self.last_node_inserted = Some(node);
    }

    /// Link the last inserted node of this phase to `node`, if any
    pub(crate) fn link_last_inserted(&mut self, node: NodeId) {
        if self.inserts_this_phase == 0 {
            return;
        }
        if let Some(last) = self.last_node_inserted {
            if last != NodeId::ROOT {
                trace!(from = ?last, to = ?node, "suffix link");
                self.nodes[last.index()].suffix_link = Some(node);
            }
        }
    }
}

impl<T: Clone + Eq + Hash> SuffixTree<T> {
    /// Build a tree indexing one sequence
    pub fn with_sequence<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.add(tokens)?;
        Ok(tree)
    }

    /// Append another sub-sequence and index all of its suffixes
    ///
    /// The terminal capping the sub-sequence is minted by the tree, so
    /// suffixes of different sub-sequences never collapse into one leaf.
    pub fn add<I>(&mut self, tokens: I) -> Result<SequenceId>
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.current_end;
        let id = self.sequence.add(tokens);
        let end = self.sequence.len();

        debug!(sequence = %id, start, end, "adding sequence");

        self.suffix = Suffix::new(start, start);
        self.active_point.set_position(NodeId::ROOT, None, 0);
        self.extend_tree(start, end)?;

        debug!(
            sequence = %id,
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "sequence indexed"
        );
        Ok(id)
    }

    /// Run one phase per position in `from..to`
    pub(crate) fn extend_tree(&mut self, from: Position, to: Position) -> Result<()> {
        for pos in from..to {
            self.suffix.increment();
            self.inserts_this_phase = 0;
            self.last_node_inserted = None;

            trace!(pos, pending = self.suffix.end - self.suffix.start, "phase");
            self.insert()?;

            self.current_end += 1;
        }
        Ok(())
    }

    /// Insert every pending suffix of the current phase
    ///
    /// Each step dispatches on whether the active point denotes a node or
    /// an offset along an edge.
    pub(crate) fn insert(&mut self) -> Result<()> {
        while !self.suffix.is_empty() {
            let extension = if self.active_point.is_node() {
                self.insert_at_node()?
            } else if self.active_point.is_edge() {
                self.insert_at_edge()?
            } else {
                return Err(TreeError::InvalidState(
                    "active point denotes neither a node nor an edge",
                ));
            };

            if extension == Extension::Showstopper {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::sequence::Item;

    fn leaf_count<T>(tree: &SuffixTree<T>) -> usize {
        tree.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    #[test]
    fn test_empty_tree() {
        let tree: SuffixTree<char> = SuffixTree::new();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.edge_count(), 0);
        assert!(tree.active_point.is_node());
    }

    #[test]
    fn test_banana() {
        let tree = SuffixTree::with_sequence("BANANA".chars()).unwrap();

        assert_eq!(leaf_count(&tree), 7);

        let root = tree.node(NodeId::ROOT);
        let mut keys: Vec<_> = root.edges.keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                Item::Token('A'),
                Item::Token('B'),
                Item::Token('N'),
                Item::Terminal(SequenceId(0)),
            ]
        );
    }

    #[test]
    fn test_phase_ends_at_root() {
        let tree = SuffixTree::with_sequence("mississippi".chars()).unwrap();
        // the terminal flushes every pending suffix
        assert!(tree.suffix.is_empty());
        assert_eq!(tree.active_point, ActivePoint::new(NodeId::ROOT));
        assert_eq!(tree.current_end(), 12);
    }

    #[test]
    fn test_repeated_token() {
        let tree = SuffixTree::with_sequence("AAAA".chars()).unwrap();
        assert_eq!(leaf_count(&tree), 5);
        // one internal node per proper prefix: A, AA, AAA
        assert_eq!(tree.node_count(), 1 + 3 + 5);
    }

    #[test]
    fn test_generalized_leaf_count() {
        let mut tree = SuffixTree::new();
        let a = tree.add("AAAA".chars()).unwrap();
        let b = tree.add("AAA".chars()).unwrap();

        assert_ne!(a, b);
        assert_eq!(leaf_count(&tree), 9);
    }

    #[test]
    fn test_internal_nodes_are_linked() {
        let tree = SuffixTree::with_sequence("abcabxabcd".chars()).unwrap();

        for (idx, node) in tree.nodes.iter().enumerate().skip(1) {
            if !node.is_leaf() {
                assert!(node.suffix_link.is_some(), "node {} has no suffix link", idx);
            }
        }
        assert!(tree.node(NodeId::ROOT).suffix_link.is_none());
    }

    #[test]
    fn test_invalid_active_point() {
        let mut tree = SuffixTree::new();
        tree.add("ab".chars()).unwrap();
        tree.sequence.add("c".chars());
        tree.suffix = Suffix::new(3, 4);
        tree.active_point.set_position(NodeId::ROOT, Some(EdgeId(0)), 0);

        assert!(matches!(tree.insert(), Err(TreeError::InvalidState(_))));
    }

    #[test]
    fn test_deterministic() {
        let build = || {
            let mut tree = SuffixTree::new();
            tree.add("abracadabra".chars()).unwrap();
            tree.add("cadabra".chars()).unwrap();
            tree
        };
        let a = build();
        let b = build();

        assert_eq!(a.edges, b.edges);
        let links = |t: &SuffixTree<char>| t.nodes.iter().map(|n| n.suffix_link).collect::<Vec<_>>();
        assert_eq!(links(&a), links(&b));
    }
}
