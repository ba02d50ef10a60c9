//! Read surface for consumers of a built tree
//!
//! [`NodeRef`] and [`EdgeRef`] are borrowed views that resolve handles
//! against the tree. The level-order walk hands them to a
//! [`NodeVisitor`]; its order is deterministic and every node is
//! reported in a single pass.

use super::edge::Edge;
use super::node::Node;
use super::sequence::Item;
use super::suffix_tree::SuffixTree;
use super::types::{EdgeId, NodeId, Position};
use std::fmt;

/// Borrowed view of a node
pub struct NodeRef<'a, T> {
    tree: &'a SuffixTree<T>,
    id: NodeId,
}

/// Borrowed view of an edge
pub struct EdgeRef<'a, T> {
    tree: &'a SuffixTree<T>,
    id: EdgeId,
}

// Manual impls: the views are copyable whatever `T` is.
impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<T> Clone for EdgeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for EdgeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T> PartialEq for EdgeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.id).finish()
    }
}

impl<T> fmt::Debug for EdgeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EdgeRef").field(&self.id).finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    fn data(&self) -> &'a Node<T> {
        &self.tree.nodes[self.id.index()]
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'a, T>> + 'a {
        let tree = self.tree;
        self.data()
            .edges
            .values()
            .map(move |&id| EdgeRef { tree, id })
    }

    pub fn edge_count(&self) -> usize {
        self.data().edge_count()
    }

    pub fn has_suffix_link(&self) -> bool {
        self.data().suffix_link.is_some()
    }

    pub fn suffix_link(&self) -> Option<NodeRef<'a, T>> {
        self.data().suffix_link.map(|id| self.tree.node_ref(id))
    }

    /// The edge this node hangs from; `None` for the root
    pub fn incoming_edge(&self) -> Option<EdgeRef<'a, T>> {
        self.data().incoming_edge.map(|id| self.tree.edge_ref(id))
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.id == NodeId::ROOT
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.data().is_leaf()
    }

    /// Global start position of the suffix a leaf spells
    pub fn suffix_start(&self) -> Option<Position> {
        self.data().suffix_start
    }
}

impl<'a, T> EdgeRef<'a, T> {
    #[inline]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    #[inline]
    fn data(&self) -> &'a Edge {
        &self.tree.edges[self.id.index()]
    }

    pub fn start(&self) -> Position {
        self.data().start
    }

    /// Exclusive end; open edges reflect the live counter
    pub fn end(&self) -> Position {
        self.tree.edge_end(self.data())
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items currently covered by the label
    pub fn items(&self) -> &'a [Item<T>] {
        self.tree.sequence.items(self.start()..self.end())
    }

    /// Leaf edges whose end tracks the global counter
    pub fn is_terminating(&self) -> bool {
        self.data().is_terminating()
    }

    pub fn parent(&self) -> NodeRef<'a, T> {
        self.tree.node_ref(self.data().parent)
    }

    pub fn child(&self) -> NodeRef<'a, T> {
        self.tree.node_ref(self.data().child)
    }
}

/// Event raised by the level-order walk
#[derive(Debug)]
pub enum TraversalEvent<'a, T> {
    Node(NodeRef<'a, T>),
    TerminatingEdge(EdgeRef<'a, T>),
}

/// Receiver for the level-order walk
pub trait NodeVisitor<T> {
    fn visit(&mut self, node: NodeRef<'_, T>);

    fn visit_terminating_edge(&mut self, edge: EdgeRef<'_, T>);
}

impl<T, F> NodeVisitor<T> for F
where
    F: FnMut(TraversalEvent<'_, T>),
{
    fn visit(&mut self, node: NodeRef<'_, T>) {
        self(TraversalEvent::Node(node))
    }

    fn visit_terminating_edge(&mut self, edge: EdgeRef<'_, T>) {
        self(TraversalEvent::TerminatingEdge(edge))
    }
}

impl<T> SuffixTree<T> {
    pub fn node_ref(&self, id: NodeId) -> NodeRef<'_, T> {
        NodeRef { tree: self, id }
    }

    pub fn edge_ref(&self, id: EdgeId) -> EdgeRef<'_, T> {
        EdgeRef { tree: self, id }
    }

    pub fn root_ref(&self) -> NodeRef<'_, T> {
        self.node_ref(NodeId::ROOT)
    }

    /// Level-order walk over the whole tree
    pub fn traverse_all<V>(&self, visitor: &mut V)
    where
        V: NodeVisitor<T> + ?Sized,
    {
        self.traverse_from(NodeId::ROOT, visitor)
    }

    /// Level-order walk starting at `from`
    ///
    /// A terminating incoming edge of `from` is reported first. Each level
    /// is visited in order, reporting every node and then each of its
    /// terminating edges; the children of all edges make up the next
    /// level.
    pub fn traverse_from<V>(&self, from: NodeId, visitor: &mut V)
    where
        V: NodeVisitor<T> + ?Sized,
    {
        let start = self.node_ref(from);
        if let Some(edge) = start.incoming_edge() {
            if edge.is_terminating() {
                visitor.visit_terminating_edge(edge);
            }
        }

        let mut level = vec![from];
        while !level.is_empty() {
            let mut next = Vec::new();
            for id in level {
                let node = self.node_ref(id);
                visitor.visit(node);
                for edge in node.edges() {
                    if edge.is_terminating() {
                        visitor.visit_terminating_edge(edge);
                    }
                    next.push(edge.child().id());
                }
            }
            level = next;
        }
    }
}
