//! Structural statistics and invariant checks

use super::error::{Result, TreeError};
use super::suffix_tree::SuffixTree;
use super::types::{NodeId, TreeStats};

impl<T: PartialEq> SuffixTree<T> {
    /// Collect node, edge and link counts
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            sequence_count: self.sequence.sequence_count(),
            item_count: self.sequence.len(),
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            ..Default::default()
        };

        for (idx, node) in self.nodes.iter().enumerate() {
            if node.suffix_link.is_some() {
                stats.suffix_link_count += 1;
            }
            if node.is_leaf() {
                stats.leaf_count += 1;
            } else if idx != NodeId::ROOT.index() {
                stats.internal_node_count += 1;
            }
        }

        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            stats.max_depth = stats.max_depth.max(depth);
            for edge in self.nodes[id.index()].edges.values() {
                stack.push((self.edges[edge.index()].child, depth + 1));
            }
        }

        stats
    }

    /// Check the structural invariants of the tree
    ///
    /// - every non-root node has exactly one incoming edge, and that edge
    ///   points back at it
    /// - every edge is keyed in its parent by its first label item
    /// - internal nodes branch at least twice and carry a suffix link
    pub fn verify(&self) -> Result<()> {
        for (idx, node) in self.nodes.iter().enumerate() {
            let id = NodeId(idx as u32);

            match node.incoming_edge {
                None if id != NodeId::ROOT => {
                    return Err(TreeError::InvalidState("non-root node without incoming edge"));
                }
                Some(_) if id == NodeId::ROOT => {
                    return Err(TreeError::InvalidState("root has an incoming edge"));
                }
                Some(edge) if self.edges[edge.index()].child != id => {
                    return Err(TreeError::BrokenBackReference { edge, node: id });
                }
                _ => {}
            }

            for (key, &edge) in &node.edges {
                let data = &self.edges[edge.index()];
                if data.parent != id {
                    return Err(TreeError::BrokenBackReference { edge, node: id });
                }
                if self.sequence.get(data.start) != Some(key) {
                    return Err(TreeError::InvalidState("edge keyed by a foreign first item"));
                }
                if self.edge_end(data) <= data.start {
                    return Err(TreeError::InvalidState("edge with an empty label"));
                }
            }

            if id != NodeId::ROOT && !node.is_leaf() {
                if node.edge_count() < 2 {
                    return Err(TreeError::BranchingViolation {
                        node: id,
                        edges: node.edge_count(),
                    });
                }
                if node.suffix_link.is_none() {
                    return Err(TreeError::MissingSuffixLink { node: id });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_banana() {
        let tree = SuffixTree::with_sequence("BANANA".chars()).unwrap();
        let stats = tree.stats();

        assert_eq!(stats.sequence_count, 1);
        assert_eq!(stats.item_count, 7);
        assert_eq!(stats.leaf_count, 7);
        // A, ANA, NA
        assert_eq!(stats.internal_node_count, 3);
        assert_eq!(stats.node_count, 1 + 3 + 7);
        assert_eq!(stats.edge_count, stats.node_count - 1);
        assert_eq!(stats.suffix_link_count, 3);
        // root -> A -> NA -> NA$
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_stats_empty() {
        let tree: SuffixTree<char> = SuffixTree::new();
        let stats = tree.stats();

        assert_eq!(stats.node_count, 1);
        assert_eq!(stats.leaf_count, 1);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn test_verify_accepts_built_trees() {
        let mut tree = SuffixTree::new();
        tree.add("mississippi".chars()).unwrap();
        tree.add("missouri".chars()).unwrap();
        assert_eq!(tree.verify(), Ok(()));
    }

    #[test]
    fn test_verify_reports_missing_link() {
        let mut tree = SuffixTree::with_sequence("aab".chars()).unwrap();
        let internal = tree
            .nodes
            .iter()
            .position(|n| !n.is_leaf() && n.incoming_edge.is_some())
            .unwrap();
        tree.nodes[internal].suffix_link = None;

        assert_eq!(
            tree.verify(),
            Err(TreeError::MissingSuffixLink { node: NodeId(internal as u32) })
        );
    }

    #[test]
    fn test_verify_reports_unbranched_node() {
        let mut tree = SuffixTree::with_sequence("abc".chars()).unwrap();
        let edge = tree.node(NodeId::ROOT).edge(&crate::Item::Token('a')).unwrap();
        let internal = tree.split_edge(edge, 1).unwrap();

        assert_eq!(
            tree.verify(),
            Err(TreeError::BranchingViolation { node: internal, edges: 1 })
        );
    }
}
