//! Substring queries over a built tree
//!
//! A pattern is matched by walking down from the root; the leaves below
//! the locus where the pattern ends are exactly its occurrences.

use super::sequence::Item;
use super::suffix_tree::SuffixTree;
use super::types::{NodeId, SuffixMatch};
use std::hash::Hash;

impl<T: Clone + Eq + Hash> SuffixTree<T> {
    /// Check whether `pattern` occurs in any indexed sub-sequence
    pub fn contains(&self, pattern: &[T]) -> bool {
        self.locate(pattern).is_some()
    }

    /// Number of positions where `pattern` starts
    pub fn count_occurrences(&self, pattern: &[T]) -> usize {
        self.occurrences(pattern).len()
    }

    /// Every position where `pattern` starts, sorted by sub-sequence and
    /// offset
    ///
    /// The empty pattern matches at every token position.
    pub fn occurrences(&self, pattern: &[T]) -> Vec<SuffixMatch> {
        let Some(locus) = self.locate(pattern) else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        let mut stack = vec![locus];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.index()];
            if let Some(pos) = node.suffix_start {
                // the terminal-only suffix spells no token
                if self.sequence[pos].is_terminal() {
                    continue;
                }
                if let Some((sequence, offset)) = self.sequence.position_to_sequence(pos) {
                    matches.push(SuffixMatch {
                        sequence,
                        offset,
                        global_position: pos,
                    });
                }
            }
            stack.extend(node.edges.values().map(|e| self.edges[e.index()].child));
        }

        matches.sort_unstable();
        matches
    }

    /// Node whose subtree holds every suffix starting with `pattern`
    ///
    /// When the pattern ends partway along an edge, that edge's child is
    /// returned.
    fn locate(&self, pattern: &[T]) -> Option<NodeId> {
        let mut node = NodeId::ROOT;
        let mut matched = 0;

        while matched < pattern.len() {
            let key = Item::Token(pattern[matched].clone());
            let edge_id = self.nodes[node.index()].edge(&key)?;
            let edge = self.edge_ref(edge_id);

            for item in edge.items() {
                if matched == pattern.len() {
                    break;
                }
                match item {
                    Item::Token(token) if *token == pattern[matched] => matched += 1,
                    _ => return None,
                }
            }
            node = edge.child().id();
        }

        Some(node)
    }
}
