//! Brute-force helpers shared by the integration tests.

#![allow(dead_code)]

use gstree::{Item, NodeRef, SequenceId, SuffixTree};

/// Concatenated labels from the root down to `node`
pub fn path_label(node: NodeRef<'_, char>) -> Vec<Item<char>> {
    let mut parts = Vec::new();
    let mut cur = node;
    while let Some(edge) = cur.incoming_edge() {
        parts.push(edge.items().to_vec());
        cur = edge.parent();
    }
    parts.into_iter().rev().flatten().collect()
}

/// Labels of every root-to-leaf path, sorted
pub fn leaf_paths(tree: &SuffixTree<char>) -> Vec<Vec<Item<char>>> {
    let mut paths = Vec::new();
    let mut stack = vec![tree.root_ref()];
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            paths.push(path_label(node));
        }
        stack.extend(node.edges().map(|e| e.child()));
    }
    paths.sort();
    paths
}

/// Every suffix of every terminal-extended input, sorted
pub fn expected_suffixes(inputs: &[&str]) -> Vec<Vec<Item<char>>> {
    let mut suffixes = Vec::new();
    for (id, input) in inputs.iter().enumerate() {
        let mut items: Vec<Item<char>> = input.chars().map(Item::Token).collect();
        items.push(Item::Terminal(SequenceId(id as u32)));
        for start in 0..items.len() {
            suffixes.push(items[start..].to_vec());
        }
    }
    suffixes.sort();
    suffixes
}

/// `(sequence, offset)` of every occurrence found by scanning
pub fn naive_occurrences(inputs: &[&str], pattern: &str) -> Vec<(SequenceId, usize)> {
    let pattern: Vec<char> = pattern.chars().collect();
    let mut found = Vec::new();
    for (id, input) in inputs.iter().enumerate() {
        let text: Vec<char> = input.chars().collect();
        for offset in 0..text.len() {
            if text[offset..].starts_with(&pattern) {
                found.push((SequenceId(id as u32), offset));
            }
        }
    }
    found
}

pub fn build(inputs: &[&str]) -> SuffixTree<char> {
    let mut tree = SuffixTree::new();
    for input in inputs {
        tree.add(input.chars()).expect("construction failed");
    }
    tree
}

/// Deterministic strings over a small alphabet (xorshift)
pub fn pseudo_random_strings(seed: u64, count: usize, max_len: usize, alphabet: &[char]) -> Vec<String> {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|_| {
            let len = (next() as usize) % (max_len + 1);
            (0..len)
                .map(|_| alphabet[(next() as usize) % alphabet.len()])
                .collect()
        })
        .collect()
}
