//! # gstree - Generalized Suffix Trees
//!
//! gstree indexes one or more sequences of arbitrary tokens in a
//! generalized suffix tree, built online in linear time with Ukkonen's
//! algorithm. Every suffix of every indexed sequence ends in its own
//! leaf, because the tree caps each appended sequence with a terminal
//! that no other sequence shares.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Construction engine, read surface, queries and statistics
//! - [`export`] - Graphviz rendering built on the read surface
//! - [`config`] - Persistent CLI configuration
//! - [`output`] - Terminal formatting for CLI results
//! - [`utils`] - Input loading, tokenization and progress bars
//!
//! ## Quick Start
//!
//! ```
//! use gstree::SuffixTree;
//!
//! let mut tree = SuffixTree::new();
//! tree.add("BANANA".chars()).unwrap();
//! tree.add("ANANAS".chars()).unwrap();
//!
//! let pattern: Vec<char> = "NAN".chars().collect();
//! assert_eq!(tree.count_occurrences(&pattern), 2);
//! assert_eq!(tree.stats().leaf_count, 7 + 7);
//! ```
//!
//! ## Reading a tree
//!
//! [`SuffixTree::traverse_all`] walks the tree level by level and hands
//! every node, and every terminating (leaf) edge, to a [`NodeVisitor`].
//! Closures taking a [`TraversalEvent`] are visitors too.

pub mod config;
pub mod export;
pub mod logging;
pub mod output;
pub mod tree;
pub mod utils;

pub use tree::{
    EdgeRef, Item, NodeId, NodeRef, NodeVisitor, SequenceId, SuffixMatch, SuffixTree,
    TraversalEvent, TreeError, TreeStats,
};
