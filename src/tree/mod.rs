//! Generalized suffix tree construction
//!
//! This module builds suffix trees online with Ukkonen's algorithm. Any
//! number of sub-sequences can be appended; each one is capped with a
//! terminal minted by the tree so that the suffixes of different
//! sub-sequences always end in distinct leaves.
//!
//! ## Architecture
//!
//! - `sequence`: Concatenated token storage and terminals
//! - `node`, `edge`: Arena records and the extension rules applied at each
//! - `active_point`: Insertion locus, suffix window and skip/count walk-down
//! - `suffix_tree`: Phase driver and suffix-link chaining
//! - `traversal`: Read surface and level-order walk for consumers
//! - `query`: Substring and occurrence queries
//! - `stats`: Structural statistics and invariant checks

mod active_point;
pub mod edge;
pub mod error;
pub mod node;
mod query;
pub mod sequence;
mod stats;
pub mod suffix_tree;
pub mod traversal;
pub mod types;

// Re-exports for convenience
pub use edge::Edge;
pub use error::TreeError;
pub use node::Node;
pub use sequence::{Item, Sequence, SequenceBoundary};
pub use suffix_tree::SuffixTree;
pub use traversal::{EdgeRef, NodeRef, NodeVisitor, TraversalEvent};
pub use types::{EdgeEnd, EdgeId, NodeId, Position, SequenceId, SuffixMatch, TreeStats};
