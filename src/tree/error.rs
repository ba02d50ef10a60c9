use super::types::{EdgeId, NodeId};

/// Invariant violations detected by the construction engine or by
/// [`SuffixTree::verify`](super::SuffixTree::verify)
///
/// None of these are recoverable: they indicate a defect in the engine,
/// not bad input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("node {node:?} already has an outgoing edge for this first token")]
    DuplicateEdgeKey { node: NodeId },
    #[error("internal node {node:?} has no suffix link")]
    MissingSuffixLink { node: NodeId },
    #[error("internal node {node:?} has {edges} outgoing edge(s), expected at least 2")]
    BranchingViolation { node: NodeId, edges: usize },
    #[error("edge {edge:?} and node {node:?} disagree about their link")]
    BrokenBackReference { edge: EdgeId, node: NodeId },
}

pub type Result<T> = std::result::Result<T, TreeError>;
