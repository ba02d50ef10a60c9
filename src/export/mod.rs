//! Consumers of the read surface that render trees for humans.
//!
//! - [`dot`] - Graphviz export with optional suffix-link and parent-link edge sets

pub mod dot;

pub use dot::{to_dot, write_dot, DotOptions};
