//! Utility functions for the command-line front end.
//!
//! ## Modules
//!
//! - [`input`] - Loading literal or file inputs (memory-mapped)
//! - [`progress`] - Progress bars for multi-input builds
//! - [`tokenizer`] - Splitting text into tree tokens
//!
//! ## Key Functions
//!
//! ```
//! use gstree::utils::{tokenize, TokenMode};
//!
//! let tokens = tokenize("to be or not to be", TokenMode::Words, false);
//! assert_eq!(tokens.len(), 6);
//! ```

pub mod input;
pub mod progress;
pub mod tokenizer;

pub use input::*;
pub use tokenizer::*;
