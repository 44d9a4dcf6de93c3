//! Core types for dom2fig.
//!
//! This crate provides the host-independent data shared by the analyzer and
//! the code generator:
//! - Style values (colors, padding, stacking axis) and the per-node style record
//! - The layout tree and its leaf/container invariant
//! - The defaults table consulted by both stages
//! - Error types

pub mod defaults;
pub mod errors;
pub mod style;
pub mod tree;

pub use defaults::*;
pub use errors::*;
pub use style::*;
pub use tree::*;
