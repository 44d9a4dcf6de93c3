//! Error types for layout trees.

use crate::tree::NodeKind;
use thiserror::Error;

/// Violations of the layout tree invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("{kind} node at {path} has {children} children; only containers may have children")]
    LeafWithChildren {
        /// Child-index path from the root, e.g. `root/0/2`
        path: String,
        kind: NodeKind,
        children: usize,
    },
}
