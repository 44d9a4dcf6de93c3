//! Variable names of generated nodes.

use std::fmt;

/// Name of the variable holding a generated node.
///
/// Derived from the node's path: the root is `root` and the i-th child of
/// `v` is `v_child{i}`, so names are unique without any counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(String);

impl Ident {
    pub fn root() -> Self {
        Self("root".to_string())
    }

    /// Identifier of the child at `index`.
    pub fn child(&self, index: usize) -> Self {
        Self(format!("{}_child{}", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
