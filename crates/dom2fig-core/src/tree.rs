//! Layout tree data structures.
//!
//! The layout tree is the only interface between the analyzer and the code
//! generator. It is built once per analysis, owns its children outright and
//! is never mutated afterwards.

use crate::errors::TreeError;
use crate::style::StyleRecord;
use std::fmt;

/// Shape kind assigned to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Text,
    Rectangle,
    Container,
}

impl NodeKind {
    /// Text and rectangles are leaves and never have children.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, NodeKind::Container)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::Rectangle => write!(f, "Rectangle"),
            Self::Container => write!(f, "Container"),
        }
    }
}

/// A classified node in the layout tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutNode {
    pub kind: NodeKind,
    pub style: StyleRecord,
    /// Children in document order. Empty unless `kind` is `Container`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// Create a text leaf.
    pub fn text(style: StyleRecord) -> Self {
        Self {
            kind: NodeKind::Text,
            style,
            children: Vec::new(),
        }
    }

    /// Create a rectangle leaf.
    pub fn rectangle(style: StyleRecord) -> Self {
        Self {
            kind: NodeKind::Rectangle,
            style,
            children: Vec::new(),
        }
    }

    /// Create a container with the given children.
    pub fn container(style: StyleRecord, children: Vec<LayoutNode>) -> Self {
        Self {
            kind: NodeKind::Container,
            style,
            children,
        }
    }

    /// Check that no leaf carries children.
    pub fn validate(&self) -> Result<(), TreeError> {
        self.validate_at(&mut Vec::new())
    }

    fn validate_at(&self, path: &mut Vec<usize>) -> Result<(), TreeError> {
        if self.kind.is_leaf() && !self.children.is_empty() {
            return Err(TreeError::LeafWithChildren {
                path: format_path(path),
                kind: self.kind,
                children: self.children.len(),
            });
        }

        for (i, child) in self.children.iter().enumerate() {
            path.push(i);
            child.validate_at(path)?;
            path.pop();
        }

        Ok(())
    }

    /// Total number of nodes, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::node_count).sum::<usize>()
    }

    /// Number of levels, counting this node as 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::depth).max().unwrap_or(0)
    }
}

/// Render child indices as `root/1/0`.
fn format_path(path: &[usize]) -> String {
    path.iter().fold(String::from("root"), |mut out, i| {
        out.push('/');
        out.push_str(&i.to_string());
        out
    })
}
