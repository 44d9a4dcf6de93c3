//! Classification and recursive tree building.

use crate::color::parse_color;
use crate::extract::extract_style;
use crate::source::{properties, ElementSource};
use dom2fig_core::{Defaults, LayoutNode, NodeKind};
use tracing::{debug, trace};

/// Builds layout trees from host elements.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    defaults: Defaults,
}

impl Analyzer {
    /// Create an analyzer with the given defaults table.
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }

    /// The defaults this analyzer falls back to.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Analyze an element and its descendants.
    ///
    /// Never fails: every missing or malformed value degrades to a default.
    pub fn analyze<E: ElementSource>(&self, element: &E) -> LayoutNode {
        let tree = self.analyze_node(element, 0);
        debug!(
            nodes = tree.node_count(),
            depth = tree.depth(),
            "analyzed element tree"
        );
        tree
    }

    fn analyze_node<E: ElementSource>(&self, element: &E, depth: usize) -> LayoutNode {
        let children = element.children();
        let kind = classify_with(element, &children);
        let style = extract_style(element, &self.defaults);
        trace!(depth, %kind, children = children.len(), "classified element");

        match kind {
            NodeKind::Text => LayoutNode::text(style),
            NodeKind::Rectangle => LayoutNode::rectangle(style),
            NodeKind::Container => {
                let children = children
                    .iter()
                    .map(|child| self.analyze_node(child, depth + 1))
                    .collect();
                LayoutNode::container(style, children)
            }
        }
    }
}

/// Analyze an element with the default defaults table.
pub fn analyze<E: ElementSource>(element: &E) -> LayoutNode {
    Analyzer::default().analyze(element)
}

/// Pick the shape kind of an element. First match wins:
///
/// 1. no children and non-blank text: `Text`
/// 2. no children and a visible background: `Rectangle`
/// 3. anything else: `Container`
///
/// A childless element with both text and a background is `Text`; the
/// background is not rendered.
pub fn classify<E: ElementSource>(element: &E) -> NodeKind {
    classify_with(element, &element.children())
}

fn classify_with<E: ElementSource>(element: &E, children: &[E]) -> NodeKind {
    if !children.is_empty() {
        return NodeKind::Container;
    }

    if !element.text_content().trim().is_empty() {
        return NodeKind::Text;
    }

    let background = element
        .computed_style(properties::BACKGROUND_COLOR)
        .unwrap_or_default();
    if parse_color(&background).is_visible() {
        NodeKind::Rectangle
    } else {
        NodeKind::Container
    }
}
