//! Code generation from dom2fig layout trees to Figma plugin source.
//!
//! The generator lowers a [`LayoutNode`] tree into a flat list of
//! [`Statement`]s (create a shape, set a property, append a child) and prints
//! them between a fixed preamble and epilogue. The result is a self-contained
//! plugin script that rebuilds the tree on the current page.
//!
//! # Example
//!
//! ```ignore
//! use dom2fig_codegen::{Generator, CodegenOptions};
//!
//! let generator = Generator::new(CodegenOptions::default())?;
//! let code = generator.generate(&tree)?;
//! println!("{}", code);
//! ```

pub mod error;
pub mod ident;
pub mod lower;
pub mod options;
pub mod render;
pub mod stmt;
pub mod templates;

pub use error::{CodegenError, Result};
pub use ident::Ident;
pub use lower::lower;
pub use options::CodegenOptions;
pub use render::{format_color, format_number, render_body, render_statement};
pub use stmt::{Constructor, Property, Statement, Value};
pub use templates::{TemplateEngine, HELPER_CONTRACT_VERSION};

use dom2fig_core::LayoutNode;
use tracing::debug;

/// Figma plugin code generator.
pub struct Generator<'a> {
    engine: TemplateEngine<'a>,
    options: CodegenOptions,
}

impl<'a> Generator<'a> {
    /// Create a generator with the given options.
    pub fn new(options: CodegenOptions) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            options,
        })
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Lower a tree into program statements without printing them.
    pub fn statements(&self, tree: &LayoutNode) -> Result<Vec<Statement>> {
        lower(tree, &self.options)
    }

    /// Generate the complete plugin program for a tree.
    ///
    /// Deterministic: the same tree and options always give the same text.
    pub fn generate(&self, tree: &LayoutNode) -> Result<String> {
        let statements = self.statements(tree)?;
        debug!(
            statements = statements.len(),
            nodes = tree.node_count(),
            "lowered layout tree"
        );

        let mut code = self.engine.preamble(&self.options)?;
        code.push_str(&render_body(&statements, &self.options.indent)?);
        code.push_str(&self.engine.epilogue(&self.options)?);
        Ok(code)
    }
}

/// Generate a plugin program with default options.
pub fn generate(tree: &LayoutNode) -> Result<String> {
    Generator::new(CodegenOptions::default())?.generate(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom2fig_core::{Rgb, StyleRecord};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn leaf(n: u8) -> LayoutNode {
        let style = StyleRecord {
            width: f64::from(n),
            height: 10.0,
            bg_color: Some(Rgb::from_channels(n.into(), 0, 0)),
            text: format!("t{}", n),
            ..Default::default()
        };
        if n % 2 == 0 {
            LayoutNode::rectangle(style)
        } else {
            LayoutNode::text(style)
        }
    }

    fn arb_tree() -> impl Strategy<Value = LayoutNode> {
        let leaf_strategy = any::<u8>().prop_map(leaf);
        leaf_strategy.prop_recursive(4, 40, 6, |inner| {
            (prop::collection::vec(inner, 0..6), any::<bool>()).prop_map(|(children, row)| {
                let style = StyleRecord {
                    flex_direction: if row { "row" } else { "column" }.to_string(),
                    ..Default::default()
                };
                LayoutNode::container(style, children)
            })
        })
    }

    #[test]
    fn test_generate_wraps_body() {
        let code = generate(&leaf(2)).unwrap();

        assert!(code.starts_with("// Auto-generated Figma plugin code\n"));
        assert!(code.contains("  const root = rect(2, 10, {r:0.01, g:0.00, b:0.00}, 0);\n"));
        assert!(code.ends_with("figma.closePlugin();\n}\n\ngenerate();\n"));
    }

    #[test]
    fn test_generate_rejects_invalid_tree() {
        let mut bad = leaf(1);
        bad.children.push(leaf(2));

        let err = generate(&bad).unwrap_err();
        assert!(err.to_string().starts_with("Invalid layout tree:"));
    }

    proptest! {
        #[test]
        fn identifiers_are_unique(tree in arb_tree()) {
            let generator = Generator::new(CodegenOptions::default()).unwrap();
            let statements = generator.statements(&tree).unwrap();

            let declared: Vec<_> = statements.iter().filter_map(Statement::declared).collect();
            let unique: HashSet<_> = declared.iter().collect();
            prop_assert_eq!(declared.len(), tree.node_count());
            prop_assert_eq!(unique.len(), declared.len());
        }

        #[test]
        fn generation_is_deterministic(tree in arb_tree()) {
            let first = generate(&tree).unwrap();
            let second = generate(&tree.clone()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
