//! Generator configuration.

use dom2fig_core::Defaults;
use serde::{Deserialize, Serialize};

/// Options controlling the generated program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodegenOptions {
    /// Font family loaded before any text node is created.
    pub font_family: String,
    /// Font style loaded alongside the family.
    pub font_style: String,
    /// Indentation of statements inside the generated entry point.
    pub indent: String,
    /// Message shown by the host once the tree is built.
    pub completion_message: String,
    /// Emit `padding*` assignments for containers with unequal sides.
    /// Off by default; stacks then get zero padding.
    pub per_side_padding: bool,
    /// Defaults baked into the helper signatures.
    pub defaults: Defaults,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            font_style: "Regular".to_string(),
            indent: "  ".to_string(),
            completion_message: "✅ Layout generated!".to_string(),
            per_side_padding: false,
            defaults: Defaults::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json() {
        let options: CodegenOptions =
            serde_json::from_str(r#"{"fontFamily": "Roboto", "perSidePadding": true}"#).unwrap();

        assert_eq!(options.font_family, "Roboto");
        assert_eq!(options.font_style, "Regular");
        assert!(options.per_side_padding);
        assert_eq!(options.completion_message, "✅ Layout generated!");
        assert_eq!(options.defaults, Defaults::default());
    }

    #[test]
    fn test_nested_defaults() {
        let options: CodegenOptions =
            serde_json::from_str(r#"{"defaults": {"cornerRadius": 4}}"#).unwrap();

        assert_eq!(options.defaults.corner_radius, 4.0);
        assert_eq!(options.defaults.font_size, 14.0);
    }
}
