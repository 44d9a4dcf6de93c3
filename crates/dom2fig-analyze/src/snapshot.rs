//! Serializable captures of an element subtree.
//!
//! A snapshot holds the values the analyzer reads, copied out of a host tree.
//! It can be captured in a browser, shipped as JSON and analyzed elsewhere,
//! and doubles as the fixture type for tests.
//!
//! ```json
//! {
//!   "width": 120, "height": 40,
//!   "style": { "background-color": "rgb(255, 0, 0)", "flex-direction": "row" },
//!   "text": "Hello",
//!   "children": []
//! }
//! ```

use crate::error::Result;
use crate::source::{BoundingBox, ElementSource, GeometrySource, StyleSource, TextSource};
use convert_case::{Case, Casing};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A captured element with its computed styles and children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSnapshot {
    pub width: f64,
    pub height: f64,
    /// Computed styles keyed by property name. Kebab-case keys
    /// (`background-color`) and camelCase keys (`backgroundColor`) are both
    /// accepted.
    pub style: IndexMap<String, String>,
    /// The element's full text content, as the host reports it.
    pub text: String,
    pub children: Vec<ElementSnapshot>,
}

impl ElementSnapshot {
    /// Create an empty snapshot of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Decode a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode this snapshot as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Set a computed style value.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add a child element.
    pub fn with_child(mut self, child: ElementSnapshot) -> Self {
        self.children.push(child);
        self
    }
}

impl StyleSource for ElementSnapshot {
    fn computed_style(&self, property: &str) -> Option<String> {
        self.style
            .get(property)
            .or_else(|| self.style.get(&property.to_case(Case::Camel)))
            .cloned()
    }
}

impl GeometrySource for ElementSnapshot {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.width, self.height)
    }
}

impl TextSource for ElementSnapshot {
    fn text_content(&self) -> String {
        self.text.clone()
    }
}

impl<'a> ElementSource for &'a ElementSnapshot {
    fn children(&self) -> Vec<Self> {
        self.children.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_lookup() {
        let el = ElementSnapshot::new(1.0, 1.0)
            .with_style("background-color", "rgb(1, 2, 3)")
            .with_style("flexDirection", "row");

        assert_eq!(
            el.computed_style("background-color").as_deref(),
            Some("rgb(1, 2, 3)")
        );
        assert_eq!(el.computed_style("flex-direction").as_deref(), Some("row"));
        assert_eq!(el.computed_style("gap"), None);
    }

    #[test]
    fn test_from_json_defaults() {
        let el = ElementSnapshot::from_json(r#"{"width": 10, "children": [{"text": "Hi"}]}"#)
            .unwrap();

        assert_eq!(el.width, 10.0);
        assert_eq!(el.height, 0.0);
        assert!(el.style.is_empty());
        assert_eq!(el.children.len(), 1);
        assert_eq!(el.children[0].text, "Hi");
        assert_eq!((&el).children().len(), 1);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = ElementSnapshot::from_json(r#"{"width": "wide"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid element snapshot"));
    }

    #[test]
    fn test_json_keeps_style_order() {
        let el = ElementSnapshot::new(2.0, 3.0)
            .with_style("gap", "4px")
            .with_style("color", "rgb(0, 0, 0)");
        let json = el.to_json().unwrap();

        assert!(json.find("gap").unwrap() < json.find("color").unwrap());
        assert_eq!(ElementSnapshot::from_json(&json).unwrap(), el);
    }
}
