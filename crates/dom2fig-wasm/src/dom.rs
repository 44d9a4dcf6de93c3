//! Live DOM elements as analyzer input.

use dom2fig_analyze::source::properties;
use dom2fig_analyze::{
    BoundingBox, ElementSnapshot, ElementSource, GeometrySource, StyleSource, TextSource,
};
use web_sys::{CssStyleDeclaration, Element};

/// A DOM element with its computed style declaration resolved once.
pub struct DomElement {
    element: Element,
    style: Option<CssStyleDeclaration>,
}

impl DomElement {
    pub fn new(element: Element) -> Self {
        let style = web_sys::window()
            .and_then(|window| window.get_computed_style(&element).ok().flatten());
        Self { element, style }
    }

    /// Copy the values the analyzer reads into a detached snapshot.
    pub fn capture(&self) -> ElementSnapshot {
        let bounds = self.bounding_box();
        let mut snapshot = ElementSnapshot::new(bounds.width, bounds.height)
            .with_text(self.text_content());

        for property in properties::ALL {
            if let Some(value) = self.computed_style(property) {
                snapshot = snapshot.with_style(*property, value);
            }
        }

        snapshot.children = self.children().iter().map(DomElement::capture).collect();
        snapshot
    }
}

impl StyleSource for DomElement {
    fn computed_style(&self, property: &str) -> Option<String> {
        self.style
            .as_ref()
            .and_then(|style| style.get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }
}

impl GeometrySource for DomElement {
    fn bounding_box(&self) -> BoundingBox {
        let rect = self.element.get_bounding_client_rect();
        BoundingBox::new(rect.width(), rect.height())
    }
}

impl TextSource for DomElement {
    fn text_content(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }
}

impl ElementSource for DomElement {
    fn children(&self) -> Vec<Self> {
        let collection = self.element.children();
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(DomElement::new)
            .collect()
    }
}
