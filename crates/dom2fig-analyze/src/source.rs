//! Capabilities the analyzer needs from a host element.
//!
//! The analyzer never talks to a browser directly. Anything that can answer
//! these questions (a live DOM node, a JSON capture, a test fixture) can be
//! analyzed.

/// Resolved (post-cascade) style lookup.
pub trait StyleSource {
    /// Computed value of a CSS property, by its kebab-case name
    /// (e.g. `background-color`). `None` when the host has no value.
    fn computed_style(&self, property: &str) -> Option<String>;
}

/// Rendered size of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding-box lookup.
pub trait GeometrySource {
    fn bounding_box(&self) -> BoundingBox;
}

/// Text content lookup.
pub trait TextSource {
    /// Raw text content of the element and its descendants. The analyzer
    /// trims it.
    fn text_content(&self) -> String;
}

/// A node of a host element tree.
pub trait ElementSource: StyleSource + GeometrySource + TextSource + Sized {
    /// Element children in document order.
    fn children(&self) -> Vec<Self>;
}

impl<T: StyleSource + ?Sized> StyleSource for &T {
    fn computed_style(&self, property: &str) -> Option<String> {
        (**self).computed_style(property)
    }
}

impl<T: GeometrySource + ?Sized> GeometrySource for &T {
    fn bounding_box(&self) -> BoundingBox {
        (**self).bounding_box()
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn text_content(&self) -> String {
        (**self).text_content()
    }
}

/// CSS property names read during style extraction.
pub mod properties {
    pub const BACKGROUND_COLOR: &str = "background-color";
    pub const COLOR: &str = "color";
    pub const BORDER_COLOR: &str = "border-top-color";
    pub const DISPLAY: &str = "display";
    pub const FLEX_DIRECTION: &str = "flex-direction";
    pub const GAP: &str = "gap";
    pub const PADDING_TOP: &str = "padding-top";
    pub const PADDING_RIGHT: &str = "padding-right";
    pub const PADDING_BOTTOM: &str = "padding-bottom";
    pub const PADDING_LEFT: &str = "padding-left";
    pub const BORDER_WIDTH: &str = "border-top-width";
    pub const BORDER_RADIUS: &str = "border-radius";
    pub const FONT_SIZE: &str = "font-size";

    /// Every property the analyzer reads.
    pub const ALL: &[&str] = &[
        BACKGROUND_COLOR,
        COLOR,
        BORDER_COLOR,
        DISPLAY,
        FLEX_DIRECTION,
        GAP,
        PADDING_TOP,
        PADDING_RIGHT,
        PADDING_BOTTOM,
        PADDING_LEFT,
        BORDER_WIDTH,
        BORDER_RADIUS,
        FONT_SIZE,
    ];
}
