//! Tree analysis for dom2fig.
//!
//! Walks a style-resolved element tree top-down, classifies each element as
//! text, rectangle or container, extracts a normalized [`StyleRecord`] and
//! returns an owned [`LayoutNode`] tree that no longer depends on the host.
//!
//! # Pipeline Overview
//!
//! 1. **Classification**: text leaf, filled leaf, or container
//! 2. **Style Extraction**: sizes, `rgb()`/`rgba()` colors, padding, borders, font size
//! 3. **Recursion**: containers visit every child in document order
//!
//! The host is reached only through the capability traits in [`source`], so a
//! live DOM, a JSON [`ElementSnapshot`] or a test fixture can all be analyzed.
//!
//! # Example
//!
//! ```ignore
//! use dom2fig_analyze::{analyze_snapshot, ElementSnapshot};
//!
//! let snapshot = ElementSnapshot::from_json(&json)?;
//! let tree = analyze_snapshot(&snapshot);
//! ```
//!
//! [`StyleRecord`]: dom2fig_core::StyleRecord
//! [`LayoutNode`]: dom2fig_core::LayoutNode

pub mod analyzer;
pub mod color;
pub mod error;
pub mod extract;
pub mod snapshot;
pub mod source;

pub use analyzer::{analyze, classify, Analyzer};
pub use color::{parse_color, parse_css_number, resolve_color, CssColor};
pub use error::{AnalyzeError, Result};
pub use extract::extract_style;
pub use snapshot::ElementSnapshot;
pub use source::{BoundingBox, ElementSource, GeometrySource, StyleSource, TextSource};

use dom2fig_core::LayoutNode;

/// Analyze a captured element tree with the default defaults table.
pub fn analyze_snapshot(snapshot: &ElementSnapshot) -> LayoutNode {
    analyze(&snapshot)
}
