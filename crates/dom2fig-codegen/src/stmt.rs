//! Structured statements of the generated program.
//!
//! Lowering produces these values; [`crate::render`] prints them. Keeping the
//! two apart lets the program's behavior be checked as data.

use crate::ident::Ident;
use dom2fig_core::{Axis, Rgb};

/// One statement of the generated program body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `const <ident> = <ctor>;`
    Declare { ident: Ident, ctor: Constructor },
    /// `<target>.resize(<width>, <height>);`
    Resize {
        target: Ident,
        width: f64,
        height: f64,
    },
    /// `<target>.<property> = <value>;`
    Assign {
        target: Ident,
        property: Property,
        value: Value,
    },
    /// `<parent>.appendChild(<child>);`
    AppendChild { parent: Ident, child: Ident },
    /// Blank line between sibling subtrees.
    Separator,
}

impl Statement {
    /// The identifier this statement defines, if any.
    pub fn declared(&self) -> Option<&Ident> {
        match self {
            Statement::Declare { ident, .. } => Some(ident),
            _ => None,
        }
    }
}

/// Call to one of the preamble's helper constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum Constructor {
    /// `txt(content, size, color)`
    Text {
        content: String,
        size: f64,
        color: Option<Rgb>,
    },
    /// `rect(width, height, color, radius)`
    Rect {
        width: f64,
        height: f64,
        fill: Option<Rgb>,
        radius: f64,
    },
    /// `hStack(spacing, padding)` or `vStack(spacing, padding)`
    Stack {
        axis: Axis,
        spacing: f64,
        padding: f64,
    },
}

impl Constructor {
    /// Name of the helper function this constructor calls.
    pub fn helper(&self) -> &'static str {
        match self {
            Constructor::Text { .. } => "txt",
            Constructor::Rect { .. } => "rect",
            Constructor::Stack {
                axis: Axis::Horizontal,
                ..
            } => "hStack",
            Constructor::Stack {
                axis: Axis::Vertical,
                ..
            } => "vStack",
        }
    }
}

/// Node properties the generated program assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    PrimaryAxisSizingMode,
    CounterAxisSizingMode,
    Fills,
    Strokes,
    StrokeWeight,
    CornerRadius,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
}

impl Property {
    /// Property name in the host API.
    pub fn name(&self) -> &'static str {
        match self {
            Property::PrimaryAxisSizingMode => "primaryAxisSizingMode",
            Property::CounterAxisSizingMode => "counterAxisSizingMode",
            Property::Fills => "fills",
            Property::Strokes => "strokes",
            Property::StrokeWeight => "strokeWeight",
            Property::CornerRadius => "cornerRadius",
            Property::PaddingTop => "paddingTop",
            Property::PaddingRight => "paddingRight",
            Property::PaddingBottom => "paddingBottom",
            Property::PaddingLeft => "paddingLeft",
        }
    }
}

/// Right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    /// Enum keyword of the host API, printed as a quoted string.
    Keyword(&'static str),
    /// Single solid paint; `None` prints the no-color token.
    SolidPaint(Option<Rgb>),
}

/// Sizing mode keyword that pins a frame to its explicit size.
pub const FIXED: &str = "FIXED";
