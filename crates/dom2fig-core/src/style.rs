//! Style values extracted from a resolved element.

/// An opaque RGB color with channels normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from integer channels. Values above 255 are clamped.
    pub fn from_channels(r: u32, g: u32, b: u32) -> Self {
        let norm = |c: u32| f64::from(c.min(255)) / 255.0;
        Self {
            r: norm(r),
            g: norm(g),
            b: norm(b),
        }
    }

    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const MID_GRAY: Self = Self::new(0.5, 0.5, 0.5);
}

/// Box padding, collapsed to a single value when all sides agree.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Padding {
    Uniform(f64),
    Sides {
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
    },
}

impl Padding {
    /// Build padding from the four sides, collapsing to `Uniform` when they
    /// are numerically equal.
    pub fn from_sides(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        if top == right && right == bottom && bottom == left {
            Padding::Uniform(top)
        } else {
            Padding::Sides {
                top,
                right,
                bottom,
                left,
            }
        }
    }

    /// The uniform value, if this padding is uniform.
    pub fn as_uniform(&self) -> Option<f64> {
        match self {
            Padding::Uniform(value) => Some(*value),
            Padding::Sides { .. } => None,
        }
    }

    /// The uniform value, or zero for per-side padding.
    pub fn uniform_or_zero(&self) -> f64 {
        self.as_uniform().unwrap_or(0.0)
    }

    /// Sides in `(top, right, bottom, left)` order.
    pub fn sides(&self) -> (f64, f64, f64, f64) {
        match *self {
            Padding::Uniform(v) => (v, v, v, v),
            Padding::Sides {
                top,
                right,
                bottom,
                left,
            } => (top, right, bottom, left),
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Uniform(0.0)
    }
}

/// Stacking axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Normalized style of a single element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StyleRecord {
    /// Rounded bounding-box width
    pub width: f64,
    /// Rounded bounding-box height
    pub height: f64,
    pub bg_color: Option<Rgb>,
    pub text_color: Option<Rgb>,
    pub border_color: Option<Rgb>,
    /// Computed `display` keyword
    pub display: String,
    /// Computed `flex-direction` keyword
    pub flex_direction: String,
    pub gap: f64,
    pub padding: Padding,
    /// Zero means no stroke
    pub border_width: f64,
    /// Zero means square corners
    pub border_radius: f64,
    pub font_size: f64,
    /// Trimmed text content
    pub text: String,
}

impl StyleRecord {
    /// Stacking axis for container children.
    ///
    /// Only `flex-direction: row` stacks horizontally; every other value,
    /// including `row-reverse` and an empty keyword, stacks vertically.
    pub fn axis(&self) -> Axis {
        if self.flex_direction == "row" {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Whether both dimensions are non-zero.
    pub fn has_size(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl Default for StyleRecord {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            bg_color: None,
            text_color: None,
            border_color: None,
            display: String::new(),
            flex_direction: String::new(),
            gap: 0.0,
            padding: Padding::default(),
            border_width: 0.0,
            border_radius: 0.0,
            font_size: crate::Defaults::FONT_SIZE,
            text: String::new(),
        }
    }
}
