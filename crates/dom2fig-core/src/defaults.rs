//! Fallback values shared by the analyzer and the code generator.

use crate::style::Rgb;

/// Every default the pipeline falls back to, stated once.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Defaults {
    /// Font size used when the element reports none (or zero).
    pub font_size: f64,
    /// Color substituted for a present but unrecognized color value.
    /// `None` treats such values as absent instead.
    pub fallback_color: Option<Rgb>,
    /// Default corner radius of the `rect` helper.
    pub corner_radius: f64,
    /// Default item spacing of the stack helpers.
    pub spacing: f64,
    /// Default padding of the stack helpers.
    pub padding: f64,
}

impl Defaults {
    pub const FONT_SIZE: f64 = 14.0;
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            font_size: Self::FONT_SIZE,
            fallback_color: Some(Rgb::MID_GRAY),
            corner_radius: 0.0,
            spacing: 0.0,
            padding: 0.0,
        }
    }
}
