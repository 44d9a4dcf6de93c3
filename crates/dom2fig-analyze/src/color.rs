//! Parsing of computed color and length values.
//!
//! Browsers report computed colors as `rgb(r, g, b)` or `rgba(r, g, b, a)`.
//! Only that form is understood; everything else is either treated as absent
//! or replaced by the fallback color from [`Defaults`].

use dom2fig_core::{Defaults, Rgb};
use regex::Regex;
use std::sync::OnceLock;

/// Classification of a computed color string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssColor {
    /// Empty or missing value.
    Missing,
    /// The `transparent` keyword, or an alpha of zero.
    Transparent,
    /// An `rgb()`/`rgba()` value with integer channels.
    Rgb(Rgb),
    /// Any other syntax (named colors, hex, hsl, gradients, `currentColor`).
    Unrecognized,
}

impl CssColor {
    /// Whether the color paints anything.
    pub fn is_visible(&self) -> bool {
        matches!(self, CssColor::Rgb(_) | CssColor::Unrecognized)
    }
}

fn rgb_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^rgba?\(\s*(\d+)\s*[,\s]\s*(\d+)\s*[,\s]\s*(\d+)\s*(?:[,/]\s*(\d*\.?\d+)(%?)\s*)?\)$",
        )
        .expect("rgb pattern is valid")
    })
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
            .expect("number pattern is valid")
    })
}

/// Classify a computed color string.
pub fn parse_color(value: &str) -> CssColor {
    let value = value.trim();
    if value.is_empty() {
        return CssColor::Missing;
    }
    if value.eq_ignore_ascii_case("transparent") {
        return CssColor::Transparent;
    }

    let Some(caps) = rgb_pattern().captures(value) else {
        return CssColor::Unrecognized;
    };

    if let Some(alpha) = caps.get(4) {
        let alpha: f64 = alpha.as_str().parse().unwrap_or(1.0);
        if alpha == 0.0 {
            return CssColor::Transparent;
        }
    }

    let channel = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(u32::MAX)
    };

    CssColor::Rgb(Rgb::from_channels(channel(1), channel(2), channel(3)))
}

/// Turn a parsed color into the style record's optional color.
pub fn resolve_color(color: &CssColor, defaults: &Defaults) -> Option<Rgb> {
    match color {
        CssColor::Rgb(rgb) => Some(*rgb),
        CssColor::Unrecognized => defaults.fallback_color,
        CssColor::Missing | CssColor::Transparent => None,
    }
}

/// Read the leading number of a computed value, as in `"8px"` or `"1.5em"`.
pub fn parse_css_number(value: &str) -> Option<f64> {
    number_pattern()
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}
