//! Style record extraction from a resolved element.

use crate::color::{parse_color, parse_css_number, resolve_color};
use crate::source::{properties, GeometrySource, StyleSource, TextSource};
use dom2fig_core::{Defaults, Padding, StyleRecord};

/// Build the style record of a single element.
///
/// Pure computation over the element's resolved style, geometry and text.
/// Missing or malformed values fall back to zero or the matching default.
pub fn extract_style<E>(element: &E, defaults: &Defaults) -> StyleRecord
where
    E: StyleSource + GeometrySource + TextSource + ?Sized,
{
    let bounds = element.bounding_box();
    let color = |property: &str| {
        let value = element.computed_style(property).unwrap_or_default();
        resolve_color(&parse_color(&value), defaults)
    };
    let length = |property: &str| read_length(element, property);

    let font_size = element
        .computed_style(properties::FONT_SIZE)
        .and_then(|v| parse_css_number(&v))
        .filter(|size| *size > 0.0)
        .unwrap_or(defaults.font_size);

    StyleRecord {
        width: round_size(bounds.width),
        height: round_size(bounds.height),
        bg_color: color(properties::BACKGROUND_COLOR),
        text_color: color(properties::COLOR),
        border_color: color(properties::BORDER_COLOR),
        display: keyword(element, properties::DISPLAY),
        flex_direction: keyword(element, properties::FLEX_DIRECTION),
        gap: length(properties::GAP),
        padding: Padding::from_sides(
            length(properties::PADDING_TOP),
            length(properties::PADDING_RIGHT),
            length(properties::PADDING_BOTTOM),
            length(properties::PADDING_LEFT),
        ),
        border_width: length(properties::BORDER_WIDTH),
        border_radius: length(properties::BORDER_RADIUS),
        font_size,
        text: element.text_content().trim().to_string(),
    }
}

/// Non-negative length, zero when absent or unparseable.
fn read_length<E: StyleSource + ?Sized>(element: &E, property: &str) -> f64 {
    element
        .computed_style(property)
        .and_then(|v| parse_css_number(&v))
        .map(|n| n.max(0.0))
        .unwrap_or(0.0)
}

fn keyword<E: StyleSource + ?Sized>(element: &E, property: &str) -> String {
    element
        .computed_style(property)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn round_size(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0).round()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ElementSnapshot;
    use dom2fig_core::Rgb;

    #[test]
    fn test_sizes_are_rounded() {
        let el = ElementSnapshot::new(10.4, 20.5);
        let style = extract_style(&el, &Defaults::default());
        assert_eq!(style.width, 10.0);
        assert_eq!(style.height, 21.0);

        let negative = ElementSnapshot::new(-3.0, f64::NAN);
        let style = extract_style(&negative, &Defaults::default());
        assert_eq!(style.width, 0.0);
        assert_eq!(style.height, 0.0);
    }

    #[test]
    fn test_colors() {
        let el = ElementSnapshot::new(1.0, 1.0)
            .with_style("background-color", "rgb(255, 0, 0)")
            .with_style("color", "rgba(0, 0, 0, 0)")
            .with_style("border-top-color", "hsl(0, 0%, 0%)");
        let style = extract_style(&el, &Defaults::default());

        assert_eq!(style.bg_color, Some(Rgb::new(1.0, 0.0, 0.0)));
        assert_eq!(style.text_color, None);
        assert_eq!(style.border_color, Some(Rgb::MID_GRAY));
    }

    #[test]
    fn test_lengths_and_defaults() {
        let el = ElementSnapshot::new(1.0, 1.0)
            .with_style("gap", "8px")
            .with_style("border-top-width", "1.5px")
            .with_style("border-radius", "normal")
            .with_style("padding-top", "-4px");
        let style = extract_style(&el, &Defaults::default());

        assert_eq!(style.gap, 8.0);
        assert_eq!(style.border_width, 1.5);
        assert_eq!(style.border_radius, 0.0);
        assert_eq!(style.padding, Padding::Uniform(0.0));
        assert_eq!(style.font_size, 14.0);
    }

    #[test]
    fn test_font_size() {
        let el = ElementSnapshot::new(1.0, 1.0).with_style("font-size", "20px");
        assert_eq!(extract_style(&el, &Defaults::default()).font_size, 20.0);

        let zero = ElementSnapshot::new(1.0, 1.0).with_style("font-size", "0px");
        assert_eq!(extract_style(&zero, &Defaults::default()).font_size, 14.0);

        let custom = Defaults {
            font_size: 16.0,
            ..Defaults::default()
        };
        let missing = ElementSnapshot::new(1.0, 1.0);
        assert_eq!(extract_style(&missing, &custom).font_size, 16.0);
    }

    #[test]
    fn test_per_side_padding() {
        let el = ElementSnapshot::new(1.0, 1.0)
            .with_style("padding-top", "4px")
            .with_style("padding-right", "8px")
            .with_style("padding-bottom", "4px")
            .with_style("padding-left", "8px");
        let style = extract_style(&el, &Defaults::default());

        assert_eq!(
            style.padding,
            Padding::Sides {
                top: 4.0,
                right: 8.0,
                bottom: 4.0,
                left: 8.0
            }
        );
    }

    #[test]
    fn test_text_is_trimmed() {
        let el = ElementSnapshot::new(1.0, 1.0).with_text("\n   Hello  \t");
        assert_eq!(extract_style(&el, &Defaults::default()).text, "Hello");
    }

    #[test]
    fn test_layout_keywords() {
        let el = ElementSnapshot::new(1.0, 1.0)
            .with_style("display", "flex")
            .with_style("flex-direction", " row ");
        let style = extract_style(&el, &Defaults::default());
        assert_eq!(style.display, "flex");
        assert_eq!(style.flex_direction, "row");
    }
}
