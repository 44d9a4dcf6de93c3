//! Printing of statements as plugin source.

use crate::error::Result;
use crate::stmt::{Constructor, Statement, Value};
use dom2fig_core::Rgb;

/// Token the helpers read as "skip this fill or stroke".
pub const NO_COLOR: &str = "null";

/// Print a number in its shortest form (`8`, `1.5`). Negative zero and
/// non-finite values print as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Print a color with two decimals per channel, or the no-color token.
pub fn format_color(color: Option<Rgb>) -> String {
    match color {
        Some(c) => format!("{{r:{:.2}, g:{:.2}, b:{:.2}}}", c.r, c.g, c.b),
        None => NO_COLOR.to_string(),
    }
}

/// Print a string as a quoted, escaped string literal.
pub fn format_string(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn format_paint(color: Option<Rgb>) -> String {
    format!("[{{type: 'SOLID', color: {}}}]", format_color(color))
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) => format_number(*n),
        Value::Keyword(k) => format!("'{}'", k),
        Value::SolidPaint(color) => format_paint(*color),
    }
}

fn format_constructor(ctor: &Constructor) -> Result<String> {
    let args = match ctor {
        Constructor::Text {
            content,
            size,
            color,
        } => format!(
            "{}, {}, {}",
            format_string(content)?,
            format_number(*size),
            format_color(*color)
        ),
        Constructor::Rect {
            width,
            height,
            fill,
            radius,
        } => format!(
            "{}, {}, {}, {}",
            format_number(*width),
            format_number(*height),
            format_color(*fill),
            format_number(*radius)
        ),
        Constructor::Stack {
            spacing, padding, ..
        } => format!("{}, {}", format_number(*spacing), format_number(*padding)),
    };

    Ok(format!("{}({})", ctor.helper(), args))
}

/// Print a single statement without indentation. Separators print as an
/// empty string.
pub fn render_statement(statement: &Statement) -> Result<String> {
    let line = match statement {
        Statement::Declare { ident, ctor } => {
            format!("const {} = {};", ident, format_constructor(ctor)?)
        }
        Statement::Resize {
            target,
            width,
            height,
        } => format!(
            "{}.resize({}, {});",
            target,
            format_number(*width),
            format_number(*height)
        ),
        Statement::Assign {
            target,
            property,
            value,
        } => format!("{}.{} = {};", target, property.name(), format_value(value)),
        Statement::AppendChild { parent, child } => {
            format!("{}.appendChild({});", parent, child)
        }
        Statement::Separator => String::new(),
    };

    Ok(line)
}

/// Print statements one per line, each non-blank line prefixed by `indent`.
pub fn render_body(statements: &[Statement], indent: &str) -> Result<String> {
    let mut out = String::new();

    for statement in statements {
        let line = render_statement(statement)?;
        if !line.is_empty() {
            out.push_str(indent);
            out.push_str(&line);
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::Ident;
    use crate::stmt::{Property, FIXED};
    use dom2fig_core::Axis;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(format_number(1234.0), "1234");
    }

    #[test]
    fn test_format_color() {
        assert_eq!(
            format_color(Some(Rgb::new(1.0, 0.0, 0.0))),
            "{r:1.00, g:0.00, b:0.00}"
        );
        assert_eq!(
            format_color(Some(Rgb::from_channels(51, 102, 153))),
            "{r:0.20, g:0.40, b:0.60}"
        );
        assert_eq!(
            format_color(Some(Rgb::MID_GRAY)),
            "{r:0.50, g:0.50, b:0.50}"
        );
        assert_eq!(format_color(None), "null");
    }

    #[test]
    fn test_format_string_escapes() {
        assert_eq!(format_string("Hello").unwrap(), "\"Hello\"");
        assert_eq!(
            format_string("say \"hi\"\\\nbye").unwrap(),
            r#""say \"hi\"\\\nbye""#
        );
    }

    #[test]
    fn test_render_statements() {
        let root = Ident::root();
        let cases = vec![
            (
                Statement::Declare {
                    ident: root.clone(),
                    ctor: Constructor::Text {
                        content: "Hello".to_string(),
                        size: 14.0,
                        color: Some(Rgb::BLACK),
                    },
                },
                r#"const root = txt("Hello", 14, {r:0.00, g:0.00, b:0.00});"#,
            ),
            (
                Statement::Declare {
                    ident: root.clone(),
                    ctor: Constructor::Rect {
                        width: 10.0,
                        height: 20.0,
                        fill: None,
                        radius: 4.0,
                    },
                },
                "const root = rect(10, 20, null, 4);",
            ),
            (
                Statement::Declare {
                    ident: root.clone(),
                    ctor: Constructor::Stack {
                        axis: Axis::Vertical,
                        spacing: 8.0,
                        padding: 0.0,
                    },
                },
                "const root = vStack(8, 0);",
            ),
            (
                Statement::Resize {
                    target: root.clone(),
                    width: 100.0,
                    height: 50.0,
                },
                "root.resize(100, 50);",
            ),
            (
                Statement::Assign {
                    target: root.clone(),
                    property: Property::PrimaryAxisSizingMode,
                    value: Value::Keyword(FIXED),
                },
                "root.primaryAxisSizingMode = 'FIXED';",
            ),
            (
                Statement::Assign {
                    target: root.clone(),
                    property: Property::Strokes,
                    value: Value::SolidPaint(None),
                },
                "root.strokes = [{type: 'SOLID', color: null}];",
            ),
            (
                Statement::AppendChild {
                    parent: root.clone(),
                    child: root.child(3),
                },
                "root.appendChild(root_child3);",
            ),
        ];

        for (statement, expected) in cases {
            assert_eq!(render_statement(&statement).unwrap(), expected);
        }
    }

    #[test]
    fn test_render_body_indents() {
        let root = Ident::root();
        let body = render_body(
            &[
                Statement::Declare {
                    ident: root.clone(),
                    ctor: Constructor::Stack {
                        axis: Axis::Horizontal,
                        spacing: 0.0,
                        padding: 0.0,
                    },
                },
                Statement::Separator,
                Statement::AppendChild {
                    parent: root.clone(),
                    child: root.child(0),
                },
            ],
            "  ",
        )
        .unwrap();

        assert_eq!(
            body,
            "  const root = hStack(0, 0);\n\n  root.appendChild(root_child0);\n"
        );
    }
}
