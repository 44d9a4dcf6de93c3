//! Lowering of a layout tree into program statements.

use crate::error::Result;
use crate::ident::Ident;
use crate::options::CodegenOptions;
use crate::stmt::{Constructor, Property, Statement, Value, FIXED};
use dom2fig_core::{LayoutNode, NodeKind, Padding, StyleRecord};

/// Lower a whole tree, depth-first and pre-order, rooted at `root`.
///
/// Fails before producing anything if a leaf carries children.
pub fn lower(tree: &LayoutNode, options: &CodegenOptions) -> Result<Vec<Statement>> {
    tree.validate()?;

    let mut out = Vec::with_capacity(tree.node_count() * 2);
    lower_node(tree, &Ident::root(), options, &mut out);
    Ok(out)
}

fn lower_node(
    node: &LayoutNode,
    ident: &Ident,
    options: &CodegenOptions,
    out: &mut Vec<Statement>,
) {
    let style = &node.style;

    match node.kind {
        NodeKind::Text => {
            out.push(Statement::Declare {
                ident: ident.clone(),
                ctor: Constructor::Text {
                    content: style.text.clone(),
                    size: style.font_size,
                    color: style.text_color,
                },
            });
        }
        NodeKind::Rectangle => {
            out.push(Statement::Declare {
                ident: ident.clone(),
                ctor: Constructor::Rect {
                    width: style.width,
                    height: style.height,
                    fill: style.bg_color,
                    radius: style.border_radius,
                },
            });
            push_border(ident, style, out);
        }
        NodeKind::Container => {
            out.push(Statement::Declare {
                ident: ident.clone(),
                ctor: Constructor::Stack {
                    axis: style.axis(),
                    spacing: style.gap,
                    padding: style.padding.uniform_or_zero(),
                },
            });

            if options.per_side_padding {
                push_side_padding(ident, &style.padding, out);
            }

            if style.has_size() {
                out.push(Statement::Resize {
                    target: ident.clone(),
                    width: style.width,
                    height: style.height,
                });
                assign(
                    out,
                    ident,
                    Property::PrimaryAxisSizingMode,
                    Value::Keyword(FIXED),
                );
                assign(
                    out,
                    ident,
                    Property::CounterAxisSizingMode,
                    Value::Keyword(FIXED),
                );
            }

            if let Some(fill) = style.bg_color {
                assign(out, ident, Property::Fills, Value::SolidPaint(Some(fill)));
            }

            push_border(ident, style, out);

            if style.border_radius > 0.0 {
                assign(
                    out,
                    ident,
                    Property::CornerRadius,
                    Value::Number(style.border_radius),
                );
            }

            for (i, child) in node.children.iter().enumerate() {
                let child_ident = ident.child(i);
                out.push(Statement::Separator);
                lower_node(child, &child_ident, options, out);
                out.push(Statement::AppendChild {
                    parent: ident.clone(),
                    child: child_ident,
                });
            }
        }
    }
}

fn push_border(ident: &Ident, style: &StyleRecord, out: &mut Vec<Statement>) {
    if style.border_width > 0.0 {
        assign(
            out,
            ident,
            Property::Strokes,
            Value::SolidPaint(style.border_color),
        );
        assign(
            out,
            ident,
            Property::StrokeWeight,
            Value::Number(style.border_width),
        );
    }
}

fn push_side_padding(ident: &Ident, padding: &Padding, out: &mut Vec<Statement>) {
    if let Padding::Sides {
        top,
        right,
        bottom,
        left,
    } = *padding
    {
        assign(out, ident, Property::PaddingTop, Value::Number(top));
        assign(out, ident, Property::PaddingRight, Value::Number(right));
        assign(out, ident, Property::PaddingBottom, Value::Number(bottom));
        assign(out, ident, Property::PaddingLeft, Value::Number(left));
    }
}

fn assign(out: &mut Vec<Statement>, target: &Ident, property: Property, value: Value) {
    out.push(Statement::Assign {
        target: target.clone(),
        property,
        value,
    });
}
