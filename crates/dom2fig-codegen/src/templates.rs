//! Fixed preamble and epilogue of the generated program.
//!
//! The preamble defines the helper contract the body relies on:
//! `rect(w, h, c, r)`, `txt(s, sz, c)`, `hStack(spacing, padding)` and
//! `vStack(spacing, padding)`, where a color argument of `null` skips the
//! fill. Any host runtime replaying the program must provide exactly these.

use crate::error::Result;
use crate::options::CodegenOptions;
use crate::render::{format_number, format_string};
use handlebars::Handlebars;
use serde::Serialize;

/// Version of the helper contract emitted in the preamble. Bump it whenever a
/// helper's name, parameters or meaning changes.
pub const HELPER_CONTRACT_VERSION: &str = "1";

const PREAMBLE: &str = r#"// Auto-generated Figma plugin code
// dom2fig helper contract v{{version}}
async function loadFont() {
  await figma.loadFontAsync({{font}});
}

function rect(w, h, c, r = {{corner_radius}}) {
  const el = figma.createRectangle();
  el.resize(w, h);
  if (c) el.fills = [{type: 'SOLID', color: c}];
  if (r) el.cornerRadius = r;
  return el;
}

function txt(s, sz, c) {
  const t = figma.createText();
  t.fontName = {{font}};
  t.characters = s;
  t.fontSize = sz;
  if (c) t.fills = [{type: 'SOLID', color: c}];
  return t;
}

function hStack(spacing = {{spacing}}, padding = {{padding}}) {
  const f = figma.createFrame();
  f.layoutMode = 'HORIZONTAL';
  f.itemSpacing = spacing;
  f.paddingLeft = f.paddingRight = f.paddingTop = f.paddingBottom = padding;
  f.primaryAxisSizingMode = 'AUTO';
  f.counterAxisSizingMode = 'AUTO';
  f.fills = [];
  return f;
}

function vStack(spacing = {{spacing}}, padding = {{padding}}) {
  const f = figma.createFrame();
  f.layoutMode = 'VERTICAL';
  f.itemSpacing = spacing;
  f.paddingLeft = f.paddingRight = f.paddingTop = f.paddingBottom = padding;
  f.primaryAxisSizingMode = 'AUTO';
  f.counterAxisSizingMode = 'AUTO';
  f.fills = [];
  return f;
}

async function generate() {
{{indent}}await loadFont();

"#;

const EPILOGUE: &str = r#"
{{indent}}figma.currentPage.appendChild(root);
{{indent}}figma.viewport.scrollAndZoomIntoView([root]);
{{indent}}figma.notify({{message}});
{{indent}}figma.closePlugin();
}

generate();
"#;

#[derive(Serialize)]
struct FrameData {
    version: &'static str,
    font: String,
    corner_radius: String,
    spacing: String,
    padding: String,
    indent: String,
    message: String,
}

impl FrameData {
    fn new(options: &CodegenOptions) -> Result<Self> {
        let defaults = &options.defaults;
        Ok(Self {
            version: HELPER_CONTRACT_VERSION,
            font: format!(
                "{{ family: {}, style: {} }}",
                format_string(&options.font_family)?,
                format_string(&options.font_style)?
            ),
            corner_radius: format_number(defaults.corner_radius),
            spacing: format_number(defaults.spacing),
            padding: format_number(defaults.padding),
            indent: options.indent.clone(),
            message: format_string(&options.completion_message)?,
        })
    }
}

/// Template engine using Handlebars.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine with the preamble and epilogue registered.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        // Values are pre-escaped as source literals, not HTML.
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars.register_template_string("preamble", PREAMBLE)?;
        handlebars.register_template_string("epilogue", EPILOGUE)?;

        Ok(Self { handlebars })
    }

    /// Helper definitions and the opening of the entry point.
    pub fn preamble(&self, options: &CodegenOptions) -> Result<String> {
        let data = FrameData::new(options)?;
        Ok(self.handlebars.render("preamble", &data)?)
    }

    /// Attachment of `root` to the page and the end of the entry point.
    pub fn epilogue(&self, options: &CodegenOptions) -> Result<String> {
        let data = FrameData::new(options)?;
        Ok(self.handlebars.render("epilogue", &data)?)
    }
}
