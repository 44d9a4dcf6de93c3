//! WebAssembly bindings for dom2fig.
//!
//! Runs the converter inside the page being converted: point it at an element
//! and it returns plugin source that rebuilds the subtree in Figma.
//!
//! ## Example
//!
//! ```js
//! import { generateFromElement, generateFromSnapshot, captureElement } from 'dom2fig';
//!
//! const code = generateFromElement(document.querySelector('.card'));
//! console.log(code); // paste into a Figma plugin
//!
//! // or capture now, generate later
//! const json = captureElement(document.querySelector('.card'));
//! const later = generateFromSnapshot(json, { fontFamily: 'Roboto' });
//! ```

use dom2fig_analyze::{analyze, Analyzer, ElementSnapshot};
use dom2fig_codegen::{CodegenOptions, Generator, HELPER_CONTRACT_VERSION};
use dom2fig_core::LayoutNode;
use wasm_bindgen::prelude::*;
use web_sys::Element;

mod dom;

pub use dom::DomElement;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Version of the helper contract the generated code relies on.
#[wasm_bindgen(js_name = helperContractVersion)]
pub fn helper_contract_version() -> String {
    HELPER_CONTRACT_VERSION.to_string()
}

/// Analyze a live element into a layout tree object.
#[wasm_bindgen(js_name = analyzeElement)]
pub fn analyze_element(element: Element) -> Result<JsValue, JsError> {
    let tree = analyze(&DomElement::new(element));
    serde_wasm_bindgen::to_value(&tree)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Capture a live element subtree as snapshot JSON.
#[wasm_bindgen(js_name = captureElement)]
pub fn capture_element(element: Element) -> Result<String, JsError> {
    DomElement::new(element)
        .capture()
        .to_json()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Generate plugin code for a live element.
#[wasm_bindgen(js_name = generateFromElement)]
pub fn generate_from_element(element: Element, options: JsValue) -> Result<String, JsError> {
    let options = parse_options(options)?;
    let tree = Analyzer::new(options.defaults).analyze(&DomElement::new(element));
    generate_tree(&tree, options).map_err(|e| JsError::new(&e))
}

/// Generate plugin code from snapshot JSON.
#[wasm_bindgen(js_name = generateFromSnapshot)]
pub fn generate_from_snapshot(json: &str, options: JsValue) -> Result<String, JsError> {
    generate_snapshot(json, parse_options(options)?).map_err(|e| JsError::new(&e))
}

/// Generate plugin code from a layout tree object returned by `analyzeElement`.
#[wasm_bindgen(js_name = generateFromTree)]
pub fn generate_from_tree(tree: JsValue, options: JsValue) -> Result<String, JsError> {
    let tree: LayoutNode = serde_wasm_bindgen::from_value(tree)
        .map_err(|e| JsError::new(&format!("Invalid layout tree: {}", e)))?;
    generate_tree(&tree, parse_options(options)?).map_err(|e| JsError::new(&e))
}

fn parse_options(options: JsValue) -> Result<CodegenOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(CodegenOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

fn generate_tree(tree: &LayoutNode, options: CodegenOptions) -> Result<String, String> {
    Generator::new(options)
        .and_then(|generator| generator.generate(tree))
        .map_err(|e| e.to_string())
}

fn generate_snapshot(json: &str, options: CodegenOptions) -> Result<String, String> {
    let snapshot = ElementSnapshot::from_json(json).map_err(|e| e.to_string())?;
    let tree = Analyzer::new(options.defaults).analyze(&&snapshot);
    generate_tree(&tree, options)
}
