//! WASM bindings for browser-based rendering.
//!
//! This module exposes the composer to JavaScript via wasm-bindgen, using the
//! embedded configuration.

use wasm_bindgen::prelude::*;

use crate::export::{HtmlExporter, to_json};
use crate::{Configuration, LayoutContext, compose};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn layout(compact: bool) -> LayoutContext {
    if compact {
        LayoutContext::compact()
    } else {
        LayoutContext::wide()
    }
}

/// Render the page as a standalone HTML document.
#[wasm_bindgen]
pub fn render_transparency_html(compact: bool) -> Result<String, JsValue> {
    let doc = compose(Configuration::embedded(), layout(compact))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(HtmlExporter::new().render(&doc))
}

/// Render the page as a JSON tree string.
#[wasm_bindgen]
pub fn render_transparency_json(compact: bool) -> Result<String, JsValue> {
    let doc = compose(Configuration::embedded(), layout(compact))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(to_json(&doc).to_string())
}
