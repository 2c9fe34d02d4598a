//! WebAssembly bindings for palette-gen.
//!
//! Exposes the palette core to a browser presentation layer. Structured
//! results are returned as plain JS objects (field names in camelCase).
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { color_schemes, palette_grid, css_variables } from 'palette-gen';
//!
//! await init();
//!
//! const schemes = color_schemes('#007bff', 'lch');
//! const grid = palette_grid('#007bff', 'all', 12);
//! for (const swatch of grid) {
//!     document.documentElement.style.setProperty(swatch.varName, swatch.hex);
//! }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::convert::rgb_to_hex;
use crate::export::{css_root_block, grid_variables, SwatchStyle};
use crate::palette::Palette;
use crate::parse::parse;
use crate::scheme::{generate_from_input, SchemeModel};
use crate::select::{get_unique_colors, ActiveScheme, DEFAULT_LIMIT};

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the WASM module.
///
/// Call this before using any other functions.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"palette-gen WASM initialized".into());
}

/// Get library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Serialize to plain JS objects. Flattened fields go through the map
/// serializer, which would otherwise produce a JS `Map`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn model_from(name: Option<String>) -> Result<SchemeModel, JsValue> {
    match name {
        None => Ok(SchemeModel::default()),
        Some(name) => SchemeModel::from_name(&name)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown model: {name}"))),
    }
}

fn active_from(name: &str) -> Result<ActiveScheme, JsValue> {
    name.parse::<ActiveScheme>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

// ============================================================================
// Color Functions
// ============================================================================

/// Normalize any supported color string to `#RRGGBB`.
///
/// Unrecognized input yields the fallback color.
#[wasm_bindgen]
pub fn parse_color(input: &str) -> String {
    rgb_to_hex(parse(input))
}

/// Readable text color over `hex`: `#0f172a` or `#FFFFFF`.
#[wasm_bindgen]
pub fn ideal_text_color(hex: &str) -> String {
    crate::convert::ideal_text_color(hex).to_string()
}

/// Text and copy-button colors for a swatch.
#[wasm_bindgen]
pub fn swatch_style(hex: &str) -> Result<JsValue, JsValue> {
    to_js(&SwatchStyle::for_hex(hex))
}

// ============================================================================
// Scheme Functions
// ============================================================================

/// Generate all six schemes for `base`.
///
/// # Arguments
///
/// * `base` - Any supported color string
/// * `model` - `"lch"` (default) or `"hsl"`
#[wasm_bindgen]
pub fn color_schemes(base: &str, model: Option<String>) -> Result<JsValue, JsValue> {
    let schemes = generate_from_input(base, model_from(model)?);
    to_js(&schemes)
}

/// Unique colors across every scheme, at most `limit` (default 12).
#[wasm_bindgen]
pub fn unique_colors(base: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
    let schemes = generate_from_input(base, SchemeModel::default());
    to_js(&get_unique_colors(&schemes, limit.unwrap_or(DEFAULT_LIMIT)))
}

/// Grid swatches for `scheme` (`"all"` or a category name).
#[wasm_bindgen]
pub fn palette_grid(base: &str, scheme: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
    let palette = grid_palette(base, scheme, limit)?;
    to_js(&palette.grid())
}

/// `:root { ... }` CSS block for the grid of `scheme`.
#[wasm_bindgen]
pub fn css_variables(base: &str, scheme: &str, limit: Option<usize>) -> Result<String, JsValue> {
    let palette = grid_palette(base, scheme, limit)?;
    Ok(css_root_block(&grid_variables(&palette.grid())))
}

fn grid_palette(base: &str, scheme: &str, limit: Option<usize>) -> Result<Palette, JsValue> {
    let mut palette = Palette::new(base).with_active(active_from(scheme)?);
    if let Some(limit) = limit {
        palette = palette.with_limit(limit);
    }
    Ok(palette)
}
