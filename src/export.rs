//! Presentation-ready outputs: CSS custom properties, copy payloads and
//! swatch styling.
//!
//! Everything here returns plain values. Applying variables to a document
//! or writing to a clipboard is left to the caller.

use serde::{Deserialize, Serialize};

use crate::color::Lch;
use crate::convert::{ideal_text_color, LIGHT_TEXT};
use crate::scheme::ColorSchemes;
use crate::select::GridItem;

/// One CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssVariable {
    /// Property name including the leading `--`.
    pub name: String,
    /// Property value.
    pub value: String,
}

impl CssVariable {
    /// Create a variable.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// `--color-base` followed by every scheme item's `--color-<category>-<n>`,
/// categories in tab order.
#[must_use]
pub fn scheme_variables(schemes: &ColorSchemes) -> Vec<CssVariable> {
    std::iter::once(CssVariable::new("--color-base", schemes.base.hex.clone()))
        .chain(
            schemes
                .iter()
                .map(|item| CssVariable::new(item.var_name.clone(), item.hex.clone())),
        )
        .collect()
}

/// Positional variables for a grid (`--color-base`, `--color-01`, ...).
#[must_use]
pub fn grid_variables(grid: &[GridItem]) -> Vec<CssVariable> {
    grid.iter()
        .map(|item| CssVariable::new(item.var_name.clone(), item.hex.clone()))
        .collect()
}

/// Render variables as a `:root { ... }` block.
///
/// ```rust
/// use palette_gen::export::{css_root_block, CssVariable};
///
/// let css = css_root_block(&[CssVariable::new("--color-base", "#007BFF")]);
/// assert_eq!(css, ":root {\n  --color-base: #007BFF;\n}");
/// ```
#[must_use]
pub fn css_root_block(vars: &[CssVariable]) -> String {
    let mut lines = Vec::with_capacity(vars.len() + 2);
    lines.push(":root {".to_string());
    lines.extend(vars.iter().map(|v| format!("  {}: {};", v.name, v.value)));
    lines.push("}".to_string());
    lines.join("\n")
}

/// Hex values of a grid, comma separated.
#[must_use]
pub fn hex_values(grid: &[GridItem]) -> String {
    grid.iter()
        .map(|item| item.hex.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `LCH(l, c, h)` with components rounded to whole numbers.
#[must_use]
pub fn lch_label(lch: Lch) -> String {
    format!("LCH({:.0}, {:.0}, {:.0})", lch.l.round(), lch.c.round(), lch.h.round())
}

/// One [`lch_label`] per grid item, newline separated.
#[must_use]
pub fn lch_values(grid: &[GridItem]) -> String {
    grid.iter()
        .map(|item| lch_label(item.lch))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Foreground colors for a swatch and its copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchStyle {
    /// Label text color.
    pub text: &'static str,
    /// Copy button background.
    pub button_background: &'static str,
    /// Copy button label color.
    pub button_text: &'static str,
}

impl SwatchStyle {
    /// Pick colors that stay readable over `hex`.
    #[must_use]
    pub fn for_hex(hex: &str) -> Self {
        let text = ideal_text_color(hex);
        if text == LIGHT_TEXT {
            Self {
                text,
                button_background: "rgba(0,0,0,0.22)",
                button_text: "#fff",
            }
        } else {
            Self {
                text,
                button_background: "rgba(255,255,255,0.4)",
                button_text: text,
            }
        }
    }
}
