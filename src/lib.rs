//! # palette-gen
//!
//! Perceptual color palette generation: given one base color, derive six
//! harmony schemes (complementary, split, monochrome, analogous, triadic,
//! quadratic) with CIE LCh offsets and flatten them for display.
//!
//! ## Pipeline
//!
//! ```text
//! "#007bff" / "rgb(...)" / "hsl(...)"
//!     │
//!     ▼
//! parse.rs:   total parser ──► Rgb
//!     │
//!     ▼
//! convert.rs: Rgb ──► Xyz ──► Lab ──► Lch (and Rgb ◄──► Hsl)
//!     │
//!     ▼
//! scheme.rs:  fixed hue/lightness/chroma offsets ──► ColorSchemes
//!     │
//!     ▼
//! select.rs:  deduplicated, bounded lists for the grid
//!     │
//!     ▼
//! export.rs:  CSS variables, copy payloads, swatch styling
//! ```
//!
//! Every stage is a pure function over value types. Nothing here touches a
//! document, a clipboard or the filesystem (except [`config::Config::load`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use palette_gen::prelude::*;
//!
//! let schemes = generate_from_input("#007bff", SchemeModel::Lch);
//! assert_eq!(schemes.analogous.len(), 4);
//!
//! let all = get_unique_colors(&schemes, 12);
//! assert!(all.len() <= 12);
//! ```
//!
//! ## Feature Flags
//!
//! - `wasm`: JavaScript bindings via `wasm-bindgen`
//! - `cli`: the `palette-gen` command-line binary

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color value types and numeric helpers.
pub mod color;

/// Color string parsing.
pub mod parse;

/// Color space conversions.
pub mod convert;

// ============================================================================
// Palette Modules
// ============================================================================

/// Harmony scheme generation.
pub mod scheme;

/// Deduplication and grid selection.
pub mod select;

/// CSS variables, copy payloads and swatch styling.
pub mod export;

/// Generated palette with its display selection.
pub mod palette;

/// YAML configuration.
pub mod config;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for palette-gen operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use palette_gen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Hsl, Lch, Rgb};
    pub use crate::config::Config;
    pub use crate::convert::{
        hsl_to_hex, hsl_to_rgb, ideal_text_color, lch_to_hex, lch_to_rgb, rgb_to_hex, rgb_to_hsl,
        rgb_to_lch,
    };
    pub use crate::error::{Error, Result};
    pub use crate::export::{css_root_block, CssVariable, SwatchStyle};
    pub use crate::palette::Palette;
    pub use crate::parse::{parse, try_parse, FALLBACK_COLOR};
    pub use crate::scheme::{
        generate_color_schemes, generate_from_input, generate_hsl_color_schemes, ColorItem,
        ColorSchemes, SchemeCategory, SchemeColor, SchemeModel,
    };
    pub use crate::select::{get_unique_colors, grid_items, ActiveScheme, GridItem};
}
