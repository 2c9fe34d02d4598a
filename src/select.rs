//! Flattening generated schemes into display lists.
//!
//! [`get_unique_colors`] builds the bounded, deduplicated "all schemes"
//! list. [`grid_items`] builds what a swatch grid shows for the active
//! scheme: the base color first, then the selected items with positional
//! variable names. Switching the active scheme only re-slices an existing
//! [`ColorSchemes`]; nothing is regenerated.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Lch;
use crate::convert::rgb_to_lch;
use crate::error::{Error, Result};
use crate::parse::parse;
use crate::scheme::{ColorItem, ColorSchemes, SchemeCategory, SchemeColor};

/// Grid size used when no limit is configured.
pub const DEFAULT_LIMIT: usize = 12;

/// Unique colors across all schemes, at most `limit` of them.
///
/// Categories are scanned in [`SchemeCategory::SCAN_ORDER`]; the first item
/// with a given hex (compared uppercased) wins and later duplicates are
/// skipped.
#[must_use]
pub fn get_unique_colors(schemes: &ColorSchemes, limit: usize) -> Vec<ColorItem> {
    let mut seen = HashSet::new();
    SchemeCategory::SCAN_ORDER
        .iter()
        .flat_map(|&category| schemes.category(category))
        .filter(|item| seen.insert(item.hex.to_uppercase()))
        .take(limit)
        .cloned()
        .collect()
}

/// Which list the grid displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveScheme {
    /// Deduplicated union of every category.
    All,
    /// A single category.
    #[serde(untagged)]
    Category(SchemeCategory),
}

impl Default for ActiveScheme {
    fn default() -> Self {
        Self::Category(SchemeCategory::Split)
    }
}

impl ActiveScheme {
    /// Machine name: `all` or the category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(category) => category.name(),
        }
    }

    /// Parse `all` or a category name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        SchemeCategory::from_name(name).map(Self::Category)
    }
}

impl fmt::Display for ActiveScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActiveScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownScheme(s.to_string()))
    }
}

/// One swatch in the display grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    /// `#RRGGBB`.
    pub hex: String,
    /// LCH components shown on the swatch.
    pub lch: Lch,
    /// `base` or the category name.
    pub category: String,
    /// `--color-base`, then `--color-01`, `--color-02`, ...
    pub var_name: String,
}

impl GridItem {
    fn from_item(item: &ColorItem, position: usize) -> Self {
        Self {
            hex: item.hex.clone(),
            lch: item.color.to_lch(),
            category: item.category.name().to_string(),
            var_name: format!("--color-{position:02}"),
        }
    }
}

/// Build the grid for `active`.
///
/// For a single category the base plus its items are cut to `limit`
/// entries. For [`ActiveScheme::All`] the base is followed by up to `limit`
/// unique colors.
#[must_use]
pub fn grid_items(schemes: &ColorSchemes, active: ActiveScheme, limit: usize) -> Vec<GridItem> {
    let items: Vec<ColorItem> = match active {
        ActiveScheme::All => get_unique_colors(schemes, limit),
        ActiveScheme::Category(_) if limit == 0 => return Vec::new(),
        ActiveScheme::Category(category) => schemes
            .category(category)
            .iter()
            .take(limit - 1)
            .cloned()
            .collect(),
    };

    let base = GridItem {
        hex: schemes.base.hex.clone(),
        lch: base_lch(schemes),
        category: "base".to_string(),
        var_name: "--color-base".to_string(),
    };

    std::iter::once(base)
        .chain(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| GridItem::from_item(item, index + 1)),
        )
        .collect()
}

fn base_lch(schemes: &ColorSchemes) -> Lch {
    match schemes.base.color {
        SchemeColor::Lch(lch) => lch,
        SchemeColor::Hsl(_) => rgb_to_lch(parse(&schemes.base.hex)),
    }
}
