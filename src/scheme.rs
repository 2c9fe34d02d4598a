//! Harmony scheme generation.
//!
//! A base color is offset by a fixed table of hue, lightness and chroma
//! deltas, producing six named palettes. Nothing here is random: the same
//! base always produces the same [`ColorSchemes`].
//!
//! | category      | deltas                                          |
//! |---------------|-------------------------------------------------|
//! | complementary | Δh +180                                         |
//! | split         | Δh +150, +210                                   |
//! | analogous     | Δh −60, −30, +30, +60                           |
//! | triadic       | Δh −120, +120                                   |
//! | quadratic     | Δh +90, +180, +270                              |
//! | monochrome    | Δl −22, −12, +12, +22 with Δc +5, +5, −5, −5    |
//!
//! The LCH model applies the table directly (lightness 0-100, chroma
//! 0-150). The HSL model applies the lightness and chroma columns scaled by
//! 1/100 to lightness and saturation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::{clamp, modulo, round_hue, round_to, Hsl, Lch, Rgb, MAX_CHROMA};
use crate::convert::{hsl_to_rgb, lch_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_lch};
use crate::error::{Error, Result};
use crate::parse::parse;

// ============================================================================
// Categories
// ============================================================================

/// One of the six fixed harmony rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeCategory {
    /// Opposite hue.
    Complementary,
    /// The two neighbours of the opposite hue.
    Split,
    /// Same hue, stepped lightness.
    Monochrome,
    /// Adjacent hues.
    Analogous,
    /// 120-degree spacing.
    Triadic,
    /// 90-degree spacing.
    Quadratic,
}

impl SchemeCategory {
    /// Order in which [`crate::select::get_unique_colors`] scans categories.
    pub const SCAN_ORDER: [Self; 6] = [
        Self::Complementary,
        Self::Split,
        Self::Analogous,
        Self::Triadic,
        Self::Quadratic,
        Self::Monochrome,
    ];

    /// All categories, in tab order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Split,
            Self::Monochrome,
            Self::Analogous,
            Self::Triadic,
            Self::Quadratic,
        ]
    }

    /// Machine name, used in CSS variable names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Split => "split",
            Self::Monochrome => "monochrome",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Quadratic => "quadratic",
        }
    }

    /// Human-readable tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Split => "Split complementary",
            Self::Monochrome => "Monochrome",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Quadratic => "Quadratic",
        }
    }

    /// Parse a category from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|c| c.name() == lower).copied()
    }

    /// The offset table for this category.
    #[must_use]
    pub const fn adjustments(self) -> &'static [Adjustment] {
        match self {
            Self::Complementary => COMPLEMENTARY,
            Self::Split => SPLIT,
            Self::Monochrome => MONOCHROME,
            Self::Analogous => ANALOGOUS,
            Self::Triadic => TRIADIC,
            Self::Quadratic => QUADRATIC,
        }
    }
}

impl fmt::Display for SchemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownScheme(s.to_string()))
    }
}

/// Deltas applied to the base color for one scheme entry.
///
/// `dl` and `dc` are in LCH units; the HSL model divides them by 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// Hue delta in degrees.
    pub dh: f64,
    /// Lightness delta.
    pub dl: f64,
    /// Chroma (or saturation) delta.
    pub dc: f64,
}

impl Adjustment {
    const fn hue(dh: f64) -> Self {
        Self { dh, dl: 0.0, dc: 0.0 }
    }

    const fn tone(dl: f64, dc: f64) -> Self {
        Self { dh: 0.0, dl, dc }
    }
}

const COMPLEMENTARY: &[Adjustment] = &[Adjustment::hue(180.0)];
const SPLIT: &[Adjustment] = &[Adjustment::hue(150.0), Adjustment::hue(210.0)];
const ANALOGOUS: &[Adjustment] = &[
    Adjustment::hue(-60.0),
    Adjustment::hue(-30.0),
    Adjustment::hue(30.0),
    Adjustment::hue(60.0),
];
const TRIADIC: &[Adjustment] = &[Adjustment::hue(-120.0), Adjustment::hue(120.0)];
const QUADRATIC: &[Adjustment] = &[
    Adjustment::hue(90.0),
    Adjustment::hue(180.0),
    Adjustment::hue(270.0),
];
// Chroma moves against lightness so lighter tints do not wash out.
const MONOCHROME: &[Adjustment] = &[
    Adjustment::tone(-22.0, 5.0),
    Adjustment::tone(-12.0, 5.0),
    Adjustment::tone(12.0, -5.0),
    Adjustment::tone(22.0, -5.0),
];

// ============================================================================
// Color models
// ============================================================================

/// Which cylindrical model the offsets are applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeModel {
    /// CIE LCh, perceptually uniform offsets.
    #[default]
    Lch,
    /// HSL, kept for compatibility with palettes generated before LCH.
    Hsl,
}

impl SchemeModel {
    /// Machine name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lch => "lch",
            Self::Hsl => "hsl",
        }
    }

    /// Parse a model from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "lch" => Some(Self::Lch),
            "hsl" => Some(Self::Hsl),
            _ => None,
        }
    }
}

/// Cylindrical components of a scheme color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemeColor {
    /// LCH components.
    Lch(Lch),
    /// HSL components.
    Hsl(Hsl),
}

impl SchemeColor {
    /// The model these components belong to.
    #[must_use]
    pub const fn model(self) -> SchemeModel {
        match self {
            Self::Lch(_) => SchemeModel::Lch,
            Self::Hsl(_) => SchemeModel::Hsl,
        }
    }

    /// Hue in degrees.
    #[must_use]
    pub const fn hue(self) -> f64 {
        match self {
            Self::Lch(lch) => lch.h,
            Self::Hsl(hsl) => hsl.h,
        }
    }

    /// Gamut-clamped sRGB value.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Lch(lch) => lch_to_rgb(lch),
            Self::Hsl(hsl) => hsl_to_rgb(hsl),
        }
    }

    /// `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.to_rgb())
    }

    /// LCH components. HSL colors are converted through sRGB.
    #[must_use]
    pub fn to_lch(self) -> Lch {
        match self {
            Self::Lch(lch) => lch,
            Self::Hsl(hsl) => rgb_to_lch(hsl_to_rgb(hsl)),
        }
    }

    /// Apply one table entry, wrapping hue and clamping the rest.
    ///
    /// LCH components stay at the two decimals [`rgb_to_lch`] produces.
    #[must_use]
    pub fn adjust(self, adj: Adjustment) -> Self {
        match self {
            Self::Lch(lch) => Self::Lch(Lch::new(
                round_to(clamp(lch.l + adj.dl, 0.0, 100.0), 2),
                round_to(clamp(lch.c + adj.dc, 0.0, MAX_CHROMA), 2),
                round_hue(lch.h + adj.dh),
            )),
            Self::Hsl(hsl) => Self::Hsl(Hsl::new(
                modulo(hsl.h + adj.dh, 360.0),
                clamp(hsl.s + adj.dc / 100.0, 0.0, 1.0),
                clamp(hsl.l + adj.dl / 100.0, 0.0, 1.0),
            )),
        }
    }
}

// ============================================================================
// Generated values
// ============================================================================

/// One generated swatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorItem {
    /// `#RRGGBB`.
    pub hex: String,
    /// Components before gamut clamping.
    pub color: SchemeColor,
    /// Scheme this swatch belongs to.
    pub category: SchemeCategory,
    /// `--color-<category>-<n>`, 1-based within the category.
    pub var_name: String,
}

/// The input color restated in hex and in its model's components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseColor {
    /// `#RRGGBB`.
    pub hex: String,
    /// Components the schemes were offset from.
    #[serde(flatten)]
    pub color: SchemeColor,
}

/// All six palettes derived from one base color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSchemes {
    /// The seed color.
    pub base: BaseColor,
    /// 1 item.
    pub complementary: Vec<ColorItem>,
    /// 2 items.
    pub split: Vec<ColorItem>,
    /// 4 items.
    pub monochrome: Vec<ColorItem>,
    /// 4 items.
    pub analogous: Vec<ColorItem>,
    /// 2 items.
    pub triadic: Vec<ColorItem>,
    /// 3 items.
    pub quadratic: Vec<ColorItem>,
}

impl ColorSchemes {
    /// Items of one category.
    #[must_use]
    pub fn category(&self, category: SchemeCategory) -> &[ColorItem] {
        match category {
            SchemeCategory::Complementary => &self.complementary,
            SchemeCategory::Split => &self.split,
            SchemeCategory::Monochrome => &self.monochrome,
            SchemeCategory::Analogous => &self.analogous,
            SchemeCategory::Triadic => &self.triadic,
            SchemeCategory::Quadratic => &self.quadratic,
        }
    }

    /// Model the schemes were generated in.
    #[must_use]
    pub const fn model(&self) -> SchemeModel {
        self.base.color.model()
    }

    /// Every item, categories in tab order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorItem> + '_ {
        SchemeCategory::all()
            .iter()
            .flat_map(move |&category| self.category(category).iter())
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Generate all schemes from an LCH base.
///
/// # Example
///
/// ```rust
/// use palette_gen::color::Lch;
/// use palette_gen::scheme::generate_color_schemes;
///
/// let schemes = generate_color_schemes(Lch::new(60.0, 40.0, 350.0));
/// // +30 wraps past 360.
/// assert_eq!(schemes.analogous[2].color.hue(), 20.0);
/// ```
#[must_use]
pub fn generate_color_schemes(base: Lch) -> ColorSchemes {
    generate(SchemeColor::Lch(base))
}

/// Generate all schemes from an HSL base.
#[must_use]
pub fn generate_hsl_color_schemes(base: Hsl) -> ColorSchemes {
    generate(SchemeColor::Hsl(base))
}

/// Parse `input` (see [`crate::parse`]) and generate schemes in `model`.
#[must_use]
pub fn generate_from_input(input: &str, model: SchemeModel) -> ColorSchemes {
    let rgb = parse(input);
    match model {
        SchemeModel::Lch => generate_color_schemes(rgb_to_lch(rgb)),
        SchemeModel::Hsl => generate_hsl_color_schemes(rgb_to_hsl(rgb)),
    }
}

fn generate(base: SchemeColor) -> ColorSchemes {
    let schemes = ColorSchemes {
        base: BaseColor {
            hex: base.to_hex(),
            color: base,
        },
        complementary: create_scheme(base, SchemeCategory::Complementary),
        split: create_scheme(base, SchemeCategory::Split),
        monochrome: create_scheme(base, SchemeCategory::Monochrome),
        analogous: create_scheme(base, SchemeCategory::Analogous),
        triadic: create_scheme(base, SchemeCategory::Triadic),
        quadratic: create_scheme(base, SchemeCategory::Quadratic),
    };
    trace!(base = %schemes.base.hex, model = base.model().name(), "generated color schemes");
    schemes
}

fn create_scheme(base: SchemeColor, category: SchemeCategory) -> Vec<ColorItem> {
    category
        .adjustments()
        .iter()
        .enumerate()
        .map(|(index, &adj)| {
            let color = base.adjust(adj);
            ColorItem {
                hex: color.to_hex(),
                color,
                category,
                var_name: format!("--color-{}-{}", category.name(), index + 1),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn lch_of(item: &ColorItem) -> Lch {
        match item.color {
            SchemeColor::Lch(lch) => lch,
            SchemeColor::Hsl(_) => panic!("expected LCH item"),
        }
    }

    fn hsl_of(item: &ColorItem) -> Hsl {
        match item.color {
            SchemeColor::Hsl(hsl) => hsl,
            SchemeColor::Lch(_) => panic!("expected HSL item"),
        }
    }

    fn hues(items: &[ColorItem]) -> Vec<f64> {
        items.iter().map(|i| i.color.hue()).collect()
    }

    #[test]
    fn test_category_sizes() {
        let s = generate_color_schemes(Lch::new(55.0, 60.0, 120.0));
        assert_eq!(s.complementary.len(), 1);
        assert_eq!(s.split.len(), 2);
        assert_eq!(s.analogous.len(), 4);
        assert_eq!(s.triadic.len(), 2);
        assert_eq!(s.quadratic.len(), 3);
        assert_eq!(s.monochrome.len(), 4);
        assert_eq!(s.iter().count(), 16);
    }

    #[test]
    fn test_hue_offsets_exact() {
        let s = generate_color_schemes(Lch::new(50.0, 40.0, 100.0));
        assert_eq!(hues(&s.complementary), vec![280.0]);
        assert_eq!(hues(&s.split), vec![250.0, 310.0]);
        assert_eq!(hues(&s.analogous), vec![40.0, 70.0, 130.0, 160.0]);
        assert_eq!(hues(&s.triadic), vec![340.0, 220.0]);
        assert_eq!(hues(&s.quadratic), vec![190.0, 280.0, 10.0]);
    }

    #[test]
    fn test_hue_offsets_keep_lightness_and_chroma() {
        let s = generate_color_schemes(Lch::new(50.0, 40.0, 100.0));
        for item in &s.split {
            let lch = lch_of(item);
            assert_eq!(lch.l, 50.0);
            assert_eq!(lch.c, 40.0);
        }
    }

    #[test]
    fn test_monochrome_offsets() {
        let s = generate_color_schemes(Lch::new(50.0, 40.0, 100.0));
        let mono: Vec<Lch> = s.monochrome.iter().map(lch_of).collect();
        assert_eq!(mono.iter().map(|c| c.l).collect::<Vec<_>>(), vec![28.0, 38.0, 62.0, 72.0]);
        assert_eq!(mono.iter().map(|c| c.c).collect::<Vec<_>>(), vec![45.0, 45.0, 35.0, 35.0]);
        assert!(mono.iter().all(|c| c.h == 100.0));
    }

    #[test]
    fn test_hue_wraps_past_360() {
        let s = generate_color_schemes(Lch::new(60.0, 40.0, 350.0));
        assert_eq!(s.analogous[2].color.hue(), 20.0);
        assert_eq!(s.analogous[0].color.hue(), 290.0);
    }

    #[test]
    fn test_negative_hue_delta_wraps() {
        let s = generate_color_schemes(Lch::new(60.0, 40.0, 10.0));
        assert_eq!(s.analogous[0].color.hue(), 310.0);
        assert_eq!(s.triadic[0].color.hue(), 250.0);
    }

    #[test]
    fn test_lightness_and_chroma_clamp() {
        let bright = generate_color_schemes(Lch::new(95.0, 148.0, 0.0));
        assert_eq!(lch_of(&bright.monochrome[3]).l, 100.0);
        assert_eq!(lch_of(&bright.monochrome[0]).c, MAX_CHROMA);

        let dull = generate_color_schemes(Lch::new(5.0, 2.0, 0.0));
        assert_eq!(lch_of(&dull.monochrome[0]).l, 0.0);
        assert_eq!(lch_of(&dull.monochrome[3]).c, 0.0);
    }

    #[test]
    fn test_var_names() {
        let s = generate_color_schemes(Lch::new(50.0, 40.0, 100.0));
        assert_eq!(s.complementary[0].var_name, "--color-complementary-1");
        assert_eq!(s.quadratic[2].var_name, "--color-quadratic-3");
        assert_eq!(s.monochrome[3].var_name, "--color-monochrome-4");
        assert!(s.split.iter().all(|i| i.category == SchemeCategory::Split));
    }

    #[test]
    fn test_base_reported_separately() {
        let base = Lch::new(50.0, 40.0, 100.0);
        let s = generate_color_schemes(base);
        assert_eq!(s.base.color, SchemeColor::Lch(base));
        assert_eq!(s.base.hex, crate::convert::lch_to_hex(base));
        assert_eq!(s.model(), SchemeModel::Lch);
    }

    #[test]
    fn test_deterministic() {
        let a = generate_from_input("#3fa34d", SchemeModel::Lch);
        let b = generate_from_input("#3fa34d", SchemeModel::Lch);
        assert_eq!(a, b);
    }

    #[test]
    fn test_lch_components_stay_two_decimals() {
        let s = generate_from_input("#007BFF", SchemeModel::Lch);
        let base = match s.base.color {
            SchemeColor::Lch(lch) => lch,
            SchemeColor::Hsl(_) => panic!("expected LCH base"),
        };
        assert_eq!(base.h, 286.68);
        assert_eq!(s.complementary[0].color.hue(), 106.68);
        for item in s.iter() {
            let lch = lch_of(item);
            for v in [lch.l, lch.c, lch.h] {
                assert_eq!(v, round_to(v, 2));
            }
        }
    }

    #[test]
    fn test_hsl_scenario_blue() {
        let s = generate_from_input("#007BFF", SchemeModel::Hsl);
        let base = match s.base.color {
            SchemeColor::Hsl(hsl) => hsl,
            SchemeColor::Lch(_) => panic!("expected HSL base"),
        };
        assert_abs_diff_eq!(base.h, 211.06, epsilon = 0.01);
        assert_eq!(s.base.hex, "#007BFF");
        assert_abs_diff_eq!(s.complementary[0].color.hue(), 31.06, epsilon = 0.01);
    }

    #[test]
    fn test_hsl_monochrome_scaled() {
        let s = generate_hsl_color_schemes(Hsl::new(200.0, 0.5, 0.5));
        let mono: Vec<Hsl> = s.monochrome.iter().map(hsl_of).collect();
        assert_abs_diff_eq!(mono[0].l, 0.28, epsilon = 1e-12);
        assert_abs_diff_eq!(mono[0].s, 0.55, epsilon = 1e-12);
        assert_abs_diff_eq!(mono[3].l, 0.72, epsilon = 1e-12);
        assert_abs_diff_eq!(mono[3].s, 0.45, epsilon = 1e-12);
    }

    #[test]
    fn test_hsl_saturation_clamps() {
        let s = generate_hsl_color_schemes(Hsl::new(200.0, 1.0, 0.9));
        let top = hsl_of(&s.monochrome[0]);
        assert_eq!(top.s, 1.0);
        assert_eq!(hsl_of(&s.monochrome[3]).l, 1.0);
    }

    #[test]
    fn test_category_names_roundtrip() {
        for &category in SchemeCategory::all() {
            assert_eq!(SchemeCategory::from_name(category.name()), Some(category));
            assert_eq!(category.to_string(), category.name());
        }
        assert_eq!(SchemeCategory::from_name("SPLIT"), Some(SchemeCategory::Split));
        assert!("rainbow".parse::<SchemeCategory>().is_err());
    }

    #[test]
    fn test_scan_order_covers_all() {
        for category in SchemeCategory::all() {
            assert!(SchemeCategory::SCAN_ORDER.contains(category));
        }
        assert_eq!(SchemeCategory::SCAN_ORDER[5], SchemeCategory::Monochrome);
    }

    #[test]
    fn test_model_from_name() {
        assert_eq!(SchemeModel::from_name("LCH"), Some(SchemeModel::Lch));
        assert_eq!(SchemeModel::from_name("hsl"), Some(SchemeModel::Hsl));
        assert_eq!(SchemeModel::from_name("oklch"), None);
        assert_eq!(SchemeModel::default(), SchemeModel::Lch);
    }

    #[test]
    fn test_color_item_serializes_camel_case() {
        let s = generate_color_schemes(Lch::new(50.0, 40.0, 100.0));
        let yaml = serde_yaml_ng::to_string(&s.complementary[0]).unwrap();
        assert!(yaml.contains("varName:"));
        assert!(yaml.contains("--color-complementary-1"));
        assert!(yaml.contains("category: complementary"));
    }

    #[test]
    fn test_base_serializes_flat() {
        let s = generate_color_schemes(Lch::new(50.0, 40.0, 100.0));
        let yaml = serde_yaml_ng::to_string(&s.base).unwrap();
        assert!(!yaml.contains("color:"));
        assert!(yaml.contains("l: 50.0"));
        assert!(yaml.contains("c: 40.0"));
        assert!(yaml.contains("h: 100.0"));

        let back: BaseColor = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(back, s.base);
    }
}
