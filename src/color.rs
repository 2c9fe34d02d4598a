//! Color value types and numeric helpers.
//!
//! [`Rgb`] is the canonical interchange representation (hex and CSS strings
//! round-trip through it). [`Hsl`] and [`Lch`] are the cylindrical models the
//! scheme generator offsets. [`Lab`] and [`Xyz`] only exist as intermediate
//! steps of the RGB/LCH conversion in [`crate::convert`].
//!
//! # References
//!
//! - CIE 15:2004, *Colorimetry*, 3rd ed. (Lab, LCh, D65 white point).
//! - IEC 61966-2-1:1999, *Default RGB colour space - sRGB*.

use serde::{Deserialize, Serialize};

/// Upper bound applied to LCH chroma after offsetting.
pub const MAX_CHROMA: f64 = 150.0;

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from unbounded channel values, rounding and clamping
    /// each one into `[0, 255]`.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Channels scaled to `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

/// Round and clamp a channel value into `[0, 255]`. NaN maps to 0.
fn channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    clamp(v.round(), 0.0, 255.0) as u8
}

/// HSL color: hue in degrees, saturation and lightness as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue (0.0-360.0 degrees).
    pub h: f64,
    /// Saturation (0.0-1.0).
    pub s: f64,
    /// Lightness (0.0-1.0).
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// CIE LCh(ab) color under D65.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lch {
    /// Perceptual lightness (0.0-100.0).
    pub l: f64,
    /// Chroma (0.0 and up, clamped to [`MAX_CHROMA`] by the scheme generator).
    pub c: f64,
    /// Hue (0.0-360.0 degrees).
    pub h: f64,
}

impl Lch {
    /// Create a new LCH color.
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

/// CIE Lab color. Intermediate between [`Xyz`] and [`Lch`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

/// CIE XYZ tristimulus values (D65, Y of white = 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus.
    pub x: f64,
    /// Y tristimulus (luminance).
    pub y: f64,
    /// Z tristimulus.
    pub z: f64,
}

// ============================================================================
// Numeric helpers
// ============================================================================

/// Clamp `v` into `[lo, hi]`.
#[must_use]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Remainder with the sign of the divisor: `((v % m) + m) % m`.
///
/// `modulo(-30.0, 360.0) == 330.0`.
#[must_use]
pub fn modulo(v: f64, m: f64) -> f64 {
    ((v % m) + m) % m
}

/// Round to `places` decimal places.
#[must_use]
pub fn round_to(v: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (v * factor).round() / factor
}

/// Wrap a hue into `[0, 360)` and round it to two decimals.
///
/// Wrapping happens before rounding so the result carries no remainder
/// noise, and a hue that rounds up to 360 becomes 0.
#[must_use]
pub fn round_hue(h: f64) -> f64 {
    let h = round_to(modulo(h, 360.0), 2);
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}
