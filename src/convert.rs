//! Color space conversions.
//!
//! Two pipelines, both pure and total:
//!
//! ```text
//! Rgb ──► Hsl ──► Rgb
//! Rgb ──► linear RGB ──► Xyz ──► Lab ──► Lch ──► Lab ──► Xyz ──► linear RGB ──► Rgb
//! ```
//!
//! Every function that produces an [`Rgb`] clamps its channels, so offset
//! LCH values that fall outside the sRGB gamut still yield a renderable
//! color.

use crate::color::{clamp, modulo, round_hue, round_to, Hsl, Lab, Lch, Rgb, Xyz};
use crate::parse::parse;

/// Text color used over light swatches.
pub const DARK_TEXT: &str = "#0f172a";

/// Text color used over dark swatches.
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// D65 reference white.
const WHITE_X: f64 = 0.950_47;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.088_83;

/// Linear sRGB to XYZ (D65).
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

/// XYZ (D65) to linear sRGB.
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

/// CIE f(t) breakpoint, (6/29)^3.
const EPSILON: f64 = 216.0 / 24_389.0;
/// Slope of the linear segment of f(t), (29/6)^2 / 3.
const KAPPA_SLOPE: f64 = 841.0 / 108.0;
/// Offset of the linear segment of f(t).
const OFFSET: f64 = 4.0 / 29.0;
/// Breakpoint of f(t) on the output side, 6/29.
const DELTA: f64 = 6.0 / 29.0;

// ============================================================================
// Hex
// ============================================================================

/// Format as `#RRGGBB` with uppercase digits.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

// ============================================================================
// HSL
// ============================================================================

/// Convert to HSL. Achromatic colors get hue 0.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(modulo(sector * 60.0, 360.0), s, l)
}

/// Convert HSL to RGB. Hue wraps; saturation and lightness are clamped to
/// `[0, 1]`.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = modulo(hsl.h, 360.0) / 360.0;
    let s = clamp(hsl.s, 0.0, 1.0);
    let l = clamp(hsl.l, 0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::from_channels(r * 255.0, g * 255.0, b * 255.0)
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert HSL straight to a hex string.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

// ============================================================================
// LCH
// ============================================================================

/// Convert to CIE LCh. `l`, `c` and `h` are rounded to two decimals; hue
/// is 0 when the rounded chroma is 0.
#[must_use]
pub fn rgb_to_lch(rgb: Rgb) -> Lch {
    let lch = lab_to_lch(xyz_to_lab(rgb_to_xyz(rgb)));
    let c = round_to(lch.c, 2);
    let h = if c == 0.0 { 0.0 } else { round_hue(lch.h) };
    Lch::new(round_to(lch.l, 2), c, h)
}

/// Convert CIE LCh back to RGB, clamping out-of-gamut results.
#[must_use]
pub fn lch_to_rgb(lch: Lch) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lch_to_lab(lch)))
}

/// Convert LCH straight to a hex string.
#[must_use]
pub fn lch_to_hex(lch: Lch) -> String {
    rgb_to_hex(lch_to_rgb(lch))
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        t * KAPPA_SLOPE + OFFSET
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t.powi(3)
    } else {
        (t - OFFSET) / KAPPA_SLOPE
    }
}

fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// sRGB to XYZ through linear light.
#[must_use]
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let [x, y, z] = mul(&RGB_TO_XYZ, rgb.to_unit().map(srgb_to_linear));
    Xyz { x, y, z }
}

/// XYZ to sRGB, gamma-encoding and clamping each channel.
#[must_use]
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let [r, g, b] = mul(&XYZ_TO_RGB, [xyz.x, xyz.y, xyz.z])
        .map(|c| clamp(linear_to_srgb(c), 0.0, 1.0) * 255.0);
    Rgb::from_channels(r, g, b)
}

/// XYZ to Lab relative to the D65 white.
#[must_use]
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / WHITE_X);
    let fy = lab_f(xyz.y / WHITE_Y);
    let fz = lab_f(xyz.z / WHITE_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Lab to XYZ relative to the D65 white.
#[must_use]
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    Xyz {
        x: lab_f_inv(fx) * WHITE_X,
        y: lab_f_inv(fy) * WHITE_Y,
        z: lab_f_inv(fz) * WHITE_Z,
    }
}

/// Lab to LCh, hue normalized into `[0, 360)`. Unrounded.
#[must_use]
pub fn lab_to_lch(lab: Lab) -> Lch {
    let c = lab.a.hypot(lab.b);
    let h = modulo(lab.b.atan2(lab.a).to_degrees(), 360.0);
    Lch::new(lab.l, c, h)
}

/// LCh to Lab.
#[must_use]
pub fn lch_to_lab(lch: Lch) -> Lab {
    let (sin, cos) = lch.h.to_radians().sin_cos();
    Lab {
        l: lch.l,
        a: lch.c * cos,
        b: lch.c * sin,
    }
}

// ============================================================================
// Contrast
// ============================================================================

/// Pick a readable text color for a swatch: [`DARK_TEXT`] when the YIQ
/// luminance of `hex` is at least 128, else [`LIGHT_TEXT`].
///
/// `hex` goes through the total parser, so any CSS color string works.
#[must_use]
pub fn ideal_text_color(hex: &str) -> &'static str {
    let Rgb { r, g, b } = parse(hex);
    let yiq = f64::from(u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000.0;
    if yiq >= 128.0 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

// ============================================================================
// Trait conversions
// ============================================================================

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

impl From<Rgb> for Lch {
    fn from(rgb: Rgb) -> Self {
        rgb_to_lch(rgb)
    }
}

impl From<Lch> for Rgb {
    fn from(lch: Lch) -> Self {
        lch_to_rgb(lch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rgb_to_hex_uppercase() {
        assert_eq!(rgb_to_hex(Rgb::new(0, 123, 255)), "#007BFF");
        assert_eq!(rgb_to_hex(Rgb::new(10, 171, 205)), "#0AABCD");
    }

    #[test]
    fn test_rgb_to_hsl_blue_scenario() {
        let hsl = rgb_to_hsl(Rgb::new(0x00, 0x7B, 0xFF));
        assert_abs_diff_eq!(hsl.h, 211.06, epsilon = 0.01);
        assert_abs_diff_eq!(hsl.s, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hsl.l, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        let hsl = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert_abs_diff_eq!(hsl.l, 128.0 / 255.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rgb_to_hsl_red_branch_wraps() {
        // max == r with g < b lands in the last sector.
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 128));
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "hue {}", hsl.h);
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 1.0, 0.5)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 1.0, 0.5)), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(360.0, 1.0, 0.5)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_hsl_to_rgb_gray_and_negative_hue() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 0.5)), Rgb::new(128, 128, 128));
        assert_eq!(
            hsl_to_rgb(Hsl::new(-120.0, 1.0, 0.5)),
            hsl_to_rgb(Hsl::new(240.0, 1.0, 0.5))
        );
    }

    #[test]
    fn test_hsl_to_rgb_clamps_out_of_range() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 2.0, 1.5)), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, -1.0, -0.5)), Rgb::BLACK);
    }

    #[test]
    fn test_rgb_to_lch_reference_values() {
        let white = rgb_to_lch(Rgb::WHITE);
        assert_abs_diff_eq!(white.l, 100.0, epsilon = 0.01);
        assert_eq!(white.c, 0.0);
        assert_eq!(white.h, 0.0);

        let black = rgb_to_lch(Rgb::BLACK);
        assert_eq!(black.l, 0.0);
        assert_eq!(black.c, 0.0);

        let red = rgb_to_lch(Rgb::new(255, 0, 0));
        assert_abs_diff_eq!(red.l, 53.24, epsilon = 0.05);
        assert_abs_diff_eq!(red.c, 104.55, epsilon = 0.1);
        assert_abs_diff_eq!(red.h, 40.0, epsilon = 0.1);
    }

    #[test]
    fn test_rgb_to_lch_two_decimals() {
        let lch = rgb_to_lch(Rgb::new(12, 200, 77));
        for v in [lch.l, lch.c, lch.h] {
            assert_eq!(v, round_to(v, 2));
        }
    }

    #[test]
    fn test_rgb_to_lch_blue_hue_exact() {
        let lch = rgb_to_lch(Rgb::new(0, 123, 255));
        assert_eq!(lch.h, 286.68);
        assert_eq!(format!("{}", lch.h), "286.68");
    }

    #[test]
    fn test_lch_roundtrip_primaries() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(0, 123, 255),
            Rgb::BLACK,
            Rgb::WHITE,
        ] {
            let back = lch_to_rgb(rgb_to_lch(rgb));
            assert!(back.r.abs_diff(rgb.r) <= 1, "{rgb:?} -> {back:?}");
            assert!(back.g.abs_diff(rgb.g) <= 1, "{rgb:?} -> {back:?}");
            assert!(back.b.abs_diff(rgb.b) <= 1, "{rgb:?} -> {back:?}");
        }
    }

    #[test]
    fn test_lch_to_rgb_out_of_gamut_clamps() {
        // Far outside sRGB: still a valid color.
        let rgb = lch_to_rgb(Lch::new(100.0, 150.0, 270.0));
        assert_eq!(rgb_to_hex(rgb).len(), 7);
        assert_eq!(lch_to_rgb(Lch::new(-20.0, 0.0, 0.0)), Rgb::BLACK);
        assert_eq!(lch_to_rgb(Lch::new(120.0, 0.0, 0.0)), Rgb::WHITE);
    }

    #[test]
    fn test_lab_lch_hue_normalized() {
        let lch = lab_to_lch(Lab { l: 50.0, a: 10.0, b: -10.0 });
        assert_abs_diff_eq!(lch.h, 315.0, epsilon = 1e-9);
        let lab = lch_to_lab(lch);
        assert_abs_diff_eq!(lab.a, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lab.b, -10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_xyz_white_point() {
        let xyz = rgb_to_xyz(Rgb::WHITE);
        assert_abs_diff_eq!(xyz.x, WHITE_X, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz.y, WHITE_Y, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz.z, WHITE_Z, epsilon = 1e-4);
    }

    #[test]
    fn test_ideal_text_color() {
        assert_eq!(ideal_text_color("#000000"), LIGHT_TEXT);
        assert_eq!(ideal_text_color("#FFFFFF"), DARK_TEXT);
        // YIQ of #808080 is exactly 128.
        assert_eq!(ideal_text_color("#808080"), DARK_TEXT);
        assert_eq!(ideal_text_color("#7F7F7F"), LIGHT_TEXT);
    }

    #[test]
    fn test_from_impls() {
        let rgb = Rgb::new(0, 123, 255);
        let hsl: Hsl = rgb.into();
        assert_eq!(Rgb::from(hsl), rgb);
        let lch: Lch = rgb.into();
        let back: Rgb = lch.into();
        assert!(back.g.abs_diff(rgb.g) <= 1);
    }
}
