//! CSS-style color string parsing.
//!
//! # Syntax
//!
//! ```text
//! #rgb  rgb  #rrggbb  rrggbb          hex, any case
//! rgb(r, g, b)  rgba(r g b / a)       integers or percentages
//! hsl(h, s%, l%)  hsla(h s l / a)     hue in degrees, s/l as % or fractions
//! ```
//!
//! Components may be separated by commas, slashes or whitespace. Alpha
//! components are accepted and ignored.
//!
//! [`parse`] is total: anything it does not recognize becomes
//! [`FALLBACK_COLOR`]. [`try_parse`] is the strict variant.

use std::str::FromStr;

use tracing::debug;

use crate::color::{Hsl, Rgb};
use crate::convert::hsl_to_rgb;
use crate::error::{Error, Result};

/// Returned by [`parse`] for unrecognized input.
pub const FALLBACK_COLOR: Rgb = Rgb::new(26, 164, 255);

/// Parse a color string, falling back to [`FALLBACK_COLOR`].
///
/// # Example
///
/// ```rust
/// use palette_gen::color::Rgb;
/// use palette_gen::parse::{parse, FALLBACK_COLOR};
///
/// assert_eq!(parse("f0a"), Rgb::new(0xFF, 0x00, 0xAA));
/// assert_eq!(parse("rgb(50%, 0, 100%)"), Rgb::new(128, 0, 255));
/// assert_eq!(parse("not-a-color"), FALLBACK_COLOR);
/// ```
#[must_use]
pub fn parse(input: &str) -> Rgb {
    match try_parse(input) {
        Ok(rgb) => rgb,
        Err(err) => {
            debug!(input, %err, "unrecognized color, using fallback");
            FALLBACK_COLOR
        }
    }
}

/// Parse a color string, reporting unrecognized input as an error.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] when no supported syntax matches.
pub fn try_parse(input: &str) -> Result<Rgb> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(invalid(input));
    }

    if let Some(rgb) = parse_hex(&s) {
        return Ok(rgb);
    }

    if let Some(args) = functional_args(&s, "rgba(", "rgb(") {
        return parse_rgb_args(&args).ok_or_else(|| invalid(input));
    }

    if let Some(args) = functional_args(&s, "hsla(", "hsl(") {
        return parse_hsl_args(&args).ok_or_else(|| invalid(input));
    }

    Err(invalid(input))
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        try_parse(s)
    }
}

fn invalid(input: &str) -> Error {
    Error::InvalidColor(input.to_string())
}

/// `#rgb`, `#rrggbb`, with or without the `#`.
fn parse_hex(s: &str) -> Option<Rgb> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return None,
    };

    let num = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Rgb::new(
        ((num >> 16) & 0xFF) as u8,
        ((num >> 8) & 0xFF) as u8,
        (num & 0xFF) as u8,
    ))
}

/// Split the argument list of `name(...)` on commas, slashes and
/// whitespace. `long` is tried before `short` (`rgba(` before `rgb(`).
fn functional_args<'a>(s: &'a str, long: &str, short: &str) -> Option<Vec<&'a str>> {
    let inner = s
        .strip_prefix(long)
        .or_else(|| s.strip_prefix(short))?
        .strip_suffix(')')?;
    if inner.contains(')') {
        return None;
    }

    Some(
        inner
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect(),
    )
}

fn parse_rgb_args(args: &[&str]) -> Option<Rgb> {
    let &[r, g, b, ..] = args else {
        return None;
    };
    Some(Rgb::from_channels(
        rgb_component(r)?,
        rgb_component(g)?,
        rgb_component(b)?,
    ))
}

/// Integer channel, or a percentage of 255.
fn rgb_component(v: &str) -> Option<f64> {
    match v.strip_suffix('%') {
        Some(pct) => Some((number(pct)? * 255.0 / 100.0).round()),
        None => Some(number(v)?.round()),
    }
}

fn parse_hsl_args(args: &[&str]) -> Option<Rgb> {
    let &[h, s, l, ..] = args else {
        return None;
    };
    let h = number(h.strip_suffix("deg").unwrap_or(h))?;
    Some(hsl_to_rgb(Hsl::new(h, fraction(s)?, fraction(l)?)))
}

/// Percentage (`50%`) or bare fraction (`0.5`).
fn fraction(v: &str) -> Option<f64> {
    match v.strip_suffix('%') {
        Some(pct) => Some(number(pct)? / 100.0),
        None => number(v),
    }
}

fn number(v: &str) -> Option<f64> {
    v.parse::<f64>().ok().filter(|n| n.is_finite())
}
