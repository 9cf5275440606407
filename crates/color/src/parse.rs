use crate::error::{ColorError, Result};
use crate::named;
use crate::space::{Oklch, Srgb};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static FUNCTION_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z]+)\(\s*(.*?)\s*\)$").expect("color function regex"));

/// Percentage reference for OKLCH chroma (`100%` = 0.4)
const OKLCH_CHROMA_REFERENCE: f64 = 0.4;

/// A parsed CSS color, kept in the space it was written in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssColor {
    /// Hex, `rgb()`, `hsl()` or a keyword
    Srgb(Srgb),
    /// `oklch()`, carried through without conversion
    Oklch(Oklch),
}

impl CssColor {
    /// Parse any supported CSS color notation
    pub fn parse(input: &str) -> Result<Self> {
        let value = input.trim().to_ascii_lowercase();
        if value.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).map(Self::Srgb);
        }

        if let Some(captures) = FUNCTION_CALL.captures(&value) {
            let function = &captures[1];
            let arguments = &captures[2];
            return match function {
                "rgb" | "rgba" => parse_rgb(function, arguments).map(Self::Srgb),
                "hsl" | "hsla" => parse_hsl(function, arguments).map(Self::Srgb),
                "oklch" => parse_oklch(arguments).map(Self::Oklch),
                other => Err(ColorError::UnsupportedFunction(other.to_string())),
            };
        }

        named::lookup(&value)
            .map(Self::Srgb)
            .ok_or_else(|| ColorError::Unknown(input.trim().to_string()))
    }

    /// Convert to OKLCH
    pub fn to_oklch(self) -> Oklch {
        match self {
            Self::Srgb(rgb) => rgb.to_oklch(),
            Self::Oklch(oklch) => oklch,
        }
    }
}

impl FromStr for CssColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_hex(digits: &str) -> Result<Srgb> {
    let invalid = || ColorError::InvalidHex(format!("#{digits}"));
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    let mut color = Srgb::from_u8(byte(0)?, byte(2)?, byte(4)?);
    if expanded.len() == 8 {
        color.alpha = f64::from(byte(6)?) / 255.0;
    }
    Ok(color)
}

/// Split `a b c / d` or legacy `a, b, c, d` into channels and an optional alpha
fn split_arguments<'a>(function: &str, arguments: &'a str) -> Result<([&'a str; 3], Option<&'a str>)> {
    let (channels, slash_alpha) = match arguments.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (arguments, None),
    };

    let parts: Vec<&str> = channels
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match (parts.as_slice(), slash_alpha) {
        ([a, b, c], alpha) => Ok(([*a, *b, *c], alpha)),
        ([a, b, c, alpha], None) => Ok(([*a, *b, *c], Some(*alpha))),
        _ => Err(ColorError::invalid_arguments(
            function,
            format!("expected 3 channels, found {}", parts.len()),
        )),
    }
}

fn number(function: &str, token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| {
        ColorError::invalid_arguments(function, format!("`{token}` is not a number"))
    })
}

/// `N%` scaled by `percent_reference / 100`, otherwise the bare number; `none` is zero
fn scaled(function: &str, token: &str, percent_reference: f64) -> Result<f64> {
    if token == "none" {
        return Ok(0.0);
    }
    match token.strip_suffix('%') {
        Some(percent) => Ok(number(function, percent)? / 100.0 * percent_reference),
        None => number(function, token),
    }
}

fn angle(function: &str, token: &str) -> Result<f64> {
    if token == "none" {
        return Ok(f64::NAN);
    }
    let (value, degrees_per_unit) = if let Some(v) = token.strip_suffix("deg") {
        (v, 1.0)
    } else if let Some(v) = token.strip_suffix("grad") {
        (v, 0.9)
    } else if let Some(v) = token.strip_suffix("rad") {
        (v, 180.0 / std::f64::consts::PI)
    } else if let Some(v) = token.strip_suffix("turn") {
        (v, 360.0)
    } else {
        (token, 1.0)
    };
    Ok(number(function, value)? * degrees_per_unit)
}

fn alpha(function: &str, token: Option<&str>) -> Result<f64> {
    token.map_or(Ok(1.0), |t| scaled(function, t, 1.0))
}

fn parse_rgb(function: &str, arguments: &str) -> Result<Srgb> {
    let ([r, g, b], a) = split_arguments(function, arguments)?;
    let channel = |token: &str| -> Result<f64> {
        if token.ends_with('%') {
            scaled(function, token, 1.0)
        } else {
            Ok(scaled(function, token, 1.0)? / 255.0)
        }
    };
    Ok(Srgb::new(channel(r)?, channel(g)?, channel(b)?, alpha(function, a)?))
}

fn parse_hsl(function: &str, arguments: &str) -> Result<Srgb> {
    let ([h, s, l], a) = split_arguments(function, arguments)?;
    let hue = angle(function, h)?;
    let hue = if hue.is_nan() { 0.0 } else { hue };
    // Bare saturation/lightness numbers are percentages as well
    let percent = |token: &str| -> Result<f64> {
        let value = token.strip_suffix('%').unwrap_or(token);
        if value == "none" {
            Ok(0.0)
        } else {
            Ok(number(function, value)? / 100.0)
        }
    };
    Ok(Srgb::from_hsl(hue, percent(s)?, percent(l)?, alpha(function, a)?))
}

fn parse_oklch(arguments: &str) -> Result<Oklch> {
    let function = "oklch";
    let ([l, c, h], a) = split_arguments(function, arguments)?;
    Ok(Oklch::new(
        scaled(function, l, 1.0)?,
        scaled(function, c, OKLCH_CHROMA_REFERENCE)?,
        angle(function, h)?,
        alpha(function, a)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srgb(input: &str) -> Srgb {
        match CssColor::parse(input).unwrap() {
            CssColor::Srgb(c) => c,
            other => panic!("expected sRGB, got {other:?}"),
        }
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(srgb("#FF7F50"), Srgb::from_u8(255, 127, 80));
        assert_eq!(srgb("#000"), Srgb::from_u8(0, 0, 0));
        assert_eq!(srgb("  #fff  "), Srgb::from_u8(255, 255, 255));
        assert_eq!(srgb("#ff000080").alpha, 128.0 / 255.0);
        assert_eq!(srgb("#f008").alpha, 136.0 / 255.0);
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(CssColor::parse("#ff"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(CssColor::parse("#gggggg"), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn test_rgb_forms() {
        assert_eq!(srgb("rgb(0,255,0)"), Srgb::from_u8(0, 255, 0));
        assert_eq!(srgb("rgb(0 255 0)"), Srgb::from_u8(0, 255, 0));
        assert_eq!(srgb("rgba(255, 0, 0, 0.5)").alpha, 0.5);
        assert_eq!(srgb("rgb(100% 0% 0% / 25%)"), Srgb::new(1.0, 0.0, 0.0, 0.25));
    }

    #[test]
    fn test_hsl_forms() {
        let blue = srgb("hsl(240deg 100% 50%)");
        assert!((blue.blue - 1.0).abs() < 1e-12 && blue.red.abs() < 1e-12);
        let same = srgb("hsl(240, 100%, 50%)");
        assert_eq!(blue, same);
        let turn = srgb("hsl(0.5turn 100% 50%)");
        assert!((turn.green - 1.0).abs() < 1e-12 && (turn.blue - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_oklch_passthrough() {
        let parsed = CssColor::parse("oklch(14.48% 0 0 / 12%)").unwrap();
        assert_eq!(parsed, CssColor::Oklch(Oklch::new(0.1448, 0.0, 0.0, 0.12)));

        let parsed = CssColor::parse("oklch(0.7 0.2 270)").unwrap();
        assert_eq!(parsed, CssColor::Oklch(Oklch::new(0.7, 0.2, 270.0, 1.0)));

        let CssColor::Oklch(none_hue) = CssColor::parse("oklch(50% 0 none)").unwrap() else {
            panic!("expected oklch");
        };
        assert!(none_hue.is_achromatic());
    }

    #[test]
    fn test_keywords_and_unknowns() {
        assert_eq!(srgb("Blue"), Srgb::from_u8(0, 0, 255));
        assert!(matches!(CssColor::parse(""), Err(ColorError::Empty)));
        assert!(matches!(CssColor::parse("blurple"), Err(ColorError::Unknown(_))));
        assert!(matches!(
            CssColor::parse("lab(50% 10 10)"),
            Err(ColorError::UnsupportedFunction(f)) if f == "lab"
        ));
        assert!(matches!(
            CssColor::parse("rgb(1 2)"),
            Err(ColorError::InvalidArguments { .. })
        ));
    }
}
