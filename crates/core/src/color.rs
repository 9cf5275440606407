//! Color values as written in configuration, canonicalized to OKLCH text.

use crate::error::{ForgeError, Result};
use cssforge_fluid::format_number;
use serde::{Deserialize, Serialize};

/// A palette leaf: a raw CSS color or one structured notation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Any CSS color string: `"#000"`, `"blue"`, `"oklch(100% 0 0)"`
    Css(String),
    /// `{ "hex": … }`, `{ "rgb": … }`, `{ "hsl": … }` or `{ "oklch": … }`
    Notation(ColorNotation),
}

/// Exactly one of the supported notations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorNotation {
    Hex(String),
    Rgb(Channels),
    Hsl(Channels),
    Oklch(Channels),
}

/// Channels as a numeric triplet or as a complete CSS function string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Channels {
    Triplet([f64; 3]),
    Css(String),
}

impl ColorValue {
    /// The CSS color string handed to the parser
    pub fn css_text(&self) -> String {
        match self {
            ColorValue::Css(css) => css.clone(),
            ColorValue::Notation(notation) => notation.css_text(),
        }
    }
}

impl ColorNotation {
    pub fn css_text(&self) -> String {
        match self {
            ColorNotation::Hex(hex) => hex.clone(),
            ColorNotation::Rgb(Channels::Triplet([r, g, b])) => format!("rgb({r},{g},{b})"),
            ColorNotation::Hsl(Channels::Triplet([h, s, l])) => format!("hsl({h}deg {s}% {l}%)"),
            ColorNotation::Oklch(Channels::Triplet([l, c, h])) => format!("oklch({l} {c} {h})"),
            ColorNotation::Rgb(Channels::Css(css))
            | ColorNotation::Hsl(Channels::Css(css))
            | ColorNotation::Oklch(Channels::Css(css)) => css.clone(),
        }
    }
}

impl From<&str> for ColorValue {
    fn from(css: &str) -> Self {
        ColorValue::Css(css.to_string())
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn channel(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Canonical `oklch(L% C H[ / A%])` text for any supported color value.
///
/// Lightness is a percentage with 3 decimals, chroma and hue have 5 decimals, missing channels
/// print as `0` and an opaque alpha is omitted.
pub fn to_oklch(value: &ColorValue) -> Result<String> {
    let css = value.css_text();
    let color = cssforge_color::to_oklch(&css).map_err(|e| ForgeError::invalid_color(&css, e))?;

    let lightness = round_to(round_to(channel(color.lightness), 5) * 100.0, 3);
    let chroma = round_to(channel(color.chroma), 5);
    let hue = round_to(channel(color.hue), 5);

    let alpha = if color.alpha == 1.0 {
        String::new()
    } else {
        let percent = round_to(round_to(channel(color.alpha), 3) * 100.0, 3);
        format!(" / {}%", format_number(percent))
    };

    Ok(format!(
        "oklch({}% {} {}{alpha})",
        format_number(lightness),
        format_number(chroma),
        format_number(hue),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notation(json: &str) -> ColorValue {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_hex_notation() {
        let value = notation(r##"{ "hex": "#FF7F50" }"##);
        assert_eq!(to_oklch(&value).unwrap(), "oklch(73.511% 0.16799 40.24666)");
    }

    #[test]
    fn test_triplet_notations() {
        assert_eq!(
            to_oklch(&notation(r#"{ "rgb": [0, 255, 0] }"#)).unwrap(),
            "oklch(86.644% 0.29483 142.49535)"
        );
        assert_eq!(
            to_oklch(&notation(r#"{ "hsl": [240, 100, 50] }"#)).unwrap(),
            "oklch(45.201% 0.31321 264.05202)"
        );
        assert_eq!(
            to_oklch(&notation(r#"{ "oklch": "oklch(0.7 0.2 270)" }"#)).unwrap(),
            "oklch(70% 0.2 270)"
        );
    }

    #[test]
    fn test_raw_strings() {
        assert_eq!(to_oklch(&"oklch(100% 0 0)".into()).unwrap(), "oklch(100% 0 0)");
        assert_eq!(to_oklch(&"#000".into()).unwrap(), "oklch(0% 0 0)");
        assert_eq!(to_oklch(&"#FFF".into()).unwrap(), "oklch(100% 0 0)");
        assert_eq!(
            to_oklch(&"oklch(14.48% 0 0 / 12%)".into()).unwrap(),
            "oklch(14.48% 0 0 / 12%)"
        );
    }

    #[test]
    fn test_exactly_one_notation() {
        let both = serde_json::from_str::<ColorValue>(r##"{ "hex": "#fff", "rgb": [0, 0, 0] }"##);
        assert!(both.is_err());
        let unknown = serde_json::from_str::<ColorValue>(r#"{ "lab": "lab(50% 0 0)" }"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn test_invalid_color() {
        let err = to_oklch(&"definitely-not-a-color".into()).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidColor { ref input, .. } if input == "definitely-not-a-color"));
    }
}
