use cssforge_fluid::format_number;
use serde::{Deserialize, Serialize};

/// Browser default root font size
pub const DEFAULT_REM_BASE: f64 = 16.0;

/// Per-scale pixel handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PixelSettings {
    /// Convert `px` values to `rem`
    pub px_to_rem: bool,
    /// Root font size in px
    pub rem: f64,
}

impl Default for PixelSettings {
    fn default() -> Self {
        Self {
            px_to_rem: true,
            rem: DEFAULT_REM_BASE,
        }
    }
}

impl PixelSettings {
    /// Apply the conversion if enabled
    pub fn apply(&self, value: &str) -> String {
        if self.px_to_rem {
            px_to_rem(value, self.rem)
        } else {
            value.to_string()
        }
    }
}

/// `"16px"` → `"1rem"` at base 16. Anything that is not a plain px length is returned unchanged.
pub fn px_to_rem(value: &str, rem: f64) -> String {
    let Some(number) = value.strip_suffix("px") else {
        return value.to_string();
    };
    if !(rem.is_finite() && rem > 0.0) {
        log::warn!("Ignoring px to rem conversion with base {rem}");
        return value.to_string();
    }
    match number.trim().parse::<f64>() {
        Ok(px) if px.is_finite() => format!("{}rem", format_number(px / rem)),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_rem() {
        assert_eq!(px_to_rem("16px", 16.0), "1rem");
        assert_eq!(px_to_rem("32px", 16.0), "2rem");
        assert_eq!(px_to_rem("8px", 16.0), "0.5rem");
        assert_eq!(px_to_rem("-4px", 16.0), "-0.25rem");
        assert_eq!(px_to_rem("0px", 16.0), "0rem");
        assert_eq!(px_to_rem("20px", 10.0), "2rem");
    }

    #[test]
    fn test_non_px_passthrough() {
        assert_eq!(px_to_rem("1rem", 16.0), "1rem");
        assert_eq!(px_to_rem("50%", 16.0), "50%");
        assert_eq!(px_to_rem("1px solid var(--c)", 16.0), "1px solid var(--c)");
        assert_eq!(px_to_rem("10px 20px", 16.0), "10px 20px");
        assert_eq!(px_to_rem("16px", 0.0), "16px");
    }

    #[test]
    fn test_settings() {
        assert_eq!(PixelSettings::default().apply("16px"), "1rem");
        let off = PixelSettings {
            px_to_rem: false,
            ..Default::default()
        };
        assert_eq!(off.apply("16px"), "16px");
    }
}
