use serde::{Deserialize, Serialize};

/// Root font size used for px → rem
pub const ROOT_FONT_SIZE: f64 = 16.0;

/// Which container the preferred value is relative to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelativeTo {
    /// `vw`
    #[default]
    ViewportWidth,
    /// `vi`
    Viewport,
    /// `cqi`
    Container,
}

impl RelativeTo {
    pub fn unit(self) -> &'static str {
        match self {
            RelativeTo::ViewportWidth => "vw",
            RelativeTo::Viewport => "vi",
            RelativeTo::Container => "cqi",
        }
    }
}

/// Inputs for one `clamp()` expression, sizes and widths in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampInput {
    pub min_size: f64,
    pub max_size: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub use_px: bool,
    pub relative_to: RelativeTo,
}

/// Round to 4 decimals, halves up
pub fn round_value(n: f64) -> f64 {
    ((n + f64::EPSILON) * 10_000.0 + 0.5).floor() / 10_000.0
}

/// Shortest decimal rendering, never `-0`
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    n.to_string()
}

/// Build `clamp(min, intercept + slope, max)` interpolating between the two widths.
///
/// When the scale shrinks (`min_size > max_size`) the bounds are swapped so the expression stays
/// valid; the slope keeps its sign.
pub fn calculate_clamp(input: &ClampInput) -> String {
    let divider = if input.use_px { 1.0 } else { ROOT_FONT_SIZE };
    let unit = if input.use_px { "px" } else { "rem" };

    let (lower, upper) = if input.min_size > input.max_size {
        (input.max_size, input.min_size)
    } else {
        (input.min_size, input.max_size)
    };

    let slope = (input.max_size / divider - input.min_size / divider)
        / (input.max_width / divider - input.min_width / divider);
    let intersection = -(input.min_width / divider) * slope + input.min_size / divider;

    format!(
        "clamp({}{unit}, {}{unit} + {}{}, {}{unit})",
        format_number(round_value(lower / divider)),
        format_number(round_value(intersection)),
        format_number(round_value(slope * 100.0)),
        input.relative_to.unit(),
        format_number(round_value(upper / divider)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(min_size: f64, max_size: f64) -> ClampInput {
        ClampInput {
            min_size,
            max_size,
            min_width: 320.0,
            max_width: 1280.0,
            use_px: false,
            relative_to: RelativeTo::ViewportWidth,
        }
    }

    #[test]
    fn test_round_value() {
        assert_eq!(round_value(2.083_333_3), 2.0833);
        assert_eq!(round_value(-0.166_666_6), -0.1667);
        assert_eq!(round_value(0.000_05), 0.0001);
        assert_eq!(round_value(1.0), 1.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-0.1667), "-0.1667");
    }

    #[test]
    fn test_growing_clamp() {
        assert_eq!(
            calculate_clamp(&input(4.0, 24.0)),
            "clamp(0.25rem, -0.1667rem + 2.0833vw, 1.5rem)"
        );
    }

    #[test]
    fn test_flat_clamp() {
        assert_eq!(calculate_clamp(&input(0.0, 0.0)), "clamp(0rem, 0rem + 0vw, 0rem)");
    }

    #[test]
    fn test_shrinking_clamp_swaps_bounds() {
        let expr = calculate_clamp(&input(24.0, 4.0));
        assert!(expr.starts_with("clamp(0.25rem, "), "{expr}");
        assert!(expr.ends_with(", 1.5rem)"), "{expr}");
        assert!(expr.contains("-2.0833vw"), "{expr}");
    }

    #[test]
    fn test_px_and_container_units() {
        let expr = calculate_clamp(&ClampInput {
            use_px: true,
            relative_to: RelativeTo::Container,
            ..input(4.0, 24.0)
        });
        assert_eq!(expr, "clamp(4px, -2.6667px + 2.0833cqi, 24px)");
    }
}
