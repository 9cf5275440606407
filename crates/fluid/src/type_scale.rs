use crate::clamp::{calculate_clamp, round_value, ClampInput, RelativeTo};
use crate::error::{Result, ScaleError};
use serde::{Deserialize, Serialize};

/// Naming scheme for type scale steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `… xl, l, m, s, xs, 2xs …`
    #[default]
    Tshirt,
    /// `… xl, lg, base, sm, xs …`
    Tailwind,
    /// Raw step numbers: `2, 1, 0, -1`
    Utopia,
}

impl LabelStyle {
    pub fn label(self, step: i32) -> String {
        match self {
            LabelStyle::Utopia => step.to_string(),
            LabelStyle::Tshirt => sized_label(step, "m", "l", "s"),
            LabelStyle::Tailwind => sized_label(step, "base", "lg", "sm"),
        }
    }
}

fn sized_label(step: i32, base: &str, one_up: &str, one_down: &str) -> String {
    match step {
        0 => base.to_string(),
        1 => one_up.to_string(),
        -1 => one_down.to_string(),
        2 => "xl".to_string(),
        -2 => "xs".to_string(),
        n if n > 2 => format!("{}xl", n - 1),
        n => format!("{}xs", n.unsigned_abs() - 1),
    }
}

/// Upper bound for `positiveSteps` and `negativeSteps`
pub const MAX_STEPS: u32 = 100;

/// Fluid type scale definition, sizes and widths in px
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScaleConfig {
    pub min_width: f64,
    pub max_width: f64,
    pub min_font_size: f64,
    pub max_font_size: f64,
    pub min_type_scale: f64,
    pub max_type_scale: f64,
    #[serde(default)]
    pub positive_steps: u32,
    #[serde(default)]
    pub negative_steps: u32,
    #[serde(default)]
    pub relative_to: RelativeTo,
    #[serde(default)]
    pub use_px: bool,
    #[serde(default)]
    pub label_style: LabelStyle,
}

impl TypeScaleConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("minWidth", self.min_width),
            ("maxWidth", self.max_width),
            ("minFontSize", self.min_font_size),
            ("maxFontSize", self.max_font_size),
            ("minTypeScale", self.min_type_scale),
            ("maxTypeScale", self.max_type_scale),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ScaleError::NonFinite(name));
        }
        for (field, count) in [
            ("positiveSteps", self.positive_steps),
            ("negativeSteps", self.negative_steps),
        ] {
            if count > MAX_STEPS {
                return Err(ScaleError::TooManySteps {
                    field,
                    count,
                    max: MAX_STEPS,
                });
            }
        }
        if self.min_width >= self.max_width {
            return Err(ScaleError::InvalidViewport {
                min_width: self.min_width,
                max_width: self.max_width,
            });
        }
        Ok(())
    }

    fn size_at(&self, at_max: bool, step: i32) -> f64 {
        let (font_size, scale) = if at_max {
            (self.max_font_size, self.max_type_scale)
        } else {
            (self.min_font_size, self.min_type_scale)
        };
        font_size * scale.powi(step)
    }
}

/// One step of a type scale
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStep {
    pub step: i32,
    pub label: String,
    pub min_font_size: f64,
    pub max_font_size: f64,
    pub clamp: String,
}

/// Steps from the largest down to the smallest: `+n … 1, 0, -1 … -m`
pub fn calculate_type_scale(config: &TypeScaleConfig) -> Result<Vec<TypeStep>> {
    config.validate()?;

    // Bounded by MAX_STEPS in validate
    let positive = config.positive_steps as i32;
    let negative = config.negative_steps as i32;

    Ok((-negative..=positive)
        .rev()
        .map(|step| type_step(config, step))
        .collect())
}

fn type_step(config: &TypeScaleConfig, step: i32) -> TypeStep {
    let min_font_size = config.size_at(false, step);
    let max_font_size = config.size_at(true, step);
    TypeStep {
        step,
        label: config.label_style.label(step),
        min_font_size: round_value(min_font_size),
        max_font_size: round_value(max_font_size),
        clamp: calculate_clamp(&ClampInput {
            min_size: min_font_size,
            max_size: max_font_size,
            min_width: config.min_width,
            max_width: config.max_width,
            use_px: config.use_px,
            relative_to: config.relative_to,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tshirt_labels() {
        let labels: Vec<String> = [5, 4, 3, 2, 1, 0, -1, -2, -3]
            .into_iter()
            .map(|s| LabelStyle::Tshirt.label(s))
            .collect();
        assert_eq!(labels, ["4xl", "3xl", "2xl", "xl", "l", "m", "s", "xs", "2xs"]);
    }

    #[test]
    fn test_tailwind_and_utopia_labels() {
        assert_eq!(LabelStyle::Tailwind.label(0), "base");
        assert_eq!(LabelStyle::Tailwind.label(1), "lg");
        assert_eq!(LabelStyle::Tailwind.label(3), "2xl");
        assert_eq!(LabelStyle::Tailwind.label(-1), "sm");
        assert_eq!(LabelStyle::Tailwind.label(-3), "2xs");
        assert_eq!(LabelStyle::Utopia.label(-2), "-2");
    }

    #[test]
    fn test_rejects_empty_viewport() {
        let config = TypeScaleConfig {
            min_width: 800.0,
            max_width: 800.0,
            min_font_size: 14.0,
            max_font_size: 16.0,
            min_type_scale: 1.2,
            max_type_scale: 1.25,
            positive_steps: 1,
            negative_steps: 0,
            relative_to: RelativeTo::default(),
            use_px: false,
            label_style: LabelStyle::default(),
        };
        assert!(matches!(
            calculate_type_scale(&config),
            Err(ScaleError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_rejects_excessive_step_counts() {
        let config = TypeScaleConfig {
            min_width: 320.0,
            max_width: 1240.0,
            min_font_size: 14.0,
            max_font_size: 16.0,
            min_type_scale: 1.2,
            max_type_scale: 1.25,
            positive_steps: 4_000_000_000,
            negative_steps: 0,
            relative_to: RelativeTo::default(),
            use_px: false,
            label_style: LabelStyle::default(),
        };
        assert_eq!(
            calculate_type_scale(&config),
            Err(ScaleError::TooManySteps {
                field: "positiveSteps",
                count: 4_000_000_000,
                max: MAX_STEPS,
            })
        );

        let at_limit = TypeScaleConfig {
            positive_steps: MAX_STEPS,
            negative_steps: MAX_STEPS,
            ..config
        };
        assert_eq!(calculate_type_scale(&at_limit).unwrap().len(), 201);
    }
}
