use crate::clamp::{calculate_clamp, round_value, ClampInput, RelativeTo};
use crate::error::{Result, ScaleError};
use serde::{Deserialize, Serialize};

/// Fluid space scale definition, sizes and widths in px
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceScaleConfig {
    pub min_width: f64,
    pub max_width: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Multipliers above the base size
    #[serde(default)]
    pub positive_steps: Vec<f64>,
    /// Multipliers below the base size
    #[serde(default)]
    pub negative_steps: Vec<f64>,
    /// Extra pairs such as `"xs-l"`
    #[serde(default)]
    pub custom_sizes: Vec<String>,
    #[serde(default)]
    pub relative_to: RelativeTo,
    #[serde(default)]
    pub use_px: bool,
}

impl SpaceScaleConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("minWidth", self.min_width),
            ("maxWidth", self.max_width),
            ("minSize", self.min_size),
            ("maxSize", self.max_size),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ScaleError::NonFinite(name));
        }
        if self
            .positive_steps
            .iter()
            .chain(&self.negative_steps)
            .any(|m| !m.is_finite())
        {
            return Err(ScaleError::NonFinite("steps"));
        }
        if self.min_width >= self.max_width {
            return Err(ScaleError::InvalidViewport {
                min_width: self.min_width,
                max_width: self.max_width,
            });
        }
        Ok(())
    }

    fn clamp(&self, min_size: f64, max_size: f64) -> String {
        calculate_clamp(&ClampInput {
            min_size,
            max_size,
            min_width: self.min_width,
            max_width: self.max_width,
            use_px: self.use_px,
            relative_to: self.relative_to,
        })
    }
}

/// One size or pair of a space scale; sizes are whole pixels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceSize {
    pub label: String,
    pub min_size: f64,
    pub max_size: f64,
    pub clamp: String,
}

/// Full space scale
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceScale {
    /// Smallest to largest
    pub sizes: Vec<SpaceSize>,
    /// Requested `customSizes` that name two known sizes
    pub custom_pairs: Vec<SpaceSize>,
    /// Each size paired with the next larger one
    pub one_up_pairs: Vec<SpaceSize>,
}

impl SpaceScale {
    /// Sizes, then custom pairs, then one-up pairs
    pub fn iter(&self) -> impl Iterator<Item = &SpaceSize> {
        self.sizes
            .iter()
            .chain(&self.custom_pairs)
            .chain(&self.one_up_pairs)
    }
}

fn space_label(step: i32) -> String {
    match step {
        0 => "s".to_string(),
        1 => "m".to_string(),
        2 => "l".to_string(),
        3 => "xl".to_string(),
        -1 => "xs".to_string(),
        n if n > 3 => format!("{}xl", n - 2),
        n => format!("{}xs", n.unsigned_abs()),
    }
}

/// Half-up rounding to whole pixels
fn round_px(n: f64) -> f64 {
    (n + 0.5).floor()
}

fn space_size(config: &SpaceScaleConfig, multiplier: f64, step: i32) -> SpaceSize {
    let min_size = round_px(config.min_size * multiplier);
    let max_size = round_px(config.max_size * multiplier);
    SpaceSize {
        label: space_label(step),
        min_size: round_value(min_size),
        max_size: round_value(max_size),
        clamp: config.clamp(min_size, max_size),
    }
}

fn pair(config: &SpaceScaleConfig, from: &SpaceSize, to: &SpaceSize) -> SpaceSize {
    SpaceSize {
        label: format!("{}-{}", from.label, to.label),
        min_size: from.min_size,
        max_size: to.max_size,
        clamp: config.clamp(from.min_size, to.max_size),
    }
}

/// Compute sizes and pairs.
///
/// Entries of `customSizes` that are not `a-b` or name an unknown size are skipped.
pub fn calculate_space_scale(config: &SpaceScaleConfig) -> Result<SpaceScale> {
    config.validate()?;

    let mut positive = config.positive_steps.clone();
    positive.sort_by(f64::total_cmp);
    let mut negative = config.negative_steps.clone();
    negative.sort_by(|a, b| b.total_cmp(a));

    let mut sizes: Vec<SpaceSize> = negative
        .iter()
        .zip(1..)
        .map(|(&multiplier, i)| space_size(config, multiplier, -i))
        .collect();
    sizes.reverse();
    sizes.push(space_size(config, 1.0, 0));
    sizes.extend(
        positive
            .iter()
            .zip(1..)
            .map(|(&multiplier, i)| space_size(config, multiplier, i)),
    );

    let one_up_pairs = sizes
        .windows(2)
        .map(|w| pair(config, &w[0], &w[1]))
        .collect();

    let mut custom_pairs = Vec::new();
    for requested in &config.custom_sizes {
        let Some((from, to)) = requested
            .split_once('-')
            .filter(|(a, b)| !a.is_empty() && !b.is_empty())
        else {
            log::warn!("Skipping custom size pair {requested:?}: expected two labels joined by '-'");
            continue;
        };
        let find = |label: &str| sizes.iter().find(|s| s.label == label);
        if let (Some(from), Some(to)) = (find(from), find(to)) {
            custom_pairs.push(pair(config, from, to));
        }
    }

    Ok(SpaceScale {
        sizes,
        custom_pairs,
        one_up_pairs,
    })
}
