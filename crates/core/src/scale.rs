//! Glue between the fluid-scale calculator and token naming.

use crate::error::{ForgeError, Result};
use crate::naming::validate_name;
use cssforge_fluid::{
    calculate_space_scale, calculate_type_scale, LabelStyle, SpaceScaleConfig, TypeScaleConfig,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Type scale definition plus an optional variable-name prefix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidTypeInput {
    #[serde(flatten)]
    pub scale: TypeScaleConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Space scale definition plus an optional variable-name prefix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidSpaceInput {
    #[serde(flatten)]
    pub scale: SpaceScaleConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeScaleSettings {
    /// Calculator label (step number or t-shirt size) → emitted label
    pub custom_label: Option<IndexMap<String, String>>,
}

impl TypeScaleSettings {
    fn relabel(&self, step: i32, default: &str) -> String {
        let Some(labels) = &self.custom_label else {
            return default.to_string();
        };
        labels
            .get(&step.to_string())
            .or_else(|| labels.get(&LabelStyle::Tshirt.label(step)))
            .or_else(|| labels.get(default))
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

/// One labeled `clamp()` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleStep {
    pub label: String,
    pub clamp: String,
}

/// A calculated scale ready for registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluidScale {
    /// Variable-name segment: `{scale}-{prefix}` or `{scale}`
    pub segment: String,
    pub steps: Vec<ScaleStep>,
}

fn segment(name: &str, prefix: Option<&str>) -> Result<String> {
    match prefix {
        Some(prefix) => {
            validate_name(prefix)?;
            Ok(format!("{name}-{prefix}"))
        }
        None => Ok(name.to_string()),
    }
}

/// Steps ordered from the largest to the smallest size
pub fn fluid_type_scale(
    name: &str,
    input: &FluidTypeInput,
    settings: &TypeScaleSettings,
) -> Result<FluidScale> {
    let segment = segment(name, input.prefix.as_deref())?;
    let steps = calculate_type_scale(&input.scale)
        .map_err(|source| ForgeError::Scale {
            scale: name.to_string(),
            source,
        })?
        .into_iter()
        .map(|step| {
            let label = settings.relabel(step.step, &step.label);
            validate_name(&label)?;
            Ok(ScaleStep {
                label,
                clamp: step.clamp,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Type scale {name}: {} steps", steps.len());
    Ok(FluidScale { segment, steps })
}

/// Sizes, then custom pairs, then one-up pairs
pub fn fluid_space_scale(name: &str, input: &FluidSpaceInput) -> Result<FluidScale> {
    let segment = segment(name, input.prefix.as_deref())?;
    let scale = calculate_space_scale(&input.scale).map_err(|source| ForgeError::Scale {
        scale: name.to_string(),
        source,
    })?;
    let steps: Vec<ScaleStep> = scale
        .iter()
        .map(|size| ScaleStep {
            label: size.label.clone(),
            clamp: size.clamp.clone(),
        })
        .collect();

    log::debug!("Space scale {name}: {} steps", steps.len());
    Ok(FluidScale { segment, steps })
}
