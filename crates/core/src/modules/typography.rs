//! Fluid type scales and font weights.

use super::ModuleOutput;
use crate::conditional::CssChunks;
use crate::error::Result;
use crate::naming::{css_variable, validate_name};
use crate::resolve::{build_path, build_step_path, ResolveMap};
use crate::scale::{fluid_type_scale, FluidTypeInput, TypeScaleSettings};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const TYPOGRAPHY: &str = "typography";
const TYPOGRAPHY_FLUID: &str = "typography_fluid";
const WEIGHT: &str = "weight";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyConfig {
    pub fluid: IndexMap<String, FluidTypeScale>,
    pub weight: IndexMap<String, WeightGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidTypeScale {
    pub value: FluidTypeInput,
    #[serde(default)]
    pub settings: TypeScaleSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightGroup {
    pub value: IndexMap<String, String>,
}

pub fn process_typography(config: &TypographyConfig) -> Result<ModuleOutput> {
    let mut out = CssChunks::new();
    let mut map = ResolveMap::new();

    for (name, definition) in &config.fluid {
        validate_name(name)?;
        let scale = fluid_type_scale(name, &definition.value, &definition.settings)?;
        for step in scale.steps {
            let path = build_step_path(TYPOGRAPHY_FLUID, &[name], &step.label);
            let css_name = css_variable(&[TYPOGRAPHY_FLUID, &scale.segment, &step.label]);
            if let Some(entry) = map.register(path, css_name, step.clamp) {
                out.push_root(entry.declaration.as_str());
            }
        }
    }

    for (group, weights) in &config.weight {
        validate_name(group)?;
        for (token, value) in &weights.value {
            validate_name(token)?;
            let path = build_path(TYPOGRAPHY, &[WEIGHT, group, token]);
            let css_name = css_variable(&[TYPOGRAPHY, WEIGHT, group, token]);
            if let Some(entry) = map.register(path, css_name, value.as_str()) {
                out.push_root(entry.declaration.as_str());
            }
        }
    }

    log::debug!("Typography: {} tokens", map.len());
    Ok(ModuleOutput {
        css: out.finish(),
        resolve_map: map,
        warnings: Vec::new(),
    })
}
