//! Fluid space scales and custom spacing scales.

use super::ModuleOutput;
use crate::conditional::CssChunks;
use crate::error::Result;
use crate::naming::{css_variable, validate_name};
use crate::resolve::{build_path, build_step_path, ResolveMap};
use crate::scale::{fluid_space_scale, FluidSpaceInput};
use crate::units::PixelSettings;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const SPACING: &str = "spacing";
const SPACING_FLUID: &str = "spacing_fluid";
const CUSTOM: &str = "custom";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingConfig {
    pub fluid: IndexMap<String, FluidSpaceScale>,
    pub custom: IndexMap<String, CustomScale>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidSpaceScale {
    pub value: FluidSpaceInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomScale {
    pub value: IndexMap<String, String>,
    #[serde(default)]
    pub settings: PixelSettings,
}

pub fn process_spacing(config: &SpacingConfig) -> Result<ModuleOutput> {
    let mut out = CssChunks::new();
    let mut map = ResolveMap::new();

    for (name, definition) in &config.fluid {
        validate_name(name)?;
        let scale = fluid_space_scale(name, &definition.value)?;
        for step in scale.steps {
            let path = build_step_path(SPACING_FLUID, &[name], &step.label);
            let css_name = css_variable(&[SPACING_FLUID, &scale.segment, &step.label]);
            if let Some(entry) = map.register(path, css_name, step.clamp) {
                out.push_root(entry.declaration.as_str());
            }
        }
    }

    for (name, scale) in &config.custom {
        validate_name(name)?;
        for (key, raw) in &scale.value {
            validate_name(key)?;
            let path = build_path(SPACING, &[CUSTOM, name, key]);
            let css_name = css_variable(&[SPACING, name, key]);
            if let Some(entry) = map.register(path, css_name, scale.settings.apply(raw)) {
                out.push_root(entry.declaration.as_str());
            }
        }
    }

    log::debug!("Spacing: {} tokens", map.len());
    Ok(ModuleOutput {
        css: out.finish(),
        resolve_map: map,
        warnings: Vec::new(),
    })
}
