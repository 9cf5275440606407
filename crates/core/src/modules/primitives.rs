//! Composite tokens whose properties reference colors, typography and spacing.

use super::{resolve_aliases, ModuleOutput};
use crate::conditional::{comment, CssChunks};
use crate::error::Result;
use crate::naming::{css_variable, validate_name};
use crate::resolve::{build_path, NamespaceMaps, ResolveMap, Variables};
use crate::units::PixelSettings;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const PRIMITIVES: &str = "primitives";

pub type PrimitivesConfig = IndexMap<String, Primitive>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub value: IndexMap<String, PrimitiveVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveVariant {
    /// CSS property → raw value
    pub value: IndexMap<String, String>,
    #[serde(default)]
    pub variables: Variables,
    #[serde(default)]
    pub settings: PixelSettings,
}

/// Process primitives against the already-built maps of the other modules.
///
/// Primitives cannot reference other primitives.
pub fn process_primitives(
    config: &PrimitivesConfig,
    maps: &NamespaceMaps<'_>,
) -> Result<ModuleOutput> {
    let mut out = CssChunks::new();
    let mut map = ResolveMap::new();

    for (name, primitive) in config {
        validate_name(name)?;
        out.push_root(comment(name));
        for (variant, definition) in &primitive.value {
            validate_name(variant)?;
            let aliases =
                resolve_aliases(&definition.variables, maps, &format!("primitive {name}-{variant}"))?;
            for (property, raw) in &definition.value {
                validate_name(property)?;
                let value = aliases.substitute(&definition.settings.apply(raw));
                let path = build_path(PRIMITIVES, &[name, variant, property]);
                let css_name = css_variable(&[name, variant, property]);
                if let Some(entry) = map.register(path, css_name, value) {
                    out.push_root(entry.declaration.as_str());
                }
            }
        }
    }

    log::debug!("Primitives: {} tokens", map.len());
    Ok(ModuleOutput {
        css: out.finish(),
        resolve_map: map,
        warnings: Vec::new(),
    })
}
