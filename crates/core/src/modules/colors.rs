//! Palette, gradients and themes.
//!
//! Gradients and themes may reference palette colors, gradients and earlier themes through their
//! `variables`. References are resolved against the tokens registered so far in this module, so
//! only entries declared earlier can be referenced.

use super::{resolve_aliases, ModuleOutput};
use crate::color::{to_oklch, ColorValue};
use crate::conditional::{comment, ConditionalGroup, CssChunks};
use crate::error::{LeafWarning, Result};
use crate::naming::{css_variable, validate_name};
use crate::resolve::{build_path, NamespaceMaps, ResolveMap, Variables};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const PALETTE: &str = "palette";
const GRADIENTS: &str = "gradients";
const THEME: &str = "theme";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Section<PaletteColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<Section<Gradient>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<IndexMap<String, Theme>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    pub value: IndexMap<String, T>,
}

/// Settings shared by every conditionally wrapped group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupSettings {
    /// Media query or selector wrapping the group, e.g. `@media (prefers-color-scheme: dark)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub value: IndexMap<String, ColorValue>,
    #[serde(default)]
    pub settings: GroupSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub value: IndexMap<String, GradientVariant>,
    #[serde(default)]
    pub settings: GroupSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientVariant {
    pub value: String,
    #[serde(default)]
    pub variables: Variables,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub value: IndexMap<String, ThemeColor>,
    #[serde(default)]
    pub settings: GroupSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColor {
    pub value: IndexMap<String, String>,
    #[serde(default)]
    pub variables: Variables,
}

struct ColorsBuilder {
    out: CssChunks,
    map: ResolveMap,
    warnings: Vec<LeafWarning>,
}

/// Process the colors section.
///
/// Unparsable palette colors are skipped with a warning. Invalid names and unresolvable
/// references abort.
pub fn process_colors(config: &ColorsConfig) -> Result<ModuleOutput> {
    let mut builder = ColorsBuilder {
        out: CssChunks::new(),
        map: ResolveMap::new(),
        warnings: Vec::new(),
    };

    if let Some(palette) = &config.palette {
        builder.palette(palette)?;
    }
    if let Some(gradients) = &config.gradients {
        builder.gradients(gradients)?;
    }
    if let Some(themes) = &config.theme {
        builder.themes(themes)?;
    }

    log::debug!(
        "Colors: {} tokens, {} skipped",
        builder.map.len(),
        builder.warnings.len()
    );
    Ok(ModuleOutput {
        css: builder.out.finish(),
        resolve_map: builder.map,
        warnings: builder.warnings,
    })
}

impl ColorsBuilder {
    fn palette(&mut self, palette: &Section<PaletteColor>) -> Result<()> {
        self.out.push_root(comment("Palette"));
        for (color, entry) in &palette.value {
            validate_name(color)?;
            let mut group = ConditionalGroup::new(entry.settings.condition.as_deref());
            for (variant, value) in &entry.value {
                validate_name(variant)?;
                let path = build_path(PALETTE, &[color, variant]);
                let oklch = match to_oklch(value) {
                    Ok(oklch) => oklch,
                    Err(err) => {
                        log::warn!("Error processing color {color}-{variant}: {err}");
                        self.warnings.push(LeafWarning::new(path, err.to_string()));
                        continue;
                    }
                };
                let name = css_variable(&[PALETTE, color, variant]);
                if let Some(entry) = self.map.register(path, name, oklch) {
                    group.declaration(&mut self.out, &entry.declaration);
                }
            }
            group.finalize(&mut self.out);
        }
        Ok(())
    }

    fn gradients(&mut self, gradients: &Section<Gradient>) -> Result<()> {
        self.out.push_root(comment("Gradients"));
        for (name, gradient) in &gradients.value {
            validate_name(name)?;
            let mut group = ConditionalGroup::new(gradient.settings.condition.as_deref());
            for (variant, definition) in &gradient.value {
                validate_name(variant)?;
                let aliases = resolve_aliases(
                    &definition.variables,
                    &NamespaceMaps::colors(&self.map),
                    &format!("gradient {name}-{variant}"),
                )?;
                let value = aliases.substitute(&definition.value);
                let path = build_path(GRADIENTS, &[name, variant]);
                let css_name = css_variable(&[GRADIENTS, name, variant]);
                if let Some(entry) = self.map.register(path, css_name, value) {
                    group.declaration(&mut self.out, &entry.declaration);
                }
            }
            group.finalize(&mut self.out);
        }
        Ok(())
    }

    fn themes(&mut self, themes: &IndexMap<String, Theme>) -> Result<()> {
        self.out.push_root(comment("Themes"));
        for (name, theme) in themes {
            validate_name(name)?;
            let mut group = ConditionalGroup::new(theme.settings.condition.as_deref());
            group.leading_comment(&mut self.out, &format!("Theme: {name}"));
            for (color, definition) in &theme.value {
                validate_name(color)?;
                group.inner_comment(&mut self.out, color);
                let aliases = resolve_aliases(
                    &definition.variables,
                    &NamespaceMaps::colors(&self.map),
                    &format!("theme color {name}-{color}"),
                )?;
                for (variant, raw) in &definition.value {
                    validate_name(variant)?;
                    let value = aliases.substitute(raw);
                    let path = build_path(THEME, &[name, color, variant]);
                    let css_name = css_variable(&[THEME, name, color, variant]);
                    if let Some(entry) = self.map.register(path, css_name, value) {
                        group.declaration(&mut self.out, &entry.declaration);
                    }
                }
            }
            group.finalize(&mut self.out);
        }
        Ok(())
    }
}
