//! Pipeline orchestration and output assembly.

use crate::config::ForgeConfig;
use crate::error::{LeafWarning, Result};
use crate::modules::{
    process_colors, process_primitives, process_spacing, process_typography, ModuleOutput,
};
use crate::resolve::{ModuleKind, NamespaceMaps};
use crate::tree::ForgeTree;

const BANNER: &str = "/*____ CSSForge ____*/";

/// Output formats requested from one generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub css: bool,
    pub json: bool,
    pub typescript: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            css: true,
            json: true,
            typescript: true,
        }
    }
}

impl GenerateOptions {
    pub fn css_only() -> Self {
        Self {
            css: true,
            json: false,
            typescript: false,
        }
    }
}

/// Texts produced by [`generate_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub css: Option<String>,
    pub json: Option<String>,
    pub typescript: Option<String>,
    pub warnings: Vec<LeafWarning>,
}

/// Processed modules of one configuration, in processing order
#[derive(Debug, Clone, Default)]
pub struct Forge {
    modules: Vec<(ModuleKind, ModuleOutput)>,
}

impl Forge {
    pub fn module(&self, kind: ModuleKind) -> Option<&ModuleOutput> {
        self.modules
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, output)| output)
    }

    pub fn modules(&self) -> impl Iterator<Item = (ModuleKind, &ModuleOutput)> {
        self.modules.iter().map(|(kind, output)| (*kind, output))
    }

    /// All skipped leaves across modules
    pub fn warnings(&self) -> Vec<LeafWarning> {
        self.modules
            .iter()
            .flat_map(|(_, output)| output.warnings.iter().cloned())
            .collect()
    }

    /// `:root` block with one section per non-empty module, followed by conditional blocks
    pub fn css(&self) -> String {
        let mut chunks = vec![BANNER.to_string(), ":root {".to_string()];
        for (kind, output) in &self.modules {
            if output.css.root.is_empty() {
                continue;
            }
            chunks.push(format!("/*____ {} ____*/", kind.title()));
            chunks.push(output.css.root.clone());
        }
        chunks.push("}".to_string());

        let outside: Vec<&str> = self
            .modules
            .iter()
            .map(|(_, output)| output.css.outside.as_str())
            .filter(|css| !css.is_empty())
            .collect();
        if !outside.is_empty() {
            chunks.push(outside.join("\n"));
        }
        chunks.join("\n")
    }

    /// One tree per module, deep-merged in processing order
    pub fn tree(&self) -> ForgeTree {
        let mut tree = ForgeTree::new();
        for (_, output) in &self.modules {
            tree.merge(ForgeTree::from_map(&output.resolve_map));
        }
        tree
    }
}

/// Runs the module pipeline for one configuration.
///
/// Colors, spacing and typography are independent; primitives read their resolve maps.
/// The first fatal error aborts the run.
pub struct Generator<'a> {
    config: &'a ForgeConfig,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a ForgeConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Forge> {
        let colors = self.config.colors.as_ref().map(process_colors).transpose()?;
        let spacing = self.config.spacing.as_ref().map(process_spacing).transpose()?;
        let typography = self
            .config
            .typography
            .as_ref()
            .map(process_typography)
            .transpose()?;

        let primitives = match &self.config.primitives {
            Some(primitives) => {
                let maps = NamespaceMaps {
                    colors: colors.as_ref().map(|o| &o.resolve_map),
                    typography: typography.as_ref().map(|o| &o.resolve_map),
                    spacing: spacing.as_ref().map(|o| &o.resolve_map),
                };
                Some(process_primitives(primitives, &maps)?)
            }
            None => None,
        };

        let mut outputs = [colors, spacing, typography, primitives];
        let modules: Vec<_> = ModuleKind::ORDER
            .into_iter()
            .zip(outputs.iter_mut())
            .filter_map(|(kind, output)| output.take().map(|output| (kind, output)))
            .collect();

        for (kind, output) in &modules {
            for warning in &output.warnings {
                log::warn!("Skipped {} token {warning}", kind.as_str());
            }
        }
        log::debug!("Generated {} modules", modules.len());
        Ok(Forge { modules })
    }

    pub fn generate_css(&self) -> Result<String> {
        Ok(self.run()?.css())
    }

    pub fn generate_json(&self) -> Result<String> {
        self.run()?.tree().to_json()
    }

    pub fn generate_typescript(&self) -> Result<String> {
        self.run()?.tree().to_typescript()
    }

    /// Produce the requested formats from a single pipeline run
    pub fn generate(&self, options: GenerateOptions) -> Result<Generated> {
        let forge = self.run()?;
        let css = options.css.then(|| forge.css());
        let (json, typescript) = if options.json || options.typescript {
            let tree = forge.tree();
            let json = options.json.then(|| tree.to_json()).transpose()?;
            let typescript = options.typescript.then(|| tree.to_typescript()).transpose()?;
            (json, typescript)
        } else {
            (None, None)
        };
        Ok(Generated {
            css,
            json,
            typescript,
            warnings: forge.warnings(),
        })
    }
}

pub fn generate_css(config: &ForgeConfig) -> Result<String> {
    Generator::new(config).generate_css()
}

pub fn generate_json(config: &ForgeConfig) -> Result<String> {
    Generator::new(config).generate_json()
}

pub fn generate_typescript(config: &ForgeConfig) -> Result<String> {
    Generator::new(config).generate_typescript()
}

pub fn generate_all(config: &ForgeConfig, options: GenerateOptions) -> Result<Generated> {
    Generator::new(config).generate(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config() {
        let config = ForgeConfig::default();
        assert_eq!(generate_css(&config).unwrap(), "/*____ CSSForge ____*/\n:root {\n}");
        assert_eq!(generate_json(&config).unwrap(), "{}");
        assert_eq!(
            generate_typescript(&config).unwrap(),
            "export const cssForge = {} as const;"
        );
    }

    #[test]
    fn test_module_order_and_headers() {
        let config = ForgeConfig::from_json_str(
            r#"{
                "typography": { "weight": { "arial": { "value": { "bold": "700" } } } },
                "spacing": { "custom": { "size": { "value": { "1": "16px" } } } }
            }"#,
        )
        .unwrap();
        assert_eq!(
            generate_css(&config).unwrap(),
            "/*____ CSSForge ____*/\n:root {\n\
             /*____ Spacing ____*/\n--spacing-size-1: 1rem;\n\
             /*____ Typography ____*/\n--typography-weight-arial-bold: 700;\n}"
        );
    }

    #[test]
    fn test_options_select_outputs() {
        let config = ForgeConfig::default();
        let generated = generate_all(&config, GenerateOptions::css_only()).unwrap();
        assert!(generated.css.is_some());
        assert!(generated.json.is_none());
        assert!(generated.typescript.is_none());
        assert!(generated.warnings.is_empty());
    }
}
