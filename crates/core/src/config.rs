use crate::error::{ForgeError, Result};
use crate::modules::{ColorsConfig, PrimitivesConfig, SpacingConfig, TypographyConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete token configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primitives: Option<PrimitivesConfig>,
}

impl ForgeConfig {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a `.json` or `.toml` file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match format.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => {
                return Err(ForgeError::config(format!(
                    "Unsupported configuration file {}: expected .json or .toml",
                    path.display()
                )))
            }
        };
        log::debug!("Loading configuration from {}", path.display());
        parse(&std::fs::read_to_string(path)?)
    }

    /// No section configured
    pub fn is_empty(&self) -> bool {
        self.colors.is_none()
            && self.typography.is_none()
            && self.spacing.is_none()
            && self.primitives.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = ForgeConfig::from_json_str("{}").unwrap();
        assert!(config.is_empty());
        assert_eq!(config, ForgeConfig::default());
    }

    #[test]
    fn test_toml_keeps_key_order() {
        let config = ForgeConfig::from_toml_str(
            r##"
            [colors.palette.value.simple.value]
            white = "#FFF"
            black = "#000"
            gray = { hex = "#808080" }
            "##,
        )
        .unwrap();
        let palette = config.colors.unwrap().palette.unwrap();
        let keys: Vec<_> = palette.value["simple"].value.keys().cloned().collect();
        assert_eq!(keys, ["white", "black", "gray"]);
    }

    #[test]
    fn test_structured_color_needs_exactly_one_notation() {
        let result = ForgeConfig::from_json_str(
            r##"{ "colors": { "palette": { "value": { "x": { "value": {
                "1": { "hex": "#FFF", "rgb": [0, 0, 0] }
            } } } } } }"##,
        );
        assert!(matches!(result, Err(ForgeError::Json(_))));
    }
}
