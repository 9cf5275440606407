use cssforge_color::ColorError;
use cssforge_fluid::ScaleError;
use thiserror::Error;

/// Result type for generation
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Errors that abort a generation call
#[derive(Error, Debug)]
pub enum ForgeError {
    /// A token segment is empty, contains a period or is the reserved word `value`
    #[error("Invalid name: {0:?}. Names must be non-empty, must not contain periods and must not be \"value\"")]
    InvalidName(String),

    /// A color could not be parsed
    #[error("Invalid color {input:?}: {source}")]
    InvalidColor {
        input: String,
        #[source]
        source: ColorError,
    },

    /// An alias path is absent from the map of the module that owns its namespace
    #[error("The path {path} could not be resolved. Map contains:{}", list_keys(.available))]
    UnresolvedPath {
        path: String,
        available: Vec<String>,
    },

    /// An alias points at a module that was not configured
    #[error("The {namespace} module must be configured to resolve {path}")]
    MissingNamespace { namespace: String, path: String },

    /// A fluid scale definition was rejected by the calculator
    #[error("Invalid fluid scale {scale}: {source}")]
    Scale {
        scale: String,
        #[source]
        source: ScaleError,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

fn list_keys(keys: &[String]) -> String {
    if keys.is_empty() {
        return " (nothing)".to_string();
    }
    keys.iter().map(|k| format!("\n{k}")).collect()
}

impl ForgeError {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    /// Create an invalid color error
    pub fn invalid_color(input: impl Into<String>, source: ColorError) -> Self {
        Self::InvalidColor {
            input: input.into(),
            source,
        }
    }

    /// Create an unresolved path error listing the searched keys
    pub fn unresolved_path<I, S>(path: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnresolvedPath {
            path: path.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a missing namespace error
    pub fn missing_namespace(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MissingNamespace {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Create an invalid config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// A token that was skipped while its siblings were still emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafWarning {
    /// Path the token would have been registered under
    pub path: String,
    pub message: String,
}

impl LeafWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LeafWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
