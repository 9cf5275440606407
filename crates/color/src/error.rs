use thiserror::Error;

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors that can occur while reading a color
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Input was empty or whitespace only
    #[error("Empty color value")]
    Empty,

    /// Hex notation with an unsupported digit count or non-hex characters
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// A color function we do not understand
    #[error("Unsupported color function: {0}")]
    UnsupportedFunction(String),

    /// A recognized function with malformed arguments
    #[error("Invalid arguments for {function}(): {reason}")]
    InvalidArguments { function: String, reason: String },

    /// Neither a function, a hex value nor a known color keyword
    #[error("Unknown color: {0}")]
    Unknown(String),
}

impl ColorError {
    /// Create an invalid arguments error
    pub fn invalid_arguments(function: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            function: function.into(),
            reason: reason.into(),
        }
    }
}
