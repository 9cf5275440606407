use thiserror::Error;

/// Result type for scale calculations
pub type Result<T> = std::result::Result<T, ScaleError>;

/// Errors raised by scale configuration validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// The viewport range is empty or inverted
    #[error("Invalid viewport range: minWidth={min_width}, maxWidth={max_width}")]
    InvalidViewport { min_width: f64, max_width: f64 },

    /// A numeric input is NaN or infinite
    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),

    /// More steps requested than a scale may have
    #[error("Too many steps for {field}: {count} (at most {max})")]
    TooManySteps {
        field: &'static str,
        count: u32,
        max: u32,
    },
}
