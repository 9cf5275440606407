//! # CSSForge Fluid
//!
//! Fluid type and space scales rendered as CSS `clamp()` expressions.
//!
//! A value grows linearly from its size at `minWidth` to its size at `maxWidth` and is clamped
//! outside that viewport range:
//!
//! ```text
//! clamp(min, intercept + slope·100vw, max)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cssforge_fluid::{calculate_space_scale, SpaceScaleConfig};
//!
//! let config: SpaceScaleConfig = serde_json::from_str(
//!     r#"{ "minSize": 4, "maxSize": 24, "minWidth": 320, "maxWidth": 1280 }"#,
//! ).unwrap();
//! let scale = calculate_space_scale(&config).unwrap();
//! assert_eq!(scale.sizes[0].clamp, "clamp(0.25rem, -0.1667rem + 2.0833vw, 1.5rem)");
//! ```

mod clamp;
mod error;
mod space_scale;
mod type_scale;

pub use clamp::{calculate_clamp, format_number, round_value, ClampInput, RelativeTo, ROOT_FONT_SIZE};
pub use error::{Result, ScaleError};
pub use space_scale::{calculate_space_scale, SpaceScale, SpaceScaleConfig, SpaceSize};
pub use type_scale::{calculate_type_scale, LabelStyle, TypeScaleConfig, TypeStep, MAX_STEPS};
