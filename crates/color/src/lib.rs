//! # CSSForge Color
//!
//! CSS color parsing and OKLCH conversion.
//!
//! ```text
//! "#FF7F50" | "rgb(…)" | "hsl(…)" | "oklch(…)" | keyword
//!     │
//!     ├──> CssColor::parse ──> Srgb | Oklch
//!     │
//!     └──> to_oklch ──> linear sRGB → XYZ (D65) → LMS → OKLab → OKLCH
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cssforge_color::to_oklch;
//!
//! let coral = to_oklch("#FF7F50").unwrap();
//! assert!((coral.lightness - 0.73511).abs() < 1e-5);
//! ```

mod error;
mod named;
mod parse;
mod space;

pub use error::{ColorError, Result};
pub use parse::CssColor;
pub use space::{Oklab, Oklch, Srgb, ACHROMATIC_EPSILON};

/// Parse a CSS color and convert it to OKLCH
pub fn to_oklch(input: &str) -> Result<Oklch> {
    CssColor::parse(input).map(CssColor::to_oklch)
}
