//! # CSSForge Core
//!
//! Turns a hierarchical design-token configuration into CSS custom properties, plus the same
//! tokens as a nested JSON tree and a TypeScript constant.
//!
//! ## Pipeline
//!
//! ```text
//! ForgeConfig
//!     │
//!     ├──> Colors       palette → gradients → themes (may reference earlier color tokens)
//!     ├──> Spacing      fluid space scales, custom scales (px → rem)
//!     ├──> Typography   fluid type scales, font weights
//!     │
//!     └──> Primitives   aliases resolved against the three maps above
//!              │
//!              ├─> CSS    :root { … } + conditional blocks
//!              └─> Tree   JSON / TypeScript export
//! ```
//!
//! Every token is registered once under a dot-separated path (`palette.coral.100`,
//! `spacing_fluid.base@m`) in its module's [`ResolveMap`]. Gradients, themes and primitives
//! declare `variables`, short aliases mapped to such paths, and use them as `var(--alias)` in
//! their values.
//!
//! ## Example
//!
//! ```rust
//! use cssforge_core::{generate_css, ForgeConfig};
//!
//! let config = ForgeConfig::from_json_str(r##"{
//!     "colors": {
//!         "palette": { "value": { "coral": { "value": { "100": { "hex": "#FF7F50" } } } } }
//!     }
//! }"##).unwrap();
//!
//! let css = generate_css(&config).unwrap();
//! assert!(css.contains("--palette-coral-100: oklch(73.511% 0.16799 40.24666);"));
//! ```

mod color;
mod conditional;
mod config;
mod error;
mod generator;
mod naming;
mod resolve;
mod scale;
mod tree;
mod units;

pub mod modules;

pub use color::{to_oklch, Channels, ColorNotation, ColorValue};
pub use conditional::{ConditionalGroup, CssChunks, CssOutput};
pub use config::ForgeConfig;
pub use error::{ForgeError, LeafWarning, Result};
pub use generator::{
    generate_all, generate_css, generate_json, generate_typescript, Forge, GenerateOptions,
    Generated, Generator,
};
pub use modules::ModuleOutput;
pub use naming::{css_variable, validate_name};
pub use resolve::{
    build_path, build_step_path, resolve_variable, split_path, AliasMap, ModuleKind,
    NamespaceMaps, ResolveEntry, ResolveMap, Variables,
};
pub use scale::{
    fluid_space_scale, fluid_type_scale, FluidScale, FluidSpaceInput, FluidTypeInput, ScaleStep,
    TypeScaleSettings,
};
pub use tree::{ForgeNode, ForgeTree, TYPESCRIPT_CONST};
pub use units::{px_to_rem, PixelSettings, DEFAULT_REM_BASE};
