//! Module processors. Each owns one part of the configuration and emits CSS plus its resolve map.

pub mod colors;
pub mod primitives;
pub mod spacing;
pub mod typography;

use crate::conditional::CssOutput;
use crate::error::{LeafWarning, Result};
use crate::resolve::{AliasMap, NamespaceMaps, ResolveMap, Variables};

pub use colors::{process_colors, ColorsConfig};
pub use primitives::{process_primitives, PrimitivesConfig};
pub use spacing::{process_spacing, SpacingConfig};
pub use typography::{process_typography, TypographyConfig};

/// Result of processing one module
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleOutput {
    pub css: CssOutput,
    pub resolve_map: ResolveMap,
    /// Leaves that were skipped while their siblings were emitted
    pub warnings: Vec<LeafWarning>,
}

/// Resolve a variant's aliases, logging which variant failed before propagating
fn resolve_aliases(
    variables: &Variables,
    maps: &NamespaceMaps<'_>,
    context: &str,
) -> Result<AliasMap> {
    AliasMap::resolve(variables, maps)
        .inspect_err(|err| log::error!("Error processing {context}: {err}"))
}
