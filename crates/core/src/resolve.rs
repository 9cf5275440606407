//! Token paths, the per-module resolve maps, and alias substitution.
//!
//! Every emitted token is registered under a dot-separated path such as `palette.coral.100`.
//! Fluid steps put `@` before the step label (`spacing_fluid.base@m`) so they never collide with
//! nested object paths. Other tokens refer to registered tokens by path through a per-token
//! `variables` dictionary; the aliases are then substituted into `var(--alias)` placeholders.

use crate::error::{ForgeError, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

/// Alias name → token path, as written in configuration
pub type Variables = IndexMap<String, String>;

static VAR_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"var\(--([^)\s,]+)([,)])").expect("var placeholder regex"));

/// `namespace.segment.segment`
pub fn build_path(namespace: &str, segments: &[&str]) -> String {
    let mut path = namespace.to_string();
    for segment in segments {
        path.push('.');
        path.push_str(segment);
    }
    path
}

/// `namespace.segment@label`
pub fn build_step_path(namespace: &str, segments: &[&str], label: &str) -> String {
    format!("{}@{label}", build_path(namespace, segments))
}

/// Split a path into tree segments; a trailing `@label` becomes its own segment
pub fn split_path(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('.').collect();
    if let Some(last) = segments.pop() {
        match last.split_once('@') {
            Some((head, label)) => {
                segments.push(head);
                segments.push(label);
            }
            None => segments.push(last),
        }
    }
    segments
}

/// One registered token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveEntry {
    /// CSS custom property name, `--palette-coral-100`
    #[serde(rename = "key")]
    pub variable_name: String,
    /// Final value, after conversion and substitution
    pub value: String,
    /// Full declaration, `--palette-coral-100: oklch(…);`
    #[serde(rename = "variable")]
    pub declaration: String,
}

impl ResolveEntry {
    pub fn new(variable_name: impl Into<String>, value: impl Into<String>) -> Self {
        let variable_name = variable_name.into();
        let value = value.into();
        let declaration = format!("{variable_name}: {value};");
        Self {
            variable_name,
            value,
            declaration,
        }
    }
}

/// Insertion-ordered path → entry index for one module.
///
/// The order is the CSS emission order and the JSON/TypeScript tree order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveMap {
    entries: IndexMap<String, ResolveEntry>,
}

impl ResolveMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token once. Returns `None` (and keeps the first entry) if the path is taken.
    pub fn register(
        &mut self,
        path: impl Into<String>,
        variable_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<&ResolveEntry> {
        let path = path.into();
        if self.entries.contains_key(&path) {
            log::warn!("Token path {path} is already registered; keeping the first definition");
            return None;
        }
        let entry = ResolveEntry::new(variable_name, value);
        log::trace!("register {path} -> {}", entry.variable_name);
        let (index, _) = self.entries.insert_full(path, entry);
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    pub fn get(&self, path: &str) -> Option<&ResolveEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolveEntry)> {
        self.entries.iter().map(|(path, entry)| (path.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Modules that own token namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Colors,
    Spacing,
    Typography,
    Primitives,
}

impl ModuleKind {
    /// Fixed processing order
    pub const ORDER: [ModuleKind; 4] = [
        ModuleKind::Colors,
        ModuleKind::Spacing,
        ModuleKind::Typography,
        ModuleKind::Primitives,
    ];

    /// The module whose map may be searched for paths in `namespace`
    pub fn owning(namespace: &str) -> Option<Self> {
        match namespace {
            "palette" | "gradients" | "theme" => Some(ModuleKind::Colors),
            "typography" | "typography_fluid" => Some(ModuleKind::Typography),
            "spacing" | "spacing_fluid" => Some(ModuleKind::Spacing),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::Colors => "colors",
            ModuleKind::Spacing => "spacing",
            ModuleKind::Typography => "typography",
            ModuleKind::Primitives => "primitives",
        }
    }

    /// Section header inside `:root`
    pub fn title(self) -> &'static str {
        match self {
            ModuleKind::Colors => "Colors",
            ModuleKind::Spacing => "Spacing",
            ModuleKind::Typography => "Typography",
            ModuleKind::Primitives => "Primitives",
        }
    }
}

/// Read-only view of the maps a stage may reference
#[derive(Debug, Clone, Copy, Default)]
pub struct NamespaceMaps<'a> {
    pub colors: Option<&'a ResolveMap>,
    pub typography: Option<&'a ResolveMap>,
    pub spacing: Option<&'a ResolveMap>,
}

impl<'a> NamespaceMaps<'a> {
    /// Only the colors map, used while the colors module is still being built
    pub fn colors(map: &'a ResolveMap) -> Self {
        Self {
            colors: Some(map),
            ..Self::default()
        }
    }

    fn get(&self, module: ModuleKind) -> Option<&'a ResolveMap> {
        match module {
            ModuleKind::Colors => self.colors,
            ModuleKind::Typography => self.typography,
            ModuleKind::Spacing => self.spacing,
            ModuleKind::Primitives => None,
        }
    }
}

/// Resolve a token path to its CSS variable name.
///
/// The first segment selects the map. Primitives are not referenceable.
pub fn resolve_variable(path: &str, maps: &NamespaceMaps<'_>) -> Result<String> {
    let namespace = path.split(['.', '@']).next().unwrap_or_default();
    let Some(module) = ModuleKind::owning(namespace) else {
        return Err(ForgeError::unresolved_path(path, Vec::<String>::new()));
    };
    let map = maps
        .get(module)
        .ok_or_else(|| ForgeError::missing_namespace(module.as_str(), path))?;

    map.get(path)
        .map(|entry| entry.variable_name.clone())
        .ok_or_else(|| ForgeError::unresolved_path(path, map.keys()))
}

/// Aliases of one token resolved to CSS variable names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    aliases: IndexMap<String, String>,
}

impl AliasMap {
    /// Resolve every entry of a `variables` dictionary. The first failure aborts.
    pub fn resolve(variables: &Variables, maps: &NamespaceMaps<'_>) -> Result<Self> {
        let aliases = variables
            .iter()
            .map(|(alias, path)| Ok((alias.clone(), resolve_variable(path, maps)?)))
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(Self { aliases })
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Replace `var(--alias)` with `var(--resolved-name)`, keeping any fallback.
    /// Unknown aliases are left as written.
    pub fn substitute(&self, raw: &str) -> String {
        VAR_PLACEHOLDER
            .replace_all(raw, |caps: &Captures<'_>| match self.get(&caps[1]) {
                Some(resolved) => format!("var({resolved}{}", &caps[2]),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl FromIterator<(String, String)> for AliasMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            aliases: iter.into_iter().collect(),
        }
    }
}
