//! Nested token tree for JSON and TypeScript export.

use crate::error::Result;
use crate::resolve::{split_path, ResolveEntry, ResolveMap};
use indexmap::IndexMap;
use serde::Serialize;

/// Name of the exported TypeScript constant
pub const TYPESCRIPT_CONST: &str = "cssForge";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForgeNode {
    Leaf(ResolveEntry),
    Branch(IndexMap<String, ForgeNode>),
}

impl ForgeNode {
    pub fn as_leaf(&self) -> Option<&ResolveEntry> {
        match self {
            ForgeNode::Leaf(entry) => Some(entry),
            ForgeNode::Branch(_) => None,
        }
    }

    fn branch_mut(&mut self) -> &mut IndexMap<String, ForgeNode> {
        match self {
            ForgeNode::Branch(children) => children,
            ForgeNode::Leaf(_) => {
                *self = ForgeNode::Branch(IndexMap::new());
                self.branch_mut()
            }
        }
    }
}

/// Every registered token, nested by path segment.
///
/// `palette.coral.100` becomes `palette → coral → 100`; a step label after `@` is its own segment.
/// Later leaves replace earlier nodes at the same position, branches merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ForgeTree {
    root: IndexMap<String, ForgeNode>,
}

impl ForgeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, entry: ResolveEntry) {
        let segments = split_path(path);
        let Some((last, parents)) = segments.split_last() else {
            return;
        };
        let mut level = &mut self.root;
        for segment in parents {
            level = level
                .entry(segment.to_string())
                .or_insert_with(|| ForgeNode::Branch(IndexMap::new()))
                .branch_mut();
        }
        level.insert(last.to_string(), ForgeNode::Leaf(entry));
    }

    /// Insert every entry of a resolve map in its order
    pub fn extend_from_map(&mut self, map: &ResolveMap) {
        for (path, entry) in map.iter() {
            self.insert(path, entry.clone());
        }
    }

    pub fn from_map(map: &ResolveMap) -> Self {
        let mut tree = Self::new();
        tree.extend_from_map(map);
        tree
    }

    /// Deep-merge another tree into this one
    pub fn merge(&mut self, other: ForgeTree) {
        merge_level(&mut self.root, other.root);
    }

    pub fn get(&self, path: &str) -> Option<&ForgeNode> {
        let segments = split_path(path);
        let (first, rest) = segments.split_first()?;
        rest.iter().try_fold(self.root.get(*first)?, |node, segment| match node {
            ForgeNode::Branch(children) => children.get(*segment),
            ForgeNode::Leaf(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        fn count(level: &IndexMap<String, ForgeNode>) -> usize {
            level
                .values()
                .map(|node| match node {
                    ForgeNode::Leaf(_) => 1,
                    ForgeNode::Branch(children) => count(children),
                })
                .sum()
        }
        count(&self.root)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_typescript(&self) -> Result<String> {
        Ok(format!(
            "export const {TYPESCRIPT_CONST} = {} as const;",
            self.to_json()?
        ))
    }
}

fn merge_level(into: &mut IndexMap<String, ForgeNode>, from: IndexMap<String, ForgeNode>) {
    for (key, node) in from {
        if let ForgeNode::Branch(children) = node {
            if let Some(ForgeNode::Branch(existing)) = into.get_mut(&key) {
                merge_level(existing, children);
                continue;
            }
            into.insert(key, ForgeNode::Branch(children));
        } else {
            into.insert(key, node);
        }
    }
}
