//! Conditional wrapping of declaration groups.
//!
//! A palette color, gradient or theme may carry a `condition` (a media query or a class
//! selector). Its declarations are buffered and emitted as one block outside `:root`, and only
//! when at least one declaration was produced. Without a condition they go straight to `:root`.

const INDENT: &str = "  ";

/// `/* text */`
pub fn comment(text: &str) -> String {
    format!("/* {text} */")
}

/// CSS produced by one module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssOutput {
    /// Lines that belong inside `:root { … }`
    pub root: String,
    /// Finalized conditional blocks, emitted after `:root`
    pub outside: String,
}

impl CssOutput {
    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.outside.is_empty()
    }
}

/// Line buffers for a module being processed
#[derive(Debug, Default)]
pub struct CssChunks {
    root: Vec<String>,
    outside: Vec<String>,
}

impl CssChunks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_root(&mut self, line: impl Into<String>) {
        self.root.push(line.into());
    }

    pub fn push_outside(&mut self, line: impl Into<String>) {
        self.outside.push(line.into());
    }

    pub fn finish(self) -> CssOutput {
        CssOutput {
            root: self.root.join("\n"),
            outside: self.outside.join("\n"),
        }
    }
}

/// Declarations held back until the group is finalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    condition: String,
    leading_comments: Vec<String>,
    /// Inner comments and declarations, in the order they were added
    body: Vec<String>,
    declarations: usize,
}

/// Emission mode of one syntactic group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionalGroup {
    Passthrough,
    Buffering(Buffer),
}

impl ConditionalGroup {
    /// Blank conditions are treated as absent
    pub fn new(condition: Option<&str>) -> Self {
        match condition.map(str::trim) {
            Some(condition) if !condition.is_empty() => ConditionalGroup::Buffering(Buffer {
                condition: condition.to_string(),
                leading_comments: Vec::new(),
                body: Vec::new(),
                declarations: 0,
            }),
            _ => ConditionalGroup::Passthrough,
        }
    }

    pub fn is_buffering(&self) -> bool {
        matches!(self, ConditionalGroup::Buffering(_))
    }

    /// A comment printed before the selector line
    pub fn leading_comment(&mut self, out: &mut CssChunks, text: &str) {
        match self {
            ConditionalGroup::Passthrough => out.push_root(comment(text)),
            ConditionalGroup::Buffering(buffer) => buffer.leading_comments.push(comment(text)),
        }
    }

    /// A comment printed inside the block
    pub fn inner_comment(&mut self, out: &mut CssChunks, text: &str) {
        match self {
            ConditionalGroup::Passthrough => out.push_root(comment(text)),
            ConditionalGroup::Buffering(buffer) => buffer.body.push(comment(text)),
        }
    }

    pub fn declaration(&mut self, out: &mut CssChunks, declaration: &str) {
        match self {
            ConditionalGroup::Passthrough => out.push_root(declaration),
            ConditionalGroup::Buffering(buffer) => {
                buffer.body.push(declaration.to_string());
                buffer.declarations += 1;
            }
        }
    }

    /// Emit the wrapped block if anything was declared. Passthrough groups have nothing left.
    pub fn finalize(self, out: &mut CssChunks) {
        let ConditionalGroup::Buffering(buffer) = self else {
            return;
        };
        if buffer.declarations == 0 {
            log::debug!("Skipping empty conditional group {}", buffer.condition);
            return;
        }
        for line in buffer.leading_comments {
            out.push_outside(line);
        }
        out.push_outside(format!("{} {{", buffer.condition));
        for line in buffer.body {
            out.push_outside(format!("{INDENT}{line}"));
        }
        out.push_outside("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_passthrough_emits_in_place() {
        let mut out = CssChunks::new();
        let mut group = ConditionalGroup::new(None);
        group.leading_comment(&mut out, "Theme: light");
        group.declaration(&mut out, "--a: 1;");
        group.finalize(&mut out);
        let css = out.finish();
        assert_eq!(css.root, "/* Theme: light */\n--a: 1;");
        assert!(css.outside.is_empty());
    }

    #[test]
    fn test_blank_condition_is_passthrough() {
        assert!(!ConditionalGroup::new(Some("  ")).is_buffering());
        assert!(ConditionalGroup::new(Some(".dark")).is_buffering());
    }

    #[test]
    fn test_buffered_block() {
        let mut out = CssChunks::new();
        let mut group = ConditionalGroup::new(Some(".dark"));
        group.leading_comment(&mut out, "Theme: dark");
        group.inner_comment(&mut out, "background");
        group.declaration(&mut out, "--a: 1;");
        group.declaration(&mut out, "--b: 2;");
        assert!(out.root.is_empty());
        group.finalize(&mut out);
        let css = out.finish();
        assert_eq!(
            css.outside,
            "/* Theme: dark */\n.dark {\n  /* background */\n  --a: 1;\n  --b: 2;\n}"
        );
        assert!(css.root.is_empty());
    }

    #[test]
    fn test_empty_group_emits_nothing() {
        let mut out = CssChunks::new();
        let mut group = ConditionalGroup::new(Some("@media (prefers-color-scheme: dark)"));
        group.leading_comment(&mut out, "ignored");
        group.inner_comment(&mut out, "ignored too");
        group.finalize(&mut out);
        assert!(out.finish().is_empty());
    }
}
