use crate::error::{ForgeError, Result};

/// Reserved because configuration groups use it as their payload key
const RESERVED: &str = "value";

/// Check one path segment before it becomes part of a path or a CSS identifier
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('.') || name == RESERVED {
        return Err(ForgeError::invalid_name(name));
    }
    Ok(())
}

/// Join segments into a CSS custom property name: `--a-b-c`
pub fn css_variable(segments: &[&str]) -> String {
    format!("--{}", segments.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["coral", "100", "background-color", "softGray1", "2xl", "@"] {
            assert!(validate_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "invalid.name", ".", "value"] {
            assert!(
                matches!(validate_name(name), Err(ForgeError::InvalidName(n)) if n == name),
                "{name}"
            );
        }
    }

    #[test]
    fn test_css_variable() {
        assert_eq!(css_variable(&["palette", "coral", "100"]), "--palette-coral-100");
        assert_eq!(css_variable(&["button"]), "--button");
    }
}
