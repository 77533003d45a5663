use serde::{Deserialize, Serialize};

/// One entry of the substitution table: a colloquial term and its formal replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Term as it appears in informal text
    pub informal: String,
    /// Official-register replacement
    pub formal: String,
}

impl Substitution {
    pub fn new(informal: impl Into<String>, formal: impl Into<String>) -> Self {
        Self {
            informal: informal.into(),
            formal: formal.into(),
        }
    }
}

/// A capture-based phrase rewrite
///
/// `pattern` is a regular expression declaring exactly one capture group (the inner
/// clause); `replacement` is a template referencing it as `${clause}` or `$1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Short identifier used in logs and errors
    pub name: String,
    /// Match pattern with one capture group
    pub pattern: String,
    /// Replacement template
    pub replacement: String,
}

impl PatternRule {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Build a rule whose clause sits between two literal markers.
    ///
    /// The clause never spans a comma, a sentence terminator or an ellipsis dot.
    pub fn bracketed(name: &str, lead: &str, tail: &str, replacement: &str) -> Self {
        Self::new(
            name,
            format!(
                "{}(?P<clause>[^，。！？.…]+){}",
                regex::escape(lead),
                regex::escape(tail)
            ),
            replacement,
        )
    }
}

/// A redundant compound produced when two rewrites collide, and its canonical form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseFix {
    pub redundant: String,
    pub canonical: String,
}

impl PhraseFix {
    pub fn new(redundant: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            redundant: redundant.into(),
            canonical: canonical.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_rule_escapes_markers() {
        let rule = PatternRule::bracketed("dots", "a.", "b", "x${clause}");
        assert_eq!(rule.pattern, r"a\.(?P<clause>[^，。！？.…]+)b");
    }

    #[test]
    fn test_rule_deserializes_from_json() {
        let json = r#"{"name": "r", "pattern": "让(.+)满意", "replacement": "提升$1满意度"}"#;
        let rule: PatternRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.name, "r");
        assert_eq!(rule.replacement, "提升$1满意度");
    }
}
