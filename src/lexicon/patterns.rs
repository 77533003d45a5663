use regex::Regex;
use tracing::trace;

use crate::error::{Result, RewriteError};
use crate::models::PatternRule;

/// A pattern rule with its regex compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub name: String,
    regex: Regex,
    replacement: String,
}

impl CompiledRule {
    /// Compile a rule, rejecting patterns without exactly one capture group
    pub fn compile(rule: &PatternRule) -> Result<Self> {
        let regex = Regex::new(&rule.pattern).map_err(|source| RewriteError::InvalidPattern {
            rule: rule.name.clone(),
            source,
        })?;

        // captures_len counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(RewriteError::CaptureGroups {
                rule: rule.name.clone(),
                found,
            });
        }

        Ok(Self {
            name: rule.name.clone(),
            regex,
            replacement: rule.replacement.clone(),
        })
    }

    /// Rewrite all non-overlapping matches, returning the new text and match count
    pub fn apply(&self, text: &str) -> (String, usize) {
        let count = self.regex.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        let rewritten = self
            .regex
            .replace_all(text, self.replacement.as_str())
            .into_owned();
        (rewritten, count)
    }
}

/// Run the rules in sequence, each on the previous rule's output
pub fn apply_patterns(text: &str, rules: &[CompiledRule]) -> (String, usize) {
    let mut current = text.to_string();
    let mut total = 0;

    for rule in rules {
        let (next, count) = rule.apply(&current);
        if count > 0 {
            trace!(rule = %rule.name, count, "pattern rule applied");
        }
        current = next;
        total += count;
    }

    (current, total)
}
