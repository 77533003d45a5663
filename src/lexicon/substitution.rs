use fancy_regex::Regex;

use crate::error::{Result, RewriteError};
use crate::models::Substitution;

/// Han range treated as word-forming
const HAN: &str = r"\x{4e00}-\x{9fa5}";

fn is_han(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Look-behind that fails when the preceding character continues `edge`'s word
fn guard_before(edge: char) -> String {
    if is_han(edge) {
        format!("(?<![{HAN}])")
    } else if edge.is_alphanumeric() {
        // Han neighbours belong to another script and do not glue
        format!(r"(?:(?<![\p{{Alphabetic}}\p{{N}}])|(?<=[{HAN}]))")
    } else {
        String::new()
    }
}

/// Look-ahead counterpart of [`guard_before`]
fn guard_after(edge: char) -> String {
    if is_han(edge) {
        format!("(?![{HAN}])")
    } else if edge.is_alphanumeric() {
        format!(r"(?:(?![\p{{Alphabetic}}\p{{N}}])|(?=[{HAN}]))")
    } else {
        String::new()
    }
}

/// A substitution entry compiled to a boundary-guarded regex
#[derive(Debug, Clone)]
pub struct CompiledSubstitution {
    pub informal: String,
    formal: String,
    regex: Regex,
}

impl CompiledSubstitution {
    /// Compile table entry `index`, rejecting empty terms
    pub fn compile(entry: &Substitution, index: usize) -> Result<Self> {
        let (Some(first), Some(last)) =
            (entry.informal.chars().next(), entry.informal.chars().next_back())
        else {
            return Err(RewriteError::EmptyTerm {
                table: "substitutions",
                index,
            });
        };

        let pattern = format!(
            "{}{}{}",
            guard_before(first),
            fancy_regex::escape(&entry.informal),
            guard_after(last)
        );
        let regex = Regex::new(&pattern).map_err(|source| RewriteError::InvalidTerm {
            term: entry.informal.clone(),
            source: Box::new(source),
        })?;

        Ok(Self {
            informal: entry.informal.clone(),
            formal: entry.formal.clone(),
            regex,
        })
    }

    /// Replace every boundary-isolated occurrence, returning the text and match count
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut output = String::with_capacity(text.len());
        let mut copied_to = 0;
        let mut count = 0;

        // A backtracking failure ends the scan; the rest of the text is kept as is
        for found in self.regex.find_iter(text).map_while(|m| m.ok()) {
            output.push_str(&text[copied_to..found.start()]);
            output.push_str(&self.formal);
            copied_to = found.end();
            count += 1;
        }

        if count == 0 {
            return (text.to_string(), 0);
        }
        output.push_str(&text[copied_to..]);
        (output, count)
    }
}

/// Apply the whole substitution table in order
pub fn apply_substitutions(text: &str, table: &[CompiledSubstitution]) -> (String, usize) {
    table
        .iter()
        .fold((text.to_string(), 0), |(current, total), entry| {
            let (next, count) = entry.apply(&current);
            (next, total + count)
        })
}
