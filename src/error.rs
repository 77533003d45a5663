use thiserror::Error;

/// Errors raised while compiling a [`crate::RewriteConfig`] into a rewriter.
///
/// Rewriting itself never fails; only malformed tables are rejected.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Empty entry at index {index} of the {table} table")]
    EmptyTerm { table: &'static str, index: usize },
    #[error("Substitution term '{term}' does not compile: {source}")]
    InvalidTerm {
        term: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
    #[error("Pattern rule '{rule}' does not compile: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
    #[error("Pattern rule '{rule}' must declare exactly one capture group, found {found}")]
    CaptureGroups { rule: String, found: usize },
}

pub type Result<T> = std::result::Result<T, RewriteError>;
