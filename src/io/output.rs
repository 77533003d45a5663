use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{Classification, RoleCounts};

/// Pipeline stage identifiers used in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageName {
    Normalize,
    Lexical,
    Organize,
    Polish,
}

/// Text as it stood after one stage
#[derive(Debug, Clone, Serialize)]
pub struct StageSnapshot {
    pub stage: StageName,
    pub text: String,
}

impl StageSnapshot {
    pub fn new(stage: StageName, text: impl Into<String>) -> Self {
        Self {
            stage,
            text: text.into(),
        }
    }
}

/// Machine-readable account of one rewrite
#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
    pub input: String,
    pub output: String,
    /// Snapshots in execution order; empty for blank input
    pub stages: Vec<StageSnapshot>,
    pub substitutions_applied: usize,
    pub patterns_applied: usize,
    pub fillers_removed: usize,
    pub phrase_fixes_applied: usize,
    pub sentence_count: usize,
    /// Whether sentences were regrouped by role
    pub reorganized: bool,
    pub role_counts: RoleCounts,
    pub classifications: Vec<Classification>,
}

impl RewriteReport {
    /// Empty report for an input, as produced for blank text
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            output: String::new(),
            stages: Vec::new(),
            substitutions_applied: 0,
            patterns_applied: 0,
            fillers_removed: 0,
            phrase_fixes_applied: 0,
            sentence_count: 0,
            reorganized: false,
            role_counts: RoleCounts::default(),
            classifications: Vec::new(),
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize rewrite report")
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}
