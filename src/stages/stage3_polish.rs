use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{PhraseFix, STOP};

/// Configuration for Stage 3 polishing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolishConfig {
    /// Marks accepted as the end of the text; anything else gets a stop appended
    pub terminal_marks: Vec<char>,
    /// Redundant compounds collapsed to their canonical form, in order
    pub phrase_fixes: Vec<PhraseFix>,
    /// Marks whose immediate repeats are collapsed
    pub dedup_marks: Vec<char>,
}

impl Default for PolishConfig {
    fn default() -> Self {
        Self {
            terminal_marks: vec!['。', '！', '？', '；'],
            phrase_fixes: vec![
                PhraseFix::new("进行开展", "开展"),
                PhraseFix::new("落实实施", "落实"),
                PhraseFix::new("加强提升", "加强"),
                PhraseFix::new("推进推动", "推进"),
                PhraseFix::new("组织进行", "组织"),
            ],
            dedup_marks: vec!['，', '；', '。'],
        }
    }
}

/// Result of Stage 3 polishing
#[derive(Debug, Clone)]
pub struct Stage3Result {
    /// Final text
    pub text: String,
    /// Whether a stop was appended
    pub terminator_added: bool,
    /// Number of phrase collisions fixed
    pub phrase_fixes_applied: usize,
}

/// Execute Stage 3: final polish
///
/// 1. Append a stop when the text lacks a terminal mark
/// 2. Strip every whitespace character
/// 3. Collapse known redundant compounds
/// 4. Collapse immediately repeated marks
pub fn execute_stage3(text: &str, config: &PolishConfig) -> Stage3Result {
    let mut text = text.to_string();

    let terminator_added = text
        .chars()
        .next_back()
        .is_some_and(|last| !config.terminal_marks.contains(&last));
    if terminator_added {
        text.push(STOP);
    }

    let mut text: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut phrase_fixes_applied = 0;
    for fix in config.phrase_fixes.iter().filter(|f| !f.redundant.is_empty()) {
        let hits = text.matches(fix.redundant.as_str()).count();
        if hits > 0 {
            text = text.replace(fix.redundant.as_str(), &fix.canonical);
            phrase_fixes_applied += hits;
        }
    }

    let text = collapse_repeats(&text, &config.dedup_marks);

    debug!(terminator_added, phrase_fixes_applied, "Stage 3: polish complete");

    Stage3Result {
        text: text.trim().to_string(),
        terminator_added,
        phrase_fixes_applied,
    }
}

/// Collapse runs of the same mark into one, for the given marks only
fn collapse_repeats(text: &str, marks: &[char]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous: Option<char> = None;

    for c in text.chars() {
        if previous == Some(c) && marks.contains(&c) {
            continue;
        }
        output.push(c);
        previous = Some(c);
    }

    output
}
