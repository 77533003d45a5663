use serde::{Deserialize, Serialize};

/// Full stop used to close sentences and paragraphs
pub const STOP: char = '。';
/// Comma mark collapsed by the punctuation passes
pub const COMMA: char = '，';
/// Separator between several measure sentences
pub const SEMICOLON: char = '；';
/// Marks that end a sentence when splitting
pub const SENTENCE_TERMINATORS: [char; 3] = ['。', '！', '？'];

/// Semantic role a sentence plays in an official document paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// States the objective
    Purpose,
    /// Enumerates the actions taken
    Measure,
    /// States the expected outcome
    Result,
    /// Everything else
    Other,
}

impl Role {
    /// Paragraph emission order
    pub const ORDER: [Role; 4] = [Role::Purpose, Role::Measure, Role::Result, Role::Other];

    fn index(self) -> usize {
        match self {
            Role::Purpose => 0,
            Role::Measure => 1,
            Role::Result => 2,
            Role::Other => 3,
        }
    }
}

/// A trimmed, non-empty fragment of text between sentence terminators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence(String);

impl Sentence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split text on `。`, `！` and `？`, trimming fragments and dropping empty ones
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Sentence(s.to_string()))
        .collect()
}

/// Role assigned to one sentence, with the keyword that decided it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub sentence: String,
    pub role: Role,
    /// `None` for [`Role::Other`]
    pub keyword: Option<String>,
}

/// Sentences bucketed by role, insertion order kept within each bucket
#[derive(Debug, Clone, Default)]
pub struct RoleGroups {
    groups: [Vec<Sentence>; 4],
}

impl RoleGroups {
    pub fn push(&mut self, role: Role, sentence: Sentence) {
        self.groups[role.index()].push(sentence);
    }

    pub fn get(&self, role: Role) -> &[Sentence] {
        &self.groups[role.index()]
    }

    pub fn len(&self, role: Role) -> usize {
        self.groups[role.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    pub fn counts(&self) -> RoleCounts {
        RoleCounts {
            purpose: self.len(Role::Purpose),
            measure: self.len(Role::Measure),
            result: self.len(Role::Result),
            other: self.len(Role::Other),
        }
    }
}

/// Number of sentences per role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub purpose: usize,
    pub measure: usize,
    pub result: usize,
    pub other: usize,
}
