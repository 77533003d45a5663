use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, RewriteError};
use crate::models::{
    Classification, Role, RoleCounts, RoleGroups, SEMICOLON, STOP, Sentence, split_sentences,
};

/// Keyword sets and threshold for paragraph reorganization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizeConfig {
    /// Minimum sentence count before sentences are regrouped
    pub min_sentences: usize,
    /// Keywords marking a statement of purpose, checked first
    pub purpose_keywords: Vec<String>,
    /// Keywords marking a measure, checked second
    pub measure_keywords: Vec<String>,
    /// Keywords marking an expected result, checked third
    pub result_keywords: Vec<String>,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        fn words(list: &[&str]) -> Vec<String> {
            list.iter().map(|w| w.to_string()).collect()
        }

        Self {
            min_sentences: 3,
            purpose_keywords: words(&["目的", "目标", "旨在", "为了", "意图"]),
            measure_keywords: words(&[
                "加强", "推进", "落实", "开展", "组织", "实施", "完善", "建立", "健全",
            ]),
            result_keywords: words(&["确保", "实现", "达成", "提升", "提高", "增强", "促进"]),
        }
    }
}

impl OrganizeConfig {
    /// Reject empty keywords, which would match every sentence
    pub fn validate(&self) -> Result<()> {
        let tables = [
            ("purpose_keywords", &self.purpose_keywords),
            ("measure_keywords", &self.measure_keywords),
            ("result_keywords", &self.result_keywords),
        ];
        for (table, keywords) in tables {
            if let Some(index) = keywords.iter().position(String::is_empty) {
                return Err(RewriteError::EmptyTerm { table, index });
            }
        }
        Ok(())
    }

    fn keywords(&self, role: Role) -> &[String] {
        match role {
            Role::Purpose => &self.purpose_keywords,
            Role::Measure => &self.measure_keywords,
            Role::Result => &self.result_keywords,
            Role::Other => &[],
        }
    }

    /// Classify a sentence by first keyword hit, in Purpose, Measure, Result priority
    pub fn classify<'a>(&'a self, sentence: &Sentence) -> (Role, Option<&'a str>) {
        [Role::Purpose, Role::Measure, Role::Result]
            .into_iter()
            .find_map(|role| {
                self.keywords(role)
                    .iter()
                    .find(|kw| sentence.contains(kw.as_str()))
                    .map(|kw| (role, Some(kw.as_str())))
            })
            .unwrap_or((Role::Other, None))
    }
}

/// Result of Stage 2 paragraph organization
#[derive(Debug, Clone)]
pub struct Stage2Result {
    /// Reorganized text, or the input unchanged on passthrough
    pub text: String,
    /// Number of sentences found
    pub sentence_count: usize,
    /// Whether sentences were regrouped by role
    pub reorganized: bool,
    /// Per-sentence roles in input order, empty on passthrough
    pub classifications: Vec<Classification>,
    /// Sentences per role, all zero on passthrough
    pub role_counts: RoleCounts,
}

/// Execute Stage 2: sentence classification and paragraph organization
///
/// Splits the text into sentences and, when there are at least
/// `min_sentences`, re-emits them as Purpose, Measure, Result and Other
/// paragraphs. Shorter input passes through unchanged.
pub fn execute_stage2(text: &str, config: &OrganizeConfig) -> Stage2Result {
    let sentences = split_sentences(text);
    let sentence_count = sentences.len();

    if sentences.is_empty() || sentence_count < config.min_sentences {
        debug!(
            sentence_count,
            "Stage 2: below reorganization threshold, passing through"
        );
        return Stage2Result {
            text: text.to_string(),
            sentence_count,
            reorganized: false,
            classifications: Vec::new(),
            role_counts: RoleCounts::default(),
        };
    }

    let mut groups = RoleGroups::default();
    let mut classifications = Vec::with_capacity(sentence_count);

    for sentence in &sentences {
        let (role, keyword) = config.classify(sentence);
        trace!(sentence = sentence.as_str(), ?role, keyword, "classified sentence");
        classifications.push(Classification {
            sentence: sentence.as_str().to_string(),
            role,
            keyword: keyword.map(str::to_string),
        });
        groups.push(role, sentence.clone());
    }

    let text = if groups.is_empty() {
        rejoin(&sentences)
    } else {
        render_paragraphs(&groups)
    };
    let role_counts = groups.counts();

    debug!(
        sentence_count,
        purpose = role_counts.purpose,
        measure = role_counts.measure,
        result = role_counts.result,
        other = role_counts.other,
        "Stage 2: sentences reorganized"
    );

    Stage2Result {
        text,
        sentence_count,
        reorganized: true,
        classifications,
        role_counts,
    }
}

/// Emit non-empty groups in paragraph order, each closed by one stop
fn render_paragraphs(groups: &RoleGroups) -> String {
    let mut output = String::new();

    for role in Role::ORDER {
        let sentences = groups.get(role);
        if sentences.is_empty() {
            continue;
        }

        for (i, sentence) in sentences.iter().enumerate() {
            if i > 0 && role == Role::Measure {
                output.push(SEMICOLON);
            }
            output.push_str(sentence.as_str());
        }
        output.push(STOP);
    }

    output
}

/// Fallback used when no group received a sentence
fn rejoin(sentences: &[Sentence]) -> String {
    let mut output = sentences
        .iter()
        .map(Sentence::as_str)
        .collect::<Vec<_>>()
        .join("。");
    output.push(STOP);
    output
}
