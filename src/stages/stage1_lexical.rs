use tracing::debug;

use crate::lexicon::{
    CompiledLexicon, apply_patterns, apply_substitutions, normalize_punctuation, strip_fillers,
};

/// Result of Stage 1 lexical rewriting
#[derive(Debug, Clone)]
pub struct Stage1Result {
    /// Text after every lexical pass
    pub text: String,
    /// Number of table substitutions made
    pub substitutions_applied: usize,
    /// Number of pattern matches rewritten
    pub patterns_applied: usize,
    /// Number of filler occurrences deleted
    pub fillers_removed: usize,
}

/// Execute Stage 1: lexical rewriting
///
/// This stage:
/// 1. Substitutes boundary-isolated colloquial terms with formal ones
/// 2. Applies the capture-based phrase rewrites
/// 3. Deletes filler tokens
/// 4. Normalizes punctuation runs and ellipses
pub fn execute_stage1(text: &str, lexicon: &CompiledLexicon) -> Stage1Result {
    let (text, substitutions_applied) = apply_substitutions(text, &lexicon.substitutions);
    let (text, patterns_applied) = apply_patterns(&text, &lexicon.rules);
    let (text, fillers_removed) = strip_fillers(&text, &lexicon.fillers);
    let text = normalize_punctuation(&text, &lexicon.ellipses);

    debug!(
        substitutions_applied,
        patterns_applied, fillers_removed, "Stage 1: lexical passes complete"
    );

    Stage1Result {
        text,
        substitutions_applied,
        patterns_applied,
        fillers_removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconConfig;

    fn default_lexicon() -> CompiledLexicon {
        CompiledLexicon::compile(&LexiconConfig::default()).unwrap()
    }

    #[test]
    fn test_passes_run_in_order() {
        // 把…做好 is rewritten, 吧 is dropped, then the doubled stop collapses
        let result = execute_stage1("把安全生产做好吧。。", &default_lexicon());
        assert_eq!(result.text, "切实加强安全生产。");
        assert_eq!(result.substitutions_applied, 0);
        assert_eq!(result.patterns_applied, 1);
        assert_eq!(result.fillers_removed, 1);
    }

    #[test]
    fn test_isolated_terms_substituted() {
        let result = execute_stage1("大家，老板，钱。", &default_lexicon());
        assert_eq!(result.text, "相关人员，负责人，资金。");
        assert_eq!(result.substitutions_applied, 3);
    }

    #[test]
    fn test_embedded_terms_untouched() {
        let result = execute_stage1("我们要做这个事情。", &default_lexicon());
        assert_eq!(result.text, "我们要做这个事情。");
        assert_eq!(result.substitutions_applied, 0);
    }

    #[test]
    fn test_substitution_feeds_filler_pass() {
        // 想一下 is substituted before the filler pass could strip 一下
        let result = execute_stage1("想一下，弄一下。啊", &default_lexicon());
        assert_eq!(result.text, "研究，落实。");
        assert_eq!(result.fillers_removed, 1);
    }
}
