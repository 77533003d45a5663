use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::io::{RewriteReport, StageName, StageSnapshot};
use crate::lexicon::{CompiledLexicon, LexiconConfig};
use crate::stages::{
    OrganizeConfig, PolishConfig, execute_stage1, execute_stage2, execute_stage3, normalize,
};

/// Every table the rewriter reads, grouped by stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    pub lexicon: LexiconConfig,
    pub organize: OrganizeConfig,
    pub polish: PolishConfig,
}

/// Official-register rewriter with its tables validated and compiled
///
/// Immutable once built, so a single instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Rewriter {
    lexicon: CompiledLexicon,
    organize: OrganizeConfig,
    polish: PolishConfig,
}

static DEFAULT_REWRITER: Lazy<Rewriter> = Lazy::new(|| {
    Rewriter::new(RewriteConfig::default()).expect("built-in rewrite tables are valid")
});

impl Rewriter {
    pub fn new(config: RewriteConfig) -> Result<Self> {
        let lexicon = CompiledLexicon::compile(&config.lexicon)?;
        config.organize.validate()?;

        Ok(Self {
            lexicon,
            organize: config.organize,
            polish: config.polish,
        })
    }

    /// Shared rewriter over the built-in tables
    pub fn shared() -> &'static Rewriter {
        &DEFAULT_REWRITER
    }

    /// Rewrite text into official register. Blank input yields an empty string.
    pub fn rewrite(&self, input: &str) -> String {
        self.rewrite_with_report(input).output
    }

    /// Rewrite text and record what every stage did
    pub fn rewrite_with_report(&self, input: &str) -> RewriteReport {
        let mut report = RewriteReport::new(input);

        let Some(text) = normalize(input) else {
            debug!("Stage 0: blank input, nothing to rewrite");
            return report;
        };
        report.stages.push(StageSnapshot::new(StageName::Normalize, text));

        let stage1 = execute_stage1(text, &self.lexicon);
        report.substitutions_applied = stage1.substitutions_applied;
        report.patterns_applied = stage1.patterns_applied;
        report.fillers_removed = stage1.fillers_removed;
        report
            .stages
            .push(StageSnapshot::new(StageName::Lexical, &stage1.text));

        let stage2 = execute_stage2(&stage1.text, &self.organize);
        report.sentence_count = stage2.sentence_count;
        report.reorganized = stage2.reorganized;
        report.role_counts = stage2.role_counts;
        report.classifications = stage2.classifications;
        report
            .stages
            .push(StageSnapshot::new(StageName::Organize, &stage2.text));

        let stage3 = execute_stage3(&stage2.text, &self.polish);
        report.phrase_fixes_applied = stage3.phrase_fixes_applied;
        report
            .stages
            .push(StageSnapshot::new(StageName::Polish, &stage3.text));

        report.output = stage3.text;
        report
    }
}

/// Rewrite text with the built-in tables
///
/// Total over all inputs: never panics, never errors.
pub fn optimize_document(input: &str) -> String {
    Rewriter::shared().rewrite(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Substitution};

    #[test]
    fn test_blank_input_yields_empty_output() {
        assert_eq!(optimize_document(""), "");
        assert_eq!(optimize_document("   "), "");
        assert_eq!(optimize_document("\n\t"), "");
    }

    #[test]
    fn test_reorganizes_four_sentences() {
        let input = "要加强组织领导。今天天气不错。本次会议的目的是统一思想。落实各项任务。";
        assert_eq!(
            optimize_document(input),
            "本次会议的目的是统一思想。要加强组织领导；落实各项任务。今天天气不错。"
        );
    }

    #[test]
    fn test_passthrough_keeps_order() {
        assert_eq!(optimize_document("先开会。然后讨论！"), "先开会。然后讨论！");
        assert_eq!(optimize_document("  落实任务 "), "落实任务。");
    }

    #[test]
    fn test_full_pipeline_rewrites() {
        assert_eq!(optimize_document("把安全生产做好吧"), "切实加强安全生产。");
        assert_eq!(optimize_document("大家，好好干..."), "相关人员，好好干。");
        assert_eq!(optimize_document("要让 老百姓 满意"), "要提升群众满意度。");
    }

    #[test]
    fn test_each_default_pattern_rule() {
        let cases = [
            ("让群众满意", "提升群众满意度。"),
            ("让干部放心", "确保干部安心。"),
            ("让群众参与", "推动群众积极参与。"),
            ("把安全生产做好", "切实加强安全生产。"),
            ("把任务完成", "全面完成任务。"),
            ("把责任落实", "切实落实责任。"),
            // conduct runs before organize and consumes the 对
            ("对调研进行", "深入开展调研。"),
            ("对检查开展", "组织开展检查。"),
        ];
        for (input, expected) in cases {
            assert_eq!(optimize_document(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_pattern_stops_at_ellipsis() {
        assert_eq!(optimize_document("让群众...满意"), "让群众。满意。");
    }

    #[test]
    fn test_boundary_safety_end_to_end() {
        assert_eq!(optimize_document("大家庭很温馨"), "大家庭很温馨。");
        assert_eq!(optimize_document("大家"), "相关人员。");
    }

    #[test]
    fn test_totality_on_odd_inputs() {
        let long = "为了目标。加强落实。确保实现。其他内容，".repeat(500);
        let inputs = ["。", "啊", "啊 吧", "...", "a", "！？。", "\u{3000}x\u{3000}", long.as_str()];
        for input in inputs {
            let output = optimize_document(input);
            assert!(!output.chars().any(char::is_whitespace), "{:?}", output);
        }
        assert_eq!(optimize_document("啊"), "");
        assert_eq!(optimize_document("。"), "。");
    }

    #[test]
    fn test_report_traces_each_stage() {
        let input = "为了安全。加强巡查。确保不出事故。另外";
        let report = Rewriter::shared().rewrite_with_report(input);

        let names: Vec<StageName> = report.stages.iter().map(|s| s.stage).collect();
        assert_eq!(
            names,
            vec![
                StageName::Normalize,
                StageName::Lexical,
                StageName::Organize,
                StageName::Polish
            ]
        );
        assert!(report.reorganized);
        assert_eq!(report.sentence_count, 4);
        assert_eq!(report.substitutions_applied, 1);
        assert_eq!(report.classifications[3].role, Role::Other);
        assert_eq!(report.output, "为了安全。加强巡查。确保不出事故。同时。");
        assert_eq!(report.stages.last().map(|s| s.text.as_str()), Some(report.output.as_str()));
    }

    #[test]
    fn test_custom_vocabulary() {
        let mut config = RewriteConfig::default();
        config.lexicon.substitutions = vec![Substitution::new("搞定", "圆满完成")];
        let rewriter = Rewriter::new(config).unwrap();

        assert_eq!(rewriter.rewrite("任务，搞定"), "任务，圆满完成。");
        // default table no longer applies
        assert_eq!(rewriter.rewrite("大家"), "大家。");
    }

    #[test]
    fn test_rewriter_is_shareable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| optimize_document("大家，钱")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "相关人员，资金。");
        }
    }
}
