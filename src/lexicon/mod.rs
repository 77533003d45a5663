pub mod fillers;
pub mod patterns;
pub mod punctuation;
pub mod substitution;

pub use fillers::*;
pub use patterns::*;
pub use punctuation::*;
pub use substitution::*;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RewriteError};
use crate::models::{PatternRule, Substitution};

/// Tables driving the lexical passes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Informal to formal terms, applied in order with boundary checks
    pub substitutions: Vec<Substitution>,
    /// Capture-based phrase rewrites, applied in order
    pub patterns: Vec<PatternRule>,
    /// Filler tokens deleted unconditionally
    pub fillers: Vec<String>,
    /// Ellipsis spellings turned into a full stop
    pub ellipses: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        let substitutions = [
            // verbs
            ("要做", "切实推进"),
            ("做好", "切实加强"),
            ("做完", "全面完成"),
            ("做成", "确保完成"),
            ("看看", "调研"),
            ("想一下", "研究"),
            ("弄一下", "落实"),
            ("搞一下", "开展"),
            ("整一下", "规范"),
            ("查一下", "核查"),
            ("说一下", "明确"),
            ("讲一下", "阐述"),
            ("谈一下", "研讨"),
            // degree
            ("很", "显著"),
            ("非常", "切实"),
            ("特别", "尤为"),
            ("比较", "相对"),
            ("有点", "存在一定"),
            ("基本上", "总体"),
            ("差不多", "基本"),
            // nouns
            ("事情", "工作"),
            ("问题", "情况"),
            ("麻烦", "困难"),
            ("大家", "相关人员"),
            ("老百姓", "群众"),
            ("公司", "单位"),
            ("老板", "负责人"),
            ("员工", "干部职工"),
            ("钱", "资金"),
            ("东西", "物资"),
            // connectives
            ("还有", "此外"),
            ("另外", "同时"),
            ("但是", "然而"),
            ("所以", "因此"),
            ("因为", "鉴于"),
            ("然后", "随后"),
            ("接着", "继而"),
            // verdicts
            ("行了", "可行"),
            ("可以", "符合要求"),
            ("不行", "不符合规定"),
            ("没用", "无效"),
            ("有用", "有效"),
        ]
        .into_iter()
        .map(|(informal, formal)| Substitution::new(informal, formal))
        .collect();

        let patterns = vec![
            PatternRule::bracketed("satisfaction", "让", "满意", "提升${clause}满意度"),
            PatternRule::bracketed("reassurance", "让", "放心", "确保${clause}安心"),
            PatternRule::bracketed("participation", "让", "参与", "推动${clause}积极参与"),
            PatternRule::bracketed("strengthen", "把", "做好", "切实加强${clause}"),
            PatternRule::bracketed("complete", "把", "完成", "全面完成${clause}"),
            PatternRule::bracketed("implement", "把", "落实", "切实落实${clause}"),
            PatternRule::bracketed("conduct", "对", "进行", "深入开展${clause}"),
            PatternRule::bracketed("organize", "对", "开展", "组织开展${clause}"),
        ];

        let fillers = ["一下", "呢", "啊", "吧", "嘛", "哦", "哈", "哟"]
            .into_iter()
            .map(String::from)
            .collect();

        Self {
            substitutions,
            patterns,
            fillers,
            ellipses: vec!["...".to_string()],
        }
    }
}

/// Lexicon tables with substitutions and pattern rules compiled, ready to run
#[derive(Debug, Clone)]
pub struct CompiledLexicon {
    pub(crate) substitutions: Vec<CompiledSubstitution>,
    pub(crate) rules: Vec<CompiledRule>,
    pub(crate) fillers: Vec<String>,
    pub(crate) ellipses: Vec<String>,
}

impl CompiledLexicon {
    /// Validate the tables and compile every substitution and pattern rule
    pub fn compile(config: &LexiconConfig) -> Result<Self> {
        if let Some(index) = config.fillers.iter().position(String::is_empty) {
            return Err(RewriteError::EmptyTerm {
                table: "fillers",
                index,
            });
        }
        if let Some(index) = config.ellipses.iter().position(String::is_empty) {
            return Err(RewriteError::EmptyTerm {
                table: "ellipses",
                index,
            });
        }

        let substitutions = config
            .substitutions
            .iter()
            .enumerate()
            .map(|(index, entry)| CompiledSubstitution::compile(entry, index))
            .collect::<Result<Vec<_>>>()?;

        let rules = config
            .patterns
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            substitutions,
            rules,
            fillers: config.fillers.clone(),
            ellipses: config.ellipses.clone(),
        })
    }
}
