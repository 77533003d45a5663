pub mod error;
pub mod io;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod stages;

pub use error::{Result, RewriteError};
pub use io::{load_config_file, parse_config_json, RewriteReport, StageName, StageSnapshot};
pub use lexicon::{CompiledLexicon, LexiconConfig};
pub use models::{Classification, PatternRule, PhraseFix, Role, RoleCounts, Sentence, Substitution};
pub use pipeline::{optimize_document, RewriteConfig, Rewriter};
pub use stages::{
    execute_stage1, execute_stage2, execute_stage3, normalize, OrganizeConfig, PolishConfig,
    Stage1Result, Stage2Result, Stage3Result,
};
