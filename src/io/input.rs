use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::RewriteConfig;

/// Load rewrite tables from a JSON file
pub fn load_config_file(path: &Path) -> Result<RewriteConfig> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_config_json(&content).with_context(|| format!("Invalid rewrite config in {:?}", path))
}

/// Parse rewrite tables from JSON
///
/// Missing sections and fields keep their built-in defaults, so a file can
/// override a single table.
pub fn parse_config_json(json: &str) -> Result<RewriteConfig> {
    serde_json::from_str(json).context("Failed to parse rewrite config JSON")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::lexicon::LexiconConfig;
    use crate::models::Substitution;
    use crate::stages::OrganizeConfig;
    use crate::Rewriter;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{
            "lexicon": {
                "substitutions": [
                    {"informal": "搞定", "formal": "圆满完成"}
                ]
            },
            "organize": {"min_sentences": 2}
        }"#;

        let config = parse_config_json(json).unwrap();

        assert_eq!(
            config.lexicon.substitutions,
            vec![Substitution::new("搞定", "圆满完成")]
        );
        assert_eq!(config.lexicon.fillers, LexiconConfig::default().fillers);
        assert_eq!(config.organize.min_sentences, 2);
        assert_eq!(
            config.organize.measure_keywords,
            OrganizeConfig::default().measure_keywords
        );
    }

    #[test]
    fn test_empty_object_is_default_config() {
        let config = parse_config_json("{}").unwrap();
        assert_eq!(config, RewriteConfig::default());
    }

    #[test]
    fn test_default_config_round_trips() {
        let json = serde_json::to_string(&RewriteConfig::default()).unwrap();
        assert_eq!(parse_config_json(&json).unwrap(), RewriteConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        assert!(parse_config_json("{\"lexicon\": [").is_err());
        assert!(parse_config_json("{\"organize\": {\"min_sentences\": \"three\"}}").is_err());
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"polish": {{"phrase_fixes": [{{"redundant": "开展开展", "canonical": "开展"}}]}}}}"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        let rewriter = Rewriter::new(config).unwrap();
        assert_eq!(rewriter.rewrite("开展开展调研"), "开展调研。");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
