use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::STOP;

static COMMA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new("，+").unwrap());
static STOP_RUN: Lazy<Regex> = Lazy::new(|| Regex::new("。+").unwrap());

/// Collapse repeated commas and stops, turning each ellipsis into a stop
pub fn normalize_punctuation(text: &str, ellipses: &[String]) -> String {
    let mut text = text.to_string();

    for ellipsis in ellipses.iter().filter(|e| !e.is_empty()) {
        text = text.replace(ellipsis.as_str(), &STOP.to_string());
    }
    text = text.replace("。。", "。");

    let text = COMMA_RUN.replace_all(&text, "，");
    STOP_RUN.replace_all(&text, "。").into_owned()
}
