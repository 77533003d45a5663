/// Delete every occurrence of each filler token, anywhere in the text
///
/// No boundary check: a filler embedded in a longer word is deleted too.
pub fn strip_fillers(text: &str, fillers: &[String]) -> (String, usize) {
    let mut current = text.to_string();
    let mut removed = 0;

    for filler in fillers.iter().filter(|f| !f.is_empty()) {
        let hits = current.matches(filler.as_str()).count();
        if hits > 0 {
            current = current.replace(filler.as_str(), "");
            removed += hits;
        }
    }

    (current, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fillers(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_strips_sentence_particles() {
        let (text, removed) = strip_fillers("好的吧，看一下呢", &fillers(&["一下", "呢", "吧"]));
        assert_eq!(text, "好的，看");
        assert_eq!(removed, 3);
    }

    #[test]
    fn test_deletes_inside_words() {
        let (text, _) = strip_fillers("毛呢大衣", &fillers(&["呢"]));
        assert_eq!(text, "毛大衣");
    }

    #[test]
    fn test_no_fillers_present() {
        let (text, removed) = strip_fillers("加强管理", &fillers(&["啊"]));
        assert_eq!(text, "加强管理");
        assert_eq!(removed, 0);
    }
}
