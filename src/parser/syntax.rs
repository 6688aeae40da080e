//! IMS syntax detection - decide whether input needs parsing at all.

use crate::patterns::PatternLibrary;

/// Detect whether a query is already IMS boolean syntax rather than natural
/// language.
///
/// IMS syntax indicators: a leading required-term marker (`+`), a quoted
/// phrase, or a purely numeric issue number. Natural language indicators:
/// a command verb, a conjunction keyword or a question word from any
/// supported language. A query with no signal either way is treated as
/// natural language - running the pipeline on an already-clean query is
/// harmless, skipping it on a sentence is not.
pub fn is_boolean_syntax(query: &str, patterns: &PatternLibrary) -> bool {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return false;
    }

    if trimmed.starts_with('+') {
        return true;
    }
    if query.contains('\'') || query.contains('"') {
        return true;
    }
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    let lower = query.to_lowercase();
    for set in patterns.all() {
        let natural = [
            &set.verbs,
            &set.and_keywords,
            &set.or_keywords,
            &set.question_words,
        ];
        if natural.iter().any(|ks| ks.contains_any(&lower)) {
            return false;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> PatternLibrary {
        PatternLibrary::new().expect("pattern tables should compile")
    }

    #[test]
    fn test_detects_required_term_marker() {
        let p = patterns();
        assert!(is_boolean_syntax("+error +crash", &p));
        assert!(is_boolean_syntax("+connection", &p));
    }

    #[test]
    fn test_detects_quoted_phrases() {
        let p = patterns();
        assert!(is_boolean_syntax("'connection timeout'", &p));
        assert!(is_boolean_syntax("error 'out of memory'", &p));
        assert!(is_boolean_syntax("\"connection timeout\"", &p));
    }

    #[test]
    fn test_detects_issue_numbers() {
        let p = patterns();
        assert!(is_boolean_syntax("348115", &p));
        assert!(is_boolean_syntax("12345", &p));
    }

    #[test]
    fn test_detects_natural_language_verbs() {
        let p = patterns();
        assert!(!is_boolean_syntax("find error and crash", &p));
        assert!(!is_boolean_syntax("search for timeout", &p));
        assert!(!is_boolean_syntax("show connection issues", &p));
        assert!(!is_boolean_syntax("에러 찾아줘", &p));
        assert!(!is_boolean_syntax("エラーを検索", &p));
    }

    #[test]
    fn test_detects_natural_language_conjunctions() {
        let p = patterns();
        assert!(!is_boolean_syntax("error and crash", &p));
        assert!(!is_boolean_syntax("connection or timeout", &p));
    }

    #[test]
    fn test_ambiguous_defaults_to_natural_language() {
        let p = patterns();
        assert!(!is_boolean_syntax("error crash", &p));
        assert!(!is_boolean_syntax("timeout", &p));
    }

    #[test]
    fn test_edge_cases() {
        let p = patterns();
        assert!(!is_boolean_syntax("", &p));
        assert!(!is_boolean_syntax("   ", &p));
        // A verb outranks an embedded marker.
        assert!(!is_boolean_syntax("find +error", &p));
    }
}
