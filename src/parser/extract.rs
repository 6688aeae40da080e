//! Term extraction - turn a cleaned query into an ordered list of search
//! terms, with priority classification for the SMART/MIXED builders.

use crate::patterns::LanguagePatternSet;

/// Punctuation trimmed from token edges, quoting marks included.
pub(crate) const TRIM_CHARS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '\'', '"',
];

/// Tokens surviving all stripping must keep at least this many characters,
/// unless they match a high-priority pattern.
const MIN_TERM_LEN: usize = 1;

/// Term priority for SMART query construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Technical codes and product names: always required, never expanded.
    High,
    /// Everything else surviving extraction: optional, synonym-expandable.
    Medium,
}

pub fn classify_priority(term: &str, set: &LanguagePatternSet) -> Priority {
    if set.is_high_priority(term) {
        Priority::High
    } else {
        Priority::Medium
    }
}

/// Extract search terms from a natural language query.
///
/// Strips command verbs, replaces AND/OR keywords with a group delimiter,
/// removes phrase keywords, lifts quoted phrases out whole, then splits the
/// rest into tokens and filters each through particle stripping, stopword
/// and intent-keyword rejection. Quoted phrases are appended after the
/// loose terms, as the builders expect. Relative token order is preserved -
/// the MIXED builder locates terms positionally.
pub fn extract_terms(query: &str, set: &LanguagePatternSet) -> Vec<String> {
    let mut cleaned = set.verbs.strip(query, " ");
    cleaned = set.operators.strip(&cleaned, " | ");
    cleaned = set.phrase_keywords.strip(&cleaned, " ");

    // Quoted phrases survive as single units, exempt from token filtering.
    let mut phrases = Vec::new();
    let snapshot = cleaned.clone();
    for caps in set.quoted().captures_iter(&snapshot) {
        let phrase = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string());
        if let Some(phrase) = phrase {
            cleaned = cleaned.replace(&format!("'{phrase}'"), " ");
            cleaned = cleaned.replace(&format!("\"{phrase}\""), " ");
            phrases.push(phrase);
        }
    }

    let mut terms = Vec::new();
    for part in cleaned.split('|') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        // CJK queries often carry no spaces at all; a space-free part is one
        // token.
        let tokens: Vec<&str> = if set.word_boundaries() || part.contains(' ') {
            part.split_whitespace().collect()
        } else {
            vec![part]
        };

        for raw in tokens {
            let token = raw.trim_matches(TRIM_CHARS);
            if token.is_empty() || set.is_stopword(token) || set.is_intent_keyword(token) {
                continue;
            }

            let stripped = set.strip_particles(token);
            if stripped.is_empty() || set.is_stopword(&stripped) || set.is_intent_keyword(&stripped)
            {
                continue;
            }
            if stripped.chars().count() < MIN_TERM_LEN && !set.is_high_priority(&stripped) {
                continue;
            }

            terms.push(stripped);
        }
    }

    terms.extend(phrases);
    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Language;
    use crate::patterns::PatternLibrary;

    fn library() -> PatternLibrary {
        PatternLibrary::new().expect("pattern tables should compile")
    }

    #[test]
    fn test_removes_verbs_and_stopwords() {
        let lib = library();
        let terms = extract_terms("find the error in the database", lib.get(Language::English));
        assert_eq!(terms, vec!["error", "database"]);
    }

    #[test]
    fn test_operator_keywords_become_delimiters() {
        let lib = library();
        let terms = extract_terms("find error and crash or timeout", lib.get(Language::English));
        assert_eq!(terms, vec!["error", "crash", "timeout"]);
    }

    #[test]
    fn test_quoted_phrases_survive_whole() {
        let lib = library();
        let terms = extract_terms("find error and 'connection timeout'", lib.get(Language::English));
        assert_eq!(terms, vec!["error", "connection timeout"]);
    }

    #[test]
    fn test_korean_particle_stripping() {
        let lib = library();
        let terms = extract_terms("TPETIME이 에러", lib.get(Language::Korean));
        assert_eq!(terms, vec!["TPETIME", "에러"]);
    }

    #[test]
    fn test_korean_intent_keywords_rejected() {
        let lib = library();
        let terms = extract_terms(
            "TPETIME error의 발생원인과 대응방안에 대해서 알려줘",
            lib.get(Language::Korean),
        );
        assert_eq!(terms, vec!["TPETIME", "error"]);
    }

    #[test]
    fn test_japanese_particles_and_verbs() {
        let lib = library();
        let terms = extract_terms("エラーとクラッシュを検索", lib.get(Language::Japanese));
        assert_eq!(terms, vec!["エラー", "クラッシュ"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let lib = library();
        let terms = extract_terms(
            "find database connection timeout error",
            lib.get(Language::English),
        );
        assert_eq!(terms, vec!["database", "connection", "timeout", "error"]);
    }

    #[test]
    fn test_priority_classification() {
        let lib = library();
        let en = lib.get(Language::English);
        assert_eq!(classify_priority("TPETIME", en), Priority::High);
        assert_eq!(classify_priority("OpenFrame", en), Priority::High);
        assert_eq!(classify_priority("error", en), Priority::Medium);
    }
}
