//! IMS query construction - one strategy per detected intent.
//!
//! Output grammar is the search backend's three markers and nothing else:
//! `+term` (required), bare term (optional OR), `'phrase'` (exact match).

use regex::Regex;

use crate::parser::extract::{classify_priority, Priority};
use crate::parser::intent::Intent;
use crate::patterns::LanguagePatternSet;

/// A constructed IMS query with its confidence and justification.
pub struct BuiltQuery {
    pub ims_query: String,
    pub confidence: f32,
    pub explanation: String,
}

/// Build the IMS query for `terms` under the detected intent. `query` is the
/// original input, needed by the MIXED strategy for positional grouping.
pub fn build_query(
    intent: Intent,
    query: &str,
    terms: &[String],
    set: &LanguagePatternSet,
) -> BuiltQuery {
    match intent {
        Intent::And => build_and(terms),
        Intent::Or => build_or(terms),
        Intent::Phrase => build_phrase(terms),
        Intent::Mixed => build_mixed(query, terms, set),
        Intent::Simple => build_smart(terms, set),
    }
}

fn require(term: &str) -> String {
    format!("+{term}")
}

fn build_and(terms: &[String]) -> BuiltQuery {
    let ims_query = terms
        .iter()
        .map(|t| require(t))
        .collect::<Vec<_>>()
        .join(" ");
    BuiltQuery {
        ims_query,
        confidence: 0.90,
        explanation: format!("AND query: {} required terms", terms.len()),
    }
}

fn build_or(terms: &[String]) -> BuiltQuery {
    BuiltQuery {
        ims_query: terms.join(" "),
        confidence: 0.90,
        explanation: format!("OR query: {} optional terms", terms.len()),
    }
}

fn build_phrase(terms: &[String]) -> BuiltQuery {
    let phrase = terms.join(" ");
    BuiltQuery {
        ims_query: format!("'{phrase}'"),
        confidence: 0.95,
        explanation: "Exact phrase query".to_string(),
    }
}

/// Terms strictly before the first OR-keyword occurrence form the required
/// group; everything at or after it is optional. Alternating AND/OR clauses
/// collapse into that two-group shape - a known, accepted approximation, and
/// all the backend grammar can express anyway.
fn build_mixed(query: &str, terms: &[String], set: &LanguagePatternSet) -> BuiltQuery {
    let query_lower = query.to_lowercase();
    let or_positions = set.or_keywords.positions(&query_lower);

    let Some(&first_or) = or_positions.first() else {
        // No usable OR boundary (the OR cue sat inside a quoted span or was
        // swallowed by a longer keyword): best effort, require everything.
        let ims_query = terms
            .iter()
            .map(|t| require(t))
            .collect::<Vec<_>>()
            .join(" ");
        return BuiltQuery {
            ims_query,
            confidence: 0.75,
            explanation: format!("Mixed query: {} terms", terms.len()),
        };
    };

    let mut required = Vec::new();
    let mut optional = Vec::new();
    for term in terms {
        match term_position(&query_lower, term, set.word_boundaries()) {
            Some(pos) if pos < first_or => required.push(require(term)),
            // Unlocatable terms (reshaped by particle stripping) stay
            // optional rather than being dropped.
            _ => optional.push(term.clone()),
        }
    }

    let required_count = required.len();
    let optional_count = optional.len();
    let mut parts = required;
    parts.extend(optional);

    let (confidence, explanation) = if required_count > 0 && optional_count > 0 {
        (
            0.80,
            format!(
                "Mixed query: {required_count} required (AND) + {optional_count} optional (OR) terms"
            ),
        )
    } else {
        (0.75, format!("Mixed query: {} terms", terms.len()))
    };

    BuiltQuery {
        ims_query: parts.join(" "),
        confidence,
        explanation,
    }
}

/// No explicit structure: high-priority terms become required, the rest stay
/// optional and get synonym-expanded for cross-language coverage.
fn build_smart(terms: &[String], set: &LanguagePatternSet) -> BuiltQuery {
    let mut required = Vec::new();
    let mut optional = Vec::new();
    let mut expanded = false;

    for term in terms {
        match classify_priority(term, set) {
            Priority::High => required.push(require(term)),
            Priority::Medium => match set.expand_synonyms(term) {
                Some(group) => {
                    expanded = true;
                    optional.push(group);
                }
                None => optional.push(term.clone()),
            },
        }
    }

    let high_count = required.len();
    let medium_count = optional.len();
    let mut parts = required;
    parts.extend(optional);

    let (confidence, mut explanation) = if high_count > 0 && medium_count > 0 {
        (
            0.75,
            format!("Smart query: {high_count} required + {medium_count} optional terms"),
        )
    } else if high_count > 0 {
        (0.80, format!("Required terms: {high_count} terms"))
    } else {
        (0.60, format!("Simple query: {medium_count} terms"))
    };
    if expanded {
        explanation.push_str(" (with synonyms)");
    }

    BuiltQuery {
        ims_query: parts.join(" "),
        confidence,
        explanation,
    }
}

/// Locate a term in the lowercased query, honoring the per-language
/// boundary policy so "or" inside "error" never anchors a group.
fn term_position(query_lower: &str, term: &str, word_boundaries: bool) -> Option<usize> {
    let needle = term.to_lowercase();
    if word_boundaries {
        let re = Regex::new(&format!(r"\b{}\b", regex::escape(&needle))).ok()?;
        re.find(query_lower).map(|m| m.start())
    } else {
        query_lower.find(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Language;
    use crate::patterns::PatternLibrary;
    use approx::assert_relative_eq;

    fn library() -> PatternLibrary {
        PatternLibrary::new().expect("pattern tables should compile")
    }

    fn strings(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_and_query() {
        let built = build_and(&strings(&["error", "crash"]));
        assert_eq!(built.ims_query, "+error +crash");
        assert_relative_eq!(built.confidence, 0.90);
        assert_eq!(built.explanation, "AND query: 2 required terms");
    }

    #[test]
    fn test_or_query() {
        let built = build_or(&strings(&["connection", "timeout"]));
        assert_eq!(built.ims_query, "connection timeout");
        assert_relative_eq!(built.confidence, 0.90);
    }

    #[test]
    fn test_phrase_query() {
        let built = build_phrase(&strings(&["out of memory"]));
        assert_eq!(built.ims_query, "'out of memory'");
        assert_relative_eq!(built.confidence, 0.95);
    }

    #[test]
    fn test_mixed_groups_split_at_first_or_keyword() {
        let lib = library();
        let en = lib.get(Language::English);
        let built = build_query(
            Intent::Mixed,
            "find error and crash or timeout",
            &strings(&["error", "crash", "timeout"]),
            en,
        );
        assert_eq!(built.ims_query, "+error +crash timeout");
        assert_relative_eq!(built.confidence, 0.80);
        assert_eq!(
            built.explanation,
            "Mixed query: 2 required (AND) + 1 optional (OR) terms"
        );
    }

    #[test]
    fn test_mixed_without_or_boundary_requires_everything() {
        let lib = library();
        let en = lib.get(Language::English);
        let built = build_query(
            Intent::Mixed,
            "find error and 'connection timeout'",
            &strings(&["error", "connection timeout"]),
            en,
        );
        assert_eq!(built.ims_query, "+error +connection timeout");
        assert_relative_eq!(built.confidence, 0.75);
    }

    #[test]
    fn test_smart_query_requires_technical_terms() {
        let lib = library();
        let en = lib.get(Language::English);
        let built = build_smart(&strings(&["OpenFrame", "TPETIME", "error", "timeout"]), en);
        assert_eq!(built.ims_query, "+OpenFrame +TPETIME error timeout");
        assert_relative_eq!(built.confidence, 0.75);
        assert_eq!(built.explanation, "Smart query: 2 required + 2 optional terms");
    }

    #[test]
    fn test_smart_query_only_technical_terms() {
        let lib = library();
        let en = lib.get(Language::English);
        let built = build_smart(&strings(&["TPETIME", "SVC99", "DYNALLOC"]), en);
        assert_eq!(built.ims_query, "+TPETIME +SVC99 +DYNALLOC");
        assert_relative_eq!(built.confidence, 0.80);
    }

    #[test]
    fn test_smart_query_expands_korean_synonyms() {
        let lib = library();
        let ko = lib.get(Language::Korean);
        let built = build_smart(&strings(&["TPETIME", "error"]), ko);
        assert_eq!(built.ims_query, "+TPETIME error 에러 오류");
        assert_relative_eq!(built.confidence, 0.75);
        assert_eq!(
            built.explanation,
            "Smart query: 1 required + 1 optional terms (with synonyms)"
        );
    }

    #[test]
    fn test_high_priority_terms_never_expanded() {
        let lib = library();
        let ko = lib.get(Language::Korean);
        // DB is a synonym target but TPETIME-style codes must stay exact.
        let built = build_smart(&strings(&["TPETIME"]), ko);
        assert_eq!(built.ims_query, "+TPETIME");
    }

    #[test]
    fn test_smart_query_all_optional() {
        let lib = library();
        let en = lib.get(Language::English);
        let built = build_smart(&strings(&["error", "crash"]), en);
        assert_eq!(built.ims_query, "error crash");
        assert_relative_eq!(built.confidence, 0.60);
        assert_eq!(built.explanation, "Simple query: 2 terms");
    }
}
