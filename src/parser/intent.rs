//! Boolean-structure intent classification.
//!
//! Decides which of the five construction strategies a query gets. Ordered
//! checks, first match wins: a quote-delimited span with no surrounding
//! operators is PHRASE, a single operator family is AND or OR, several
//! families are MIXED, and no structural signal at all is SIMPLE.

use crate::parser::extract::TRIM_CHARS;
use crate::patterns::LanguagePatternSet;

/// Detected boolean structure of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Every term required.
    And,
    /// Every term optional.
    Or,
    /// One exact-match unit.
    Phrase,
    /// A required group followed by an optional group.
    Mixed,
    /// No explicit structure; priority heuristics decide downstream.
    Simple,
}

/// Classify the boolean structure of a natural language query.
///
/// Intent-keyword tokens are masked out before keyword scanning: a
/// conjunction particle glued to an intent compound ("발생원인과") is
/// grammatical glue on a word that is about to be filtered, not a real
/// AND between search terms.
pub fn detect_intent(query: &str, set: &LanguagePatternSet) -> Intent {
    let visible = mask_intent_tokens(query, set);
    let visible = visible.to_lowercase();

    let has_quotes = query.contains('\'') || query.contains('"');
    let has_phrase_keyword = set.phrase_keywords.contains_any(&visible);

    let mut found_or = set.or_keywords.found_in(&visible);
    let mut found_and = set.and_keywords.found_in(&visible);
    if !set.word_boundaries() {
        // Substring matching lets a short keyword of one family fire inside
        // a longer keyword of the other (また within または, か within かつ).
        // A short keyword counts only if it occurs somewhere outside every
        // longer match, so a standalone か elsewhere still registers.
        let and_snapshot = found_and.clone();
        found_and.retain(|a| !fully_shadowed(&visible, a, &found_or));
        found_or.retain(|o| !fully_shadowed(&visible, o, &and_snapshot));
    }

    let mut operators = 0;
    if has_quotes || has_phrase_keyword {
        if found_and.is_empty() && found_or.is_empty() {
            return Intent::Phrase;
        }
        operators += 1;
    }
    if !found_and.is_empty() {
        operators += 1;
    }
    if !found_or.is_empty() {
        operators += 1;
    }

    match operators {
        0 => Intent::Simple,
        1 if !found_and.is_empty() => Intent::And,
        1 => Intent::Or,
        _ => Intent::Mixed,
    }
}

/// Whether every occurrence of `word` in `text` lies inside an occurrence
/// of a longer keyword from `covers` that contains it.
fn fully_shadowed(text: &str, word: &str, covers: &[&str]) -> bool {
    let spans: Vec<(usize, usize)> = covers
        .iter()
        .copied()
        .filter(|c| c.len() > word.len() && c.contains(word))
        .flat_map(|c| text.match_indices(c).map(move |(i, _)| (i, i + c.len())))
        .collect();
    if spans.is_empty() {
        return false;
    }
    text.match_indices(word)
        .all(|(i, _)| spans.iter().any(|&(s, e)| s <= i && i + word.len() <= e))
}

/// Drop whitespace tokens that reduce to an intent keyword after particle
/// stripping, keeping the rest of the query verbatim for keyword scanning.
fn mask_intent_tokens(query: &str, set: &LanguagePatternSet) -> String {
    query
        .split_whitespace()
        .filter(|raw| {
            let token = raw.trim_matches(TRIM_CHARS);
            if set.is_intent_keyword(token) {
                return false;
            }
            !set.is_intent_keyword(&set.strip_particles(token))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
