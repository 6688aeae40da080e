//! Natural language query parsing - the rule-based pipeline and its result
//! type.
//!
//! Public interface:
//! - `NaturalLanguageParser` for the full parse pipeline
//! - `ParseResult` / `Method` for the outcome handed to the caller
//! - `Language` and `detect_language`
//! - `is_boolean_syntax` via the parser, for callers deciding whether to
//!   parse at all
//!
//! Pipeline: syntax check, language detection, intent classification, term
//! extraction, query construction, confidence scoring; an optional LLM
//! fallback replaces low-confidence rule results when configured.

mod builder;
mod extract;
mod intent;
mod language;
mod syntax;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::llm::{normalize_completion, prompts, QueryCompletion};
use crate::patterns::PatternLibrary;

pub use intent::Intent;
pub use language::{detect_language, Language};

/// Rule results below this confidence consult the LLM fallback, when one is
/// configured.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.70;

/// Fixed confidence for fallback results; the service reports none itself.
const LLM_CONFIDENCE: f32 = 0.80;

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Rule-based pipeline.
    Rules,
    /// LLM fallback override.
    Llm,
    /// Input was already IMS syntax and passed through unchanged.
    Direct,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Method::Rules => "rules",
            Method::Llm => "llm",
            Method::Direct => "direct",
        })
    }
}

/// Outcome of parsing one query. A pure value: constructed once, never
/// mutated, not persisted here.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    /// Verbatim input.
    pub original_query: String,
    /// The produced IMS boolean expression.
    pub ims_query: String,
    pub language: Language,
    pub method: Method,
    /// 0.0 - 1.0.
    pub confidence: f32,
    /// Human-readable justification, e.g. "AND query: 2 required terms".
    pub explanation: String,
}

/// Rule-based natural language to IMS syntax parser.
///
/// Stateless across calls: pattern tables are read-only after construction,
/// so one parser can serve many threads without coordination. The only
/// blocking operation is the optional fallback's network call, bounded by
/// the client's own timeout.
pub struct NaturalLanguageParser {
    patterns: PatternLibrary,
    fallback: Option<Box<dyn QueryCompletion>>,
    threshold: f32,
}

impl NaturalLanguageParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: PatternLibrary::new()?,
            fallback: None,
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        })
    }

    /// Attach an LLM fallback for low-confidence parses.
    pub fn with_fallback(mut self, client: Box<dyn QueryCompletion>) -> Self {
        self.fallback = Some(client);
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Whether `query` is already IMS syntax and needs no parsing.
    pub fn is_boolean_syntax(&self, query: &str) -> bool {
        syntax::is_boolean_syntax(query, &self.patterns)
    }

    /// Parse a natural language query into IMS syntax.
    ///
    /// Fails only on empty or whitespace-only input; every other query
    /// produces a `ParseResult`.
    pub fn parse(&self, query: &str) -> Result<ParseResult> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            bail!("empty query: nothing to parse");
        }

        // A leading required-term marker or a bare issue number is already
        // IMS syntax. Quoted input still runs the pipeline - the quotes may
        // sit inside a larger natural language sentence.
        if trimmed.starts_with('+') || trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Ok(ParseResult {
                original_query: query.to_string(),
                ims_query: trimmed.to_string(),
                language: detect_language(query),
                method: Method::Direct,
                confidence: 1.0,
                explanation: "Already in IMS syntax".to_string(),
            });
        }

        let language = detect_language(query);
        let set = self.patterns.get(language);

        let intent = intent::detect_intent(query, set);
        let terms = extract::extract_terms(query, set);
        let built = builder::build_query(intent, query, &terms, set);

        let mut result = ParseResult {
            original_query: query.to_string(),
            ims_query: built.ims_query,
            language,
            method: Method::Rules,
            confidence: built.confidence,
            explanation: built.explanation,
        };

        if result.confidence < self.threshold {
            if let Some(client) = self.fallback.as_deref() {
                // Single attempt; any failure keeps the rules result.
                if let Some(better) = try_fallback(query, language, client) {
                    result = better;
                }
            }
        }

        Ok(result)
    }
}

fn try_fallback(
    query: &str,
    language: Language,
    client: &dyn QueryCompletion,
) -> Option<ParseResult> {
    if !client.is_available() {
        return None;
    }
    let prompt = prompts::build_prompt(query, language);
    let raw = client.complete(&prompt).ok()?;
    let ims_query = normalize_completion(&raw)?;

    Some(ParseResult {
        original_query: query.to_string(),
        ims_query,
        language,
        method: Method::Llm,
        confidence: LLM_CONFIDENCE,
        explanation: "Parsed using LLM fallback for complex query".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parser() -> NaturalLanguageParser {
        NaturalLanguageParser::new().expect("parser should construct")
    }

    #[test]
    fn test_direct_passthrough() {
        let p = parser();
        let result = p.parse("+error +crash").unwrap();
        assert_eq!(result.ims_query, "+error +crash");
        assert_eq!(result.method, Method::Direct);
        assert_relative_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_issue_number_passthrough() {
        let p = parser();
        let result = p.parse("348115").unwrap();
        assert_eq!(result.ims_query, "348115");
        assert_eq!(result.method, Method::Direct);
    }

    #[test]
    fn test_quoted_input_still_parses() {
        let p = parser();
        let result = p.parse("exact 'out of memory'").unwrap();
        assert_eq!(result.ims_query, "'out of memory'");
        assert_eq!(result.method, Method::Rules);
        assert_relative_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let p = parser();
        assert!(p.parse("").is_err());
        assert!(p.parse("   ").is_err());
    }

    #[test]
    fn test_original_query_preserved() {
        let p = parser();
        let result = p.parse("find error and crash").unwrap();
        assert_eq!(result.original_query, "find error and crash");
        assert!(!result.explanation.is_empty());
    }
}
