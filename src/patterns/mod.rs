//! Language pattern sets - the data the rule-based pipeline matches against.
//!
//! Public interface:
//! - `PatternLibrary` owning one compiled `LanguagePatternSet` per language
//! - `KeywordSet` for boundary-aware keyword matching
//!
//! Static tables live in `tables.rs`; they are compiled here once at
//! construction and read-only afterwards, so a parser can be shared across
//! threads without coordination.

mod tables;

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use regex::Regex;

use crate::parser::Language;

/// A set of operator/verb keywords with the matching policy baked in.
///
/// English keywords match on word boundaries so "or" never fires inside
/// "error". Korean and Japanese have no deterministic whitespace word
/// boundaries, so their keywords match by substring. Words are held longest
/// first so overlapping pairs (또는/나, または/また) resolve to the longer
/// keyword before the shorter one is consulted.
pub struct KeywordSet {
    words: Vec<&'static str>,
    /// Word-boundary matchers, parallel to `words`. English only.
    matchers: Option<Vec<Regex>>,
}

impl KeywordSet {
    fn new(words: &[&'static str], word_boundaries: bool) -> Result<Self> {
        let mut words = words.to_vec();
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let matchers = if word_boundaries {
            let compiled = words
                .iter()
                .map(|w| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(w))))
                .collect::<Result<Vec<_>, _>>()?;
            Some(compiled)
        } else {
            None
        };

        Ok(Self { words, matchers })
    }

    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    pub fn contains_any(&self, text: &str) -> bool {
        match &self.matchers {
            Some(matchers) => matchers.iter().any(|re| re.is_match(text)),
            None => self.words.iter().any(|w| text.contains(w)),
        }
    }

    /// All keywords present in `text`, longest first.
    pub fn found_in(&self, text: &str) -> Vec<&'static str> {
        match &self.matchers {
            Some(matchers) => self
                .words
                .iter()
                .zip(matchers)
                .filter(|(_, re)| re.is_match(text))
                .map(|(w, _)| *w)
                .collect(),
            None => self
                .words
                .iter()
                .filter(|w| text.contains(**w))
                .copied()
                .collect(),
        }
    }

    /// Byte offsets of every keyword occurrence in `text`, ascending.
    pub fn positions(&self, text: &str) -> Vec<usize> {
        let mut positions = Vec::new();
        match &self.matchers {
            Some(matchers) => {
                for re in matchers {
                    positions.extend(re.find_iter(text).map(|m| m.start()));
                }
            }
            None => {
                for word in &self.words {
                    positions.extend(text.match_indices(word).map(|(i, _)| i));
                }
            }
        }
        positions.sort_unstable();
        positions
    }

    /// Replace every keyword occurrence with `replacement`, longest first.
    pub fn strip(&self, text: &str, replacement: &str) -> String {
        let mut out = text.to_string();
        match &self.matchers {
            Some(matchers) => {
                for re in matchers {
                    out = re.replace_all(&out, replacement).into_owned();
                }
            }
            None => {
                for word in &self.words {
                    out = out.replace(word, replacement);
                }
            }
        }
        out
    }
}

/// Compiled pattern data for one language. Immutable after construction.
pub struct LanguagePatternSet {
    language: Language,
    pub and_keywords: KeywordSet,
    pub or_keywords: KeywordSet,
    pub phrase_keywords: KeywordSet,
    pub verbs: KeywordSet,
    pub question_words: KeywordSet,
    /// AND and OR keywords together, for operator stripping in extraction.
    pub operators: KeywordSet,
    stopwords: HashSet<&'static str>,
    particles: Vec<&'static str>,
    intent_keywords: HashSet<&'static str>,
    high_priority: Vec<Regex>,
    synonyms: HashMap<&'static str, &'static [&'static str]>,
    quoted: Regex,
}

impl LanguagePatternSet {
    fn from_table(language: Language, table: &tables::LanguageTable) -> Result<Self> {
        let bounded = language == Language::English;

        let mut operator_words = table.and_keywords.to_vec();
        operator_words.extend_from_slice(table.or_keywords);

        let mut particles = table.particles.to_vec();
        particles.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let high_priority = table
            .high_priority
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            language,
            and_keywords: KeywordSet::new(table.and_keywords, bounded)?,
            or_keywords: KeywordSet::new(table.or_keywords, bounded)?,
            phrase_keywords: KeywordSet::new(table.phrase_keywords, bounded)?,
            verbs: KeywordSet::new(table.verbs, bounded)?,
            question_words: KeywordSet::new(table.question_words, bounded)?,
            operators: KeywordSet::new(&operator_words, bounded)?,
            stopwords: table.stopwords.iter().copied().collect(),
            particles,
            intent_keywords: table.intent_keywords.iter().copied().collect(),
            high_priority,
            synonyms: table.synonyms.iter().copied().collect(),
            quoted: Regex::new(r#"'([^']+)'|"([^"]+)""#)?,
        })
    }

    /// English keyword matching is word-boundary based; CJK is substring.
    pub fn word_boundaries(&self) -> bool {
        self.language == Language::English
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word.to_lowercase().as_str())
    }

    pub fn is_intent_keyword(&self, word: &str) -> bool {
        self.intent_keywords.contains(word.to_lowercase().as_str())
    }

    /// Strip one matching particle suffix from the token edge. Whole-token
    /// particles reduce to the empty string and are dropped by the caller.
    pub fn strip_particles(&self, token: &str) -> String {
        for particle in &self.particles {
            if let Some(rest) = token.strip_suffix(particle) {
                return rest.to_string();
            }
        }
        token.to_string()
    }

    pub fn is_high_priority(&self, term: &str) -> bool {
        self.high_priority.iter().any(|re| re.is_match(term))
    }

    /// Expand a term into its cross-language OR-group, if one is defined.
    /// Only meaningful for non-English queries; English sets carry no
    /// synonyms, so this is a no-op there.
    pub fn expand_synonyms(&self, term: &str) -> Option<String> {
        let variants = self.synonyms.get(term.to_lowercase().as_str())?;
        Some(variants.join(" "))
    }

    /// Matcher for `'quoted'` and `"quoted"` phrase spans.
    pub fn quoted(&self) -> &Regex {
        &self.quoted
    }
}

/// One compiled pattern set per supported language, loaded once.
pub struct PatternLibrary {
    en: LanguagePatternSet,
    ko: LanguagePatternSet,
    ja: LanguagePatternSet,
}

impl PatternLibrary {
    pub fn new() -> Result<Self> {
        Ok(Self {
            en: LanguagePatternSet::from_table(Language::English, &tables::ENGLISH)?,
            ko: LanguagePatternSet::from_table(Language::Korean, &tables::KOREAN)?,
            ja: LanguagePatternSet::from_table(Language::Japanese, &tables::JAPANESE)?,
        })
    }

    pub fn get(&self, language: Language) -> &LanguagePatternSet {
        match language {
            Language::English => &self.en,
            Language::Korean => &self.ko,
            Language::Japanese => &self.ja,
        }
    }

    pub fn all(&self) -> [&LanguagePatternSet; 3] {
        [&self.en, &self.ko, &self.ja]
    }
}
