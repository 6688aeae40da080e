//! Query language detection by Unicode script inspection.

use serde::Serialize;

/// Supported query languages. A closed set: scripts outside it fall back to
/// English rather than introducing an "unknown" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "ja")]
    Japanese,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Korean => "ko",
            Language::Japanese => "ja",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Detect the query language from the scripts present.
///
/// Hangul wins over Kana/Kanji, which win over Latin, so mixed-script queries
/// are classified by their first non-Latin script in that priority order.
pub fn detect_language(query: &str) -> Language {
    if query.chars().any(is_hangul) {
        return Language::Korean;
    }
    if query.chars().any(is_japanese) {
        return Language::Japanese;
    }
    Language::English
}

fn is_hangul(c: char) -> bool {
    matches!(c, '\u{ac00}'..='\u{d7a3}')
}

fn is_japanese(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309f}' |  // Hiragana
        '\u{30a0}'..='\u{30ff}' |  // Katakana
        '\u{4e00}'..='\u{9fff}'    // CJK ideographs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        assert_eq!(detect_language("find error and crash"), Language::English);
        assert_eq!(detect_language("TPETIME SVC99"), Language::English);
    }

    #[test]
    fn test_detects_korean() {
        assert_eq!(detect_language("에러 찾아줘"), Language::Korean);
        assert_eq!(detect_language("오류"), Language::Korean);
    }

    #[test]
    fn test_detects_japanese() {
        assert_eq!(detect_language("エラーを検索"), Language::Japanese);
        assert_eq!(detect_language("完全一致"), Language::Japanese);
    }

    #[test]
    fn test_mixed_scripts_prioritize_korean() {
        // Latin + Hangul is Korean even when English words dominate.
        assert_eq!(
            detect_language("TPETIME error의 발생원인"),
            Language::Korean
        );
        // Hangul outranks Kanji when both appear.
        assert_eq!(detect_language("오류 原因"), Language::Korean);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Korean.code(), "ko");
        assert_eq!(Language::Japanese.code(), "ja");
        // Display mirrors the wire code.
        assert_eq!(Language::Korean.to_string(), "ko");
    }
}
