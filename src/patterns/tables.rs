//! Static per-language pattern data.
//!
//! One table per supported language: operator keywords, command verbs,
//! question words, stopwords, grammatical particles (Korean/Japanese),
//! intent keywords, high-priority term regexes and the synonym dictionary.
//! Tables are compiled into a `LanguagePatternSet` once at parser
//! construction; nothing in here is matched raw.

pub struct LanguageTable {
    pub and_keywords: &'static [&'static str],
    pub or_keywords: &'static [&'static str],
    pub phrase_keywords: &'static [&'static str],
    pub verbs: &'static [&'static str],
    pub question_words: &'static [&'static str],
    pub stopwords: &'static [&'static str],
    /// Grammatical suffixes stripped from token edges (never whole-token).
    pub particles: &'static [&'static str],
    /// Words describing what the user wants to know, not what to search for.
    pub intent_keywords: &'static [&'static str],
    /// Anchored regexes identifying technical codes and product names.
    pub high_priority: &'static [&'static str],
    /// Canonical English technical term -> accepted cross-language variants.
    pub synonyms: &'static [(&'static str, &'static [&'static str])],
}

/// Technical identifiers look the same in every supported language:
/// all-caps codes (TPETIME, SVC99, RC16) and CamelCase product names
/// (OpenFrame). They must never be filtered, expanded or made optional.
const HIGH_PRIORITY: &[&str] = &[
    r"^[A-Z0-9]{4,}$",
    r"^[A-Z]{2,}[0-9]+$",
    r"^[A-Z][a-z0-9]+(?:[A-Z][a-z0-9]*)+$",
];

pub static ENGLISH: LanguageTable = LanguageTable {
    and_keywords: &["and", "with", "plus", "both", "also"],
    or_keywords: &["or", "either"],
    phrase_keywords: &["exact", "exactly", "phrase", "literal", "literally"],
    verbs: &[
        "find", "search", "show", "list", "get", "display", "fetch", "retrieve",
    ],
    question_words: &["what", "which", "where", "when", "who", "how", "why"],
    stopwords: &[
        "the", "a", "an", "is", "are", "was", "were",
        "be", "been", "being", "have", "has", "had",
        "do", "does", "did", "will", "would", "should",
        "could", "may", "might", "must", "can",
        "this", "that", "these", "those",
        "i", "you", "he", "she", "it", "we", "they",
        "me", "him", "her", "us", "them",
        "my", "your", "his", "its", "our", "their",
        "all", "some", "any", "many", "much", "more", "most",
        "in", "on", "at", "to", "from", "of", "by", "for", "about",
    ],
    particles: &[],
    intent_keywords: &[
        "cause", "causes", "reason", "reasons",
        "solution", "solutions", "workaround", "guide", "explanation",
    ],
    high_priority: HIGH_PRIORITY,
    synonyms: &[],
};

pub static KOREAN: LanguageTable = LanguageTable {
    and_keywords: &["와", "과", "그리고", "및", "또한", "하고", "랑", "이랑"],
    or_keywords: &["또는", "혹은", "이나", "거나", "나"],
    phrase_keywords: &["정확히", "정확한", "완전히", "정확하게", "그대로"],
    verbs: &[
        "찾아줘", "보여줘", "알려줘", "검색해줘", "찾아", "검색해", "검색",
        "보여", "알려", "가져와", "찾기",
    ],
    question_words: &["무엇", "어떤", "어디", "언제", "왜"],
    stopwords: &[
        "이", "그", "저", "것", "수", "등", "들", "좀", "더", "를", "을",
        "가", "이가", "에", "에서", "으로", "로", "의", "도", "만", "까지",
        "부터", "조차", "마저", "은", "는", "이는", "있는", "없는", "되는",
        "하는", "한", "할", "해", "줘", "주세요", "요", "입니다", "습니다",
        "대해서", "대해", "대한", "발생하는", "시",
    ],
    particles: &[
        "에서", "으로", "이랑", "에게", "한테", "부터", "까지", "처럼",
        "보다", "의", "에", "로", "를", "을", "가", "은", "는", "도", "만",
        "와", "과", "랑", "이",
    ],
    intent_keywords: &[
        "발생원인", "발생", "원인", "이유",
        "대응방안", "해결방법", "해결방안", "해결책", "처리방안",
        "조치사항", "조치", "방법", "방안", "가이드", "정보", "현상",
    ],
    high_priority: HIGH_PRIORITY,
    synonyms: &[
        ("error", &["error", "에러", "오류"]),
        ("crash", &["crash", "크래시", "충돌"]),
        ("timeout", &["timeout", "타임아웃", "시간초과"]),
        ("connection", &["connection", "연결", "접속"]),
        ("memory", &["memory", "메모리"]),
        ("database", &["database", "데이터베이스", "DB"]),
        ("network", &["network", "네트워크"]),
        ("failure", &["failure", "실패", "장애"]),
        ("batch", &["batch", "배치"]),
    ],
};

pub static JAPANESE: LanguageTable = LanguageTable {
    and_keywords: &["と", "および", "かつ", "そして", "さらに", "また"],
    or_keywords: &["または", "か", "あるいは", "もしくは", "ないし"],
    phrase_keywords: &["正確に", "完全一致", "完全に", "そのまま", "厳密に"],
    verbs: &[
        "検索する", "見つける", "検索", "探す", "見つけ", "表示", "取得",
        "調べる",
    ],
    question_words: &["何", "どの", "どこ", "いつ", "なぜ"],
    stopwords: &[
        "の", "が", "を", "に", "は", "で", "と", "や", "から", "まで",
        "より", "へ", "も", "か", "な", "ね", "よ", "だ", "です", "ます",
        "である", "する", "した", "される", "されている", "ある", "いる",
        "この", "その", "あの", "どの", "これ", "それ", "あれ", "どれ",
    ],
    particles: &[
        "から", "まで", "より", "を", "に", "は", "が", "で", "と", "や",
        "へ", "も",
    ],
    intent_keywords: &[
        "原因", "理由", "対応", "対策", "解決策", "解決方法", "方法",
        "手順", "ガイド", "情報",
    ],
    high_priority: HIGH_PRIORITY,
    synonyms: &[
        ("error", &["error", "エラー"]),
        ("crash", &["crash", "クラッシュ"]),
        ("timeout", &["timeout", "タイムアウト"]),
        ("connection", &["connection", "接続"]),
        ("memory", &["memory", "メモリ"]),
        ("database", &["database", "データベース"]),
    ],
};
