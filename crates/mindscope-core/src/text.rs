//! Tokenization and stopword filtering.
//!
//! Both the token pattern and the stopword set are process-wide constants,
//! built once on first use and never mutated afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Tokens shorter than this many characters are always dropped.
pub const MIN_TOKEN_CHARS: usize = 3;

/// English function words excluded from frequency analysis.
#[rustfmt::skip]
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself",
    "she", "her", "hers", "herself",
    "it", "its", "itself",
    "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those",
    "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having",
    "do", "does", "did", "doing",
    "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while",
    "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out",
    "on", "off", "over", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own",
    "same", "so", "than", "too", "very",
    "can", "will", "just", "should", "now",
];

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex literal"));

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Splits text into lowercase word tokens, first to last.
///
/// A token is a maximal run of word characters (letters, digits and
/// underscore), so hyphenated words split into their parts.
///
/// ```
/// use mindscope_core::text::tokenize;
///
/// assert_eq!(tokenize("Well-Being is hard"), vec!["well", "being", "is", "hard"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns true if `token` survives stopword filtering.
pub fn is_content_word(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_CHARS && !STOPWORD_SET.contains(token)
}

/// Drops stopwords and short tokens, preserving the order of the rest.
pub fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| is_content_word(t)).collect()
}

/// Tokenizes `text` and removes stopwords in one pass.
pub fn content_words(text: &str) -> Vec<String> {
    remove_stopwords(tokenize(text))
}
