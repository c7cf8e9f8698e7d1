//! # Keyword Extraction
//!
//! Reduces a user query to its content-bearing terms. The keyword set drives
//! both strategy selection and relevance scoring; an empty set means "no
//! targeted signal available" and callers fall back to general retrieval.

use std::collections::HashSet;

/// Common English function words ignored during keyword extraction.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "as", "is", "was", "are", "were", "been",
    "be", "have", "has", "had", "do", "does", "did", "will", "would", "should",
    "could", "can", "may", "might", "must", "i", "you", "he", "she", "it",
    "we", "they", "them", "their", "this", "that", "these", "those", "what",
    "which", "who", "when", "where", "why", "how", "tell", "me", "about",
    "give", "want", "need", "know", "get", "help",
];

/// Tokens shorter than this carry too little signal to match on.
const MIN_KEYWORD_LEN: usize = 3;

/// Extracts meaningful keywords from a user query.
///
/// Lowercases, strips punctuation, splits on whitespace, keeps tokens of at
/// least three characters, drops stop words, and deduplicates while
/// preserving first-seen order (the order is only used for logging).
pub fn extract_keywords(query: &str) -> Vec<String> {
    let normalized: String = query
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for word in normalized.split_whitespace() {
        if word.chars().count() < MIN_KEYWORD_LEN {
            continue;
        }
        if STOP_WORDS.contains(&word) {
            continue;
        }
        if seen.insert(word.to_string()) {
            keywords.push(word.to_string());
        }
    }

    keywords
}
