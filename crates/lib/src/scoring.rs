//! # Relevance Scoring
//!
//! Additive heuristic scores used to rank files and chunks against a keyword
//! set. Filename and early-position matches are treated as stronger signals
//! than raw frequency, approximating title and lead-paragraph weighting.
//! Both functions are pure; the weights are named so they can be tuned
//! without touching control flow.

/// Weight for a keyword appearing in the filename.
pub const FILENAME_MATCH_WEIGHT: f32 = 3.0;
/// Weight per keyword occurrence in file content.
pub const CONTENT_OCCURRENCE_WEIGHT: f32 = 0.2;
/// Cap on the per-keyword content frequency contribution.
pub const CONTENT_OCCURRENCE_CAP: f32 = 5.0;
/// Bonus for a keyword appearing early in the file.
pub const EARLY_APPEARANCE_BONUS: f32 = 1.0;
/// How many leading characters count as "early" for a file.
pub const EARLY_WINDOW_CHARS: usize = 1000;

/// Weight per keyword occurrence in a chunk.
pub const CHUNK_OCCURRENCE_WEIGHT: f32 = 2.0;
/// Bonus for a keyword appearing in a chunk's lead.
pub const CHUNK_LEAD_BONUS: f32 = 3.0;
/// How many leading characters count as a chunk's lead.
pub const CHUNK_LEAD_WINDOW_CHARS: usize = 100;
/// Weight per co-occurring keyword when two or more appear in one chunk.
pub const PROXIMITY_WEIGHT: f32 = 1.5;

/// The first `n` characters of `s`, respecting char boundaries.
pub(crate) fn lead(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

/// Scores a file's relevance to a keyword set.
///
/// Per keyword: filename substring match, capped content frequency, and an
/// early-appearance bonus within the first thousand characters. An empty
/// keyword set scores zero.
pub fn score_file_relevance(filename: &str, content: &str, keywords: &[String]) -> f32 {
    if keywords.is_empty() {
        return 0.0;
    }

    let lower_filename = filename.to_lowercase();
    let lower_content = content.to_lowercase();
    let early = lead(&lower_content, EARLY_WINDOW_CHARS);

    let mut score = 0.0;
    for keyword in keywords {
        if lower_filename.contains(keyword.as_str()) {
            score += FILENAME_MATCH_WEIGHT;
        }

        let occurrences = lower_content.matches(keyword.as_str()).count() as f32;
        score += (occurrences * CONTENT_OCCURRENCE_WEIGHT).min(CONTENT_OCCURRENCE_CAP);

        if early.contains(keyword.as_str()) {
            score += EARLY_APPEARANCE_BONUS;
        }
    }

    score
}

/// Scores a chunk's relevance to a keyword set.
///
/// Frequency is uncapped here since chunks are already size-bounded, the
/// chunk's lead gets a position bonus, and co-occurring keywords earn a
/// proximity bonus. An empty keyword set scores zero.
pub fn score_chunk_relevance(chunk: &str, keywords: &[String]) -> f32 {
    if keywords.is_empty() {
        return 0.0;
    }

    let lower = chunk.to_lowercase();
    let chunk_lead = lead(&lower, CHUNK_LEAD_WINDOW_CHARS);

    let mut score = 0.0;
    for keyword in keywords {
        let occurrences = lower.matches(keyword.as_str()).count() as f32;
        score += occurrences * CHUNK_OCCURRENCE_WEIGHT;

        if chunk_lead.contains(keyword.as_str()) {
            score += CHUNK_LEAD_BONUS;
        }
    }

    if keywords.len() > 1 {
        let co_occurring = keywords
            .iter()
            .filter(|keyword| lower.contains(keyword.as_str()))
            .count();
        if co_occurring > 1 {
            score += co_occurring as f32 * PROXIMITY_WEIGHT;
        }
    }

    score
}
