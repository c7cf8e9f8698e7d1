//! # Content Chunking
//!
//! Splits a document's text into bounded-size segments along paragraph
//! boundaries, re-splitting oversized paragraphs on sentence boundaries.
//! Chunk order preserves source order; later stages rely on that when
//! favoring early-position content.

use tracing::warn;

/// Default target maximum size of a single chunk, in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 2000;

/// A chunk of document text before scoring, tagged with its source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
    pub text: String,
    pub filename: String,
}

/// Splits content into chunks of at most `max_chunk_size` characters.
///
/// Paragraphs (blank-line delimited) are greedily accumulated; a paragraph
/// that would overflow the running buffer flushes it first. A single
/// paragraph larger than the limit is further split on sentence boundaries.
/// The only permitted overflow is a single sentence longer than the limit,
/// which is emitted as-is rather than split mid-sentence.
pub fn chunk_content(content: &str, filename: &str, max_chunk_size: usize) -> Vec<RawChunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    let flush = |current: &mut String, current_len: &mut usize, chunks: &mut Vec<RawChunk>| {
        let text = current.trim();
        if !text.is_empty() {
            chunks.push(RawChunk {
                text: text.to_string(),
                filename: filename.to_string(),
            });
        }
        current.clear();
        *current_len = 0;
    };

    for paragraph in content.split("\n\n") {
        let trimmed = paragraph.trim();
        if trimmed.is_empty() {
            continue;
        }
        let paragraph_len = trimmed.chars().count();

        if current_len + paragraph_len > max_chunk_size && current_len > 0 {
            flush(&mut current, &mut current_len, &mut chunks);
        }

        if paragraph_len > max_chunk_size {
            warn!(
                "Paragraph exceeds chunk size limit ({paragraph_len} > {max_chunk_size}). Splitting by sentence."
            );
            for sentence in split_sentences(trimmed) {
                let sentence = sentence.trim();
                if sentence.is_empty() {
                    continue;
                }
                let sentence_len = sentence.chars().count();
                if current_len + sentence_len > max_chunk_size && current_len > 0 {
                    flush(&mut current, &mut current_len, &mut chunks);
                }
                current.push_str(sentence);
                current.push(' ');
                current_len += sentence_len + 1;
            }
        } else {
            current.push_str(trimmed);
            current.push_str("\n\n");
            current_len += paragraph_len + 2;
        }
    }

    flush(&mut current, &mut current_len, &mut chunks);

    chunks
}

/// Splits text after `.`, `!`, or `?` followed by whitespace.
///
/// A paragraph with no such boundary is returned whole.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((index, c)) = iter.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = match iter.peek() {
                Some((_, next)) => next.is_whitespace(),
                None => true,
            };
            if at_boundary {
                let end = index + c.len_utf8();
                sentences.push(&text[start..end]);
                start = end;
            }
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}
