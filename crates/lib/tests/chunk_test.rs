//! # Chunker Tests
//!
//! Verifies the size bound, paragraph/sentence splitting, and source-order
//! preservation guarantees.

use anychat::chunk::{chunk_content, DEFAULT_MAX_CHUNK_SIZE};

#[test]
fn test_small_content_is_a_single_chunk() {
    let chunks = chunk_content("One short paragraph.", "notes.txt", DEFAULT_MAX_CHUNK_SIZE);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "One short paragraph.");
    assert_eq!(chunks[0].filename, "notes.txt");
}

#[test]
fn test_empty_content_yields_no_chunks() {
    assert!(chunk_content("", "empty.txt", DEFAULT_MAX_CHUNK_SIZE).is_empty());
    assert!(chunk_content("\n\n\n\n", "blank.txt", DEFAULT_MAX_CHUNK_SIZE).is_empty());
}

#[test]
fn test_paragraphs_accumulate_up_to_the_limit() {
    let paragraph = "word ".repeat(20); // ~100 chars
    let content = format!("{0}\n\n{0}\n\n{0}", paragraph.trim());
    let chunks = chunk_content(&content, "doc.txt", 250);

    // Two paragraphs fit per chunk (100 + 2 + 100), the third overflows.
    assert_eq!(chunks.len(), 2);
}

#[test]
fn test_chunk_size_bound_holds() {
    let sentences: String = (0..100)
        .map(|i| format!("This is sentence number {i} and it carries a little weight. "))
        .collect();
    let max = 300;
    let chunks = chunk_content(&sentences, "doc.txt", max);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(
            chunk.text.chars().count() <= max,
            "chunk exceeded bound: {} chars",
            chunk.text.chars().count()
        );
    }
}

#[test]
fn test_single_oversized_sentence_is_accepted_overflow() {
    let sentence = format!("{} end.", "word ".repeat(100)); // ~505 chars, no boundary until the end
    let chunks = chunk_content(&sentence, "doc.txt", 100);

    // The sentence cannot be split further; it comes through whole.
    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].text.chars().count() > 100);
}

#[test]
fn test_source_order_is_preserved() {
    let content = "alpha paragraph\n\nbravo paragraph\n\ncharlie paragraph";
    let chunks = chunk_content(content, "doc.txt", 20);

    let joined: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        joined,
        vec!["alpha paragraph", "bravo paragraph", "charlie paragraph"]
    );
}
