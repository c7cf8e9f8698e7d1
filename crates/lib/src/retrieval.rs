//! # Knowledge Retrieval
//!
//! Selects a token-bounded, relevance-ranked subset of a chatbot's knowledge
//! files for one conversation turn. Two strategies exist, chosen by query
//! signal strength:
//!
//! 1. **General**: fewer than two keywords. At most one instruction-template
//!    file is included in full, then short previews of a couple of factual
//!    files. Keeps unstructured questions from burning budget on
//!    low-relevance background content.
//! 2. **Targeted**: two or more keywords. Every file is scored, chunked, and
//!    re-scored per chunk; chunks are greedily selected by combined score
//!    until the token budget or a diversity threshold is reached.
//!
//! The whole pipeline is synchronous and pure: documents arrive fully
//! materialized, and a file without content is silently skipped, never an
//! error.

use crate::budget::{estimate_tokens_with_ratio, knowledge_budget};
use crate::chunk::chunk_content;
use crate::config::RetrievalConfig;
use crate::intent::Intent;
use crate::keywords::extract_keywords;
use crate::prompts::PREVIEW_MARKER;
use crate::scoring::{lead, score_chunk_relevance, score_file_relevance};
use crate::template::{categorize_knowledge_file, FileCategory};
use crate::types::{ContentChunk, KnowledgeFile, RetrievalResult, RetrievalStrategy};
use tracing::{debug, info};

/// Relevance assigned to a template file included by the general strategy.
const TEMPLATE_PRIORITY_SCORE: f32 = 10.0;
/// Relevance assigned to a factual preview included by the general strategy.
const PREVIEW_SCORE: f32 = 3.0;

/// Selects relevant knowledge for one request.
///
/// The only entry point the request handler needs: extracts keywords,
/// resolves the model's token budget, picks a strategy, and returns the
/// selected chunks. Total for all inputs; zero usable documents yield an
/// empty result.
pub fn retrieve_relevant_knowledge(
    files: &[KnowledgeFile],
    user_message: &str,
    model_name: &str,
    intent: Intent,
    config: &RetrievalConfig,
) -> RetrievalResult {
    let keywords = extract_keywords(user_message);
    debug!("Extracted keywords: {}", keywords.join(", "));

    let model_limit = config.context_limits.context_limit(model_name);
    let available_tokens = knowledge_budget(model_limit, keywords.len(), config);
    info!(
        model = model_name,
        ?intent,
        model_limit,
        available_tokens,
        "Retrieving knowledge for {} files",
        files.len()
    );

    if keywords.len() < config.targeted_keyword_threshold {
        info!("Strategy: general (weak keyword signal)");
        retrieve_general(files, available_tokens, config)
    } else {
        info!("Strategy: targeted ({} keywords)", keywords.len());
        retrieve_targeted(files, &keywords, available_tokens, config)
    }
}

/// General strategy: one template file in full, then short factual previews.
fn retrieve_general(
    files: &[KnowledgeFile],
    available_tokens: usize,
    config: &RetrievalConfig,
) -> RetrievalResult {
    let mut selection = Selection::new(available_tokens, config.chars_per_token);

    let templates: Vec<&KnowledgeFile> = files
        .iter()
        .filter(|file| {
            let content = file.content.as_deref().unwrap_or_default();
            categorize_knowledge_file(&file.filename, content) == FileCategory::InstructionTemplate
        })
        .take(config.max_template_files)
        .collect();

    for file in &templates {
        let Some(content) = file.content.as_deref() else {
            continue;
        };
        selection.push_if_fits(content.to_string(), &file.filename, TEMPLATE_PRIORITY_SCORE);
    }

    let factual: Vec<&KnowledgeFile> = files
        .iter()
        .filter(|file| !templates.iter().any(|t| t.id == file.id))
        .take(config.max_preview_files)
        .collect();

    for file in factual {
        let Some(content) = file.content.as_deref() else {
            continue;
        };
        let preview = format!("{}\n{PREVIEW_MARKER}", lead(content, config.preview_chars));
        selection.push_if_fits(preview, &file.filename, PREVIEW_SCORE);
    }

    let result = selection.finish(RetrievalStrategy::General);
    info!(
        "General retrieval selected {} chunks, {} tokens",
        result.chunks.len(),
        result.total_tokens
    );
    result
}

/// Targeted strategy: score, chunk, re-score, then greedily fill the budget.
fn retrieve_targeted(
    files: &[KnowledgeFile],
    keywords: &[String],
    available_tokens: usize,
    config: &RetrievalConfig,
) -> RetrievalResult {
    // Stable sort: files with equal scores keep their input order, which
    // keeps selection deterministic for identical inputs.
    let mut scored_files: Vec<(&KnowledgeFile, f32)> = files
        .iter()
        .map(|file| {
            let content = file.content.as_deref().unwrap_or_default();
            let score = score_file_relevance(&file.filename, content, keywords);
            (file, score)
        })
        .collect();
    scored_files.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (file, score) in scored_files.iter().take(5) {
        debug!("File relevance: {} = {score:.2}", file.filename);
    }

    let mut all_chunks: Vec<ContentChunk> = Vec::new();
    for (file, file_score) in &scored_files {
        let Some(content) = file.content.as_deref() else {
            continue;
        };
        for chunk in chunk_content(content, &file.filename, config.max_chunk_size) {
            let chunk_score = score_chunk_relevance(&chunk.text, keywords);
            if chunk_score > 0.0 {
                let tokens = estimate_tokens_with_ratio(&chunk.text, config.chars_per_token);
                all_chunks.push(ContentChunk {
                    content: chunk.text,
                    filename: chunk.filename,
                    relevance_score: file_score + chunk_score,
                    tokens,
                });
            }
        }
    }
    all_chunks.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    debug!("Scored {} candidate chunks", all_chunks.len());

    let mut selection = Selection::new(available_tokens, config.chars_per_token);
    for chunk in all_chunks {
        // A chunk that would overflow is skipped, not a stop condition:
        // a smaller chunk further down may still fit.
        if !selection.push_chunk_if_fits(chunk) {
            continue;
        }
        if selection.chunk_count() >= config.min_chunks_before_stop
            && selection.file_count() >= config.min_files_before_stop
        {
            break;
        }
    }

    let result = selection.finish(RetrievalStrategy::Targeted);
    info!(
        "Targeted retrieval selected {} chunks from {} files, {} / {} tokens",
        result.chunks.len(),
        result.files_used.len(),
        result.total_tokens,
        available_tokens
    );
    result
}

/// Accumulates chunks under a token budget, tracking files used.
struct Selection {
    chunks: Vec<ContentChunk>,
    files_used: Vec<String>,
    used_tokens: usize,
    available_tokens: usize,
    chars_per_token: f32,
}

impl Selection {
    fn new(available_tokens: usize, chars_per_token: f32) -> Self {
        Self {
            chunks: Vec::new(),
            files_used: Vec::new(),
            used_tokens: 0,
            available_tokens,
            chars_per_token,
        }
    }

    /// Estimates and pushes content produced by the general strategy.
    fn push_if_fits(&mut self, content: String, filename: &str, relevance_score: f32) {
        let tokens = estimate_tokens_with_ratio(&content, self.chars_per_token);
        self.push_chunk_if_fits(ContentChunk {
            content,
            filename: filename.to_string(),
            relevance_score,
            tokens,
        });
    }

    /// Pushes a pre-estimated chunk when it fits the remaining budget.
    fn push_chunk_if_fits(&mut self, chunk: ContentChunk) -> bool {
        if self.used_tokens + chunk.tokens > self.available_tokens {
            return false;
        }
        self.used_tokens += chunk.tokens;
        if !self.files_used.contains(&chunk.filename) {
            self.files_used.push(chunk.filename.clone());
        }
        self.chunks.push(chunk);
        true
    }

    fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    fn file_count(&self) -> usize {
        self.files_used.len()
    }

    fn finish(self, strategy: RetrievalStrategy) -> RetrievalResult {
        RetrievalResult {
            chunks: self.chunks,
            total_tokens: self.used_tokens,
            files_used: self.files_used,
            strategy,
        }
    }
}
