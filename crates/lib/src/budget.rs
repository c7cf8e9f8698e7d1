//! # Token Budget Planning
//!
//! Estimates token counts from text and computes how many tokens of
//! knowledge content one request may spend, from the target model's context
//! window, a reserved allowance for the response and prompt overhead, and a
//! query-shape cap that keeps weak-signal queries from flooding the context.

use crate::config::RetrievalConfig;
use crate::models;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Conservative default estimation ratio, in characters per token.
///
/// Measured token-to-character ratios run denser than the folkloric four
/// characters per token; under-estimating here truncates context downstream.
pub const DEFAULT_CHARS_PER_TOKEN: f32 = 2.5;

/// Context limit applied when a model is not in the table and no substring
/// heuristic matches.
pub const FALLBACK_CONTEXT_LIMIT: usize = 8000;

/// Estimates the token count of `text` with an explicit ratio, rounding up.
///
/// Non-positive ratios fall back to [`DEFAULT_CHARS_PER_TOKEN`] rather than
/// producing a nonsensical budget.
pub fn estimate_tokens_with_ratio(text: &str, chars_per_token: f32) -> usize {
    let ratio = if chars_per_token > 0.0 {
        chars_per_token
    } else {
        DEFAULT_CHARS_PER_TOKEN
    };
    (text.chars().count() as f32 / ratio).ceil() as usize
}

/// Estimates the token count of `text` with the default ratio.
pub fn estimate_tokens(text: &str) -> usize {
    estimate_tokens_with_ratio(text, DEFAULT_CHARS_PER_TOKEN)
}

/// An injectable table of model-name to context-window-size mappings.
///
/// Exact identifiers are looked up first, then substring heuristics on the
/// model name, then a conservative fallback. The table is plain data so new
/// models can be added through configuration instead of code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelContextTable {
    #[serde(default)]
    limits: HashMap<String, usize>,
    #[serde(default = "default_fallback_limit")]
    fallback: usize,
}

fn default_fallback_limit() -> usize {
    FALLBACK_CONTEXT_LIMIT
}

/// Substring patterns checked in order when no exact entry matches.
/// More specific patterns come first.
const SUBSTRING_LIMITS: &[(&str, usize)] = &[
    ("gpt-4-turbo", 128_000),
    ("gpt-4o", 128_000),
    ("gpt-4-32k", 32_000),
    ("gpt-4", 8_000),
    ("gpt-3.5", 16_000),
    ("claude-3", 200_000),
    ("claude-2", 100_000),
    ("llama-3.1", 128_000),
    ("mistral-large", 128_000),
    ("mixtral", 32_000),
];

impl Default for ModelContextTable {
    /// Seeds the table from the model catalog plus the bare model names the
    /// platform has historically accepted.
    fn default() -> Self {
        let mut limits = HashMap::new();
        for model in models::all_models() {
            limits.insert(model.id.to_string(), model.context_length);
        }
        for (name, limit) in [
            ("gpt-3.5-turbo", 16_000),
            ("gpt-4", 8_000),
            ("gpt-4-turbo", 128_000),
            ("gpt-4o", 128_000),
            ("claude-3-opus", 200_000),
            ("claude-3-sonnet", 200_000),
            ("claude-3-haiku", 200_000),
            ("llama-3.1-8b", 128_000),
            ("llama-3.1-70b", 128_000),
        ] {
            limits.insert(name.to_string(), limit);
        }
        Self {
            limits,
            fallback: FALLBACK_CONTEXT_LIMIT,
        }
    }
}

impl ModelContextTable {
    /// An empty table with only the conservative fallback.
    pub fn empty() -> Self {
        Self {
            limits: HashMap::new(),
            fallback: FALLBACK_CONTEXT_LIMIT,
        }
    }

    /// Adds or overrides a model entry.
    pub fn with_limit(mut self, model: &str, limit: usize) -> Self {
        self.limits.insert(model.to_string(), limit);
        self
    }

    /// Looks up the context window for a model identifier.
    pub fn context_limit(&self, model_name: &str) -> usize {
        if let Some(limit) = self.limits.get(model_name) {
            return *limit;
        }

        let lower = model_name.to_lowercase();
        for (pattern, limit) in SUBSTRING_LIMITS {
            if lower.contains(pattern) {
                debug!("Model `{model_name}` matched context heuristic `{pattern}`");
                return *limit;
            }
        }

        self.fallback
    }
}

/// Computes the knowledge token budget for one request.
///
/// `min(model_limit - reserved, shape_cap)`, clamped so a misconfigured
/// table entry can never hand the greedy selector a negative budget. The
/// shape cap depends on how many keywords the query produced: a weak signal
/// gets the lower cap to avoid drowning the answer in marginal content.
pub fn knowledge_budget(model_limit: usize, keyword_count: usize, config: &RetrievalConfig) -> usize {
    let raw_available = model_limit.saturating_sub(config.reserved_tokens);
    let shape_cap = if keyword_count >= config.targeted_keyword_threshold {
        config.targeted_knowledge_cap
    } else {
        config.general_knowledge_cap
    };
    raw_available.min(shape_cap)
}
