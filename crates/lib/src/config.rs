//! # Chatbot Configuration
//!
//! The per-chatbot configuration persisted by the platform: persona prompt,
//! model choice, feature flags, and the retrieval tunables. Loadable from a
//! YAML file; every field has a default so a minimal config stays minimal.

use crate::budget::{ModelContextTable, DEFAULT_CHARS_PER_TOKEN};
use crate::chunk::DEFAULT_MAX_CHUNK_SIZE;
use crate::errors::ChatError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The root per-chatbot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotConfig {
    /// The persona prompt every system prompt starts from. An empty prompt
    /// falls back to a generic assistant persona at assembly time.
    #[serde(default)]
    pub base_prompt: String,
    /// The primary chat model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Models to try, in order, when the primary model's call fails.
    #[serde(default)]
    pub fallback_models: Vec<String>,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

fn default_model() -> String {
    "openai/gpt-3.5-turbo".to_string()
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            base_prompt: String::new(),
            model: default_model(),
            fallback_models: Vec::new(),
            features: FeatureFlags::default(),
            retrieval: RetrievalConfig::default(),
        }
    }
}

impl ChatbotConfig {
    /// Loads a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ChatError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

/// Feature flags a chatbot owner can toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// When off, conversations run on the base prompt alone.
    #[serde(default = "default_true")]
    pub knowledge_retrieval: bool,
    /// When off, every message is treated as normal conversation.
    #[serde(default = "default_true")]
    pub intent_detection: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            knowledge_retrieval: true,
            intent_detection: true,
        }
    }
}

/// Tunables for the retrieval pipeline.
///
/// The defaults encode the platform's relevance philosophy; they are fields
/// rather than literals so individual deployments can adjust them without
/// code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Token estimation ratio, in characters per token.
    #[serde(default = "default_chars_per_token")]
    pub chars_per_token: f32,
    /// Tokens reserved for the model response, the user message, and prompt
    /// overhead.
    #[serde(default = "default_reserved_tokens")]
    pub reserved_tokens: usize,
    /// Minimum keyword count for the targeted strategy (and the higher cap).
    #[serde(default = "default_targeted_keyword_threshold")]
    pub targeted_keyword_threshold: usize,
    /// Knowledge-token cap for weak-signal queries.
    #[serde(default = "default_general_knowledge_cap")]
    pub general_knowledge_cap: usize,
    /// Knowledge-token cap for keyword-rich queries.
    #[serde(default = "default_targeted_knowledge_cap")]
    pub targeted_knowledge_cap: usize,
    /// Target maximum chunk size, in characters.
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
    /// Leading characters included when a factual file is previewed.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
    /// How many instruction-template files the general strategy may include
    /// in full.
    #[serde(default = "default_max_template_files")]
    pub max_template_files: usize,
    /// How many factual files the general strategy may preview.
    #[serde(default = "default_max_preview_files")]
    pub max_preview_files: usize,
    /// Targeted selection stops early once this many chunks are selected
    /// (together with `min_files_before_stop`).
    #[serde(default = "default_min_chunks_before_stop")]
    pub min_chunks_before_stop: usize,
    /// Distinct source files required before the early stop applies.
    #[serde(default = "default_min_files_before_stop")]
    pub min_files_before_stop: usize,
    /// Model-name to context-window mappings.
    #[serde(default)]
    pub context_limits: ModelContextTable,
}

fn default_chars_per_token() -> f32 {
    DEFAULT_CHARS_PER_TOKEN
}
fn default_reserved_tokens() -> usize {
    4000
}
fn default_targeted_keyword_threshold() -> usize {
    2
}
fn default_general_knowledge_cap() -> usize {
    15_000
}
fn default_targeted_knowledge_cap() -> usize {
    35_000
}
fn default_max_chunk_size() -> usize {
    DEFAULT_MAX_CHUNK_SIZE
}
fn default_preview_chars() -> usize {
    1500
}
fn default_max_template_files() -> usize {
    1
}
fn default_max_preview_files() -> usize {
    2
}
fn default_min_chunks_before_stop() -> usize {
    15
}
fn default_min_files_before_stop() -> usize {
    3
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            chars_per_token: default_chars_per_token(),
            reserved_tokens: default_reserved_tokens(),
            targeted_keyword_threshold: default_targeted_keyword_threshold(),
            general_knowledge_cap: default_general_knowledge_cap(),
            targeted_knowledge_cap: default_targeted_knowledge_cap(),
            max_chunk_size: default_max_chunk_size(),
            preview_chars: default_preview_chars(),
            max_template_files: default_max_template_files(),
            max_preview_files: default_max_preview_files(),
            min_chunks_before_stop: default_min_chunks_before_stop(),
            min_files_before_stop: default_min_files_before_stop(),
            context_limits: ModelContextTable::default(),
        }
    }
}
