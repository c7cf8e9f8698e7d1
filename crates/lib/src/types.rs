use crate::config::ChatbotConfig;
use crate::errors::ChatError;
use crate::intent::Intent;
use crate::providers::ai::AiProvider;
use crate::providers::storage::DocumentStore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A knowledge base file attached to a chatbot.
///
/// `content` holds pre-extracted plain text. Binary formats (PDF and friends)
/// are converted to text by the document store before they reach this core;
/// a file whose content could not be resolved carries `None` and is skipped
/// by retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeFile {
    pub id: String,
    pub filename: String,
    pub file_type: String,
    pub file_path: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// A scored slice of a document, the unit of selection for retrieval.
///
/// `relevance_score` is the owning file's score plus the chunk-local score.
/// It is an additive heuristic rank, not a probability.
#[derive(Debug, Clone, Serialize)]
pub struct ContentChunk {
    pub content: String,
    pub filename: String,
    pub relevance_score: f32,
    pub tokens: usize,
}

/// The retrieval strategy chosen for a request, by query signal strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalStrategy {
    /// Weak signal: one template file plus short previews of factual files.
    General,
    /// Strong signal: scored, chunked, budget-bounded selection.
    Targeted,
}

impl fmt::Display for RetrievalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalStrategy::General => write!(f, "general"),
            RetrievalStrategy::Targeted => write!(f, "targeted"),
        }
    }
}

/// The outcome of one knowledge retrieval pass.
///
/// Produced once per request and consumed immediately by the prompt
/// assembler; nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalResult {
    pub chunks: Vec<ContentChunk>,
    pub total_tokens: usize,
    pub files_used: Vec<String>,
    pub strategy: RetrievalStrategy,
}

impl RetrievalResult {
    /// An empty result for the given strategy. Used when no document
    /// carries content; the prompt assembler degrades to the base prompt.
    pub fn empty(strategy: RetrievalStrategy) -> Self {
        Self {
            chunks: Vec::new(),
            total_tokens: 0,
            files_used: Vec::new(),
            strategy,
        }
    }
}

/// The final product of one conversation turn.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// The cleaned model output.
    pub text: String,
    /// The intent the turn was classified as.
    pub intent: Intent,
    /// Retrieval metadata for logging and debugging.
    pub retrieval: RetrievalResult,
}

/// A client that runs full conversation turns for one configured chatbot.
///
/// Collaborators are injected at construction time; the client holds no
/// global state and no caches.
pub struct ChatClient {
    pub(crate) ai_provider: Box<dyn AiProvider>,
    pub(crate) document_store: Box<dyn DocumentStore>,
    pub(crate) config: ChatbotConfig,
}

impl fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

/// A builder for creating `ChatClient` instances.
#[derive(Default)]
pub struct ChatClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    document_store: Option<Box<dyn DocumentStore>>,
    config: Option<ChatbotConfig>,
}

impl ChatClientBuilder {
    /// Creates a new `ChatClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chat completion provider.
    pub fn ai_provider(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    /// Sets the document store the chatbot's knowledge files live in.
    pub fn document_store(mut self, store: Box<dyn DocumentStore>) -> Self {
        self.document_store = Some(store);
        self
    }

    /// Sets the chatbot configuration (persona prompt, model, tunables).
    pub fn config(mut self, config: ChatbotConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the `ChatClient`.
    ///
    /// Returns an error when a required collaborator was not provided. A
    /// missing configuration falls back to defaults.
    pub fn build(self) -> Result<ChatClient, ChatError> {
        let ai_provider = self.ai_provider.ok_or(ChatError::MissingAiProvider)?;
        let document_store = self.document_store.ok_or(ChatError::MissingDocumentStore)?;
        Ok(ChatClient {
            ai_provider,
            document_store,
            config: self.config.unwrap_or_default(),
        })
    }
}
