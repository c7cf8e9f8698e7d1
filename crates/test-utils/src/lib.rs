//! # Common Test Utilities
//!
//! Shared mocks and fixtures for testing the anychat core: a scripted chat
//! provider that records its calls, an in-memory document store, and small
//! fixture helpers, so tests stay isolated and repeatable.

use anychat::errors::ChatError;
use anychat::providers::ai::AiProvider;
use anychat::providers::storage::DocumentStore;
use anychat::types::KnowledgeFile;
use async_trait::async_trait;
use dotenvy::dotenv;
use std::collections::HashMap;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

// --- Mock AI Provider ---

/// A scripted chat provider: pops pre-programmed responses in order and
/// records every (system, user) prompt pair for assertions.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ChatError> {
        self.call_history
            .write()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        if let Some(response) = self.responses.write().unwrap().pop() {
            Ok(response)
        } else {
            Ok("Default mock response".to_string())
        }
    }
}

// --- Mock Document Store ---

/// An in-memory document store built from (filename, content) pairs.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    files: Vec<KnowledgeFile>,
    contents: HashMap<String, String>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text file to the store.
    pub fn with_file(mut self, filename: &str, content: &str) -> Self {
        let file_path = format!("memory://{filename}");
        self.files.push(make_file(filename, None));
        self.contents.insert(file_path, content.to_string());
        self
    }

    /// Adds a file whose content cannot be resolved (simulates a binary
    /// upload with no extraction).
    pub fn with_unreadable_file(mut self, filename: &str) -> Self {
        self.files.push(make_file(filename, None));
        self
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self) -> Result<Vec<KnowledgeFile>, ChatError> {
        Ok(self.files.clone())
    }

    async fn fetch(&self, file_path: &str) -> Result<Option<String>, ChatError> {
        Ok(self.contents.get(file_path).cloned())
    }
}

// --- Fixture helpers ---

/// Builds a `KnowledgeFile` fixture for pure-function tests.
pub fn make_file(filename: &str, content: Option<&str>) -> KnowledgeFile {
    let file_type = filename.rsplit('.').next().unwrap_or_default().to_string();
    KnowledgeFile {
        id: format!("file-{filename}"),
        filename: filename.to_string(),
        file_type,
        file_path: format!("memory://{filename}"),
        content: content.map(String::from),
    }
}
