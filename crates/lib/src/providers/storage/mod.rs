pub mod fs;

use crate::errors::ChatError;
use crate::types::KnowledgeFile;
use async_trait::async_trait;
use std::fmt::Debug;

/// A trait for the document store a chatbot's knowledge files live in.
///
/// The store owns raw bytes and any binary-to-text extraction; this core
/// only ever sees plain text. `fetch` returning `Ok(None)` means the file's
/// content is unavailable (binary without an extractor, deleted upstream),
/// which retrieval treats as "skip", never as an error.
#[async_trait]
pub trait DocumentStore: Send + Sync + Debug {
    /// Lists the knowledge files attached to this store, without content.
    async fn list(&self) -> Result<Vec<KnowledgeFile>, ChatError>;

    /// Fetches the pre-extracted plain text for a file path.
    async fn fetch(&self, file_path: &str) -> Result<Option<String>, ChatError>;
}
