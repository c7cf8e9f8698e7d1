use crate::errors::ChatError;
use crate::providers::storage::DocumentStore;
use crate::types::KnowledgeFile;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// File extensions served as plain text. Anything else is assumed binary
/// and reported as unavailable; extraction belongs upstream.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "csv", "json"];

/// A document store backed by a flat directory of text files.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Creates a store rooted at `root`. The directory does not have to
    /// exist yet; an absent directory lists as empty.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn is_text_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn list(&self) -> Result<Vec<KnowledgeFile>, ChatError> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ChatError::StoreRead {
                    path: self.root.display().to_string(),
                    source: e,
                })
            }
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| ChatError::StoreRead {
            path: self.root.display().to_string(),
            source: e,
        })? {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let filename = entry.file_name().to_string_lossy().into_owned();
            let file_type = path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default()
                .to_lowercase();
            let file_path = path.display().to_string();
            // Deterministic ids so repeated listings agree.
            let id = Uuid::new_v5(&Uuid::NAMESPACE_URL, file_path.as_bytes()).to_string();
            files.push(KnowledgeFile {
                id,
                filename,
                file_type,
                file_path,
                content: None,
            });
        }

        // Directory iteration order is platform-dependent; keep listings stable.
        files.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(files)
    }

    async fn fetch(&self, file_path: &str) -> Result<Option<String>, ChatError> {
        let path = Path::new(file_path);
        if !Self::is_text_file(path) {
            warn!("Skipping non-text file `{file_path}`; extraction happens upstream");
            return Ok(None);
        }

        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ChatError::StoreRead {
                path: file_path.to_string(),
                source: e,
            }),
        }
    }
}
