//! # anychat
//!
//! The knowledge retrieval and prompt-assembly core of the anychat platform.
//! Given a user message, a chatbot's knowledge files, and a target model,
//! this crate selects a token-bounded, relevance-ranked subset of knowledge
//! and folds it into a system prompt for a chat completion provider.
//!
//! The retrieval pipeline itself is synchronous and pure; the only async
//! surfaces are the injected collaborators (chat provider, document store),
//! which the [`ChatClient`] wires together into full conversation turns.

pub mod budget;
pub mod chunk;
pub mod cleaner;
pub mod config;
pub mod errors;
pub mod intent;
pub mod keywords;
pub mod models;
pub mod prompt;
pub mod prompts;
pub mod providers;
pub mod retrieval;
pub mod scoring;
pub mod template;
pub mod types;

pub use config::{ChatbotConfig, FeatureFlags, RetrievalConfig};
pub use errors::ChatError;
pub use intent::Intent;
pub use retrieval::retrieve_relevant_knowledge;
pub use types::{
    ChatClient, ChatClientBuilder, ChatResponse, ContentChunk, KnowledgeFile, RetrievalResult,
    RetrievalStrategy,
};

use crate::intent::{detect_intent, extract_post_content};
use crate::template::{categorize_knowledge_file, extract_instruction_template, FileCategory};
use futures::future::join_all;
use tracing::{debug, info};

impl ChatClient {
    /// Runs one full conversation turn.
    ///
    /// Detects the message's intent, loads and retrieves knowledge, builds
    /// the system prompt, calls the chat provider, and cleans the response.
    /// For the content tasks (hooks, rewrites), a chatbot that ships its own
    /// instruction-template file gets a template-driven prompt instead of
    /// the knowledge-section assembly, and the extracted post content is
    /// sent as the user message.
    pub async fn chat(&self, message: &str) -> Result<ChatResponse, ChatError> {
        let intent = if self.config.features.intent_detection {
            detect_intent(message)
        } else {
            Intent::NormalConversation
        };
        info!(?intent, "Handling chat turn");

        let files = if self.config.features.knowledge_retrieval {
            self.load_documents().await?
        } else {
            Vec::new()
        };

        let retrieval = retrieve_relevant_knowledge(
            &files,
            message,
            &self.config.model,
            intent,
            &self.config.retrieval,
        );

        let system_prompt = self.system_prompt_for(intent, &files, &retrieval);

        let user_content = match intent {
            Intent::HookGeneration | Intent::PostRewrite => {
                extract_post_content(message).unwrap_or_else(|| message.to_string())
            }
            Intent::NormalConversation => message.to_string(),
        };

        debug!(system_prompt = %system_prompt, "--> Sending prompts to chat provider");
        let raw_response = self
            .ai_provider
            .generate(&system_prompt, &user_content)
            .await?;
        debug!("<-- Raw response: {raw_response}");

        let text = cleaner::clean_response(&raw_response, intent);

        Ok(ChatResponse {
            text,
            intent,
            retrieval,
        })
    }

    /// Picks the prompt path for the turn: template-driven for content tasks
    /// when the knowledge base carries an instruction-template file,
    /// knowledge-section assembly otherwise.
    fn system_prompt_for(
        &self,
        intent: Intent,
        files: &[KnowledgeFile],
        retrieval: &RetrievalResult,
    ) -> String {
        if matches!(intent, Intent::HookGeneration | Intent::PostRewrite) {
            let template_file = files.iter().find(|file| {
                let content = file.content.as_deref().unwrap_or_default();
                categorize_knowledge_file(&file.filename, content)
                    == FileCategory::InstructionTemplate
            });
            if let Some(file) = template_file {
                info!("Using instruction template from `{}`", file.filename);
                let template =
                    extract_instruction_template(file.content.as_deref().unwrap_or_default());
                return prompt::build_template_prompt(&self.config.base_prompt, &template, intent);
            }
        }

        prompt::build_system_prompt(&self.config.base_prompt, retrieval, intent)
    }

    /// Loads the chatbot's knowledge files with content resolved.
    ///
    /// Content downloads fan out concurrently; a file whose content cannot
    /// be resolved is kept with `content: None` and skipped by retrieval.
    async fn load_documents(&self) -> Result<Vec<KnowledgeFile>, ChatError> {
        let mut files = self.document_store.list().await?;
        info!("Loading content for {} knowledge files", files.len());

        let fetches = files
            .iter()
            .map(|file| self.document_store.fetch(&file.file_path));
        let contents = join_all(fetches).await;

        for (file, content) in files.iter_mut().zip(contents) {
            file.content = content?;
        }

        Ok(files)
    }
}
