pub mod openrouter;

use crate::errors::ChatError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a chat completion provider.
///
/// This is the boundary to the third-party language-model API: the core
/// hands over a system prompt and a user prompt and gets generated text
/// back. Retry and fallback-model behavior live behind this trait, never in
/// the retrieval core.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, ChatError>;
}

dyn_clone::clone_trait_object!(AiProvider);
