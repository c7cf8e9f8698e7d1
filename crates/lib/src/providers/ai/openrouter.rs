use crate::{errors::ChatError, providers::ai::AiProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, warn};

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: i32 = 2000;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: i32,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: WireMessage,
}

#[derive(Deserialize, Debug)]
struct TokenUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

// --- OpenRouter provider implementation ---

/// A provider for OpenRouter or any OpenAI-compatible chat completion API.
///
/// Carries an ordered fallback-model list: when the primary model's call
/// fails, the fallbacks are tried in order before the error is surfaced.
#[derive(Clone, Debug)]
pub struct OpenRouterProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: String,
    fallback_models: Vec<String>,
}

impl OpenRouterProvider {
    /// Creates a new `OpenRouterProvider`.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: String,
        fallback_models: Vec<String>,
    ) -> Result<Self, ChatError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ChatError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
            fallback_models,
        })
    }

    async fn call_model(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ChatError> {
        let request_body = ChatCompletionRequest {
            model,
            messages: vec![
                WireMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                WireMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            stream: false,
        };

        let mut request_builder = self.client.post(&self.api_url);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(ChatError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::AiApi(error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(ChatError::AiDeserialization)?;

        if let Some(usage) = &completion.usage {
            debug!(
                model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Chat completion usage"
            );
        }

        Ok(completion
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl AiProvider for OpenRouterProvider {
    /// Generates a response, trying the primary model then each fallback.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ChatError> {
        let mut last_error = None;

        for model in std::iter::once(&self.model).chain(self.fallback_models.iter()) {
            match self.call_model(model, system_prompt, user_prompt).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!("Model `{model}` failed: {e}. Trying next fallback.");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ChatError::AiApi("no models configured".to_string())))
    }
}
