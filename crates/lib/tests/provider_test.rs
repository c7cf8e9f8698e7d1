//! # Chat Provider Tests
//!
//! Exercises the OpenAI-compatible provider against a mock HTTP server,
//! including the fallback-model behavior on upstream failures.

use anychat::providers::ai::{openrouter::OpenRouterProvider, AiProvider};
use anyhow::Result;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_generate_returns_completion_text() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Refunds take 30 days."}}
            ],
            "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49}
        })))
        .mount(&server)
        .await;

    let provider = OpenRouterProvider::new(
        format!("{}/v1/chat/completions", server.uri()),
        Some("test-key".to_string()),
        "openai/gpt-3.5-turbo".to_string(),
        vec![],
    )?;

    let text = provider.generate("system prompt", "user prompt").await?;
    assert_eq!(text, "Refunds take 30 days.");
    Ok(())
}

#[tokio::test]
async fn test_generate_falls_back_when_primary_model_fails() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"model": "primary/model"})))
        .respond_with(ResponseTemplate::new(500).set_body_string("model overloaded"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"model": "backup/model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "answer from the backup"}}
            ]
        })))
        .mount(&server)
        .await;

    let provider = OpenRouterProvider::new(
        server.uri(),
        None,
        "primary/model".to_string(),
        vec!["backup/model".to_string()],
    )?;

    let text = provider.generate("system", "user").await?;
    assert_eq!(text, "answer from the backup");
    Ok(())
}

#[tokio::test]
async fn test_generate_surfaces_last_error_when_all_models_fail() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("downstream unavailable"))
        .mount(&server)
        .await;

    let provider = OpenRouterProvider::new(
        server.uri(),
        None,
        "primary/model".to_string(),
        vec!["backup/model".to_string()],
    )?;

    let err = provider
        .generate("system", "user")
        .await
        .expect_err("all models fail");
    assert!(err.to_string().contains("downstream unavailable"));
    Ok(())
}
