//! # Configuration Loading Tests

use anychat::budget::DEFAULT_CHARS_PER_TOKEN;
use anychat::config::ChatbotConfig;
use anyhow::Result;

#[test]
fn test_minimal_yaml_fills_in_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("chatbot.yml");
    std::fs::write(&path, "base_prompt: You are the Acme support bot.\n")?;

    let config = ChatbotConfig::from_yaml_file(&path)?;

    assert_eq!(config.base_prompt, "You are the Acme support bot.");
    assert_eq!(config.model, "openai/gpt-3.5-turbo");
    assert!(config.features.knowledge_retrieval);
    assert!(config.features.intent_detection);
    assert_eq!(config.retrieval.chars_per_token, DEFAULT_CHARS_PER_TOKEN);
    assert_eq!(config.retrieval.reserved_tokens, 4000);
    assert_eq!(config.retrieval.general_knowledge_cap, 15_000);
    assert_eq!(config.retrieval.targeted_knowledge_cap, 35_000);
    assert_eq!(config.retrieval.max_template_files, 1);
    assert_eq!(config.retrieval.max_preview_files, 2);

    Ok(())
}

#[test]
fn test_yaml_overrides_tunables_and_model_table() -> Result<()> {
    let yaml = r#"
base_prompt: You are a sales assistant.
model: acme-llm
fallback_models:
  - openai/gpt-3.5-turbo
features:
  knowledge_retrieval: false
retrieval:
  reserved_tokens: 2500
  max_preview_files: 4
  context_limits:
    limits:
      acme-llm: 64000
    fallback: 9000
"#;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("chatbot.yml");
    std::fs::write(&path, yaml)?;

    let config = ChatbotConfig::from_yaml_file(&path)?;

    assert_eq!(config.model, "acme-llm");
    assert_eq!(config.fallback_models, vec!["openai/gpt-3.5-turbo"]);
    assert!(!config.features.knowledge_retrieval);
    // An unset flag inside a present section keeps its default.
    assert!(config.features.intent_detection);
    assert_eq!(config.retrieval.reserved_tokens, 2500);
    assert_eq!(config.retrieval.max_preview_files, 4);
    assert_eq!(config.retrieval.context_limits.context_limit("acme-llm"), 64_000);
    assert_eq!(config.retrieval.context_limits.context_limit("unknown"), 9000);

    Ok(())
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = ChatbotConfig::from_yaml_file("/nonexistent/chatbot.yml");
    assert!(result.is_err());
}
