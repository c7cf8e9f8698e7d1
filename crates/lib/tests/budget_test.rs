//! # Token Budget Tests

use anychat::budget::{
    estimate_tokens, estimate_tokens_with_ratio, knowledge_budget, ModelContextTable,
    DEFAULT_CHARS_PER_TOKEN, FALLBACK_CONTEXT_LIMIT,
};
use anychat::config::RetrievalConfig;

#[test]
fn test_estimate_uses_conservative_ratio() {
    // 1000 chars at 2.5 chars per token.
    assert_eq!(estimate_tokens(&"x".repeat(1000)), 400);
    assert_eq!(estimate_tokens(""), 0);
    // Partial tokens round up.
    assert_eq!(estimate_tokens("ab"), 1);
    assert_eq!(estimate_tokens("abc"), 2);
}

#[test]
fn test_estimate_is_monotonic_over_prefixes() {
    let text = "The refund policy applies to enterprise customers only.";
    let mut previous = 0;
    for end in 0..=text.len() {
        if !text.is_char_boundary(end) {
            continue;
        }
        let estimate = estimate_tokens(&text[..end]);
        assert!(estimate >= previous, "estimate decreased at prefix {end}");
        previous = estimate;
    }
}

#[test]
fn test_non_positive_ratio_falls_back() {
    let text = "x".repeat(250);
    assert_eq!(
        estimate_tokens_with_ratio(&text, 0.0),
        estimate_tokens_with_ratio(&text, DEFAULT_CHARS_PER_TOKEN)
    );
}

#[test]
fn test_context_limit_exact_match() {
    let table = ModelContextTable::default();
    assert_eq!(table.context_limit("gpt-3.5-turbo"), 16_000);
    assert_eq!(table.context_limit("claude-3-opus"), 200_000);
    assert_eq!(table.context_limit("openai/gpt-4"), 8_192);
}

#[test]
fn test_context_limit_substring_heuristics() {
    let table = ModelContextTable::default();
    assert_eq!(table.context_limit("gpt-4-turbo-2024-04-09"), 128_000);
    assert_eq!(table.context_limit("some-claude-3-variant"), 200_000);
    assert_eq!(table.context_limit("meta/llama-3.1-405b-instruct"), 128_000);
}

#[test]
fn test_context_limit_conservative_default() {
    let table = ModelContextTable::default();
    assert_eq!(table.context_limit("mystery-model-9000"), FALLBACK_CONTEXT_LIMIT);
    assert_eq!(ModelContextTable::empty().context_limit("anything"), FALLBACK_CONTEXT_LIMIT);
}

#[test]
fn test_context_limit_is_injectable() {
    let table = ModelContextTable::empty().with_limit("acme-llm", 64_000);
    assert_eq!(table.context_limit("acme-llm"), 64_000);
}

#[test]
fn test_budget_applies_shape_caps() {
    let config = RetrievalConfig::default();

    // Weak signal: capped at 15k even on a 200k-context model.
    assert_eq!(knowledge_budget(200_000, 1, &config), 15_000);
    // Strong signal: capped at 35k.
    assert_eq!(knowledge_budget(200_000, 2, &config), 35_000);
    // Small model: the reserved allowance dominates.
    assert_eq!(knowledge_budget(16_000, 2, &config), 12_000);
}

#[test]
fn test_budget_never_goes_negative() {
    let config = RetrievalConfig::default();
    // A misconfigured limit below the reservation clamps to zero.
    assert_eq!(knowledge_budget(1000, 2, &config), 0);
    assert_eq!(knowledge_budget(0, 0, &config), 0);
}
