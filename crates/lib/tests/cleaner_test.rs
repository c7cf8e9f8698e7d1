//! # Response Cleaner Tests

use anychat::cleaner::clean_response;
use anychat::intent::Intent;

#[test]
fn test_hook_output_is_trimmed_to_the_numbered_list() {
    let raw = "Here are the hooks:\n1. A\n2. B\n3. C\n4. D\n5. E\nHope this helps!";
    let cleaned = clean_response(raw, Intent::HookGeneration);

    assert!(cleaned.starts_with("1. A"));
    assert!(!cleaned.contains("Hope this helps"));
    assert!(cleaned.ends_with("5. E"));
}

#[test]
fn test_meta_prefix_is_stripped_for_all_intents() {
    let raw = "Sure, happy to help:\nOur refunds are processed in 5 days.";
    let cleaned = clean_response(raw, Intent::NormalConversation);
    assert_eq!(cleaned, "Our refunds are processed in 5 days.");

    let raw = "Based on the knowledge base:\nWe ship worldwide.";
    assert_eq!(
        clean_response(raw, Intent::NormalConversation),
        "We ship worldwide."
    );
}

#[test]
fn test_parenthesized_list_markers_are_recognized() {
    let raw = "Intro text 1) First hook\n2) Second\n3) Third\n4) Fourth\n5) Fifth\nextra";
    let cleaned = clean_response(raw, Intent::HookGeneration);
    assert!(cleaned.starts_with("1) First hook"));
    assert!(!cleaned.contains("extra"));
}

#[test]
fn test_output_without_numbered_list_passes_through() {
    let raw = "The model ignored the format and wrote prose instead.";
    let cleaned = clean_response(raw, Intent::HookGeneration);
    assert_eq!(cleaned, raw);
}

#[test]
fn test_other_intents_are_not_truncated() {
    let raw = "1. First point\n2. Second point\n5. Fifth point\nA concluding remark.";
    let cleaned = clean_response(raw, Intent::NormalConversation);
    assert!(cleaned.contains("A concluding remark."));
}

#[test]
fn test_whitespace_is_trimmed() {
    let cleaned = clean_response("  plain answer  \n", Intent::NormalConversation);
    assert_eq!(cleaned, "plain answer");
}
