//! # Knowledge File Categorization Tests

use anychat::template::{
    categorize_knowledge_file, extract_instruction_template, FileCategory,
};

const TEMPLATE_FILE: &str = "\
You are a bold content strategist who writes viral posts.

Guidelines:
- Tone must be confident and direct.
- Avoid emojis and filler.

Match the tone of these examples:
1. Nobody cares about your product launch.
2. Your resume is why you are not getting hired.

Post: {insert post here}";

#[test]
fn test_template_file_is_categorized_by_content_and_name() {
    assert_eq!(
        categorize_knowledge_file("hook-framework.txt", TEMPLATE_FILE),
        FileCategory::InstructionTemplate
    );
    // Content indicators alone can cross the threshold too.
    assert_eq!(
        categorize_knowledge_file("notes.txt", TEMPLATE_FILE),
        FileCategory::InstructionTemplate
    );
}

#[test]
fn test_factual_file_is_categorized_as_knowledge() {
    let content = "Our company was founded in 2019. We sell industrial sensors across Europe.";
    assert_eq!(
        categorize_knowledge_file("company.txt", content),
        FileCategory::FactualKnowledge
    );
}

#[test]
fn test_tiny_file_is_unknown() {
    assert_eq!(
        categorize_knowledge_file("stub.txt", "todo"),
        FileCategory::Unknown
    );
}

#[test]
fn test_filename_indicators_weigh_double() {
    // One filename indicator (2) plus one content indicator (1) crosses the
    // threshold; the same content under a neutral name does not.
    let content = format!("Rules:\n{}", "General information about the product. ".repeat(3));
    assert_eq!(
        categorize_knowledge_file("style-guide.txt", &content),
        FileCategory::InstructionTemplate
    );
    assert_eq!(
        categorize_knowledge_file("misc.txt", &content),
        FileCategory::FactualKnowledge
    );
}

#[test]
fn test_extract_template_sections() {
    let template = extract_instruction_template(TEMPLATE_FILE);

    assert!(template
        .system_rules
        .starts_with("You are a bold content strategist"));
    assert!(template.response_format.contains("Tone must be confident"));
    assert_eq!(template.examples.len(), 2);
    assert_eq!(template.examples[0], "Nobody cares about your product launch.");
}

#[test]
fn test_extract_template_from_plain_prose_is_empty() {
    let template = extract_instruction_template("Just a paragraph about shipping times.");
    assert!(template.system_rules.is_empty());
    assert!(template.examples.is_empty());
}

#[test]
fn test_extraction_is_pure() {
    let first = extract_instruction_template(TEMPLATE_FILE);
    let second = extract_instruction_template(TEMPLATE_FILE);
    assert_eq!(first, second);
}
