//! # Knowledge File Categorization
//!
//! Tells instruction/template documents apart from factual knowledge, and
//! pulls a structured template out of prose. Extraction is regex inference
//! over free text written by chatbot owners, so it is best-effort by nature:
//! a missed section yields an empty field, never an error.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// The category of a knowledge base file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    /// The file tells the bot how to act (rules, prompt templates, examples).
    InstructionTemplate,
    /// The file tells the bot facts to answer from.
    FactualKnowledge,
    /// Too little content to tell.
    Unknown,
}

/// Content phrases that suggest a file is an instruction template.
const CONTENT_INDICATORS: &[&str] = &[
    "{insert",
    "{user",
    "user prompt template",
    "system prompt template",
    "generate 5",
    "guidelines:",
    "you are ",
    "rules:",
    "must be",
    "tone must be",
    "avoid emojis",
    "example:",
    "match the tone of these examples",
];

/// Filename fragments that suggest a file is an instruction template.
const FILENAME_INDICATORS: &[&str] = &[
    "instruction",
    "template",
    "prompt",
    "framework",
    "guide",
    "rules",
];

/// Indicator score a file must reach to count as a template.
const TEMPLATE_SCORE_THRESHOLD: u32 = 3;

/// Files shorter than this are categorized as unknown.
const MIN_FACTUAL_LEN: usize = 50;

/// Categorizes a knowledge base file from its name and content.
///
/// Content indicators score one point each, filename indicators two; at
/// three points the file counts as an instruction template. Anything else
/// with substance is factual knowledge.
pub fn categorize_knowledge_file(filename: &str, content: &str) -> FileCategory {
    let lower_content = content.to_lowercase();
    let lower_filename = filename.to_lowercase();

    let mut score = 0u32;
    for indicator in CONTENT_INDICATORS {
        if lower_content.contains(indicator) {
            score += 1;
        }
    }
    for indicator in FILENAME_INDICATORS {
        if lower_filename.contains(indicator) {
            score += 2;
        }
    }

    if score >= TEMPLATE_SCORE_THRESHOLD {
        debug!("Categorized `{filename}` as instruction template (score {score})");
        return FileCategory::InstructionTemplate;
    }

    if content.len() > MIN_FACTUAL_LEN {
        return FileCategory::FactualKnowledge;
    }

    FileCategory::Unknown
}

/// A structured instruction template extracted from a template file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstructionTemplate {
    /// The persona and rules section, usually opening with "You are ...".
    pub system_rules: String,
    /// The owner's own task phrasing, if they wrote one.
    pub user_prompt_template: String,
    /// Output shape guidelines.
    pub response_format: String,
    /// Example outputs to match the tone of.
    pub examples: Vec<String>,
}

/// Runs a pattern against text and returns the first capture, trimmed.
fn capture_first(pattern: &str, text: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Extracts a structured template from raw instruction file content.
///
/// Sections that cannot be located come back empty. The patterns target the
/// loose conventions owners actually use ("Guidelines:", "Examples:",
/// numbered example lists), not a grammar.
pub fn extract_instruction_template(content: &str) -> InstructionTemplate {
    let mut template = InstructionTemplate::default();

    if let Some(rules) = capture_first(r"(?s)(You are .*?)(?:\n\n|\nUser Prompt|Generate|$)", content)
    {
        template.system_rules = rules;
    }

    if let Some(user_prompt) = capture_first(
        r"(?s)(?:User Prompt Template:|Generate .*? for the following post)[:\s]+(.*?)(?:\n\n[A-Z]|$)",
        content,
    ) {
        template.user_prompt_template = user_prompt;
    }

    if let Some(format) = capture_first(
        r"(?s)(?:Response Format|Guidelines|Output)[:\s]+(.*?)(?:\n\n[A-Z]|$)",
        content,
    ) {
        template.response_format = format;
    }

    if let Some(examples_text) = capture_first(
        r"(?s)(?:Examples?|Match the tone of these examples)[:\s]+(.*?)(?:\n\n[A-Z]|Post:|$)",
        content,
    ) {
        template.examples = examples_text
            .lines()
            .filter(|line| is_list_item(line) && line.trim().len() > 10)
            .map(strip_list_marker)
            .collect();
    }

    template
}

/// Does this line start with a number, dash, or star marker?
fn is_list_item(line: &str) -> bool {
    line.trim_start()
        .starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '*')
}

/// Strips the leading list marker ("1. ", "- ", "* ") from a line.
fn strip_list_marker(line: &str) -> String {
    line.trim_start()
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == '-' || c == '*' || c == '.')
        .trim()
        .to_string()
}
