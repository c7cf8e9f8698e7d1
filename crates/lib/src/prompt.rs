//! # Prompt Assembly
//!
//! Folds the chatbot's persona prompt, the retrieved knowledge, and the
//! intent-specific task instruction into one system prompt string. Also
//! hosts the template-driven variant used when a chatbot ships its own
//! instruction-template file for the content tasks.

use crate::intent::Intent;
use crate::prompts::{
    tasks, DEFAULT_BASE_PROMPT, KNOWLEDGE_SECTION_FOOTER, KNOWLEDGE_SECTION_HEADER,
};
use crate::template::InstructionTemplate;
use crate::types::{ContentChunk, RetrievalResult};
use tracing::debug;

/// Builds the system prompt for one conversation turn.
///
/// Starts from the base prompt (or a generic persona when empty). A
/// non-empty retrieval result is injected as a delimited knowledge section,
/// chunks grouped under per-file headings in selection order. One fixed
/// task instruction is appended per intent. With an empty retrieval result
/// this degrades to base prompt plus instruction.
pub fn build_system_prompt(
    base_prompt: &str,
    retrieval: &RetrievalResult,
    intent: Intent,
) -> String {
    let mut prompt = if base_prompt.trim().is_empty() {
        DEFAULT_BASE_PROMPT.to_string()
    } else {
        base_prompt.to_string()
    };

    if !retrieval.chunks.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(KNOWLEDGE_SECTION_HEADER);
        prompt.push('\n');
        prompt.push_str(&format!(
            "You have access to relevant information from {} documents. Use this information to provide accurate, detailed responses.\n",
            retrieval.files_used.len()
        ));

        for (filename, chunks) in group_by_file(&retrieval.chunks) {
            prompt.push_str(&format!("\n--- {filename} ---\n"));
            for chunk in chunks {
                prompt.push_str(&chunk.content);
                prompt.push_str("\n\n");
            }
        }

        prompt.push_str(KNOWLEDGE_SECTION_FOOTER);
        prompt.push_str("\n\n");
    } else {
        debug!("No knowledge retrieved; assembling base prompt only");
        prompt.push_str("\n\n");
    }

    prompt.push_str(task_instruction(intent));
    prompt.push('\n');

    prompt
}

/// Groups chunks by source file, preserving both the order files first
/// appear in and each file's internal chunk order.
fn group_by_file(chunks: &[ContentChunk]) -> Vec<(&str, Vec<&ContentChunk>)> {
    let mut groups: Vec<(&str, Vec<&ContentChunk>)> = Vec::new();
    for chunk in chunks {
        match groups.iter_mut().find(|(name, _)| *name == chunk.filename) {
            Some((_, group)) => group.push(chunk),
            None => groups.push((chunk.filename.as_str(), vec![chunk])),
        }
    }
    groups
}

fn task_instruction(intent: Intent) -> &'static str {
    match intent {
        Intent::HookGeneration => tasks::HOOK_GENERATION_INSTRUCTION,
        Intent::PostRewrite => tasks::POST_REWRITE_INSTRUCTION,
        Intent::NormalConversation => tasks::GROUNDED_ANSWER_INSTRUCTION,
    }
}

/// Builds a system prompt from a chatbot's own instruction template.
///
/// Used for the content tasks (hooks, rewrites) when the knowledge base
/// carries a template file: the template's rules replace the knowledge
/// section entirely. Falls back to built-in rules when the template's rules
/// section is empty, and to the base prompt for normal conversation.
pub fn build_template_prompt(
    base_prompt: &str,
    template: &InstructionTemplate,
    intent: Intent,
) -> String {
    if intent == Intent::NormalConversation {
        return if base_prompt.trim().is_empty() {
            DEFAULT_BASE_PROMPT.to_string()
        } else {
            base_prompt.to_string()
        };
    }

    let mut prompt = String::new();

    if template.system_rules.is_empty() {
        prompt.push_str(tasks::FALLBACK_TEMPLATE_RULES);
    } else {
        prompt.push_str(&template.system_rules);
    }
    prompt.push_str("\n\n");

    if intent == Intent::HookGeneration {
        prompt.push_str(tasks::HOOK_TASK_GUIDELINES);
        prompt.push_str("\n\n");
        if !template.examples.is_empty() {
            prompt.push_str(tasks::EXAMPLES_HEADER);
            prompt.push('\n');
            for (i, example) in template.examples.iter().enumerate() {
                prompt.push_str(&format!("{}. {example}\n", i + 1));
            }
            prompt.push('\n');
        }
    } else {
        prompt.push_str(tasks::REWRITE_TASK_GUIDELINES);
        prompt.push_str("\n\n");
    }

    prompt
}
