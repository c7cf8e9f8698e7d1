//! # Intent Detection
//!
//! Classifies a raw user message into one of the task intents the platform
//! understands, and locates the post content a task should act on. Both are
//! keyword heuristics over the message text; no model call, no state.

use serde::{Deserialize, Serialize};

/// The classified purpose of a user message.
///
/// Derived purely from the current message; no conversation memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// The user wants attention-grabbing hooks generated for a post.
    HookGeneration,
    /// The user wants an existing post rewritten or improved.
    PostRewrite,
    /// Anything else: a plain question for the chatbot.
    #[default]
    NormalConversation,
}

/// Phrases that signal a hook generation request.
const HOOK_TRIGGERS: &[&str] = &[
    "generate hook",
    "create hook",
    "write hook",
    "give me hook",
    "make hook",
    "viral hook",
    "hook for",
    "hooks for",
    "generate 5 hook",
];

/// Phrases that signal a post rewrite request.
const REWRITE_TRIGGERS: &[&str] = &[
    "rewrite",
    "improve this",
    "make this better",
    "enhance this",
    "rephrase",
    "polish this",
    "fix this post",
    "improve my post",
];

/// Separators after which the user's own post content usually starts.
const POST_SEPARATORS: &[&str] = &[
    "for:",
    "for this:",
    "for the following:",
    "this:",
    "this post:",
    "my post:",
    "---",
    "\n\n",
];

/// Minimum length for a separator-extracted post to be considered real.
const MIN_POST_LEN: usize = 10;

/// Detects the user's intent from their message.
///
/// Hook triggers are checked before rewrite triggers; the first match wins.
/// Total and deterministic, never fails.
pub fn detect_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();
    let lower = lower.trim();

    for trigger in HOOK_TRIGGERS {
        if lower.contains(trigger) {
            return Intent::HookGeneration;
        }
    }

    for trigger in REWRITE_TRIGGERS {
        if lower.contains(trigger) {
            return Intent::PostRewrite;
        }
    }

    Intent::NormalConversation
}

/// Extracts the post content a task should act on from the user's message.
///
/// Handles formats like "Generate hooks for: [post]" or "Rewrite this: [post]"
/// by scanning for separator tokens, falling back to sentence-boundary
/// splitting for long messages, then to the whole message when it is
/// substantial enough. Best-effort heuristics, not authoritative parsing.
pub fn extract_post_content(message: &str) -> Option<String> {
    // ASCII lowering keeps byte offsets valid in the original message.
    let lower = message.to_ascii_lowercase();

    for separator in POST_SEPARATORS {
        if let Some(index) = lower.find(separator) {
            let content = message[index + separator.len()..].trim();
            if content.len() > MIN_POST_LEN {
                return Some(content.to_string());
            }
        }
    }

    // Long message: assume everything after the first sentence is the post.
    if message.len() > 100 {
        let first_sentence_end = [". ", "? ", "! "]
            .iter()
            .filter_map(|boundary| message.find(boundary))
            .max();
        if let Some(end) = first_sentence_end {
            if end < 100 {
                let possible_post = message[end + 2..].trim();
                if possible_post.len() > 20 {
                    return Some(possible_post.to_string());
                }
            }
        }
    }

    // No clear separator but a substantial message: hand the whole thing over.
    if message.len() > 50 {
        return Some(message.to_string());
    }

    None
}

/// Returns true when the message appears to carry a post worth acting on.
pub fn has_post_content(message: &str) -> bool {
    extract_post_content(message).is_some_and(|content| content.len() > 20)
}
