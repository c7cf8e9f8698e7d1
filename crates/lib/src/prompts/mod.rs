//! # Default Prompt Templates
//!
//! Named prompt constants shared across the prompt assembly pipeline. The
//! knowledge-section delimiters are stable, parseable strings on purpose:
//! downstream logging greps for them to confirm knowledge was injected.

pub mod tasks;

/// Fallback persona used when a chatbot has no configured base prompt.
pub const DEFAULT_BASE_PROMPT: &str = "You are a helpful AI assistant.";

/// Opens the injected knowledge section of a system prompt.
pub const KNOWLEDGE_SECTION_HEADER: &str = "=== KNOWLEDGE BASE ===";

/// Closes the injected knowledge section of a system prompt.
pub const KNOWLEDGE_SECTION_FOOTER: &str = "=== END KNOWLEDGE BASE ===";

/// Marker appended to a factual file's leading excerpt by the general
/// retrieval strategy.
pub const PREVIEW_MARKER: &str = "[Preview only]";
