//! # Response Cleaning
//!
//! Post-processes raw model output: strips meta-commentary prefixes, and for
//! hook generation trims the text down to exactly the five numbered items.
//! A best-effort formatter, not a validator: output that never produces a
//! numbered list passes through unchanged.

use crate::intent::Intent;
use regex::Regex;

/// Prefix patterns the models habitually open with.
const META_PREFIX_PATTERNS: &[&str] = &[
    r"(?i)^here are .*?:\n+",
    r"(?i)^here's .*?:\n+",
    r"(?i)^sure.*?:\n+",
    r"(?i)^i've .*?:\n+",
    r"(?i)^based on .*?:\n+",
];

/// Cleans a raw model response for the given intent.
///
/// All intents get meta-commentary prefixes removed. Hook generation is
/// additionally shaped: text before the first `1.`/`1)` item and anything
/// after the fifth item is dropped, so the visible output is exactly the
/// numbered list.
pub fn clean_response(response: &str, intent: Intent) -> String {
    let mut cleaned = response.trim().to_string();

    for pattern in META_PREFIX_PATTERNS {
        if let Ok(re) = Regex::new(pattern) {
            cleaned = re.replace(&cleaned, "").into_owned();
        }
    }

    if intent == Intent::HookGeneration {
        cleaned = shape_numbered_list(&cleaned);
    }

    cleaned.trim().to_string()
}

/// Trims to the `1.` through `5.` items of a numbered list.
fn shape_numbered_list(text: &str) -> String {
    let mut shaped = text.to_string();

    // Drop any preamble before the first numbered item.
    if let Ok(re) = Regex::new(r"1[.)]\s") {
        if let Some(m) = re.find(&shaped) {
            shaped = shaped[m.start()..].to_string();
        }
    }

    // Drop anything after the fifth item's line.
    if let Ok(re) = Regex::new(r"^5[.)]\s") {
        let lines: Vec<&str> = shaped.lines().collect();
        if let Some(last_hook_index) = lines.iter().position(|line| re.is_match(line)) {
            shaped = lines[..=last_hook_index].join("\n");
        }
    }

    shaped
}
