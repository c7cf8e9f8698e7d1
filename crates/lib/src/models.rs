//! # Model Catalog
//!
//! The static catalog of chat models the platform offers, grouped by
//! provider, with context windows, pricing, and capability tags. Also hosts
//! the task-shape heuristics used to pick a sensible model when the chatbot
//! owner has not pinned one.

use serde::Serialize;

/// Per-million-token pricing for a model, in USD.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelPricing {
    pub input: f64,
    pub output: f64,
}

/// A single chat model entry.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub context_length: usize,
    pub pricing: ModelPricing,
    pub capabilities: &'static [&'static str],
    pub best_for: &'static [&'static str],
}

/// A provider grouping in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ModelProvider {
    pub id: &'static str,
    pub name: &'static str,
    pub models: &'static [ModelInfo],
}

/// The built-in catalog. Model identifiers use the router's
/// `provider/model` format.
pub static MODEL_PROVIDERS: &[ModelProvider] = &[
    ModelProvider {
        id: "openai",
        name: "OpenAI",
        models: &[
            ModelInfo {
                id: "openai/gpt-3.5-turbo",
                name: "GPT-3.5 Turbo",
                description: "Fast and efficient for basic conversational tasks",
                context_length: 16_385,
                pricing: ModelPricing {
                    input: 0.0015,
                    output: 0.002,
                },
                capabilities: &["chat", "text-generation"],
                best_for: &["quick responses", "basic questions", "cost-effective solutions"],
            },
            ModelInfo {
                id: "openai/gpt-4",
                name: "GPT-4",
                description: "Advanced reasoning and complex problem solving",
                context_length: 8_192,
                pricing: ModelPricing {
                    input: 0.03,
                    output: 0.06,
                },
                capabilities: &["chat", "reasoning", "analysis"],
                best_for: &["complex analysis", "detailed explanations", "creative tasks"],
            },
            ModelInfo {
                id: "openai/gpt-4-turbo",
                name: "GPT-4 Turbo",
                description: "Enhanced version with improved reasoning capabilities",
                context_length: 128_000,
                pricing: ModelPricing {
                    input: 0.01,
                    output: 0.03,
                },
                capabilities: &["chat", "advanced-reasoning", "analysis"],
                best_for: &["complex challenges", "multi-step reasoning", "technical analysis"],
            },
            ModelInfo {
                id: "openai/gpt-4o",
                name: "GPT-4o",
                description: "Optimized for real-time conversations and interactions",
                context_length: 128_000,
                pricing: ModelPricing {
                    input: 0.025,
                    output: 0.05,
                },
                capabilities: &["chat", "real-time", "multimodal"],
                best_for: &["real-time chat", "conversational AI", "interactive experiences"],
            },
        ],
    },
    ModelProvider {
        id: "anthropic",
        name: "Anthropic (Claude)",
        models: &[
            ModelInfo {
                id: "anthropic/claude-3.5-haiku-20241022",
                name: "Claude 3.5 Haiku",
                description: "Fast and efficient Claude model for quick tasks",
                context_length: 200_000,
                pricing: ModelPricing {
                    input: 0.001,
                    output: 0.005,
                },
                capabilities: &["chat", "analysis", "writing"],
                best_for: &["quick analysis", "writing assistance", "cost-effective solutions"],
            },
            ModelInfo {
                id: "anthropic/claude-3-5-sonnet-20241022",
                name: "Claude 3.5 Sonnet",
                description: "Balanced performance for most conversational needs",
                context_length: 200_000,
                pricing: ModelPricing {
                    input: 0.003,
                    output: 0.015,
                },
                capabilities: &["chat", "reasoning", "writing", "analysis"],
                best_for: &["balanced conversations", "thoughtful responses", "content creation"],
            },
            ModelInfo {
                id: "anthropic/claude-3-opus-20240229",
                name: "Claude 3 Opus",
                description: "Most capable Claude model for complex, nuanced tasks",
                context_length: 200_000,
                pricing: ModelPricing {
                    input: 0.015,
                    output: 0.075,
                },
                capabilities: &["advanced-reasoning", "nuanced-analysis", "creative-writing"],
                best_for: &["complex analysis", "nuanced conversations", "creative projects"],
            },
        ],
    },
    ModelProvider {
        id: "google",
        name: "Google Gemini",
        models: &[
            ModelInfo {
                id: "google/gemini-pro",
                name: "Gemini Pro",
                description: "Google's flagship model for general tasks",
                context_length: 32_768,
                pricing: ModelPricing {
                    input: 0.00125,
                    output: 0.00375,
                },
                capabilities: &["chat", "reasoning", "multimodal"],
                best_for: &["general conversations", "web reasoning", "multimodal tasks"],
            },
            ModelInfo {
                id: "google/gemini-flash-1.5",
                name: "Gemini 1.5 Flash",
                description: "Fast and efficient for quick responses",
                context_length: 1_000_000,
                pricing: ModelPricing {
                    input: 0.00075,
                    output: 0.003,
                },
                capabilities: &["chat", "fast-processing", "web-reasoning"],
                best_for: &["quick responses", "web search", "real-time interactions"],
            },
            ModelInfo {
                id: "google/gemini-pro-1.5",
                name: "Gemini 1.5 Pro",
                description: "Advanced capabilities with enhanced reasoning",
                context_length: 2_000_000,
                pricing: ModelPricing {
                    input: 0.0035,
                    output: 0.0105,
                },
                capabilities: &["advanced-reasoning", "multimodal", "web-reasoning"],
                best_for: &["complex reasoning", "multimodal analysis", "research tasks"],
            },
        ],
    },
];

/// Iterates over every model in the catalog.
pub fn all_models() -> impl Iterator<Item = &'static ModelInfo> {
    MODEL_PROVIDERS
        .iter()
        .flat_map(|provider| provider.models.iter())
}

/// Finds a model by its full identifier.
pub fn model_by_id(model_id: &str) -> Option<&'static ModelInfo> {
    all_models().find(|model| model.id == model_id)
}

/// The rough shape of a task, used for model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Quick,
    Complex,
    Creative,
    Analytical,
    Conversational,
}

/// Ranked model preferences per task type. First available wins.
const TASK_PREFERENCES: &[(TaskType, &[&str])] = &[
    (
        TaskType::Quick,
        &["openai/gpt-3.5-turbo", "anthropic/claude-3.5-haiku-20241022"],
    ),
    (
        TaskType::Complex,
        &[
            "openai/gpt-4-turbo",
            "anthropic/claude-3-opus-20240229",
            "openai/gpt-4",
        ],
    ),
    (
        TaskType::Creative,
        &[
            "anthropic/claude-3-opus-20240229",
            "anthropic/claude-3-5-sonnet-20241022",
            "openai/gpt-4",
        ],
    ),
    (
        TaskType::Analytical,
        &[
            "anthropic/claude-3-5-sonnet-20241022",
            "google/gemini-pro-1.5",
            "openai/gpt-4",
        ],
    ),
    (
        TaskType::Conversational,
        &[
            "openai/gpt-4o",
            "anthropic/claude-3-5-sonnet-20241022",
            "openai/gpt-4",
        ],
    ),
];

/// Picks the best model for a task from the models available to the chatbot.
///
/// When `available` is empty the whole catalog is considered. Falls back to
/// the first available model, then to the task's top preference.
pub fn select_optimal_model(task: TaskType, available: &[&str]) -> String {
    let preferences = TASK_PREFERENCES
        .iter()
        .find(|(candidate, _)| *candidate == task)
        .map(|(_, ids)| *ids)
        .unwrap_or_default();

    let is_available = |id: &str| available.is_empty() || available.contains(&id);

    for id in preferences {
        if is_available(id) && model_by_id(id).is_some() {
            return id.to_string();
        }
    }

    if let Some(model) = all_models().find(|model| is_available(model.id)) {
        return model.id.to_string();
    }

    preferences
        .first()
        .copied()
        .unwrap_or("openai/gpt-3.5-turbo")
        .to_string()
}

const COMPLEX_MARKERS: &[&str] = &[
    "analyze",
    "compare",
    "evaluate",
    "explain in detail",
    "step by step",
    "comprehensive",
    "thorough",
];

const CREATIVE_MARKERS: &[&str] = &[
    "write",
    "create",
    "design",
    "imagine",
    "story",
    "poem",
    "creative",
    "brainstorm",
    "generate ideas",
];

const ANALYTICAL_MARKERS: &[&str] = &[
    "data",
    "statistics",
    "research",
    "study",
    "report",
    "analysis",
    "insights",
    "trends",
];

const QUICK_OPENERS: &[&str] = &[
    "hi", "hello", "hey", "what", "who", "when", "where", "how much", "price", "cost",
];

/// Guesses a task type from the message shape. Keyword heuristics only.
pub fn analyze_task_type(message: &str) -> TaskType {
    let lower = message.to_lowercase();

    if lower.len() < 50 || QUICK_OPENERS.iter().any(|opener| lower.starts_with(opener)) {
        return TaskType::Quick;
    }

    if lower.len() > 200 || COMPLEX_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return TaskType::Complex;
    }

    if CREATIVE_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return TaskType::Creative;
    }

    if ANALYTICAL_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return TaskType::Analytical;
    }

    TaskType::Conversational
}
