//! Keyword-matching response engine.
//!
//! Classifies a free-text query into a topic category using ordered
//! substring checks, then assembles the reply from dataset fields.
//! Matching is case-insensitive containment with no tokenization or word
//! boundaries: "minutes" inside a longer word still counts.

use crate::data::{DataError, Dataset, Meal};

pub mod catalog;

// ── Fixed replies ────────────────────────────────────────────────

/// Reply for an empty query.
pub const EMPTY_INPUT_MESSAGE: &str = "Please provide some input.";

/// Farewell for "exit"/"quit".
pub const FAREWELL_MESSAGE: &str = "Goodbye! Take care.";

/// Topic overview shown when nothing matched.
pub const FALLBACK_MESSAGE: &str = "I'm NeuroChef, here to help with meal planning for \
    neurodivergent needs. You can ask me about sensory preferences (textures), quick meals, \
    or executive function challenges.";

/// Sensory category matched but no concrete texture did.
const SENSORY_GUIDANCE: &str = "I can help with meal suggestions based on sensory preferences. \
    Try asking about specific textures like 'smooth', 'soft', or 'crunchy'.";

/// Executive-function category matched but neither sub-topic did.
const EXECUTIVE_GUIDANCE: &str = "I can help with executive function challenges. \
    Try asking about 'planning' or 'memory challenges'.";

/// Time category matched but the quick-meal filter came up empty.
const NO_QUICK_MEALS: &str = "I don't have any quick meals in my database yet.";

// ── Keyword tables ───────────────────────────────────────────────

/// Sensory-category trigger words.
const SENSORY_KEYWORDS: &[&str] = &["texture", "sensory", "smooth", "soft", "crunchy"];

/// Time-category trigger words.
const TIME_KEYWORDS: &[&str] = &["quick", "fast", "time", "minutes"];

/// Executive-function-category trigger words. Note that "memory" is not a
/// trigger; it is only tested once the category has already matched.
const EXECUTIVE_KEYWORDS: &[&str] = &["planning", "remember", "executive", "function"];

/// Default inclusive cutoff, in minutes, for the quick-meal list.
pub const DEFAULT_QUICK_MEAL_MAX_MINUTES: u32 = 15;

// ── Classification ───────────────────────────────────────────────

/// Topic bucket a query lands in. Tested in declaration order; the first
/// match wins, so a query holding both sensory and time keywords is sensory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Texture and sensory-preference questions.
    Sensory,
    /// Quick-preparation meal questions.
    Time,
    /// Planning and memory support questions.
    ExecutiveFunction,
    /// Anything else: topic overview.
    Fallback,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sensory => "sensory",
            Self::Time => "time",
            Self::ExecutiveFunction => "executive_function",
            Self::Fallback => "fallback",
        }
    }
}

/// Classify a query into its response category.
pub fn classify(query: &str) -> Category {
    let lower = query.to_lowercase();

    // 1. Sensory keywords
    if SENSORY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Category::Sensory;
    }

    // 2. Time keywords
    if TIME_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Category::Time;
    }

    // 3. Executive-function keywords
    if EXECUTIVE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Category::ExecutiveFunction;
    }

    // 4. Nothing matched
    Category::Fallback
}

/// Whether the whole query is an exit word ("exit"/"quit", any case).
pub fn is_farewell(query: &str) -> bool {
    let lower = query.to_lowercase();
    lower == "exit" || lower == "quit"
}

// ── Responder ────────────────────────────────────────────────────

/// The keyword-matching responder.
pub struct Responder {
    /// Inclusive duration cutoff for the quick-meal list.
    quick_meal_max_minutes: u32,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(DEFAULT_QUICK_MEAL_MAX_MINUTES)
    }
}

impl Responder {
    pub fn new(quick_meal_max_minutes: u32) -> Self {
        Self {
            quick_meal_max_minutes,
        }
    }

    /// Create from a `ResponderConfig`.
    pub fn from_config(config: &crate::config::ResponderConfig) -> Self {
        Self::new(config.quick_meal_max_minutes)
    }

    /// Answer a query from the dataset.
    ///
    /// Detail questions about one named meal are answered first, but only
    /// when the name resolves against the dataset; otherwise the category
    /// dispatch below runs exactly as if the detail stage did not exist.
    pub fn respond(&self, query: &str, dataset: &Dataset) -> Result<String, DataError> {
        let lower = query.to_lowercase();
        let meals = dataset.meals.as_deref().unwrap_or(&[]);

        if let Some(reply) = catalog::detail_response(&lower, meals) {
            tracing::debug!(category = "meal_detail", "query answered from the catalog");
            return Ok(reply);
        }

        let category = classify(query);
        tracing::debug!(category = category.label(), "query classified");

        match category {
            Category::Sensory => self.sensory_response(&lower, dataset),
            Category::Time => self.time_response(dataset),
            Category::ExecutiveFunction => executive_response(&lower, dataset),
            Category::Fallback => {
                // A query that is nothing but a meal name gets that meal's
                // info instead of the overview.
                if let Some(reply) = catalog::named_meal_response(&lower, meals) {
                    tracing::debug!(category = "meal_name", "query answered from the catalog");
                    return Ok(reply);
                }
                Ok(FALLBACK_MESSAGE.to_string())
            }
        }
    }

    /// Sensory category: each concrete texture is tested independently and
    /// the fragments are concatenated in fixed order (smooth, soft, crunchy).
    fn sensory_response(&self, lower: &str, dataset: &Dataset) -> Result<String, DataError> {
        let mut fragments: Vec<String> = Vec::new();

        if lower.contains("smooth") {
            let names = meals_with_texture(dataset.meals()?, "smooth");
            if !names.is_empty() {
                fragments.push(format!(
                    "For smooth textures, you might enjoy: {}.",
                    names.join(", ")
                ));
            }
        }

        if lower.contains("soft") {
            let names = meals_with_texture(dataset.meals()?, "soft");
            if !names.is_empty() {
                fragments.push(format!(
                    "For soft textures, you might enjoy: {}.",
                    names.join(", ")
                ));
            }
        }

        if lower.contains("crunchy") {
            // The avoidance list is always emitted; only the alternatives
            // lookup tolerates an absent entry.
            let avoidance = dataset.avoidance_triggers("texture")?;
            fragments.push(format!(
                "I notice you mentioned crunchy textures. Some neurodivergent individuals avoid: {}.",
                avoidance.join(", ")
            ));
            if let Some(alternatives) = dataset.texture_alternatives("crunchy")? {
                fragments.push(format!(
                    "Instead, you might prefer: {}.",
                    alternatives.join(", ")
                ));
            }
        }

        if fragments.is_empty() {
            return Ok(SENSORY_GUIDANCE.to_string());
        }
        Ok(fragments.join("\n"))
    }

    /// Time category: meals measured in minutes at or under the cutoff.
    fn time_response(&self, dataset: &Dataset) -> Result<String, DataError> {
        let quick: Vec<String> = dataset
            .meals()?
            .iter()
            .filter(|m| {
                m.prep_time.unit == "minutes" && m.prep_time.duration <= self.quick_meal_max_minutes
            })
            .map(|m| format!("{} ({} {})", m.name, m.prep_time.duration, m.prep_time.unit))
            .collect();

        if quick.is_empty() {
            return Ok(NO_QUICK_MEALS.to_string());
        }
        Ok(format!("Here are some quick meals: {}.", quick.join(", ")))
    }
}

/// Executive-function category: planning first, then memory, else guidance.
fn executive_response(lower: &str, dataset: &Dataset) -> Result<String, DataError> {
    if lower.contains("planning") {
        let strategies = dataset.support_strategies("difficulty_planning")?;
        return Ok(format!(
            "For difficulty with planning, consider: {}.",
            strategies.join(", ")
        ));
    }

    if lower.contains("remember") || lower.contains("memory") {
        let strategies = dataset.support_strategies("memory_challenges")?;
        return Ok(format!(
            "For memory challenges, consider: {}.",
            strategies.join(", ")
        ));
    }

    Ok(EXECUTIVE_GUIDANCE.to_string())
}

fn meals_with_texture<'a>(meals: &'a [Meal], texture: &str) -> Vec<&'a str> {
    meals
        .iter()
        .filter(|m| m.has_texture(texture))
        .map(|m| m.name.as_str())
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────
