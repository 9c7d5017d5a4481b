//! Meal dataset: canonical schema types and the JSON loader.
//!
//! The dataset is read once at process start and never mutated. Top-level
//! sections are optional at parse time; a section is only an error when a
//! response actually needs it, reported as [`DataError::Malformed`] with the
//! dotted path of the missing field.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Dataset file name looked up next to the executable by default.
pub const DATA_FILE_NAME: &str = "meal_data.json";

// ── Errors ───────────────────────────────────────────────────────

/// Failure modes for dataset access.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The file is missing, unreadable, or not valid JSON at all.
    #[error("meal data unavailable at {path}: {reason}")]
    Unavailable { path: PathBuf, reason: String },
    /// The file parses as JSON but a field the response needs is missing
    /// or has the wrong shape.
    #[error("malformed meal data: {detail}")]
    Malformed { detail: String },
}

impl DataError {
    fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }
}

// ── Schema ───────────────────────────────────────────────────────

/// A duration with its unit, e.g. `{ "duration": 5, "unit": "minutes" }`.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeSpan {
    pub duration: u32,
    pub unit: String,
}

/// One ingredient entry. Only the name is required.
#[derive(Debug, Clone, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
}

/// Per-meal sensory tags. Any dimension may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensoryProfile {
    #[serde(default)]
    pub texture: Vec<String>,
    #[serde(default)]
    pub temperature: Vec<String>,
    #[serde(default)]
    pub taste: Vec<String>,
    #[serde(default)]
    pub smell: Vec<String>,
}

impl SensoryProfile {
    /// True when no dimension carries a tag.
    pub fn is_empty(&self) -> bool {
        self.texture.is_empty()
            && self.temperature.is_empty()
            && self.taste.is_empty()
            && self.smell.is_empty()
    }
}

/// A single meal record.
#[derive(Debug, Clone, Deserialize)]
pub struct Meal {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub meal_type: Vec<String>,
    #[serde(default)]
    pub sensory_profile: SensoryProfile,
    pub prep_time: TimeSpan,
    #[serde(default)]
    pub cook_time: Option<TimeSpan>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub preparation_steps: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Meal {
    /// Whether this meal carries the given texture tag.
    pub fn has_texture(&self, texture: &str) -> bool {
        self.sensory_profile.texture.iter().any(|t| t == texture)
    }
}

/// Texture-level guidance: what to avoid and what to offer instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensoryConsiderations {
    pub avoidance_triggers: Option<BTreeMap<String, Vec<String>>>,
    pub texture_mapping: Option<BTreeMap<String, Vec<String>>>,
}

/// The whole dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub meals: Option<Vec<Meal>>,
    pub sensory_considerations: Option<SensoryConsiderations>,
    pub executive_function_support_strategies: Option<BTreeMap<String, Vec<String>>>,
}

impl Dataset {
    /// The meal list. Required by the sensory and time categories.
    pub fn meals(&self) -> Result<&[Meal], DataError> {
        self.meals
            .as_deref()
            .ok_or_else(|| DataError::malformed("`meals` is missing"))
    }

    /// Avoidance triggers for a sensory dimension. The dimension key is a
    /// required field: its absence is an error, not an empty list.
    pub fn avoidance_triggers(&self, dimension: &str) -> Result<&[String], DataError> {
        let considerations = self
            .sensory_considerations
            .as_ref()
            .ok_or_else(|| DataError::malformed("`sensory_considerations` is missing"))?;
        let triggers = considerations.avoidance_triggers.as_ref().ok_or_else(|| {
            DataError::malformed("`sensory_considerations.avoidance_triggers` is missing")
        })?;
        triggers
            .get(dimension)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                DataError::malformed(format!(
                    "`sensory_considerations.avoidance_triggers.{dimension}` is missing"
                ))
            })
    }

    /// Suggested alternatives for a texture. The mapping itself is required,
    /// but a texture without an entry is fine and yields `None`.
    pub fn texture_alternatives(&self, texture: &str) -> Result<Option<&[String]>, DataError> {
        let considerations = self
            .sensory_considerations
            .as_ref()
            .ok_or_else(|| DataError::malformed("`sensory_considerations` is missing"))?;
        let mapping = considerations.texture_mapping.as_ref().ok_or_else(|| {
            DataError::malformed("`sensory_considerations.texture_mapping` is missing")
        })?;
        Ok(mapping.get(texture).map(Vec::as_slice))
    }

    /// Strategy list for an executive-function challenge key.
    pub fn support_strategies(&self, challenge: &str) -> Result<&[String], DataError> {
        let strategies = self
            .executive_function_support_strategies
            .as_ref()
            .ok_or_else(|| {
                DataError::malformed("`executive_function_support_strategies` is missing")
            })?;
        strategies.get(challenge).map(Vec::as_slice).ok_or_else(|| {
            DataError::malformed(format!(
                "`executive_function_support_strategies.{challenge}` is missing"
            ))
        })
    }
}

// ── Loader ───────────────────────────────────────────────────────

/// Load and parse the dataset file.
///
/// I/O failures and JSON syntax errors are [`DataError::Unavailable`]; JSON
/// that is well-formed but does not fit the schema (e.g. a duration stored
/// as a string) is [`DataError::Malformed`].
pub fn load(path: &Path) -> Result<Dataset, DataError> {
    let raw = std::fs::read_to_string(path).map_err(|e| DataError::Unavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let dataset: Dataset = serde_json::from_str(&raw).map_err(|e| match e.classify() {
        serde_json::error::Category::Data => DataError::Malformed {
            detail: e.to_string(),
        },
        _ => DataError::Unavailable {
            path: path.to_path_buf(),
            reason: format!("invalid JSON: {e}"),
        },
    })?;

    tracing::debug!(
        path = %path.display(),
        meals = dataset.meals.as_ref().map_or(0, Vec::len),
        "meal dataset loaded"
    );
    Ok(dataset)
}

// ── Tests ────────────────────────────────────────────────────────
