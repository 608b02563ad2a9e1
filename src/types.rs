// src/types.rs

//! Plain data types shared by every layer of the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical concept identifier used throughout the engine.
pub type ConceptId = i64;

/// A single learning concept (a node in the prerequisite DAG).
///
/// Identity is the `id`; `name` is display-only and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: ConceptId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<i64>,
}

impl Concept {
    pub fn new(id: ConceptId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            difficulty_level: None,
        }
    }

    /// Presentation label for this concept's difficulty.
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_level(self.difficulty_level)
    }
}

/// Prerequisite relation: `from` must be mastered before `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: ConceptId,
    pub to: ConceptId,
}

impl Edge {
    pub fn new(from: ConceptId, to: ConceptId) -> Self {
        Self { from, to }
    }
}

/// Progress classification of a concept for one learner.
///
/// The four states are mutually exclusive; see
/// [`crate::progress::classify`] for the precedence between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressState {
    Mastered,
    Unlocked,
    Frontier,
    #[default]
    Locked,
}

impl ProgressState {
    /// Style class name handed to the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            ProgressState::Mastered => "mastered",
            ProgressState::Unlocked => "unlocked",
            ProgressState::Frontier => "frontier",
            ProgressState::Locked => "locked",
        }
    }

    /// Short badge label shown to the learner.
    pub fn label(self) -> &'static str {
        match self {
            ProgressState::Mastered => "MASTERED",
            ProgressState::Unlocked => "UNLOCKED",
            ProgressState::Frontier => "ALMOST",
            ProgressState::Locked => "LOCKED",
        }
    }
}

impl fmt::Display for ProgressState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mastered" => Ok(ProgressState::Mastered),
            "unlocked" => Ok(ProgressState::Unlocked),
            "frontier" => Ok(ProgressState::Frontier),
            "locked" => Ok(ProgressState::Locked),
            other => Err(format!(
                "invalid progress state: {other} (expected mastered, unlocked, frontier or locked)"
            )),
        }
    }
}

/// Difficulty badge derived from `Concept::difficulty_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Easy,
    Intermediate,
    Hard,
    Advanced,
}

impl Difficulty {
    /// Map a 1..=5 level to a badge; anything else falls back to `Beginner`.
    pub fn from_level(level: Option<i64>) -> Self {
        match level {
            Some(2) => Difficulty::Easy,
            Some(3) => Difficulty::Intermediate,
            Some(4) => Difficulty::Hard,
            Some(5) => Difficulty::Advanced,
            _ => Difficulty::Beginner,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "BEGINNER",
            Difficulty::Easy => "EASY",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Hard => "HARD",
            Difficulty::Advanced => "ADVANCED",
        }
    }
}
