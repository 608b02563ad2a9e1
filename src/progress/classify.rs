// src/progress/classify.rs

use std::collections::HashSet;

use serde::Deserialize;

use crate::types::{ConceptId, ProgressState};

/// Classify a concept given the three externally supplied membership sets.
///
/// First match wins, in the fixed order mastered, unlocked, frontier; an id
/// in none of the sets is `Locked`. The sets are taken as-is: they are never
/// recomputed from edges here.
pub fn classify(
    id: ConceptId,
    mastered: &HashSet<ConceptId>,
    unlocked: &HashSet<ConceptId>,
    frontier: &HashSet<ConceptId>,
) -> ProgressState {
    if mastered.contains(&id) {
        ProgressState::Mastered
    } else if unlocked.contains(&id) {
        ProgressState::Unlocked
    } else if frontier.contains(&id) {
        ProgressState::Frontier
    } else {
        ProgressState::Locked
    }
}

/// A learner's progress as handed over by the caller.
///
/// Corresponds to the `[progress]` section of a topic file. `unlocked` and
/// `frontier` are opaque: they come from whoever evaluated the progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProgressSets {
    #[serde(default)]
    pub mastered: HashSet<ConceptId>,
    #[serde(default)]
    pub unlocked: HashSet<ConceptId>,
    #[serde(default)]
    pub frontier: HashSet<ConceptId>,
}

impl ProgressSets {
    pub fn new(
        mastered: impl IntoIterator<Item = ConceptId>,
        unlocked: impl IntoIterator<Item = ConceptId>,
        frontier: impl IntoIterator<Item = ConceptId>,
    ) -> Self {
        Self {
            mastered: mastered.into_iter().collect(),
            unlocked: unlocked.into_iter().collect(),
            frontier: frontier.into_iter().collect(),
        }
    }

    pub fn classify(&self, id: ConceptId) -> ProgressState {
        classify(id, &self.mastered, &self.unlocked, &self.frontier)
    }
}
