// src/progress/evaluate.rs

//! Reference progress evaluation.
//!
//! This is the computation the progress backend performs to produce the
//! unlocked and frontier sets. It is kept separate from
//! [`crate::progress::classify`], which never derives state on its own; the
//! CLI only uses it when asked to (`--derive-progress`).

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::progress::classify::ProgressSets;
use crate::types::{Concept, ConceptId, Edge};

/// Direct prerequisites per concept, from the raw edge list.
fn prerequisites(edges: &[Edge]) -> HashMap<ConceptId, Vec<ConceptId>> {
    let mut reverse: HashMap<ConceptId, Vec<ConceptId>> = HashMap::new();
    for edge in edges {
        reverse.entry(edge.to).or_default().push(edge.from);
    }
    reverse
}

/// Non-mastered concepts that have prerequisites, all of them mastered.
///
/// Concepts without prerequisites are not reported here.
pub fn unlocked(
    concepts: &[Concept],
    edges: &[Edge],
    mastered: &HashSet<ConceptId>,
) -> Vec<ConceptId> {
    let reverse = prerequisites(edges);
    select(concepts, mastered, |id| {
        reverse
            .get(&id)
            .is_some_and(|pre| pre.iter().all(|p| mastered.contains(p)))
    })
}

/// Non-mastered concepts with exactly one unmastered prerequisite.
pub fn frontier(
    concepts: &[Concept],
    edges: &[Edge],
    mastered: &HashSet<ConceptId>,
) -> Vec<ConceptId> {
    let reverse = prerequisites(edges);
    select(concepts, mastered, |id| {
        reverse.get(&id).is_some_and(|pre| {
            pre.iter().filter(|p| !mastered.contains(p)).count() == 1
        })
    })
}

fn select(
    concepts: &[Concept],
    mastered: &HashSet<ConceptId>,
    keep: impl Fn(ConceptId) -> bool,
) -> Vec<ConceptId> {
    let mut seen = HashSet::new();
    concepts
        .iter()
        .map(|c| c.id)
        .filter(|id| !mastered.contains(id) && seen.insert(*id))
        .filter(|&id| keep(id))
        .collect()
}

/// Evaluate a full set of progress from the mastered set alone.
pub fn evaluate_progress(
    concepts: &[Concept],
    edges: &[Edge],
    mastered: HashSet<ConceptId>,
) -> ProgressSets {
    let unlocked = unlocked(concepts, edges, &mastered);
    let frontier = frontier(concepts, edges, &mastered);
    debug!(
        mastered = mastered.len(),
        unlocked = unlocked.len(),
        frontier = frontier.len(),
        "evaluated progress"
    );
    ProgressSets {
        mastered,
        unlocked: unlocked.into_iter().collect(),
        frontier: frontier.into_iter().collect(),
    }
}

/// Completion percentage, rounded to the nearest integer.
///
/// Only mastered ids that belong to `concepts` count.
pub fn completion_percent(concepts: &[Concept], mastered: &HashSet<ConceptId>) -> u32 {
    let ids: HashSet<ConceptId> = concepts.iter().map(|c| c.id).collect();
    if ids.is_empty() {
        return 0;
    }
    let done = ids.iter().filter(|id| mastered.contains(id)).count();
    ((done as f64 / ids.len() as f64) * 100.0).round() as u32
}

/// Flip the mastery of a concept. Returns whether it is mastered afterwards.
pub fn toggle_mastered(mastered: &mut HashSet<ConceptId>, id: ConceptId) -> bool {
    if mastered.remove(&id) {
        false
    } else {
        mastered.insert(id);
        true
    }
}
