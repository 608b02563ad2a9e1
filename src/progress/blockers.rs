// src/progress/blockers.rs

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::{Concept, ConceptId, Edge};

/// A direct prerequisite that is not mastered yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blocker {
    pub id: ConceptId,
    pub name: String,
}

/// Immediate unmastered prerequisites of `id`, in edge-list order.
///
/// Only direct edges count; transitive prerequisites are not reported.
/// A prerequisite missing from `concepts` gets a placeholder name instead of
/// being dropped, since the edge list and the loaded concepts can briefly
/// disagree while a topic is being switched.
pub fn get_blockers(
    id: ConceptId,
    edges: &[Edge],
    concepts: &[Concept],
    mastered: &HashSet<ConceptId>,
) -> Vec<Blocker> {
    let mut names: HashMap<ConceptId, &str> = HashMap::with_capacity(concepts.len());
    for concept in concepts {
        names.entry(concept.id).or_insert(concept.name.as_str());
    }

    edges
        .iter()
        .filter(|e| e.to == id && !mastered.contains(&e.from))
        .map(|e| Blocker {
            id: e.from,
            name: names
                .get(&e.from)
                .map(|n| n.to_string())
                .unwrap_or_else(|| fallback_name(e.from)),
        })
        .collect()
}

fn fallback_name(id: ConceptId) -> String {
    format!("Concept #{id}")
}
