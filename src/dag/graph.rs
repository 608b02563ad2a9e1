// src/dag/graph.rs

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::types::{Concept, ConceptId, Edge};

/// Successor lists and in-degrees for every known concept.
///
/// Every concept in the input list gets an entry, even when it has no edges,
/// so isolated concepts are representable. Edges that mention an id outside
/// the concept list are dropped.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    successors: HashMap<ConceptId, Vec<ConceptId>>,
    in_degree: HashMap<ConceptId, usize>,
}

impl Adjacency {
    /// Immediate successors (dependents) of a concept, in edge input order.
    pub fn successors_of(&self, id: ConceptId) -> &[ConceptId] {
        self.successors
            .get(&id)
            .map(|s| s.as_slice())
            .unwrap_or(&[])
    }

    /// Number of accepted incoming edges; `None` for unknown concepts.
    pub fn in_degree_of(&self, id: ConceptId) -> Option<usize> {
        self.in_degree.get(&id).copied()
    }

    pub fn contains(&self, id: ConceptId) -> bool {
        self.in_degree.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.in_degree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_degree.is_empty()
    }
}

/// Build adjacency and in-degree tables from a flat concept and edge list.
pub fn build_adjacency(concepts: &[Concept], edges: &[Edge]) -> Adjacency {
    let mut successors: HashMap<ConceptId, Vec<ConceptId>> =
        HashMap::with_capacity(concepts.len());
    let mut in_degree: HashMap<ConceptId, usize> = HashMap::with_capacity(concepts.len());

    for concept in concepts {
        successors.entry(concept.id).or_default();
        in_degree.entry(concept.id).or_insert(0);
    }

    let mut skipped = 0usize;
    for edge in edges {
        if !in_degree.contains_key(&edge.from) || !in_degree.contains_key(&edge.to) {
            warn!(
                from = edge.from,
                to = edge.to,
                "edge references an unknown concept; ignoring"
            );
            skipped += 1;
            continue;
        }

        if let Some(succ) = successors.get_mut(&edge.from) {
            succ.push(edge.to);
        }
        if let Some(deg) = in_degree.get_mut(&edge.to) {
            *deg += 1;
        }
    }

    debug!(
        concepts = in_degree.len(),
        edges = edges.len() - skipped,
        skipped,
        "built adjacency"
    );

    Adjacency {
        successors,
        in_degree,
    }
}
