// src/dag/order.rs

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::dag::graph::build_adjacency;
use crate::types::{Concept, ConceptId, Edge};

/// Topological learning order (Kahn's algorithm).
///
/// Roots are seeded in concept-list order, so the result is stable for a
/// stable input. Concepts that sit on or behind a cycle never reach
/// in-degree 0 and are left out; the returned order is then shorter than
/// the concept list.
pub fn learning_order(concepts: &[Concept], edges: &[Edge]) -> Vec<ConceptId> {
    let adjacency = build_adjacency(concepts, edges);

    let mut remaining: HashMap<ConceptId, usize> = concepts
        .iter()
        .filter_map(|c| adjacency.in_degree_of(c.id).map(|d| (c.id, d)))
        .collect();

    let mut queue: VecDeque<ConceptId> = VecDeque::new();
    let mut seeded: HashSet<ConceptId> = HashSet::new();
    for concept in concepts {
        if remaining.get(&concept.id) == Some(&0) && seeded.insert(concept.id) {
            queue.push_back(concept.id);
        }
    }

    let mut order = Vec::with_capacity(remaining.len());
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &succ in adjacency.successors_of(node) {
            if let Some(deg) = remaining.get_mut(&succ) {
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(succ);
                }
            }
        }
    }

    if order.len() < remaining.len() {
        debug!(
            ordered = order.len(),
            total = remaining.len(),
            "learning order is partial; graph is not acyclic"
        );
    }

    order
}
