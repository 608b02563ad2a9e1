// src/dag/layering.rs

//! Longest-path layering of the prerequisite DAG.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, warn};

use crate::dag::graph::build_adjacency;
use crate::types::{Concept, ConceptId, Edge};

/// Layer index per concept, 0-based.
pub type Layers = HashMap<ConceptId, usize>;

/// Assign every concept a layer equal to the length of the longest path
/// reaching it from any root (in-degree 0 concept).
///
/// Uses breadth-first relaxation over an explicit work-list: a successor is
/// pushed again whenever its layer improves, so the final value is the
/// longest path rather than the first one seen. For every edge `u -> v` of an
/// acyclic input, `layer(v) > layer(u)`.
///
/// Concepts not reached from any root (only possible on cyclic input) stay at
/// layer 0. No layer may exceed `concepts.len() - 1`; on acyclic input that
/// bound is never hit, on cyclic input it ends the relaxation.
pub fn assign_layers(concepts: &[Concept], edges: &[Edge]) -> Layers {
    let adjacency = build_adjacency(concepts, edges);
    let max_layer = adjacency.len().saturating_sub(1);

    let mut layers: Layers = HashMap::with_capacity(adjacency.len());
    let mut queue: VecDeque<ConceptId> = VecDeque::new();
    let mut queued: HashSet<ConceptId> = HashSet::new();

    for concept in concepts {
        if adjacency.in_degree_of(concept.id) == Some(0) && queued.insert(concept.id) {
            layers.insert(concept.id, 0);
            queue.push_back(concept.id);
        }
    }

    let mut clamped = false;
    while let Some(node) = queue.pop_front() {
        queued.remove(&node);
        let candidate = layers.get(&node).copied().unwrap_or(0) + 1;

        for &succ in adjacency.successors_of(node) {
            if candidate > max_layer {
                clamped = true;
                continue;
            }

            let improved = match layers.get(&succ) {
                Some(&current) => candidate > current,
                None => true,
            };
            if !improved {
                continue;
            }

            layers.insert(succ, candidate);
            if queued.insert(succ) {
                queue.push_back(succ);
            }
        }
    }

    if clamped {
        warn!(
            max_layer,
            "layer relaxation hit the concept-count bound; input graph contains a cycle"
        );
    }

    for concept in concepts {
        layers.entry(concept.id).or_insert(0);
    }

    debug!(
        concepts = layers.len(),
        depth = layers.values().copied().max().map(|m| m + 1).unwrap_or(0),
        "assigned layers"
    );

    layers
}
