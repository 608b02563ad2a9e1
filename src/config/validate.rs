// src/config/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::config::model::{RawTopicFile, TopicFile};
use crate::errors::{Result, SkillmapError};
use crate::types::{Concept, ConceptId, Edge};

impl TryFrom<RawTopicFile> for TopicFile {
    type Error = SkillmapError;

    fn try_from(raw: RawTopicFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_topic(&raw)?;
        Ok(TopicFile::new_unchecked(raw))
    }
}

fn validate_raw_topic(raw: &RawTopicFile) -> Result<()> {
    validate_layout(raw)?;
    validate_unique_ids(&raw.concept)?;
    warn_unknown_endpoints(&raw.concept, &raw.edge);
    validate_dag(&raw.concept, &raw.edge)?;
    Ok(())
}

fn validate_layout(raw: &RawTopicFile) -> Result<()> {
    let l = &raw.layout;
    for (field, value) in [("node_width", l.node_width), ("node_height", l.node_height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(SkillmapError::ConfigError(format!(
                "[layout].{field} must be a positive number (got {value})"
            )));
        }
    }
    for (field, value) in [("gap_x", l.gap_x), ("gap_y", l.gap_y)] {
        if !value.is_finite() || value < 0.0 {
            return Err(SkillmapError::ConfigError(format!(
                "[layout].{field} must be >= 0 (got {value})"
            )));
        }
    }
    Ok(())
}

fn validate_unique_ids(concepts: &[Concept]) -> Result<()> {
    let mut seen = HashSet::with_capacity(concepts.len());
    for concept in concepts {
        if !seen.insert(concept.id) {
            return Err(SkillmapError::ConfigError(format!(
                "concept id {} is defined more than once",
                concept.id
            )));
        }
    }
    Ok(())
}

/// Edges to unknown concepts are tolerated downstream, so they only warn.
fn warn_unknown_endpoints(concepts: &[Concept], edges: &[Edge]) {
    let ids: HashSet<ConceptId> = concepts.iter().map(|c| c.id).collect();
    for edge in edges {
        for endpoint in [edge.from, edge.to] {
            if !ids.contains(&endpoint) {
                warn!(
                    from = edge.from,
                    to = edge.to,
                    unknown = endpoint,
                    "edge references a concept that is not in the topic"
                );
            }
        }
    }
}

/// Reject cyclic prerequisite graphs, self-edges included.
pub fn validate_dag(concepts: &[Concept], edges: &[Edge]) -> Result<()> {
    // Edge direction: prerequisite -> dependent.
    let mut graph: DiGraphMap<ConceptId, ()> = DiGraphMap::new();

    for concept in concepts {
        graph.add_node(concept.id);
    }

    for edge in edges {
        if edge.from == edge.to {
            return Err(SkillmapError::DagCycle(format!(
                "concept {} lists itself as a prerequisite",
                edge.from
            )));
        }
        graph.add_edge(edge.from, edge.to, ());
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(SkillmapError::DagCycle(format!(
            "cycle detected in prerequisite graph involving concept {}",
            cycle.node_id()
        ))),
    }
}
