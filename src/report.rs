// src/report.rs

//! Render-ready view of a topic: positioned and classified nodes, summary
//! counts, learning order and an optional focused concept.

use std::collections::HashMap;

use serde::Serialize;

use crate::dag::learning_order;
use crate::errors::{Result, SkillmapError};
use crate::layout::{compute_layout, LayoutConfig};
use crate::progress::{completion_percent, get_blockers, Blocker, ProgressSets};
use crate::types::{Concept, ConceptId, Edge, ProgressState};

/// One node as the presentation layer needs it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: ConceptId,
    pub name: String,
    pub layer: usize,
    pub x: f64,
    pub y: f64,
    pub state: ProgressState,
    pub label: &'static str,
    pub difficulty: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub mastered: usize,
    pub unlocked: usize,
    pub frontier: usize,
    pub locked: usize,
    pub percent: u32,
}

/// State and blockers of the currently selected concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusView {
    pub id: ConceptId,
    pub name: String,
    pub state: ProgressState,
    pub blockers: Vec<Blocker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicReport {
    pub topic: String,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<Edge>,
    pub summary: Summary,
    pub learning_order: Vec<ConceptId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<FocusView>,
}

/// Build the full report for a topic.
///
/// Fails only when `focus` names a concept that is not in `concepts`.
pub fn build_report(
    topic: &str,
    concepts: &[Concept],
    edges: &[Edge],
    progress: &ProgressSets,
    layout_cfg: &LayoutConfig,
    focus: Option<ConceptId>,
) -> Result<TopicReport> {
    let layout = compute_layout(concepts, edges, layout_cfg);

    let mut by_id: HashMap<ConceptId, &Concept> = HashMap::with_capacity(concepts.len());
    for concept in concepts {
        by_id.entry(concept.id).or_insert(concept);
    }

    let mut summary = Summary {
        total: layout.len(),
        percent: completion_percent(concepts, &progress.mastered),
        ..Summary::default()
    };

    let mut nodes = Vec::with_capacity(layout.len());
    for pos in layout.nodes() {
        let Some(&concept) = by_id.get(&pos.id) else {
            continue;
        };
        let state = progress.classify(pos.id);
        match state {
            ProgressState::Mastered => summary.mastered += 1,
            ProgressState::Unlocked => summary.unlocked += 1,
            ProgressState::Frontier => summary.frontier += 1,
            ProgressState::Locked => summary.locked += 1,
        }
        nodes.push(NodeView {
            id: pos.id,
            name: concept.name.clone(),
            layer: pos.layer,
            x: pos.x,
            y: pos.y,
            state,
            label: state.label(),
            difficulty: concept.difficulty().label(),
        });
    }

    let focus = match focus {
        Some(id) => {
            let concept = by_id
                .get(&id)
                .copied()
                .ok_or(SkillmapError::ConceptNotFound(id))?;
            Some(FocusView {
                id,
                name: concept.name.clone(),
                state: progress.classify(id),
                blockers: get_blockers(id, edges, concepts, &progress.mastered),
            })
        }
        None => None,
    };

    Ok(TopicReport {
        topic: topic.to_string(),
        nodes,
        edges: edges.to_vec(),
        summary,
        learning_order: learning_order(concepts, edges),
        focus,
    })
}

impl TopicReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text rendering, grouped by layer.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let s = &self.summary;

        out.push_str(&format!("skillmap: {}\n", self.topic));
        out.push_str(&format!(
            "  progress = {}% ({} / {} mastered, {} unlocked, {} almost, {} locked)\n\n",
            s.percent, s.mastered, s.total, s.unlocked, s.frontier, s.locked
        ));

        let depth = self.nodes.iter().map(|n| n.layer + 1).max().unwrap_or(0);
        for layer in 0..depth {
            out.push_str(&format!("layer {layer}:\n"));
            for node in self.nodes.iter().filter(|n| n.layer == layer) {
                out.push_str(&format!(
                    "  [{:<8}] #{:<4} {:<32} x={:>8.1} y={:>7.1}\n",
                    node.label, node.id, node.name, node.x, node.y
                ));
            }
        }

        if !self.learning_order.is_empty() {
            let order: Vec<String> = self.learning_order.iter().map(|id| id.to_string()).collect();
            out.push_str(&format!("\nlearning order: {}\n", order.join(" -> ")));
        }

        if let Some(ref focus) = self.focus {
            out.push_str(&format!(
                "\nfocus: #{} {} ({})\n",
                focus.id,
                focus.name,
                focus.state.label()
            ));
            if focus.blockers.is_empty() {
                out.push_str("  no unmet prerequisites\n");
            } else {
                out.push_str("  blocked by:\n");
                for b in &focus.blockers {
                    out.push_str(&format!("    - #{} {}\n", b.id, b.name));
                }
            }
        }

        out
    }
}
