// src/layout/packer.rs

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::dag::layering::{assign_layers, Layers};
use crate::layout::config::LayoutConfig;
use crate::types::{Concept, ConceptId, Edge};

/// Render-ready position of one concept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodePosition {
    pub id: ConceptId,
    pub layer: usize,
    pub x: f64,
    pub y: f64,
}

/// Positions for every concept, in concept-list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    nodes: Vec<NodePosition>,
    index: HashMap<ConceptId, usize>,
}

impl Layout {
    pub fn get(&self, id: ConceptId) -> Option<&NodePosition> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn nodes(&self) -> &[NodePosition] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct layers in use.
    pub fn depth(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| n.layer + 1)
            .max()
            .unwrap_or(0)
    }

    /// Node ids of a single layer, left to right.
    pub fn layer(&self, layer: usize) -> Vec<ConceptId> {
        let mut row: Vec<&NodePosition> =
            self.nodes.iter().filter(|n| n.layer == layer).collect();
        row.sort_by(|a, b| a.x.total_cmp(&b.x));
        row.into_iter().map(|n| n.id).collect()
    }
}

/// Turn layer indices into 2-D coordinates.
///
/// Each layer is a row centred on `x = 0`; rows stack downwards at a fixed
/// pitch of `node_height + gap_y`. Within a row, nodes keep concept-list
/// order. A concept missing from `layers` is placed on layer 0, and a
/// repeated concept id is placed only once.
pub fn pack(layers: &Layers, concepts: &[Concept], cfg: &LayoutConfig) -> Layout {
    let mut by_layer: BTreeMap<usize, Vec<ConceptId>> = BTreeMap::new();
    let mut seen: HashSet<ConceptId> = HashSet::with_capacity(concepts.len());

    for concept in concepts {
        if !seen.insert(concept.id) {
            continue;
        }
        let layer = layers.get(&concept.id).copied().unwrap_or(0);
        by_layer.entry(layer).or_default().push(concept.id);
    }

    let mut positions: HashMap<ConceptId, NodePosition> = HashMap::with_capacity(seen.len());
    for (&layer, ids) in &by_layer {
        let k = ids.len() as f64;
        let span = k * cfg.node_width + (k - 1.0) * cfg.gap_x;
        let y = layer as f64 * cfg.row_pitch();

        for (i, &id) in ids.iter().enumerate() {
            let x = i as f64 * cfg.column_pitch() - span / 2.0 + cfg.node_width / 2.0;
            positions.insert(id, NodePosition { id, layer, x, y });
        }
    }

    let mut layout = Layout::default();
    for concept in concepts {
        if layout.index.contains_key(&concept.id) {
            continue;
        }
        if let Some(pos) = positions.remove(&concept.id) {
            layout.index.insert(concept.id, layout.nodes.len());
            layout.nodes.push(pos);
        }
    }

    debug!(
        nodes = layout.len(),
        layers = by_layer.len(),
        "packed layout"
    );

    layout
}

/// Layer and pack in one go.
pub fn compute_layout(concepts: &[Concept], edges: &[Edge], cfg: &LayoutConfig) -> Layout {
    let layers = assign_layers(concepts, edges);
    pack(&layers, concepts, cfg)
}
