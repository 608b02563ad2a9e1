// src/config/model.rs

use serde::Deserialize;

use crate::layout::LayoutConfig;
use crate::progress::ProgressSets;
use crate::types::{Concept, ConceptId, Edge};

/// Top-level topic file as read from TOML.
///
/// ```toml
/// [topic]
/// name = "Linear Algebra"
///
/// [[concept]]
/// id = 1
/// name = "Vectors"
///
/// [[concept]]
/// id = 2
/// name = "Matrices"
///
/// [[edge]]
/// from = 1
/// to = 2
///
/// [progress]
/// mastered = [1]
/// unlocked = [2]
/// ```
///
/// All sections are optional and have reasonable defaults. This is the raw,
/// unvalidated form; see [`TopicFile`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTopicFile {
    #[serde(default)]
    pub topic: TopicSection,

    /// Box and gap dimensions from `[layout]`.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// All concepts from `[[concept]]`, in file order.
    #[serde(default)]
    pub concept: Vec<Concept>,

    /// All prerequisite edges from `[[edge]]`, in file order.
    #[serde(default)]
    pub edge: Vec<Edge>,

    #[serde(default)]
    pub progress: ProgressSets,
}

/// `[topic]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicSection {
    #[serde(default)]
    pub name: Option<String>,
}

/// A validated topic.
///
/// Only constructible through `TryFrom<RawTopicFile>` (or
/// [`TopicFile::new_unchecked`] inside the crate), so holders can rely on
/// unique concept ids, sane layout dimensions and an acyclic edge set.
#[derive(Debug, Clone)]
pub struct TopicFile {
    pub topic: TopicSection,
    pub layout: LayoutConfig,
    pub concept: Vec<Concept>,
    pub edge: Vec<Edge>,
    pub progress: ProgressSets,
}

impl TopicFile {
    pub(crate) fn new_unchecked(raw: RawTopicFile) -> Self {
        Self {
            topic: raw.topic,
            layout: raw.layout,
            concept: raw.concept,
            edge: raw.edge,
            progress: raw.progress,
        }
    }

    /// Display name of the topic, or `"untitled"`.
    pub fn name(&self) -> &str {
        self.topic.name.as_deref().unwrap_or("untitled")
    }

    pub fn concept(&self, id: ConceptId) -> Option<&Concept> {
        self.concept.iter().find(|c| c.id == id)
    }
}
