#![allow(dead_code)]

use skillmap::config::{RawTopicFile, TopicFile, TopicSection};
use skillmap::layout::LayoutConfig;
use skillmap::types::{Concept, ConceptId, Edge};

/// Builder for topics to simplify test setup.
pub struct TopicBuilder {
    topic: RawTopicFile,
}

impl TopicBuilder {
    pub fn new() -> Self {
        Self {
            topic: RawTopicFile::default(),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.topic.topic = TopicSection {
            name: Some(name.to_string()),
        };
        self
    }

    pub fn with_concept(mut self, id: ConceptId, name: &str) -> Self {
        self.topic.concept.push(Concept::new(id, name));
        self
    }

    pub fn with_difficulty(mut self, id: ConceptId, level: i64) -> Self {
        if let Some(c) = self.topic.concept.iter_mut().find(|c| c.id == id) {
            c.difficulty_level = Some(level);
        }
        self
    }

    /// `from` is a prerequisite of `to`.
    pub fn with_edge(mut self, from: ConceptId, to: ConceptId) -> Self {
        self.topic.edge.push(Edge::new(from, to));
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.topic.layout = layout;
        self
    }

    pub fn mastered(mut self, ids: &[ConceptId]) -> Self {
        self.topic.progress.mastered.extend(ids.iter().copied());
        self
    }

    pub fn unlocked(mut self, ids: &[ConceptId]) -> Self {
        self.topic.progress.unlocked.extend(ids.iter().copied());
        self
    }

    pub fn frontier(mut self, ids: &[ConceptId]) -> Self {
        self.topic.progress.frontier.extend(ids.iter().copied());
        self
    }

    pub fn build_raw(self) -> RawTopicFile {
        self.topic
    }

    pub fn build(self) -> TopicFile {
        TopicFile::try_from(self.topic).expect("Failed to build valid topic from builder")
    }
}

impl Default for TopicBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The four-concept diamond: A -> {B, C} -> D.
pub fn diamond() -> TopicBuilder {
    TopicBuilder::new()
        .named("diamond")
        .with_concept(1, "A")
        .with_concept(2, "B")
        .with_concept(3, "C")
        .with_concept(4, "D")
        .with_edge(1, 2)
        .with_edge(1, 3)
        .with_edge(2, 4)
        .with_edge(3, 4)
}

/// Shorthand for a list of bare concepts.
pub fn concepts(items: &[(ConceptId, &str)]) -> Vec<Concept> {
    items.iter().map(|&(id, name)| Concept::new(id, name)).collect()
}

/// Shorthand for a list of edges.
pub fn edges(items: &[(ConceptId, ConceptId)]) -> Vec<Edge> {
    items.iter().map(|&(from, to)| Edge::new(from, to)).collect()
}
