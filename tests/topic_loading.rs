// tests/topic_loading.rs

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use skillmap::config::{load_and_validate, load_from_str, TopicFile};
use skillmap::errors::SkillmapError;
use skillmap::layout::LayoutConfig;
use skillmap_test_utils::builders::TopicBuilder;

type TestResult = Result<(), Box<dyn Error>>;

fn write_topic(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn demo_topic_loads_with_defaults() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let topic = load_and_validate(manifest.join("demos/linear-algebra.toml"))?;

    assert_eq!(topic.name(), "Linear Algebra");
    assert_eq!(topic.concept.len(), 6);
    assert_eq!(topic.edge.len(), 7);
    assert_eq!(topic.layout, LayoutConfig::default());
    assert!(topic.progress.mastered.contains(&3));
    assert_eq!(topic.concept(6).map(|c| c.difficulty().label()), Some("ADVANCED"));

    Ok(())
}

#[test]
fn minimal_topic_only_needs_concepts() -> TestResult {
    let raw = load_from_str(
        r#"
[[concept]]
id = 1
name = "Only"
"#,
    )?;
    let topic = TopicFile::try_from(raw)?;

    assert_eq!(topic.name(), "untitled");
    assert!(topic.edge.is_empty());
    assert!(topic.progress.mastered.is_empty());

    Ok(())
}

#[test]
fn layout_section_overrides_defaults_partially() -> TestResult {
    let raw = load_from_str(
        r#"
[layout]
node_width = 120.0
gap_y = 40.0
"#,
    )?;

    assert_eq!(raw.layout.node_width, 120.0);
    assert_eq!(raw.layout.node_height, 50.0);
    assert_eq!(raw.layout.gap_x, 48.0);
    assert_eq!(raw.layout.gap_y, 40.0);

    Ok(())
}

#[test]
fn test_cycle_returns_structured_error() {
    let file = write_topic(
        r#"
[[concept]]
id = 1
name = "A"

[[concept]]
id = 2
name = "B"

[[edge]]
from = 1
to = 2

[[edge]]
from = 2
to = 1
"#,
    );

    match load_and_validate(file.path()) {
        Err(SkillmapError::DagCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains('1') || msg.contains('2'));
        }
        Err(e) => panic!("Expected DagCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_self_edge_is_a_cycle() {
    let raw = TopicBuilder::new()
        .with_concept(1, "A")
        .with_edge(1, 1)
        .build_raw();

    match TopicFile::try_from(raw) {
        Err(SkillmapError::DagCycle(msg)) => assert!(msg.contains("itself")),
        other => panic!("Expected DagCycle error, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_duplicate_concept_id_returns_config_error() {
    let raw = TopicBuilder::new()
        .with_concept(3, "A")
        .with_concept(3, "B")
        .build_raw();

    match TopicFile::try_from(raw) {
        Err(SkillmapError::ConfigError(msg)) => assert!(msg.contains("concept id 3")),
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_non_positive_node_size_is_rejected() {
    let raw = TopicBuilder::new()
        .with_concept(1, "A")
        .with_layout(LayoutConfig {
            node_width: 0.0,
            ..LayoutConfig::default()
        })
        .build_raw();

    match TopicFile::try_from(raw) {
        Err(SkillmapError::ConfigError(msg)) => assert!(msg.contains("node_width")),
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn unknown_edge_endpoints_are_tolerated() {
    let topic = TopicBuilder::new()
        .with_concept(1, "A")
        .with_edge(1, 42)
        .with_edge(7, 1)
        .build();

    assert_eq!(topic.edge.len(), 2);
}

#[test]
fn malformed_toml_is_a_toml_error() {
    let file = write_topic("[[concept]]\nid = \"not a number\"\nname = 3\n");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(SkillmapError::TomlError(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let result = load_and_validate("/definitely/not/here/Topic.toml");
    assert!(matches!(result, Err(SkillmapError::IoError(_))));
}

#[test]
fn out_of_range_difficulty_falls_back_to_beginner() -> TestResult {
    for level in ["-1", "0", "6", "300"] {
        let raw = load_from_str(&format!(
            "[[concept]]\nid = 1\nname = \"A\"\ndifficulty_level = {level}\n"
        ))?;
        let topic = TopicFile::try_from(raw)?;

        assert_eq!(
            topic.concept(1).map(|c| c.difficulty().label()),
            Some("BEGINNER"),
            "difficulty_level = {level}"
        );
    }

    Ok(())
}
