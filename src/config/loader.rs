// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{RawTopicFile, TopicFile};
use crate::errors::Result;

/// Load a topic file from a given path and return the raw `RawTopicFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTopicFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read topic file");
    load_from_str(&contents)
}

/// Parse topic TOML that is already in memory.
pub fn load_from_str(contents: &str) -> Result<RawTopicFile> {
    let topic: RawTopicFile = toml::from_str(contents)?;
    Ok(topic)
}

/// Load a topic file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - duplicate concept ids,
///   - cycles in the prerequisite graph,
///   - unusable layout dimensions.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TopicFile> {
    let raw = load_from_path(&path)?;
    let topic = TopicFile::try_from(raw)?;
    Ok(topic)
}
