// src/config/mod.rs

//! Topic file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a topic file from disk (`loader.rs`).
//! - Validate invariants such as unique ids and acyclicity (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_from_str};
pub use model::{RawTopicFile, TopicFile, TopicSection};
pub use validate::validate_dag;
