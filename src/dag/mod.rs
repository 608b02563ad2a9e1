// src/dag/mod.rs

//! Prerequisite graph structure and layering.
//!
//! - [`graph`] builds successor lists and in-degrees from flat lists.
//! - [`layering`] assigns each concept its longest-path layer.
//! - [`order`] derives a topological learning order.

pub mod graph;
pub mod layering;
pub mod order;

pub use graph::{build_adjacency, Adjacency};
pub use layering::{assign_layers, Layers};
pub use order::learning_order;
