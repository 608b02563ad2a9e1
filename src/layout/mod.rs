// src/layout/mod.rs

//! Coordinate layout for the layered prerequisite graph.
//!
//! [`config`] holds the box/gap dimensions that are injected into the
//! [`packer`], so layouts are reproducible without any rendering context.

pub mod config;
pub mod packer;

pub use config::LayoutConfig;
pub use packer::{compute_layout, pack, Layout, NodePosition};
