// src/layout/config.rs

use serde::{Deserialize, Serialize};

/// Node box and gap dimensions used by the packer.
///
/// Mirrors the optional `[layout]` section of a topic file:
///
/// ```toml
/// [layout]
/// node_width = 192.0
/// node_height = 50.0
/// gap_x = 48.0
/// gap_y = 90.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width of a node box (`NW`).
    #[serde(default = "default_node_width")]
    pub node_width: f64,

    /// Height of a node box (`NH`).
    #[serde(default = "default_node_height")]
    pub node_height: f64,

    /// Horizontal gap between neighbouring boxes in a layer (`GX`).
    #[serde(default = "default_gap_x")]
    pub gap_x: f64,

    /// Vertical gap between consecutive layers (`GY`).
    #[serde(default = "default_gap_y")]
    pub gap_y: f64,
}

fn default_node_width() -> f64 {
    192.0
}

fn default_node_height() -> f64 {
    50.0
}

fn default_gap_x() -> f64 {
    48.0
}

fn default_gap_y() -> f64 {
    90.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: default_node_width(),
            node_height: default_node_height(),
            gap_x: default_gap_x(),
            gap_y: default_gap_y(),
        }
    }
}

impl LayoutConfig {
    /// Horizontal distance between the centres of neighbouring nodes.
    pub fn column_pitch(&self) -> f64 {
        self.node_width + self.gap_x
    }

    /// Vertical distance between consecutive layers.
    pub fn row_pitch(&self) -> f64 {
        self.node_height + self.gap_y
    }
}
