// src/progress/mod.rs

//! Per-concept progress: state classification, blockers, and the reference
//! evaluation of unlocked/frontier sets.

pub mod blockers;
pub mod classify;
pub mod evaluate;

pub use blockers::{get_blockers, Blocker};
pub use classify::{classify, ProgressSets};
pub use evaluate::{completion_percent, evaluate_progress, frontier, toggle_mastered, unlocked};
