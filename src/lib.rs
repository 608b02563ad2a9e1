// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod layout;
pub mod logging;
pub mod progress;
pub mod report;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::loader::load_and_validate;
use crate::config::model::TopicFile;
use crate::progress::{evaluate_progress, toggle_mastered, ProgressSets};
use crate::report::build_report;
use crate::types::ConceptId;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - topic loading and validation
/// - mastery toggles requested on the command line
/// - progress sets (from the file, or derived)
/// - layout + classification into a report
pub fn run(args: CliArgs) -> Result<()> {
    let topic_path = PathBuf::from(&args.topic);
    let topic = load_and_validate(&topic_path)?;
    info!(
        topic = topic.name(),
        concepts = topic.concept.len(),
        edges = topic.edge.len(),
        "loaded topic"
    );

    if args.dry_run {
        print_dry_run(&topic);
        return Ok(());
    }

    let progress = resolve_progress(&topic, &args.toggle, args.derive_progress);

    let report = build_report(
        topic.name(),
        &topic.concept,
        &topic.edge,
        &progress,
        &topic.layout,
        args.focus,
    )?;

    match args.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

/// Apply toggles to the stored mastered set and pick the unlocked/frontier
/// sets to classify against.
///
/// Stored unlocked/frontier sets were evaluated against the stored mastered
/// set, so any toggle forces a fresh evaluation.
pub fn resolve_progress(topic: &TopicFile, toggles: &[ConceptId], derive: bool) -> ProgressSets {
    let mut mastered = topic.progress.mastered.clone();
    for &id in toggles {
        let now = toggle_mastered(&mut mastered, id);
        debug!(concept = id, mastered = now, "toggled mastery");
    }

    if derive || !toggles.is_empty() {
        evaluate_progress(&topic.concept, &topic.edge, mastered)
    } else {
        ProgressSets {
            mastered,
            unlocked: topic.progress.unlocked.clone(),
            frontier: topic.progress.frontier.clone(),
        }
    }
}

/// Simple dry-run output: print concepts, edges and stored progress.
fn print_dry_run(topic: &TopicFile) {
    println!("skillmap dry-run: {}", topic.name());
    println!(
        "  layout = {}x{} boxes, gaps {} / {}",
        topic.layout.node_width, topic.layout.node_height, topic.layout.gap_x, topic.layout.gap_y
    );
    println!();

    println!("concepts ({}):", topic.concept.len());
    for concept in &topic.concept {
        println!("  - #{} {}", concept.id, concept.name);
        if let Some(ref desc) = concept.description {
            println!("      description: {desc}");
        }
        if concept.difficulty_level.is_some() {
            println!("      difficulty: {}", concept.difficulty().label());
        }
        let prereqs: Vec<ConceptId> = topic
            .edge
            .iter()
            .filter(|e| e.to == concept.id)
            .map(|e| e.from)
            .collect();
        if !prereqs.is_empty() {
            println!("      after: {:?}", prereqs);
        }
    }

    let mut mastered: Vec<ConceptId> = topic.progress.mastered.iter().copied().collect();
    mastered.sort_unstable();
    println!();
    println!("mastered: {:?}", mastered);

    debug!("dry-run complete (no layout)");
}
