//! Lines command
//!
//! Usage: panediff lines <ORIGINAL> <MODIFIED> [--json]

use clap::Args;
use panediff_core::diff::{ChangeKind, DiffEngine, DiffStats, LineChange};
use panediff_core::ExError;
use serde::Serialize;
use std::path::PathBuf;

use super::{read_input, to_json};

#[derive(Debug, Args)]
pub struct LinesArgs {
    /// Original document
    pub original: PathBuf,

    /// Modified document
    pub modified: PathBuf,

    /// Print the run list and totals as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LinesReport<'a> {
    changes: &'a [LineChange],
    stats: DiffStats,
}

/// Execute lines command
pub fn execute(args: LinesArgs, engine: &DiffEngine) -> Result<(), ExError> {
    let original = read_input(&args.original)?;
    let modified = read_input(&args.modified)?;

    let changes = engine.line_diff(&original, &modified)?;
    let stats = DiffStats::from_changes(&changes);

    if args.json {
        let report = LinesReport {
            changes: &changes,
            stats,
        };
        println!("{}", to_json(&report)?);
        return Ok(());
    }

    for change in &changes {
        let prefix = match change.kind {
            ChangeKind::Kept => ' ',
            ChangeKind::Removed => '-',
            ChangeKind::Added => '+',
        };
        for line in change.lines() {
            println!("{} {}", prefix, line);
        }
    }
    println!("{}", summary(&stats));
    Ok(())
}

fn summary(stats: &DiffStats) -> String {
    format!(
        "{} added, {} removed, {} unchanged",
        stats.lines_added, stats.lines_removed, stats.lines_kept
    )
}
