//! Unified command
//!
//! Usage: panediff unified <ORIGINAL> <MODIFIED> [-U <N>] [--label-original <L>] [--label-modified <L>]

use clap::Args;
use panediff_core::diff::{DiffEngine, DEFAULT_CONTEXT_LINES};
use panediff_core::{ExError, UnifiedDiffOptions};
use std::path::PathBuf;

use super::read_input;

#[derive(Debug, Args)]
pub struct UnifiedArgs {
    /// Original document
    pub original: PathBuf,

    /// Modified document
    pub modified: PathBuf,

    /// Unchanged lines shown around each change
    #[arg(short = 'U', long, default_value_t = DEFAULT_CONTEXT_LINES)]
    pub context: usize,

    /// Label for the `---` header (default: empty)
    #[arg(long)]
    pub label_original: Option<String>,

    /// Label for the `+++` header (default: empty)
    #[arg(long)]
    pub label_modified: Option<String>,
}

/// Execute unified command
pub fn execute(args: UnifiedArgs, engine: &DiffEngine) -> Result<(), ExError> {
    let original = read_input(&args.original)?;
    let modified = read_input(&args.modified)?;

    let options = UnifiedDiffOptions::with_context(args.context).with_labels(
        args.label_original.unwrap_or_default(),
        args.label_modified.unwrap_or_default(),
    );
    let patch = engine.unified_diff(&original, &modified, &options)?;

    print!("{}", patch);
    Ok(())
}
