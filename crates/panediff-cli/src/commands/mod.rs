//! Subcommands and the helpers they share.

use std::path::Path;

use panediff_core::diff::{DiffAlgorithm, DiffEngine, SimilarDiff};
use panediff_core::{ExError, ExErrorKind};
use serde::Serialize;

pub mod lines;
pub mod side_by_side;
pub mod unified;

/// Engine for the algorithm chosen on the command line.
pub fn engine(algorithm: DiffAlgorithm) -> DiffEngine {
    DiffEngine::new(SimilarDiff::new(algorithm))
}

/// Read one input document.
pub fn read_input(path: &Path) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_input")
            .with_message(format!("{}: {}", path.display(), e))
    })
}

/// Pretty-printed JSON for `--json` output.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("write_json")
            .with_message(e.to_string())
    })
}
