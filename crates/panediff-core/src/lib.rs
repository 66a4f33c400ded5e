//! panediff Core - text diff engine
//!
//! This crate provides:
//! - Line splitting and word tokenization
//! - A pluggable sequence-diff boundary with a `similar`-backed default
//! - Line-level run lists, unified patches and side-by-side alignment with
//!   word-level highlights
//! - The structured error facility and the logging facility shared with the CLI

pub mod diff;
pub mod errors;
pub mod logging_facility;

pub use panediff_core_types as core_types;

// Re-export commonly used types
pub use diff::{
    compute_line_diff, compute_side_by_side_diff, create_unified_diff, create_unified_diff_with,
    split_lines, spans_to_kind_text, DiffEngine, LineChange, SideBySideRow, SimilarDiff,
    UnifiedDiffOptions,
};
pub use errors::{DiffError, ExError, ExErrorKind, Result};
