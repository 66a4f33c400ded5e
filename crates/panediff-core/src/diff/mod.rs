//! Text diff engine.
//!
//! Compares two documents line by line and renders the result either as a
//! unified patch or as side-by-side rows with word-level highlights.
//!
//! ## Entry points
//!
//! ```
//! use panediff_core::diff::{compute_side_by_side_diff, create_unified_diff};
//!
//! let patch = create_unified_diff("a\nb\n", "a\nc\n", 3).unwrap();
//! assert!(patch.contains("-b\n+c\n"));
//!
//! let rows = compute_side_by_side_diff("hello world", "hello there").unwrap();
//! assert_eq!(rows.len(), 1);
//! ```
//!
//! ## Guarantees
//!
//! - **Minimality**: the default primitive (Myers) yields a minimal line edit script.
//! - **Reconstruction**: kept+removed run texts rebuild the original byte-for-byte;
//!   kept+added rebuild the modified document.
//! - **Numbering**: side-by-side line numbers start at 1 and rise by exactly one
//!   per non-empty cell on each side.
//! - **Positional pairing**: within a removed→added burst, removed line `i` is
//!   paired with added line `i`.
//! - **Empty fast path**: two empty documents never reach the primitive.

pub mod engine;
pub mod lines;
pub mod model;
pub mod sequence;
pub mod side_by_side;
pub mod spans;
pub mod unified;

pub use engine::{
    compute_line_diff, compute_side_by_side_diff, create_unified_diff, create_unified_diff_with,
    DiffEngine,
};
pub use lines::split_lines;
pub use model::{
    ChangeKind, DiffStats, InlineSpan, LeftKind, LineChange, RightKind, RowKind, SideBySideRow,
    SpanKind,
};
pub use sequence::{DiffAlgorithm, DiffRun, SequenceDiff, SimilarDiff};
pub use spans::spans_to_kind_text;
pub use unified::{UnifiedDiffOptions, DEFAULT_CONTEXT_LINES};
