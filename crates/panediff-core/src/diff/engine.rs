//! Diff engine facade.
//!
//! [`DiffEngine`] owns one [`SequenceDiff`] primitive and exposes the three
//! public operations. The free functions at the bottom run the default
//! engine (Myers via `similar`).

use std::time::Instant;

use crate::core_types::schema::{
    FIELD_CONTEXT_LINES, FIELD_HUNK_COUNT, FIELD_LINES_ADDED, FIELD_LINES_REMOVED,
    FIELD_MODIFIED_LINES, FIELD_ORIGINAL_LINES, FIELD_ROW_COUNT, FIELD_RUN_COUNT,
};
use crate::diff::lines::line_tokens;
use crate::diff::model::{DiffStats, LineChange, SideBySideRow};
use crate::diff::sequence::{diff_lines, SequenceDiff, SimilarDiff};
use crate::diff::side_by_side::align;
use crate::diff::unified::{render, FinalNewlines, UnifiedDiffOptions};
use crate::errors::{ExError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// `op` field of line diff log events.
pub const OP_LINE_DIFF: &str = "line_diff";
/// `op` field of unified diff log events.
pub const OP_UNIFIED_DIFF: &str = "unified_diff";
/// `op` field of side-by-side log events.
pub const OP_SIDE_BY_SIDE: &str = "side_by_side";

/// Diff engine over a pluggable sequence-diff primitive.
///
/// Holds no per-call state; one engine may serve any number of calls, from
/// any number of threads.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine<D: SequenceDiff = SimilarDiff> {
    differ: D,
}

impl<D: SequenceDiff> DiffEngine<D> {
    pub fn new(differ: D) -> Self {
        Self { differ }
    }

    /// The primitive this engine calls.
    pub fn differ(&self) -> &D {
        &self.differ
    }

    /// Line-level run list for two documents.
    ///
    /// Two empty documents yield an empty list without calling the
    /// primitive.
    ///
    /// # Errors
    ///
    /// Propagates primitive failures (`ERR_EXTERNAL_SERVICE`) and
    /// inconsistent primitive output (`ERR_DETERMINISM_VIOLATION`).
    pub fn line_diff(&self, original: &str, modified: &str) -> Result<Vec<LineChange>> {
        if original.is_empty() && modified.is_empty() {
            return Ok(Vec::new());
        }
        let old = line_tokens(original);
        let new = line_tokens(modified);
        log_op_start!(
            OP_LINE_DIFF,
            { FIELD_ORIGINAL_LINES } = old.len(),
            { FIELD_MODIFIED_LINES } = new.len()
        );
        let start = Instant::now();

        let changes = diff_lines(&self.differ, &old, &new).map_err(|e| {
            let err = ExError::from(e).with_op(OP_LINE_DIFF);
            log_op_error!(
                OP_LINE_DIFF,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            err
        })?;

        let stats = DiffStats::from_changes(&changes);
        log_op_end!(
            OP_LINE_DIFF,
            duration_ms = start.elapsed().as_millis() as u64,
            { FIELD_RUN_COUNT } = changes.len(),
            { FIELD_LINES_ADDED } = stats.lines_added,
            { FIELD_LINES_REMOVED } = stats.lines_removed
        );
        Ok(changes)
    }

    /// Unified patch text for two documents.
    ///
    /// Two empty documents yield an empty string.
    ///
    /// # Errors
    ///
    /// See [`DiffEngine::line_diff`].
    pub fn unified_diff(
        &self,
        original: &str,
        modified: &str,
        options: &UnifiedDiffOptions,
    ) -> Result<String> {
        if original.is_empty() && modified.is_empty() {
            return Ok(String::new());
        }
        log_op_start!(OP_UNIFIED_DIFF, { FIELD_CONTEXT_LINES } = options.context_lines);
        let start = Instant::now();

        let changes = self.line_diff(original, modified).map_err(|err| {
            let err = err.with_op(OP_UNIFIED_DIFF);
            log_op_error!(
                OP_UNIFIED_DIFF,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            err
        })?;
        let finals = FinalNewlines::of(original, modified);
        let (patch, hunk_count) = render(&changes, options, finals);

        log_op_end!(
            OP_UNIFIED_DIFF,
            duration_ms = start.elapsed().as_millis() as u64,
            { FIELD_HUNK_COUNT } = hunk_count
        );
        Ok(patch)
    }

    /// Side-by-side rows for two documents.
    ///
    /// Two empty documents yield no rows.
    ///
    /// # Errors
    ///
    /// See [`DiffEngine::line_diff`]; word-level primitive calls fail the
    /// same way.
    pub fn side_by_side(&self, original: &str, modified: &str) -> Result<Vec<SideBySideRow>> {
        if original.is_empty() && modified.is_empty() {
            return Ok(Vec::new());
        }
        log_op_start!(OP_SIDE_BY_SIDE);
        let start = Instant::now();

        let rows = self
            .line_diff(original, modified)
            .and_then(|changes| align(&self.differ, &changes).map_err(ExError::from))
            .map_err(|err| {
                let err = err.with_op(OP_SIDE_BY_SIDE);
                log_op_error!(
                    OP_SIDE_BY_SIDE,
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                err
            })?;

        log_op_end!(
            OP_SIDE_BY_SIDE,
            duration_ms = start.elapsed().as_millis() as u64,
            { FIELD_ROW_COUNT } = rows.len()
        );
        Ok(rows)
    }
}

/// Line-level run list for two documents, using Myers' algorithm.
///
/// # Errors
///
/// Only fails if the primitive does; the default primitive never does.
pub fn compute_line_diff(original: &str, modified: &str) -> Result<Vec<LineChange>> {
    DiffEngine::<SimilarDiff>::default().line_diff(original, modified)
}

/// Unified patch with unlabelled headers and `context_lines` of context.
///
/// # Errors
///
/// See [`compute_line_diff`].
pub fn create_unified_diff(original: &str, modified: &str, context_lines: usize) -> Result<String> {
    create_unified_diff_with(
        original,
        modified,
        &UnifiedDiffOptions::with_context(context_lines),
    )
}

/// Unified patch with explicit labels and context size.
///
/// # Errors
///
/// See [`compute_line_diff`].
pub fn create_unified_diff_with(
    original: &str,
    modified: &str,
    options: &UnifiedDiffOptions,
) -> Result<String> {
    DiffEngine::<SimilarDiff>::default().unified_diff(original, modified, options)
}

/// Side-by-side rows for two documents, using Myers' algorithm.
///
/// # Errors
///
/// See [`compute_line_diff`].
pub fn compute_side_by_side_diff(original: &str, modified: &str) -> Result<Vec<SideBySideRow>> {
    DiffEngine::<SimilarDiff>::default().side_by_side(original, modified)
}
