//! Operation logging macros
//!
//! `line_diff`, `unified_diff` and `side_by_side` each emit one `start` event
//! and then exactly one of `end` or `end_error`. All three carry `component`,
//! `op` and `event`; the rest of the layout, keyed by the
//! [`schema`](crate::core_types::schema) constants:
//!
//! | event | fields |
//! |---|---|
//! | `start` | `original_lines`, `modified_lines` (line diff), `context_lines` (unified) |
//! | `end` | `duration_ms`, then `run_count`/`lines_added`/`lines_removed`, `hunk_count` or `row_count` |
//! | `end_error` | `duration_ms`, `err_kind`, `err_code` |

/// Emit the `start` event of a diff operation.
///
/// Extra fields follow `tracing` syntax; a braced constant names the field
/// by its value.
///
/// # Example
///
/// ```
/// # use panediff_core::log_op_start;
/// use panediff_core::core_types::schema::FIELD_ORIGINAL_LINES;
/// log_op_start!("line_diff");
/// log_op_start!("line_diff", { FIELD_ORIGINAL_LINES } = 3usize);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Emit the `end` event with the elapsed milliseconds and any output sizes.
///
/// # Example
///
/// ```
/// # use panediff_core::log_op_end;
/// use panediff_core::core_types::schema::FIELD_ROW_COUNT;
/// log_op_end!("side_by_side", duration_ms = 2u64);
/// log_op_end!("side_by_side", duration_ms = 2u64, { FIELD_ROW_COUNT } = 10usize);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            { $crate::core_types::schema::FIELD_DURATION_MS } = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            { $crate::core_types::schema::FIELD_DURATION_MS } = $duration,
            $($field)*
        );
    };
}

/// Emit the `end_error` event for a failed diff operation.
///
/// The error goes through `ExError`, so a raw `DiffError` from the sequence
/// primitive is logged with the kind and code the caller will see.
///
/// # Example
///
/// ```
/// # use panediff_core::{log_op_error, errors::DiffError};
/// let err = DiffError::primitive("unavailable");
/// log_op_error!("line_diff", err, duration_ms = 0u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            { $crate::core_types::schema::FIELD_DURATION_MS } = $duration,
            { $crate::core_types::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::core_types::schema::FIELD_ERR_CODE } = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            { $crate::core_types::schema::FIELD_DURATION_MS } = $duration,
            { $crate::core_types::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::core_types::schema::FIELD_ERR_CODE } = ex_err.code(),
            $($field)*
        );
    }};
}
