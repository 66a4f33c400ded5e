//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the emitting macros
//! and anything that reads the events back.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Input sizes
pub const FIELD_ORIGINAL_LINES: &str = "original_lines";
pub const FIELD_MODIFIED_LINES: &str = "modified_lines";
pub const FIELD_CONTEXT_LINES: &str = "context_lines";

// Output sizes
pub const FIELD_RUN_COUNT: &str = "run_count";
pub const FIELD_ROW_COUNT: &str = "row_count";
pub const FIELD_HUNK_COUNT: &str = "hunk_count";
pub const FIELD_LINES_ADDED: &str = "lines_added";
pub const FIELD_LINES_REMOVED: &str = "lines_removed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
