//! Span formatting helpers for renderers.

use crate::diff::model::{InlineSpan, SideBySideRow, SpanKind};

/// Map spans to `(text, kind)` pairs.
///
/// Kinds come straight from the aligner; renderers should not re-derive
/// them from neighbouring spans.
pub fn spans_to_kind_text(spans: &[InlineSpan]) -> Vec<(&str, SpanKind)> {
    spans
        .iter()
        .map(|span| (span.text.as_str(), span.kind))
        .collect()
}

impl SideBySideRow {
    /// Left-side `(text, kind)` pairs, or `None` on rows without spans.
    pub fn left_kind_text(&self) -> Option<Vec<(&str, SpanKind)>> {
        self.left_spans.as_deref().map(spans_to_kind_text)
    }

    /// Right-side `(text, kind)` pairs, or `None` on rows without spans.
    pub fn right_kind_text(&self) -> Option<Vec<(&str, SpanKind)>> {
        self.right_spans.as_deref().map(spans_to_kind_text)
    }
}
