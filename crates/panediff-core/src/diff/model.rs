//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Values are built fresh for every diff call and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::diff::lines::split_lines;

/// Classification of a run produced by the sequence-diff primitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present in both documents
    Kept,
    /// Present only in the modified document
    Added,
    /// Present only in the original document
    Removed,
}

/// A maximal run of lines sharing one [`ChangeKind`].
///
/// `text` is the run's lines concatenated, each line keeping its own `\n`
/// terminator when the source line had one. Concatenating the `Kept` and
/// `Removed` texts in order gives back the original document; `Kept` and
/// `Added` give back the modified document. A kept line holds the
/// terminated form when only one side had a `\n`, so a document whose last
/// line lacks one can come back with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineChange {
    pub kind: ChangeKind,
    pub text: String,
}

impl LineChange {
    pub fn new(kind: ChangeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The run's individual lines, without terminators.
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.text)
    }

    /// Number of lines in the run.
    pub fn line_count(&self) -> usize {
        self.lines().len()
    }
}

/// Classification of a word-level span inside a paired row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Equal,
    Added,
    Removed,
}

/// A sub-line fragment of one side of a paired row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub kind: SpanKind,
}

impl InlineSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// State of the left (original) cell of a row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeftKind {
    Unchanged,
    Removed,
    Empty,
}

/// State of the right (modified) cell of a row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RightKind {
    Unchanged,
    Added,
    Empty,
}

/// Row-type tag derived from the two cell kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    /// Same line on both sides
    Unchanged,
    /// A removed line paired with an added line
    Modified,
    /// Removed line with nothing opposite
    Removed,
    /// Added line with nothing opposite
    Added,
}

/// One display row of a side-by-side alignment.
///
/// A line number is `None` exactly when its side is `Empty`. Spans are only
/// present on paired (`Modified`) rows, and then on both sides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SideBySideRow {
    pub left_line_number: Option<usize>,
    pub left_content: String,
    pub left_spans: Option<Vec<InlineSpan>>,
    pub left_kind: LeftKind,
    pub right_line_number: Option<usize>,
    pub right_content: String,
    pub right_spans: Option<Vec<InlineSpan>>,
    pub right_kind: RightKind,
}

impl SideBySideRow {
    pub(crate) fn unchanged(left: usize, right: usize, content: &str) -> Self {
        Self {
            left_line_number: Some(left),
            left_content: content.to_string(),
            left_spans: None,
            left_kind: LeftKind::Unchanged,
            right_line_number: Some(right),
            right_content: content.to_string(),
            right_spans: None,
            right_kind: RightKind::Unchanged,
        }
    }

    pub(crate) fn removed_only(left: usize, content: &str) -> Self {
        Self {
            left_line_number: Some(left),
            left_content: content.to_string(),
            left_spans: None,
            left_kind: LeftKind::Removed,
            right_line_number: None,
            right_content: String::new(),
            right_spans: None,
            right_kind: RightKind::Empty,
        }
    }

    pub(crate) fn added_only(right: usize, content: &str) -> Self {
        Self {
            left_line_number: None,
            left_content: String::new(),
            left_spans: None,
            left_kind: LeftKind::Empty,
            right_line_number: Some(right),
            right_content: content.to_string(),
            right_spans: None,
            right_kind: RightKind::Added,
        }
    }

    pub(crate) fn paired(
        left: usize,
        removed: &str,
        left_spans: Vec<InlineSpan>,
        right: usize,
        added: &str,
        right_spans: Vec<InlineSpan>,
    ) -> Self {
        Self {
            left_line_number: Some(left),
            left_content: removed.to_string(),
            left_spans: Some(left_spans),
            left_kind: LeftKind::Removed,
            right_line_number: Some(right),
            right_content: added.to_string(),
            right_spans: Some(right_spans),
            right_kind: RightKind::Added,
        }
    }

    /// The row-type tag.
    pub fn kind(&self) -> RowKind {
        match (self.left_kind, self.right_kind) {
            (LeftKind::Removed, RightKind::Added) => RowKind::Modified,
            (LeftKind::Removed, _) => RowKind::Removed,
            (_, RightKind::Added) => RowKind::Added,
            _ => RowKind::Unchanged,
        }
    }
}

/// Line counts summarising a line diff.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffStats {
    pub lines_added: usize,
    pub lines_removed: usize,
    pub lines_kept: usize,
}

impl DiffStats {
    pub fn from_changes(changes: &[LineChange]) -> Self {
        let mut stats = Self::default();
        for change in changes {
            let n = change.line_count();
            match change.kind {
                ChangeKind::Kept => stats.lines_kept += n,
                ChangeKind::Added => stats.lines_added += n,
                ChangeKind::Removed => stats.lines_removed += n,
            }
        }
        stats
    }

    /// True when the documents differ in at least one line.
    pub fn has_changes(&self) -> bool {
        self.lines_added > 0 || self.lines_removed > 0
    }
}
