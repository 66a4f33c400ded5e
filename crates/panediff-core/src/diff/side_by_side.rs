//! Side-by-side alignment.
//!
//! Turns a line-level run list into display rows. A burst of removed lines
//! followed directly by added lines is paired index-for-index: removed line
//! `i` sits opposite added line `i`, and only the surplus of the longer side
//! is shown against an empty cell. Pairing is positional on purpose; rows do
//! not move to line up similar content.

use crate::diff::model::{ChangeKind, LineChange, SideBySideRow};
use crate::diff::sequence::{diff_words, SequenceDiff};
use crate::errors::DiffError;

/// Walk state for one alignment.
struct Aligner<'a, D: SequenceDiff + ?Sized> {
    differ: &'a D,
    left: usize,
    right: usize,
    pending_removed: Vec<&'a str>,
    rows: Vec<SideBySideRow>,
}

impl<'a, D: SequenceDiff + ?Sized> Aligner<'a, D> {
    fn new(differ: &'a D) -> Self {
        Self {
            differ,
            left: 1,
            right: 1,
            pending_removed: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn removed(&mut self, lines: Vec<&'a str>) {
        self.pending_removed.extend(lines);
    }

    fn added(&mut self, added: &[&str]) -> Result<(), DiffError> {
        let removed = std::mem::take(&mut self.pending_removed);
        let pair_count = removed.len().min(added.len());

        for (old_line, new_line) in removed.iter().zip(added.iter()) {
            let (left_spans, right_spans) = diff_words(self.differ, old_line, new_line)?;
            self.rows.push(SideBySideRow::paired(
                self.left,
                old_line,
                left_spans,
                self.right,
                new_line,
                right_spans,
            ));
            self.left += 1;
            self.right += 1;
        }
        for old_line in &removed[pair_count..] {
            self.rows.push(SideBySideRow::removed_only(self.left, old_line));
            self.left += 1;
        }
        for new_line in &added[pair_count..] {
            self.rows.push(SideBySideRow::added_only(self.right, new_line));
            self.right += 1;
        }
        Ok(())
    }

    fn kept(&mut self, lines: &[&str]) -> Result<(), DiffError> {
        self.flush()?;
        for line in lines {
            self.rows
                .push(SideBySideRow::unchanged(self.left, self.right, line));
            self.left += 1;
            self.right += 1;
        }
        Ok(())
    }

    /// Emit any removed lines still waiting for a partner.
    fn flush(&mut self) -> Result<(), DiffError> {
        if self.pending_removed.is_empty() {
            return Ok(());
        }
        self.added(&[])
    }

    fn finish(mut self) -> Result<Vec<SideBySideRow>, DiffError> {
        self.flush()?;
        Ok(self.rows)
    }
}

/// Align a run list into side-by-side rows.
///
/// `differ` is used once per paired row to compute word spans.
///
/// # Errors
///
/// Propagates failures of the word-level primitive call.
pub fn align<D: SequenceDiff + ?Sized>(
    differ: &D,
    changes: &[LineChange],
) -> Result<Vec<SideBySideRow>, DiffError> {
    let mut aligner = Aligner::new(differ);
    for change in changes {
        let lines = change.lines();
        match change.kind {
            ChangeKind::Removed => aligner.removed(lines),
            ChangeKind::Added => aligner.added(&lines)?,
            ChangeKind::Kept => aligner.kept(&lines)?,
        }
    }
    aligner.finish()
}
