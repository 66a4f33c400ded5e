//! Sequence diff adapter.
//!
//! The minimal-edit-distance computation itself sits behind the
//! [`SequenceDiff`] trait. [`SimilarDiff`] is the default implementation,
//! backed by the `similar` crate. Everything on top of the raw runs (cover
//! validation, coalescing, joining lines, building word spans) lives here so
//! that any primitive gets the same guarantees.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use similar::DiffTag;

use crate::diff::lines::{strip_terminator, word_tokens};
use crate::diff::model::{ChangeKind, InlineSpan, LineChange, SpanKind};
use crate::errors::DiffError;

/// One run returned by a [`SequenceDiff`] primitive.
///
/// `old` and `new` index into the two input sequences. A `Kept` run covers
/// equal-length ranges on both sides; a `Removed` run has an empty `new`
/// range at the point where it sits in the modified sequence, and an `Added`
/// run has an empty `old` range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRun {
    pub kind: ChangeKind,
    pub old: Range<usize>,
    pub new: Range<usize>,
}

impl DiffRun {
    pub fn kept(old: Range<usize>, new: Range<usize>) -> Self {
        Self {
            kind: ChangeKind::Kept,
            old,
            new,
        }
    }

    pub fn removed(old: Range<usize>, at_new: usize) -> Self {
        Self {
            kind: ChangeKind::Removed,
            old,
            new: at_new..at_new,
        }
    }

    pub fn added(at_old: usize, new: Range<usize>) -> Self {
        Self {
            kind: ChangeKind::Added,
            old: at_old..at_old,
            new,
        }
    }

    fn is_empty(&self) -> bool {
        self.old.is_empty() && self.new.is_empty()
    }
}

/// A minimal-edit-distance primitive over token sequences.
///
/// Tokens compare by exact string equality. Implementations return runs in
/// input order that together cover both sequences exactly once.
pub trait SequenceDiff: Send + Sync {
    /// Diff two token sequences.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::Primitive`] when the underlying algorithm is
    /// unavailable or fails. Callers propagate this unchanged.
    fn diff(&self, old: &[&str], new: &[&str]) -> Result<Vec<DiffRun>, DiffError>;
}

/// Algorithms offered by the `similar` crate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// Myers' O(ND) algorithm; produces a minimal edit script
    #[default]
    Myers,
    /// Patience diff; not guaranteed minimal
    Patience,
    /// Classic longest-common-subsequence table
    Lcs,
}

impl From<DiffAlgorithm> for similar::Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => similar::Algorithm::Myers,
            DiffAlgorithm::Patience => similar::Algorithm::Patience,
            DiffAlgorithm::Lcs => similar::Algorithm::Lcs,
        }
    }
}

/// [`SequenceDiff`] backed by `similar::capture_diff_slices`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimilarDiff {
    pub algorithm: DiffAlgorithm,
}

impl SimilarDiff {
    pub fn new(algorithm: DiffAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn myers() -> Self {
        Self::new(DiffAlgorithm::Myers)
    }
}

impl SequenceDiff for SimilarDiff {
    fn diff(&self, old: &[&str], new: &[&str]) -> Result<Vec<DiffRun>, DiffError> {
        let ops = similar::capture_diff_slices(self.algorithm.into(), old, new);
        let mut runs = Vec::with_capacity(ops.len());
        // Compaction can report a delete's position on the modified side (or
        // an insert's on the original side) ahead of where the walk is, so
        // the empty side of a run is anchored at the running cursor.
        let (mut o, mut n) = (0usize, 0usize);
        for op in ops {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => {
                    (o, n) = (old_range.end, new_range.end);
                    runs.push(DiffRun::kept(old_range, new_range));
                }
                DiffTag::Delete => {
                    o = old_range.end;
                    runs.push(DiffRun::removed(old_range, n));
                }
                DiffTag::Insert => {
                    n = new_range.end;
                    runs.push(DiffRun::added(o, new_range));
                }
                DiffTag::Replace => {
                    (o, n) = (old_range.end, new_range.end);
                    let new_start = new_range.start;
                    runs.push(DiffRun::removed(old_range, new_start));
                    runs.push(DiffRun::added(o, new_range));
                }
            }
        }
        Ok(runs)
    }
}

/// Run the primitive and return validated, coalesced runs.
///
/// # Errors
///
/// Propagates primitive failures. Returns [`DiffError::InconsistentRuns`] or
/// [`DiffError::KeptMismatch`] when the returned runs do not describe the
/// two inputs exactly.
pub fn diff_runs<D: SequenceDiff + ?Sized>(
    differ: &D,
    old: &[&str],
    new: &[&str],
) -> Result<Vec<DiffRun>, DiffError> {
    let raw = differ.diff(old, new)?;
    validate_cover(&raw, old, new)?;
    Ok(coalesce(raw))
}

/// Check that `runs` walk both sequences front to back with no gap or overlap.
fn validate_cover(runs: &[DiffRun], old: &[&str], new: &[&str]) -> Result<(), DiffError> {
    let (mut o, mut n) = (0usize, 0usize);
    for run in runs {
        if run.old.start != o || run.old.end < run.old.start || run.old.end > old.len() {
            return Err(DiffError::InconsistentRuns {
                side: "original".to_string(),
                expected: o,
                covered: run.old.start,
            });
        }
        if run.new.start != n || run.new.end < run.new.start || run.new.end > new.len() {
            return Err(DiffError::InconsistentRuns {
                side: "modified".to_string(),
                expected: n,
                covered: run.new.start,
            });
        }
        match run.kind {
            ChangeKind::Kept => {
                if run.old.len() != run.new.len() {
                    return Err(DiffError::KeptMismatch {
                        old_index: run.old.start,
                        new_index: run.new.start,
                    });
                }
                for (i, j) in run.old.clone().zip(run.new.clone()) {
                    if old[i] != new[j] {
                        return Err(DiffError::KeptMismatch {
                            old_index: i,
                            new_index: j,
                        });
                    }
                }
            }
            ChangeKind::Removed if !run.new.is_empty() => {
                return Err(DiffError::InconsistentRuns {
                    side: "modified".to_string(),
                    expected: run.new.start,
                    covered: run.new.end,
                });
            }
            ChangeKind::Added if !run.old.is_empty() => {
                return Err(DiffError::InconsistentRuns {
                    side: "original".to_string(),
                    expected: run.old.start,
                    covered: run.old.end,
                });
            }
            _ => {}
        }
        o = run.old.end;
        n = run.new.end;
    }
    if o != old.len() {
        return Err(DiffError::InconsistentRuns {
            side: "original".to_string(),
            expected: old.len(),
            covered: o,
        });
    }
    if n != new.len() {
        return Err(DiffError::InconsistentRuns {
            side: "modified".to_string(),
            expected: new.len(),
            covered: n,
        });
    }
    Ok(())
}

/// Drop empty runs and merge neighbours of the same kind.
///
/// Every change block between two kept runs comes out as at most one
/// removed run followed by at most one added run, whatever order the
/// primitive interleaved them in.
fn coalesce(runs: Vec<DiffRun>) -> Vec<DiffRun> {
    let mut out: Vec<DiffRun> = Vec::with_capacity(runs.len());
    let mut block: Option<(Range<usize>, Range<usize>)> = None;
    for run in runs.into_iter().filter(|r| !r.is_empty()) {
        if run.kind != ChangeKind::Kept {
            let (old, new) = block.get_or_insert_with(|| {
                (run.old.start..run.old.start, run.new.start..run.new.start)
            });
            old.end = run.old.end;
            new.end = run.new.end;
            continue;
        }
        flush_block(&mut out, block.take());
        match out.last_mut() {
            Some(last) if last.kind == ChangeKind::Kept => {
                last.old.end = run.old.end;
                last.new.end = run.new.end;
            }
            _ => out.push(run),
        }
    }
    flush_block(&mut out, block);
    out
}

fn flush_block(out: &mut Vec<DiffRun>, block: Option<(Range<usize>, Range<usize>)>) {
    let Some((old, new)) = block else {
        return;
    };
    if !old.is_empty() {
        out.push(DiffRun::removed(old.clone(), new.start));
    }
    if !new.is_empty() {
        out.push(DiffRun::added(old.end, new));
    }
}

/// Diff two line-token sequences into [`LineChange`] runs.
///
/// Tokens carry their line terminators (see
/// [`line_tokens`](crate::diff::lines::line_tokens)) but are compared
/// without them, so a last line lacking `\n` still matches the same line
/// with one. Each run's `text` is rebuilt from the tokens; a kept line takes
/// whichever side's token is terminated.
///
/// # Errors
///
/// See [`diff_runs`].
pub fn diff_lines<D: SequenceDiff + ?Sized>(
    differ: &D,
    old: &[&str],
    new: &[&str],
) -> Result<Vec<LineChange>, DiffError> {
    let old_keys: Vec<&str> = old.iter().map(|token| strip_terminator(token)).collect();
    let new_keys: Vec<&str> = new.iter().map(|token| strip_terminator(token)).collect();
    let runs = diff_runs(differ, &old_keys, &new_keys)?;
    Ok(runs
        .into_iter()
        .map(|run| {
            let text = match run.kind {
                ChangeKind::Kept => run
                    .old
                    .zip(run.new)
                    .map(|(i, j)| if old[i].ends_with('\n') { old[i] } else { new[j] })
                    .collect(),
                ChangeKind::Removed => old[run.old].concat(),
                ChangeKind::Added => new[run.new].concat(),
            };
            LineChange::new(run.kind, text)
        })
        .collect())
}

/// Word-level spans for a removed line paired with an added line.
///
/// One primitive call yields both span lists: kept words go to both sides as
/// `Equal`, removed words only to the left, added words only to the right.
///
/// # Errors
///
/// See [`diff_runs`].
pub fn diff_words<D: SequenceDiff + ?Sized>(
    differ: &D,
    old_line: &str,
    new_line: &str,
) -> Result<(Vec<InlineSpan>, Vec<InlineSpan>), DiffError> {
    let old = word_tokens(old_line);
    let new = word_tokens(new_line);
    let runs = diff_runs(differ, &old, &new)?;

    let mut left = Vec::new();
    let mut right = Vec::new();
    for run in runs {
        match run.kind {
            ChangeKind::Kept => {
                let text = old[run.old].concat();
                push_span(&mut left, &text, SpanKind::Equal);
                push_span(&mut right, &text, SpanKind::Equal);
            }
            ChangeKind::Removed => push_span(&mut left, &old[run.old].concat(), SpanKind::Removed),
            ChangeKind::Added => push_span(&mut right, &new[run.new].concat(), SpanKind::Added),
        }
    }
    Ok((left, right))
}

fn push_span(spans: &mut Vec<InlineSpan>, text: &str, kind: SpanKind) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.kind == kind => last.text.push_str(text),
        _ => spans.push(InlineSpan::new(text, kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_runs_cover_inputs() {
        let old = ["a", "b", "c"];
        let new = ["a", "x", "c", "d"];
        let runs = diff_runs(&SimilarDiff::myers(), &old, &new).unwrap();
        let kinds: Vec<ChangeKind> = runs.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::Kept,
                ChangeKind::Removed,
                ChangeKind::Added,
                ChangeKind::Kept,
                ChangeKind::Added
            ]
        );
    }

    #[test]
    fn test_identical_sequences_are_one_kept_run() {
        let seq = ["a", "b", "c"];
        let runs = diff_runs(&SimilarDiff::myers(), &seq, &seq).unwrap();
        assert_eq!(runs, vec![DiffRun::kept(0..3, 0..3)]);
    }

    #[test]
    fn test_coalesce_merges_neighbours() {
        let runs = vec![
            DiffRun::removed(0..1, 0),
            DiffRun::removed(1..3, 0),
            DiffRun::kept(3..3, 0..0),
            DiffRun::added(3, 0..2),
        ];
        assert_eq!(
            coalesce(runs),
            vec![DiffRun::removed(0..3, 0), DiffRun::added(3, 0..2)]
        );
    }

    #[test]
    fn test_coalesce_puts_removed_before_added() {
        let runs = vec![
            DiffRun::kept(0..1, 0..1),
            DiffRun::added(1, 1..2),
            DiffRun::removed(1..2, 2),
            DiffRun::added(2, 2..3),
            DiffRun::kept(2..3, 3..4),
        ];
        assert_eq!(
            coalesce(runs),
            vec![
                DiffRun::kept(0..1, 0..1),
                DiffRun::removed(1..2, 1),
                DiffRun::added(2, 1..3),
                DiffRun::kept(2..3, 3..4),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_gap() {
        let runs = vec![DiffRun::kept(0..1, 0..1), DiffRun::kept(2..3, 1..2)];
        let err = validate_cover(&runs, &["a", "b", "c"], &["a", "c"]).unwrap_err();
        assert!(matches!(err, DiffError::InconsistentRuns { .. }));
    }

    #[test]
    fn test_validate_rejects_short_cover() {
        let runs = vec![DiffRun::kept(0..1, 0..1)];
        let err = validate_cover(&runs, &["a", "b"], &["a"]).unwrap_err();
        assert_eq!(
            err,
            DiffError::InconsistentRuns {
                side: "original".to_string(),
                expected: 2,
                covered: 1,
            }
        );
    }

    #[test]
    fn test_validate_rejects_kept_mismatch() {
        let runs = vec![DiffRun::kept(0..1, 0..1)];
        let err = validate_cover(&runs, &["a"], &["b"]).unwrap_err();
        assert_eq!(
            err,
            DiffError::KeptMismatch {
                old_index: 0,
                new_index: 0
            }
        );
    }

    #[test]
    fn test_diff_lines_joins_tokens() {
        let old = ["a\n", "b\n"];
        let new = ["a\n", "c\n", "d\n"];
        let changes = diff_lines(&SimilarDiff::myers(), &old, &new).unwrap();
        assert_eq!(
            changes,
            vec![
                LineChange::new(ChangeKind::Kept, "a\n"),
                LineChange::new(ChangeKind::Removed, "b\n"),
                LineChange::new(ChangeKind::Added, "c\nd\n"),
            ]
        );
    }

    #[test]
    fn test_diff_lines_ignores_final_terminator() {
        let old = ["a\n", "b"];
        let new = ["a\n", "b\n", "c"];
        let changes = diff_lines(&SimilarDiff::myers(), &old, &new).unwrap();
        assert_eq!(
            changes,
            vec![
                LineChange::new(ChangeKind::Kept, "a\nb\n"),
                LineChange::new(ChangeKind::Added, "c"),
            ]
        );
    }

    #[test]
    fn test_compacted_delete_is_anchored_at_cursor() {
        let old = ["b", "", " ", ""];
        let new = [" ", " ", "a", "a", " "];
        let raw = SimilarDiff::myers().diff(&old, &new).unwrap();
        validate_cover(&raw, &old, &new).unwrap();
        let runs = diff_runs(&SimilarDiff::myers(), &old, &new).unwrap();
        let kept: usize = runs
            .iter()
            .filter(|r| r.kind == ChangeKind::Kept)
            .map(|r| r.old.len())
            .sum();
        assert_eq!(kept, 1);
    }

    #[test]
    fn test_diff_words_single_pass_both_sides() {
        let (left, right) = diff_words(&SimilarDiff::myers(), "hello world", "hello there").unwrap();
        assert_eq!(
            left,
            vec![
                InlineSpan::new("hello ", SpanKind::Equal),
                InlineSpan::new("world", SpanKind::Removed),
            ]
        );
        assert_eq!(
            right,
            vec![
                InlineSpan::new("hello ", SpanKind::Equal),
                InlineSpan::new("there", SpanKind::Added),
            ]
        );
    }

    #[test]
    fn test_diff_words_empty_side() {
        let (left, right) = diff_words(&SimilarDiff::myers(), "", "new words").unwrap();
        assert!(left.is_empty());
        assert_eq!(right, vec![InlineSpan::new("new words", SpanKind::Added)]);
    }

    #[test]
    fn test_algorithms_agree_on_simple_input() {
        let old = ["a", "b", "c"];
        let new = ["a", "c"];
        for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
            let runs = diff_runs(&SimilarDiff::new(algorithm), &old, &new).unwrap();
            let removed: usize = runs
                .iter()
                .filter(|r| r.kind == ChangeKind::Removed)
                .map(|r| r.old.len())
                .sum();
            assert_eq!(removed, 1, "algorithm {:?}", algorithm);
        }
    }
}
