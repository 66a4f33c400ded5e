//! Unified patch renderer.

use serde::{Deserialize, Serialize};

use crate::diff::lines::{line_tokens, strip_terminator};
use crate::diff::model::{ChangeKind, LineChange};

/// Default number of unchanged lines shown around each change.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Marker emitted after a line that has no trailing newline.
pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Rendering options for [`create_unified_diff_with`](crate::diff::create_unified_diff_with).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnifiedDiffOptions {
    /// Unchanged lines kept before the first and after the last change of a hunk
    pub context_lines: usize,
    /// Label on the `---` header line
    pub original_label: String,
    /// Label on the `+++` header line
    pub modified_label: String,
}

impl Default for UnifiedDiffOptions {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            original_label: String::new(),
            modified_label: String::new(),
        }
    }
}

impl UnifiedDiffOptions {
    pub fn with_context(context_lines: usize) -> Self {
        Self {
            context_lines,
            ..Self::default()
        }
    }

    pub fn with_labels(mut self, original: impl Into<String>, modified: impl Into<String>) -> Self {
        self.original_label = original.into();
        self.modified_label = modified.into();
        self
    }
}

/// Whether each document ends with `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FinalNewlines {
    pub original: bool,
    pub modified: bool,
}

impl FinalNewlines {
    pub(crate) fn of(original: &str, modified: &str) -> Self {
        Self {
            original: original.ends_with('\n'),
            modified: modified.ends_with('\n'),
        }
    }
}

/// One physical line of the patch body, terminator stripped.
struct PatchLine<'a> {
    kind: ChangeKind,
    text: &'a str,
    terminated: bool,
}

/// Flatten the run list into patch lines.
///
/// A kept line whose terminator differs between the documents (only possible
/// on a last line) cannot be a context line, so it is emitted as a removed
/// and an added line. Each change block is ordered removed-then-added.
fn patch_lines<'a>(changes: &'a [LineChange], finals: FinalNewlines) -> Vec<PatchLine<'a>> {
    let count = |kind: ChangeKind| -> usize {
        changes
            .iter()
            .filter(|c| c.kind == kind)
            .map(LineChange::line_count)
            .sum()
    };
    let kept = count(ChangeKind::Kept);
    let old_total = kept + count(ChangeKind::Removed);
    let new_total = kept + count(ChangeKind::Added);

    let mut lines = Vec::new();
    let mut pending_added = Vec::new();
    let (mut o, mut n) = (0usize, 0usize);
    for change in changes {
        for token in line_tokens(&change.text) {
            let text = strip_terminator(token);
            let old_terminated = o + 1 < old_total || finals.original;
            let new_terminated = n + 1 < new_total || finals.modified;
            match change.kind {
                ChangeKind::Kept if old_terminated == new_terminated => {
                    lines.append(&mut pending_added);
                    lines.push(PatchLine {
                        kind: ChangeKind::Kept,
                        text,
                        terminated: new_terminated,
                    });
                    o += 1;
                    n += 1;
                }
                ChangeKind::Kept => {
                    lines.push(PatchLine {
                        kind: ChangeKind::Removed,
                        text,
                        terminated: old_terminated,
                    });
                    pending_added.push(PatchLine {
                        kind: ChangeKind::Added,
                        text,
                        terminated: new_terminated,
                    });
                    o += 1;
                    n += 1;
                }
                ChangeKind::Removed => {
                    lines.push(PatchLine {
                        kind: ChangeKind::Removed,
                        text,
                        terminated: old_terminated,
                    });
                    o += 1;
                }
                ChangeKind::Added => {
                    pending_added.push(PatchLine {
                        kind: ChangeKind::Added,
                        text,
                        terminated: new_terminated,
                    });
                    n += 1;
                }
            }
        }
    }
    lines.append(&mut pending_added);
    lines
}

/// Half-open range of `PatchLine` indices rendered as one hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HunkRange {
    start: usize,
    end: usize,
}

/// Group change positions into hunks.
///
/// Two changes share a hunk when at most `2 * context` unchanged lines
/// separate them, so their context windows touch or overlap.
fn hunk_ranges(lines: &[PatchLine<'_>], context: usize) -> Vec<HunkRange> {
    let mut ranges: Vec<HunkRange> = Vec::new();
    let mut last_change: Option<usize> = None;

    for (idx, line) in lines.iter().enumerate() {
        if line.kind == ChangeKind::Kept {
            continue;
        }
        let end = (idx + 1 + context).min(lines.len());
        let joins_previous = matches!(last_change, Some(prev) if idx - prev - 1 <= 2 * context);
        match ranges.last_mut() {
            Some(range) if joins_previous => range.end = end,
            _ => ranges.push(HunkRange {
                start: idx.saturating_sub(context),
                end,
            }),
        }
        last_change = Some(idx);
    }
    ranges
}

/// Render a run list as a unified patch.
///
/// Returns the patch text and the number of hunks. Documents with no changes
/// render as the two header lines only.
pub(crate) fn render(
    changes: &[LineChange],
    options: &UnifiedDiffOptions,
    finals: FinalNewlines,
) -> (String, usize) {
    let lines = patch_lines(changes, finals);

    // old_before[i] / new_before[i]: lines of each document preceding index i
    let mut old_before = Vec::with_capacity(lines.len() + 1);
    let mut new_before = Vec::with_capacity(lines.len() + 1);
    let (mut o, mut n) = (0usize, 0usize);
    for line in &lines {
        old_before.push(o);
        new_before.push(n);
        match line.kind {
            ChangeKind::Kept => {
                o += 1;
                n += 1;
            }
            ChangeKind::Removed => o += 1,
            ChangeKind::Added => n += 1,
        }
    }
    old_before.push(o);
    new_before.push(n);

    let mut out = String::new();
    out.push_str(&format!("--- {}\n", options.original_label));
    out.push_str(&format!("+++ {}\n", options.modified_label));

    let ranges = hunk_ranges(&lines, options.context_lines);
    for range in &ranges {
        let old_len = old_before[range.end] - old_before[range.start];
        let new_len = new_before[range.end] - new_before[range.start];
        let old_start = old_before[range.start] + usize::from(old_len > 0);
        let new_start = new_before[range.start] + usize::from(new_len > 0);
        out.push_str(&format!(
            "@@ -{},{} +{},{} @@\n",
            old_start, old_len, new_start, new_len
        ));

        for line in &lines[range.start..range.end] {
            let prefix = match line.kind {
                ChangeKind::Kept => ' ',
                ChangeKind::Removed => '-',
                ChangeKind::Added => '+',
            };
            out.push(prefix);
            out.push_str(line.text);
            out.push('\n');
            if !line.terminated {
                out.push_str(NO_NEWLINE_MARKER);
                out.push('\n');
            }
        }
    }

    (out, ranges.len())
}
