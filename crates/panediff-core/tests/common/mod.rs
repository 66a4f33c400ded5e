use panediff_core::diff::lines::line_tokens;
use panediff_core::diff::{DiffRun, SequenceDiff, SimilarDiff};
use panediff_core::errors::DiffError;
use panediff_core::split_lines;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Apply a unified patch produced by `create_unified_diff` to `original`.
///
/// Context and removed lines are checked against the original; a mismatch
/// panics, which fails the calling test.
#[allow(dead_code)]
pub fn apply_unified_patch(original: &str, patch: &str) -> String {
    if patch.is_empty() {
        return original.to_string();
    }
    let source = line_tokens(original);
    let mut cursor = 0usize;
    let mut out = String::new();
    let mut last_prefix: Option<char> = None;

    let lines = split_lines(patch);
    assert!(lines.len() >= 2, "patch is missing its header");
    assert!(lines[0].starts_with("---") && lines[1].starts_with("+++"));

    for line in lines.into_iter().skip(2) {
        if let Some(header) = line.strip_prefix("@@ -") {
            let old_part = header.split(' ').next().unwrap();
            let mut nums = old_part.split(',');
            let old_start: usize = nums.next().unwrap().parse().unwrap();
            let old_len: usize = nums.next().unwrap().parse().unwrap();
            let copy_until = if old_len == 0 { old_start } else { old_start - 1 };
            while cursor < copy_until {
                out.push_str(source[cursor]);
                cursor += 1;
            }
            last_prefix = None;
            continue;
        }
        if line.starts_with('\\') {
            if matches!(last_prefix, Some(' ') | Some('+')) {
                assert_eq!(out.pop(), Some('\n'));
            }
            continue;
        }
        let (prefix, content) = line.split_at(1);
        let prefix = prefix.chars().next().unwrap();
        match prefix {
            ' ' | '-' => {
                let expected = source[cursor].strip_suffix('\n').unwrap_or(source[cursor]);
                assert_eq!(expected, content, "patch does not match original");
                cursor += 1;
                if prefix == ' ' {
                    out.push_str(content);
                    out.push('\n');
                }
            }
            '+' => {
                out.push_str(content);
                out.push('\n');
            }
            other => panic!("unexpected patch line prefix {:?}", other),
        }
        last_prefix = Some(prefix);
    }

    while cursor < source.len() {
        out.push_str(source[cursor]);
        cursor += 1;
    }
    out
}

/// Primitive that always fails, standing in for an unavailable library.
#[allow(dead_code)]
pub struct FailingDiff;

impl SequenceDiff for FailingDiff {
    fn diff(&self, _old: &[&str], _new: &[&str]) -> Result<Vec<DiffRun>, DiffError> {
        Err(DiffError::primitive("diff library not loaded"))
    }
}

/// Primitive whose runs stop one token short of the original sequence.
#[allow(dead_code)]
pub struct TruncatingDiff;

impl SequenceDiff for TruncatingDiff {
    fn diff(&self, old: &[&str], new: &[&str]) -> Result<Vec<DiffRun>, DiffError> {
        let old_end = old.len().saturating_sub(1);
        Ok(vec![
            DiffRun::removed(0..old_end, 0),
            DiffRun::added(old_end, 0..new.len()),
        ])
    }
}

/// Primitive that replaces everything: valid but far from minimal.
#[allow(dead_code)]
pub struct ReplaceAllDiff;

impl SequenceDiff for ReplaceAllDiff {
    fn diff(&self, old: &[&str], new: &[&str]) -> Result<Vec<DiffRun>, DiffError> {
        Ok(vec![
            DiffRun::removed(0..old.len(), 0),
            DiffRun::added(old.len(), 0..new.len()),
        ])
    }
}

/// Myers primitive that counts how often it is called.
#[allow(dead_code)]
#[derive(Default)]
pub struct CountingDiff {
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingDiff {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SequenceDiff for CountingDiff {
    fn diff(&self, old: &[&str], new: &[&str]) -> Result<Vec<DiffRun>, DiffError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        SimilarDiff::myers().diff(old, new)
    }
}
