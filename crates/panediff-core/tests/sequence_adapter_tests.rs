//! Behaviour at the sequence-diff boundary: failing, inconsistent and
//! alternative primitives.

mod common;

use common::{apply_unified_patch, FailingDiff, ReplaceAllDiff, TruncatingDiff};
use panediff_core::diff::{
    ChangeKind, DiffAlgorithm, DiffEngine, InlineSpan, LineChange, RowKind, SimilarDiff, SpanKind,
};
use panediff_core::{
    compute_line_diff, compute_side_by_side_diff, create_unified_diff, split_lines, DiffError,
    ExErrorKind, UnifiedDiffOptions,
};

#[test]
fn test_failing_primitive_fails_every_operation() {
    let engine = DiffEngine::new(FailingDiff);
    let options = UnifiedDiffOptions::default();

    let err = engine.line_diff("a\n", "b\n").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ExternalService);
    assert_eq!(err.code(), "ERR_EXTERNAL_SERVICE");
    assert_eq!(err.op(), Some("line_diff"));

    let err = engine.unified_diff("a\n", "b\n", &options).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ExternalService);
    assert_eq!(err.op(), Some("unified_diff"));

    let err = engine.side_by_side("a\n", "b\n").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ExternalService);
    assert_eq!(err.op(), Some("side_by_side"));
    assert_eq!(
        err.source_error(),
        Some(&DiffError::primitive("diff library not loaded"))
    );
}

#[test]
fn test_failing_primitive_is_not_called_for_empty_inputs() {
    let engine = DiffEngine::new(FailingDiff);
    assert!(engine.line_diff("", "").unwrap().is_empty());
    assert_eq!(
        engine
            .unified_diff("", "", &UnifiedDiffOptions::default())
            .unwrap(),
        ""
    );
    assert!(engine.side_by_side("", "").unwrap().is_empty());
}

#[test]
fn test_inconsistent_runs_are_rejected() {
    let engine = DiffEngine::new(TruncatingDiff);
    let err = engine.line_diff("a\nb\n", "c\n").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::DeterminismViolation);
    assert!(matches!(
        err.source_error(),
        Some(DiffError::InconsistentRuns { .. })
    ));

    let err = engine.side_by_side("a\nb\n", "c\n").unwrap_err();
    assert_eq!(err.code(), "ERR_DETERMINISM_VIOLATION");
}

#[test]
fn test_replace_all_primitive_is_accepted() {
    let engine = DiffEngine::new(ReplaceAllDiff);
    let changes = engine.line_diff("a\nb\n", "a\nc\n").unwrap();
    assert_eq!(
        changes,
        vec![
            LineChange::new(ChangeKind::Removed, "a\nb\n"),
            LineChange::new(ChangeKind::Added, "a\nc\n"),
        ]
    );

    let patch = engine
        .unified_diff("a\nb\n", "a\nc\n", &UnifiedDiffOptions::default())
        .unwrap();
    assert_eq!(patch, "--- \n+++ \n@@ -1,2 +1,2 @@\n-a\n-b\n+a\n+c\n");
}

#[test]
fn test_replace_all_primitive_pairs_every_line() {
    let engine = DiffEngine::new(ReplaceAllDiff);
    let rows = engine.side_by_side("a\nb\n", "a\nc\n").unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.kind() == RowKind::Modified));
    assert_eq!(
        rows[0].left_spans,
        Some(vec![InlineSpan::new("a", SpanKind::Removed)])
    );
    assert_eq!(
        rows[0].right_spans,
        Some(vec![InlineSpan::new("a", SpanKind::Added)])
    );
}

#[test]
fn test_alternative_algorithms_reconstruct_both_documents() {
    let original = "fn a() {}\n\nfn b() {}\n\nfn c() {}\n";
    let modified = "fn a() {}\n\nfn c() {}\n\nfn b() {}\n";
    for algorithm in [
        DiffAlgorithm::Myers,
        DiffAlgorithm::Patience,
        DiffAlgorithm::Lcs,
    ] {
        let engine = DiffEngine::new(SimilarDiff::new(algorithm));
        let changes = engine.line_diff(original, modified).unwrap();
        let old: String = changes
            .iter()
            .filter(|c| c.kind != ChangeKind::Added)
            .map(|c| c.text.as_str())
            .collect();
        let new: String = changes
            .iter()
            .filter(|c| c.kind != ChangeKind::Removed)
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(old, original, "{:?}", algorithm);
        assert_eq!(new, modified, "{:?}", algorithm);
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = DiffEngine::<SimilarDiff>::default();
    std::thread::scope(|scope| {
        for i in 0..4 {
            let engine = &engine;
            scope.spawn(move || {
                let original = format!("shared\nline {}\n", i);
                let rows = engine.side_by_side(&original, "shared\n").unwrap();
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[1].kind(), RowKind::Removed);
            });
        }
    });
}

// Myers compaction moves the two-line delete below the kept blank line; the
// delete still reports its position on the modified side.
#[test]
fn test_compacted_delete_before_kept_line() {
    let original = "b\n\n \n\n";
    let modified = " \n \na\na\n \n";

    let changes = compute_line_diff(original, modified).unwrap();
    let old: String = changes
        .iter()
        .filter(|c| c.kind != ChangeKind::Added)
        .map(|c| c.text.as_str())
        .collect();
    let new: String = changes
        .iter()
        .filter(|c| c.kind != ChangeKind::Removed)
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(old, original);
    assert_eq!(new, modified);

    let rows = compute_side_by_side_diff(original, modified).unwrap();
    let left: Vec<&str> = rows
        .iter()
        .filter(|r| r.left_line_number.is_some())
        .map(|r| r.left_content.as_str())
        .collect();
    let right: Vec<&str> = rows
        .iter()
        .filter(|r| r.right_line_number.is_some())
        .map(|r| r.right_content.as_str())
        .collect();
    assert_eq!(left, split_lines(original));
    assert_eq!(right, split_lines(modified));

    for context in 0..4 {
        let patch = create_unified_diff(original, modified, context).unwrap();
        assert_eq!(apply_unified_patch(original, &patch), modified);
    }
}

#[test]
fn test_compacted_runs_with_every_algorithm() {
    let original = "b\n\n \n\n";
    let modified = " \n \na\na\n \n";
    for algorithm in [
        DiffAlgorithm::Myers,
        DiffAlgorithm::Patience,
        DiffAlgorithm::Lcs,
    ] {
        let engine = DiffEngine::new(SimilarDiff::new(algorithm));
        let changes = engine.line_diff(original, modified).unwrap();
        assert!(!changes.is_empty(), "{:?}", algorithm);
        engine.side_by_side(original, modified).unwrap();
    }
}
