//! Integration tests for the line diff classification.

use pdfdiff::{diff_lines, Change, Summary};

#[test]
fn diff_is_total_for_empty_inputs() {
    let report = diff_lines("", "");
    assert!(report.changes.is_empty());
    assert_eq!(report.summary, Summary::default());

    let report = diff_lines("", "only new");
    assert_eq!(report.summary.added, 1);

    let report = diff_lines("only old", "");
    assert_eq!(report.summary.removed, 1);
}

#[test]
fn identical_text_yields_only_unchanged() {
    let text = "first line\nsecond line\nthird line";
    let report = diff_lines(text, text);

    assert_eq!(report.changes.len(), 3);
    assert!(report.changes.iter().all(|c| c.is_unchanged()));
    assert_eq!(
        report.summary,
        Summary {
            added: 0,
            removed: 0,
            modified: 0,
        }
    );
}

#[test]
fn full_replacement_classifies_every_line() {
    let report = diff_lines("", "a\nb\nc");
    assert_eq!(report.changes.len(), 3);
    assert!(report.changes.iter().all(|c| c.is_added()));
    assert_eq!(report.summary.added, 3);

    let report = diff_lines("a\nb\nc", "");
    assert_eq!(report.changes.len(), 3);
    assert!(report.changes.iter().all(|c| c.is_removed()));
    assert_eq!(report.summary.removed, 3);
}

#[test]
fn pairs_adjacent_delete_and_insert_as_modified() {
    let report = diff_lines("A\nB", "A\nC");

    assert_eq!(
        report.changes,
        vec![
            Change::Unchanged { text: "A".into() },
            Change::Modified {
                old: "B".into(),
                new: "C".into(),
            },
        ]
    );
    assert_eq!(
        report.summary,
        Summary {
            added: 0,
            removed: 0,
            modified: 1,
        }
    );
}

#[test]
fn pairs_unequal_runs_positionally() {
    // Two deletions, one insertion: the first deletion pairs with the
    // insertion, the second stays a removal.
    let report = diff_lines("A\nB", "X");

    assert_eq!(
        report.changes,
        vec![
            Change::Modified {
                old: "A".into(),
                new: "X".into(),
            },
            Change::Removed { text: "B".into() },
        ]
    );
    assert_eq!(
        report.summary,
        Summary {
            added: 0,
            removed: 1,
            modified: 1,
        }
    );

    // Mirror case: one deletion, three insertions.
    let report = diff_lines("A", "X\nY\nZ");
    assert_eq!(
        report.changes,
        vec![
            Change::Modified {
                old: "A".into(),
                new: "X".into(),
            },
            Change::Added { text: "Y".into() },
            Change::Added { text: "Z".into() },
        ]
    );
}

#[test]
fn change_order_follows_reading_order() {
    let report = diff_lines("keep\ndrop\nkeep2\nold", "keep\nkeep2\nold2\nextra");

    // Reading order: unchanged, removal, unchanged, modification, addition.
    assert_eq!(
        report.changes,
        vec![
            Change::Unchanged {
                text: "keep".into()
            },
            Change::Removed {
                text: "drop".into()
            },
            Change::Unchanged {
                text: "keep2".into()
            },
            Change::Modified {
                old: "old".into(),
                new: "old2".into(),
            },
            Change::Added {
                text: "extra".into()
            },
        ]
    );
}

#[test]
fn summary_always_equals_kind_counts() {
    let cases = [
        ("", ""),
        ("a", "a"),
        ("a\nb\nc", "c\nb\na"),
        ("x\ny", "x\ny\nz"),
        ("one\ntwo\nthree", "uno\ndos"),
        ("a\nb\n", "a\nb"),
    ];

    for (old, new) in cases {
        let report = diff_lines(old, new);
        let added = report.changes.iter().filter(|c| c.is_added()).count();
        let removed = report.changes.iter().filter(|c| c.is_removed()).count();
        let modified = report.changes.iter().filter(|c| c.is_modified()).count();

        assert_eq!(report.summary.added, added, "case {:?}", (old, new));
        assert_eq!(report.summary.removed, removed, "case {:?}", (old, new));
        assert_eq!(report.summary.modified, modified, "case {:?}", (old, new));
    }
}

#[test]
fn unchanged_lines_are_kept_for_rendering() {
    let report = diff_lines("a\nb\nc", "a\nb\nx");

    // The full document is reproducible from the change sequence.
    let unchanged: Vec<_> = report.changes.iter().filter(|c| c.is_unchanged()).collect();
    assert_eq!(unchanged.len(), 2);
    assert_eq!(report.changes.len(), 3);
}
