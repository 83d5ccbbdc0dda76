//! Change records and aggregate summary types.

use serde::{Deserialize, Serialize};

/// A single classified line change.
///
/// The sequence order of changes matches the order in which they occur when
/// reading the aligned documents top to bottom; renderers rely on it for
/// inline and side-by-side views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Change {
    /// A line present only in the new document
    Added {
        /// The added line
        text: String,
    },

    /// A line present only in the old document
    Removed {
        /// The removed line
        text: String,
    },

    /// A line whose content changed between the documents
    Modified {
        /// The line as it appears in the old document
        old: String,
        /// The line as it appears in the new document
        new: String,
    },

    /// A line identical in both documents
    Unchanged {
        /// The common line
        text: String,
    },
}

impl Change {
    /// Get the kind of this change.
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Added { .. } => ChangeKind::Added,
            Change::Removed { .. } => ChangeKind::Removed,
            Change::Modified { .. } => ChangeKind::Modified,
            Change::Unchanged { .. } => ChangeKind::Unchanged,
        }
    }

    /// Check if this change is an addition.
    pub fn is_added(&self) -> bool {
        matches!(self, Change::Added { .. })
    }

    /// Check if this change is a removal.
    pub fn is_removed(&self) -> bool {
        matches!(self, Change::Removed { .. })
    }

    /// Check if this change is a modification.
    pub fn is_modified(&self) -> bool {
        matches!(self, Change::Modified { .. })
    }

    /// Check if this change is unchanged context.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Change::Unchanged { .. })
    }
}

/// The kind of a [`Change`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Line was added
    Added,
    /// Line was removed
    Removed,
    /// Line was modified
    Modified,
    /// Line is unchanged
    Unchanged,
}

/// Aggregate counts of a change sequence.
///
/// Unchanged lines are not counted. A summary is only ever derived from
/// an existing change sequence via [`Summary::from_changes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of added lines
    pub added: usize,

    /// Number of removed lines
    pub removed: usize,

    /// Number of modified lines
    pub modified: usize,
}

impl Summary {
    /// Derive a summary by counting a change sequence.
    pub fn from_changes(changes: &[Change]) -> Self {
        let mut summary = Summary::default();
        for change in changes {
            match change.kind() {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Removed => summary.removed += 1,
                ChangeKind::Modified => summary.modified += 1,
                ChangeKind::Unchanged => {}
            }
        }
        summary
    }

    /// Total number of counted (non-unchanged) changes.
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

/// Result of comparing two texts: the ordered change sequence plus its
/// summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Classified changes in reading order
    pub changes: Vec<Change>,

    /// Aggregate counts derived from `changes`
    pub summary: Summary,
}

impl DiffReport {
    /// Build a report from a change sequence, deriving the summary.
    pub fn new(changes: Vec<Change>) -> Self {
        let summary = Summary::from_changes(&changes);
        Self { changes, summary }
    }

    /// Check if the two texts differ at all.
    pub fn has_changes(&self) -> bool {
        self.summary.total() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_kind() {
        let change = Change::Modified {
            old: "a".to_string(),
            new: "b".to_string(),
        };
        assert_eq!(change.kind(), ChangeKind::Modified);
        assert!(change.is_modified());
        assert!(!change.is_added());
    }

    #[test]
    fn test_summary_from_changes() {
        let changes = vec![
            Change::Unchanged { text: "a".into() },
            Change::Added { text: "b".into() },
            Change::Added { text: "c".into() },
            Change::Removed { text: "d".into() },
            Change::Modified {
                old: "e".into(),
                new: "f".into(),
            },
        ];

        let summary = Summary::from_changes(&changes);
        assert_eq!(summary.added, 2);
        assert_eq!(summary.removed, 1);
        assert_eq!(summary.modified, 1);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_report_has_changes() {
        let report = DiffReport::new(vec![Change::Unchanged { text: "x".into() }]);
        assert!(!report.has_changes());

        let report = DiffReport::new(vec![Change::Added { text: "x".into() }]);
        assert!(report.has_changes());
    }

    #[test]
    fn test_change_serialization() {
        let change = Change::Modified {
            old: "before".to_string(),
            new: "after".to_string(),
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["kind"], "modified");
        assert_eq!(json["old"], "before");
        assert_eq!(json["new"], "after");

        let change = Change::Added {
            text: "line".to_string(),
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["kind"], "added");
        assert_eq!(json["text"], "line");
    }
}
