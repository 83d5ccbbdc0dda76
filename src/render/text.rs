//! Plain text rendering for diff reports.

use crate::diff::{Change, DiffReport};

/// Render a diff report as an inline text view.
///
/// Unchanged lines are prefixed with two spaces, additions with `+ ` and
/// removals with `- `. A modified line renders as its removed/added pair;
/// the classification itself is preserved in the JSON form.
pub fn to_text(report: &DiffReport) -> String {
    let mut lines = Vec::with_capacity(report.changes.len());

    for change in &report.changes {
        match change {
            Change::Unchanged { text } => lines.push(format!("  {}", text)),
            Change::Added { text } => lines.push(format!("+ {}", text)),
            Change::Removed { text } => lines.push(format!("- {}", text)),
            Change::Modified { old, new } => {
                lines.push(format!("- {}", old));
                lines.push(format!("+ {}", new));
            }
        }
    }

    lines.join("\n")
}

/// Render a diff report as a two-column side-by-side view.
///
/// The old document fills the left column and the new document the right;
/// an added line leaves the left cell blank, a removed line the right one.
/// The gutter marker shows the classification (` `, `+`, `-`, `~`).
/// `width` is the character width of each column.
pub fn to_text_side_by_side(report: &DiffReport, width: usize) -> String {
    let mut rows = Vec::with_capacity(report.changes.len());

    for change in &report.changes {
        let (left, marker, right) = match change {
            Change::Unchanged { text } => (text.as_str(), ' ', text.as_str()),
            Change::Added { text } => ("", '+', text.as_str()),
            Change::Removed { text } => (text.as_str(), '-', ""),
            Change::Modified { old, new } => (old.as_str(), '~', new.as_str()),
        };
        rows.push(format!(
            "{} {} {}",
            clip(left, width),
            marker,
            clip(right, width)
        ));
    }

    rows.join("\n")
}

/// Pad or truncate a line to exactly `width` display characters.
fn clip(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count <= width {
        let mut out = s.to_string();
        out.extend(std::iter::repeat(' ').take(width - count));
        out
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_lines;

    #[test]
    fn test_inline_view() {
        let report = diff_lines("a\nb\nc", "a\nx\nc\nd");
        let text = to_text(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["  a", "- b", "+ x", "  c", "+ d"]);
    }

    #[test]
    fn test_side_by_side_markers() {
        let report = diff_lines("a\nb", "a\nc\nd");
        let text = to_text_side_by_side(&report, 8);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("a"));
        assert!(lines[1].contains('~'));
        // Added row leaves the left cell blank.
        assert!(lines[2].trim_start().starts_with('+'));
    }

    #[test]
    fn test_clip_pads_and_truncates() {
        assert_eq!(clip("ab", 4), "ab  ");
        assert_eq!(clip("abcdef", 4), "abc…");
    }
}
