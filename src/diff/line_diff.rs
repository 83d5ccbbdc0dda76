//! Line diff computation using the similar crate.

use similar::{ChangeTag, TextDiff};

use super::change::{Change, DiffReport};

/// Compare two texts line by line and classify every line.
///
/// Total for any pair of strings, including empty ones. The edit script
/// comes from an LCS line diff; a run of deletions immediately followed by
/// a run of insertions is reduced to positional [`Change::Modified`] pairs
/// (first deletion with first insertion, and so on), with the excess of the
/// longer run kept as plain [`Change::Removed`] or [`Change::Added`].
pub fn diff_lines(old_text: &str, new_text: &str) -> DiffReport {
    let text_diff = TextDiff::from_lines(old_text, new_text);

    // Flatten the edit script into (tag, line) pairs, dropping the line
    // terminator so records carry bare line content.
    let script: Vec<(ChangeTag, String)> = text_diff
        .iter_all_changes()
        .map(|change| {
            let line = change
                .value()
                .trim_end_matches('\n')
                .trim_end_matches('\r')
                .to_string();
            (change.tag(), line)
        })
        .collect();

    let mut changes = Vec::with_capacity(script.len());
    let mut index = 0;

    while index < script.len() {
        match script[index].0 {
            ChangeTag::Equal => {
                changes.push(Change::Unchanged {
                    text: script[index].1.clone(),
                });
                index += 1;
            }
            ChangeTag::Insert => {
                // An insertion with no preceding deletion run.
                changes.push(Change::Added {
                    text: script[index].1.clone(),
                });
                index += 1;
            }
            ChangeTag::Delete => {
                let delete_start = index;
                while index < script.len() && script[index].0 == ChangeTag::Delete {
                    index += 1;
                }
                let insert_start = index;
                while index < script.len() && script[index].0 == ChangeTag::Insert {
                    index += 1;
                }

                let deleted = &script[delete_start..insert_start];
                let inserted = &script[insert_start..index];
                let paired = deleted.len().min(inserted.len());

                for i in 0..paired {
                    changes.push(Change::Modified {
                        old: deleted[i].1.clone(),
                        new: inserted[i].1.clone(),
                    });
                }
                for (_, line) in &deleted[paired..] {
                    changes.push(Change::Removed { text: line.clone() });
                }
                for (_, line) in &inserted[paired..] {
                    changes.push(Change::Added { text: line.clone() });
                }
            }
        }
    }

    DiffReport::new(changes)
}
