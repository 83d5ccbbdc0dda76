//! JSON rendering for diff reports.

use crate::diff::DiffReport;
use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed, human readable
    #[default]
    Pretty,
    /// Compact single-line output
    Compact,
}

/// Serialize a diff report to JSON.
///
/// Every change carries its `kind` plus the relevant text payloads
/// (`old`/`new` for modified, `text` otherwise); the summary serializes as
/// three non-negative counts.
pub fn to_json(report: &DiffReport, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };
    result.map_err(|e| Error::Render(e.to_string()))
}
