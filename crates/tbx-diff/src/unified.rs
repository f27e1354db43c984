//! Plain-text rendering of a report with a two-character prefix per row.

use crate::model::DiffLine;
use crate::report::DiffReport;

pub const EQUAL_PREFIX: &str = "  ";
pub const DELETED_PREFIX: &str = "- ";
pub const INSERTED_PREFIX: &str = "+ ";

/// The prefixed text of one row.
///
/// Equal rows show the right-hand text. A `Replaced` row becomes a deletion
/// row followed by an insertion row, separated by `\n`.
pub fn serialize_line(line: &DiffLine) -> String {
    match line {
        DiffLine::Equal { right, .. } => format!("{EQUAL_PREFIX}{right}"),
        DiffLine::Deleted { left } => format!("{DELETED_PREFIX}{left}"),
        DiffLine::Inserted { right } => format!("{INSERTED_PREFIX}{right}"),
        DiffLine::Replaced { left, right } => {
            format!("{DELETED_PREFIX}{left}\n{INSERTED_PREFIX}{right}")
        }
    }
}

/// Serialise a report as prefixed rows joined by `\n`.
pub fn serialize_unified(report: &DiffReport) -> String {
    report
        .lines()
        .iter()
        .map(serialize_line)
        .collect::<Vec<_>>()
        .join("\n")
}
