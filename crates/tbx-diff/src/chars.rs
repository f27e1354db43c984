//! Character-level differencer.

use crate::align::{align_eq, spans, Span};
use crate::model::{DiffSegment, SegmentKind};

/// Diff two strings code point by code point.
///
/// Each gap between anchors yields its deletions before its insertions, and
/// consecutive segments of the same kind are merged into one run.
pub fn diff_chars(a: &str, b: &str) -> Vec<DiffSegment> {
    let left: Vec<char> = a.chars().collect();
    let right: Vec<char> = b.chars().collect();
    let pairs = align_eq(&left, &right);

    let mut out = Vec::with_capacity(left.len().max(right.len()));
    for span in spans(&pairs, left.len(), right.len()) {
        match span {
            Span::Matched(pair) => out.push((SegmentKind::Equal, left[pair.left])),
            Span::Unmatched { left: l, right: r } => {
                out.extend(left[l].iter().map(|&c| (SegmentKind::Deleted, c)));
                out.extend(right[r].iter().map(|&c| (SegmentKind::Inserted, c)));
            }
        }
    }
    merge_runs(out)
}

/// Collapse consecutive same-kind characters into single segments.
fn merge_runs(chars: Vec<(SegmentKind, char)>) -> Vec<DiffSegment> {
    let mut merged: Vec<DiffSegment> = Vec::new();
    for (kind, c) in chars {
        match merged.last_mut() {
            Some(last) if last.kind == kind => last.text.push(c),
            _ => merged.push(DiffSegment::new(kind, c.to_string())),
        }
    }
    merged
}
