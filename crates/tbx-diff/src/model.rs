//! Output model shared by the differencers and the report.
//!
//! Everything here owns its text; nothing borrows from the compared inputs.

use serde::{Deserialize, Serialize};

use crate::words::diff_words;

/// Classification of a segment inside a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Equal,
    Deleted,
    Inserted,
}

/// A run of text with a single classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: SegmentKind,
    pub text: String,
    /// Set when the segment comes from refining an edited word, as opposed
    /// to a word that was added or removed wholesale.
    #[serde(default)]
    pub is_modified: bool,
}

impl DiffSegment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            is_modified: false,
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Equal, text)
    }

    pub fn deleted(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Deleted, text)
    }

    pub fn inserted(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Inserted, text)
    }

    /// Mark this segment as part of an intra-word refinement.
    pub fn modified(mut self) -> Self {
        self.is_modified = true;
        self
    }
}

/// One side of a two-column rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Left,
    Right,
}

impl Column {
    /// Whether a segment of `kind` is visible in this column.
    pub fn shows(self, kind: SegmentKind) -> bool {
        match (self, kind) {
            (_, SegmentKind::Equal) => true,
            (Column::Left, SegmentKind::Deleted) => true,
            (Column::Right, SegmentKind::Inserted) => true,
            _ => false,
        }
    }
}

/// The segments visible in `column`: the left drops insertions, the right
/// drops deletions.
pub fn project(segments: &[DiffSegment], column: Column) -> impl Iterator<Item = &DiffSegment> {
    segments.iter().filter(move |s| column.shows(s.kind))
}

/// Reassemble the text of one side from a segment list.
pub fn reconstruct(segments: &[DiffSegment], column: Column) -> String {
    project(segments, column).map(|s| s.text.as_str()).collect()
}

/// Classification of a row in a line-level diff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Equal,
    Deleted,
    Inserted,
    Replaced,
}

/// A single row of a line-level diff.
///
/// Text is always the original line, never the normalised comparison key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffLine {
    /// Lines that compare equal. Under case or whitespace folding the two
    /// sides may still differ textually.
    Equal { left: String, right: String },
    /// A line only present on the left.
    Deleted { left: String },
    /// A line only present on the right.
    Inserted { right: String },
    /// An unmatched left line shown side by side with an unmatched right line.
    Replaced { left: String, right: String },
}

impl DiffLine {
    pub fn kind(&self) -> LineKind {
        match self {
            DiffLine::Equal { .. } => LineKind::Equal,
            DiffLine::Deleted { .. } => LineKind::Deleted,
            DiffLine::Inserted { .. } => LineKind::Inserted,
            DiffLine::Replaced { .. } => LineKind::Replaced,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, DiffLine::Equal { .. })
    }

    /// The left-hand text, if this row has one.
    pub fn left(&self) -> Option<&str> {
        match self {
            DiffLine::Equal { left, .. }
            | DiffLine::Deleted { left }
            | DiffLine::Replaced { left, .. } => Some(left),
            DiffLine::Inserted { .. } => None,
        }
    }

    /// The right-hand text, if this row has one.
    pub fn right(&self) -> Option<&str> {
        match self {
            DiffLine::Equal { right, .. }
            | DiffLine::Inserted { right }
            | DiffLine::Replaced { right, .. } => Some(right),
            DiffLine::Deleted { .. } => None,
        }
    }

    /// Segment breakdown for inline highlighting.
    ///
    /// Only `Replaced` rows are refined; the word differencer runs on demand
    /// here rather than during the line diff.
    pub fn inline_segments(&self) -> Vec<DiffSegment> {
        match self {
            DiffLine::Equal { right, .. } => vec![DiffSegment::equal(right.as_str())],
            DiffLine::Deleted { left } => vec![DiffSegment::deleted(left.as_str())],
            DiffLine::Inserted { right } => vec![DiffSegment::inserted(right.as_str())],
            DiffLine::Replaced { left, right } => diff_words(left, right),
        }
    }
}

/// Per-kind line counts of a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub inserted: usize,
    pub deleted: usize,
    pub replaced: usize,
}

impl Stats {
    /// Returns `true` if no line differs.
    pub fn is_empty(&self) -> bool {
        self.inserted == 0 && self.deleted == 0 && self.replaced == 0
    }

    /// Total number of non-equal lines.
    pub fn changes(&self) -> usize {
        self.inserted + self.deleted + self.replaced
    }
}
