//! Diff report and navigator.
//!
//! A [`DiffReport`] is built once per comparison and never edited; the only
//! mutable part is the navigation cursor.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::model::{DiffLine, LineKind, Stats};

/// The full result of a line-level comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    lines: Vec<DiffLine>,
    stats: Stats,
    current: Option<usize>,
}

/// Direction of a navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Next,
    Prev,
}

/// A row together with its 1-based line numbers on each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberedLine<'r> {
    pub left_no: Option<usize>,
    pub right_no: Option<usize>,
    pub line: &'r DiffLine,
}

/// Aggregate line-level results into a report with statistics.
pub fn build_report(lines: Vec<DiffLine>) -> DiffReport {
    let mut stats = Stats::default();
    for line in &lines {
        match line.kind() {
            LineKind::Equal => {}
            LineKind::Deleted => stats.deleted += 1,
            LineKind::Inserted => stats.inserted += 1,
            LineKind::Replaced => stats.replaced += 1,
        }
    }
    DiffReport {
        lines,
        stats,
        current: None,
    }
}

impl DiffReport {
    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// The navigation cursor, if any line has been visited.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns `true` if every row is `Equal`.
    pub fn is_identical(&self) -> bool {
        self.stats.is_empty()
    }

    /// Indices of all non-`Equal` rows, in order.
    pub fn change_indices(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| !l.is_equal())
            .map(|(i, _)| i)
            .collect()
    }

    /// Index ranges of maximal runs of non-`Equal` rows.
    pub fn hunks(&self) -> Vec<Range<usize>> {
        let mut hunks = Vec::new();
        let mut start = None;
        for (i, line) in self.lines.iter().enumerate() {
            match (start, line.is_equal()) {
                (None, false) => start = Some(i),
                (Some(s), true) => {
                    hunks.push(s..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            hunks.push(s..self.lines.len());
        }
        hunks
    }

    /// Rows paired with their line numbers on the left and right input.
    pub fn numbered(&self) -> Vec<NumberedLine<'_>> {
        let (mut left_no, mut right_no) = (0, 0);
        self.lines
            .iter()
            .map(|line| {
                let left = line.left().map(|_| {
                    left_no += 1;
                    left_no
                });
                let right = line.right().map(|_| {
                    right_no += 1;
                    right_no
                });
                NumberedLine {
                    left_no: left,
                    right_no: right,
                    line,
                }
            })
            .collect()
    }
}

/// Pair up the deletions and insertions of every hunk into `Replaced` rows.
///
/// The line differencer never does this on its own. A host calls it when it
/// wants inline word-level detail: the i-th deleted line of a hunk is paired
/// with its i-th inserted line, and surplus lines keep their kind. Stats are
/// recomputed and the cursor is cleared.
pub fn pair_replacements(report: DiffReport) -> DiffReport {
    let mut out = Vec::with_capacity(report.lines.len());
    let mut old: Vec<String> = Vec::new();
    let mut new: Vec<String> = Vec::new();

    for line in report.lines {
        match line {
            DiffLine::Equal { .. } => {
                flush_hunk(&mut out, &mut old, &mut new);
                out.push(line);
            }
            DiffLine::Deleted { left } => old.push(left),
            DiffLine::Inserted { right } => new.push(right),
            DiffLine::Replaced { left, right } => {
                old.push(left);
                new.push(right);
            }
        }
    }
    flush_hunk(&mut out, &mut old, &mut new);
    build_report(out)
}

fn flush_hunk(out: &mut Vec<DiffLine>, old: &mut Vec<String>, new: &mut Vec<String>) {
    let mut old = old.drain(..);
    let mut new = new.drain(..);
    loop {
        match (old.next(), new.next()) {
            (Some(left), Some(right)) => out.push(DiffLine::Replaced { left, right }),
            (Some(left), None) => out.push(DiffLine::Deleted { left }),
            (None, Some(right)) => out.push(DiffLine::Inserted { right }),
            (None, None) => break,
        }
    }
}

/// Move the cursor to the next or previous non-`Equal` row, wrapping around
/// at either end. Returns `None` and leaves the cursor alone when nothing
/// differs.
pub fn navigate(report: &mut DiffReport, direction: Direction) -> Option<usize> {
    let targets = report.change_indices();
    step(report, &targets, direction)
}

/// Like [`navigate`], but stops only on the first row of each hunk.
pub fn navigate_hunk(report: &mut DiffReport, direction: Direction) -> Option<usize> {
    let targets: Vec<usize> = report.hunks().into_iter().map(|h| h.start).collect();
    step(report, &targets, direction)
}

fn step(report: &mut DiffReport, targets: &[usize], direction: Direction) -> Option<usize> {
    let (first, last) = (*targets.first()?, *targets.last()?);
    let next = match (direction, report.current) {
        (Direction::Next, None) => first,
        (Direction::Prev, None) => last,
        (Direction::Next, Some(cur)) => targets.iter().copied().find(|&i| i > cur).unwrap_or(first),
        (Direction::Prev, Some(cur)) => targets
            .iter()
            .rev()
            .copied()
            .find(|&i| i < cur)
            .unwrap_or(last),
    };
    report.current = Some(next);
    Some(next)
}
