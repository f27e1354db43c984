//! Terminal rendering of diff reports and segment lists.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use tbx_diff::model::project;
use tbx_diff::unified::{serialize_line, DELETED_PREFIX, INSERTED_PREFIX};
use tbx_diff::{Column, DiffLine, DiffReport, DiffSegment, SegmentKind, Stats};

fn paint(segment: &DiffSegment) -> ColoredString {
    let text = segment.text.as_str();
    match (segment.kind, segment.is_modified) {
        (SegmentKind::Equal, _) => text.normal(),
        (SegmentKind::Deleted, false) => text.red(),
        (SegmentKind::Deleted, true) => text.red().underline(),
        (SegmentKind::Inserted, false) => text.green(),
        (SegmentKind::Inserted, true) => text.green().underline(),
    }
}

/// One column of a segment list, painted, plus its visible width.
fn paint_column(segments: &[DiffSegment], column: Column) -> (String, usize) {
    let mut painted = String::new();
    let mut width = 0;
    for segment in project(segments, column) {
        painted.push_str(&paint(segment).to_string());
        width += segment.text.chars().count();
    }
    (painted, width)
}

/// Segments for one cell; each side shows its own original text.
fn cell_segments(line: &DiffLine, column: Column) -> Vec<DiffSegment> {
    match (line, column) {
        (DiffLine::Inserted { .. }, Column::Left) | (DiffLine::Deleted { .. }, Column::Right) => {
            Vec::new()
        }
        (DiffLine::Equal { left, .. }, Column::Left) => vec![DiffSegment::equal(left.as_str())],
        _ => line.inline_segments(),
    }
}

fn gutter(number: Option<usize>) -> String {
    match number {
        Some(n) => format!("{n:>4}"),
        None => "    ".to_string(),
    }
}

/// Two columns, left input on the left, with line numbers per side.
pub fn side_by_side<W: Write>(out: &mut W, report: &DiffReport, width: usize) -> io::Result<()> {
    for row in report.numbered() {
        let (left, left_width) = paint_column(&cell_segments(row.line, Column::Left), Column::Left);
        let (right, _) = paint_column(&cell_segments(row.line, Column::Right), Column::Right);
        let marker = match row.line {
            DiffLine::Equal { .. } => " ".normal(),
            DiffLine::Deleted { .. } => "<".red(),
            DiffLine::Inserted { .. } => ">".green(),
            DiffLine::Replaced { .. } => "|".yellow(),
        };
        let pad = " ".repeat(width.saturating_sub(left_width));
        writeln!(
            out,
            "{} {left}{pad} {marker} {} {right}",
            gutter(row.left_no).dimmed(),
            gutter(row.right_no).dimmed(),
        )?;
    }
    Ok(())
}

/// Prefixed rows, one per line; replaced rows carry word highlights.
pub fn unified<W: Write>(out: &mut W, report: &DiffReport) -> io::Result<()> {
    for line in report.lines() {
        match line {
            DiffLine::Equal { .. } => writeln!(out, "{}", serialize_line(line))?,
            DiffLine::Deleted { .. } => writeln!(out, "{}", serialize_line(line).red())?,
            DiffLine::Inserted { .. } => writeln!(out, "{}", serialize_line(line).green())?,
            DiffLine::Replaced { .. } => segments(out, &line.inline_segments())?,
        }
    }
    Ok(())
}

/// A segment list shown as a deletion row and an insertion row.
pub fn segments<W: Write>(out: &mut W, segments: &[DiffSegment]) -> io::Result<()> {
    let (left, _) = paint_column(segments, Column::Left);
    let (right, _) = paint_column(segments, Column::Right);
    writeln!(out, "{}{left}", DELETED_PREFIX.red())?;
    writeln!(out, "{}{right}", INSERTED_PREFIX.green())
}

pub fn summary<W: Write>(out: &mut W, stats: Stats) -> io::Result<()> {
    if stats.is_empty() {
        return writeln!(out, "{}", "No differences.".green());
    }
    writeln!(
        out,
        "{} inserted, {} deleted, {} replaced",
        stats.inserted.to_string().green().bold(),
        stats.deleted.to_string().red().bold(),
        stats.replaced.to_string().yellow().bold(),
    )
}
