//! Line-level differencer.
//!
//! Lines are matched on a normalised key (case-folded and/or stripped of
//! whitespace) while the original text is carried through for display.

use std::mem::take;

use tracing::debug;

use crate::align::align_eq;
use crate::config::DiffOptions;
use crate::model::DiffLine;

/// Split text into logical lines.
///
/// `\r\n` is treated as `\n`. A trailing line break yields a final empty
/// line, and the empty string is a single empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n").split('\n').map(str::to_owned).collect()
}

/// The comparison key for a line under `options`.
pub fn comparison_key(line: &str, options: DiffOptions) -> String {
    let folded = if options.case_sensitive {
        line.to_owned()
    } else {
        line.to_lowercase()
    };
    if options.ignore_whitespace {
        folded.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        folded
    }
}

/// Diff two texts line by line.
///
/// Lines skipped before the next matched pair are reported left side first.
/// Once no pairs remain, each step emits the next left line as `Deleted`
/// and the next right line as `Inserted`. `Replaced` rows are never built
/// here; see [`crate::report::pair_replacements`].
pub fn diff_lines(a: &str, b: &str, options: DiffOptions) -> Vec<DiffLine> {
    let mut left = split_lines(a);
    let mut right = split_lines(b);
    let left_keys: Vec<String> = left.iter().map(|l| comparison_key(l, options)).collect();
    let right_keys: Vec<String> = right.iter().map(|l| comparison_key(l, options)).collect();

    let pairs = align_eq(&left_keys, &right_keys);
    debug!(
        left_lines = left.len(),
        right_lines = right.len(),
        matched = pairs.len(),
        "aligned lines"
    );

    let mut out = Vec::with_capacity(left.len().max(right.len()));
    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() || j < right.len() {
        match pairs.get(k) {
            Some(pair) if i < pair.left => {
                out.push(DiffLine::Deleted {
                    left: take(&mut left[i]),
                });
                i += 1;
            }
            Some(pair) if j < pair.right => {
                out.push(DiffLine::Inserted {
                    right: take(&mut right[j]),
                });
                j += 1;
            }
            Some(_) => {
                out.push(DiffLine::Equal {
                    left: take(&mut left[i]),
                    right: take(&mut right[j]),
                });
                i += 1;
                j += 1;
                k += 1;
            }
            None => {
                if i < left.len() {
                    out.push(DiffLine::Deleted {
                        left: take(&mut left[i]),
                    });
                    i += 1;
                }
                if j < right.len() {
                    out.push(DiffLine::Inserted {
                        right: take(&mut right[j]),
                    });
                    j += 1;
                }
            }
        }
    }
    out
}
