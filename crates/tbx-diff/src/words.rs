//! Word-level differencer.
//!
//! Text is split into maximal runs of whitespace and non-whitespace, so
//! spacing survives as its own comparable token. Words left unmatched on
//! both sides at the same step are refined character by character.

use crate::align::{align_eq, spans, Span};
use crate::chars::diff_chars;
use crate::model::DiffSegment;

/// Split `s` into alternating whitespace and non-whitespace runs.
///
/// Concatenating the tokens yields `s` again.
pub fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (i, c) in s.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                tokens.push(&s[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < s.len() {
        tokens.push(&s[start..]);
    }
    tokens
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Diff two strings word by word.
///
/// Unmatched tokens are consumed pairwise inside each gap. A pair of words
/// is delegated to [`diff_chars`] and its segments come back flagged as
/// modified; any other pair is a plain deletion followed by an insertion.
/// Surplus tokens on one side are pure deletions or insertions.
pub fn diff_words(a: &str, b: &str) -> Vec<DiffSegment> {
    let left = tokenize(a);
    let right = tokenize(b);
    let pairs = align_eq(&left, &right);

    let mut out = Vec::with_capacity(left.len().max(right.len()));
    for span in spans(&pairs, left.len(), right.len()) {
        match span {
            Span::Matched(pair) => out.push(DiffSegment::equal(left[pair.left])),
            Span::Unmatched { left: l, right: r } => {
                let mut old = left[l].iter();
                let mut new = right[r].iter();
                loop {
                    match (old.next(), new.next()) {
                        (Some(x), Some(y)) if is_word(x) && is_word(y) => {
                            out.extend(diff_chars(x, y).into_iter().map(DiffSegment::modified));
                        }
                        (Some(x), Some(y)) => {
                            out.push(DiffSegment::deleted(*x));
                            out.push(DiffSegment::inserted(*y));
                        }
                        (Some(x), None) => out.push(DiffSegment::deleted(*x)),
                        (None, Some(y)) => out.push(DiffSegment::inserted(*y)),
                        (None, None) => break,
                    }
                }
            }
        }
    }
    out
}
