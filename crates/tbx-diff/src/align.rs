//! Sequence aligner: longest common subsequence over arbitrary tokens.
//!
//! [`align`] is the single alignment routine shared by the character, word
//! and line differencers. It never looks at token content beyond the
//! equality predicate it is given.
//!
//! # Invariants
//!
//! - Returned pairs are strictly increasing in both components.
//! - The pair count equals the LCS length under the given predicate.
//! - Ties during backtracking advance the left index first, so deletions
//!   are reported before insertions when both orders are equally long.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A matched position: `left` in the first sequence, `right` in the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlignmentPair {
    pub left: usize,
    pub right: usize,
}

impl AlignmentPair {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

/// Compute one longest common subsequence of `a` and `b` under `eq`.
///
/// Runs in O(|a|·|b|) time and space. Callers exposed to user input must
/// bound the sequence lengths themselves.
pub fn align<T, F>(a: &[T], b: &[T], eq: F) -> Vec<AlignmentPair>
where
    F: Fn(&T, &T) -> bool,
{
    let (m, n) = (a.len(), b.len());
    if m == 0 || n == 0 {
        return Vec::new();
    }

    // Row-major (m+1) x (n+1) table; dp[i][j] is the LCS length of a[i..], b[j..].
    let width = n + 1;
    let mut dp = vec![0usize; (m + 1) * width];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            dp[i * width + j] = if eq(&a[i], &b[j]) {
                dp[(i + 1) * width + j + 1] + 1
            } else {
                dp[(i + 1) * width + j].max(dp[i * width + j + 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(dp[0]);
    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        if eq(&a[i], &b[j]) {
            pairs.push(AlignmentPair::new(i, j));
            i += 1;
            j += 1;
        } else if dp[(i + 1) * width + j] >= dp[i * width + j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}

/// [`align`] with the token type's own equality.
pub fn align_eq<T: PartialEq>(a: &[T], b: &[T]) -> Vec<AlignmentPair> {
    align(a, b, |x, y| x == y)
}

/// A stretch of the combined walk over both sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    /// Two equal tokens anchored by an alignment pair.
    Matched(AlignmentPair),
    /// Indices consumed outside any pair, between two anchors.
    /// At least one of the ranges is non-empty.
    Unmatched {
        left: Range<usize>,
        right: Range<usize>,
    },
}

/// Split the walk over sequences of length `left_len` and `right_len` into
/// matched anchors and the unmatched gaps around them, in emission order.
pub fn spans(pairs: &[AlignmentPair], left_len: usize, right_len: usize) -> Vec<Span> {
    let mut out = Vec::with_capacity(pairs.len() * 2 + 1);
    let (mut i, mut j) = (0, 0);

    for pair in pairs {
        if i < pair.left || j < pair.right {
            out.push(Span::Unmatched {
                left: i..pair.left,
                right: j..pair.right,
            });
        }
        out.push(Span::Matched(*pair));
        i = pair.left + 1;
        j = pair.right + 1;
    }

    if i < left_len || j < right_len {
        out.push(Span::Unmatched {
            left: i..left_len,
            right: j..right_len,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_sequences_have_no_pairs() {
        let empty: Vec<char> = Vec::new();
        assert!(align_eq(&empty, &empty).is_empty());
        assert!(align_eq(&chars("abc"), &empty).is_empty());
        assert!(align_eq(&empty, &chars("abc")).is_empty());
    }

    #[test]
    fn identical_sequences_align_fully() {
        let a = chars("hello");
        let pairs = align_eq(&a, &a);
        let expected: Vec<_> = (0..5).map(|i| AlignmentPair::new(i, i)).collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn classic_lcs_length() {
        let pairs = align_eq(&chars("ABCBDAB"), &chars("BDCABA"));
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn swap_prefers_advancing_left() {
        // Both [X] and [Y] are longest; the left-first tie-break keeps Y.
        let pairs = align_eq(&["X", "Y"], &["Y", "X"]);
        assert_eq!(pairs, vec![AlignmentPair::new(1, 0)]);
    }

    #[test]
    fn custom_predicate_is_respected() {
        let a = ["Foo", "BAR"];
        let b = ["foo", "bar"];
        assert!(align_eq(&a, &b).is_empty());
        let pairs = align(&a, &b, |x, y| x.eq_ignore_ascii_case(y));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn spans_cover_gaps_between_anchors() {
        let a = chars("xaby");
        let b = chars("azb");
        let pairs = align_eq(&a, &b);
        assert_eq!(
            spans(&pairs, a.len(), b.len()),
            vec![
                Span::Unmatched { left: 0..1, right: 0..0 },
                Span::Matched(AlignmentPair::new(1, 0)),
                Span::Unmatched { left: 2..2, right: 1..2 },
                Span::Matched(AlignmentPair::new(2, 2)),
                Span::Unmatched { left: 3..4, right: 3..3 },
            ]
        );
    }

    #[test]
    fn spans_of_disjoint_sequences_is_one_gap() {
        assert_eq!(
            spans(&[], 2, 3),
            vec![Span::Unmatched { left: 0..2, right: 0..3 }]
        );
        assert!(spans(&[], 0, 0).is_empty());
    }

    proptest! {
        #[test]
        fn pairs_are_monotonic_and_equal(
            a in proptest::collection::vec(0u8..4, 0..24),
            b in proptest::collection::vec(0u8..4, 0..24),
        ) {
            let pairs = align_eq(&a, &b);
            for w in pairs.windows(2) {
                prop_assert!(w[0].left < w[1].left);
                prop_assert!(w[0].right < w[1].right);
            }
            for p in &pairs {
                prop_assert_eq!(a[p.left], b[p.right]);
            }
        }

        #[test]
        fn lcs_length_is_symmetric(
            a in proptest::collection::vec(0u8..4, 0..20),
            b in proptest::collection::vec(0u8..4, 0..20),
        ) {
            prop_assert_eq!(align_eq(&a, &b).len(), align_eq(&b, &a).len());
        }

        #[test]
        fn spans_visit_every_index_once(
            a in proptest::collection::vec(0u8..3, 0..16),
            b in proptest::collection::vec(0u8..3, 0..16),
        ) {
            let pairs = align_eq(&a, &b);
            let (mut left, mut right) = (0, 0);
            for span in spans(&pairs, a.len(), b.len()) {
                match span {
                    Span::Matched(p) => {
                        prop_assert_eq!((p.left, p.right), (left, right));
                        left += 1;
                        right += 1;
                    }
                    Span::Unmatched { left: l, right: r } => {
                        prop_assert_eq!((l.start, r.start), (left, right));
                        left = l.end;
                        right = r.end;
                    }
                }
            }
            prop_assert_eq!((left, right), (a.len(), b.len()));
        }
    }
}
