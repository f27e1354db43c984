//! Multi-granularity text diff engine for the toolbox.
//!
//! Two texts are aligned line by line; unmatched line pairs can be refined
//! word by word, and unmatched word pairs character by character. All three
//! levels share one LCS aligner.
//!
//! # Key Types
//!
//! - [`AlignmentPair`] -- A matched `(left, right)` position from [`align`]
//! - [`DiffSegment`] -- A classified run of text inside a line
//! - [`DiffLine`] -- One row of a line diff (equal/deleted/inserted/replaced)
//! - [`DiffReport`] -- Rows, [`Stats`] and a navigation cursor
//! - [`DiffConfig`] -- Matching options plus the input size ceiling

pub mod align;
pub mod chars;
pub mod config;
pub mod error;
pub mod lines;
pub mod model;
pub mod report;
pub mod unified;
pub mod words;

use tracing::{debug, warn};

pub use align::{align, align_eq, AlignmentPair};
pub use chars::diff_chars;
pub use config::{DiffConfig, DiffLimits, DiffOptions};
pub use error::{DiffError, DiffResult};
pub use lines::diff_lines;
pub use model::{reconstruct, Column, DiffLine, DiffSegment, LineKind, SegmentKind, Stats};
pub use report::{
    build_report, navigate, navigate_hunk, pair_replacements, DiffReport, Direction, NumberedLine,
};
pub use unified::serialize_unified;
pub use words::diff_words;

/// Compare two texts and build a report.
///
/// Total over all inputs; the caller is responsible for bounding their size.
pub fn diff(left: &str, right: &str, options: DiffOptions) -> DiffReport {
    let report = build_report(diff_lines(left, right, options));
    let stats = report.stats();
    debug!(
        rows = report.len(),
        inserted = stats.inserted,
        deleted = stats.deleted,
        replaced = stats.replaced,
        "comparison finished"
    );
    report
}

/// Compare two texts after validating `config` and enforcing its size ceiling.
pub fn compare(left: &str, right: &str, config: &DiffConfig) -> DiffResult<DiffReport> {
    config.validate()?;
    if let Err(e) = config.limits.check(left, right) {
        warn!(error = %e, "comparison rejected");
        return Err(e);
    }
    Ok(diff(left, right, config.options))
}

/// [`compare`], then pair changed lines for inline word-level detail.
///
/// Every resulting `Replaced` row is checked against the cell bound, since
/// rendering it runs the word and character differencers on that pair.
pub fn compare_inline(left: &str, right: &str, config: &DiffConfig) -> DiffResult<DiffReport> {
    let report = pair_replacements(compare(left, right, config)?);
    for line in report.lines() {
        if let DiffLine::Replaced { left, right } = line {
            if let Err(e) = config.limits.check_pair(left, right) {
                warn!(error = %e, "inline refinement rejected");
                return Err(e);
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn exact() -> DiffOptions {
        DiffOptions::new(false, true)
    }

    #[test]
    fn end_to_end_scenario() {
        let report = diff(
            "apple\nbanana\ncherry",
            "apple\nBANANA\ncherry\ndate",
            exact(),
        );
        assert_eq!(
            report.lines(),
            &[
                DiffLine::Equal {
                    left: "apple".into(),
                    right: "apple".into()
                },
                DiffLine::Deleted {
                    left: "banana".into()
                },
                DiffLine::Inserted {
                    right: "BANANA".into()
                },
                DiffLine::Equal {
                    left: "cherry".into(),
                    right: "cherry".into()
                },
                DiffLine::Inserted {
                    right: "date".into()
                },
            ]
        );
        assert_eq!(
            report.stats(),
            Stats {
                inserted: 2,
                deleted: 1,
                replaced: 0
            }
        );
    }

    #[test]
    fn end_to_end_with_paired_rows() {
        let report = pair_replacements(diff(
            "apple\nbanana\ncherry",
            "apple\nBANANA\ncherry\ndate",
            exact(),
        ));
        assert_eq!(
            report.lines()[1],
            DiffLine::Replaced {
                left: "banana".into(),
                right: "BANANA".into()
            }
        );
        assert_eq!(
            report.stats(),
            Stats {
                inserted: 1,
                deleted: 0,
                replaced: 1
            }
        );
    }

    #[test]
    fn swap_golden_output_is_stable() {
        let golden = "- X\n  Y\n+ X";
        for _ in 0..5 {
            let report = diff("X\nY", "Y\nX", exact());
            assert_eq!(serialize_unified(&report), golden);
        }
    }

    #[test]
    fn case_option_decides_equality() {
        let folded = diff("Foo", "foo", DiffOptions::new(false, false));
        assert!(folded.is_identical());
        assert_eq!(folded.len(), 1);

        let strict = diff("Foo", "foo", exact());
        assert_eq!(
            strict.stats(),
            Stats {
                inserted: 1,
                deleted: 1,
                replaced: 0
            }
        );
        let paired = pair_replacements(strict);
        assert_eq!(
            paired.lines()[0].inline_segments(),
            vec![
                DiffSegment::deleted("F").modified(),
                DiffSegment::inserted("f").modified(),
                DiffSegment::equal("oo").modified(),
            ]
        );
    }

    #[test]
    fn navigator_wraps_over_report_from_diff() {
        let mut report = diff("a\nb\nc\nd\ne\nf", "a\nb\nd\ne\nf\ng", exact());
        let changes = report.change_indices();
        assert_eq!(changes.len(), 2);
        let (first, last) = (changes[0], changes[1]);
        assert_eq!(navigate(&mut report, Direction::Next), Some(first));
        assert_eq!(navigate(&mut report, Direction::Next), Some(last));
        assert_eq!(navigate(&mut report, Direction::Next), Some(first));
        assert_eq!(navigate(&mut report, Direction::Prev), Some(last));
    }

    #[test]
    fn compare_enforces_ceiling() {
        let config = DiffConfig {
            limits: DiffLimits {
                max_chars: 8,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(compare("abcd", "abcd", &config).is_ok());
        assert_eq!(
            compare("abcde", "abcd", &config),
            Err(DiffError::InputTooLarge { chars: 9, limit: 8 })
        );
    }

    #[test]
    fn compare_rejects_too_many_lines() {
        let text = "\n".repeat(99_999);
        assert!(matches!(
            compare(&text, &text, &DiffConfig::default()),
            Err(DiffError::AlignmentTooLarge { .. })
        ));
    }

    #[test]
    fn compare_inline_bounds_each_replaced_pair() {
        let config = DiffConfig {
            limits: DiffLimits {
                max_cells: 100,
                ..Default::default()
            },
            ..Default::default()
        };
        let report = compare_inline("keep\nabc", "keep\nabd", &config).unwrap();
        assert_eq!(report.stats().replaced, 1);

        let (long_left, long_right) = ("a".repeat(20), "b".repeat(20));
        assert_eq!(
            compare_inline(&long_left, &long_right, &config),
            Err(DiffError::AlignmentTooLarge {
                cells: 400,
                limit: 100
            })
        );
    }

    #[test]
    fn compare_rejects_invalid_config() {
        let config = DiffConfig {
            limits: DiffLimits {
                max_chars: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            compare("", "", &config),
            Err(DiffError::InvalidConfig(_))
        ));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = diff("a", "b", exact());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["stats"]["deleted"], 1);
        assert_eq!(json["lines"][0]["kind"], "deleted");
        assert_eq!(json["lines"][1]["right"], "b");
        let back: DiffReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    proptest! {
        #[test]
        fn identity_yields_only_equal_rows(x in "[ab\n ]{0,24}") {
            let report = diff(&x, &x, exact());
            prop_assert!(report.lines().iter().all(DiffLine::is_equal));
            prop_assert_eq!(report.stats(), Stats::default());
        }

        #[test]
        fn counts_swap_with_inputs(a in "[abc\n]{0,20}", b in "[abc\n]{0,20}") {
            let forward = diff(&a, &b, exact()).stats();
            let backward = diff(&b, &a, exact()).stats();
            prop_assert_eq!(forward.inserted, backward.deleted);
            prop_assert_eq!(forward.deleted, backward.inserted);
            prop_assert_eq!(forward.replaced, backward.replaced);
        }

        #[test]
        fn appending_a_line_inserts_exactly_it(a in "[ab\n]{0,20}") {
            let b = format!("{a}\nX");
            let report = diff(&a, &b, exact());
            let (last, prefix) = report.lines().split_last().unwrap();
            prop_assert!(prefix.iter().all(DiffLine::is_equal));
            prop_assert_eq!(last, &DiffLine::Inserted { right: "X".into() });
        }

        #[test]
        fn rows_reconstruct_both_inputs(a in "[ab\n]{0,20}", b in "[ab\n]{0,20}") {
            let report = diff(&a, &b, exact());
            let left: Vec<&str> = report.lines().iter().filter_map(DiffLine::left).collect();
            let right: Vec<&str> = report.lines().iter().filter_map(DiffLine::right).collect();
            prop_assert_eq!(left.join("\n"), a);
            prop_assert_eq!(right.join("\n"), b);
        }

        #[test]
        fn identical_round_trip_through_unified(x in "[ab \n]{0,24}") {
            let report = diff(&x, &x, exact());
            let expected: Vec<String> = x.split('\n').map(|l| format!("  {l}")).collect();
            prop_assert_eq!(serialize_unified(&report), expected.join("\n"));
        }
    }
}
