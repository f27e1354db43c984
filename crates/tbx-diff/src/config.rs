use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Default ceiling on the combined size of both inputs, in code points.
pub const DEFAULT_MAX_CHARS: usize = 200_000;

/// Default ceiling on the number of alignment table cells (128 MiB of `usize`).
pub const DEFAULT_MAX_CELLS: usize = 16_000_000;

/// Matching options for the line differencer.
///
/// These only shape the comparison key; displayed text is never altered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Strip all whitespace before comparing lines.
    pub ignore_whitespace: bool,
    /// Compare lines without case folding.
    pub case_sensitive: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_whitespace: false,
            case_sensitive: true,
        }
    }
}

impl DiffOptions {
    pub fn new(ignore_whitespace: bool, case_sensitive: bool) -> Self {
        Self {
            ignore_whitespace,
            case_sensitive,
        }
    }
}

/// Resource bounds for a checked comparison.
///
/// The aligner allocates one table cell per pair of tokens, so the size of
/// both inputs and the product of their token counts are bounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffLimits {
    /// Maximum number of code points across both inputs.
    pub max_chars: usize,
    /// Maximum number of alignment table cells for a single alignment.
    pub max_cells: usize,
}

impl Default for DiffLimits {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl DiffLimits {
    /// Reject inputs that are too long, or whose line alignment would need
    /// more than `max_cells` table cells.
    pub fn check(&self, left: &str, right: &str) -> DiffResult<()> {
        let chars = left.chars().count() + right.chars().count();
        if chars > self.max_chars {
            return Err(DiffError::InputTooLarge {
                chars,
                limit: self.max_chars,
            });
        }
        self.check_cells(line_count(left), line_count(right))
    }

    /// Reject a line pair whose word or character refinement could exceed
    /// `max_cells`. Token counts never exceed code point counts, so the
    /// product of the code point counts bounds every alignment involved.
    pub fn check_pair(&self, left: &str, right: &str) -> DiffResult<()> {
        self.check_cells(left.chars().count(), right.chars().count())
    }

    fn check_cells(&self, left_len: usize, right_len: usize) -> DiffResult<()> {
        let cells = left_len.saturating_mul(right_len);
        if cells > self.max_cells {
            return Err(DiffError::AlignmentTooLarge {
                cells,
                limit: self.max_cells,
            });
        }
        Ok(())
    }
}

/// Number of logical lines, matching `lines::split_lines`.
fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Full configuration for a comparison run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    pub options: DiffOptions,
    pub limits: DiffLimits,
}

impl DiffConfig {
    pub fn validate(&self) -> DiffResult<()> {
        if self.limits.max_chars == 0 {
            return Err(DiffError::InvalidConfig(
                "limits.max_chars must be greater than zero".into(),
            ));
        }
        if self.limits.max_cells == 0 {
            return Err(DiffError::InvalidConfig(
                "limits.max_cells must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
