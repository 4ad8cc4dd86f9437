// Dweve REVAL - Benchmark Run Evaluation Reports
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Output-format tags and shared formatting primitives.
//!
//! The tabular-markup grammar is consumed by existing TeX tooling
//! downstream, so the escaping and highlighting rules here must be
//! reproduced byte for byte.

use crate::error::{RevalError, RevalResult};
use std::fmt;
use std::str::FromStr;

/// Output encodings a report can render to.
///
/// Each report or evaluator declares the subset it supports and rejects
/// the rest at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table markup for TeX-based rendering pipelines.
    TabularMarkup,
    /// Comma-separated values, header row first, no trailing blank line.
    Csv,
    /// Category/point lists plus axis bounds for an external plot backend.
    PlotPrimitives,
}

impl OutputFormat {
    /// The stable tag used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TabularMarkup => "tabular-markup",
            Self::Csv => "csv",
            Self::PlotPrimitives => "plot-primitives",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = RevalError;

    fn from_str(s: &str) -> RevalResult<Self> {
        match s {
            "tabular-markup" => Ok(Self::TabularMarkup),
            "csv" => Ok(Self::Csv),
            "plot-primitives" => Ok(Self::PlotPrimitives),
            other => Err(RevalError::format(format!("unknown format: {}", other))),
        }
    }
}

/// Check that `format` is among an evaluator's supported formats.
pub fn check_format(format: OutputFormat, supported: &[OutputFormat]) -> RevalResult<()> {
    if supported.contains(&format) {
        Ok(())
    } else {
        Err(RevalError::format(format!(
            "unsupported format: {}",
            format
        )))
    }
}

/// Horizontal rule between the header, body and total sections.
pub const MIDRULE: &str = r"\midrule";

/// Escape markup special characters in a label.
pub fn escape(text: &str) -> String {
    text.replace('_', r"{\_}")
}

/// Bold wrapper.
pub fn bold(text: &str) -> String {
    format!(r"\textbf{{{}}}", text)
}

/// Color-highlight a cell with an intensity in percent.
///
/// Intensity 100 is fully green, 0 fully blue; downstream tooling mixes
/// the two.
pub fn highlight(text: &str, intensity: u32) -> String {
    format!(r"\textcolor{{green!{}!blue}}{{{}}}", intensity, text)
}

/// Open a centered table with the given column layout (e.g. `l|c|c`).
pub fn table_open(columns: &str) -> String {
    format!(r"\begin{{center}}\begin{{tabular}}{{@{{}}{}@{{}}}}", columns)
}

/// Close a centered table.
pub fn table_close() -> &'static str {
    r"\end{tabular}\end{center}"
}

/// Join cells into one table row without a trailing row separator.
pub fn row(cells: &[String]) -> String {
    cells.join(" & ")
}

/// Join cells into one table row with the trailing row separator.
pub fn row_sep(cells: &[String]) -> String {
    format!(r"{}\\", cells.join(" & "))
}

/// Format a number with at most `digits` significant digits.
///
/// Values that round to an integer print without a decimal point; trailing
/// zeros are stripped. Used for CSV bodies where a fixed precision is
/// expected but padding is not.
pub fn fmt_sig(value: f64, digits: u32) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    let fixed = format!("{:.*}", decimals, value);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Format a count-like number: integral values print as integers.
pub fn fmt_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        fmt_sig(value, 7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== OutputFormat tests ====================

    #[test]
    fn test_format_tags_roundtrip() {
        for fmt in [
            OutputFormat::TabularMarkup,
            OutputFormat::Csv,
            OutputFormat::PlotPrimitives,
        ] {
            assert_eq!(fmt.as_str().parse::<OutputFormat>().unwrap(), fmt);
        }
    }

    #[test]
    fn test_format_unknown_tag() {
        let err = "html".parse::<OutputFormat>().unwrap_err();
        assert!(format!("{}", err).contains("unknown format"));
    }

    #[test]
    fn test_check_format() {
        assert!(check_format(OutputFormat::Csv, &[OutputFormat::Csv]).is_ok());
        let err = check_format(OutputFormat::Csv, &[OutputFormat::TabularMarkup]).unwrap_err();
        assert!(format!("{}", err).contains("unsupported format: csv"));
    }

    // ==================== Markup primitive tests ====================

    #[test]
    fn test_escape_underscores() {
        assert_eq!(escape("min_cg"), r"min{\_}cg");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold("Total"), r"\textbf{Total}");
    }

    #[test]
    fn test_highlight() {
        assert_eq!(highlight("0.97", 97), r"\textcolor{green!97!blue}{0.97}");
    }

    #[test]
    fn test_table_open_close() {
        assert_eq!(
            table_open("l|c|c"),
            r"\begin{center}\begin{tabular}{@{}l|c|c@{}}"
        );
        assert_eq!(table_close(), r"\end{tabular}\end{center}");
    }

    #[test]
    fn test_rows() {
        let cells = vec!["a".to_string(), "b".to_string()];
        assert_eq!(row(&cells), "a & b");
        assert_eq!(row_sep(&cells), r"a & b\\");
    }

    // ==================== Number formatting tests ====================

    #[test]
    fn test_fmt_sig_basic() {
        assert_eq!(fmt_sig(0.0, 7), "0");
        assert_eq!(fmt_sig(2.0, 7), "2");
        assert_eq!(fmt_sig(0.5, 7), "0.5");
        assert_eq!(fmt_sig(1234567.0, 7), "1234567");
    }

    #[test]
    fn test_fmt_sig_rounds() {
        assert_eq!(fmt_sig(0.123456789, 4), "0.1235");
        assert_eq!(fmt_sig(123.456789, 4), "123.5");
    }

    #[test]
    fn test_fmt_count() {
        assert_eq!(fmt_count(10.0), "10");
        assert_eq!(fmt_count(2.5), "2.5");
    }
}
