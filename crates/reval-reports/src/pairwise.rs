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

//! Pairwise algorithm comparison: win/loss tallies per domain.
//!
//! Operates on the raw per-domain indexes rather than the group matrix;
//! two algorithms are compared on every problem they both solved,
//! regardless of what the rest of the field did.

use reval_core::format::{self, check_format, MIDRULE};
use reval_core::{OutputFormat, RecordSet, RevalError, RevalResult};
use std::collections::HashMap;

/// One ordered algorithm pair to compare.
///
/// The same pair may appear in several descriptors with different
/// thresholds; descriptors are identified by their list position, not by
/// the algorithm names.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Algorithm whose wins are counted first.
    pub left: String,
    /// Algorithm whose wins are counted second.
    pub right: String,
    /// Per-descriptor override of the report's improvement threshold.
    pub min_improvement: Option<f64>,
    /// Per-descriptor override of the report's flagging quantile.
    pub quantile: Option<f64>,
}

impl Comparison {
    /// Compare `left` against `right` with the report-level thresholds.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            min_improvement: None,
            quantile: None,
        }
    }

    /// Override the improvement threshold for this descriptor only.
    pub fn with_min_improvement(mut self, min_improvement: f64) -> Self {
        self.min_improvement = Some(min_improvement);
        self
    }

    /// Override the flagging quantile for this descriptor only.
    pub fn with_quantile(mut self, quantile: f64) -> Self {
        self.quantile = Some(quantile);
        self
    }
}

/// Win/loss/total tally for one descriptor within one domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    left_wins: u64,
    right_wins: u64,
    total: u64,
}

/// Renders win counts and win fractions for a list of algorithm pairs,
/// per domain and as a grand total.
#[derive(Debug)]
pub struct AlgorithmComparisonReport {
    comparisons: Vec<Comparison>,
    attribute: String,
    min_improvement: f64,
    quantile: f64,
}

impl AlgorithmComparisonReport {
    /// Validate the comparison set and create the report.
    ///
    /// # Errors
    ///
    /// Fails on an empty comparison set, a self-comparison, a wrong
    /// attribute arity, or an unsupported output format.
    pub fn new(
        comparisons: Vec<Comparison>,
        attributes: Vec<String>,
        format: OutputFormat,
    ) -> RevalResult<Self> {
        check_format(format, &[OutputFormat::TabularMarkup])?;
        if attributes.len() != 1 {
            return Err(RevalError::arity("report needs exactly one attribute"));
        }
        if comparisons.is_empty() {
            return Err(RevalError::config("report needs at least one comparison"));
        }
        for comp in &comparisons {
            if comp.left == comp.right {
                return Err(RevalError::config("cannot compare algorithm to itself"));
            }
        }
        let attribute = attributes.into_iter().next().unwrap_or_default();
        Ok(Self {
            comparisons,
            attribute,
            min_improvement: 0.0,
            quantile: 0.5,
        })
    }

    /// Default improvement threshold a win must exceed.
    pub fn with_min_improvement(mut self, min_improvement: f64) -> Self {
        self.min_improvement = min_improvement;
        self
    }

    /// Default flagging quantile; values at or above 0.5 disable
    /// highlighting.
    pub fn with_quantile(mut self, quantile: f64) -> Self {
        self.quantile = quantile;
        self
    }

    fn tally(&self, records: &RecordSet, domain: &str, comp: &Comparison) -> Tally {
        let min_improvement = comp.min_improvement.unwrap_or(self.min_improvement);
        let right_values: HashMap<&str, f64> = records
            .domain_algorithm_runs(domain, &comp.right)
            .into_iter()
            .filter_map(|run| {
                run.get_float(&self.attribute)
                    .map(|v| (run.problem.as_str(), v))
            })
            .collect();
        let mut tally = Tally::default();
        for run in records.domain_algorithm_runs(domain, &comp.left) {
            let Some(left_value) = run.get_float(&self.attribute) else {
                continue;
            };
            let Some(&right_value) = right_values.get(run.problem.as_str()) else {
                continue;
            };
            tally.total += 1;
            if left_value != right_value {
                // attributes compared here are min-wins: a lower left
                // value is an improvement of left over right
                let improvement =
                    (right_value - left_value) / left_value.max(right_value);
                if improvement > min_improvement {
                    tally.left_wins += 1;
                }
                if -improvement > min_improvement {
                    tally.right_wins += 1;
                }
            }
        }
        tally
    }

    fn fraction_cell(&self, fraction: f64, quantile: f64) -> String {
        let text = format!("{:.2}", fraction);
        if fraction > 1.0 - quantile {
            format::highlight(&text, (100.0 * fraction) as u32)
        } else {
            text
        }
    }

    fn format_row(&self, name: &str, tallies: &[Tally]) -> String {
        let mut cells = vec![format::bold(&format::escape(name))];
        for (comp, tally) in self.comparisons.iter().zip(tallies) {
            if tally.total == 0 {
                // no data => no output
                cells.extend([String::new(), String::new(), String::new()]);
                continue;
            }
            for wins in [tally.left_wins, tally.right_wins] {
                cells.push(if wins == 0 {
                    format::bold("0")
                } else {
                    wins.to_string()
                });
            }
            let quantile = comp.quantile.unwrap_or(self.quantile);
            let left_fraction = tally.left_wins as f64 / tally.total as f64;
            let right_fraction = tally.right_wins as f64 / tally.total as f64;
            if quantile < 0.5 {
                cells.push(format!(
                    "{} {}",
                    self.fraction_cell(left_fraction, quantile),
                    self.fraction_cell(right_fraction, quantile)
                ));
            } else {
                cells.push(format!("{:.2} {:.2}", left_fraction, right_fraction));
            }
        }
        format::row(&cells)
    }

    /// Tally and render the comparison table.
    pub fn render(&self, records: &RecordSet) -> RevalResult<String> {
        let mut results: Vec<(&str, Vec<Tally>)> = Vec::new();
        for domain in records.domains() {
            let tallies: Vec<Tally> = self
                .comparisons
                .iter()
                .map(|comp| self.tally(records, domain, comp))
                .collect();
            results.push((domain, tallies));
        }
        let totals: Vec<Tally> = (0..self.comparisons.len())
            .map(|i| {
                results.iter().fold(Tally::default(), |acc, (_, row)| Tally {
                    left_wins: acc.left_wins + row[i].left_wins,
                    right_wins: acc.right_wins + row[i].right_wins,
                    total: acc.total + row[i].total,
                })
            })
            .collect();

        let mut lines = Vec::new();
        lines.push(format::table_open(&format!(
            "l{}",
            "ccc".repeat(self.comparisons.len())
        )));
        let mut header = vec![String::new()];
        for comp in &self.comparisons {
            header.push(format::bold(&format::escape(&comp.left)));
            header.push(format::bold(&format::escape(&comp.right)));
            header.push(format::bold("win balance"));
        }
        lines.push(format::row_sep(&header));
        lines.push(MIDRULE.to_string());
        for (domain, tallies) in &results {
            if tallies.iter().any(|t| t.total > 0) {
                lines.push(format!(r"{}\\", self.format_row(domain, tallies)));
            }
        }
        lines.push(MIDRULE.to_string());
        lines.push(self.format_row("Total", &totals));
        lines.push(format::table_close().to_string());
        Ok(lines.join("\n"))
    }
}
