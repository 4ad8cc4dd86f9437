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

//! Optimality evaluator: how often is each algorithm (near-)optimal.

use crate::evaluator::{no_data, numeric, EvalContext, Evaluator};
use reval_core::format::{self, MIDRULE};
use reval_core::{GroupMatrix, OutputFormat, RevalError, RevalResult, RunRecord};

/// Per-domain fractions of problems on which each algorithm is within a
/// configurable bound of the best value.
///
/// An algorithm is optimal on a problem if
/// `value <= min(values) + optimum_bound * max(values)`. The default
/// bound of 0 requires the strict minimum. Several algorithms can be
/// optimal on the same problem.
pub struct OptimalityEvaluator {
    optimum_bound: f64,
    quantile: f64,
}

impl OptimalityEvaluator {
    /// Strict-minimum evaluator with the default flagging quantile of 0.1.
    pub fn new() -> Self {
        Self {
            optimum_bound: 0.0,
            quantile: 0.1,
        }
    }

    /// Relative margin added to the minimum when testing optimality.
    pub fn with_optimum_bound(mut self, optimum_bound: f64) -> Self {
        self.optimum_bound = optimum_bound;
        self
    }

    /// Fractions at or above `1 - quantile`, or at or below `quantile`,
    /// are highlighted.
    pub fn with_quantile(mut self, quantile: f64) -> Self {
        self.quantile = quantile;
        self
    }

    fn optimal_flags(&self, values: &[f64]) -> Vec<bool> {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let required = min + self.optimum_bound * max;
        values.iter().map(|v| *v <= required).collect()
    }

    /// Optimality fraction per algorithm over a stream of problems.
    fn fractions<'s, 'a, I>(
        &self,
        problems: I,
        attribute: &str,
        slots: usize,
    ) -> RevalResult<Vec<f64>>
    where
        I: IntoIterator<Item = &'s [&'a RunRecord]>,
        'a: 's,
    {
        let mut counts = vec![0usize; slots];
        let mut total = 0usize;
        for algos in problems {
            let values = algos
                .iter()
                .map(|run| numeric(run, attribute))
                .collect::<RevalResult<Vec<f64>>>()?;
            for (count, optimal) in counts.iter_mut().zip(self.optimal_flags(&values)) {
                if optimal {
                    *count += 1;
                }
            }
            total += 1;
        }
        Ok(counts
            .into_iter()
            .map(|c| c as f64 / total as f64)
            .collect())
    }

    fn cell(&self, fraction: f64) -> String {
        if fraction == 0.0 {
            return format::bold("0");
        }
        let text = format!("{:.4}", fraction);
        if fraction >= 1.0 - self.quantile || fraction <= self.quantile {
            format::highlight(&text, (100.0 * fraction) as u32)
        } else {
            text
        }
    }
}

impl Default for OptimalityEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for OptimalityEvaluator {
    fn supported_formats(&self) -> &'static [OutputFormat] {
        &[OutputFormat::TabularMarkup]
    }

    fn check(&self, _algorithms: &[String], attributes: &[String]) -> RevalResult<()> {
        if attributes.len() != 1 {
            return Err(RevalError::arity("evaluator needs exactly one attribute"));
        }
        Ok(())
    }

    fn render(&self, ctx: &EvalContext<'_>, groups: &GroupMatrix<'_>) -> RevalResult<String> {
        if groups.is_empty() {
            return Ok(no_data(ctx.format));
        }
        let attribute = &ctx.attributes[0];
        let slots = ctx.algorithms.len();

        let mut lines = Vec::new();
        lines.push(format::table_open(&format!("l{}", "|c".repeat(slots))));
        let mut header = vec![String::new()];
        header.extend(
            ctx.algorithms
                .iter()
                .map(|alg| format::bold(&format::escape(alg))),
        );
        lines.push(format::row_sep(&header));
        lines.push(MIDRULE.to_string());

        for (domain, problems) in groups.iter() {
            let fractions =
                self.fractions(problems.values().map(|algos| algos.as_slice()), attribute, slots)?;
            let mut cells = vec![domain.to_string()];
            cells.extend(fractions.iter().map(|f| self.cell(*f)));
            lines.push(format::row_sep(&cells));
        }

        lines.push(MIDRULE.to_string());
        let totals = self.fractions(
            groups.all_problems().map(|(_, _, algos)| algos),
            attribute,
            slots,
        )?;
        let mut cells = vec!["Total".to_string()];
        cells.extend(totals.iter().map(|f| self.cell(*f)));
        lines.push(format::row(&cells));
        lines.push(format::table_close().to_string());
        Ok(lines.join("\n"))
    }
}
