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

//! Statistics evaluator: descriptive statistics for one algorithm.

use crate::csv_out::csv_string;
use crate::evaluator::{no_data, numeric, EvalContext, Evaluator};
use reval_core::format::{self, fmt_sig, MIDRULE};
use reval_core::{GroupMatrix, OutputFormat, RevalError, RevalResult};

/// Min, max, arithmetic mean and sample standard deviation of each
/// requested attribute for one designated algorithm, per domain and over
/// the pooled total.
pub struct StatisticsEvaluator {
    algorithm: String,
}

/// Descriptive statistics of one value sample.
struct Sample {
    min: f64,
    max: f64,
    mean: f64,
    stddev: f64,
}

impl Sample {
    /// Sample standard deviation uses the `n - 1` divisor; a single
    /// observation reports 0.
    fn from_values(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / n;
        let stddev = if values.len() > 1 {
            let variance =
                values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
            variance.sqrt()
        } else {
            0.0
        };
        Self {
            min,
            max,
            mean,
            stddev,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            fmt_sig(self.min, 6),
            fmt_sig(self.max, 6),
            fmt_sig(self.mean, 6),
            fmt_sig(self.stddev, 6),
        ]
    }
}

impl StatisticsEvaluator {
    /// Statistics for the named algorithm's runs.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
        }
    }
}

impl Evaluator for StatisticsEvaluator {
    fn supported_formats(&self) -> &'static [OutputFormat] {
        &[OutputFormat::TabularMarkup, OutputFormat::Csv]
    }

    fn check(&self, algorithms: &[String], attributes: &[String]) -> RevalResult<()> {
        if attributes.is_empty() {
            return Err(RevalError::arity("evaluator needs at least one attribute"));
        }
        if !algorithms.contains(&self.algorithm) {
            return Err(RevalError::config(format!(
                "designated algorithm '{}' is not in the algorithm list",
                self.algorithm
            )));
        }
        Ok(())
    }

    fn render(&self, ctx: &EvalContext<'_>, groups: &GroupMatrix<'_>) -> RevalResult<String> {
        if groups.is_empty() {
            return Ok(no_data(ctx.format));
        }
        let slot = ctx
            .algorithms
            .iter()
            .position(|a| a == &self.algorithm)
            .ok_or_else(|| {
                RevalError::config(format!(
                    "designated algorithm '{}' is not in the algorithm list",
                    self.algorithm
                ))
            })?;

        // (domain, attribute) -> sample, domain rows first, then Total
        let mut body: Vec<(String, String, Sample)> = Vec::new();
        for (domain, problems) in groups.iter() {
            for attribute in ctx.attributes {
                let values = problems
                    .values()
                    .map(|algos| numeric(algos[slot], attribute))
                    .collect::<RevalResult<Vec<f64>>>()?;
                body.push((
                    domain.to_string(),
                    attribute.clone(),
                    Sample::from_values(&values),
                ));
            }
        }
        let mut totals: Vec<(String, String, Sample)> = Vec::new();
        for attribute in ctx.attributes {
            let values = groups
                .all_problems()
                .map(|(_, _, algos)| numeric(algos[slot], attribute))
                .collect::<RevalResult<Vec<f64>>>()?;
            totals.push((
                "Total".to_string(),
                attribute.clone(),
                Sample::from_values(&values),
            ));
        }

        match ctx.format {
            OutputFormat::TabularMarkup => Ok(self.render_markup(body, totals)),
            OutputFormat::Csv => self.render_csv(body, totals),
            OutputFormat::PlotPrimitives => unreachable!("rejected at construction"),
        }
    }
}

impl StatisticsEvaluator {
    fn render_markup(
        &self,
        body: Vec<(String, String, Sample)>,
        totals: Vec<(String, String, Sample)>,
    ) -> String {
        let mut lines = Vec::new();
        lines.push(format::table_open("ll|cccc"));
        let header = vec![
            String::new(),
            String::new(),
            format::bold("Min"),
            format::bold("Max"),
            format::bold("Mean"),
            format::bold("Stddev"),
        ];
        lines.push(format::row_sep(&header));
        lines.push(MIDRULE.to_string());
        for (domain, attribute, sample) in &body {
            let mut cells = vec![domain.clone(), format::escape(attribute)];
            cells.extend(sample.cells());
            lines.push(format::row_sep(&cells));
        }
        lines.push(MIDRULE.to_string());
        for (i, (label, attribute, sample)) in totals.iter().enumerate() {
            let mut cells = vec![label.clone(), format::escape(attribute)];
            cells.extend(sample.cells());
            if i + 1 == totals.len() {
                lines.push(format::row(&cells));
            } else {
                lines.push(format::row_sep(&cells));
            }
        }
        lines.push(format::table_close().to_string());
        lines.join("\n")
    }

    fn render_csv(
        &self,
        body: Vec<(String, String, Sample)>,
        totals: Vec<(String, String, Sample)>,
    ) -> RevalResult<String> {
        let mut rows = Vec::new();
        rows.push(
            ["domain", "attribute", "min", "max", "mean", "stddev"]
                .map(String::from)
                .to_vec(),
        );
        for (domain, attribute, sample) in body.into_iter().chain(totals) {
            let mut row = vec![domain, attribute];
            row.extend(sample.cells());
            rows.push(row);
        }
        csv_string(&rows)
    }
}
