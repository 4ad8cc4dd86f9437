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

//! Attribute-statistics evaluator: pooled per-algorithm summaries.

use crate::evaluator::{no_data, numeric, EvalContext, Evaluator};
use reval_core::format::{self, fmt_sig, MIDRULE};
use reval_core::{GroupMatrix, OutputFormat, RevalError, RevalResult};

/// Mean and population standard deviation of each requested attribute per
/// algorithm, pooled over every domain's problems.
#[derive(Default)]
pub struct AttributeStatisticsEvaluator;

impl AttributeStatisticsEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Population standard deviation uses the `n` divisor.
    fn pooled(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        (mean, variance.sqrt())
    }
}

impl Evaluator for AttributeStatisticsEvaluator {
    fn supported_formats(&self) -> &'static [OutputFormat] {
        &[OutputFormat::TabularMarkup]
    }

    fn check(&self, _algorithms: &[String], attributes: &[String]) -> RevalResult<()> {
        if attributes.is_empty() {
            return Err(RevalError::arity("evaluator needs at least one attribute"));
        }
        Ok(())
    }

    fn render(&self, ctx: &EvalContext<'_>, groups: &GroupMatrix<'_>) -> RevalResult<String> {
        if groups.is_empty() {
            return Ok(no_data(ctx.format));
        }

        let mut lines = Vec::new();
        lines.push(format::table_open(&format!(
            "l{}",
            "|c".repeat(ctx.attributes.len())
        )));
        let mut header = vec![String::new()];
        header.extend(
            ctx.attributes
                .iter()
                .map(|attr| format::bold(&format::escape(attr))),
        );
        lines.push(format::row_sep(&header));
        lines.push(MIDRULE.to_string());

        for (slot, algorithm) in ctx.algorithms.iter().enumerate() {
            let mut cells = vec![format::bold(&format::escape(algorithm))];
            for attribute in ctx.attributes {
                let values = groups
                    .all_problems()
                    .map(|(_, _, algos)| numeric(algos[slot], attribute))
                    .collect::<RevalResult<Vec<f64>>>()?;
                let (mean, stddev) = Self::pooled(&values);
                cells.push(format!(
                    r"{} $\pm$ {}",
                    fmt_sig(mean, 6),
                    fmt_sig(stddev, 6)
                ));
            }
            if slot + 1 == ctx.algorithms.len() {
                lines.push(format::row(&cells));
            } else {
                lines.push(format::row_sep(&cells));
            }
        }
        lines.push(format::table_close().to_string());
        Ok(lines.join("\n"))
    }
}
