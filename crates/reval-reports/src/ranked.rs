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

//! Ranked-domain table: the domains where an attribute sums highest.

use reval_core::format::{self, check_format, fmt_count, MIDRULE};
use reval_core::{OutputFormat, RecordSet, RevalError, RevalResult};

/// Per domain and per algorithm, sums one attribute over the domain's
/// runs, ranks domains by mean summed value and emits the top `n_best`
/// as a markup table.
#[derive(Debug)]
pub struct RankedDomainReport {
    attribute: String,
    n_best: usize,
    total: bool,
}

impl RankedDomainReport {
    /// Rank domains on the summed attribute.
    ///
    /// # Errors
    ///
    /// Fails if `n_best` is zero, the attribute arity is wrong, or
    /// `format` is not tabular markup.
    pub fn new(
        attributes: Vec<String>,
        n_best: usize,
        format: OutputFormat,
    ) -> RevalResult<Self> {
        check_format(format, &[OutputFormat::TabularMarkup])?;
        if attributes.len() != 1 {
            return Err(RevalError::arity("report needs exactly one attribute"));
        }
        if n_best == 0 {
            return Err(RevalError::config("report must rank at least one domain"));
        }
        let attribute = attributes.into_iter().next().unwrap_or_default();
        Ok(Self {
            attribute,
            n_best,
            total: false,
        })
    }

    /// Append a Total row summing every ranked domain.
    pub fn with_total(mut self, total: bool) -> Self {
        self.total = total;
        self
    }

    /// Sum, rank and render.
    pub fn render(&self, records: &RecordSet) -> RevalResult<String> {
        if records.domains().is_empty() {
            return Ok(r"\textbf{NO DATA}".to_string());
        }
        let algorithms = records.algorithms();

        // (domain, problem count, summed attribute per algorithm)
        let mut ranked: Vec<(&str, usize, Vec<f64>)> = records
            .domains()
            .iter()
            .map(|domain| {
                let sums: Vec<f64> = algorithms
                    .iter()
                    .map(|alg| {
                        records
                            .domain_algorithm_runs(domain, alg)
                            .iter()
                            .filter_map(|run| run.get_float(&self.attribute))
                            .sum()
                    })
                    .collect();
                (
                    domain.as_str(),
                    records.domain_problems(domain).len(),
                    sums,
                )
            })
            .collect();
        ranked.sort_by(|a, b| {
            let mean_a = a.2.iter().sum::<f64>() / a.1 as f64;
            let mean_b = b.2.iter().sum::<f64>() / b.1 as f64;
            mean_b.total_cmp(&mean_a)
        });

        let mut lines = Vec::new();
        lines.push(format!(
            r"\begin{{tabular}}{{@{{}}l|{}@{{}}}}",
            "c".repeat(algorithms.len())
        ));
        let mut header = vec!["Domain".to_string()];
        header.extend(algorithms.iter().cloned());
        lines.push(format::row_sep(&header));
        lines.push(MIDRULE.to_string());
        for (domain, problem_count, sums) in ranked.iter().take(self.n_best) {
            let mut cells = vec![format!(
                "{} ({})",
                format::bold(domain),
                problem_count
            )];
            cells.extend(sums.iter().map(|v| fmt_count(*v)));
            lines.push(format::row_sep(&cells));
        }
        if self.total {
            let totals: Vec<f64> = (0..algorithms.len())
                .map(|i| ranked.iter().map(|(_, _, sums)| sums[i]).sum())
                .collect();
            let mut cells = vec![format::bold("Total")];
            cells.extend(totals.iter().map(|v| fmt_count(*v)));
            lines.push(format::row_sep(&cells));
        }
        // the final body row carries no row separator
        if let Some(last) = lines.last_mut() {
            if let Some(stripped) = last.strip_suffix(r"\\") {
                *last = stripped.to_string();
            }
        }
        lines.push(r"\end{tabular}".to_string());
        Ok(lines.join("\n"))
    }
}
