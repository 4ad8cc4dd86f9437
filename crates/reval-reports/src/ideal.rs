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

//! Ideal-problem evaluator: which algorithm wins each problem.

use crate::csv_out::{csv_string, csv_value};
use crate::evaluator::{no_data, numeric, EvalContext, Evaluator};
use reval_core::{GroupMatrix, OutputFormat, RevalError, RevalResult};

/// One CSV row per problem naming the best algorithm on an evaluation
/// attribute.
///
/// Problem-describing attributes (everything requested besides the
/// evaluation attribute) are taken from the first algorithm's slot; they
/// are assumed algorithm-invariant. Ties on the evaluation attribute go
/// to the earlier algorithm in column order.
pub struct IdealProblemsEvaluator {
    eval_attribute: String,
    min_wins: bool,
}

impl IdealProblemsEvaluator {
    /// Rank problems by the named attribute; lower values win by default.
    pub fn new(eval_attribute: impl Into<String>) -> Self {
        Self {
            eval_attribute: eval_attribute.into(),
            min_wins: true,
        }
    }

    /// Select whether lower or higher attribute values are better.
    pub fn with_min_wins(mut self, min_wins: bool) -> Self {
        self.min_wins = min_wins;
        self
    }

    /// Index of the winning value; first occurrence wins ties.
    fn best_index(&self, values: &[f64]) -> usize {
        let mut best = 0;
        for (i, value) in values.iter().enumerate().skip(1) {
            let better = if self.min_wins {
                *value < values[best]
            } else {
                *value > values[best]
            };
            if better {
                best = i;
            }
        }
        best
    }
}

impl Evaluator for IdealProblemsEvaluator {
    fn supported_formats(&self) -> &'static [OutputFormat] {
        &[OutputFormat::Csv]
    }

    fn check(&self, _algorithms: &[String], attributes: &[String]) -> RevalResult<()> {
        if attributes.is_empty() {
            return Err(RevalError::arity("evaluator needs at least one attribute"));
        }
        if !attributes.contains(&self.eval_attribute) {
            return Err(RevalError::config(format!(
                "evaluation attribute '{}' is not in the attribute list",
                self.eval_attribute
            )));
        }
        Ok(())
    }

    fn render(&self, ctx: &EvalContext<'_>, groups: &GroupMatrix<'_>) -> RevalResult<String> {
        if groups.is_empty() {
            return Ok(no_data(ctx.format));
        }
        let describing: Vec<&String> = ctx
            .attributes
            .iter()
            .filter(|a| **a != self.eval_attribute)
            .collect();

        let mut rows = Vec::new();
        let mut header = vec!["domain".to_string(), "problem".to_string()];
        header.extend(describing.iter().map(|a| a.to_string()));
        header.push("best".to_string());
        header.extend(ctx.algorithms.iter().cloned());
        rows.push(header);

        for (domain, problem, algos) in groups.all_problems() {
            let values = algos
                .iter()
                .map(|run| numeric(run, &self.eval_attribute))
                .collect::<RevalResult<Vec<f64>>>()?;
            let best = self.best_index(&values);
            let mut row = vec![domain.to_string(), problem.to_string()];
            for attribute in &describing {
                // slot 0 stands in for all: these attributes describe the
                // problem, not the run
                let value = algos[0].get(attribute).ok_or_else(|| {
                    RevalError::conversion(format!(
                        "run '{}' lost required attribute '{}'",
                        algos[0].id, attribute
                    ))
                })?;
                row.push(csv_value(value));
            }
            row.push(ctx.algorithms[best].clone());
            for run in algos {
                let value = run.get(&self.eval_attribute).ok_or_else(|| {
                    RevalError::conversion(format!(
                        "run '{}' lost required attribute '{}'",
                        run.id, self.eval_attribute
                    ))
                })?;
                row.push(csv_value(value));
            }
            rows.push(row);
        }
        csv_string(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::DomainComparisonReport;
    use reval_core::{RecordSet, RunRecord};

    fn run(domain: &str, problem: &str, algorithm: &str, expansions: i64) -> RunRecord {
        RunRecord::new(
            format!("{}-{}-{}", algorithm, domain, problem),
            domain,
            problem,
            algorithm,
        )
        .with_attribute("expansions", expansions)
        .with_attribute("operators", 40i64)
    }

    fn report(min_wins: bool) -> DomainComparisonReport {
        DomainComparisonReport::new(
            vec!["a".to_string(), "b".to_string()],
            vec!["expansions".to_string(), "operators".to_string()],
            OutputFormat::Csv,
            1,
            Box::new(IdealProblemsEvaluator::new("expansions").with_min_wins(min_wins)),
        )
        .unwrap()
    }

    // ==================== best_index ====================

    #[test]
    fn test_best_index_min_wins() {
        let eval = IdealProblemsEvaluator::new("x");
        assert_eq!(eval.best_index(&[3.0, 1.0, 2.0]), 1);
    }

    #[test]
    fn test_best_index_max_wins() {
        let eval = IdealProblemsEvaluator::new("x").with_min_wins(false);
        assert_eq!(eval.best_index(&[3.0, 1.0, 5.0]), 2);
    }

    #[test]
    fn test_best_index_tie_goes_to_first() {
        let eval = IdealProblemsEvaluator::new("x");
        assert_eq!(eval.best_index(&[2.0, 2.0]), 0);
    }

    // ==================== configuration ====================

    #[test]
    fn test_eval_attribute_must_be_requested() {
        let err = DomainComparisonReport::new(
            vec!["a".to_string()],
            vec!["operators".to_string()],
            OutputFormat::Csv,
            1,
            Box::new(IdealProblemsEvaluator::new("expansions")),
        )
        .unwrap_err();
        assert!(format!("{}", err).contains("not in the attribute list"));
    }

    #[test]
    fn test_markup_format_rejected() {
        let err = DomainComparisonReport::new(
            vec!["a".to_string()],
            vec!["expansions".to_string()],
            OutputFormat::TabularMarkup,
            1,
            Box::new(IdealProblemsEvaluator::new("expansions")),
        )
        .unwrap_err();
        assert!(format!("{}", err).contains("unsupported format"));
    }

    // ==================== rendering ====================

    #[test]
    fn test_render_rows() {
        let records = RecordSet::from_records(vec![
            run("d", "p1", "a", 10),
            run("d", "p1", "b", 5),
            run("d", "p2", "a", 2),
            run("d", "p2", "b", 2),
        ]);
        let text = report(true).render(&records).unwrap();
        let expected = "domain,problem,operators,best,a,b\n\
                        d,p1,40,b,10,5\n\
                        d,p2,40,a,2,2";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_max_wins() {
        let records = RecordSet::from_records(vec![
            run("d", "p1", "a", 10),
            run("d", "p1", "b", 5),
        ]);
        let text = report(false).render(&records).unwrap();
        assert!(text.contains("d,p1,40,a,10,5"));
    }

    #[test]
    fn test_render_no_data() {
        let records = RecordSet::from_records(vec![]);
        assert_eq!(report(true).render(&records).unwrap(), "no data");
    }
}
