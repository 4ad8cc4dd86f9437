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

//! Evaluator strategies and the domain-comparison report that hosts them.

use reval_core::format::check_format;
use reval_core::{GroupMatrix, GroupingConfig, OutputFormat, RecordSet, RevalError, RevalResult, RunRecord};

/// Read-only view of the report configuration handed to an evaluator at
/// render time.
pub struct EvalContext<'a> {
    /// Configured algorithms in slot/column order.
    pub algorithms: &'a [String],
    /// Requested attributes.
    pub attributes: &'a [String],
    /// Output format the report was constructed with.
    pub format: OutputFormat,
}

/// A pluggable statistic over the filtered group matrix.
///
/// Evaluators are selected at report construction; their configuration
/// checks run there too, so rendering can only fail on data problems.
pub trait Evaluator {
    /// Formats this evaluator can render.
    fn supported_formats(&self) -> &'static [OutputFormat];

    /// Construction-time validation against the report configuration.
    fn check(&self, algorithms: &[String], attributes: &[String]) -> RevalResult<()>;

    /// Render the filtered group matrix.
    fn render(&self, ctx: &EvalContext<'_>, groups: &GroupMatrix<'_>) -> RevalResult<String>;
}

/// The defined "no data" rendering for an empty post-filter group set.
pub(crate) fn no_data(format: OutputFormat) -> String {
    match format {
        OutputFormat::TabularMarkup => r"\textbf{NO DATA}".to_string(),
        _ => "no data".to_string(),
    }
}

/// Numeric attribute lookup that fails loudly on non-numeric data.
pub(crate) fn numeric(run: &RunRecord, attribute: &str) -> RevalResult<f64> {
    run.get_float(attribute).ok_or_else(|| {
        RevalError::conversion(format!(
            "attribute '{}' of run '{}' is not numeric",
            attribute, run.id
        ))
    })
}

/// Renders one evaluator over the grouped and filtered record matrix.
///
/// The report owns the grouping configuration (algorithm column order,
/// required attributes, `min_group_size`) and delegates the actual
/// statistics to its evaluator.
pub struct DomainComparisonReport {
    config: GroupingConfig,
    format: OutputFormat,
    evaluator: Box<dyn Evaluator>,
}

impl std::fmt::Debug for DomainComparisonReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainComparisonReport")
            .field("config", &self.config)
            .field("format", &self.format)
            .finish()
    }
}

impl DomainComparisonReport {
    /// Validate the configuration and create the report.
    ///
    /// # Errors
    ///
    /// Fails if the algorithm list is empty or has duplicates, if the
    /// evaluator rejects the configuration (attribute arity, unknown
    /// designated algorithm), or if it does not support `format`.
    pub fn new(
        algorithms: Vec<String>,
        attributes: Vec<String>,
        format: OutputFormat,
        min_group_size: usize,
        evaluator: Box<dyn Evaluator>,
    ) -> RevalResult<Self> {
        evaluator.check(&algorithms, &attributes)?;
        check_format(format, evaluator.supported_formats())?;
        let config = GroupingConfig::new(algorithms, attributes, min_group_size)?;
        Ok(Self {
            config,
            format,
            evaluator,
        })
    }

    /// Group, filter and render.
    pub fn render(&self, records: &RecordSet) -> RevalResult<String> {
        let groups = self.config.build(records);
        let ctx = EvalContext {
            algorithms: self.config.algorithms(),
            attributes: self.config.attributes(),
            format: self.format,
        };
        self.evaluator.render(&ctx, &groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptimalityEvaluator;

    fn algs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_report_rejects_duplicate_algorithms() {
        let err = DomainComparisonReport::new(
            algs(&["a", "a"]),
            algs(&["expansions"]),
            OutputFormat::TabularMarkup,
            1,
            Box::new(OptimalityEvaluator::new()),
        )
        .unwrap_err();
        assert!(format!("{}", err).contains("duplicates"));
    }

    #[test]
    fn test_report_rejects_unsupported_format() {
        let err = DomainComparisonReport::new(
            algs(&["a", "b"]),
            algs(&["expansions"]),
            OutputFormat::Csv,
            1,
            Box::new(OptimalityEvaluator::new()),
        )
        .unwrap_err();
        assert!(format!("{}", err).contains("unsupported format"));
    }

    #[test]
    fn test_report_rejects_wrong_arity() {
        let err = DomainComparisonReport::new(
            algs(&["a", "b"]),
            algs(&["expansions", "cost"]),
            OutputFormat::TabularMarkup,
            1,
            Box::new(OptimalityEvaluator::new()),
        )
        .unwrap_err();
        assert!(format!("{}", err).contains("exactly one attribute"));
    }

    #[test]
    fn test_no_data_literals() {
        assert_eq!(no_data(OutputFormat::TabularMarkup), r"\textbf{NO DATA}");
        assert_eq!(no_data(OutputFormat::Csv), "no data");
    }
}
