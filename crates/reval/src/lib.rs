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

//! # REVAL - Benchmark Run Evaluation Reports
//!
//! REVAL aggregates the results of many algorithm runs over many
//! benchmark problems and renders comparative statistics as tables and
//! plot primitives.
//!
//! ## Quick Start
//!
//! ```rust
//! use reval::{
//!     DomainComparisonReport, OptimalityEvaluator, OutputFormat, RecordSet, RunRecord,
//! };
//!
//! let records = RecordSet::from_records(vec![
//!     RunRecord::new("random-grid-p01", "grid", "p01", "random")
//!         .with_attribute("expansions", 120i64),
//!     RunRecord::new("min_cg-grid-p01", "grid", "p01", "min_cg")
//!         .with_attribute("expansions", 80i64),
//! ]);
//!
//! let report = DomainComparisonReport::new(
//!     vec!["random".to_string(), "min_cg".to_string()],
//!     vec!["expansions".to_string()],
//!     OutputFormat::TabularMarkup,
//!     1,
//!     Box::new(OptimalityEvaluator::new()),
//! )
//! .expect("valid configuration");
//!
//! let markup = report.render(&records).expect("rendered table");
//! assert!(markup.contains("grid"));
//! ```
//!
//! ## Components
//!
//! - Run records and indexes: [`RunRecord`], [`RecordSet`]
//! - Grouping pipeline: [`GroupingConfig`], [`GroupMatrix`]
//! - Evaluator strategies: [`OptimalityEvaluator`], [`StatisticsEvaluator`],
//!   [`IdealProblemsEvaluator`], [`AttributeStatisticsEvaluator`]
//! - Pairwise comparison: [`AlgorithmComparisonReport`], [`Comparison`]
//! - Histograms: [`HistogramReport`]
//! - Best/worst selection: [`BestWorstReport`]
//! - Relative scatter: [`RelativeScatterReport`], [`ScatterData`]
//! - Ranked domains: [`RankedDomainReport`]
//! - Domain pooling: [`DomainPooling`]

// Re-export the core data model
pub use reval_core::{
    DomainPooling,
    GroupMatrix,
    GroupingConfig,
    OutputFormat,
    RecordSet,
    RevalError,
    RevalErrorKind,
    RevalResult,
    RunRecord,
    Value,
};

// Re-export the reports
pub use reval_reports::{
    AlgorithmComparisonReport, AttributeStatisticsEvaluator, AxisBounds, BestWorstReport,
    CategoryFn, Comparison, DomainComparisonReport, EvalContext, Evaluator, HistogramReport,
    IdealProblemsEvaluator, OptimalityEvaluator, RankedDomainReport, RelativeScatterReport,
    ScatterData, StatisticsEvaluator,
};

// Shared formatting primitives for custom renderers
pub mod format {
    //! Markup and number formatting primitives.
    pub use reval_core::format::{
        bold, check_format, escape, fmt_count, fmt_sig, highlight, row, row_sep, table_close,
        table_open, MIDRULE,
    };
}
