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

//! Comparative reports over benchmark run records.
//!
//! Every report here is a pure function from an indexed
//! [`RecordSet`](reval_core::RecordSet) to one rendered artifact:
//!
//! - [`DomainComparisonReport`] hosts the pluggable evaluator strategies
//!   ([`OptimalityEvaluator`], [`StatisticsEvaluator`],
//!   [`IdealProblemsEvaluator`], [`AttributeStatisticsEvaluator`]) over
//!   the filtered group matrix.
//! - [`AlgorithmComparisonReport`] tallies pairwise wins per domain.
//! - [`HistogramReport`] bins one attribute's value distribution.
//! - [`BestWorstReport`] extracts best/worst exemplar problems for one
//!   algorithm.
//! - [`RelativeScatterReport`] computes relative scatter points and
//!   bounds.
//! - [`RankedDomainReport`] ranks domains by a summed attribute.
//!
//! Configuration errors surface at construction; rendering only fails on
//! data problems.

mod attribute_stats;
mod best_worst;
mod csv_out;
mod evaluator;
mod histogram;
mod ideal;
mod optimality;
mod pairwise;
mod ranked;
mod scatter;
mod statistics;

pub use attribute_stats::AttributeStatisticsEvaluator;
pub use best_worst::BestWorstReport;
pub use evaluator::{DomainComparisonReport, EvalContext, Evaluator};
pub use histogram::HistogramReport;
pub use ideal::IdealProblemsEvaluator;
pub use optimality::OptimalityEvaluator;
pub use pairwise::{AlgorithmComparisonReport, Comparison};
pub use ranked::RankedDomainReport;
pub use scatter::{AxisBounds, CategoryFn, RelativeScatterReport, ScatterData};
pub use statistics::StatisticsEvaluator;
