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

//! CLI command implementations.
//!
//! Every command follows the same shape: load and optionally pool the
//! records, construct the report (configuration errors surface here),
//! render, and write the artifact.

use crate::cli::{
    AttributeStatsArgs, BestWorstArgs, CommonArgs, HistogramArgs, IdealArgs, OptimalityArgs,
    PairwiseArgs, RankedArgs, ScatterArgs, StatisticsArgs,
};
use crate::error::CliError;
use crate::props;
use colored::Colorize;
use reval_core::{OutputFormat, RecordSet, RevalError};
use reval_reports::{
    AlgorithmComparisonReport, AttributeStatisticsEvaluator, BestWorstReport, Comparison,
    DomainComparisonReport, HistogramReport, IdealProblemsEvaluator, OptimalityEvaluator,
    RankedDomainReport, RelativeScatterReport, StatisticsEvaluator,
};
use std::fs;

fn load_recordset(common: &CommonArgs) -> Result<RecordSet, CliError> {
    let mut records = props::load_records(&common.properties)?;
    if let Some(pool_path) = &common.pool {
        let pooling = props::load_pooling(pool_path)?;
        pooling.apply_all(&mut records)?;
    }
    Ok(RecordSet::from_records(records))
}

fn write_output(common: &CommonArgs, content: &str) -> Result<(), CliError> {
    match &common.output {
        Some(path) => {
            fs::write(path, content).map_err(|e| CliError::io_error(path, e))?;
            eprintln!("{} {}", "✓".green().bold(), path.display());
            Ok(())
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn parse_format(tag: &str) -> Result<OutputFormat, CliError> {
    Ok(tag.parse::<OutputFormat>()?)
}

pub fn optimality(args: OptimalityArgs) -> Result<(), CliError> {
    let report = DomainComparisonReport::new(
        args.algorithms,
        vec![args.attribute],
        OutputFormat::TabularMarkup,
        args.min_group_size,
        Box::new(
            OptimalityEvaluator::new()
                .with_optimum_bound(args.optimum_bound)
                .with_quantile(args.quantile),
        ),
    )?;
    let records = load_recordset(&args.common)?;
    write_output(&args.common, &report.render(&records)?)
}

pub fn statistics(args: StatisticsArgs) -> Result<(), CliError> {
    let report = DomainComparisonReport::new(
        args.algorithms,
        args.attributes,
        parse_format(&args.format)?,
        args.min_group_size,
        Box::new(StatisticsEvaluator::new(args.algorithm)),
    )?;
    let records = load_recordset(&args.common)?;
    write_output(&args.common, &report.render(&records)?)
}

pub fn ideal(args: IdealArgs) -> Result<(), CliError> {
    let report = DomainComparisonReport::new(
        args.algorithms,
        args.attributes,
        OutputFormat::Csv,
        args.min_group_size,
        Box::new(IdealProblemsEvaluator::new(args.eval_attribute).with_min_wins(!args.max_wins)),
    )?;
    let records = load_recordset(&args.common)?;
    write_output(&args.common, &report.render(&records)?)
}

pub fn attribute_stats(args: AttributeStatsArgs) -> Result<(), CliError> {
    let report = DomainComparisonReport::new(
        args.algorithms,
        args.attributes,
        OutputFormat::TabularMarkup,
        args.min_group_size,
        Box::new(AttributeStatisticsEvaluator::new()),
    )?;
    let records = load_recordset(&args.common)?;
    write_output(&args.common, &report.render(&records)?)
}

/// Parse one `left:right[:min_improvement[:quantile]]` descriptor.
fn parse_comparison(pair: &str) -> Result<Comparison, CliError> {
    let parts: Vec<&str> = pair.split(':').collect();
    if parts.len() < 2 || parts.len() > 4 {
        return Err(RevalError::config(format!(
            "comparison '{}' is not left:right[:min_improvement[:quantile]]",
            pair
        ))
        .into());
    }
    let mut comparison = Comparison::new(parts[0], parts[1]);
    if let Some(raw) = parts.get(2) {
        let min_improvement = raw.parse::<f64>().map_err(|_| {
            RevalError::config(format!("invalid min_improvement in '{}'", pair))
        })?;
        comparison = comparison.with_min_improvement(min_improvement);
    }
    if let Some(raw) = parts.get(3) {
        let quantile = raw
            .parse::<f64>()
            .map_err(|_| RevalError::config(format!("invalid quantile in '{}'", pair)))?;
        comparison = comparison.with_quantile(quantile);
    }
    Ok(comparison)
}

pub fn pairwise(args: PairwiseArgs) -> Result<(), CliError> {
    let comparisons = args
        .comparisons
        .iter()
        .map(|pair| parse_comparison(pair))
        .collect::<Result<Vec<Comparison>, CliError>>()?;
    let report = AlgorithmComparisonReport::new(
        comparisons,
        vec![args.attribute],
        OutputFormat::TabularMarkup,
    )?
    .with_min_improvement(args.min_improvement)
    .with_quantile(args.quantile);
    let records = load_recordset(&args.common)?;
    write_output(&args.common, &report.render(&records)?)
}

pub fn histogram(args: HistogramArgs) -> Result<(), CliError> {
    let report = HistogramReport::new(args.attribute, args.count, OutputFormat::Csv)?
        .with_bounds(args.min, args.max)?
        .with_domain_breakdown(!args.no_domains);
    let records = load_recordset(&args.common)?;
    write_output(&args.common, &report.render(&records)?)
}

pub fn best_worst(args: BestWorstArgs) -> Result<(), CliError> {
    let report = BestWorstReport::new(
        args.algorithm,
        args.stats_attribute,
        args.eval_attribute,
        args.n_best,
        args.n_worst,
        OutputFormat::Csv,
    )?
    .with_min_wins(!args.max_wins)
    .with_distinct_domains(args.distinct_domains);
    let records = load_recordset(&args.common)?;
    write_output(&args.common, &report.render(&records)?)
}

pub fn scatter(args: ScatterArgs) -> Result<(), CliError> {
    let format = parse_format(&args.format)?;
    let mut report = RelativeScatterReport::new(
        args.left,
        args.right,
        vec![args.attribute],
        format,
    )?
    .with_limits(
        args.xlim_left,
        args.xlim_right,
        args.ylim_bottom,
        args.ylim_top,
    );
    if args.by_domain {
        report = report.with_category_fn(Box::new(|left, _| left.domain.clone()));
    }
    let records = load_recordset(&args.common)?;
    let content = match format {
        OutputFormat::TabularMarkup => report.render_pgf(&records)?,
        // plot primitives go to the external plot backend as JSON
        _ => {
            let data = report.compute(&records)?;
            serde_json::to_string_pretty(&data).map_err(|e| {
                RevalError::conversion(format!("plot primitives serialization failed: {}", e))
            })?
        }
    };
    write_output(&args.common, &content)
}

pub fn ranked(args: RankedArgs) -> Result<(), CliError> {
    let report = RankedDomainReport::new(
        vec![args.attribute],
        args.n_best,
        OutputFormat::TabularMarkup,
    )?
    .with_total(args.total);
    let records = load_recordset(&args.common)?;
    write_output(&args.common, &report.render(&records)?)
}
