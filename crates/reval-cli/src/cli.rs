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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments shared by every report command.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Properties file with run records (JSON object keyed by run id)
    #[arg(value_name = "PROPERTIES")]
    pub properties: PathBuf,

    /// Domain pooling table (JSON object: group name -> member domains)
    #[arg(long, value_name = "FILE")]
    pub pool: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Optimality table arguments.
#[derive(Args, Debug)]
pub struct OptimalityArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Algorithms in column order (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub algorithms: Vec<String>,

    /// Attribute to evaluate
    #[arg(long)]
    pub attribute: String,

    /// Relative margin added to the best value
    #[arg(long, default_value_t = 0.0)]
    pub optimum_bound: f64,

    /// Highlighting quantile for near-always/never optimal cells
    #[arg(long, default_value_t = 0.1)]
    pub quantile: f64,

    /// Drop domains with fewer surviving problems
    #[arg(long, default_value_t = 10)]
    pub min_group_size: usize,
}

/// Per-domain statistics arguments.
#[derive(Args, Debug)]
pub struct StatisticsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Algorithms in column order (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub algorithms: Vec<String>,

    /// Algorithm whose runs are summarized
    #[arg(long)]
    pub algorithm: String,

    /// Attributes to summarize (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub attributes: Vec<String>,

    /// Output format (tabular-markup, csv)
    #[arg(short, long, default_value = "tabular-markup")]
    pub format: String,

    /// Drop domains with fewer surviving problems
    #[arg(long, default_value_t = 10)]
    pub min_group_size: usize,
}

/// Ideal-problem dump arguments.
#[derive(Args, Debug)]
pub struct IdealArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Algorithms in column order (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub algorithms: Vec<String>,

    /// Attributes to request; must include the evaluation attribute
    #[arg(long, value_delimiter = ',', required = true)]
    pub attributes: Vec<String>,

    /// Attribute deciding the best algorithm
    #[arg(long)]
    pub eval_attribute: String,

    /// Treat higher values as better
    #[arg(long)]
    pub max_wins: bool,

    /// Drop domains with fewer surviving problems
    #[arg(long, default_value_t = 10)]
    pub min_group_size: usize,
}

/// Pooled attribute statistics arguments.
#[derive(Args, Debug)]
pub struct AttributeStatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Algorithms in column order (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub algorithms: Vec<String>,

    /// Attributes to summarize (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub attributes: Vec<String>,

    /// Drop domains with fewer surviving problems
    #[arg(long, default_value_t = 10)]
    pub min_group_size: usize,
}

/// Pairwise win/loss comparison arguments.
#[derive(Args, Debug)]
pub struct PairwiseArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Attribute to compare on
    #[arg(long)]
    pub attribute: String,

    /// Pair to compare: left:right[:min_improvement[:quantile]]
    /// (repeatable)
    #[arg(long = "compare", value_name = "PAIR", required = true)]
    pub comparisons: Vec<String>,

    /// Improvement threshold a win must exceed
    #[arg(long, default_value_t = 0.0)]
    pub min_improvement: f64,

    /// Flagging quantile; 0.5 or more disables highlighting
    #[arg(long, default_value_t = 0.5)]
    pub quantile: f64,
}

/// Histogram arguments.
#[derive(Args, Debug)]
pub struct HistogramArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Attribute to bin
    #[arg(long)]
    pub attribute: String,

    /// Number of equal-width bins
    #[arg(long, default_value_t = 100)]
    pub count: usize,

    /// Lower bound (inferred from the data if omitted)
    #[arg(long)]
    pub min: Option<f64>,

    /// Upper bound (inferred from the data if omitted)
    #[arg(long)]
    pub max: Option<f64>,

    /// Omit the per-domain columns
    #[arg(long)]
    pub no_domains: bool,
}

/// Best/worst exemplar selection arguments.
#[derive(Args, Debug)]
pub struct BestWorstArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Target algorithm
    #[arg(long)]
    pub algorithm: String,

    /// Pair-list attribute to dump per exemplar
    #[arg(long)]
    pub stats_attribute: String,

    /// Attribute the ranking is computed on
    #[arg(long)]
    pub eval_attribute: String,

    /// Number of strong exemplars
    #[arg(long, default_value_t = 1)]
    pub n_best: usize,

    /// Number of weak exemplars
    #[arg(long, default_value_t = 0)]
    pub n_worst: usize,

    /// Treat higher values as better
    #[arg(long)]
    pub max_wins: bool,

    /// Allow at most one exemplar per domain
    #[arg(long)]
    pub distinct_domains: bool,
}

/// Relative scatter arguments.
#[derive(Args, Debug)]
pub struct ScatterArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Algorithm on the x axis
    #[arg(long)]
    pub left: String,

    /// Algorithm whose ratio to the left is the y axis
    #[arg(long)]
    pub right: String,

    /// Attribute to compare on
    #[arg(long)]
    pub attribute: String,

    /// Output format (plot-primitives, tabular-markup)
    #[arg(short, long, default_value = "plot-primitives")]
    pub format: String,

    /// Fixed left x bound
    #[arg(long)]
    pub xlim_left: Option<f64>,

    /// Fixed right x bound
    #[arg(long)]
    pub xlim_right: Option<f64>,

    /// Fixed bottom y bound
    #[arg(long)]
    pub ylim_bottom: Option<f64>,

    /// Fixed top y bound
    #[arg(long)]
    pub ylim_top: Option<f64>,

    /// Group points by domain
    #[arg(long)]
    pub by_domain: bool,
}

/// Ranked-domain table arguments.
#[derive(Args, Debug)]
pub struct RankedArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Attribute to sum per domain
    #[arg(long)]
    pub attribute: String,

    /// Number of top domains to list
    #[arg(long, default_value_t = 5)]
    pub n_best: usize,

    /// Append a Total row over all domains
    #[arg(long)]
    pub total: bool,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Table of how often each algorithm is (near-)optimal per domain
    Optimality(OptimalityArgs),

    /// Min/max/mean/stddev of one algorithm's attributes per domain
    Statistics(StatisticsArgs),

    /// One CSV row per problem naming the best algorithm
    Ideal(IdealArgs),

    /// Pooled per-algorithm mean and stddev of attributes
    AttributeStats(AttributeStatsArgs),

    /// Win/loss tallies for algorithm pairs per domain
    Pairwise(PairwiseArgs),

    /// Histogram of one attribute's value distribution
    Histogram(HistogramArgs),

    /// Best/worst exemplar problems for one algorithm
    BestWorst(BestWorstArgs),

    /// Relative scatter of two algorithms on one attribute
    Scatter(ScatterArgs),

    /// Domains ranked by a summed attribute
    Ranked(RankedArgs),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns a [`CliError`] if input loading, report configuration or
    /// rendering fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Optimality(args) => commands::optimality(args),
            Commands::Statistics(args) => commands::statistics(args),
            Commands::Ideal(args) => commands::ideal(args),
            Commands::AttributeStats(args) => commands::attribute_stats(args),
            Commands::Pairwise(args) => commands::pairwise(args),
            Commands::Histogram(args) => commands::histogram(args),
            Commands::BestWorst(args) => commands::best_worst(args),
            Commands::Scatter(args) => commands::scatter(args),
            Commands::Ranked(args) => commands::ranked(args),
        }
    }
}
