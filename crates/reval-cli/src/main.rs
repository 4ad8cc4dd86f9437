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

//! REVAL Command Line Interface

use clap::Parser;
use reval_cli::cli::Commands;
use std::process::ExitCode;

/// REVAL - benchmark run evaluation reports
///
/// Aggregates the results of many algorithm runs over many benchmark
/// problems and renders comparative statistics as tables and plot
/// primitives.
///
/// # Examples
///
/// ```bash
/// # Optimality table over two algorithms
/// reval optimality properties.json -a random,min_cg --attribute expansions
///
/// # Histogram of an attribute, 50 bins
/// reval histogram properties.json --attribute split_time --count 50
///
/// # Pairwise comparison with a custom threshold
/// reval pairwise properties.json --attribute expansions --compare min_cg:random:0.1
/// ```
#[derive(Parser)]
#[command(name = "reval")]
#[command(author, version, about = "REVAL - benchmark run evaluation reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
