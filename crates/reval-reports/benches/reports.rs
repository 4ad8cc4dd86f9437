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

//! Benchmarks for the grouping pipeline and the heavier reports.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reval_core::{OutputFormat, RecordSet, RunRecord};
use reval_reports::{DomainComparisonReport, HistogramReport, OptimalityEvaluator};

/// 40 domains x 30 problems x 4 algorithms.
fn synthetic_records() -> RecordSet {
    let mut records = Vec::new();
    for d in 0..40 {
        for p in 0..30 {
            for a in 0..4 {
                let expansions = ((d * 31 + p * 17 + a * 7) % 1000) as i64 + 1;
                records.push(
                    RunRecord::new(
                        format!("a{}-d{}-p{}", a, d, p),
                        format!("d{}", d),
                        format!("p{}", p),
                        format!("a{}", a),
                    )
                    .with_attribute("expansions", expansions),
                );
            }
        }
    }
    RecordSet::from_records(records)
}

fn bench_optimality(c: &mut Criterion) {
    let records = synthetic_records();
    let report = DomainComparisonReport::new(
        (0..4).map(|a| format!("a{}", a)).collect(),
        vec!["expansions".to_string()],
        OutputFormat::TabularMarkup,
        10,
        Box::new(OptimalityEvaluator::new()),
    )
    .unwrap();
    c.bench_function("optimality_report", |b| {
        b.iter(|| report.render(black_box(&records)).unwrap())
    });
}

fn bench_histogram(c: &mut Criterion) {
    let records = synthetic_records();
    let histogram = HistogramReport::new("expansions", 100, OutputFormat::Csv).unwrap();
    c.bench_function("histogram_report", |b| {
        b.iter(|| histogram.render(black_box(&records)).unwrap())
    });
}

criterion_group!(benches, bench_optimality, bench_histogram);
criterion_main!(benches);
