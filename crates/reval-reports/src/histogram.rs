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

//! Histogram binning of one attribute's value distribution.

use crate::csv_out::csv_string;
use reval_core::format::{check_format, fmt_sig};
use reval_core::{OutputFormat, RecordSet, RevalError, RevalResult};

/// Fixed-width binning of one attribute over `[min, max]`, globally and
/// (optionally) per domain.
///
/// Bounds not supplied are inferred from the observed values. The CSV
/// output carries one row per bin boundary plus a trailing zero-count
/// sentinel at `max` for plotting continuity.
#[derive(Debug)]
pub struct HistogramReport {
    attribute: String,
    count: usize,
    min: Option<f64>,
    max: Option<f64>,
    per_domain: bool,
}

impl HistogramReport {
    /// Histogram with inferred bounds and a per-domain breakdown.
    ///
    /// # Errors
    ///
    /// Fails if `count` is zero or `format` is not CSV.
    pub fn new(
        attribute: impl Into<String>,
        count: usize,
        format: OutputFormat,
    ) -> RevalResult<Self> {
        check_format(format, &[OutputFormat::Csv])?;
        if count == 0 {
            return Err(RevalError::config("histogram needs at least one bin"));
        }
        Ok(Self {
            attribute: attribute.into(),
            count,
            min: None,
            max: None,
            per_domain: true,
        })
    }

    /// Fix one or both bounds instead of inferring them.
    ///
    /// # Errors
    ///
    /// Fails if both bounds are given and `min >= max`.
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> RevalResult<Self> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo >= hi {
                return Err(RevalError::config(format!(
                    "min must be below max: {} >= {}",
                    lo, hi
                )));
            }
        }
        self.min = min;
        self.max = max;
        Ok(self)
    }

    /// Enable or disable the per-domain columns.
    pub fn with_domain_breakdown(mut self, per_domain: bool) -> Self {
        self.per_domain = per_domain;
        self
    }

    fn bounds(&self, records: &RecordSet) -> RevalResult<(f64, f64)> {
        let (mut lo, mut hi) = match (self.min, self.max) {
            (Some(lo), Some(hi)) => return Ok((lo, hi)),
            _ => (f64::INFINITY, f64::NEG_INFINITY),
        };
        let mut any = false;
        for run in records.records() {
            if let Some(value) = run.get_float(&self.attribute) {
                any = true;
                lo = lo.min(value);
                hi = hi.max(value);
            }
        }
        if !any {
            return Err(RevalError::no_data(format!(
                "no record has attribute '{}'",
                self.attribute
            )));
        }
        let lo = self.min.unwrap_or(lo);
        let hi = self.max.unwrap_or(hi);
        if lo >= hi {
            return Err(RevalError::no_data(format!(
                "histogram range is empty: {} >= {}",
                lo, hi
            )));
        }
        Ok((lo, hi))
    }

    /// Bin the attribute and render the CSV body.
    pub fn render(&self, records: &RecordSet) -> RevalResult<String> {
        let (min, max) = self.bounds(records)?;
        let delta = max - min;

        let mut bins = vec![0u64; self.count];
        // first-seen domain order; a domain appears even with no
        // in-range values
        let mut domains: Vec<&str> = Vec::new();
        let mut domain_bins: Vec<Vec<u64>> = Vec::new();
        for run in records.records() {
            let domain_idx = match domains.iter().position(|d| *d == run.domain) {
                Some(i) => i,
                None => {
                    domains.push(&run.domain);
                    domain_bins.push(vec![0u64; self.count]);
                    domains.len() - 1
                }
            };
            let Some(value) = run.get_float(&self.attribute) else {
                continue;
            };
            if value < min || value > max {
                continue;
            }
            // clamp guards against a value exactly at max rounding into
            // an out-of-range bin
            let bin = ((self.count as f64 * (value - min) / delta).floor() as usize)
                .min(self.count - 1);
            bins[bin] += 1;
            domain_bins[domain_idx][bin] += 1;
        }

        let mut rows = Vec::new();
        let mut header = vec!["value".to_string(), "count".to_string()];
        if self.per_domain {
            header.extend(domains.iter().map(|d| d.to_string()));
        }
        rows.push(header);
        for (i, count) in bins.iter().enumerate() {
            let boundary = min + delta * i as f64 / self.count as f64;
            let mut row = vec![fmt_sig(boundary, 7), count.to_string()];
            if self.per_domain {
                row.extend(domain_bins.iter().map(|b| b[i].to_string()));
            }
            rows.push(row);
        }
        // zero-count sentinel keeps the final bin visible to plotters
        let mut sentinel = vec![fmt_sig(max, 7), "0".to_string()];
        if self.per_domain {
            sentinel.extend(std::iter::repeat("0".to_string()).take(domains.len()));
        }
        rows.push(sentinel);
        csv_string(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reval_core::RunRecord;

    fn run(domain: &str, problem: &str, value: f64) -> RunRecord {
        RunRecord::new(
            format!("alg-{}-{}", domain, problem),
            domain,
            problem,
            "alg",
        )
        .with_attribute("split_options", value)
    }

    fn histogram(count: usize) -> HistogramReport {
        HistogramReport::new("split_options", count, OutputFormat::Csv).unwrap()
    }

    // ==================== configuration ====================

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = histogram(10).with_bounds(Some(5.0), Some(1.0)).unwrap_err();
        assert!(format!("{}", err).contains("min must be below max"));
    }

    #[test]
    fn test_zero_bins_rejected() {
        let err = HistogramReport::new("x", 0, OutputFormat::Csv).unwrap_err();
        assert!(format!("{}", err).contains("at least one bin"));
    }

    #[test]
    fn test_markup_format_rejected() {
        let err = HistogramReport::new("x", 10, OutputFormat::TabularMarkup).unwrap_err();
        assert!(format!("{}", err).contains("unsupported format"));
    }

    // ==================== binning ====================

    #[test]
    fn test_reference_binning() {
        // values [0,1,2,9,10], count=5 over [0,10]:
        // [0-2):2, [2-4):1, [4-6):0, [6-8):0, [8-10]:2
        let records = reval_core::RecordSet::from_records(vec![
            run("d", "p1", 0.0),
            run("d", "p2", 1.0),
            run("d", "p3", 2.0),
            run("d", "p4", 9.0),
            run("d", "p5", 10.0),
        ]);
        let text = histogram(5)
            .with_bounds(Some(0.0), Some(10.0))
            .unwrap()
            .with_domain_breakdown(false)
            .render(&records)
            .unwrap();
        let expected = "value,count\n\
                        0,2\n\
                        2,1\n\
                        4,0\n\
                        6,0\n\
                        8,2\n\
                        10,0";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_value_at_max_clamped_into_last_bin() {
        let records =
            reval_core::RecordSet::from_records(vec![run("d", "p1", 10.0)]);
        let text = histogram(5)
            .with_bounds(Some(0.0), Some(10.0))
            .unwrap()
            .with_domain_breakdown(false)
            .render(&records)
            .unwrap();
        assert!(text.contains("8,1"));
    }

    #[test]
    fn test_counts_sum_to_in_range_values() {
        let records = reval_core::RecordSet::from_records(vec![
            run("d", "p1", -1.0), // below range
            run("d", "p2", 3.0),
            run("d", "p3", 7.0),
            run("d", "p4", 99.0), // above range
        ]);
        let text = histogram(4)
            .with_bounds(Some(0.0), Some(10.0))
            .unwrap()
            .with_domain_breakdown(false)
            .render(&records)
            .unwrap();
        let total: u64 = text
            .lines()
            .skip(1)
            .map(|l| l.split(',').nth(1).unwrap().parse::<u64>().unwrap())
            .sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_inferred_bounds() {
        let records = reval_core::RecordSet::from_records(vec![
            run("d", "p1", 2.0),
            run("d", "p2", 6.0),
        ]);
        let text = histogram(2)
            .with_domain_breakdown(false)
            .render(&records)
            .unwrap();
        // range [2, 6], width 2: one value per bin, sentinel at 6
        let expected = "value,count\n2,1\n4,1\n6,0";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_missing_attribute_fails() {
        let records = reval_core::RecordSet::from_records(vec![RunRecord::new(
            "1", "d", "p", "alg",
        )]);
        let err = histogram(4).render(&records).unwrap_err();
        assert!(format!("{}", err).contains("no record has attribute"));
    }

    #[test]
    fn test_domain_columns_first_seen_with_empty_domain() {
        let records = reval_core::RecordSet::from_records(vec![
            run("beta", "p1", 1.0),
            // alpha provides no in-range value but must still appear
            RunRecord::new("2", "alpha", "p1", "alg"),
            run("beta", "p2", 3.0),
        ]);
        let text = histogram(2)
            .with_bounds(Some(0.0), Some(4.0))
            .unwrap()
            .render(&records)
            .unwrap();
        let expected = "value,count,beta,alpha\n\
                        0,1,1,0\n\
                        2,1,1,0\n\
                        4,0,0,0";
        assert_eq!(text, expected);
    }
}
