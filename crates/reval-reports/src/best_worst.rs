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

//! Best/worst exemplar selection for one target algorithm.
//!
//! Ranks problems by how the target performed relative to its
//! competitors and dumps the target's per-threshold statistics for the
//! strongest and weakest exemplars side by side.

use crate::csv_out::csv_string;
use reval_core::format::{check_format, fmt_sig};
use reval_core::{OutputFormat, RecordSet, RevalError, RevalResult, RunRecord, Value};

/// A problem's normalized score together with the target's run.
struct Candidate<'a> {
    /// 0 = best possible among competitors, 1 = worst, 0.5 when all
    /// competitors tie and the selection is non-informative.
    score: f64,
    run: &'a RunRecord,
}

/// Selects the target algorithm's `n_best` strongest and `n_worst`
/// weakest problems and renders their per-threshold statistics as CSV
/// columns.
#[derive(Debug)]
pub struct BestWorstReport {
    algorithm: String,
    stats_attribute: String,
    eval_attribute: String,
    min_wins: bool,
    n_best: usize,
    n_worst: usize,
    distinct_domains: bool,
}

impl BestWorstReport {
    /// Select exemplars for `algorithm`, ranking by `eval_attribute` and
    /// dumping the pair-list `stats_attribute`.
    ///
    /// # Errors
    ///
    /// Fails if both selection counts are zero or `format` is not CSV.
    pub fn new(
        algorithm: impl Into<String>,
        stats_attribute: impl Into<String>,
        eval_attribute: impl Into<String>,
        n_best: usize,
        n_worst: usize,
        format: OutputFormat,
    ) -> RevalResult<Self> {
        check_format(format, &[OutputFormat::Csv])?;
        if n_best == 0 && n_worst == 0 {
            return Err(RevalError::config("report must select at least one run"));
        }
        Ok(Self {
            algorithm: algorithm.into(),
            stats_attribute: stats_attribute.into(),
            eval_attribute: eval_attribute.into(),
            min_wins: true,
            n_best,
            n_worst,
            distinct_domains: false,
        })
    }

    /// Select whether lower or higher evaluation values are better.
    pub fn with_min_wins(mut self, min_wins: bool) -> Self {
        self.min_wins = min_wins;
        self
    }

    /// Enforce that no two exemplars, across both sets, share a domain.
    pub fn with_distinct_domains(mut self, distinct_domains: bool) -> Self {
        self.distinct_domains = distinct_domains;
        self
    }

    fn collect_candidates<'a>(&self, records: &'a RecordSet) -> Vec<Candidate<'a>> {
        let mut candidates = Vec::new();
        for (_, runs) in records.problem_runs() {
            let Some(target) = runs.iter().find(|r| r.algorithm == self.algorithm) else {
                continue;
            };
            let Some(value) = target.get_float(&self.eval_attribute) else {
                continue;
            };
            if !target
                .get(&self.stats_attribute)
                .is_some_and(Value::is_populated)
            {
                continue;
            }
            let competitors: Vec<f64> = runs
                .iter()
                .filter_map(|r| r.get_float(&self.eval_attribute))
                .collect();
            let min = competitors.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = competitors
                .iter()
                .cloned()
                .fold(f64::NEG_INFINITY, f64::max);
            let score = if min < max {
                let distance = if self.min_wins { value - min } else { max - value };
                distance / (max - min)
            } else {
                // prefer samples where the selection matters
                0.5
            };
            candidates.push(Candidate {
                score,
                run: target,
            });
        }
        candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
        candidates
    }

    /// Plain top/bottom selection; falls back to an all-best listing when
    /// the candidate pool is no larger than the request.
    fn select_plain<'c, 'a>(
        &self,
        candidates: &'c [Candidate<'a>],
    ) -> (Vec<String>, Vec<&'c Candidate<'a>>) {
        let mut header = Vec::new();
        let mut picks = Vec::new();
        if candidates.len() > self.n_best + self.n_worst {
            header.extend((0..self.n_best).map(|i| format!("best_{}", i + 1)));
            picks.extend(candidates[..self.n_best].iter());
            header.extend((0..self.n_worst).map(|i| format!("worst_{}", i + 1)));
            picks.extend(candidates[candidates.len() - self.n_worst..].iter());
        } else {
            header.extend((0..candidates.len()).map(|i| format!("best_{}", i + 1)));
            picks.extend(candidates.iter());
        }
        (header, picks)
    }

    /// Domain-distinct selection: the best scan walks the ranking from
    /// the front, the worst scan from the back, and no domain is used
    /// twice across both sets. The first candidate of a domain in scan
    /// order wins.
    fn select_distinct<'c, 'a>(
        &self,
        candidates: &'c [Candidate<'a>],
    ) -> RevalResult<(Vec<String>, Vec<&'c Candidate<'a>>)> {
        let mut used: Vec<&str> = Vec::new();
        let mut best = Vec::new();
        for candidate in candidates {
            if best.len() == self.n_best {
                break;
            }
            if !used.contains(&candidate.run.domain.as_str()) {
                used.push(&candidate.run.domain);
                best.push(candidate);
            }
        }
        let mut worst = Vec::new();
        for candidate in candidates.iter().rev() {
            if worst.len() == self.n_worst {
                break;
            }
            if !used.contains(&candidate.run.domain.as_str()) {
                used.push(&candidate.run.domain);
                worst.push(candidate);
            }
        }
        if best.len() < self.n_best || worst.len() < self.n_worst {
            return Err(RevalError::selection(format!(
                "fewer than {} domain-distinct candidates",
                self.n_best + self.n_worst
            )));
        }
        // back-to-front scan; restore ascending score order
        worst.reverse();
        let mut header: Vec<String> =
            (0..self.n_best).map(|i| format!("best_{}", i + 1)).collect();
        header.extend((0..self.n_worst).map(|i| format!("worst_{}", i + 1)));
        let mut picks = best;
        picks.extend(worst);
        Ok((header, picks))
    }

    /// Rank, select and render.
    ///
    /// An empty candidate pool is a reportable result, not an error; an
    /// unsatisfiable domain-distinct selection is a defined failure.
    pub fn render(&self, records: &RecordSet) -> RevalResult<String> {
        let candidates = self.collect_candidates(records);
        if candidates.is_empty() {
            return Ok("No suitable candidates".to_string());
        }
        let (names, picks) = if self.distinct_domains {
            self.select_distinct(&candidates)?
        } else {
            self.select_plain(&candidates)
        };

        let stats: Vec<&[(f64, f64)]> = picks
            .iter()
            .map(|c| {
                c.run
                    .get(&self.stats_attribute)
                    .and_then(Value::as_pairs)
                    .unwrap_or(&[])
            })
            .collect();
        // row axis: union of all threshold keys, ascending
        let mut marks: Vec<f64> = stats
            .iter()
            .flat_map(|pairs| pairs.iter().map(|(mark, _)| *mark))
            .collect();
        marks.sort_by(f64::total_cmp);
        marks.dedup_by(|a, b| a.total_cmp(b).is_eq());

        let mut rows = Vec::new();
        let mut header = vec!["N".to_string()];
        header.extend(names);
        rows.push(header);
        for mark in marks {
            let mut row = vec![fmt_sig(mark, 7)];
            for pairs in &stats {
                let cell = pairs
                    .iter()
                    .find(|(m, _)| m.total_cmp(&mark).is_eq())
                    .map(|(_, v)| fmt_sig(*v, 7))
                    .unwrap_or_default();
                row.push(cell);
            }
            rows.push(row);
        }
        csv_string(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reval_core::RunRecord;

    fn run(domain: &str, problem: &str, algorithm: &str, cost: f64) -> RunRecord {
        RunRecord::new(
            format!("{}-{}-{}", algorithm, domain, problem),
            domain,
            problem,
            algorithm,
        )
        .with_attribute("cost", cost)
        .with_attribute("h_stats", vec![(0.1, cost * 2.0), (0.2, cost * 3.0)])
    }

    fn report(n_best: usize, n_worst: usize) -> BestWorstReport {
        BestWorstReport::new("T", "h_stats", "cost", n_best, n_worst, OutputFormat::Csv)
            .unwrap()
    }

    // ==================== configuration ====================

    #[test]
    fn test_zero_selection_rejected() {
        let err =
            BestWorstReport::new("T", "h_stats", "cost", 0, 0, OutputFormat::Csv).unwrap_err();
        assert!(format!("{}", err).contains("at least one run"));
    }

    #[test]
    fn test_markup_format_rejected() {
        let err = BestWorstReport::new("T", "h_stats", "cost", 1, 0, OutputFormat::TabularMarkup)
            .unwrap_err();
        assert!(format!("{}", err).contains("unsupported format"));
    }

    // ==================== scoring ====================

    #[test]
    fn test_reference_scores() {
        // P1: {T:5, X:10} => 0.0; P2: {T:5, X:5} => 0.5
        let records = reval_core::RecordSet::from_records(vec![
            run("d", "P1", "T", 5.0),
            run("d", "P1", "X", 10.0),
            run("d", "P2", "T", 5.0),
            run("d", "P2", "X", 5.0),
        ]);
        let candidates = report(1, 0).collect_candidates(&records);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].score, 0.0);
        assert_eq!(candidates[0].run.problem, "P1");
        assert_eq!(candidates[1].score, 0.5);
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let records = reval_core::RecordSet::from_records(vec![
            run("d", "P1", "T", 7.0),
            run("d", "P1", "X", 1.0),
            run("d", "P1", "Y", 9.0),
        ]);
        let candidates = report(1, 0).collect_candidates(&records);
        assert!(candidates[0].score >= 0.0 && candidates[0].score <= 1.0);
    }

    #[test]
    fn test_max_wins_scoring() {
        let records = reval_core::RecordSet::from_records(vec![
            run("d", "P1", "T", 10.0),
            run("d", "P1", "X", 2.0),
        ]);
        let rep = report(1, 0).with_min_wins(false);
        let candidates = rep.collect_candidates(&records);
        // highest value with max_wins scores 0 (best)
        assert_eq!(candidates[0].score, 0.0);
    }

    #[test]
    fn test_candidate_requires_populated_stats() {
        let mut bare = run("d", "P1", "T", 5.0);
        bare.insert("h_stats", Vec::<(f64, f64)>::new());
        let records =
            reval_core::RecordSet::from_records(vec![bare, run("d", "P1", "X", 10.0)]);
        assert!(report(1, 0).collect_candidates(&records).is_empty());
    }

    // ==================== selection & rendering ====================

    #[test]
    fn test_render_best_and_worst_columns() {
        let records = reval_core::RecordSet::from_records(vec![
            run("d1", "P1", "T", 1.0),
            run("d1", "P1", "X", 9.0),
            run("d2", "P2", "T", 8.0),
            run("d2", "P2", "X", 2.0),
            run("d3", "P3", "T", 5.0),
            run("d3", "P3", "X", 5.0),
        ]);
        let text = report(1, 1).render(&records).unwrap();
        // P1 scores 0.0 (best), P2 scores 1.0 (worst), P3 in between
        let expected = "N,best_1,worst_1\n\
                        0.1,2,16\n\
                        0.2,3,24";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_small_pool_lists_everything_as_best() {
        let records = reval_core::RecordSet::from_records(vec![
            run("d1", "P1", "T", 1.0),
            run("d1", "P1", "X", 9.0),
            run("d2", "P2", "T", 8.0),
            run("d2", "P2", "X", 2.0),
        ]);
        let text = report(3, 2).render(&records).unwrap();
        assert!(text.starts_with("N,best_1,best_2\n"));
    }

    #[test]
    fn test_no_candidates_is_reportable() {
        let records = reval_core::RecordSet::from_records(vec![run("d", "P1", "X", 1.0)]);
        assert_eq!(report(1, 0).render(&records).unwrap(), "No suitable candidates");
    }

    #[test]
    fn test_distinct_domains_skips_repeats() {
        let records = reval_core::RecordSet::from_records(vec![
            run("d1", "P1", "T", 1.0),
            run("d1", "P1", "X", 9.0),
            run("d1", "P2", "T", 2.0),
            run("d1", "P2", "X", 9.0),
            run("d2", "P3", "T", 3.0),
            run("d2", "P3", "X", 9.0),
            run("d3", "P4", "T", 9.0),
            run("d3", "P4", "X", 1.0),
        ]);
        let rep = report(2, 1).with_distinct_domains(true);
        let candidates = rep.collect_candidates(&records);
        let (names, picks) = rep.select_distinct(&candidates).unwrap();
        assert_eq!(names, vec!["best_1", "best_2", "worst_1"]);
        // P2 is skipped: d1 is already represented by P1
        let problems: Vec<&str> = picks.iter().map(|c| c.run.problem.as_str()).collect();
        assert_eq!(problems, vec!["P1", "P3", "P4"]);
    }

    #[test]
    fn test_distinct_domains_exhaustion_fails() {
        let records = reval_core::RecordSet::from_records(vec![
            run("d1", "P1", "T", 1.0),
            run("d1", "P1", "X", 9.0),
            run("d1", "P2", "T", 2.0),
            run("d1", "P2", "X", 9.0),
        ]);
        let err = report(1, 1)
            .with_distinct_domains(true)
            .render(&records)
            .unwrap_err();
        assert!(format!("{}", err).contains("domain-distinct"));
    }
}
