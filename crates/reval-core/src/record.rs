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

//! Run records and the indexed record collection reports consume.

use crate::value::Value;
use std::collections::{BTreeMap, HashMap};

/// One algorithm's result on one benchmark problem.
///
/// A record always carries `domain`, `problem`, `algorithm` and `id`;
/// everything else lives in the named attribute map. Records are read-only
/// once a [`RecordSet`] has been built from them; the only sanctioned
/// mutation is the domain-pooling rewrite applied beforehand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    /// Unique run identifier (typically `algorithm-domain-problem`).
    pub id: String,
    /// Benchmark domain the problem belongs to.
    pub domain: String,
    /// Problem name within the domain.
    pub problem: String,
    /// Algorithm that produced this run.
    pub algorithm: String,
    /// Named attributes parsed from the run output.
    attributes: BTreeMap<String, Value>,
}

impl RunRecord {
    /// Create a record with no attributes.
    pub fn new(
        id: impl Into<String>,
        domain: impl Into<String>,
        problem: impl Into<String>,
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            domain: domain.into(),
            problem: problem.into(),
            algorithm: algorithm.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute insertion.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns true if the record carries the named attribute.
    pub fn has(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Numeric view of an attribute (integers widen to `f64`).
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).and_then(Value::as_float)
    }

    /// All attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The full record collection plus the standard indexes reports query.
///
/// Indexes are built once at construction; the collection is read-only
/// afterwards. Domain and algorithm enumeration preserves first-seen order,
/// per-problem indexes are sorted by key.
#[derive(Debug, Default)]
pub struct RecordSet {
    records: Vec<RunRecord>,
    domains: Vec<String>,
    algorithms: Vec<String>,
    by_domain_algorithm: HashMap<String, HashMap<String, Vec<usize>>>,
    by_domain_problem: BTreeMap<(String, String), Vec<usize>>,
    by_problem: HashMap<String, Vec<usize>>,
}

impl RecordSet {
    /// Build the collection and its indexes from a list of records.
    pub fn from_records(records: Vec<RunRecord>) -> Self {
        let mut set = Self {
            records,
            ..Self::default()
        };
        for (idx, run) in set.records.iter().enumerate() {
            if !set.domains.iter().any(|d| d == &run.domain) {
                set.domains.push(run.domain.clone());
            }
            if !set.algorithms.iter().any(|a| a == &run.algorithm) {
                set.algorithms.push(run.algorithm.clone());
            }
            set.by_domain_algorithm
                .entry(run.domain.clone())
                .or_default()
                .entry(run.algorithm.clone())
                .or_default()
                .push(idx);
            set.by_domain_problem
                .entry((run.domain.clone(), run.problem.clone()))
                .or_default()
                .push(idx);
            set.by_problem
                .entry(run.problem.clone())
                .or_default()
                .push(idx);
        }
        set
    }

    /// All records in input order.
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Domains in first-seen order.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Algorithms in first-seen order.
    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    /// Runs of one algorithm within one domain.
    pub fn domain_algorithm_runs(&self, domain: &str, algorithm: &str) -> Vec<&RunRecord> {
        self.by_domain_algorithm
            .get(domain)
            .and_then(|algos| algos.get(algorithm))
            .map(|idxs| idxs.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// All (domain, problem) groups with their runs, sorted by key.
    pub fn problem_runs(&self) -> impl Iterator<Item = ((&str, &str), Vec<&RunRecord>)> {
        self.by_domain_problem.iter().map(|((d, p), idxs)| {
            (
                (d.as_str(), p.as_str()),
                idxs.iter().map(|&i| &self.records[i]).collect(),
            )
        })
    }

    /// Distinct problems of one domain, sorted by name.
    pub fn domain_problems(&self, domain: &str) -> Vec<&str> {
        self.by_domain_problem
            .range((domain.to_string(), String::new())..)
            .take_while(|((d, _), _)| d == domain)
            .map(|((_, p), _)| p.as_str())
            .collect()
    }

    /// Runs matching a problem name across all domains.
    pub fn runs_for_problem(&self, problem: &str) -> Vec<&RunRecord> {
        self.by_problem
            .get(problem)
            .map(|idxs| idxs.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, domain: &str, problem: &str, algorithm: &str) -> RunRecord {
        RunRecord::new(id, domain, problem, algorithm)
    }

    // ==================== RunRecord tests ====================

    #[test]
    fn test_record_attributes() {
        let run = record("1", "gripper", "prob01", "random")
            .with_attribute("expansions", 120i64)
            .with_attribute("search_time", 0.25);
        assert_eq!(run.get("expansions"), Some(&Value::Int(120)));
        assert_eq!(run.get_float("expansions"), Some(120.0));
        assert_eq!(run.get_float("search_time"), Some(0.25));
        assert!(run.has("search_time"));
        assert!(!run.has("memory"));
    }

    #[test]
    fn test_record_insert_replaces() {
        let mut run = record("1", "d", "p", "a");
        run.insert("coverage", 0i64);
        run.insert("coverage", 1i64);
        assert_eq!(run.get("coverage"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_record_attributes_iterate_sorted() {
        let run = record("1", "d", "p", "a")
            .with_attribute("zeta", 1i64)
            .with_attribute("alpha", 2i64);
        let names: Vec<&str> = run.attributes().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    // ==================== RecordSet index tests ====================

    fn sample_set() -> RecordSet {
        RecordSet::from_records(vec![
            record("1", "gripper", "prob01", "random"),
            record("2", "gripper", "prob01", "min_cg"),
            record("3", "gripper", "prob02", "random"),
            record("4", "depot", "p01", "random"),
            record("5", "depot", "p01", "min_cg"),
        ])
    }

    #[test]
    fn test_recordset_first_seen_order() {
        let set = sample_set();
        assert_eq!(set.domains(), &["gripper".to_string(), "depot".to_string()]);
        assert_eq!(
            set.algorithms(),
            &["random".to_string(), "min_cg".to_string()]
        );
    }

    #[test]
    fn test_recordset_domain_algorithm_runs() {
        let set = sample_set();
        let runs = set.domain_algorithm_runs("gripper", "random");
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|r| r.algorithm == "random"));
        assert!(set.domain_algorithm_runs("depot", "max_cg").is_empty());
    }

    #[test]
    fn test_recordset_problem_runs_sorted() {
        let set = sample_set();
        let keys: Vec<(String, String)> = set
            .problem_runs()
            .map(|((d, p), _)| (d.to_string(), p.to_string()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("depot".to_string(), "p01".to_string()),
                ("gripper".to_string(), "prob01".to_string()),
                ("gripper".to_string(), "prob02".to_string()),
            ]
        );
    }

    #[test]
    fn test_recordset_domain_problems() {
        let set = sample_set();
        assert_eq!(set.domain_problems("gripper"), vec!["prob01", "prob02"]);
        assert_eq!(set.domain_problems("depot"), vec!["p01"]);
        assert!(set.domain_problems("missing").is_empty());
    }

    #[test]
    fn test_recordset_runs_for_problem() {
        let set = sample_set();
        assert_eq!(set.runs_for_problem("prob01").len(), 2);
        assert_eq!(set.runs_for_problem("p01").len(), 2);
        assert!(set.runs_for_problem("missing").is_empty());
    }

    #[test]
    fn test_recordset_empty() {
        let set = RecordSet::from_records(vec![]);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.domains().is_empty());
    }
}
