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

//! Grouping and filtering pipeline.
//!
//! Turns the flat record collection into a domain → problem → algorithm-slot
//! matrix, then drops problems not solved by every configured algorithm and
//! domains with too few surviving problems.

use crate::error::{RevalError, RevalResult};
use crate::record::{RecordSet, RunRecord};
use std::collections::BTreeMap;

/// Configuration of the grouping pipeline.
///
/// The algorithm list order defines the slot order of every problem entry
/// (and thereby column order in rendered tables).
#[derive(Debug, Clone)]
pub struct GroupingConfig {
    algorithms: Vec<String>,
    attributes: Vec<String>,
    min_group_size: usize,
}

impl GroupingConfig {
    /// Validate and create a pipeline configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `algorithms` is empty or contains
    /// duplicates.
    pub fn new(
        algorithms: Vec<String>,
        attributes: Vec<String>,
        min_group_size: usize,
    ) -> RevalResult<Self> {
        if algorithms.is_empty() {
            return Err(RevalError::config("report needs at least one algorithm"));
        }
        for (i, alg) in algorithms.iter().enumerate() {
            if algorithms[..i].contains(alg) {
                return Err(RevalError::config(
                    "'algorithms' may not contain duplicates",
                ));
            }
        }
        Ok(Self {
            algorithms,
            attributes,
            min_group_size,
        })
    }

    /// Configured algorithms in slot order.
    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    /// Attributes every accepted record must carry.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Minimum surviving problem count per domain; values < 1 disable
    /// the filter.
    pub fn min_group_size(&self) -> usize {
        self.min_group_size
    }

    /// Build the filtered group matrix from the record collection.
    ///
    /// Records with an unconfigured algorithm or a missing required
    /// attribute are rejected. A problem survives only with every slot
    /// filled; a domain survives only with at least `min_group_size`
    /// problems. Duplicate records for the same slot overwrite earlier
    /// ones.
    pub fn build<'a>(&self, records: &'a RecordSet) -> GroupMatrix<'a> {
        let slot_count = self.algorithms.len();
        let mut slots: BTreeMap<String, BTreeMap<String, Vec<Option<&'a RunRecord>>>> =
            BTreeMap::new();
        for run in records.records() {
            let Some(slot) = self.algorithms.iter().position(|a| a == &run.algorithm) else {
                continue;
            };
            if self.attributes.iter().any(|attr| !run.has(attr)) {
                continue;
            }
            slots
                .entry(run.domain.clone())
                .or_default()
                .entry(run.problem.clone())
                .or_insert_with(|| vec![None; slot_count])[slot] = Some(run);
        }
        // drop problems not solved by all algorithms, then thin domains
        let mut domains: BTreeMap<String, BTreeMap<String, Vec<&'a RunRecord>>> = BTreeMap::new();
        for (domain, problems) in slots {
            let complete: BTreeMap<String, Vec<&'a RunRecord>> = problems
                .into_iter()
                .filter_map(|(problem, algos)| {
                    algos
                        .into_iter()
                        .collect::<Option<Vec<_>>>()
                        .map(|full| (problem, full))
                })
                .collect();
            if complete.len() >= self.min_group_size.max(1) {
                domains.insert(domain, complete);
            }
        }
        GroupMatrix { domains }
    }
}

/// The filtered domain → problem → algorithm-slot matrix.
///
/// Every problem entry holds exactly one record per configured algorithm,
/// in configuration order. Rebuilt fresh per report invocation.
#[derive(Debug)]
pub struct GroupMatrix<'a> {
    domains: BTreeMap<String, BTreeMap<String, Vec<&'a RunRecord>>>,
}

impl<'a> GroupMatrix<'a> {
    /// The explicit no-data signal: nothing survived filtering.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Number of surviving domains.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Surviving domains with their problems, sorted by name.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&str, &BTreeMap<String, Vec<&'a RunRecord>>)> {
        self.domains.iter().map(|(d, p)| (d.as_str(), p))
    }

    /// All problem entries across every domain, sorted by domain then
    /// problem.
    pub fn all_problems(&self) -> impl Iterator<Item = (&str, &str, &[&'a RunRecord])> {
        self.domains.iter().flat_map(|(d, problems)| {
            problems
                .iter()
                .map(move |(p, algos)| (d.as_str(), p.as_str(), algos.as_slice()))
        })
    }
}
