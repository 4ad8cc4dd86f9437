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

//! Domain pooling: merge near-duplicate benchmark sets under one name.
//!
//! Benchmark suites often ship the same domain in several editions
//! (`elevators-opt08-strips`, `elevators-opt11-strips`, ...). Pooling
//! rewrites each record's `domain` to the pooled group name and prefixes
//! `problem` with the original domain so problem names stay unique. This
//! is the only record mutation in the system and must run before a
//! [`RecordSet`](crate::RecordSet) is built.

use crate::error::{RevalError, RevalResult};
use crate::record::RunRecord;
use std::collections::HashMap;

/// A mapping from pooled group name to its member domains.
#[derive(Debug, Clone, Default)]
pub struct DomainPooling {
    renames: HashMap<String, String>,
}

impl DomainPooling {
    /// Build the rename table from (group, members) pairs.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a domain appears in more than one
    /// group.
    pub fn new<G, M, D>(groups: G) -> RevalResult<Self>
    where
        G: IntoIterator<Item = (M, Vec<D>)>,
        M: Into<String>,
        D: Into<String>,
    {
        let mut renames = HashMap::new();
        for (group, members) in groups {
            let group = group.into();
            for member in members {
                let member = member.into();
                if renames.insert(member.clone(), group.clone()).is_some() {
                    return Err(RevalError::config(format!(
                        "domain '{}' is pooled into more than one group",
                        member
                    )));
                }
            }
        }
        Ok(Self { renames })
    }

    /// Number of member domains covered by the table.
    pub fn len(&self) -> usize {
        self.renames.len()
    }

    /// Returns true if the table covers no domains.
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// Rewrite one record in place.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the record's domain is not in the
    /// table; pooled reports must cover every domain they see.
    pub fn apply(&self, run: &mut RunRecord) -> RevalResult<()> {
        let Some(group) = self.renames.get(&run.domain) else {
            return Err(RevalError::config(format!(
                "domain '{}' has no pooling group",
                run.domain
            )));
        };
        run.problem = format!("{}-{}", run.domain, run.problem);
        run.domain = group.clone();
        Ok(())
    }

    /// Rewrite a whole record list in place.
    pub fn apply_all(&self, runs: &mut [RunRecord]) -> RevalResult<()> {
        for run in runs {
            self.apply(run)?;
        }
        Ok(())
    }
}
