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

//! Loading run records and pooling tables from JSON files.
//!
//! A properties file is one JSON object keyed by run id; each entry
//! carries `domain`, `problem` and `algorithm` plus arbitrary parsed
//! attributes. Attribute values with no [`Value`] representation (nested
//! objects, mixed lists) are skipped.

use crate::error::CliError;
use reval_core::{DomainPooling, RunRecord, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

fn required_str(
    fields: &serde_json::Map<String, serde_json::Value>,
    name: &str,
    path: &Path,
    id: &str,
) -> Result<String, CliError> {
    fields
        .get(name)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::properties_error(
                path,
                format!("run '{}' is missing string field '{}'", id, name),
            )
        })
}

/// Load the record collection from a properties file.
pub fn load_records(path: &Path) -> Result<Vec<RunRecord>, CliError> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
    let entries: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&content).map_err(|e| CliError::json_error(path, e))?;

    let mut records = Vec::with_capacity(entries.len());
    for (id, entry) in entries {
        let serde_json::Value::Object(fields) = entry else {
            return Err(CliError::properties_error(
                path,
                format!("run '{}' is not an object", id),
            ));
        };
        let domain = required_str(&fields, "domain", path, &id)?;
        let problem = required_str(&fields, "problem", path, &id)?;
        let algorithm = required_str(&fields, "algorithm", path, &id)?;
        let mut record = RunRecord::new(id, domain, problem, algorithm);
        for (name, value) in fields {
            if matches!(name.as_str(), "domain" | "problem" | "algorithm" | "id") {
                continue;
            }
            if let Ok(value) = serde_json::from_value::<Value>(value) {
                record.insert(name, value);
            }
        }
        records.push(record);
    }
    Ok(records)
}

/// Load a domain pooling table (JSON object: group name to member list).
pub fn load_pooling(path: &Path) -> Result<DomainPooling, CliError> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
    let groups: HashMap<String, Vec<String>> =
        serde_json::from_str(&content).map_err(|e| CliError::json_error(path, e))?;
    Ok(DomainPooling::new(groups)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_records() {
        let file = write_temp(
            r#"{
                "random-grid-p01": {
                    "domain": "grid",
                    "problem": "p01",
                    "algorithm": "random",
                    "expansions": 120,
                    "search_time": 0.5,
                    "error": "none",
                    "h_stats": [[0.1, 5.0], [0.2, 7.0]]
                }
            }"#,
        );
        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        let run = &records[0];
        assert_eq!(run.id, "random-grid-p01");
        assert_eq!(run.domain, "grid");
        assert_eq!(run.get("expansions"), Some(&Value::Int(120)));
        assert_eq!(run.get("search_time"), Some(&Value::Float(0.5)));
        assert_eq!(run.get("error"), Some(&Value::Str("none".to_string())));
        assert_eq!(
            run.get("h_stats"),
            Some(&Value::Pairs(vec![(0.1, 5.0), (0.2, 7.0)]))
        );
    }

    #[test]
    fn test_load_records_skips_unsupported_attributes() {
        let file = write_temp(
            r#"{
                "r1": {
                    "domain": "d",
                    "problem": "p",
                    "algorithm": "a",
                    "nested": {"x": 1}
                }
            }"#,
        );
        let records = load_records(file.path()).unwrap();
        assert!(records[0].get("nested").is_none());
    }

    #[test]
    fn test_load_records_missing_field_fails() {
        let file = write_temp(r#"{"r1": {"domain": "d", "problem": "p"}}"#);
        let err = load_records(file.path()).unwrap_err();
        assert!(format!("{}", err).contains("algorithm"));
    }

    #[test]
    fn test_load_records_rejects_non_object_run() {
        let file = write_temp(r#"{"r1": 42}"#);
        let err = load_records(file.path()).unwrap_err();
        assert!(format!("{}", err).contains("not an object"));
    }

    #[test]
    fn test_load_pooling() {
        let file = write_temp(r#"{"elevators": ["elevators-opt08", "elevators-opt11"]}"#);
        let pooling = load_pooling(file.path()).unwrap();
        assert_eq!(pooling.len(), 2);
    }

    #[test]
    fn test_load_records_bad_json_fails() {
        let file = write_temp("not json");
        assert!(matches!(
            load_records(file.path()),
            Err(CliError::Json { .. })
        ));
    }
}
