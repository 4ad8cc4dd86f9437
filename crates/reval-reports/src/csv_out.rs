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

//! CSV assembly shared by the CSV-format reports.

use reval_core::format::fmt_sig;
use reval_core::{RevalError, RevalResult, Value};

/// Serialize rows to a CSV string without a trailing blank line.
pub(crate) fn csv_string(rows: &[Vec<String>]) -> RevalResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| RevalError::conversion(format!("CSV serialization failed: {}", e)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| RevalError::conversion(format!("CSV serialization failed: {}", e)))?;
    let mut text = String::from_utf8(bytes)
        .map_err(|e| RevalError::conversion(format!("CSV output is not UTF-8: {}", e)))?;
    while text.ends_with('\n') || text.ends_with('\r') {
        text.pop();
    }
    Ok(text)
}

/// One CSV field for an attribute value; floats print with 7 significant
/// digits.
pub(crate) fn csv_value(value: &Value) -> String {
    match value {
        Value::Float(n) => fmt_sig(*n, 7),
        other => format!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_string_no_trailing_newline() {
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["1".to_string(), "2".to_string()],
        ];
        assert_eq!(csv_string(&rows).unwrap(), "a,b\n1,2");
    }

    #[test]
    fn test_csv_string_quotes_when_needed() {
        let rows = vec![vec!["with,comma".to_string(), "plain".to_string()]];
        assert_eq!(csv_string(&rows).unwrap(), "\"with,comma\",plain");
    }

    #[test]
    fn test_csv_value_formats() {
        assert_eq!(csv_value(&Value::Int(42)), "42");
        assert_eq!(csv_value(&Value::Float(0.123456789)), "0.1234568");
        assert_eq!(csv_value(&Value::Str("x".to_string())), "x");
    }
}
