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

//! Structured error types for the REVAL CLI.

use reval_core::RevalError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for REVAL CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed (file read or write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The input file is not valid JSON.
    #[error("JSON error in '{path}': {message}")]
    Json {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The properties file is JSON but not a valid record collection.
    #[error("invalid properties in '{path}': {message}")]
    Properties {
        /// The file path that caused the error
        path: PathBuf,
        /// What was wrong
        message: String,
    },

    /// Report configuration or rendering error.
    #[error(transparent)]
    Report(#[from] RevalError),
}

impl CliError {
    /// Wrap an I/O error with its path.
    pub fn io_error(path: &Path, err: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Wrap a JSON parse error with its path.
    pub fn json_error(path: &Path, err: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Flag a structurally invalid properties file.
    pub fn properties_error(path: &Path, message: impl Into<String>) -> Self {
        Self::Properties {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}
