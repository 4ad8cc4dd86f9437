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

//! Error types for report configuration and rendering.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
///
/// Configuration violations are detected when a report is constructed and
/// never deferred to render time; the remaining kinds are data-driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevalErrorKind {
    /// Invalid report configuration (duplicate algorithms, self-comparison,
    /// inverted histogram bounds, empty selection, ...).
    Config,
    /// Wrong number of attributes for an evaluator.
    Arity,
    /// Output format not supported by the selected report or evaluator.
    Format,
    /// No record carries the data a report needs.
    NoData,
    /// A selection could not be satisfied (e.g. not enough
    /// domain-distinct candidates).
    Selection,
    /// Error while converting record input.
    Conversion,
    /// I/O error (file operations).
    IO,
}

impl fmt::Display for RevalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "ConfigError"),
            Self::Arity => write!(f, "ArityError"),
            Self::Format => write!(f, "FormatError"),
            Self::NoData => write!(f, "NoDataError"),
            Self::Selection => write!(f, "SelectionError"),
            Self::Conversion => write!(f, "ConversionError"),
            Self::IO => write!(f, "IOError"),
        }
    }
}

/// An error raised while configuring or rendering a report.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct RevalError {
    /// The kind of error.
    pub kind: RevalErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Additional context (e.g. the report that was being rendered).
    pub context: Option<String>,
}

impl RevalError {
    /// Create a new error.
    pub fn new(kind: RevalErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(RevalErrorKind::Config, message)
    }

    pub fn arity(message: impl Into<String>) -> Self {
        Self::new(RevalErrorKind::Arity, message)
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(RevalErrorKind::Format, message)
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        Self::new(RevalErrorKind::NoData, message)
    }

    pub fn selection(message: impl Into<String>) -> Self {
        Self::new(RevalErrorKind::Selection, message)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(RevalErrorKind::Conversion, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(RevalErrorKind::IO, message)
    }
}

/// Result type for REVAL operations.
pub type RevalResult<T> = Result<T, RevalError>;
