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

//! Core data model and pipeline for REVAL reports.
//!
//! This crate provides the run record model, the indexed record
//! collection, the grouping and filtering pipeline, and the shared
//! output-format primitives. Report implementations live in
//! `reval-reports`.
//!
//! The engine is a pure function of its inputs: every derived structure
//! (group matrix, histogram, candidate list) is built at the start of a
//! report invocation and discarded at the end.

mod error;
pub mod format;
mod groups;
mod pooling;
mod record;
mod value;

pub use error::{RevalError, RevalErrorKind, RevalResult};
pub use format::OutputFormat;
pub use groups::{GroupMatrix, GroupingConfig};
pub use pooling::DomainPooling;
pub use record::{RecordSet, RunRecord};
pub use value::Value;
