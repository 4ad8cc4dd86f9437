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

//! Relative scatter: one algorithm's attribute against the ratio to
//! another's.
//!
//! Each matched problem becomes the point `(left, right / left)`, so the
//! horizontal `y = 1` line marks equal performance. Values are floored at
//! a small epsilon to keep ratios finite and positive on logarithmic
//! axes.

use reval_core::format::check_format;
use reval_core::{OutputFormat, RecordSet, RevalError, RevalResult, RunRecord};
use std::collections::BTreeMap;

/// Classifies one matched run pair into a plot category.
pub type CategoryFn = Box<dyn Fn(&RunRecord, &RunRecord) -> String>;

/// Axis bounds derived from the data unless overridden by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AxisBounds {
    pub x_left: f64,
    /// Left open unless the caller fixes it; the plot backend picks a
    /// right edge from its own margins.
    pub x_right: Option<f64>,
    pub y_bottom: f64,
    pub y_top: f64,
}

/// Categorized points plus derived bounds, handed to a plot backend.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScatterData {
    /// Category name to point list; the default category is "".
    pub categories: BTreeMap<String, Vec<(f64, f64)>>,
    pub bounds: AxisBounds,
    /// Problems where the left value was strictly greater.
    pub left_greater: usize,
    /// Problems where the right value was strictly greater.
    pub right_greater: usize,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub xlabel: String,
    pub ylabel: String,
}

/// Computes the relative scatter of two algorithms on one attribute.
pub struct RelativeScatterReport {
    left: String,
    right: String,
    attribute: String,
    epsilon: f64,
    get_category: Option<CategoryFn>,
    xlim_left: Option<f64>,
    xlim_right: Option<f64>,
    ylim_bottom: Option<f64>,
    ylim_top: Option<f64>,
}

impl std::fmt::Debug for RelativeScatterReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelativeScatterReport")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("attribute", &self.attribute)
            .field("epsilon", &self.epsilon)
            .field("get_category", &self.get_category.is_some())
            .field("xlim_left", &self.xlim_left)
            .field("xlim_right", &self.xlim_right)
            .field("ylim_bottom", &self.ylim_bottom)
            .field("ylim_top", &self.ylim_top)
            .finish()
    }
}

const DEFAULT_EPSILON: f64 = 0.1;

impl RelativeScatterReport {
    /// Scatter `left` (x axis) against `right / left` (y axis).
    ///
    /// # Errors
    ///
    /// Fails on a self-comparison, a wrong attribute arity, or a format
    /// other than plot primitives or tabular markup.
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        attributes: Vec<String>,
        format: OutputFormat,
    ) -> RevalResult<Self> {
        check_format(
            format,
            &[OutputFormat::PlotPrimitives, OutputFormat::TabularMarkup],
        )?;
        if attributes.len() != 1 {
            return Err(RevalError::arity("report needs exactly one attribute"));
        }
        let left = left.into();
        let right = right.into();
        if left == right {
            return Err(RevalError::config("cannot compare algorithm to itself"));
        }
        let attribute = attributes.into_iter().next().unwrap_or_default();
        Ok(Self {
            left,
            right,
            attribute,
            epsilon: DEFAULT_EPSILON,
            get_category: None,
            xlim_left: None,
            xlim_right: None,
            ylim_bottom: None,
            ylim_top: None,
        })
    }

    /// Group points into categories instead of one anonymous cloud.
    pub fn with_category_fn(mut self, get_category: CategoryFn) -> Self {
        self.get_category = Some(get_category);
        self
    }

    /// Floor applied to both values before the ratio.
    ///
    /// # Errors
    ///
    /// Fails unless the floor is strictly positive.
    pub fn with_epsilon(mut self, epsilon: f64) -> RevalResult<Self> {
        if epsilon <= 0.0 {
            return Err(RevalError::config("epsilon must be positive"));
        }
        self.epsilon = epsilon;
        Ok(self)
    }

    /// Fix axis bounds; a `None` keeps the derived value.
    pub fn with_limits(
        mut self,
        xlim_left: Option<f64>,
        xlim_right: Option<f64>,
        ylim_bottom: Option<f64>,
        ylim_top: Option<f64>,
    ) -> Self {
        self.xlim_left = xlim_left;
        self.xlim_right = xlim_right;
        self.ylim_bottom = ylim_bottom;
        self.ylim_top = ylim_top;
        self
    }

    /// Collect the categorized points and derive plot bounds.
    pub fn compute(&self, records: &RecordSet) -> RevalResult<ScatterData> {
        let mut categories: BTreeMap<String, Vec<(f64, f64)>> = BTreeMap::new();
        let mut derived_bottom: f64 = 2.0;
        let mut derived_top: f64 = 0.5;
        let mut derived_left = f64::INFINITY;
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        let mut left_greater = 0;
        let mut right_greater = 0;

        for (_, runs) in records.problem_runs() {
            let Some(left_run) = runs.iter().find(|r| r.algorithm == self.left) else {
                continue;
            };
            let Some(right_run) = runs.iter().find(|r| r.algorithm == self.right) else {
                continue;
            };
            let (Some(left_value), Some(right_value)) = (
                left_run.get_float(&self.attribute),
                right_run.get_float(&self.attribute),
            ) else {
                continue;
            };
            let left_value = left_value.max(self.epsilon);
            let right_value = right_value.max(self.epsilon);
            let x = left_value;
            let y = right_value / left_value;
            let category = match &self.get_category {
                Some(classify) => classify(left_run, right_run),
                None => String::new(),
            };
            categories.entry(category).or_default().push((x, y));

            derived_top = derived_top.max(y);
            derived_bottom = derived_bottom.min(y);
            derived_left = derived_left.min(x);
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
            if left_value > right_value {
                left_greater += 1;
            } else if left_value < right_value {
                right_greater += 1;
            }
        }
        if categories.is_empty() {
            derived_bottom = 0.5;
            derived_top = 2.0;
            derived_left = 0.5;
            min_x = 0.5;
            max_x = 2.0;
            min_y = 0.5;
            max_y = 2.0;
        }

        // explicit bounds win; derived bounds are centered around the
        // equal-performance line y = 1
        let x_left = self.xlim_left.unwrap_or(derived_left);
        let mut y_bottom = self.ylim_bottom.unwrap_or(derived_bottom);
        let mut y_top = self.ylim_top.unwrap_or(derived_top);
        if self.ylim_top.is_none() && y_bottom < 1.0 {
            y_top = y_top.max(1.0 / y_bottom);
        }
        if self.ylim_bottom.is_none() && y_top > 1.0 {
            y_bottom = y_bottom.min(1.0 / y_top);
        }

        Ok(ScatterData {
            categories,
            bounds: AxisBounds {
                x_left,
                x_right: self.xlim_right,
                y_bottom,
                y_top,
            },
            left_greater,
            right_greater,
            min_x,
            max_x,
            min_y,
            max_y,
            xlabel: format!("{} {} ({})", self.left, self.attribute, left_greater),
            ylabel: format!(
                "{}/{} {} ({})",
                self.right, self.left, self.attribute, right_greater
            ),
        })
    }

    /// Render the pgfplots axis block for markup output.
    pub fn render_pgf(&self, records: &RecordSet) -> RevalResult<String> {
        let data = self.compute(records)?;
        let mut options = vec![
            format!("xlabel={{{}}}", data.xlabel),
            format!("ylabel={{{}}}", data.ylabel),
            "xmode=log".to_string(),
            "ymode=log".to_string(),
            format!("xmin={}", coord(data.bounds.x_left)),
        ];
        if let Some(x_right) = data.bounds.x_right {
            options.push(format!("xmax={}", coord(x_right)));
        }
        options.push(format!("ymin={}", coord(data.bounds.y_bottom)));
        options.push(format!("ymax={}", coord(data.bounds.y_top)));

        let mut lines = Vec::new();
        lines.push(format!(r"\begin{{axis}}[{}]", options.join(", ")));
        for (category, points) in &data.categories {
            let coords: Vec<String> = points
                .iter()
                .map(|(x, y)| format!("({}, {})", coord(*x), coord(*y)))
                .collect();
            lines.push(format!(
                "\\addplot+[only marks] coordinates {{\n{}\n}};",
                coords.join(" ")
            ));
            if !category.is_empty() {
                lines.push(format!(r"\addlegendentry{{{}}}", category));
            }
        }
        // black reference line at y = 1 spanning the whole plot
        let mut start = data.min_x.min(data.min_y);
        start = start.min(data.bounds.x_left).min(data.bounds.y_bottom);
        let mut end = data.max_x.max(data.max_y);
        end = end.max(data.bounds.y_top);
        if let Some(x_right) = data.bounds.x_right {
            end = end.max(x_right);
        }
        lines.push(format!(
            r"\addplot[color=black] coordinates {{({}, 1) ({}, 1)}};",
            coord(start),
            coord(end)
        ));
        lines.push(r"\end{axis}".to_string());
        Ok(lines.join("\n"))
    }
}

fn coord(value: f64) -> String {
    format!("{:.6}", value)
}
