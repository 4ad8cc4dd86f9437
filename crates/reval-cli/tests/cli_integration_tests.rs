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

//! Integration tests driving the `reval` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const PROPERTIES: &str = r#"{
    "random-gripper-p1": {
        "domain": "gripper", "problem": "p1", "algorithm": "random",
        "expansions": 10
    },
    "min_cg-gripper-p1": {
        "domain": "gripper", "problem": "p1", "algorithm": "min_cg",
        "expansions": 20
    },
    "random-gripper-p2": {
        "domain": "gripper", "problem": "p2", "algorithm": "random",
        "expansions": 30
    },
    "min_cg-gripper-p2": {
        "domain": "gripper", "problem": "p2", "algorithm": "min_cg",
        "expansions": 30
    }
}"#;

fn properties_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PROPERTIES.as_bytes()).unwrap();
    file
}

#[test]
fn histogram_to_stdout() {
    let props = properties_file();
    Command::cargo_bin("reval")
        .unwrap()
        .args([
            "histogram",
            props.path().to_str().unwrap(),
            "--attribute",
            "expansions",
            "--count",
            "2",
            "--min",
            "0",
            "--max",
            "40",
            "--no-domains",
        ])
        .assert()
        .success()
        .stdout("value,count\n0,1\n20,3\n40,0\n");
}

#[test]
fn pairwise_reference_tallies() {
    let props = properties_file();
    Command::cargo_bin("reval")
        .unwrap()
        .args([
            "pairwise",
            props.path().to_str().unwrap(),
            "--attribute",
            "expansions",
            "--compare",
            "random:min_cg",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r"\textbf{gripper} & 1 & \textbf{0} & 0.50 0.00\\",
        ));
}

#[test]
fn optimality_writes_output_file() {
    let props = properties_file();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("optimality.tex");
    Command::cargo_bin("reval")
        .unwrap()
        .args([
            "optimality",
            props.path().to_str().unwrap(),
            "-a",
            "random,min_cg",
            "--attribute",
            "expansions",
            "--min-group-size",
            "1",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();
    let markup = std::fs::read_to_string(&out).unwrap();
    assert!(markup.contains(r"\textbf{random} & \textbf{min{\_}cg}"));
    assert!(markup.contains("Total"));
}

#[test]
fn scatter_emits_plot_primitives_json() {
    let props = properties_file();
    Command::cargo_bin("reval")
        .unwrap()
        .args([
            "scatter",
            props.path().to_str().unwrap(),
            "--left",
            "random",
            "--right",
            "min_cg",
            "--attribute",
            "expansions",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"categories\""))
        .stdout(predicate::str::contains("\"bounds\""));
}

#[test]
fn self_comparison_is_a_construction_error() {
    let props = properties_file();
    Command::cargo_bin("reval")
        .unwrap()
        .args([
            "pairwise",
            props.path().to_str().unwrap(),
            "--attribute",
            "expansions",
            "--compare",
            "random:random",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot compare algorithm to itself"));
}

#[test]
fn unsupported_format_is_rejected() {
    let props = properties_file();
    Command::cargo_bin("reval")
        .unwrap()
        .args([
            "statistics",
            props.path().to_str().unwrap(),
            "-a",
            "random,min_cg",
            "--algorithm",
            "random",
            "--attributes",
            "expansions",
            "--format",
            "plot-primitives",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn missing_properties_file_fails() {
    Command::cargo_bin("reval")
        .unwrap()
        .args([
            "histogram",
            "/nonexistent/properties.json",
            "--attribute",
            "expansions",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
