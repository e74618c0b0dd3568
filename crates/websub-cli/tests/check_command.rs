// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for `websub-check check` over scratch projects.

use std::fs;

use camino::Utf8PathBuf;
use tempfile::TempDir;
use websub_cli::commands::check::{OutputFormat, check_path};
use websub_cli::manifest::find_config;

const SERVICE_SOURCE: &str = "\
service on new websub:Listener(9090) {
    function onEventNotification(websub:ContentDistributionMessage event) {
    }
}
";

/// Unit for `SERVICE_SOURCE`: no annotation and a non-remote callback.
const SERVICE_UNIT: &str = r#"{
    "source": "service.bal",
    "listeners": [{
        "span": {"start": 11, "end": 34},
        "arguments": [{"form": "positional", "expression": "numericLiteral"}]
    }],
    "services": [{
        "span": {"start": 0, "end": 117},
        "methods": [{
            "name": "onEventNotification",
            "span": {"start": 41, "end": 115},
            "signature": {
                "params": [{"kind": "reference", "module": "websub", "name": "ContentDistributionMessage"}]
            }
        }]
    }]
}"#;

fn scratch_project() -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    fs::create_dir_all(root.join("units")).unwrap();
    fs::write(root.join("units/service.bal"), SERVICE_SOURCE).unwrap();
    fs::write(root.join("units/service.websub.json"), SERVICE_UNIT).unwrap();
    (temp, root)
}

#[test]
fn json_output_reports_each_violation() {
    let (_temp, root) = scratch_project();
    let config = find_config(&root).unwrap();

    let mut out = Vec::new();
    let summary = check_path(&root, &config, OutputFormat::Json, &mut out).unwrap();
    assert_eq!(summary.files, 1);
    assert_eq!(summary.errors, 2);
    assert!(summary.is_failure(config.deny_warnings));

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines[0]["code"], "WEBSUB_101");
    assert_eq!(lines[0]["span_start"], 0);
    assert_eq!(lines[0]["span_end"], 117);
    assert_eq!(lines[0]["arguments"], serde_json::json!([]));

    assert_eq!(lines[1]["code"], "WEBSUB_102");
    assert_eq!(lines[1]["span_start"], 41);
    assert_eq!(
        lines[1]["message"],
        "subscriber service should only implement remote methods"
    );
    assert!(lines[1]["hint"].is_string());
    assert!(lines[1]["file"].as_str().unwrap().ends_with("service.bal"));
}

#[test]
fn text_output_renders_source_context() {
    let (_temp, root) = scratch_project();

    let mut out = Vec::new();
    check_path(
        &root.join("units/service.websub.json"),
        &find_config(&root).unwrap(),
        OutputFormat::Text,
        &mut out,
    )
    .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("WEBSUB_101"), "{output}");
    assert!(output.contains("WEBSUB_102"), "{output}");
    assert!(output.contains("remote methods"), "{output}");
}

#[test]
fn configured_exclusions_are_honoured() {
    let (_temp, root) = scratch_project();
    fs::write(
        root.join("websub.toml"),
        "[check]\nformat = \"json\"\nexclude = [\"units\"]\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("ok")).unwrap();
    fs::write(
        root.join("ok/clean.websub.json"),
        r#"{"services": [{
            "span": {"start": 0, "end": 10},
            "annotations": [{"name": "SubscriberServiceConfig", "module": "websub"}],
            "methods": [{
                "name": "onEventNotification",
                "qualifiers": ["remote"],
                "span": {"start": 2, "end": 8},
                "signature": {
                    "params": [{"kind": "reference", "module": "websub", "name": "ContentDistributionMessage"}],
                    "returnType": {"kind": "union", "members": [
                        {"kind": "reference", "module": "websub", "name": "Acknowledgement"},
                        {"kind": "nil"}
                    ]}
                }
            }]
        }]}"#,
    )
    .unwrap();

    let config = find_config(&root).unwrap();
    assert_eq!(config.format, Some(OutputFormat::Json));

    let mut out = Vec::new();
    let summary = check_path(&root, &config, OutputFormat::Json, &mut out).unwrap();
    assert_eq!(summary.files, 1);
    assert_eq!(summary.errors, 0);
    assert!(out.is_empty());
}

#[test]
fn undecodable_unit_is_a_driver_error() {
    let (_temp, root) = scratch_project();
    fs::write(root.join("units/broken.websub.json"), "[1, 2").unwrap();

    let err = check_path(
        &root,
        &find_config(&root).unwrap(),
        OutputFormat::Json,
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(
        err.to_string().contains("Failed to decode compilation unit"),
        "{err}"
    );
}
