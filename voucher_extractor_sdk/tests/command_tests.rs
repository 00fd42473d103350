//! Integration tests for the CLI commands
//!
//! Fixtures are written to a temporary directory and the commands are run
//! through the same parser the binary uses.

use clap::Parser;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use voucher_extractor_sdk::{execute, report, Cli, CliError, CommandOutcome};

fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn run(args: &[&str]) -> Result<CommandOutcome, CliError> {
    let mut argv = vec!["voucher-extract"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    execute(&cli.command)
}

fn sample_record() -> Value {
    json!({
        "NAME": "Sales Invoice 1",
        "allledgerentries": [
            {"LEDGERNAME": "Customer A", "AMOUNT": 1000},
            {"LEDGERNAME": "Sales", "AMOUNT": -1000}
        ]
    })
}

const CONFIG_TOML: &str = r#"
[[ledgerentries]]
VoucherName = "$NAME"

[[ledgerentries.Entries]]
LedgerName = "$LEDGERNAME"
Amount = "$AMOUNT"
"#;

#[test]
fn test_extract_with_toml_config() {
    let temp_dir = tempdir().unwrap();
    let record = write_json(temp_dir.path(), "record.json", &sample_record());
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, CONFIG_TOML).unwrap();

    let outcome = run(&[
        "extract",
        "--record",
        record.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.report["command"], "extract");
    assert!(outcome.report["generated_at"].is_string());
    assert_eq!(
        outcome.report["result"],
        json!({
            "VoucherName": "Sales Invoice 1",
            "Entries": [
                {"LedgerName": "Customer A", "Amount": 1000},
                {"LedgerName": "Sales", "Amount": -1000}
            ]
        })
    );
}

#[test]
fn test_extract_with_selection() {
    let temp_dir = tempdir().unwrap();
    let record = write_json(temp_dir.path(), "record.json", &sample_record());
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, CONFIG_TOML).unwrap();
    let selection = write_json(
        temp_dir.path(),
        "selection.json",
        &json!({"Entries.LedgerName": true}),
    );

    let outcome = run(&[
        "extract",
        "--record",
        record.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--selection",
        selection.to_str().unwrap(),
    ])
    .unwrap();

    assert_eq!(
        outcome.report["result"],
        json!({"Entries": [{"LedgerName": "Customer A"}, {"LedgerName": "Sales"}]})
    );
}

#[test]
fn test_invalid_selection_file_is_an_error() {
    let temp_dir = tempdir().unwrap();
    let record = write_json(temp_dir.path(), "record.json", &sample_record());
    let config = write_json(temp_dir.path(), "config.json", &json!({"t": [{"N": "$NAME"}]}));
    let selection = write_json(temp_dir.path(), "selection.json", &json!({"N": "yes"}));

    let result = run(&[
        "extract",
        "--record",
        record.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--selection",
        selection.to_str().unwrap(),
    ]);

    assert!(matches!(result, Err(CliError::Record(_))));
}

#[test]
fn test_batch_preserves_order() {
    let temp_dir = tempdir().unwrap();
    let records: Vec<Value> = (0..9).map(|i| json!({"NAME": format!("V{}", i)})).collect();
    let records_path = write_json(temp_dir.path(), "records.json", &Value::Array(records));
    let config = write_json(temp_dir.path(), "config.json", &json!({"header": [{"Name": "$NAME"}]}));

    let outcome = run(&[
        "batch",
        "--records",
        records_path.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--threads",
        "3",
    ])
    .unwrap();

    assert_eq!(outcome.report["records"], 9);
    assert_eq!(outcome.report["threads_used"], 3);
    let names: Vec<&str> = outcome.report["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["Name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["V0", "V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8"]);
}

#[test]
fn test_batch_options_file_and_overrides() {
    let temp_dir = tempdir().unwrap();
    let records_path = write_json(
        temp_dir.path(),
        "records.json",
        &json!([{"NAME": "A"}, {"NAME": "B"}, {"NAME": "C"}, {"NAME": "D"}]),
    );
    let config = write_json(temp_dir.path(), "config.json", &json!({"h": [{"N": "$NAME"}]}));
    let options = temp_dir.path().join("options.toml");
    fs::write(&options, "max_threads = 2\n").unwrap();

    let outcome = run(&[
        "batch",
        "--records",
        records_path.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--options",
        options.to_str().unwrap(),
        "--sequential",
    ])
    .unwrap();

    assert_eq!(outcome.report["threads_used"], 1);
    assert_eq!(outcome.report["non_empty"], 4);
}

#[test]
fn test_batch_rejects_zero_threads() {
    let temp_dir = tempdir().unwrap();
    let records_path = write_json(temp_dir.path(), "records.json", &json!([{"NAME": "A"}]));
    let config = write_json(temp_dir.path(), "config.json", &json!({"h": [{"N": "$NAME"}]}));

    let result = run(&[
        "batch",
        "--records",
        records_path.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--threads",
        "0",
    ]);

    assert!(matches!(result, Err(CliError::Options(_))));
}

#[test]
fn test_validate_reports_errors() {
    let temp_dir = tempdir().unwrap();
    let config = write_json(
        temp_dir.path(),
        "config.json",
        &json!({"broken": [], "ok": [{"N": "$NAME", "Bad": 3}]}),
    );

    let outcome = run(&["validate", "--config", config.to_str().unwrap()]).unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.report["validation"]["error_count"], 2);
    assert_eq!(outcome.report["validation"]["issues"][0]["location"], "broken");
    assert_eq!(outcome.report["validation"]["issues"][1]["location"], "ok.Bad");
}

#[test]
fn test_validate_clean_config_succeeds() {
    let temp_dir = tempdir().unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, CONFIG_TOML).unwrap();

    let outcome = run(&["validate", "--config", config.to_str().unwrap()]).unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.report["validation"]["valid"], true);
}

#[test]
fn test_resolve_with_table_context() {
    let temp_dir = tempdir().unwrap();
    let record = write_json(temp_dir.path(), "record.json", &sample_record());

    let outcome = run(&[
        "resolve",
        "--record",
        record.to_str().unwrap(),
        "--formula",
        "$Parent:$NAME",
        "--table",
        "ledgerentries",
    ])
    .unwrap();

    assert_eq!(outcome.report["resolved"], true);
    assert_eq!(outcome.report["value"], "Sales Invoice 1");
}

#[test]
fn test_resolve_miss_is_null() {
    let temp_dir = tempdir().unwrap();
    let record = write_json(temp_dir.path(), "record.json", &sample_record());

    let outcome = run(&[
        "resolve",
        "--record",
        record.to_str().unwrap(),
        "--formula",
        "$Missing:Path",
    ])
    .unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.report["resolved"], false);
    assert_eq!(outcome.report["value"], Value::Null);
}

#[test]
fn test_missing_and_unsupported_inputs() {
    let temp_dir = tempdir().unwrap();
    let yaml = temp_dir.path().join("config.yaml");
    fs::write(&yaml, "a: 1").unwrap();

    let missing = run(&["validate", "--config", temp_dir.path().join("nope.json").to_str().unwrap()]);
    assert!(matches!(missing, Err(CliError::Io { .. })));

    let unsupported = run(&["validate", "--config", yaml.to_str().unwrap()]);
    assert!(matches!(unsupported, Err(CliError::UnsupportedFormat { .. })));
}

#[test]
fn test_report_written_to_file() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("report.json");
    let report_value = json!({"command": "extract", "result": {}});

    report::write_report(&report_value, Some(&output), true).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, report_value);
}
