// main.rsとエントリーポイントのテスト
use serde_json::{json, Value};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

use crate::fixtures::write_json_file;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_data_processor"))
}

#[test]
fn test_cli_help() {
    let output = binary().arg("--help").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("data_processor"));
    assert!(stdout.contains("process"));
    assert!(stdout.contains("validate"));
    assert!(stdout.contains("show-config"));
}

#[test]
fn test_process_prints_json_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_json_file(
        &temp_dir,
        "items.json",
        &json!([{"id": 1, "value": 5}, {"id": 2}, {"id": 3, "value": 10}]),
    );

    let output = binary()
        .args(["process", "--batch-size", "2", "--quiet"])
        .arg(&input)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    // ログはstderrに出るのでstdoutはJSONのみ
    let stdout: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        stdout,
        json!([
            {"id": 1, "value": 10, "processed": true},
            {"id": 3, "value": 20, "processed": true}
        ])
    );
}

#[test]
fn test_process_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_json_file(&temp_dir, "items.json", &json!([{"id": "a", "value": 1.5}]));
    let config = write_json_file(&temp_dir, "config.json", &json!({"batch_size": 10}));
    let out_path = temp_dir.path().join("out.json");

    let status = binary()
        .arg("process")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&out_path)
        .status()
        .expect("Failed to execute binary");

    assert!(status.success());
    let written: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(written, json!([{"id": "a", "value": 3.0, "processed": true}]));
}

#[test]
fn test_process_fails_on_missing_config() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_json_file(&temp_dir, "items.json", &json!([]));

    let output = binary()
        .arg("process")
        .arg(&input)
        .args(["--config", "no_such_config.json"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no_such_config.json"));
    // 失敗時は重要度と操作名がログに出る
    assert!(stderr.contains("HIGH"));
    assert!(stderr.contains("load_config"));
}

#[test]
fn test_zero_batch_size_logs_critical_severity() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_json_file(&temp_dir, "items.json", &json!([{"id": 1, "value": 1}]));

    let output = binary()
        .arg("process")
        .arg(&input)
        .args(["--batch-size", "0"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CRITICAL"));
    assert!(stderr.contains("configuration"));
}

#[test]
fn test_process_fails_on_non_numeric_value() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_json_file(&temp_dir, "items.json", &json!([{"id": 1, "value": "five"}]));

    let output = binary()
        .arg("process")
        .arg(&input)
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_validate_command() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_json_file(&temp_dir, "items.json", &json!([{"id": 1, "value": 2}, {"id": 2}]));

    let output = binary()
        .arg("validate")
        .arg(&input)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("アイテム総数: 2"));
    assert!(stdout.contains("有効: 1"));
}

#[test]
fn test_show_config_command() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_json_file(&temp_dir, "config.json", &json!({"batch_size": 42}));

    let output = binary()
        .arg("show-config")
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("バッチサイズ: 42"));
}
