use serde_json::{json, Value};
use std::process::Command;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::TestFixture;

fn zuban() -> Command {
    Command::new(env!("CARGO_BIN_EXE_zuban"))
}

/// Test that `detect` prints a full JSON result
#[test]
fn test_detect_prints_json_result() {
    let output = zuban()
        .args(["detect", "Hello", "World"])
        .output()
        .expect("Failed to run zuban");

    assert!(output.status.success(), "zuban failed: {}", String::from_utf8_lossy(&output.stderr));

    let result: Value = serde_json::from_slice(&output.stdout).expect("Failed to parse JSON");
    let obj = result.as_object().expect("result should be an object");
    for key in ["success", "language", "confidence", "method", "text_sample", "char_count", "error"] {
        assert!(obj.contains_key(key), "Missing {key} field");
    }
    assert_eq!(result["success"], true);
    assert_eq!(result["language"], "en");
    assert_eq!(result["method"], "script");
    assert_eq!(result["char_count"], 11);
}

#[test]
fn test_detect_reads_file_and_normalizes() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("input.txt", "  سلام\n\n   دنیا  \n");

    let output = zuban()
        .arg("detect")
        .arg("--file")
        .arg(&input)
        .output()
        .expect("Failed to run zuban");

    assert!(output.status.success(), "zuban failed: {}", String::from_utf8_lossy(&output.stderr));
    let result: Value = serde_json::from_slice(&output.stdout).expect("Failed to parse JSON");
    assert_eq!(result["language"], "ur");
    assert_eq!(result["text_sample"], "سلام دنیا");
}

#[test]
fn test_detect_rejects_blank_input() {
    let output = zuban().args(["detect", "   "]).output().expect("Failed to run zuban");
    assert!(!output.status.success());
}

#[test]
fn test_mixed_and_languages_commands() {
    let output = zuban()
        .args(["mixed", "Hello", "سلام", "World"])
        .output()
        .expect("Failed to run zuban");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "true");

    let output = zuban()
        .args(["mixed", "--threshold", "0.3", "Hello", "سلام", "World"])
        .output()
        .expect("Failed to run zuban");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");

    let output = zuban().arg("languages").output().expect("Failed to run zuban");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["en", "ur"]);
}

#[test]
fn test_batch_detects_each_line() {
    let fixture = TestFixture::new();
    let batch = fixture.create_batch_file(
        "batch.jsonl",
        &[json!("Hello World"), json!("سلام دنیا"), Value::Null, json!(12345), json!("Hi")],
    );

    let output = zuban()
        .arg("batch")
        .arg(&batch)
        .output()
        .expect("Failed to run zuban");
    assert!(output.status.success(), "zuban failed: {}", String::from_utf8_lossy(&output.stderr));

    let results: Vec<Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be JSON"))
        .collect();
    assert_eq!(results.len(), 5);

    assert_eq!(results[0]["language"], "en");
    assert_eq!(results[1]["language"], "ur");
    assert_eq!(results[2]["error"], "Text cannot be None");
    assert_eq!(results[3]["error"], "Text must be a string");
    assert_eq!(results[4]["success"], false);
    assert_eq!(results[4]["language"], "");
}

#[test]
fn test_config_file_is_applied() {
    let fixture = TestFixture::new();
    let config = fixture.create_file("zuban.toml", "mixed_threshold = 0.3\nlog_json = false\n");

    let output = zuban()
        .arg("--config")
        .arg(&config)
        .args(["mixed", "Hello", "سلام", "World"])
        .output()
        .expect("Failed to run zuban");
    assert!(output.status.success(), "zuban failed: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");
}
