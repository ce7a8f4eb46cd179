//! Integration tests for the calckit CLI
//!
//! These tests invoke the actual calckit-cli binary and verify:
//! - Exit codes (0 = success, 1 = invalid input, 2 = error)
//! - stdout results and stderr diagnostics
//! - JSON output format

use std::path::PathBuf;
use std::process::Command;

// ── Helpers ───────────────────────────────────────────────

fn calckit_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_calckit-cli"))
}

fn run_calckit(args: &[&str]) -> std::process::Output {
    Command::new(calckit_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to execute calckit-cli")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn temp_log(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("calckit-{}-{}.log", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

// ── Version ───────────────────────────────────────────────

#[test]
fn test_version_command() {
    let output = run_calckit(&["version"]);
    assert!(output.status.success(), "version should exit 0");
    let out = stdout(&output);
    assert!(out.contains("calckit"));
    assert!(out.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_flag() {
    let output = run_calckit(&["--version"]);
    assert!(output.status.success(), "--version should exit 0");
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

// ── Discount ──────────────────────────────────────────────

#[test]
fn test_discount_valid() {
    let output = run_calckit(&["discount", "100", "20"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "80");

    let output = run_calckit(&["discount", "50", "10"]);
    assert_eq!(stdout(&output).trim(), "45");
}

#[test]
fn test_discount_over_100_is_valid_zero() {
    let output = run_calckit(&["discount", "100", "150"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "0");
}

#[test]
fn test_discount_invalid_domain() {
    let output = run_calckit(&["discount", "0", "15"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "0");
    assert!(stderr(&output).contains("price must be positive"));

    let output = run_calckit(&["discount", "100", "-5"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "0");
}

#[test]
fn test_discount_invalid_type() {
    let output = run_calckit(&["discount", "abc", "10"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "0");
    assert!(stderr(&output).contains("price must be a numeric value, got abc"));
}

#[test]
fn test_discount_overflow_reported_as_unexpected() {
    let output = run_calckit(&["discount", "1e308", "500"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "0");
    let err = stderr(&output);
    assert!(err.contains("Unexpected error in get_discounted_price"));
    assert_eq!(err.matches("Unexpected error").count(), 1);
}

#[test]
fn test_discount_json() {
    let output = run_calckit(&["discount", "100", "20", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).expect("valid JSON");
    assert_eq!(json["final_price"], 80.0);
    assert_eq!(json["valid"], true);
    assert_eq!(json["price"], 100);
}

#[test]
fn test_discount_quiet_suppresses_diagnostics() {
    let output = run_calckit(&["--quiet", "discount", "abc", "10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).is_empty());
}

// ── Palindrome ────────────────────────────────────────────

#[test]
fn test_palindrome_verdicts() {
    let output = run_calckit(&["palindrome", "racecar", "hello", "A man, a plan, a canal: Panama"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("'racecar': palindrome"));
    assert!(out.contains("'hello': not a palindrome"));
    assert!(out.contains("'A man, a plan, a canal: Panama': palindrome"));
}

#[test]
fn test_palindrome_edge_cases() {
    let output = run_calckit(&["palindrome", "", "a", "!@#$%"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).matches(": palindrome").count(), 3);
}

#[test]
fn test_palindrome_trace_at_info() {
    let output = run_calckit(&["palindrome", "Race, car!"]);
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Starting palindrome check for input: 'Race, car!'"));
    assert!(err.contains("Cleaned string: 'racecar' (length: 7)"));
    assert!(err.contains("[PALINDROME]"));
    assert!(!err.contains("Character 0"), "per-character trace is DEBUG");
}

#[test]
fn test_palindrome_trace_at_debug() {
    let output = run_calckit(&["-v", "palindrome", "Race, car!"]);
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Character 0: 'R' -> 'r' (kept)"));
    assert!(err.contains("Character 4: ',' -> removed (not alphanumeric)"));
    assert!(err.contains("Reversed string: 'racecar'"));
}

#[test]
fn test_palindrome_quiet() {
    let output = run_calckit(&["-q", "palindrome", "racecar"]);
    assert!(output.status.success());
    assert!(stderr(&output).is_empty());
    assert!(stdout(&output).contains("palindrome"));
}

#[test]
fn test_palindrome_log_file() {
    let path = temp_log("palindrome");
    let output = run_calckit(&[
        "--log-file",
        path.to_str().unwrap(),
        "palindrome",
        "level",
    ]);
    assert!(output.status.success());
    assert!(!stderr(&output).contains("Cleaned string"));

    let log = std::fs::read_to_string(&path).expect("log file written");
    assert!(log.contains("INFO"));
    assert!(log.contains("Cleaned string: 'level' (length: 5)"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_palindrome_unconvertible_input_is_error() {
    let output = run_calckit(&["palindrome", "--typed", "null"]);
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("cannot convert Null to text"));
    assert!(err.contains("Error type: TextCoercion"));
}

#[test]
fn test_palindrome_typed_numbers() {
    let output = run_calckit(&["palindrome", "--typed", "12321"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("'12321': palindrome"));
}

#[test]
fn test_palindrome_json() {
    let output = run_calckit(&["-q", "palindrome", "--json", "racecar", "hello"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).expect("valid JSON");
    assert_eq!(json[0]["input"], "racecar");
    assert_eq!(json[0]["palindrome"], true);
    assert_eq!(json[1]["palindrome"], false);
}

// ── BMI ───────────────────────────────────────────────────

#[test]
fn test_bmi_valid() {
    let output = run_calckit(&["bmi", "1.75", "70"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("22.86"));
    assert!(out.contains("normal"));
}

#[test]
fn test_bmi_zero_height() {
    let output = run_calckit(&["bmi", "0", "70"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("no value"));
    assert!(stderr(&output).contains("Error: height must be positive, got 0"));
}

#[test]
fn test_bmi_negative_weight() {
    let output = run_calckit(&["bmi", "1.75", "-5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: weight must be positive, got -5"));
}

#[test]
fn test_bmi_non_numeric() {
    let output = run_calckit(&["bmi", "tall", "70"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: height must be a numeric value, got tall"));
}

#[test]
fn test_bmi_json() {
    let output = run_calckit(&["bmi", "--json", "1.75", "70"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).expect("valid JSON");
    assert_eq!(json["bmi"], 22.86);
    assert_eq!(json["category"], "normal");

    let output = run_calckit(&["bmi", "--json", "0", "70"]);
    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).expect("valid JSON");
    assert!(json["bmi"].is_null());
}
