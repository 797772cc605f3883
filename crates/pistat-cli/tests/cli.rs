use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

use pistat_dataset::Cohort;

fn pistat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pistat"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pistat-cli-{}-{name}", std::process::id()))
}

#[test]
fn test_default_report_is_primary_text() {
    let output = pistat(&[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("ANOVA test: F = 56.521, p-value = 0.000"));
    assert!(stdout.contains("Pearson correlation between PI and NRS: 0.971, p-value: 0.000"));
    // logs stay off stdout and are quiet by default
    assert!(output.stderr.is_empty());
}

#[test]
fn test_report_json() {
    let output = pistat(&["report", "--variant", "secondary", "--format", "json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variant"], "secondary");
    assert_eq!(json["phase_t_tests"].as_array().unwrap().len(), 3);
}

#[test]
fn test_dataset_round_trip() {
    let path = temp_path("dataset.json");
    let output = pistat(&["dataset", "--output", path.to_str().unwrap()]);
    assert!(output.status.success());

    let cohort: Cohort = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(cohort, Cohort::builtin());

    let from_file = pistat(&["report", "--dataset", path.to_str().unwrap()]);
    let builtin = pistat(&["report"]);
    assert!(from_file.status.success());
    assert_eq!(from_file.stdout, builtin.stdout);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_dataset_fails_with_context() {
    let path = temp_path("missing.json");
    let output = pistat(&["report", "--dataset", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to open dataset file"));
}

#[test]
fn test_invalid_alpha_fails() {
    let output = pistat(&["report", "--alpha", "1.5"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
