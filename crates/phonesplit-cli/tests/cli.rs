use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

const CONTACTS: &str = "\
Name,Phone
Asha,+91 98765 43210
Jonas,+49 176 1234 5678
Ravi,9876543210
Lena,+4915112345678
Meera,919812345678
";

fn write_input(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("contacts.csv");
    fs::write(&path, contents).expect("write input");
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("phonesplit")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run command")
}

#[test]
fn cli_splits_and_prints_summary() {
    let temp = TempDir::new().expect("temp dir");
    write_input(temp.path(), CONTACTS);

    let output = run(
        temp.path(),
        &[
            "contacts.csv",
            "--indian-output",
            "out/indian.csv",
            "--international-output",
            "out/international.csv",
        ],
    );
    assert!(output.status.success(), "command failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Reading file from: contacts.csv"));
    assert!(stdout.contains("Total entries: 5"));
    assert!(stdout.contains("Indian phone numbers: 3 (60.00%)"));
    assert!(stdout.contains("International phone numbers: 2 (40.00%)"));
    assert!(stdout.contains("Germany: 2 (100.00%)"));

    let indian = fs::read_to_string(temp.path().join("out/indian.csv")).expect("indian");
    assert_eq!(indian.lines().count(), 4);
    assert!(!indian.contains("Country"));

    let international =
        fs::read_to_string(temp.path().join("out/international.csv")).expect("international");
    let lines: Vec<&str> = international.lines().collect();
    assert_eq!(lines[0], "Name,Phone,Country");
    assert_eq!(lines.len(), 3);
    assert!(lines[1..].iter().all(|line| line.ends_with(",Germany")));
}

#[test]
fn cli_uses_default_output_paths() {
    let temp = TempDir::new().expect("temp dir");
    write_input(temp.path(), CONTACTS);

    let output = run(temp.path(), &["contacts.csv"]);
    assert!(output.status.success(), "command failed: {:?}", output);
    assert!(temp.path().join("indian_numbers.csv").is_file());
    assert!(temp.path().join("international_numbers.csv").is_file());
}

#[test]
fn cli_json_summary() {
    let temp = TempDir::new().expect("temp dir");
    write_input(temp.path(), CONTACTS);

    let output = run(temp.path(), &["--json", "contacts.csv"]);
    assert!(output.status.success(), "command failed: {:?}", output);
    let report: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(report["total"], 5);
    assert_eq!(report["indian"], 3);
    assert_eq!(report["international"], 2);
    assert_eq!(report["countries"][0]["country"], "Germany");
    assert_eq!(report["countries"][0]["count"], 2);
}

#[test]
fn cli_custom_phone_column() {
    let temp = TempDir::new().expect("temp dir");
    write_input(temp.path(), "Name,Mobile\nAsha,9876543210\nTom,+447700900123\n");

    let output = run(temp.path(), &["--json", "contacts.csv", "--phone-column", "Mobile"]);
    assert!(output.status.success(), "command failed: {:?}", output);
    let report: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(report["indian"], 1);
    assert_eq!(report["countries"][0]["country"], "UK");
}

#[test]
fn cli_missing_column_exits_with_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    write_input(temp.path(), CONTACTS);

    let output = run(temp.path(), &["contacts.csv", "--phone-column", "Mobile"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("available columns: Name, Phone"), "{stderr}");
    assert!(stderr.contains("--phone-column"), "{stderr}");
    assert!(!temp.path().join("indian_numbers.csv").exists());
    assert!(!temp.path().join("international_numbers.csv").exists());
}

#[test]
fn cli_missing_input_exits_with_failure() {
    let temp = TempDir::new().expect("temp dir");

    let output = run(temp.path(), &["absent.csv"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("absent.csv"), "{stderr}");
}

#[test]
fn cli_rejects_shared_output_path() {
    let temp = TempDir::new().expect("temp dir");
    write_input(temp.path(), CONTACTS);

    let output = run(
        temp.path(),
        &[
            "contacts.csv",
            "--indian-output",
            "same.csv",
            "--international-output",
            "same.csv",
        ],
    );
    assert_eq!(output.status.code(), Some(3));
    assert!(!temp.path().join("same.csv").exists());
}

#[test]
fn cli_warns_on_header_only_input() {
    let temp = TempDir::new().expect("temp dir");
    write_input(temp.path(), "Name,Phone\n");

    let output = cargo_bin_cmd!("phonesplit")
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .arg("contacts.csv")
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Total entries: 0"));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("input has no data rows"), "{stderr}");
}
