//! Integration tests for the wpath CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn write_config(dir: &std::path::Path, candidates: &[&str]) -> std::path::PathBuf {
    let config_file = dir.join("config.toml");
    let list = candidates
        .iter()
        .map(|c| format!("\"{}\"", c.replace('\\', "\\\\")))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(
        &config_file,
        format!("[ui]\nlanguage = \"en\"\n\n[candidates]\nunix = [{}]\n", list),
    )
    .unwrap();
    config_file
}

#[test]
fn test_assemble_prepends_existing_candidate() {
    let dir = tempdir().unwrap();
    let bin_dir = dir.path().join("tools");
    fs::create_dir(&bin_dir).unwrap();
    let bin = bin_dir.to_string_lossy().to_string();

    let config_file = write_config(dir.path(), &[&bin, "/bin"]);

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "--value",
        "/usr/bin:/bin",
        "assemble",
    ])
    .assert()
    .success()
    .stdout(predicate::str::diff(format!("{}:/usr/bin:/bin\n", bin)));
}

#[test]
fn test_assemble_empty_value_yields_candidates() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::create_dir(&a).unwrap();
    fs::create_dir(&b).unwrap();

    let missing = dir.path().join("missing").to_string_lossy().to_string();
    let config_file = write_config(
        dir.path(),
        &[&a.to_string_lossy(), &missing, &b.to_string_lossy()],
    );

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "--value",
        "",
        "assemble",
    ])
    .assert()
    .success()
    .stdout(predicate::str::diff(format!(
        "{}:{}\n",
        a.display(),
        b.display()
    )));
}

#[test]
fn test_assemble_report_goes_to_stderr() {
    let dir = tempdir().unwrap();
    let bin_dir = dir.path().join("tools");
    fs::create_dir(&bin_dir).unwrap();

    let config_file = write_config(dir.path(), &[&bin_dir.to_string_lossy()]);

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "--value",
        "/usr/bin",
        "assemble",
        "--report",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(format!("{}:/usr/bin", bin_dir.display())))
    .stderr(predicate::str::contains("added"))
    .stderr(predicate::str::contains("1 added, 0 skipped"));
}

#[test]
fn test_show_lists_entries() {
    let dir = tempdir().unwrap();
    let config_file = write_config(dir.path(), &[]);

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "--value",
        "/usr/bin:/bin",
        "show",
        "--full",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("/usr/bin"))
    .stdout(predicate::str::contains("Total: 2 entries"));
}

#[test]
fn test_check_flags_empty_segment() {
    let dir = tempdir().unwrap();
    let config_file = write_config(dir.path(), &[]);

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "--value",
        "/usr/bin::/bin",
        "check",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Empty entry"));
}

#[test]
fn test_check_clean_value() {
    let dir = tempdir().unwrap();
    let real = dir.path().to_string_lossy().to_string();
    let config_file = write_config(dir.path(), &[]);

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "--value",
        &real,
        "check",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_add_persists_candidate() {
    let dir = tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    let new_dir = dir.path().join("newbin");
    fs::create_dir(&new_dir).unwrap();

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "add",
        new_dir.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Added candidate"));

    let content = fs::read_to_string(&config_file).unwrap();
    assert!(content.contains("newbin"));
}

#[test]
fn test_add_duplicate_with_skip_strategy() {
    let dir = tempdir().unwrap();
    let new_dir = dir.path().join("newbin");
    fs::create_dir(&new_dir).unwrap();
    let config_file = write_config(dir.path(), &[&new_dir.to_string_lossy()]);

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "--on-conflict",
        "skip",
        "add",
        new_dir.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_add_missing_directory_warns_but_succeeds() {
    let dir = tempdir().unwrap();
    let config_file = dir.path().join("config.toml");

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "add",
        "/nonexistent-wpath-cli-test",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("does not exist yet"))
    .stdout(predicate::str::contains("Added candidate"));
}

#[test]
fn test_remove_unknown_candidate_reports_not_found() {
    let dir = tempdir().unwrap();
    let config_file = write_config(dir.path(), &[]);

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "remove",
        "/no/such/candidate",
    ])
    .assert()
    .success()
    .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_run_carries_assembled_path() {
    let dir = tempdir().unwrap();
    let bin_dir = dir.path().join("tools");
    fs::create_dir(&bin_dir).unwrap();
    let config_file = write_config(dir.path(), &[&bin_dir.to_string_lossy()]);

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "--value",
        "/usr/bin:/bin",
        "run",
        "--",
        "sh",
        "-c",
        "echo $PATH",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(format!(
        "{}:/usr/bin:/bin",
        bin_dir.display()
    )));
}

#[test]
fn test_run_applies_env_exports() {
    let dir = tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    fs::write(
        &config_file,
        "[env]\nWPATH_CLI_GREETING = \"hello from config\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "--value",
        "/usr/bin:/bin",
        "run",
        "--",
        "sh",
        "-c",
        "echo $WPATH_CLI_GREETING",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("hello from config"));
}

#[test]
fn test_run_propagates_exit_code() {
    let dir = tempdir().unwrap();
    let config_file = write_config(dir.path(), &[]);

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--platform",
        "unix",
        "--value",
        "/usr/bin:/bin",
        "run",
        "--",
        "sh",
        "-c",
        "exit 3",
    ])
    .assert()
    .code(3);
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    fs::write(&config_file, "not [valid toml").unwrap();

    let mut cmd = Command::cargo_bin("wpath").unwrap();
    cmd.args([
        "--config",
        config_file.to_str().unwrap(),
        "--value",
        "",
        "assemble",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("parse"));
}
