//! End-to-end tests that drive the compiled binary through its menu

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn store_lines(dir: &TempDir) -> Vec<String> {
    std::fs::read_to_string(dir.path().join("expenses.csv"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn exit_creates_sample_store() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Tracker Menu:"))
        .stdout(predicate::str::ends_with("Exiting Expense Tracker. Goodbye!\n"));

    let lines = store_lines(&dir);
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "Date,Amount,Category,Description");
}

#[test]
fn second_run_keeps_store_unchanged() {
    let dir = TempDir::new().unwrap();

    tracker(&dir).write_stdin("5\n").assert().success();
    let first = std::fs::read(dir.path().join("expenses.csv")).unwrap();

    tracker(&dir).write_stdin("5\n").assert().success();
    let second = std::fs::read(dir.path().join("expenses.csv")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn added_expense_persists_across_runs() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .write_stdin("1\n123.45\n1\ntest, with comma\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));

    tracker(&dir)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Amount: ₹123.45, Category: Food, Description: test, with comma",
        ));

    let lines = store_lines(&dir);
    assert_eq!(lines.len(), 17);
    assert!(lines[16].ends_with(",123.45,Food,\"test, with comma\""));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .write_stdin("1\nten\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input! Please try again."));

    assert_eq!(store_lines(&dir).len(), 16);
}

#[test]
fn monthly_summary_keeps_first_seen_order() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("expenses.csv"),
        "Date,Amount,Category,Description\n\
         2024-04-01,100,Food,late\n\
         2024-03-01,500,Food,a\n\
         2024-03-06,600,Food,b\n",
    )
    .unwrap();

    tracker(&dir)
        .write_stdin("3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Month: 2024-04, Total Expense: ₹100.00\nMonth: 2024-03, Total Expense: ₹1100.00\n",
        ));
}

#[test]
fn settings_file_changes_currency_symbol() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("expense_tracker.json"),
        r#"{"currency_symbol": "$"}"#,
    )
    .unwrap();

    tracker(&dir)
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Shopping, Total Expense: $4300.00"));
}

#[test]
fn malformed_settings_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("expense_tracker.json"), "{").unwrap();

    tracker(&dir)
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
