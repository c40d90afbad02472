//! Integration tests for the bank deposit CLI.
//!
//! These tests run the actual binary with scripted stdin.

use assert_cmd::Command;
use predicates::prelude::*;

const RETRY: &str = "Введите корректное значение : ";

/// Run the binary with the given stdin and return stdout
fn run_cli(stdin: &str) -> String {
    let mut cmd = Command::cargo_bin("bank-deposit").unwrap();
    let assert = cmd.write_stdin(stdin).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_end_to_end_scenario() {
    let output = run_cli("MyBank\n5\n2000\n10\n");

    assert!(output.contains("bank name MyBank\n"));
    assert!(output.contains("Размер общей выплаты по процентам: 1000.0\n"));
    assert!(!output.contains(RETRY));
}

#[test]
fn test_prompts_appear_in_order() {
    let output = run_cli("MyBank\n5\n2000\n10\n");

    let name = output.find("Введите название банка : ").unwrap();
    let amount = output.find("Введите количество вкладов : ").unwrap();
    let size = output.find("Введите размер депозита : ").unwrap();
    let rate = output.find("Введите размер процентной ставки : ").unwrap();
    assert!(name < amount && amount < size && size < rate);
}

#[test]
fn test_invalid_answers_are_retried() {
    let output = run_cli("   \nMyBank\n0\nabc\n1\n-5\n100\n1001\n1000\n");

    assert_eq!(output.matches(RETRY).count(), 5);
    // 1 * (100 * 1000 / 100)
    assert!(output.contains("Размер общей выплаты по процентам: 1000.0"));
}

#[test]
fn test_fractional_payment() {
    let output = run_cli("Tiny\n1\n10\n5\n");
    assert!(output.contains("Размер общей выплаты по процентам: 0.5\n"));
}

#[test]
fn test_bank_name_is_trimmed() {
    let output = run_cli("  Big Bank  \n1\n100\n1\n");
    assert!(output.contains("bank name Big Bank\n"));
}

#[test]
fn test_truncated_input_fails() {
    let mut cmd = Command::cargo_bin("bank-deposit").unwrap();
    cmd.write_stdin("MyBank\n5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input ended"));
}

#[test]
fn test_empty_input_fails() {
    let mut cmd = Command::cargo_bin("bank-deposit").unwrap();
    cmd.write_stdin("")
        .assert()
        .failure()
        .stdout(predicate::str::contains("bank name").not())
        .stderr(predicate::str::contains("Error"));
}
