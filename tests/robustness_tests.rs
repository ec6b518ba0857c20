use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_corrupt_log_is_replaced() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("payment_logs.json");
    std::fs::write(&log_path, "not json").unwrap();

    let mut cmd = Command::new(cargo_bin!("paylog"));
    cmd.arg("--log-path")
        .arg(&log_path)
        .args(["pay", "--amount", "3", "--method", "Crypto", "--reference", "0xabc"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("transaction log is unreadable"));

    let log: Vec<serde_json::Value> =
        serde_json::from_slice(&std::fs::read(&log_path).unwrap()).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0]["method"], "Crypto");
}

#[test]
fn test_invalid_input_never_reaches_the_log() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("payment_logs.json");

    let cases: [(&[&str], &str); 4] = [
        (&["--amount", "abc", "--method", "PayPal"], "Please enter a valid amount."),
        (&["--amount=-4", "--method", "PayPal"], "Amount must be positive"),
        (&["--amount", "4"], "Please select a payment method."),
        (&["--amount", "4", "--method", "Cheque"], "Unknown payment method: Cheque"),
    ];

    for (args, message) in cases {
        let mut cmd = Command::new(cargo_bin!("paylog"));
        cmd.arg("--log-path")
            .arg(&log_path)
            .arg("pay")
            .args(args)
            .args(["--reference", "x"]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains(message));
    }

    assert!(!log_path.exists());
}

#[test]
fn test_batch_skips_bad_rows() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("payment_logs.json");

    let mut cmd = Command::new(cargo_bin!("paylog"));
    cmd.arg("--log-path")
        .arg(&log_path)
        .arg("batch")
        .arg("tests/fixtures/payments.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Payment of $19.99 via PayPal completed and logged.",
        ))
        .stdout(predicate::str::contains("Payment of $5.00 via Credit Card"))
        .stdout(predicate::str::contains("Payment of $7.25 via Apple Pay"))
        .stderr(predicate::str::contains("Please enter a valid amount."))
        .stderr(predicate::str::contains("no IBAN provided"));

    let log: Vec<serde_json::Value> =
        serde_json::from_slice(&std::fs::read(&log_path).unwrap()).unwrap();
    let methods: Vec<&str> = log.iter().map(|e| e["method"].as_str().unwrap()).collect();
    assert_eq!(methods, ["PayPal", "CreditCard", "ApplePay"]);
}
