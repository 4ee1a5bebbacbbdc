mod common;

use assert_cmd::assert::Assert;
use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn run_session(rows: &[[&str; 4]]) -> Assert {
    let dir = tempfile::tempdir().unwrap();
    let profiles = dir.path().join("profiles.json");
    let session = dir.path().join("session.csv");
    common::write_profiles(&profiles).unwrap();
    common::write_session(&session, rows).unwrap();

    let mut cmd = Command::new(cargo_bin!("teller"));
    cmd.arg(&session).arg("--profiles").arg(&profiles);
    cmd.assert()
}

#[test]
fn test_withdraw_needs_funds() {
    let assert = run_session(&[
        ["login", "1234 1234 1234 1234", "4444", ""],
        ["withdraw", "1234 1234 1234 1234", "4444", "99999"],
    ]);

    assert
        .success()
        .stdout(predicate::str::contains(
            "You don't have enough money on your account to withdraw that amount, try again",
        ))
        .stdout(predicate::str::contains(
            "1234 1234 1234 1234,1400,0,false,Ikano Bank",
        ));
}

#[test]
fn test_withdraw_without_login_is_rejected() {
    // No login record: the visible balance is 0, so even a small withdrawal
    // bounces and the account is untouched.
    let assert = run_session(&[["withdraw", "1234 1234 1234 1234", "4444", "100"]]);

    assert
        .success()
        .stdout(predicate::str::contains(
            "You don't have enough money on your account to withdraw that amount, try again",
        ))
        .stdout(predicate::str::contains(
            "1234 1234 1234 1234,1400,0,false,Ikano Bank",
        ));
}

#[test]
fn test_deposit_lands_without_login() {
    let assert = run_session(&[["deposit", "1234 1234 1234 1234", "", "2000"]]);

    assert
        .success()
        .stdout(predicate::str::contains("Amount deposited: 2000"))
        .stdout(predicate::str::contains(
            "1234 1234 1234 1234,3400,0,false,Ikano Bank",
        ));
}

#[test]
fn test_withdraw_drains_to_exact_zero() {
    let assert = run_session(&[
        ["login", "1234 1234 1234 1234", "4444", ""],
        ["withdraw", "1234 1234 1234 1234", "4444", "1400"],
    ]);

    assert
        .success()
        .stdout(predicate::str::contains("Amount withdrawn: 1400"))
        .stdout(predicate::str::contains(
            "1234 1234 1234 1234,0,0,false,Ikano Bank",
        ));
}

#[test]
fn test_unknown_card_skips_record_and_continues() {
    let assert = run_session(&[
        ["identify", "9999 9999 9999 9999", "", ""],
        ["login", "1234 1234 1234 1234", "4444", ""],
    ]);

    // The bad record lands on stderr; the rest of the session still runs
    // and the phantom card never reaches the statement.
    assert
        .success()
        .stderr(predicate::str::contains("Error processing operation"))
        .stderr(predicate::str::contains("Unknown card id"))
        .stdout(predicate::str::contains("Logged in successfully"))
        .stdout(predicate::str::contains("9999 9999 9999 9999").not());
}
