use assert_cmd::Command;
use predicates::prelude::*;

fn parking() -> Command {
    Command::cargo_bin("parking").unwrap()
}

#[test]
fn test_menu_and_quit() {
    parking()
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("PARKING MANAGEMENT"))
        .stdout(predicate::str::contains("1. Vehicle Entry"))
        .stdout(predicate::str::contains("4. Exit"))
        .stdout(predicate::str::ends_with("Choose: "));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    parking().write_stdin("").assert().success();
}

#[test]
fn test_entry_exit_and_report() {
    parking()
        .write_stdin("1\nABC123\n2\n1\n1\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket issued. ID: 1"))
        .stdout(predicate::str::contains("License: ABC123"))
        .stdout(predicate::str::contains("Parking duration: 0.0 hours"))
        .stdout(predicate::str::contains("Amount due: $0.00"))
        .stdout(predicate::str::contains("Vehicle exited."))
        .stdout(predicate::str::contains("PARKING REPORT"))
        .stdout(predicate::str::contains("ABC123       0.0     Yes     $0.00"))
        .stdout(predicate::str::contains("TOTAL REVENUE: $0.00"));
}

#[test]
fn test_exit_with_no_vehicles() {
    parking()
        .write_stdin("2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active vehicles!"))
        .stdout(predicate::str::contains("Enter ticket ID").not());
}

#[test]
fn test_unknown_ticket() {
    parking()
        .write_stdin("1\nAAA111\n2\n99\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket ID not found!"));
}

#[test]
fn test_bad_menu_input() {
    parking()
        .write_stdin("hello\n9\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a number!"))
        .stdout(predicate::str::contains("Invalid choice!"));
}

#[test]
fn test_logs_stay_off_stdout() {
    parking()
        .args(["-vv"])
        .write_stdin("1\nABC123\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket issued").and(predicate::str::contains("INFO").not()))
        .stderr(predicate::str::contains("Ticket issued"));
}

#[test]
fn test_config_command() {
    parking()
        .args(["--currency", "€", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"currency_symbol\": \"€\""))
        .stdout(predicate::str::contains("\"log_level\": \"warn\""));
}

#[test]
fn test_rejects_blank_currency() {
    parking()
        .args(["--currency", "", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Currency symbol cannot be empty"));
}
