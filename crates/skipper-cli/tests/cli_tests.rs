use std::fs;
use std::path::Path;

use assert_cmd::Command;
use jiff::{ToSpan, Zoned};
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn skipper_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sk").expect("Failed to find sk binary");
    cmd.arg("--no-color");
    cmd
}

/// Write a wizard command script and return a command that runs it
fn scripted(dir: &Path, script: &str) -> Command {
    let script_path = dir.join("wizard.txt");
    fs::write(&script_path, script).expect("Failed to write script");

    let mut cmd = skipper_cmd();
    cmd.args(["--script", script_path.to_str().unwrap()]);
    cmd
}

/// A delivery date comfortably inside the bookable window, as YYYY-MM-DD
fn bookable_date() -> String {
    Zoned::now().date().saturating_add(7.days()).to_string()
}

#[test]
fn test_cli_help() {
    skipper_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("booking wizard"))
        .stdout(predicate::str::contains("--script"));
}

#[test]
fn test_cli_starts_on_location_step() {
    let temp_dir = create_cli_test_environment();

    scripted(temp_dir.path(), "quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your location"))
        .stdout(predicate::str::contains("➤ Confirm Postcode"))
        .stdout(predicate::str::contains("Session ended"));
}

#[test]
fn test_cli_complete_booking() {
    let temp_dir = create_cli_test_environment();
    let script = format!(
        "lookup NR3\n\
         set postcode nr32 1ab\n\
         set city Lowestoft\n\
         set street High Street\n\
         set house 12\n\
         next\n\
         waste household,garden\n\
         next\n\
         skip 8\n\
         next\n\
         place private\n\
         next\n\
         date {}\n\
         next\n\
         pay\n\
         quit\n",
        bookable_date()
    );

    scripted(temp_dir.path(), &script)
        .assert()
        .success()
        // Short partials never hit the network
        .stdout(predicate::str::contains("at least 4 characters"))
        .stdout(predicate::str::contains("Selected: Household Waste, Garden Waste"))
        .stdout(predicate::str::contains("Selected 8 Yard Skip - £331"))
        .stdout(predicate::str::contains("Complete Your Order"))
        .stdout(predicate::str::contains("**Delivery Address**: 12 High Street, Lowestoft"))
        .stdout(predicate::str::contains("**Postcode**: NR32 1AB"))
        .stdout(predicate::str::contains("**VAT (20%)**: £66.20"))
        .stdout(predicate::str::contains("**Total**: £397.20"))
        .stdout(predicate::str::contains("Payment completed successfully!"));
}

#[test]
fn test_cli_lookup_failure_is_inline_and_not_fatal() {
    let temp_dir = create_cli_test_environment();

    // Port 1 refuses the connection; the session must carry on.
    let mut cmd = scripted(temp_dir.path(), "lookup NR32\nquit\n");
    cmd.args(["--lookup-url", "http://127.0.0.1:1/"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Error fetching location data. Please try again.",
        ))
        .stdout(predicate::str::contains("Session ended"));
}

#[test]
fn test_cli_back_at_first_step_is_noop() {
    let temp_dir = create_cli_test_environment();

    scripted(temp_dir.path(), "back\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already at the first step."));
}

#[test]
fn test_cli_next_requires_a_selection() {
    let temp_dir = create_cli_test_environment();

    scripted(temp_dir.path(), "next\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please make a selection to continue."));
}

#[test]
fn test_cli_rejects_jump_ahead_of_progress() {
    let temp_dir = create_cli_test_environment();

    scripted(temp_dir.path(), "goto payment\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You haven't reached Payment yet."));
}

#[test]
fn test_cli_selection_commands_are_step_scoped() {
    let temp_dir = create_cli_test_environment();

    scripted(temp_dir.path(), "waste household\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "That command belongs to the Waste Types step",
        ));
}

#[test]
fn test_cli_unknown_command_is_reported_inline() {
    let temp_dir = create_cli_test_environment();

    scripted(temp_dir.path(), "frobnicate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: frobnicate"));
}

#[test]
fn test_cli_rejects_past_delivery_dates() {
    let temp_dir = create_cli_test_environment();
    let script = "set postcode NR32 1AB\n\
                  set city Lowestoft\n\
                  set street High Street\n\
                  set house 12\n\
                  next\n\
                  waste garden\n\
                  next\n\
                  skip 4\n\
                  next\n\
                  place private\n\
                  next\n\
                  date 2020-01-01\n\
                  quit\n";

    scripted(temp_dir.path(), script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Delivery date cannot be in the past"));
}

#[test]
fn test_cli_retains_progress_after_going_back() {
    let temp_dir = create_cli_test_environment();
    let script = format!(
        "set postcode NR32 1AB\n\
         set city Lowestoft\n\
         set street High Street\n\
         set house 12\n\
         next\n\
         waste household\n\
         next\n\
         skip 6\n\
         next\n\
         place private\n\
         next\n\
         date {}\n\
         next\n\
         back\n\
         back\n\
         next\n\
         quit\n",
        bookable_date()
    );

    scripted(temp_dir.path(), &script)
        .assert()
        .success()
        // After two backs from Payment the stepper notes the high-water mark
        .stdout(predicate::str::contains("(reached: Payment)"))
        // One more `next` lands on the permit step, not back at Payment
        .stdout(predicate::str::contains("Where will the skip be placed?"));
}

#[test]
fn test_cli_warns_about_road_restricted_sizes() {
    let temp_dir = create_cli_test_environment();
    let script = "set postcode NR32 1AB\n\
                  set city Lowestoft\n\
                  set street High Street\n\
                  set house 12\n\
                  next\n\
                  waste construction\n\
                  next\n\
                  skip 12\n\
                  next\n\
                  place public\n\
                  quit\n";

    scripted(temp_dir.path(), script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Not Allowed On The Road"))
        .stdout(predicate::str::contains("not allowed on public roads"));
}
