mod common;

use std::fs;

use common::{script_cli, temp_home};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn script_mode_deposits_into_first_pot() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("pot add 1\nset amount 50\nsubmit\nexit\n")
        .assert()
        .success()
        .stdout(contains("New amount: $209.00"))
        .stdout(contains("Added money to 'Savings'. Total saved: $209.00."))
        .stdout(contains("10.45%"));
}

#[test]
fn withdrawing_the_whole_total_is_rejected() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("pot withdraw 'Concert Ticket'\nset amount 110\nsubmit\ncancel\n")
        .assert()
        .success()
        .stdout(contains("Amount cannot be greater than current amount"))
        .stdout(contains("Closed the withdraw dialog."))
        .stdout(contains("Withdrew from").not());
}

#[test]
fn create_flow_adds_a_sixth_pot() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("pot new\nset name Bike\nset target 300\ncolor Red\nsubmit\n")
        .assert()
        .success()
        .stdout(contains("Theme set to Red (#C94736)."))
        .stdout(contains("Created pot 'Bike'."))
        .stdout(contains("6. "));
}

#[test]
fn long_names_are_flagged_while_typing() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("pot new\nset name 'A name that is thirty-one chars'\nsubmit\n")
        .assert()
        .success()
        .stdout(contains("Too Long!"))
        .stdout(contains("Created pot").not());
}

#[test]
fn theme_held_by_another_pot_cannot_be_picked() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("pot new\ncolor '#277C78'\n")
        .assert()
        .success()
        .stdout(contains("is already used by another pot"));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("overveiw\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `overveiw`"))
        .stdout(contains("Suggestion: `overview`?"));
}

#[test]
fn submit_without_dialog_reports_error() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("submit\n")
        .assert()
        .success()
        .stdout(contains("No dialog is open."));
}

#[test]
fn config_changes_are_persisted() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("config set plain_output true\nconfig set start_route /pots\n")
        .assert()
        .success()
        .stdout(contains("Saved plain_output."));

    let json = fs::read_to_string(home.join("config.json")).unwrap();
    assert!(json.contains("\"plain_output\": true"));
    assert!(json.contains("\"start_route\": \"/pots\""));
}

#[test]
fn unknown_start_route_is_rejected() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("config set start_route /settings\n")
        .assert()
        .success()
        .stdout(contains("unknown route `/settings`"));
    assert!(!home.join("config.json").exists());
}

#[test]
fn version_lists_build_metadata() {
    let home = temp_home();
    let pattern = predicate::str::is_match(r"Finance Dashboard \d+\.\d+\.\d+").unwrap();
    script_cli(&home)
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(pattern)
        .stdout(contains("Build hash"));
}

#[test]
fn unquoted_codes_and_broken_quotes_are_explained() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("pot new\ncolor #C94736\nset name \"Broken\n")
        .assert()
        .success()
        .stdout(contains("Quote colour codes: color '#C94736'."))
        .stdout(contains("usage: color <position|code|name>"))
        .stdout(contains("line 3:"));
}
