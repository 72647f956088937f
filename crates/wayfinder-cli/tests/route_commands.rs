use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn cli() -> Command {
    cargo_bin_cmd!("wayfinder-cli")
}

fn prepare_command() -> Command {
    let mut cmd = cli();
    cmd.env_remove("WAYFINDER_FACILITY")
        .env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .arg("--no-logo")
        .arg("--no-footer")
        .arg("--facility")
        .arg(fixture_path("campus.json"));
    cmd
}

#[test]
fn route_prints_summary_and_directions() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Main Gate", "--to", "hod"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Interpreted destination: HOD Cabin-1"))
        .stdout(predicate::str::contains("Total steps: 6"))
        .stdout(predicate::str::contains(
            "- Walk from Reception to Stairs-GF-1F using the stairs.",
        ))
        .stdout(predicate::str::contains("You have reached your destination ✅"));
}

#[test]
fn json_format_outputs_summary() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "route", "--from", "lift", "--to", "a-201"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json stdout");
    assert_eq!(value["start"]["place"], "Lift-1");
    assert_eq!(value["goal"]["place"], "A-201");
    assert_eq!(value["directions"][0]["kind"], "lift");
}

#[test]
fn enhanced_format_tags_waypoints() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "enhanced", "route", "--from", "gate", "--to", "a-101"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("STRT Main Gate (Ground Floor)"))
        .stdout(predicate::str::contains("WALK Reception (Ground Floor)"))
        .stdout(predicate::str::contains("GOAL A-101 (Ground Floor)"));
}

#[test]
fn unknown_source_error_is_friendly() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "recepton", "--to", "lab"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Source location not found for: 'recepton'.",
        ))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn disconnected_places_report_no_route() {
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .args(["--no-logo", "--facility"])
        .arg(fixture_path("split_wings.json"))
        .args(["route", "--from", "east entrance", "--to", "storeroom"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "No route found between East Entrance and West Storeroom.",
    ));
}

#[test]
fn places_lists_configured_order() {
    let mut cmd = prepare_command();
    cmd.arg("places");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Known locations:\n- Main Gate (Ground Floor)\n- Reception (Ground Floor)\n",
        ))
        .stdout(predicate::str::contains("- HOD Cabin-1 (Second Floor)"));
}

#[test]
fn resolve_reports_alternatives() {
    let mut cmd = prepare_command();
    cmd.args(["resolve", "room"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Interpreted place: Clubs Room"))
        .stdout(predicate::str::contains("Other matches: Sports Room, Faculty Room-1"));
}

#[test]
fn resolve_miss_fails() {
    let mut cmd = prepare_command();
    cmd.args(["resolve", "zzzz"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown place: 'zzzz'"));
}

#[test]
fn missing_facility_file_fails() {
    let temp = tempdir().expect("temp dir");
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .arg("--facility")
        .arg(temp.path().join("absent.json"))
        .arg("places");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load facility configuration"));
}

#[test]
fn facility_from_environment_variable() {
    let temp = tempdir().expect("temp dir");
    let path = temp.path().join("annex.json");
    fs::write(
        &path,
        r#"{"name": "Annex", "places": [
            {"id": "Lobby", "floor": "Ground", "neighbours": ["Lift-A"]},
            {"id": "Lift-A", "floor": "Ground", "neighbours": ["Lobby", "Office"]},
            {"id": "Office", "floor": "Third", "neighbours": ["Lift-A"]}
        ]}"#,
    )
    .expect("write facility");

    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .env("WAYFINDER_FACILITY", &path)
        .args(["--no-logo", "--no-footer", "route", "--from", "lobby", "--to", "office"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "- Walk from Lobby to Lift-A and use the lift.",
        ))
        .stdout(predicate::str::contains(
            "- Walk from Lift-A to Office and use the lift.",
        ));
}

#[test]
fn logo_and_footer_shown_by_default() {
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env("LANG", "C")
        .env_remove("LC_ALL")
        .arg("--facility")
        .arg(fixture_path("campus.json"))
        .arg("places");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Indoor Navigation System (Campus Demo)"))
        .stdout(predicate::str::contains("Completed in"));
}
