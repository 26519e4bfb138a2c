//! Integration tests for the pulse binary.
//!
//! These tests verify end-to-end behavior including:
//! - Month grid rendering and navigation
//! - Schedule edits from the command line
//! - Mood wheel resolution from pointer positions
//! - Mood check-in history
//! - JSON output shape
//! - Config validation errors

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to write a config file with the stock wheel geometry
fn setup_config() -> (TempDir, std::path::PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        concat!(
            "[wheel]\nsize = 280.0\nradius = 110.0\n\n",
            "[calendar]\ninitial_year = 2024\ninitial_month = 11\nselected_day = 22\n",
        ),
    )
    .expect("Failed to write config");
    (temp_dir, path)
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("pulse"))
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let (_dir, config) = setup_config();
    let output = cli()
        .args(args)
        .arg("--config")
        .arg(&config)
        .arg("--json")
        .output()
        .expect("Failed to run pulse");
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).expect("Invalid JSON output")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mood wheel and training calendar companion",
        ));
}

#[test]
fn test_default_command_shows_configured_month() {
    let (_dir, config) = setup_config();

    cli()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("December 2024"))
        .stdout(predicate::str::contains("MON"))
        .stdout(predicate::str::contains("[22]*"))
        .stdout(predicate::str::contains("2024-12-22: Upper Body"))
        .stdout(predicate::str::contains("Arm Blaster"));
}

#[test]
fn test_calendar_json_grid() {
    let value = json_output(&["calendar", "--year", "2024", "--month", "11"]);

    assert_eq!(value["month_name"], "December");
    assert_eq!(value["selected_day"], 22);

    let cells = value["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 42);
    assert_eq!(cells[0]["day_of_month"], 25);
    assert_eq!(cells[0]["belongs_to_displayed_month"], false);
    assert_eq!(cells[6]["day_of_month"], 1);
    assert_eq!(cells[6]["belongs_to_displayed_month"], true);

    // 8 December sits at index 6 + 7
    assert_eq!(cells[13]["day_of_month"], 8);
    assert_eq!(cells[13]["has_workout"], true);

    assert_eq!(value["workouts"].as_array().unwrap().len(), 7);
}

#[test]
fn test_calendar_navigation_wraps_year() {
    let (_dir, config) = setup_config();

    cli()
        .args(["calendar", "--offset", "1"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2025"))
        .stdout(predicate::str::contains("No workouts scheduled this month"));

    let value = json_output(&["calendar", "--year", "2025", "--month", "0", "--offset", "-1"]);
    assert_eq!(value["year"], 2024);
    assert_eq!(value["month"], 11);
}

#[test]
fn test_navigation_resets_selection() {
    let value = json_output(&["calendar", "--offset", "-1"]);
    assert_eq!(value["month_name"], "November");
    assert_eq!(value["selected_day"], 1);
}

#[test]
fn test_any_offset_resets_selection() {
    // Lands back on the configured month, but by navigating
    let value = json_output(&["calendar", "--month", "10", "--offset", "1"]);
    assert_eq!(value["month_name"], "December");
    assert_eq!(value["selected_day"], 1);

    let value = json_output(&["calendar", "--offset", "0"]);
    assert_eq!(value["selected_day"], 22);
}

#[test]
fn test_calendar_assign_and_remove() {
    let (_dir, config) = setup_config();

    cli()
        .args(["calendar", "--assign", "9=hiit cardio", "--remove", "8"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added HIIT Cardio on 2024-12-09"))
        .stdout(predicate::str::contains("✓ Removed Arm Blaster from 2024-12-08"))
        .stdout(predicate::str::contains("Mon  9  HIIT Cardio (20m - 25m)"))
        .stdout(predicate::str::contains("Arm Blaster").count(1));

    let value = json_output(&["calendar", "--assign", "3=1", "--assign", "22=Core & Abs"]);
    let cells = value["cells"].as_array().unwrap();
    assert_eq!(cells[8]["day_of_month"], 3);
    assert_eq!(cells[8]["has_workout"], true);

    let workouts = value["workouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 8);
    assert_eq!(workouts[0]["key"], "2024-12-03");
    assert_eq!(workouts[0]["workout"]["title"], "Upper Body");
    assert_eq!(workouts[7]["key"], "2024-12-22");
    assert_eq!(workouts[7]["workout"]["title"], "Core & Abs");
}

#[test]
fn test_calendar_edits_reject_bad_input() {
    let (_dir, config) = setup_config();

    cli()
        .args(["calendar", "--remove", "32"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidDate"));

    cli()
        .args(["calendar", "--assign", "3=Zumba"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown workout template"));

    cli()
        .args(["calendar", "--assign", "3"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected DAY=TEMPLATE"));
}

#[test]
fn test_invalid_month_fails() {
    let (_dir, config) = setup_config();

    cli()
        .args(["calendar", "--year", "2024", "--month", "12"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidMonth"));
}

#[test]
fn test_mood_from_pointer() {
    let (_dir, config) = setup_config();

    // Straight above the center
    cli()
        .args(["mood", "140", "30"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Calm"));
}

#[test]
fn test_mood_json_snaps_to_nearest() {
    // Handle position for 200 degrees on the stock wheel
    let value = json_output(&["mood", "102.38", "243.37"]);

    assert_eq!(value["label"], "Content");
    assert_eq!(value["mood"], "content");
    let angle = value["angle"].as_f64().unwrap();
    assert!((angle - 200.0).abs() < 0.01, "angle was {}", angle);

    assert_eq!(value["center"]["x"], 140.0);
    assert_eq!(value["center"]["y"], 140.0);
    assert_eq!(value["radius"], 110.0);
    assert_eq!(value["handle_radius"], 12.0);
}

#[test]
fn test_mood_rejects_non_finite_pointer() {
    let (_dir, config) = setup_config();

    for args in [["mood", "NaN", "0"], ["mood", "0", "inf"]] {
        cli()
            .args(args)
            .arg("--config")
            .arg(&config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("finite"));
    }
}

#[test]
fn test_mood_trace_reports_changes() {
    let (_dir, config) = setup_config();

    cli()
        .args(["mood-trace", "140,30", "141,30", "250,140", "30,140"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Calm"))
        .stdout(predicate::str::contains("Peaceful"))
        .stdout(predicate::str::contains("Checked in as Energetic"));

    let value = json_output(&["mood-trace", "140,30", "141,30", "250,140"]);
    assert_eq!(value["changes"], serde_json::json!(["calm", "peaceful"]));
    assert_eq!(value["logged"]["mood"], "peaceful");
    assert_eq!(value["history_len"], 4);
}

#[test]
fn test_mood_trace_negative_samples_after_separator() {
    let (_dir, config) = setup_config();

    // Left of the wheel (270 degrees), then straight above
    cli()
        .arg("--config")
        .arg(&config)
        .args(["mood-trace", "--", "-10,140", "140,30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Energetic"))
        .stdout(predicate::str::contains("Checked in as Calm"));
}

#[test]
fn test_mood_history_seeded() {
    let (_dir, config) = setup_config();

    cli()
        .arg("mood-history")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood history (3 of 10)"))
        .stdout(predicate::str::contains("Happy"))
        .stdout(predicate::str::contains("Dec 21  09:15 AM"));

    let value = json_output(&["mood-history"]);
    assert_eq!(value["limit"], 10);
    let entries = value["entries"].as_array().unwrap();
    let moods: Vec<_> = entries.iter().map(|e| e["mood"].clone()).collect();
    assert_eq!(moods, vec!["happy", "calm", "energetic"]);
    assert_eq!(entries[1]["date"], "Dec 20");
    assert_eq!(entries[2]["time"], "07:45 AM");
}

#[test]
fn test_mood_history_records_newest_first_and_caps() {
    let mut args = vec!["mood-history"];
    for mood in ["calm", "peaceful", "happy", "content", "energetic"] {
        args.extend(["--record", mood]);
    }
    args.extend(["--record", "Calm", "--record", "Happy", "--record", "Peaceful"]);

    let value = json_output(&args);
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["mood"], "peaceful");
    assert_eq!(entries[7]["mood"], "calm");
    // The seeded Dec 19 check-in fell off the end
    assert_eq!(entries[8]["mood"], "happy");
    assert_eq!(entries[8]["date"], "Dec 21");
    assert_eq!(entries[9]["mood"], "calm");
    assert_eq!(entries[9]["date"], "Dec 20");
}

#[test]
fn test_mood_history_rejects_unknown_mood() {
    cli()
        .args(["mood-history", "--record", "grumpy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grumpy"));
}

#[test]
fn test_mood_trace_rejects_bad_sample() {
    cli()
        .args(["mood-trace", "not-a-point"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected x,y"));
}

#[test]
fn test_templates() {
    let (_dir, config) = setup_config();

    cli()
        .arg("templates")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("HIIT Cardio"))
        .stdout(predicate::str::contains("Core & Abs"));
}

#[test]
fn test_invalid_config_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[wheel]\nradius = 500.0\n").unwrap();

    cli()
        .arg("templates")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("wheel.radius"));
}
