//! Integration tests for the hyplan binary.
//!
//! These tests verify end-to-end behavior including:
//! - Weekly plan output (text and JSON)
//! - Taper handling driven by --date
//! - Strength program output and safety filtering
//! - Catalog validation and error exits

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RUNNER_PROFILE: &str = r#"
goal = "endurance"
experienceLevel = "intermediate"
trainingDays = 4
equipment = "full_gym"
sport = "running"
trainingVolume = "intermediate"

[[raceGoals]]
type = "full_marathon"
date = "2026-05-11"
priority = "A"
"#;

/// Helper to create an isolated config home
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write file");
    path
}

/// Helper to get the CLI binary with config lookups confined to `home`
fn cli(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hyplan"));
    cmd.env("XDG_CONFIG_HOME", home);
    cmd
}

fn week_json(home: &Path, profile: &Path, date: &str) -> serde_json::Value {
    let output = cli(home)
        .args(["week", "--json", "--date", date, "--profile"])
        .arg(profile)
        .output()
        .expect("Failed to run hyplan");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("week --json should print JSON")
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hybrid strength and endurance training planner",
        ));
}

#[test]
fn test_week_text_output() {
    let temp_dir = setup_test_dir();
    let profile = write_file(temp_dir.path(), "athlete.toml", RUNNER_PROFILE);

    cli(temp_dir.path())
        .args(["week", "--date", "2026-03-02", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly plan (runner)"))
        .stdout(predicate::str::contains(
            "Tue: Strength: Lower A + Cardio: Run Intervals (45 min, hard)",
        ))
        .stdout(predicate::str::contains("Sun: Rest"))
        .stdout(predicate::str::contains("Total: 4 lift days, 190 cardio minutes"));
}

#[test]
fn test_week_json_contract() {
    let temp_dir = setup_test_dir();
    let profile = write_file(temp_dir.path(), "athlete.toml", RUNNER_PROFILE);

    let plan = week_json(temp_dir.path(), &profile, "2026-03-02");

    assert_eq!(plan["programType"], "runner");
    assert_eq!(plan["weeklyLiftDays"], 4);
    assert_eq!(plan["weeklyCardioMinutes"], 190);

    let days = plan["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    for (i, day) in days.iter().enumerate() {
        assert_eq!(day["dayIndex"], i);
    }
    assert_eq!(days[1]["cardio"]["templateId"], "run_intervals");
    assert_eq!(days[1]["cardio"]["type"], "run");
    assert_eq!(days[1]["strengthLabel"], "Lower A");
    // Optional fields are omitted rather than null
    assert!(days[0].get("cardio").is_none());
    assert_eq!(days[6]["isRest"], true);
}

#[test]
fn test_week_taper_from_date() {
    let temp_dir = setup_test_dir();
    let profile = write_file(temp_dir.path(), "athlete.toml", RUNNER_PROFILE);

    // 18 days before the marathon
    let plan = week_json(temp_dir.path(), &profile, "2026-04-23");
    let days = plan["days"].as_array().unwrap();

    for day in [1, 3, 5] {
        assert_eq!(days[day]["cardio"]["templateId"], "run_easy");
        assert_eq!(days[day]["cardio"]["intensity"], "easy");
        assert_eq!(days[day]["note"], "Taper: easy effort before race");
    }
    assert!(plan["description"].as_str().unwrap().contains("Taper"));
}

#[test]
fn test_week_is_deterministic() {
    let temp_dir = setup_test_dir();
    let profile = write_file(temp_dir.path(), "athlete.toml", RUNNER_PROFILE);

    let first = week_json(temp_dir.path(), &profile, "2026-03-02");
    let second = week_json(temp_dir.path(), &profile, "2026-03-02");
    assert_eq!(first, second);
}

#[test]
fn test_strength_text_output() {
    let temp_dir = setup_test_dir();
    let profile = write_file(temp_dir.path(), "athlete.toml", RUNNER_PROFILE);

    cli(temp_dir.path())
        .args(["strength", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Upper/Lower Muscular Endurance Program (4 days/week)",
        ))
        .stdout(predicate::str::contains("Day 1: Upper A"))
        .stdout(predicate::str::contains("Day 4: Lower B"));
}

#[test]
fn test_strength_json_respects_equipment_and_injuries() {
    let temp_dir = setup_test_dir();
    let profile = write_file(
        temp_dir.path(),
        "athlete.toml",
        r#"
goal = "muscle_gain"
experienceLevel = "beginner"
trainingDays = 3
equipment = "minimal"
injuries = ["shoulders"]
"#,
    );

    let output = cli(temp_dir.path())
        .args(["strength", "--json", "--profile"])
        .arg(&profile)
        .output()
        .expect("Failed to run hyplan");
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["split"], "full_body");
    assert_eq!(plan["type"], "hypertrophy");

    let workouts = plan["workouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 3);
    for workout in workouts {
        for exercise in workout["exercises"].as_array().unwrap() {
            let equipment = exercise["equipment"].as_array().unwrap();
            assert!(
                equipment.iter().any(|e| e == "dumbbells" || e == "bodyweight"),
                "{} needs unavailable equipment",
                exercise["name"]
            );
        }
    }
}

#[test]
fn test_today_shows_cardio() {
    let temp_dir = setup_test_dir();
    let profile = write_file(temp_dir.path(), "athlete.toml", RUNNER_PROFILE);

    cli(temp_dir.path())
        .args(["today", "--date", "2026-03-03", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tue strength: Lower A"))
        .stdout(predicate::str::contains("Tue cardio: Run Intervals (45 min, hard)"));
}

#[test]
fn test_today_on_rest_day() {
    let temp_dir = setup_test_dir();
    let profile = write_file(temp_dir.path(), "athlete.toml", RUNNER_PROFILE);

    cli(temp_dir.path())
        .args(["today", "--date", "2026-03-08", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun: rest day"));
}

#[test]
fn test_catalog_command_validates_builtin() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog OK: 18 cardio templates"));
}

#[test]
fn test_incomplete_catalog_rejected() {
    let temp_dir = setup_test_dir();
    let catalog = write_file(
        temp_dir.path(),
        "catalog.toml",
        r#"
[[cardio]]
id = "run_easy"
title = "Easy Run"
type = "run"
duration = 30
intensity = "easy"

[[exercises]]
id = "goblet_squat"
name = "Goblet Squat"
pattern = "squat"
equipment = ["dumbbells", "kettlebell"]
muscleGroups = ["quads", "glutes"]
"#,
    );

    cli(temp_dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("run_tempo"));
}

#[test]
fn test_missing_profile_fails() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["week", "--profile"])
        .arg(temp_dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Athlete profile not found"));
}

#[test]
fn test_config_selects_profile_and_json_output() {
    let temp_dir = setup_test_dir();
    let profile = write_file(temp_dir.path(), "runner.toml", RUNNER_PROFILE);
    let config = write_file(
        temp_dir.path(),
        "config.toml",
        &format!(
            "[profile]\npath = {:?}\n\n[output]\nformat = \"json\"\n",
            profile.display().to_string()
        ),
    );

    let output = cli(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .args(["week", "--date", "2026-03-02"])
        .output()
        .expect("Failed to run hyplan");
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["programType"], "runner");
}
