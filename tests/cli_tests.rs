use predicates::str::contains;

mod common;
use common::{fixture_path, otf};

#[test]
fn parse_outputs_json_records() {
    otf()
        .args(["parse", &fixture_path("summary_full.eml"), "--json"])
        .assert()
        .success()
        .stdout(contains("\"caloriesBurned\": 1007"))
        .stdout(contains("\"studioLocation\": \"New Albany, OH\""))
        .stdout(contains("\"activeMinutes\": 57"))
        .stdout(contains("\"rowingMaxWattage\": 491"));
}

#[test]
fn parse_outputs_summary_table_by_default() {
    otf()
        .args(["parse", &fixture_path("summary_full.eml")])
        .assert()
        .success()
        .stdout(contains("New Albany, OH"))
        .stdout(contains("active minutes"))
        .stdout(contains("2024-10-12"));
}

#[test]
fn treadmill_only_json_has_null_rower_fields() {
    otf()
        .args(["parse", &fixture_path("treadmill_only.eml"), "--json"])
        .assert()
        .success()
        .stdout(contains("\"rowingDistance\": null"))
        .stdout(contains("\"treadmillAvgSpeed\": 7.9"));
}

#[test]
fn decode_prints_normalized_html() {
    otf()
        .args(["decode", &fixture_path("summary_full.eml")])
        .assert()
        .success()
        .stdout(contains("<!DOCTYPE html>"))
        .stdout(contains("TREADMILL PERFORMANCE TOTALS"));
}

#[test]
fn missing_file_fails_the_run() {
    otf()
        .args(["parse", &fixture_path("does_not_exist.eml")])
        .assert()
        .failure()
        .stderr(contains("no input could be parsed"));
}

#[test]
fn batch_isolates_a_bad_file() {
    // One good message and one unreadable path: the batch succeeds, the
    // failure is counted and reported, the good record still prints.
    otf()
        .args([
            "parse",
            &fixture_path("summary_full.eml"),
            &fixture_path("does_not_exist.eml"),
        ])
        .assert()
        .success()
        .stdout(contains("New Albany, OH"))
        .stdout(contains("1 parsed, 0 empty, 1 failed"));
}
