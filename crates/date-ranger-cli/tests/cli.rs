use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const AT: &str = "2026-02-18T14:30:15";

fn dateranger() -> Command {
    Command::cargo_bin("dateranger").unwrap()
}

fn json(args: &[&str]) -> Value {
    let output = dateranger().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "dateranger {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ── range ───────────────────────────────────────────────────────────────────

#[test]
fn test_range_short_form() {
    let v = json(&["range", "2026-01-01_2026-01-31"]);
    assert_eq!(v["kind"], "short");
    assert_eq!(v["start"], "2026-01-01T00:00:00");
    assert_eq!(v["end"], "2026-01-31T00:00:00");
    assert_eq!(v["short"], "2026-01-01_2026-01-31");
    assert_eq!(v["duration_ms"], 30 * 86_400_000i64);
}

#[test]
fn test_range_named() {
    let v = json(&["--at", AT, "range", "Last Month"]);
    assert_eq!(v["kind"], "named");
    assert_eq!(v["start"], "2026-01-01T00:00:00");
    assert_eq!(v["end"], "2026-01-31T23:59:59.999");
}

#[test]
fn test_range_vector() {
    let v = json(&["--at", AT, "range", "Next_5_Days"]);
    assert_eq!(v["kind"], "vector");
    assert_eq!(v["start"], "2026-02-18T14:30:15");
    assert_eq!(v["end"], "2026-02-23T14:30:15");
}

#[test]
fn test_range_relative() {
    let v = json(&["--at", AT, "range", "14 Days Ago_Now"]);
    assert_eq!(v["kind"], "relative");
    assert_eq!(v["start"], "2026-02-04T14:30:15");
    assert_eq!(v["end"], "2026-02-18T14:30:15");
}

#[test]
fn test_range_week_start_flag() {
    let sunday = json(&["--at", AT, "range", "this week"]);
    assert_eq!(sunday["start"], "2026-02-15T00:00:00");
    let monday = json(&["--at", AT, "--week-start", "monday", "range", "this week"]);
    assert_eq!(monday["start"], "2026-02-16T00:00:00");
    assert_eq!(monday["end"], "2026-02-22T23:59:59.999");
}

#[test]
fn test_range_open_bound_is_null() {
    let v = json(&["--at", AT, "range", "Any Time in Past_Now"]);
    assert!(v["start"].is_null());
    assert_eq!(v["end"], "2026-02-18T14:30:15");
    assert!(v["duration_ms"].is_null());
}

#[test]
fn test_range_at_calendar_limits() {
    let near_max = "+262142-12-31T12:00:00";
    for name in ["Max SQL Date Range", "The Future", "Tomorrow", "Next Week", "Next Year"] {
        dateranger().args(["--at", near_max, "range", name]).assert().success();
    }
    let sql = json(&["--at", near_max, "range", "Max SQL Date Range"]);
    assert_eq!(sql["start"], "1753-01-01T00:00:00");

    let next_year = json(&["--at", near_max, "range", "Next Year"]);
    assert!(next_year["start"].is_null());
    assert!(next_year["end"].is_null());
}

#[test]
fn test_range_unknown_expression_fails() {
    dateranger()
        .args(["range", "whenever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized expression"));
}

#[test]
fn test_invalid_at_fails() {
    dateranger()
        .args(["--at", "yesterday-ish", "range", "today"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --at"));
}

// ── enumerate ───────────────────────────────────────────────────────────────

#[test]
fn test_enumerate_days() {
    let v = json(&["enumerate", "2026-03-01_2026-03-03", "--step", "days"]);
    assert_eq!(
        v,
        serde_json::json!([
            "2026-03-01T00:00:00",
            "2026-03-02T00:00:00",
            "2026-03-03T00:00:00"
        ])
    );
}

#[test]
fn test_enumerate_this_year_by_month() {
    let v = json(&["--at", AT, "enumerate", "This Year", "--step", "Month(s)"]);
    assert_eq!(v.as_array().unwrap().len(), 12);
}

#[test]
fn test_enumerate_unsupported_step_fails() {
    dateranger()
        .args(["enumerate", "2026-01-01_2026-12-31", "--step", "quarter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported time unit"));
}

#[test]
fn test_enumerate_open_end_needs_limit() {
    dateranger()
        .args(["--at", AT, "enumerate", "The Future", "--step", "hour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--limit"));

    let v = json(&["--at", AT, "enumerate", "The Future", "--step", "hour", "--limit", "2"]);
    assert_eq!(v.as_array().unwrap().len(), 2);
}

#[test]
fn test_enumerate_open_start_fails() {
    dateranger()
        .args(["--at", AT, "enumerate", "The Past", "--step", "day", "--limit", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("open start"));
}

// ── quarters / names ────────────────────────────────────────────────────────

#[test]
fn test_quarters_half_open() {
    let v = json(&["quarters", "2014-01-01", "2015-01-01"]);
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["quarter"], "2014Q1");
    assert_eq!(rows[0]["label"], "Quarter First, 2014");
    assert_eq!(rows[3]["end"], "2014-12-31T23:59:59.999");
}

#[test]
fn test_names() {
    let v = json(&["names"]);
    let relative = v["relative_date_times"].as_array().unwrap();
    assert_eq!(relative.len(), 31);
    assert_eq!(relative[0], "14 Days Ago");
    assert!(v["named_ranges"].as_array().unwrap().contains(&Value::from("Last Quarter")));
    assert!(v["intervals"].as_array().unwrap().contains(&Value::from("Day(s)")));
}
