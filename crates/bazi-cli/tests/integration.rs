#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bazi(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bazi").unwrap();
    cmd.current_dir(dir.path()).env("BAZI_ROOT", dir.path());
    cmd
}

fn init_project(dir: &TempDir) {
    bazi(dir).arg("init").assert().success();
}

fn json_of(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

const WEAK_CHART: [&str; 4] = ["--stems", "戊,丙,甲,丙", "--branches", "辰,午,子,申"];

// ---------------------------------------------------------------------------
// bazi init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    bazi(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created: .bazi/config.yaml"));
    assert!(dir.path().join(".bazi/config.yaml").exists());
}

#[test]
fn init_is_idempotent_and_keeps_config() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let path = dir.path().join(".bazi/config.yaml");
    std::fs::write(&path, "version: 1\ndefault_profile: alice\n").unwrap();

    bazi(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("default_profile: alice"));
}

// ---------------------------------------------------------------------------
// bazi pillar
// ---------------------------------------------------------------------------

#[test]
fn pillar_for_anchor_and_new_year() {
    let dir = TempDir::new().unwrap();
    bazi(&dir)
        .args(["pillar", "2024-02-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("甲辰"));
    bazi(&dir)
        .args(["pillar", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("甲子"));
}

#[test]
fn pillar_json() {
    let dir = TempDir::new().unwrap();
    let v = json_of(bazi(&dir).args(["pillar", "2024-02-09", "--json"]));
    assert_eq!(v["pillar"], "癸卯");
    assert_eq!(v["stem"], "gui");
    assert_eq!(v["branch"], "mao");
}

#[test]
fn pillar_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    bazi(&dir)
        .args(["pillar", "2024-2-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
    bazi(&dir)
        .args(["pillar", "2024-02-30"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// bazi day
// ---------------------------------------------------------------------------

#[test]
fn day_works_without_init() {
    let dir = TempDir::new().unwrap();
    bazi(&dir)
        .args(["day", "2024-03-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("甲戌 day: Wealth Star"))
        .stdout(predicate::str::contains("wealth 90  career 35  main 81.75"));
}

#[test]
fn rust_log_controls_engine_logging() {
    let dir = TempDir::new().unwrap();
    bazi(&dir)
        .args(["day", "2024-03-11"])
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("evaluated day"));
    bazi(&dir)
        .args(["day", "2024-03-11"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn day_json_scores() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let v = json_of(bazi(&dir).args(["day", "2024-03-03", "-j"]));
    let record = &v["record"];
    assert_eq!(record["pillar"]["stem"], "bing");
    assert_eq!(record["wealth_score"], 35);
    assert_eq!(record["career_score"], 75);
    assert_eq!(record["main_score"], 69.0);
    assert_eq!(record["tier"], "engage");
    assert_eq!(record["tags"], serde_json::json!(["officer_star"]));
    assert_eq!(v["sections"].as_array().unwrap().len(), 3);
}

#[test]
fn day_with_flag_chart() {
    let dir = TempDir::new().unwrap();
    let v = json_of(
        bazi(&dir)
            .args(["day", "2024-03-07", "--json"])
            .args(WEAK_CHART),
    );
    let record = &v["record"];
    assert_eq!(record["is_strong"], false);
    assert_eq!(record["wealth_score"], 60);
    assert_eq!(record["career_score"], 35);
    assert_eq!(record["tags"], serde_json::json!(["authority_overwhelms"]));
    assert_eq!(record["tier"], "withdraw");
}

#[test]
fn day_rejects_mismatched_columns() {
    let dir = TempDir::new().unwrap();
    bazi(&dir)
        .args(["day", "2024-03-07", "--stems", "甲,甲,甲,甲", "--branches", "子,丑,子,子"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("polarity"));
    bazi(&dir)
        .args(["day", "2024-03-07", "--stems", "甲,甲,甲"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --stems"));
}

// ---------------------------------------------------------------------------
// bazi month / key-dates
// ---------------------------------------------------------------------------

#[test]
fn month_json_layout() {
    let dir = TempDir::new().unwrap();
    let v = json_of(bazi(&dir).args(["month", "2025-04", "--json"]));
    assert_eq!(v["label"], "April 2025");
    assert_eq!(v["leading_blanks"], 2);
    let days = v["days"].as_array().unwrap();
    assert_eq!(days.len(), 30);
    assert_eq!(days[0]["date"], "2025-04-01");
    assert_eq!(days[29]["date"], "2025-04-30");
}

#[test]
fn month_table() {
    let dir = TempDir::new().unwrap();
    bazi(&dir)
        .args(["month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March 2024 (5 leading blanks)"))
        .stdout(predicate::str::contains("TEN GOD"))
        .stdout(predicate::str::contains("2024-03-31"));
}

#[test]
fn month_rejects_bad_month() {
    let dir = TempDir::new().unwrap();
    bazi(&dir).args(["month", "2024-13"]).assert().failure();
}

#[test]
fn key_dates_wealth() {
    let dir = TempDir::new().unwrap();
    let v = json_of(bazi(&dir).args(["key-dates", "2024-03", "--filter", "wealth", "--json"]));
    let dates: Vec<&str> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["date"].as_str().unwrap())
        .collect();
    assert_eq!(
        dates,
        vec![
            "2024-03-01",
            "2024-03-02",
            "2024-03-11",
            "2024-03-12",
            "2024-03-21",
            "2024-03-22",
            "2024-03-31"
        ]
    );
}

#[test]
fn key_dates_by_tier() {
    let dir = TempDir::new().unwrap();
    let v = json_of(bazi(&dir).args(["key-dates", "2024-03", "--filter", "engage", "-j"]));
    assert_eq!(v.as_array().unwrap().len(), 7);
    bazi(&dir)
        .args(["key-dates", "2024-03", "--filter", "advance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No advance days in March 2024."));
}

#[test]
fn key_dates_rejects_unknown_filter() {
    let dir = TempDir::new().unwrap();
    bazi(&dir)
        .args(["key-dates", "2024-03", "--filter", "peer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid filter"));
}

// ---------------------------------------------------------------------------
// bazi profile
// ---------------------------------------------------------------------------

#[test]
fn profile_lifecycle() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    bazi(&dir)
        .args(["profile", "save", "weak"])
        .args(WEAK_CHART)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved profile 'weak'"));

    bazi(&dir)
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weak"))
        .stdout(predicate::str::contains("戊辰 丙午 甲子 丙申"));

    let v = json_of(bazi(&dir).args(["day", "2024-03-07", "--profile", "weak", "--json"]));
    assert_eq!(v["record"]["career_score"], 35);

    let shown = json_of(bazi(&dir).args(["profile", "show", "weak", "--json"]));
    let id = shown["id"].as_str().unwrap().to_string();
    assert_eq!(shown["name"], "weak");
    assert_eq!(shown["natal_stems"], serde_json::json!(["wu", "bing", "jia", "bing"]));

    bazi(&dir)
        .args(["profile", "delete", id.as_str()])
        .assert()
        .success();
    bazi(&dir)
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles saved."));
}

#[test]
fn profile_save_replaces_same_name() {
    let dir = TempDir::new().unwrap();
    bazi(&dir).args(["profile", "save", "me"]).assert().success();
    bazi(&dir)
        .args(["profile", "save", " me "])
        .args(WEAK_CHART)
        .assert()
        .success();
    let v = json_of(bazi(&dir).args(["profile", "list", "--json"]));
    let list = v.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["natal_stems"][0], "wu");
}

#[test]
fn profile_errors() {
    let dir = TempDir::new().unwrap();
    bazi(&dir)
        .args(["profile", "save", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid profile name"));
    bazi(&dir)
        .args(["profile", "delete", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile not found"));
    bazi(&dir)
        .args(["day", "2024-03-07", "--profile", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile not found: ghost"));
}

// ---------------------------------------------------------------------------
// bazi config
// ---------------------------------------------------------------------------

#[test]
fn config_validate_requires_init() {
    let dir = TempDir::new().unwrap();
    bazi(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn config_validate_clean_and_broken() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    bazi(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));

    std::fs::write(
        dir.path().join(".bazi/config.yaml"),
        "version: 1\nchart:\n  natal_stems: [甲, 甲, 甲, 甲]\n  natal_branches: [丑, 子, 子, 子]\n  decade_pillar: { stem: 乙, branch: 未 }\n  annual_pillar: { stem: 丙, branch: 午 }\n",
    )
    .unwrap();
    bazi(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] chart:"));
}

#[test]
fn config_default_profile_drives_day() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    bazi(&dir)
        .args(["profile", "save", "weak"])
        .args(WEAK_CHART)
        .assert()
        .success();
    std::fs::write(
        dir.path().join(".bazi/config.yaml"),
        "version: 1\ndefault_profile: weak\n",
    )
    .unwrap();

    let v = json_of(bazi(&dir).args(["config", "show", "--json"]));
    assert_eq!(v["default_profile"], "weak");

    let v = json_of(bazi(&dir).args(["day", "2024-03-07", "--json"]));
    assert_eq!(v["record"]["tags"], serde_json::json!(["authority_overwhelms"]));
    // Flags still win over the default profile.
    let v = json_of(
        bazi(&dir)
            .args(["day", "2024-03-07", "--json"])
            .args(["--stems", "丙,庚,庚,壬", "--branches", "寅,子,申,子"]),
    );
    assert_eq!(v["record"]["tags"], serde_json::json!([]));
}
