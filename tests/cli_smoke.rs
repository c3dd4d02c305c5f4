use assert_cmd::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const HISTORY: &str = "\
repo_full_name,sha,parent_shas,branch,author_name,repo_private,repo_language,repo_stars,repo_forks,commit_day,commit_hour,is_merge,message_type,message_argument,message_message,nomenclature
acme/api,a1,,main,ann,false,Rust,10,2,2024-01-01,9,false,feat,core,init,1
acme/api,a2,a1,main,ann,false,Rust,10,2,2024-01-02,30,false,fix,core,typo,1
acme/api,b1,a1,feature,bob,false,Rust,10,2,2024-01-03,-5,false,wip,,stuff,0
acme/api,m1,a2;b1,main,ann,false,Rust,10,2,2024-01-04,12,TRUE,merge,,merge feature,0
acme/web,w1,,main,bob,false,,,,not-a-day,x,0,docs,readme,update,1
";

fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    path
}

fn run_json(args: &[&str], data: &Path) -> serde_json::Value {
    let mut cmd = Command::cargo_bin("gitdash").unwrap();
    cmd.arg("--data").arg(data).args(args);
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn people_json_lists_each_contributor() {
    let dir = tempdir().unwrap();
    let data = write_csv(dir.path(), "history.csv", HISTORY);

    let v = run_json(&["people", "--json"], &data);
    let people = v["people"].as_array().unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0]["person"]["id"], "p1");
    assert_eq!(people[0]["person"]["name"], "ann");
    assert_eq!(people[0]["person"]["color"], "#8b5cf6");
    assert_eq!(people[0]["commits"], 3);
    assert_eq!(people[1]["unique_repos"], 2);
    assert_eq!(v["version"], 1);
}

#[test]
fn heat_json_clamps_hours_and_skips_undated_rows() {
    let dir = tempdir().unwrap();
    let data = write_csv(dir.path(), "history.csv", HISTORY);

    let v = run_json(&["heat", "--json"], &data);
    let people = v["people"].as_array().unwrap();

    let total: u64 = people
        .iter()
        .flat_map(|p| p["matrix"].as_array().unwrap().iter())
        .flat_map(|row| row.as_array().unwrap().iter())
        .map(|c| c.as_u64().unwrap())
        .sum();
    // w1 has no usable day
    assert_eq!(total, 4);

    // ann: Tuesday 2024-01-02 at hour 30 -> 23
    assert_eq!(people[0]["matrix"][1][23], 1);
    // bob: Wednesday 2024-01-03 at hour -5 -> 0
    assert_eq!(people[1]["matrix"][2][0], 1);
    // every row still counts towards nomenclature
    assert_eq!(people[1]["nomenclature"]["compliant"], 1);
    assert_eq!(people[1]["nomenclature"]["non_compliant"], 1);
}

#[test]
fn series_json_is_cumulative_by_default() {
    let dir = tempdir().unwrap();
    let data = write_csv(dir.path(), "history.csv", HISTORY);

    let v = run_json(&["series", "--json"], &data);
    assert_eq!(v["cumulative"], true);
    let counts: Vec<u64> = v["people"][0]["series"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![1, 2, 3]);

    let v = run_json(&["series", "--json", "--per-day"], &data);
    assert_eq!(v["cumulative"], false);
    let counts: Vec<u64> = v["people"][0]["series"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![1, 1, 1]);
}

#[test]
fn series_weekday_totals() {
    let dir = tempdir().unwrap();
    let data = write_csv(dir.path(), "history.csv", HISTORY);

    let v = run_json(&["series", "--json", "--weekday"], &data);
    // ann: Mon, Tue, Thu
    assert_eq!(v["people"][0]["totals"], serde_json::json!([1, 1, 0, 1, 0, 0, 0]));
}

#[test]
fn graph_json_assigns_lanes_and_drops_nothing_loaded() {
    let dir = tempdir().unwrap();
    let data = write_csv(dir.path(), "history.csv", HISTORY);

    let v = run_json(&["graph", "--json", "--project", "api"], &data);
    let projects = v["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    let api = &projects[0];
    assert_eq!(api["project"], "acme/api");

    let order: Vec<&str> = api["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["sha"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["m1", "b1", "a2", "a1"]);
    assert_eq!(api["edges"].as_array().unwrap().len(), 4);
    assert_eq!(api["lane_count"], 2);
}

#[test]
fn projects_json_groups_counts_by_person() {
    let dir = tempdir().unwrap();
    let data = write_csv(dir.path(), "history.csv", HISTORY);

    let v = run_json(&["projects", "--json"], &data);
    let projects = v["projects"].as_array().unwrap();
    assert_eq!(projects[0]["project"], "acme/api");
    assert_eq!(projects[0]["counts"], serde_json::json!([3, 1]));
    assert_eq!(projects[1]["counts"], serde_json::json!([0, 1]));
}

#[test]
fn falls_back_to_picked_file() {
    let dir = tempdir().unwrap();
    let picked = write_csv(dir.path(), "picked.csv", HISTORY);

    let mut cmd = Command::cargo_bin("gitdash").unwrap();
    cmd.arg("--data")
        .arg(dir.path().join("missing.csv"))
        .arg("--file")
        .arg(&picked)
        .args(["export", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["entries"].as_array().unwrap().len(), 5);
    assert_eq!(v["entries"][3]["is_merge"], true);
    assert_eq!(v["entries"][3]["parent_shas"], serde_json::json!(["a2", "b1"]));
}

#[test]
fn missing_source_fails_with_message() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("gitdash").unwrap();
    cmd.arg("--data")
        .arg(dir.path().join("missing.csv"))
        .args(["people", "--json"]);
    let out = cmd.assert().failure().get_output().stderr.clone();
    let stderr = String::from_utf8_lossy(&out);
    assert!(stderr.contains("Failed to load commit history"));
}

#[test]
fn header_only_input_degrades_to_no_data() {
    let dir = tempdir().unwrap();
    let data = write_csv(dir.path(), "empty.csv", "repo_full_name,sha,commit_day\n");

    let v = run_json(&["people", "--json"], &data);
    assert!(v["people"].as_array().unwrap().is_empty());

    let mut cmd = Command::cargo_bin("gitdash").unwrap();
    cmd.arg("--data").arg(&data).arg("heat");
    let out = cmd.assert().success().get_output().stdout.clone();
    assert!(String::from_utf8_lossy(&out).contains("No data to display"));
}

#[test]
fn overrides_label_people() {
    let dir = tempdir().unwrap();
    let data = write_csv(dir.path(), "history.csv", HISTORY);
    let overrides = write_csv(dir.path(), "overrides.json", r#"{"p2": {"label": "Robert"}}"#);

    let mut cmd = Command::cargo_bin("gitdash").unwrap();
    cmd.arg("--data")
        .arg(&data)
        .arg("--overrides")
        .arg(&overrides)
        .args(["people", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["people"][1]["label"], "Robert");
    assert!(v["people"][0]["label"].is_null());
}

#[test]
fn export_summary_previews_first_rows() {
    let dir = tempdir().unwrap();
    let data = write_csv(dir.path(), "history.csv", HISTORY);

    let mut cmd = Command::cargo_bin("gitdash").unwrap();
    cmd.arg("--data").arg(&data).arg("export");
    let out = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8_lossy(&out);
    let header: Vec<&str> = stdout
        .lines()
        .find(|l| l.starts_with("repo_full_name"))
        .unwrap()
        .split('│')
        .map(str::trim)
        .collect();
    assert_eq!(
        header,
        vec![
            "repo_full_name", "sha", "parent_shas", "branch", "author_name", "commit_day",
            "commit_hour", "message_type", "message_argument", "message_message", "nomenclature",
        ]
    );
    // w1 has no parents
    let w1 = stdout.lines().find(|l| l.starts_with("acme/web")).unwrap();
    assert!(w1.contains("—"));
    assert!(stdout.contains("a2;b1"));
}
