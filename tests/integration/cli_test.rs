use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn checklist() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("checklist-cli").unwrap();
    cmd.env_remove("CHECKLIST_DIR").env_remove("CHECKLIST_LOG");
    cmd
}

fn init(dir: &TempDir) {
    checklist().arg("init").current_dir(dir.path()).assert().success();
}

/// Add a task and return its id, read from the JSON output.
fn add(dir: &TempDir, args: &[&str]) -> String {
    let output = checklist()
        .args(["--json", "add"])
        .args(args)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    json["id"].as_str().unwrap().to_string()
}

fn list_json(dir: &TempDir, args: &[&str]) -> Vec<Value> {
    let output = checklist()
        .args(["--json", "list"])
        .args(args)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice::<Value>(&output.stdout)
        .unwrap()
        .as_array()
        .unwrap()
        .clone()
}

#[test]
fn init_creates_workspace() {
    let dir = TempDir::new().unwrap();
    checklist()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains(".checklist"));

    assert!(dir.path().join(".checklist/config.json").exists());
    assert!(dir.path().join(".checklist/kv").is_dir());
}

#[test]
fn init_twice_fails() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    checklist().arg("init").current_dir(dir.path()).assert().failure();
}

#[test]
fn commands_outside_workspace_fail() {
    let dir = TempDir::new().unwrap();
    checklist()
        .args(["add", "Buy milk"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not a checklist workspace"));
}

#[test]
fn list_empty_shows_prompt() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    checklist()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Add a To Do"));
}

#[test]
fn add_goes_to_current_list() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    add(&dir, &["Buy milk"]);

    let work = list_json(&dir, &[]);
    assert_eq!(work.len(), 1);
    assert_eq!(work[0]["text"], "Buy milk");
    assert_eq!(work[0]["category"], "work");
    assert_eq!(work[0]["done"], false);

    assert!(list_json(&dir, &["--category", "travel"]).is_empty());
}

#[test]
fn empty_text_adds_nothing() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    checklist()
        .args(["add", ""])
        .current_dir(dir.path())
        .assert()
        .success();
    assert!(list_json(&dir, &["--all"]).is_empty());
}

#[test]
fn switch_keeps_lists_apart() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    add(&dir, &["Buy milk"]);

    checklist()
        .args(["switch", "travel"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Switched to 'travel'"));
    add(&dir, &["Paris"]);

    let travel = list_json(&dir, &[]);
    assert_eq!(travel.len(), 1);
    assert_eq!(travel[0]["text"], "Paris");

    let work = list_json(&dir, &["--category", "work"]);
    assert_eq!(work.len(), 1);
    assert_eq!(work[0]["text"], "Buy milk");

    checklist()
        .arg("status")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("On list 'travel'"));
}

#[test]
fn done_toggles_back_and_forth() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, &["Buy milk"]);
    let other = add(&dir, &["Call Bob"]);

    checklist()
        .args(["done", &id])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Checked"));

    let pending = list_json(&dir, &["--status", "pending"]);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["id"], other.as_str());

    checklist()
        .args(["done", &id])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Unchecked"));
    assert!(list_json(&dir, &["--status", "done"]).is_empty());
}

#[test]
fn done_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    checklist()
        .args(["done", "12345"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("no task with id 12345"));
    checklist()
        .args(["done", "abc"])
        .current_dir(dir.path())
        .assert()
        .failure();
}

#[test]
fn edit_replaces_text() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, &["Buy milk"]);

    checklist()
        .args(["edit", &id, "Buy oat milk"])
        .current_dir(dir.path())
        .assert()
        .success();

    let work = list_json(&dir, &[]);
    assert_eq!(work[0]["text"], "Buy oat milk");
    assert_eq!(work[0]["id"], id.as_str());
}

#[test]
fn delete_declined_keeps_task() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, &["Buy milk"]);
    let before = std::fs::read_to_string(dir.path().join(".checklist/kv/%40toDos")).unwrap();

    checklist()
        .args(["delete", &id])
        .current_dir(dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Are you sure?"))
        .stdout(predicates::str::contains("Kept"));

    let after = std::fs::read_to_string(dir.path().join(".checklist/kv/%40toDos")).unwrap();
    assert_eq!(before, after);
    assert_eq!(list_json(&dir, &[]).len(), 1);
}

#[test]
fn delete_confirmed_removes_task() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, &["Buy milk"]);

    checklist()
        .args(["delete", &id])
        .current_dir(dir.path())
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Deleted"));

    assert!(list_json(&dir, &[]).is_empty());
}

#[test]
fn delete_with_yes_skips_prompt() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, &["Paris", "--category", "travel"]);

    checklist()
        .args(["delete", "--yes", &id])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Are you sure?").not());

    assert!(list_json(&dir, &["--all"]).is_empty());
}

#[test]
fn stored_format_is_object_keyed_by_id() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, &["Buy milk"]);

    let raw = std::fs::read_to_string(dir.path().join(".checklist/kv/%40toDos")).unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        stored[&id],
        serde_json::json!({"text": "Buy milk", "working": true, "check": false})
    );
}

#[test]
fn corrupt_store_lists_empty() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    std::fs::write(dir.path().join(".checklist/kv/%40toDos"), "{corrupt").unwrap();

    assert!(list_json(&dir, &["--all"]).is_empty());
    // Adding overwrites the corrupt value with a valid collection.
    add(&dir, &["Fresh start"]);
    assert_eq!(list_json(&dir, &[]).len(), 1);
}

#[test]
fn checklist_dir_env_overrides_discovery() {
    let dir = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init(&dir);

    checklist()
        .args(["add", "Remote task"])
        .env("CHECKLIST_DIR", dir.path())
        .current_dir(elsewhere.path())
        .assert()
        .success();

    let work = list_json(&dir, &[]);
    assert_eq!(work.len(), 1);
    assert_eq!(work[0]["text"], "Remote task");
}

#[test]
fn status_json_counts() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, &["Buy milk"]);
    add(&dir, &["Paris", "--category", "travel"]);
    checklist()
        .args(["done", &id])
        .current_dir(dir.path())
        .assert()
        .success();

    let output = checklist()
        .args(["--json", "status"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["category"], "work");
    assert_eq!(json["summary"]["work"]["total"], 1);
    assert_eq!(json["summary"]["work"]["done"], 1);
    assert_eq!(json["summary"]["travel"]["total"], 1);
}

#[test]
fn list_contains_filter() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    add(&dir, &["Buy milk"]);
    add(&dir, &["Review PR"]);

    let hits = list_json(&dir, &["--contains", "MILK"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["text"], "Buy milk");
}
