//! Integration tests for `vs todos`.

mod common;

use predicates::prelude::*;
use std::fs;

use common::TestWorkspace;

fn alpha_beta() -> TestWorkspace {
    let ws = TestWorkspace::with_editor("true");
    ws.add_project("alpha", Some("- write spec\n- review\n"));
    ws.add_project("beta", None);
    fs::write(ws.projects().join("notes.txt"), "not a project").unwrap();
    ws
}

#[test]
fn test_todos_text_output() {
    let ws = alpha_beta();

    ws.cmd()
        .args(["todos", "--sort"])
        .assert()
        .success()
        .stdout(
            "alpha\n  - write spec\n  - review\n\nbeta\n  - Project doesn't contain .todo file.\n",
        );
}

#[test]
fn test_todos_json_output() {
    let ws = alpha_beta();

    let output = ws
        .cmd()
        .args(["todos", "--json", "--sort"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let todos: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        todos,
        serde_json::json!([
            { "projectName": "alpha", "status": "parsed", "items": ["write spec", "review"] },
            { "projectName": "beta", "status": "absent", "items": ["Project doesn't contain .todo file."] },
        ])
    );
}

#[test]
fn test_todos_single_project() {
    let ws = alpha_beta();

    ws.cmd()
        .args(["todos", "--project", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("write spec"))
        .stdout(predicate::str::contains("beta").not());
}

#[test]
fn test_todos_unknown_project_gets_placeholder() {
    let ws = alpha_beta();

    ws.cmd()
        .args(["todos", "--project", "ghost"])
        .assert()
        .success()
        .stdout("ghost\n  - Project doesn't contain .todo file.\n");
}

#[test]
fn test_todos_html_to_file() {
    let ws = alpha_beta();
    let out = ws.temp.path().join("todos.html");

    ws.cmd()
        .args(["todos", "--html", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote todos for 2 projects"));

    let page = fs::read_to_string(&out).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<h2>alpha</h2>"));
    assert!(page.contains("<li>write spec</li>"));
    assert!(page.contains("<p>Project doesn't contain .todo file.</p>"));
}

#[test]
fn test_todos_summary() {
    let ws = alpha_beta();

    ws.cmd()
        .args(["todos", "--summary", "--sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FIRST ITEM"))
        .stdout(predicate::str::is_match(r"alpha\s+parsed\s+2\s+write spec").unwrap())
        .stdout(predicate::str::is_match(r"beta\s+absent\s+0").unwrap());
}

#[test]
fn test_todos_empty_project_root() {
    let ws = TestWorkspace::with_editor("true");

    ws.cmd()
        .arg("todos")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No projects under"));
}

#[test]
fn test_todos_rereads_files() {
    let ws = alpha_beta();
    ws.cmd()
        .args(["todos", "--project", "beta"])
        .assert()
        .stdout(predicate::str::contains("doesn't contain"));

    fs::write(ws.projects().join("beta").join(".todo"), "- [ ] new task\n").unwrap();
    ws.cmd()
        .args(["todos", "--project", "beta"])
        .assert()
        .success()
        .stdout("beta\n  - new task\n");
}
