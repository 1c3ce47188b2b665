//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn boilr() -> Command {
    Command::cargo_bin("boilr").unwrap()
}

#[test]
fn unknown_layout_exits_3_with_suggestion() {
    boilr()
        .args(["new", "--name", "test", "--layout", "mvc", "--yes"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("mvc"))
        .stderr(predicate::str::contains("boilr layouts"));
}

#[test]
fn invalid_project_name_exits_2() {
    boilr()
        .args(["new", "--name", ".hidden", "--layout", "basic", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("project name"));
}

#[test]
fn malformed_files_flag_exits_2() {
    boilr()
        .args([
            "new",
            "--name",
            "test",
            "--layout",
            "basic",
            "--files",
            "views",
            "--yes",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("KEY=LIST"));
}

#[test]
fn unknown_files_key_lists_valid_keys() {
    boilr()
        .args([
            "new",
            "--name",
            "test",
            "--layout",
            "fullstack",
            "--files",
            "nope=x",
            "--yes",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("server/views"));
}

#[test]
fn missing_explicit_config_file_exits_4() {
    boilr()
        .args(["--config", "/nonexistent/boilr.toml", "layouts"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn unknown_subcommand_exits_2() {
    boilr().arg("frobnicate").assert().failure().code(2);
}
