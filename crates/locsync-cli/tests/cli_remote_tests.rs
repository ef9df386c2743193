//! Remote maintenance and init commands, driven through `assert_cmd`.

use assert_cmd::Command;
use assert_fs::prelude::*;
use locsync_test_utils::project::TestProject;
use predicates::prelude::*;

fn locsync(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("locsync").unwrap();
    cmd.current_dir(project.root()).env_remove("KEYSETS");
    cmd
}

fn pushed_project() -> TestProject {
    let project = TestProject::new();
    project.write_config("en", &["fr"]);
    project.write_strings("en.lproj/A.strings", &[("a", "A")]);
    project.write_strings("en.lproj/B.strings", &[("b", "B")]);
    project.write_strings("en.lproj/C.strings", &[("c", "C")]);
    locsync(&project).arg("push").assert().success();
    project
}

#[test]
fn test_drop_keysets_without_selector_drops_nothing() {
    let project = pushed_project();

    locsync(&project)
        .args(["remote", "drop-keysets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KEYSETS"));

    locsync(&project)
        .args(["remote", "list"])
        .assert()
        .stdout("A\nB\nC\n");
}

#[test]
fn test_drop_keysets_from_environment() {
    let project = pushed_project();

    locsync(&project)
        .args(["remote", "drop-keysets"])
        .env("KEYSETS", "A, C")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped 2 keysets"));

    locsync(&project)
        .args(["remote", "list"])
        .assert()
        .stdout("B\n");
}

#[test]
fn test_drop_all_keysets_with_star() {
    let project = pushed_project();

    locsync(&project)
        .args(["remote", "drop-keysets", "--keysets", "*"])
        .assert()
        .success();

    locsync(&project)
        .args(["remote", "list", "--json"])
        .assert()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_dropping_unknown_keyset_fails() {
    let project = pushed_project();

    locsync(&project)
        .args(["remote", "drop-keysets", "--keysets", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Remote keyset not found: Nope"));
}

#[test]
fn test_init_writes_config_once() {
    let temp = assert_fs::TempDir::new().unwrap();

    Command::cargo_bin("locsync")
        .unwrap()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    temp.child("locsync.toml")
        .assert(predicate::str::contains("development_language = \"en\""));

    temp.child("locsync.toml").write_str("languages = [\"fr\"]\n").unwrap();
    Command::cargo_bin("locsync")
        .unwrap()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    temp.child("locsync.toml")
        .assert("languages = [\"fr\"]\n");
}
