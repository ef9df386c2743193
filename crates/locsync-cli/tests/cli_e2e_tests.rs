//! CLI end-to-end tests that invoke the compiled `locsync` binary.
//!
//! These tests use `env!("CARGO_BIN_EXE_locsync")` to locate the binary and
//! `std::process::Command` to run it against temporary projects.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use locsync_test_utils::git::{commit_count, commit_everything, head_message};
use locsync_test_utils::project::TestProject;
use serde_json::json;

/// Returns the path to the compiled `locsync` binary.
fn locsync_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_locsync"))
}

/// Run `locsync` with the given args in the given directory.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(locsync_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("KEYSETS")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute locsync binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// Mark a remote translation as approved by editing the stored document.
fn translate_remotely(project: &TestProject, keyset: &str, key: &str, language: &str, text: &str) {
    let path = project.remote_dir().join(format!("{keyset}.json"));
    let mut document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    document["keys"][key]["values"][language] = json!({ "text": text, "status": "approved" });
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
}

// ============================================================================
// Basics
// ============================================================================

#[test]
fn test_help_lists_stages() {
    let out = Command::new(locsync_bin())
        .arg("--help")
        .output()
        .expect("failed to run locsync --help");

    assert!(out.status.success(), "locsync --help should exit 0");
    let text = stdout(&out);
    for command in ["push", "pull", "verify", "drop-orphans", "remote"] {
        assert!(text.contains(command), "help should mention '{command}', got:\n{text}");
    }
}

#[test]
fn test_missing_config_fails() {
    let project = TestProject::new();

    let out = run(project.root(), &["push"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(
        stderr(&out).contains("Configuration not found"),
        "stderr:\n{}",
        stderr(&out)
    );
}

// ============================================================================
// Push / pull round trip
// ============================================================================

#[test]
fn test_push_creates_remote_keysets() {
    let project = TestProject::new();
    project.write_config("en", &["fr"]);
    project.write_strings("en.lproj/Login.strings", &[("title", "Sign in")]);
    project.write_strings("Modules/Auth/en.lproj/Form.strings", &[("email", "Email")]);

    let out = run(project.root(), &["push"]);
    assert!(out.status.success(), "push failed:\n{}", stderr(&out));

    assert!(project.remote_dir().join("Login.json").is_file());
    assert!(project.remote_dir().join("Modules%2FAuth%2FForm.json").is_file());

    let out = run(project.root(), &["remote", "list"]);
    assert_eq!(stdout(&out), "Login\nModules/Auth/Form\n");
}

#[test]
fn test_pull_writes_translations_for_every_language() {
    let project = TestProject::new();
    project.write_config("en", &["fr", "de"]);
    project.write_strings("en.lproj/Login.strings", &[("title", "Sign in"), ("submit", "Go")]);

    assert!(run(project.root(), &["push"]).status.success());
    translate_remotely(&project, "Login", "title", "fr", "Connexion");

    let out = run(project.root(), &["pull"]);
    assert!(out.status.success(), "pull failed:\n{}", stderr(&out));

    let fr = project.read("fr.lproj/Login.strings");
    assert!(fr.contains("\"title\" = \"Connexion\";"), "{fr}");
    assert!(fr.contains("\"submit\" = \"\";"), "{fr}");
    project.assert_file_exists("de.lproj/Login.strings");
}

#[test]
fn test_verify_exit_code_follows_coverage() {
    let project = TestProject::new();
    project.write_config("en", &["fr"]);
    project.write_strings("en.lproj/Main.strings", &[("ok", "OK")]);
    project.write_strings("fr.lproj/Main.strings", &[("ok", "")]);

    let out = run(project.root(), &["verify"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("fr"), "{}", stdout(&out));

    project.write_strings("fr.lproj/Main.strings", &[("ok", "D'accord")]);
    let out = run(project.root(), &["verify"]);
    assert_eq!(out.status.code(), Some(0), "{}", stdout(&out));
}

#[test]
fn test_verify_json_output() {
    let project = TestProject::new();
    project.write_config("en", &["fr"]);
    project.write_strings("en.lproj/Main.strings", &[("a", "A"), ("b", "B")]);

    let out = run(project.root(), &["verify", "--json"]);

    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(report["total_keys"], 2);
    assert_eq!(report["shortfalls"][0]["language"], "fr");
    assert_eq!(report["shortfalls"][0]["missing"], 2);
}

// ============================================================================
// Stage dependencies
// ============================================================================

#[test]
fn test_push_drops_empty_files_first() {
    let project = TestProject::new();
    project.write_config("en", &["fr"]);
    project.write("en.lproj/Empty.strings", "/* nothing */\n");
    project.write_strings("en.lproj/Main.strings", &[("a", "A")]);

    let out = run(project.root(), &["push"]);
    assert!(out.status.success(), "{}", stderr(&out));

    assert!(!project.exists("en.lproj/Empty.strings"));
}

#[test]
fn test_no_deps_skips_prerequisites() {
    let project = TestProject::new();
    project.write_config("en", &["fr"]);
    project.write("en.lproj/Empty.strings", "/* nothing */\n");
    project.write_strings("en.lproj/Main.strings", &[("a", "A")]);

    let out = run(project.root(), &["--no-deps", "push"]);
    assert!(out.status.success(), "{}", stderr(&out));

    project.assert_file_exists("en.lproj/Empty.strings");
    assert!(project.remote_dir().join("Main.json").is_file());
}

#[test]
fn test_directory_flag_selects_project() {
    let project = TestProject::new();
    project.write_config("en", &[]);
    project.write_strings("en.lproj/Main.strings", &[("a", "A")]);

    let root = project.root().to_string_lossy().into_owned();
    let out = run(project.temp_path(), &["-C", &root, "push"]);

    assert!(out.status.success(), "{}", stderr(&out));
    assert!(project.remote_dir().join("Main.json").is_file());
}

// ============================================================================
// Git transactions
// ============================================================================

#[test]
fn test_pull_commits_merged_translations() {
    let project = TestProject::new();
    let repo = project.init_git();
    project.write_config("en", &["fr"]);
    project.write_strings("en.lproj/Login.strings", &[("title", "Sign in")]);
    commit_everything(&repo, "initial");

    assert!(run(project.root(), &["push"]).status.success());
    translate_remotely(&project, "Login", "title", "fr", "Connexion");
    let before = commit_count(&repo);

    let out = run(project.root(), &["pull"]);
    assert!(out.status.success(), "{}", stderr(&out));

    assert_eq!(commit_count(&repo), before + 1);
    assert_eq!(
        head_message(&repo).as_deref(),
        Some("[locsync] Merge in remote translations")
    );
}
