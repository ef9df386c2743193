//! Whole-workflow tests across the locsync crates
//!
//! A project is taken through the same stage order as `locsync sync`
//! against a directory remote and a real git repository, checking the
//! state of the tree, the remote and the history after each step.

use std::collections::BTreeSet;

use locsync_core::config::ConfigResolver;
use locsync_core::model::{Keyset, Status, Value};
use locsync_core::remote::{DirectoryRemote, RemoteStore, StatusFilter};
use locsync_core::scm::{GitScm, names};
use locsync_core::tools::{KeysetIter, StringExtractor};
use locsync_core::{LocalStore, Result, SyncEngine};
use locsync_fs::NormalizedPath;
use locsync_test_utils::git::{commit_everything, commit_subjects};
use locsync_test_utils::project::TestProject;
use pretty_assertions::assert_eq;

/// Source scanner that treats every `L("...")` call as a key.
struct CallScanner {
    root: NormalizedPath,
}

impl StringExtractor for CallScanner {
    fn extract(&self, files: &[NormalizedPath], development_language: &str) -> Result<KeysetIter<'_>> {
        let mut keyset = Keyset::new("Localizable");
        for file in files {
            let source = locsync_fs::io::read_text(&self.root.join(file.as_str()))?;
            for chunk in source.split("L(\"").skip(1) {
                if let Some((literal, _)) = chunk.split_once("\")") {
                    keyset.insert(
                        locsync_core::Key::new(literal)
                            .with_value(development_language, Value::unapproved(literal)),
                    );
                }
            }
        }
        Ok(Box::new(std::iter::once(Ok(keyset))))
    }
}

fn approve(remote: &DirectoryRemote, keyset: &str, key: &str, language: &str, text: &str) {
    let mut stored = remote.load_keyset(keyset, StatusFilter::Any).unwrap();
    stored
        .get_mut(key)
        .unwrap()
        .set_value(language, Value::approved(text));
    remote.replace(&stored).unwrap();
}

#[test]
fn test_full_sync_lifecycle() {
    let project = TestProject::new();
    let repo = project.init_git();
    project.write_config("en", &["fr", "de"]);
    project.write("Sources/Login.swift", "title = L(\"Sign in\")\nbutton = L(\"Continue\")\n");
    project.write("en.lproj/Stale.strings", "/* emptied by hand */\n");
    commit_everything(&repo, "initial");

    let root = NormalizedPath::new(project.root());
    let config = ConfigResolver::new(root.clone()).resolve().unwrap();
    let local = LocalStore::new(root.clone());
    let remote = DirectoryRemote::new(config.remote_dir(&root).unwrap());
    let scm = GitScm::open(project.root()).unwrap();
    let engine = SyncEngine::new(&config, &local, &remote, &scm);
    let scanner = CallScanner { root: root.clone() };

    // push prerequisites, in task order
    let extracted = engine.extract_strings(&scanner).unwrap();
    assert_eq!(extracted.new, 2);
    assert_eq!(engine.drop_empty_strings().unwrap(), vec!["Stale"]);
    assert_eq!(engine.create_keysets().unwrap(), vec!["Localizable"]);
    engine.drop_orphan_keys().unwrap();
    let pushed = engine.push().unwrap();
    assert_eq!(pushed.new, 2);

    let subjects = commit_subjects(&repo);
    assert_eq!(subjects[0], names::DROP_EMPTY);
    assert_eq!(subjects[1], names::EXTRACT_SOURCES);

    // translators work on the remote
    approve(&remote, "Localizable", "Sign in", "fr", "Connexion");
    approve(&remote, "Localizable", "Continue", "fr", "Continuer");

    // pull brings the translations down in one commit
    engine.fetch_strings().unwrap();
    assert_eq!(commit_subjects(&repo)[0], names::MERGE_REMOTE);
    let fr = local
        .read_keyset(&NormalizedPath::new("fr.lproj/Localizable.strings"), "fr")
        .unwrap();
    assert_eq!(fr.get("Sign in").unwrap().text("fr"), "Connexion");

    let report = engine.verify().unwrap();
    assert_eq!(report.shortfalls.len(), 1);
    assert_eq!(report.shortfalls[0].language, "de");
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_push_never_overwrites_approved_translations() {
    let project = TestProject::new();
    project.init_git();
    project.write_config("en", &["fr"]);
    project.write_strings("en.lproj/Main.strings", &[("greeting", "Hello")]);

    let root = NormalizedPath::new(project.root());
    let config = ConfigResolver::new(root.clone()).resolve().unwrap();
    let local = LocalStore::new(root.clone());
    let remote = DirectoryRemote::new(config.remote_dir(&root).unwrap());
    let scm = GitScm::open(project.root()).unwrap();
    let engine = SyncEngine::new(&config, &local, &remote, &scm);

    engine.push().unwrap();
    approve(&remote, "Main", "greeting", "fr", "Bonjour");

    // A stale local French file must not clobber the approved value
    project.write_strings("fr.lproj/Main.strings", &[("greeting", "Salut")]);
    engine.push().unwrap();

    let stored = remote.load_keyset("Main", StatusFilter::ApprovedOnly).unwrap();
    let greeting = stored.get("greeting").unwrap();
    assert_eq!(greeting.text("fr"), "Bonjour");
    assert_eq!(greeting.value("fr").unwrap().status, Status::Approved);
}

#[test]
fn test_removed_source_strings_leave_the_remote() {
    let project = TestProject::new();
    project.write_config("en", &["fr"]);
    project.write_strings("en.lproj/Main.strings", &[("keep", "Keep"), ("drop", "Drop")]);
    project.write_strings("en.lproj/Legacy.strings", &[("old", "Old")]);

    let root = NormalizedPath::new(project.root());
    let config = ConfigResolver::new(root.clone()).resolve().unwrap();
    let local = LocalStore::new(root.clone());
    let remote = DirectoryRemote::new(config.remote_dir(&root).unwrap());
    let scm = locsync_core::NoScm::new(&root);
    let engine = SyncEngine::new(&config, &local, &remote, &scm);
    engine.push().unwrap();

    project.write_strings("en.lproj/Main.strings", &[("keep", "Keep")]);
    project.write("en.lproj/Legacy.strings", "");
    let report = engine.drop_orphan_keys().unwrap();

    assert_eq!(report.replaced, vec!["Main"]);
    assert_eq!(report.deleted, vec!["Legacy"]);
    let names: BTreeSet<String> = remote.list().unwrap().into_iter().collect();
    assert_eq!(names, BTreeSet::from(["Main".to_string()]));
    assert_eq!(
        remote.load_keyset("Main", StatusFilter::Any).unwrap().key_names(),
        BTreeSet::from(["keep".to_string()])
    );
}
