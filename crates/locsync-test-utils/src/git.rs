//! Git repository fixtures built with `git2`, no `git` binary required.

use std::path::Path;

/// Initialises a real git repository with a configured identity and no
/// commits.
///
/// # Panics
/// Panics if any git2 operation fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    let repo = git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    });
    {
        let mut config = repo
            .config()
            .unwrap_or_else(|e| panic!("real_git_repo: failed to open config: {e}"));
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@test.com").unwrap();
        config.set_bool("commit.gpgsign", false).unwrap();
    }
    repo
}

/// Stages everything in the working tree and commits it.
///
/// # Panics
/// Panics if any git2 operation fails.
pub fn commit_everything(repo: &git2::Repository, message: &str) -> git2::Oid {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let signature = repo.signature().unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .unwrap_or_else(|e| panic!("commit_everything: commit failed: {e}"))
}

/// Number of commits reachable from HEAD (0 for an unborn branch).
pub fn commit_count(repo: &git2::Repository) -> usize {
    let Ok(head) = repo.head() else {
        return 0;
    };
    let mut walk = repo.revwalk().unwrap();
    walk.push(head.target().unwrap()).unwrap();
    walk.count()
}

/// First line of the HEAD commit message.
pub fn head_message(repo: &git2::Repository) -> Option<String> {
    let commit = repo.head().ok()?.peel_to_commit().ok()?;
    commit.message().and_then(|m| m.lines().next()).map(str::to_string)
}

/// Commit subjects reachable from HEAD, newest first.
pub fn commit_subjects(repo: &git2::Repository) -> Vec<String> {
    let Ok(head) = repo.head() else {
        return Vec::new();
    };
    let mut walk = repo.revwalk().unwrap();
    walk.push(head.target().unwrap()).unwrap();
    walk.map(|oid| {
        let commit = repo.find_commit(oid.unwrap()).unwrap();
        commit.summary().unwrap_or_default().to_string()
    })
    .collect()
}
