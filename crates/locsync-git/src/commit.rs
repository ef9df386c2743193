//! Staging and committing the files touched by a transaction.

use std::collections::BTreeSet;
use std::path::Path;

use git2::{Commit, ErrorCode, Oid, Repository, Signature, Status, StatusOptions};

use crate::{Error, Result};

/// Fallback identity when the repository has no `user.name`/`user.email`.
const FALLBACK_NAME: &str = "locsync";
const FALLBACK_EMAIL: &str = "locsync@localhost";

/// Open the repository containing `path`.
///
/// Walks upward like `git` does. Bare repositories are rejected because
/// transactions commit working-tree files.
pub fn open_repository(path: &Path) -> Result<Repository> {
    let repo = Repository::discover(path).map_err(|e| match e.code() {
        ErrorCode::NotFound => Error::NotARepository {
            path: path.to_path_buf(),
        },
        _ => Error::Git(e),
    })?;

    if repo.workdir().is_none() {
        return Err(Error::BareRepository {
            path: path.to_path_buf(),
        });
    }
    Ok(repo)
}

/// Collect every working-tree path that differs from HEAD, including
/// untracked files. Ignored files are left out.
///
/// Paths are relative to the working directory, with forward slashes.
pub fn dirty_paths(repo: &Repository) -> Result<BTreeSet<String>> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false);

    let statuses = repo.statuses(Some(&mut opts))?;
    let mut paths = BTreeSet::new();
    for entry in statuses.iter() {
        if entry.status() == Status::CURRENT {
            continue;
        }
        if let Some(path) = entry.path() {
            paths.insert(path.to_string());
        }
    }
    Ok(paths)
}

/// Stage `paths` and commit them as one changeset.
///
/// Deleted files are removed from the index. Returns `None` when the
/// resulting tree is identical to HEAD, so an empty batch never produces a
/// commit.
pub fn commit_paths(repo: &Repository, message: &str, paths: &BTreeSet<String>) -> Result<Option<Oid>> {
    let workdir = repo.workdir().ok_or_else(|| Error::BareRepository {
        path: repo.path().to_path_buf(),
    })?;

    let mut index = repo.index()?;
    for path in paths {
        let relative = Path::new(path);
        if workdir.join(relative).is_file() {
            index.add_path(relative)?;
        } else {
            index.remove_path(relative)?;
        }
    }
    index.write()?;

    let tree_id = index.write_tree()?;
    let parent = head_commit(repo)?;
    match &parent {
        Some(parent) if parent.tree_id() == tree_id => {
            tracing::debug!(subject = message, "Tree unchanged, skipping commit");
            return Ok(None);
        }
        None if index.is_empty() => return Ok(None),
        _ => {}
    }

    let tree = repo.find_tree(tree_id)?;
    let signature = signature(repo)?;
    let parents: Vec<&Commit<'_>> = parent.iter().collect();
    let oid = repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;

    tracing::debug!(commit = %oid, files = paths.len(), subject = message, "Created commit");
    Ok(Some(oid))
}

fn head_commit(repo: &Repository) -> Result<Option<Commit<'_>>> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_commit()?)),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn signature(repo: &Repository) -> Result<Signature<'static>> {
    match repo.signature() {
        Ok(signature) => Ok(signature),
        Err(_) => Ok(Signature::now(FALLBACK_NAME, FALLBACK_EMAIL)?),
    }
}
