//! Git CLI wrapper: change-set enumeration, identity detection, and
//! per-file committer history.
//!
//! Shells out to `git` via `tokio::process::Command`. History queries for
//! distinct files are independent and dispatched concurrently, bounded by
//! a semaphore.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::constants::MAX_CONCURRENT_QUERIES;
use crate::models::{CommitRecord, FileHistory};

/// Errors from the git wrapper.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git command failed: {0}")]
    Command(String),

    #[error("could not determine git identity: {0}")]
    Identity(String),
}

/// Run a git command in `repo_root` and return trimmed stdout.
async fn run_git(repo_root: &Path, args: &[&str]) -> Result<String, GitError> {
    let output = tokio::process::Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .await
        .map_err(|e| GitError::Command(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::Command(format!(
            "git {} failed (exit {}): {}",
            args.first().unwrap_or(&""),
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Find the root of the git repository containing `start_dir`.
pub async fn find_repo_root(start_dir: &Path) -> Result<PathBuf, GitError> {
    let output = tokio::process::Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(start_dir)
        .output()
        .await
        .map_err(|e| GitError::Command(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::Command(format!(
            "not a git repository: {}",
            stderr.trim()
        )));
    }

    Ok(PathBuf::from(
        String::from_utf8_lossy(&output.stdout).trim(),
    ))
}

/// Detect the invoking user's configured identity (`git config user.name`).
///
/// Fatal when unset: the ignore list cannot be correctly constructed
/// without it.
pub async fn active_user_name(repo_root: &Path) -> Result<String, GitError> {
    let stdout = run_git(repo_root, &["config", "user.name"])
        .await
        .map_err(|e| GitError::Identity(e.to_string()))?;

    let name = stdout.lines().next().unwrap_or("").trim().to_string();
    if name.is_empty() {
        return Err(GitError::Identity("user.name is not set".to_string()));
    }
    Ok(name)
}

/// List files differing between the working tree and `branch`.
///
/// Tracked changes come from `git diff --name-only <branch>`; untracked
/// files are appended from `git ls-files --others --exclude-standard`.
/// Duplicates are removed preserving first-seen order. An invalid branch
/// is fatal.
pub async fn changed_files(repo_root: &Path, branch: &str) -> Result<Vec<String>, GitError> {
    let diffed = run_git(repo_root, &["diff", "--name-only", branch]).await?;
    let untracked = run_git(
        repo_root,
        &["ls-files", "--others", "--exclude-standard"],
    )
    .await?;

    let mut seen = std::collections::HashSet::new();
    let files = diffed
        .lines()
        .chain(untracked.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.to_string()))
        .map(str::to_string)
        .collect();

    Ok(files)
}

/// Parse `git shortlog -sne` output into commit records.
///
/// Each line is `<count>\t<identity>`. Lines with fewer than two
/// tab-separated fields are discarded, as are lines whose count field does
/// not parse as an integer.
pub fn parse_shortlog(stdout: &str) -> Vec<CommitRecord> {
    stdout
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\t').map(str::trim);
            let count = fields.next()?;
            let identity = fields.next()?;
            let commits = count.parse::<u32>().ok()?;
            Some(CommitRecord {
                commits,
                identity: identity.to_string(),
            })
        })
        .collect()
}

/// Query historical committers for a single file.
///
/// A failing query (file untracked, removed, or subprocess error) yields
/// `FileHistory::QueryFailed` rather than an error: one bad file must not
/// abort the run.
pub async fn file_committers(repo_root: &Path, file: &str) -> FileHistory {
    // The explicit HEAD matters: without a revision, shortlog reads
    // commits from stdin when stdin is not a terminal.
    match run_git(repo_root, &["shortlog", "-sne", "HEAD", "--", file]).await {
        Ok(stdout) => FileHistory::Records(parse_shortlog(&stdout)),
        Err(e) => FileHistory::QueryFailed(e.to_string()),
    }
}

/// Query committer history for every file, concurrently.
///
/// Dispatch is bounded by [`MAX_CONCURRENT_QUERIES`]. Results are re-ordered
/// by input index before returning so the aggregation encounter order is
/// deterministic regardless of task completion order.
pub async fn query_histories(repo_root: &Path, files: &[String]) -> Vec<FileHistory> {
    let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_QUERIES));
    let mut join_set = JoinSet::new();

    for (index, file) in files.iter().enumerate() {
        let sem = Arc::clone(&semaphore);
        let repo_root = repo_root.to_path_buf();
        let file = file.clone();

        join_set.spawn(async move {
            // Semaphore is never closed, acquire cannot fail.
            let _permit = sem.acquire().await.unwrap();
            (index, file_committers(&repo_root, &file).await)
        });
    }

    let mut histories: Vec<FileHistory> = files
        .iter()
        .map(|_| FileHistory::QueryFailed("query did not complete".to_string()))
        .collect();
    while let Some(result) = join_set.join_next().await {
        if let Ok((index, history)) = result {
            histories[index] = history;
        }
    }

    histories
}
