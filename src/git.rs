//! Git command wrappers.
//!
//! This module provides a thin wrapper around the git CLI: the command lines
//! the sync cycle issues, the process primitive that runs them, and the
//! [`VersionControl`] seam the sync logic is written against.

use crate::constants::{BRANCH, REMOTE};
use anyhow::Context;
use std::fmt;
use std::path::{Path, PathBuf};

/// Runs `git <args>` in `repo` and returns trimmed stdout.
///
/// A non-zero exit becomes an error carrying stderr, or stdout when git
/// reported on stdout only (`git commit` with nothing staged does this).
pub fn run_git(repo: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = std::process::Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .context("Failed to execute git command")?;

    if output.status.success() {
        let result = String::from_utf8_lossy(&output.stdout);
        Ok(result.as_ref().trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let detail = [stderr.trim(), stdout.trim()]
            .into_iter()
            .find(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| output.status.to_string());
        anyhow::bail!("{}", detail)
    }
}

/// The git command lines a sync cycle can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    /// `git status --porcelain`
    Status,
    /// `git add .`
    AddAll,
    /// `git commit -m "<message>"`
    Commit { message: String },
    /// `git push <remote> <branch>`
    Push { remote: String, branch: String },
}

impl GitCommand {
    pub fn commit(message: impl Into<String>) -> Self {
        GitCommand::Commit {
            message: message.into(),
        }
    }

    /// Push to the fixed hosting remote and branch.
    pub fn push() -> Self {
        GitCommand::Push {
            remote: REMOTE.to_string(),
            branch: BRANCH.to_string(),
        }
    }

    /// Arguments passed to the `git` executable.
    #[must_use]
    pub fn args(&self) -> Vec<&str> {
        match self {
            GitCommand::Status => vec!["status", "--porcelain"],
            GitCommand::AddAll => vec!["add", "."],
            GitCommand::Commit { message } => vec!["commit", "-m", message.as_str()],
            GitCommand::Push { remote, branch } => vec!["push", remote.as_str(), branch.as_str()],
        }
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitCommand::Status => write!(f, "git status --porcelain"),
            GitCommand::AddAll => write!(f, "git add ."),
            GitCommand::Commit { message } => write!(f, "git commit -m \"{}\"", message),
            GitCommand::Push { remote, branch } => write!(f, "git push {} {}", remote, branch),
        }
    }
}

/// Capability the sync cycle needs from a version-control tool.
///
/// Every higher-level operation is a sequence of [`VersionControl::run`]
/// calls, so a fake only has to answer individual command lines.
pub trait VersionControl {
    fn run(&self, command: &GitCommand) -> anyhow::Result<String>;
}

/// [`VersionControl`] backed by the `git` executable on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo: PathBuf,
}

impl GitCli {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }
}

impl VersionControl for GitCli {
    fn run(&self, command: &GitCommand) -> anyhow::Result<String> {
        run_git(&self.repo, &command.args())
    }
}
