//! Test infrastructure for leaderboard-sync integration tests.

#![allow(dead_code)]

use anyhow::Result;
use leaderboard_sync::git::run_git;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary git repository for testing.
/// Automatically cleaned up when dropped.
pub struct TestRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestRepo {
    /// Creates a new test repository with an initial commit on the main branch.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();

        run_git(&path, &["init", "-b", "main"])?;

        run_git(&path, &["config", "user.email", "test@example.com"])?;
        run_git(&path, &["config", "user.name", "Test User"])?;
        run_git(&path, &["config", "commit.gpgsign", "false"])?;

        std::fs::write(path.join("data.csv"), "name,score\n")?;
        run_git(&path, &["add", "data.csv"])?;
        run_git(&path, &["commit", "-m", "Initial commit"])?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Creates a test repository with a bare `origin` remote tracking main.
    /// Returns the repo and the remote TempDir (must be kept alive).
    pub fn with_remote() -> Result<(Self, TempDir)> {
        let remote_dir = TempDir::new()?;
        run_git(remote_dir.path(), &["init", "--bare", "-b", "main"])?;

        let local = Self::new()?;

        let remote_path = remote_dir.path().to_string_lossy().into_owned();
        run_git(&local.path, &["remote", "add", "origin", &remote_path])?;
        run_git(&local.path, &["push", "-u", "origin", "main"])?;

        Ok((local, remote_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Modifies the tracked data file.
    pub fn make_dirty(&self) -> Result<()> {
        std::fs::write(self.path.join("data.csv"), "name,score\nalice,42\n")?;
        Ok(())
    }

    pub fn make_untracked(&self) -> Result<()> {
        std::fs::write(self.path.join("untracked.txt"), "new file\n")?;
        Ok(())
    }

    /// Subject line of the latest commit on HEAD.
    pub fn head_subject(&self) -> Result<String> {
        run_git(&self.path, &["log", "-1", "--format=%s"])
    }

    pub fn commit_count(&self) -> Result<usize> {
        Ok(run_git(&self.path, &["rev-list", "--count", "HEAD"])?.parse()?)
    }
}

/// Subject line of the latest commit on `main` in a bare remote.
pub fn remote_head_subject(remote: &Path) -> Result<String> {
    run_git(remote, &["log", "-1", "--format=%s", "main"])
}
