//! Leaderboard auto-commit library.
//!
//! This crate keeps a git working tree in sync with its hosting branch by:
//! - Checking `git status --porcelain` for pending changes
//! - Staging, committing and pushing them with a timestamped message
//! - Repeating on a fixed interval until interrupted, or running once

pub mod config;
pub mod constants;
pub mod git;
pub mod output;
pub mod sync;
pub mod watch;

#[cfg(test)]
mod testing;
