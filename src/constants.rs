//! Application-wide constants.
//!
//! Centralized values for the sync loop so the interval, remote and message
//! templates are not scattered as literals.

use std::time::Duration;

/// Time between two sync cycles in continuous mode.
pub const SYNC_INTERVAL: Duration = Duration::from_secs(300);

/// Remote the sync cycle pushes to.
pub const REMOTE: &str = "origin";

/// Branch the sync cycle pushes to.
pub const BRANCH: &str = "main";

/// Positional argument value that selects single-shot mode.
pub const ONCE_ARG: &str = "once";

/// Commit message used in single-shot mode.
pub const ONCE_COMMIT_MESSAGE: &str = "Update leaderboard data";

/// Prefix of the timestamped commit message used in continuous mode.
pub const CONTINUOUS_COMMIT_PREFIX: &str = "Update leaderboard";

/// `chrono` format string for the commit message timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Progress bar tick interval in milliseconds.
pub const PROGRESS_TICK_MS: u64 = 80;
