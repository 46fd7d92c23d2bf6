//! Colored console output and the wait spinner.
//!
//! Every line the program prints goes through [`ConsoleCallbacks`], which
//! decides what to show based on the configured verbosity.

use crate::config::Config;
use crate::constants::PROGRESS_TICK_MS;
use crate::git::GitCommand;
use crate::sync::{CycleOutcome, StatusCheck, SyncCallbacks};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::path::Path;
use std::time::Duration;

/// No-op callbacks for when output is not needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpCallbacks;

impl SyncCallbacks for NoOpCallbacks {
    fn on_command_success(&self, _command: &GitCommand, _stdout: &str) {}
    fn on_command_failure(&self, _command: &GitCommand, _error: &str) {}
}

/// Prints progress to the terminal.
///
/// Quiet mode keeps failures and the final result lines. Verbose mode adds
/// command output and skips the spinner so nothing gets overwritten.
pub struct ConsoleCallbacks {
    config: Config,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleCallbacks {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            spinner: RefCell::new(None),
        }
    }
}

impl SyncCallbacks for ConsoleCallbacks {
    fn on_command_success(&self, command: &GitCommand, stdout: &str) {
        if self.config.is_quiet() {
            return;
        }
        println!("{}", format_success(command));
        if self.config.is_verbose() && !stdout.is_empty() {
            for line in stdout.lines() {
                println!("    {}", line.dimmed());
            }
        }
    }

    fn on_command_failure(&self, command: &GitCommand, error: &str) {
        println!("{}", format_failure(command, error));
    }

    fn on_status(&self, status: &StatusCheck) {
        if !self.config.is_verbose() {
            return;
        }
        if let StatusCheck::Changed { paths } = status {
            println!("  {}", format!("{} changed path(s)", paths).dimmed());
        }
    }

    fn on_watch_start(&self, interval: Duration) {
        if self.config.is_quiet() {
            return;
        }
        let (started, schedule) = format_watch_banner(interval);
        println!("{}", started.cyan());
        println!("{}", schedule.dimmed());
    }

    fn on_cycle_complete(&self, outcome: &CycleOutcome) {
        match outcome {
            CycleOutcome::NoChanges if !self.config.is_quiet() => {
                println!("{}", NO_CHANGES_LINE);
            }
            CycleOutcome::StatusFailed => {
                println!("{}", STATUS_FAILED_LINE.yellow());
            }
            _ => {}
        }
    }

    fn on_pushed(&self) {
        println!("{}", PUSHED_LINE.green().bold());
    }

    fn on_wait_start(&self, interval: Duration) {
        *self.spinner.borrow_mut() = create_wait_spinner(&self.config, interval);
    }

    fn on_wait_end(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }

    fn on_stopped(&self) {
        println!("\n{}", STOPPED_LINE.bold());
    }
}

/// Spinner shown while waiting for the next cycle.
/// Returns `None` in quiet or verbose mode.
#[must_use]
pub fn create_wait_spinner(config: &Config, interval: Duration) -> Option<ProgressBar> {
    if config.is_quiet() || config.is_verbose() {
        return None;
    }
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(format!("Next sync in {}", format_interval(interval)));
    spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
    Some(spinner)
}

pub fn print_working_dir(path: &Path, config: &Config) {
    if !config.is_verbose() {
        return;
    }
    println!(
        "{} {}",
        "Working in:".cyan(),
        path.display().to_string().white().bold()
    )
}

const NO_CHANGES_LINE: &str = "No changes to commit.";
const STATUS_FAILED_LINE: &str = "Could not read working tree status; skipping this cycle.";
const PUSHED_LINE: &str = "✅ Pushed to GitHub Pages";
const STOPPED_LINE: &str = "👋 Stopped.";

fn format_success(command: &GitCommand) -> String {
    format!("{} {}", "✓".green(), command)
}

/// The two lines printed when continuous mode starts.
fn format_watch_banner(interval: Duration) -> (String, String) {
    (
        "Auto-commit watcher started (Ctrl+C to stop)".to_string(),
        format!("Updates data.csv every {}...", format_interval(interval)),
    )
}

fn format_failure(command: &GitCommand, error: &str) -> String {
    format!("{} {}: {}", "✗".red(), command, error.trim())
}

/// Human-readable interval, e.g. "5 minutes" or "90 seconds".
fn format_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    match (secs / 60, secs % 60) {
        (1, 0) => "1 minute".to_string(),
        (minutes, 0) if minutes > 0 => format!("{} minutes", minutes),
        _ if secs == 1 => "1 second".to_string(),
        _ => format!("{} seconds", secs),
    }
}
