// Change detection and the stage/commit/push cycle

use crate::git::{GitCommand, VersionControl};

/// Receives progress notifications from the sync cycle and the watch loop.
///
/// Only the command callbacks are required; everything else defaults to a
/// no-op so quiet implementations stay small.
pub trait SyncCallbacks {
    fn on_command_success(&self, command: &GitCommand, stdout: &str);
    fn on_command_failure(&self, command: &GitCommand, error: &str);

    fn on_status(&self, _status: &StatusCheck) {}
    fn on_watch_start(&self, _interval: std::time::Duration) {}
    fn on_cycle_complete(&self, _outcome: &CycleOutcome) {}
    fn on_pushed(&self) {}
    fn on_wait_start(&self, _interval: std::time::Duration) {}
    fn on_wait_end(&self) {}
    fn on_stopped(&self) {}
}

/// Result of querying the working tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCheck {
    Clean,
    Changed { paths: usize },
    /// The status query could not run or exited non-zero.
    Failed,
}

impl StatusCheck {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        matches!(self, StatusCheck::Changed { .. })
    }
}

/// What a single sync cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    NoChanges,
    StatusFailed,
    /// Stage, commit and push were all issued; `failed` lists the ones that
    /// reported an error.
    Synced { failed: Vec<GitCommand> },
    /// Changes were found but shutdown was requested before the sequence
    /// finished. `issued` lists the commands that ran.
    Interrupted { issued: Vec<GitCommand> },
}

impl CycleOutcome {
    /// True whenever changes were found, even if a later step failed.
    #[must_use]
    pub fn changes_detected(&self) -> bool {
        matches!(
            self,
            CycleOutcome::Synced { .. } | CycleOutcome::Interrupted { .. }
        )
    }
}

/// Runs one command and reports it. Failures come back as `None`.
pub fn run_command(
    vcs: &dyn VersionControl,
    command: &GitCommand,
    callbacks: &dyn SyncCallbacks,
) -> Option<String> {
    match vcs.run(command) {
        Ok(stdout) => {
            callbacks.on_command_success(command, &stdout);
            Some(stdout)
        }
        Err(err) => {
            callbacks.on_command_failure(command, &format!("{:#}", err));
            None
        }
    }
}

pub fn check_status(vcs: &dyn VersionControl, callbacks: &dyn SyncCallbacks) -> StatusCheck {
    let status = match run_command(vcs, &GitCommand::Status, callbacks) {
        None => StatusCheck::Failed,
        Some(output) if output.trim().is_empty() => StatusCheck::Clean,
        Some(output) => StatusCheck::Changed {
            paths: output.lines().filter(|line| !line.trim().is_empty()).count(),
        },
    };
    callbacks.on_status(&status);
    status
}

/// A failed status query counts as "no changes".
pub fn has_changes(vcs: &dyn VersionControl, callbacks: &dyn SyncCallbacks) -> bool {
    check_status(vcs, callbacks).has_changes()
}

/// Stages, commits and pushes when the working tree has changes.
///
/// The three commands always run in order; a failing step does not stop
/// the ones after it.
pub fn sync_cycle(
    vcs: &dyn VersionControl,
    message: &str,
    callbacks: &dyn SyncCallbacks,
) -> CycleOutcome {
    sync_cycle_until(vcs, message, callbacks, &|| false)
}

/// Like [`sync_cycle`], but checks `interrupted` before each of stage,
/// commit and push and stops issuing commands once it returns true.
pub fn sync_cycle_until(
    vcs: &dyn VersionControl,
    message: &str,
    callbacks: &dyn SyncCallbacks,
    interrupted: &dyn Fn() -> bool,
) -> CycleOutcome {
    match check_status(vcs, callbacks) {
        StatusCheck::Clean => return CycleOutcome::NoChanges,
        StatusCheck::Failed => return CycleOutcome::StatusFailed,
        StatusCheck::Changed { .. } => {}
    }

    let mut issued = Vec::new();
    let mut failed = Vec::new();
    for command in [GitCommand::AddAll, GitCommand::commit(message), GitCommand::push()] {
        if interrupted() {
            return CycleOutcome::Interrupted { issued };
        }
        if run_command(vcs, &command, callbacks).is_none() {
            failed.push(command.clone());
        }
        issued.push(command);
    }

    CycleOutcome::Synced { failed }
}

/// Returns whether changes were detected, regardless of whether the
/// stage/commit/push commands succeeded.
pub fn commit_and_push(
    vcs: &dyn VersionControl,
    message: &str,
    callbacks: &dyn SyncCallbacks,
) -> bool {
    commit_and_push_until(vcs, message, callbacks, &|| false)
}

/// [`commit_and_push`] that stops between commands once `interrupted`
/// returns true.
pub fn commit_and_push_until(
    vcs: &dyn VersionControl,
    message: &str,
    callbacks: &dyn SyncCallbacks,
    interrupted: &dyn Fn() -> bool,
) -> bool {
    let outcome = sync_cycle_until(vcs, message, callbacks, interrupted);
    callbacks.on_cycle_complete(&outcome);
    outcome.changes_detected()
}
