//! Fakes shared by unit tests.

use crate::git::{GitCommand, VersionControl};
use crate::sync::{CycleOutcome, StatusCheck, SyncCallbacks};
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Records every command and answers from a canned status output.
pub struct FakeGit {
    status: String,
    failures: Vec<(GitCommand, String)>,
    commands: RefCell<Vec<GitCommand>>,
}

impl FakeGit {
    pub fn clean() -> Self {
        Self::dirty("")
    }

    pub fn dirty(status: &str) -> Self {
        Self {
            status: status.to_string(),
            failures: Vec::new(),
            commands: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(mut self, command: GitCommand, error: &str) -> Self {
        self.failures.push((command, error.to_string()));
        self
    }

    pub fn commands(&self) -> Vec<GitCommand> {
        self.commands.borrow().clone()
    }

    /// Commit messages seen so far, in order.
    pub fn commit_messages(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|command| match command {
                GitCommand::Commit { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl VersionControl for FakeGit {
    fn run(&self, command: &GitCommand) -> anyhow::Result<String> {
        self.commands.borrow_mut().push(command.clone());
        if let Some((_, error)) = self.failures.iter().find(|(c, _)| c == command) {
            anyhow::bail!("{}", error);
        }
        match command {
            GitCommand::Status => Ok(self.status.clone()),
            _ => Ok(String::new()),
        }
    }
}

#[derive(Default)]
pub struct RecordingCallbacks {
    successes: RefCell<Vec<GitCommand>>,
    failures: RefCell<Vec<(GitCommand, String)>>,
    statuses: RefCell<Vec<StatusCheck>>,
    outcomes: RefCell<Vec<CycleOutcome>>,
    waits: Cell<usize>,
    pushed: Cell<usize>,
    watch_started: Cell<bool>,
    stopped: Cell<bool>,
}

impl RecordingCallbacks {
    pub fn successes(&self) -> Vec<GitCommand> {
        self.successes.borrow().clone()
    }

    pub fn failures(&self) -> Vec<(GitCommand, String)> {
        self.failures.borrow().clone()
    }

    pub fn statuses(&self) -> Vec<StatusCheck> {
        self.statuses.borrow().clone()
    }

    pub fn outcomes(&self) -> Vec<CycleOutcome> {
        self.outcomes.borrow().clone()
    }

    pub fn waits(&self) -> usize {
        self.waits.get()
    }

    pub fn pushed(&self) -> usize {
        self.pushed.get()
    }

    pub fn watch_started(&self) -> bool {
        self.watch_started.get()
    }

    pub fn stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl SyncCallbacks for RecordingCallbacks {
    fn on_command_success(&self, command: &GitCommand, _stdout: &str) {
        self.successes.borrow_mut().push(command.clone());
    }

    fn on_command_failure(&self, command: &GitCommand, error: &str) {
        self.failures
            .borrow_mut()
            .push((command.clone(), error.to_string()));
    }

    fn on_status(&self, status: &StatusCheck) {
        self.statuses.borrow_mut().push(*status);
    }

    fn on_watch_start(&self, _interval: Duration) {
        self.watch_started.set(true);
    }

    fn on_cycle_complete(&self, outcome: &CycleOutcome) {
        self.outcomes.borrow_mut().push(outcome.clone());
    }

    fn on_pushed(&self) {
        self.pushed.set(self.pushed.get() + 1);
    }

    fn on_wait_start(&self, _interval: Duration) {
        self.waits.set(self.waits.get() + 1);
    }

    fn on_stopped(&self) {
        self.stopped.set(true);
    }
}
