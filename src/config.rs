//! Configuration types for run mode and CLI verbosity.

use crate::constants::ONCE_ARG;

/// Runtime configuration derived from CLI arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Controls the verbosity level of CLI output.
    pub verbosity: Verbosity,
    /// Whether to sync once or keep watching.
    pub mode: RunMode,
}

impl Config {
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}

/// Verbosity level for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Quiet wins over verbose when both flags are given.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// How many sync cycles the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Run one cycle and exit.
    Once,
    /// Run a cycle every interval until interrupted.
    #[default]
    Continuous,
}

impl RunMode {
    /// Only the exact token `once` selects single-shot mode; anything else,
    /// including no argument, means continuous.
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(ONCE_ARG) => RunMode::Once,
            _ => RunMode::Continuous,
        }
    }
}
