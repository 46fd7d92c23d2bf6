use clap::Parser;
use leaderboard_sync::config::{Config, RunMode, Verbosity};
use leaderboard_sync::constants::SYNC_INTERVAL;
use leaderboard_sync::git::GitCli;
use leaderboard_sync::output::{self, ConsoleCallbacks};
use leaderboard_sync::watch::{self, Shutdown, SystemClock};
use std::sync::Arc;

/// Commit and push working tree changes, once or every few minutes.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Only print failures and results
    #[arg(short, long)]
    quiet: bool,

    /// Print command output and change counts
    #[arg(short, long)]
    verbose: bool,

    /// Pass `once` to sync a single time; anything else keeps watching.
    /// Tokens after the first are ignored.
    #[arg(
        value_name = "MODE",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            verbosity: Verbosity::from_flags(self.quiet, self.verbose),
            mode: RunMode::from_arg(self.args.first().map(String::as_str)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().config();

    let cwd = std::env::current_dir()?;
    output::print_working_dir(&cwd, &config);

    let git = GitCli::new(cwd);
    let callbacks = ConsoleCallbacks::new(config);

    match config.mode {
        RunMode::Once => {
            watch::run_once(&git, &callbacks);
        }
        RunMode::Continuous => {
            let shutdown = Arc::new(Shutdown::new());
            let handler_shutdown = Arc::clone(&shutdown);
            ctrlc::set_handler(move || handler_shutdown.request())
                .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))?;

            watch::run_continuous(
                &git,
                &SystemClock,
                shutdown.as_ref(),
                SYNC_INTERVAL,
                &callbacks,
            );
        }
    }

    Ok(())
}
