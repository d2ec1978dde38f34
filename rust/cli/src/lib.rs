//! # Hold'em Odds CLI Library
//!
//! Command-line front end for the `holdem_odds_engine` crate: Monte Carlo
//! equity estimates, hand ranking, and an interactive single-hand game.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem-odds", "equity", "--hero", "AhKh", "--opponents", "2"];
//! let code = holdem_odds_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `equity`: Estimate win-or-tie probability for hole cards and a partial board
//! - `rank`: Classify a 5- or 7-card hand
//! - `play`: Play one interactive hand with equity shown on every street
//! - `rng`: Print a sample of the seeded sequence generator
//! - `bench`: Benchmark 7-card hand evaluation
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    EquityRequest, PlayOptions, handle_bench_command, handle_cfg_command, handle_equity_command,
    handle_play_command, handle_rank_command, handle_rng_command,
};

pub use error::CliError;

/// Exit code for a command that ran to completion.
pub const EXIT_OK: i32 = 0;
/// Exit code for parse errors and failed commands.
pub const EXIT_FAILURE: i32 = 2;

const COMMANDS: &[&str] = &["equity", "rank", "play", "rng", "bench", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler. Interactive input for `play` is read from the process stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["holdem-odds", "rng", "--seed", "42"];
/// let code = holdem_odds_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`] but reads interactive answers from `stdin`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    match dispatch(cli.cmd, out, err, stdin) {
        Ok(()) => EXIT_OK,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = writeln!(err, "Error: {}", e);
            EXIT_FAILURE
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => EXIT_OK,
            Err(_) => EXIT_FAILURE,
        };
    }
    let mut usage = format!(
        "{}\nHold'em Odds CLI\nUsage: holdem-odds <command> [options]\n\nCommands:\n",
        e
    );
    for c in COMMANDS {
        usage.push_str(&format!("  {}\n", c));
    }
    usage.push_str("\nFor full help, run: holdem-odds --help\n");
    let _ = write!(err, "{}", usage);
    EXIT_FAILURE
}

fn dispatch(
    cmd: Commands,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Rank { cards } => handle_rank_command(&cards, out),
        Commands::Equity {
            hero,
            board,
            opponents,
            trials,
            seed,
            workers,
            json,
        } => {
            let cfg = load_config()?;
            let req = EquityRequest {
                hero,
                board,
                opponents,
                trials,
                seed,
                workers,
                json,
            };
            handle_equity_command(req, &cfg, out)
        }
        Commands::Play {
            opponents,
            seed,
            trials,
            log,
        } => {
            let cfg = load_config()?;
            let opts = PlayOptions {
                opponents: opponents.unwrap_or(cfg.opponents),
                seed: seed.unwrap_or(cfg.seed),
                trials: trials.unwrap_or(cfg.trials),
                log,
            };
            handle_play_command(opts, out, err, stdin)
        }
        Commands::Rng { seed, count, max } => {
            let seed = match seed {
                Some(s) => s,
                None => load_config()?.seed,
            };
            handle_rng_command(seed, count, max, out)
        }
        Commands::Bench { hands, seed } => {
            let seed = match seed {
                Some(s) => s,
                None => load_config()?.seed,
            };
            handle_bench_command(hands, seed, out)
        }
    }
}

fn load_config() -> Result<config::Config, CliError> {
    config::load().map_err(|e| CliError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(String::new());
        let code = run_with_input(args.iter().copied(), &mut out, &mut err, &mut stdin);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout_with_success() {
        let (code, out, err) = run_args(&["holdem-odds", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("equity"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_commands_on_stderr() {
        let (code, out, err) = run_args(&["holdem-odds", "deal"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}\n", c)), "missing {c}");
        }
    }

    #[test]
    fn rank_dispatches_without_config() {
        let (code, out, _) = run_args(&["holdem-odds", "rank", "--cards", "As Ks Qs Js Ts"]);
        assert_eq!(code, 0);
        assert!(out.contains("Straight Flush [A]"));
    }

    #[test]
    fn rng_count_beyond_cap_fails_cleanly() {
        let (code, out, err) =
            run_args(&["holdem-odds", "rng", "--count", "18446744073709551615"]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
        assert!(err.contains("--count"));
    }

    #[test]
    fn handler_errors_map_to_exit_two() {
        let (code, out, err) = run_args(&["holdem-odds", "rank", "--cards", "As Ks"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.starts_with("Error: Invalid input: rank needs 5 or 7 cards"));
    }
}
