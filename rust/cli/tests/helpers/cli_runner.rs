use std::io::Cursor;
use std::time::{Duration, Instant};

use holdem_odds_cli::run_with_input;

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

/// Runs the CLI in-process with `args` (program name prepended) and `stdin`.
pub fn run_cli(args: &[&str], stdin: &str) -> CliResult {
    let mut argv = vec!["holdem-odds"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(stdin.to_string());
    let start = Instant::now();
    let exit_code = run_with_input(argv, &mut out, &mut err, &mut input);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
        duration: start.elapsed(),
    }
}
