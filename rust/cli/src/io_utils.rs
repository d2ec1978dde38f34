//! Interactive input helpers.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// This function is used for interactive commands that need user input.
/// It trims whitespace from the input and returns `None` on EOF or read errors.
/// Read errors are logged at `warn` so a failed terminal is not mistaken for
/// the player closing input.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use holdem_odds_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  c \n");
/// assert_eq!(read_stdin_line(&mut input), Some("c".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read input line");
            None
        }
    }
}
