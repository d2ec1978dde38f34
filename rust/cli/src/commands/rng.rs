//! Sequence generator inspection command.
//!
//! Prints the first draws of the linear congruential generator for a seed so
//! runs can be compared across machines. The same seed always prints the same
//! sample.

use crate::error::CliError;
use holdem_odds_engine::lcg::Lcg;
use std::io::Write;

/// Largest sample the command prints.
pub const MAX_COUNT: u32 = 100_000;

/// Writes `count` draws in `[0, max]` followed by the final generator state.
///
/// # Example
///
/// ```ignore
/// let mut out = Vec::new();
/// handle_rng_command(5_674_832, 5, 99, &mut out).unwrap();
/// // RNG sample: [21, 90, 63, 52, 77]
/// ```
pub fn handle_rng_command(
    seed: u64,
    count: u32,
    max: i64,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if count > MAX_COUNT {
        return Err(CliError::InvalidInput(format!(
            "count must be <= {}",
            MAX_COUNT
        )));
    }
    let mut rng = Lcg::new(seed);
    write!(out, "RNG sample: [")?;
    for i in 0..count {
        let v = rng.next_in_range(0, max)?;
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{}", v)?;
    }
    writeln!(out, "]")?;
    writeln!(out, "State: {}", rng.state())?;
    Ok(())
}
