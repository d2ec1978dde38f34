//! Command handler modules.
//!
//! Each subcommand lives in its own file and follows the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated via the `CliError` enum

pub mod bench;
pub mod cfg;
pub mod equity;
pub mod play;
pub mod rank;
pub mod rng;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use equity::{EquityRequest, handle_equity_command};
pub use play::{PlayOptions, handle_play_command};
pub use rank::handle_rank_command;
pub use rng::handle_rng_command;
