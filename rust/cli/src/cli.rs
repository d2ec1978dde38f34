//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem-odds",
    version,
    about = "Texas Hold'em win probability estimator"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the probability of winning or tying with the given hole cards
    Equity {
        /// Hero hole cards, e.g. "AhKh"
        #[arg(long)]
        hero: String,
        /// Known community cards (0, 3, 4 or 5), e.g. "Qh Jh 2c"
        #[arg(long)]
        board: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
        opponents: Option<u8>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        trials: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Split the trials across this many threads
        #[arg(long)]
        workers: Option<usize>,
        /// Emit a JSON object instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Rank a 5- or 7-card hand
    Rank {
        #[arg(long)]
        cards: String,
    },
    /// Deal one interactive hand with a win probability at every street
    Play {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
        opponents: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        trials: Option<u32>,
        /// Append the finished hand to a JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Print draws from the linear congruential generator
    Rng {
        #[arg(long)]
        seed: Option<u64>,
        /// Number of draws to print (at most 100000)
        #[arg(
            long,
            default_value_t = 5,
            value_parser = clap::value_parser!(u32).range(..=100_000)
        )]
        count: u32,
        /// Inclusive upper bound of each draw (lower bound is 0)
        #[arg(long, default_value_t = 99)]
        max: i64,
    },
    /// Time 7-card evaluation over random hands
    Bench {
        #[arg(long, default_value_t = 200)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<HoldemCli, clap::Error> {
        HoldemCli::try_parse_from(std::iter::once("holdem-odds").chain(args.iter().copied()))
    }

    #[test]
    fn opponents_range_is_enforced_by_parser() {
        assert!(parse(&["equity", "--hero", "AhKh", "--opponents", "0"]).is_err());
        assert!(parse(&["equity", "--hero", "AhKh", "--opponents", "10"]).is_err());
        assert!(parse(&["play", "--opponents", "9"]).is_ok());
    }

    #[test]
    fn zero_trials_rejected() {
        assert!(parse(&["equity", "--hero", "AhKh", "--trials", "0"]).is_err());
    }

    #[test]
    fn rng_count_is_capped_by_parser() {
        assert!(parse(&["rng", "--count", "100000"]).is_ok());
        assert!(parse(&["rng", "--count", "100001"]).is_err());
        assert!(parse(&["rng", "--count", "18446744073709551615"]).is_err());
    }

    #[test]
    fn rng_defaults() {
        let cli = parse(&["rng"]).unwrap();
        match cli.cmd {
            Commands::Rng { seed, count, max } => {
                assert_eq!(seed, None);
                assert_eq!(count, 5);
                assert_eq!(max, 99);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
