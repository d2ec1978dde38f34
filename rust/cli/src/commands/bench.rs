//! Bench command handler for hand evaluation performance benchmarking.
//!
//! Draws random 7-card hands from a full deck with the seeded generator and
//! times how long the best-of-seven evaluation takes across all of them.

use crate::error::CliError;
use crate::formatters::format_strength;
use holdem_odds_engine::cards::{Card, build_deck};
use holdem_odds_engine::hand::{Category, HandStrength, best_of_seven};
use holdem_odds_engine::lcg::Lcg;
use rand::seq::index::sample;
use std::io::Write;

pub fn handle_bench_command(hands: u32, seed: u64, out: &mut dyn Write) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let deck = build_deck();
    let mut rng = Lcg::new(seed);
    let draws: Vec<[Card; 7]> = (0..hands)
        .map(|_| {
            let idx = sample(&mut rng, deck.len(), 7);
            let mut hand = [deck[0]; 7];
            for (slot, i) in hand.iter_mut().zip(idx.iter()) {
                *slot = deck[i];
            }
            hand
        })
        .collect();

    let start = std::time::Instant::now();
    let mut best: Option<HandStrength> = None;
    let mut counts = [0u32; 10];
    for hand in &draws {
        let hs = best_of_seven(hand);
        counts[hs.category.value() as usize] += 1;
        if best.is_none_or(|b| hs > b) {
            best = Some(hs);
        }
    }
    let dur = start.elapsed();
    tracing::debug!(hands, ?dur, "bench finished");

    writeln!(out, "Benchmark: {} iters in {:?}", hands, dur)?;
    if let Some(best) = best {
        writeln!(out, "Best hand: {}", format_strength(&best))?;
    }
    for (value, &n) in counts.iter().enumerate().skip(1) {
        if n == 0 {
            continue;
        }
        if let Some(category) = Category::from_value(value as u8) {
            writeln!(out, "  {:<16} {}", category.name(), n)?;
        }
    }
    Ok(())
}
