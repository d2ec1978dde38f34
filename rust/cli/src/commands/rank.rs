//! Rank command handler: classifies a 5- or 7-card hand.

use crate::error::CliError;
use crate::formatters::{format_cards, format_strength};
use holdem_odds_engine::cards::parse_cards;
use holdem_odds_engine::hand::{rank_five, rank_seven};
use std::io::Write;

pub fn handle_rank_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards)?;
    let strength = match cards.len() {
        5 => rank_five(&cards)?,
        7 => rank_seven(&cards)?,
        n => {
            return Err(CliError::InvalidInput(format!(
                "rank needs 5 or 7 cards, got {}",
                n
            )));
        }
    };
    writeln!(out, "{}: {}", format_cards(&cards), format_strength(&strength))?;
    Ok(())
}
