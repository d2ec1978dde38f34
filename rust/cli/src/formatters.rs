//! Card, board, and hand strength formatters for terminal display.
//!
//! Pure functions; cards use the engine's single-letter glyphs ("AH", "TD").
//!
//! ## Example
//!
//! ```rust
//! use holdem_odds_engine::cards::parse_cards;
//! use holdem_odds_cli::formatters::{format_board, format_percent};
//!
//! let flop = parse_cards("As Kh Qd").unwrap();
//! assert_eq!(format_board(&flop), "[AS KH QD]");
//! assert_eq!(format_percent(0.625), "62.5%");
//! ```

use holdem_odds_engine::cards::{Card, Rank};
use holdem_odds_engine::hand::HandStrength;

/// Space-separated card glyphs, e.g. "AH KH".
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Board in bracket notation, "[]" when empty.
pub fn format_board(cards: &[Card]) -> String {
    format!("[{}]", format_cards(cards))
}

/// Category name followed by its tiebreak ranks, e.g. "Two Pair [K 4 A]".
pub fn format_strength(hs: &HandStrength) -> String {
    let ranks: Vec<String> = hs
        .ranks()
        .iter()
        .filter_map(|&r| Rank::from_u8(r))
        .map(|r| r.glyph().to_string())
        .collect();
    format!("{} [{}]", hs.category.name(), ranks.join(" "))
}

/// Probability in [0, 1] as a percentage with one decimal.
pub fn format_percent(p: f64) -> String {
    format!("{:.1}%", 100.0 * p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_odds_engine::cards::parse_cards;
    use holdem_odds_engine::hand::rank_five;

    #[test]
    fn empty_board_is_bracketed() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn strength_lists_used_tiebreaks_only() {
        let hs = rank_five(&parse_cards("4c 4d Kh Ks Ac").unwrap()).unwrap();
        assert_eq!(format_strength(&hs), "Two Pair [K 4 A]");
        let wheel = rank_five(&parse_cards("Ah 2c 3d 4s 5h").unwrap()).unwrap();
        assert_eq!(format_strength(&wheel), "Straight [5]");
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.19666), "19.7%");
    }
}
