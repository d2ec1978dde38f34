//! Input parsing and validation for user-supplied values.
//!
//! The engine treats bad input as a contract violation, so everything typed
//! by a user is checked here first:
//! - hole cards and board text
//! - opponent counts
//! - interactive call/fold decisions

use holdem_odds_engine::cards::{Card, ensure_unique, parse_cards};

use crate::config::MAX_OPPONENTS;

/// Result of parsing one line typed at an action prompt.
#[derive(Debug, PartialEq)]
pub enum Decision {
    Call,
    Fold,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a prompt answer (case-insensitive): "c"/"call"/"check", "f"/"fold",
/// "q"/"quit".
///
/// # Example
///
/// ```rust
/// # use holdem_odds_cli::validation::{parse_decision, Decision};
/// assert_eq!(parse_decision("C"), Decision::Call);
/// assert_eq!(parse_decision(" fold "), Decision::Fold);
/// assert_eq!(parse_decision("q"), Decision::Quit);
/// assert!(matches!(parse_decision("raise"), Decision::Invalid(_)));
/// ```
pub fn parse_decision(input: &str) -> Decision {
    match input.trim().to_lowercase().as_str() {
        "c" | "call" | "check" => Decision::Call,
        "f" | "fold" => Decision::Fold,
        "q" | "quit" => Decision::Quit,
        "" => Decision::Invalid("Empty input".to_string()),
        other => Decision::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: c (call), f (fold), q (quit)",
            other
        )),
    }
}

/// Parses exactly two hole cards.
pub fn parse_hole_cards(text: &str) -> Result<Vec<Card>, String> {
    let cards = parse_cards(text).map_err(|e| e.to_string())?;
    if cards.len() != 2 {
        return Err(format!("hero needs exactly 2 cards, got {}", cards.len()));
    }
    ensure_unique(&cards).map_err(|e| e.to_string())?;
    Ok(cards)
}

/// Parses a board of 0 (pre-flop), 3 (flop), 4 (turn) or 5 (river) cards.
pub fn parse_board(text: Option<&str>) -> Result<Vec<Card>, String> {
    let cards = match text {
        Some(t) => parse_cards(t).map_err(|e| e.to_string())?,
        None => Vec::new(),
    };
    if !matches!(cards.len(), 0 | 3 | 4 | 5) {
        return Err(format!(
            "board must have 0, 3, 4 or 5 cards, got {}",
            cards.len()
        ));
    }
    ensure_unique(&cards).map_err(|e| e.to_string())?;
    Ok(cards)
}

pub fn validate_opponents(opponents: u8) -> Result<(), String> {
    if (1..=MAX_OPPONENTS).contains(&opponents) {
        Ok(())
    } else {
        Err(format!("opponents must be 1..={}", MAX_OPPONENTS))
    }
}
