//! Equity command handler.
//!
//! Runs the Monte Carlo simulator for a hero hand against random opponents
//! and prints the win-or-tie probability together with the win, tie, and loss
//! split. With `--json` the same numbers are emitted as one JSON object.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_board, format_cards, format_percent};
use crate::validation::{parse_board, parse_hole_cards, validate_opponents};
use holdem_odds_engine::cards::build_deck;
use holdem_odds_engine::equity::{simulate, simulate_parallel};
use holdem_odds_engine::lcg::Lcg;
use std::io::Write;

/// Command-line values for one equity run; `None` falls back to config.
#[derive(Debug, Default)]
pub struct EquityRequest {
    pub hero: String,
    pub board: Option<String>,
    pub opponents: Option<u8>,
    pub trials: Option<u32>,
    pub seed: Option<u64>,
    pub workers: Option<usize>,
    pub json: bool,
}

pub fn handle_equity_command(
    req: EquityRequest,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hero = parse_hole_cards(&req.hero).map_err(CliError::InvalidInput)?;
    let board = parse_board(req.board.as_deref()).map_err(CliError::InvalidInput)?;
    let opponents = req.opponents.unwrap_or(cfg.opponents);
    validate_opponents(opponents).map_err(CliError::InvalidInput)?;
    let trials = req.trials.unwrap_or(cfg.trials);
    let seed = req.seed.unwrap_or(cfg.seed);
    let workers = req.workers.unwrap_or(cfg.workers);
    if workers == 0 {
        return Err(CliError::InvalidInput("workers must be >= 1".to_string()));
    }

    let mut rng = Lcg::new(seed);
    let deck = build_deck();
    let result = if workers > 1 {
        simulate_parallel(
            &hero,
            &board,
            opponents as usize,
            &deck,
            trials,
            workers,
            &mut rng,
        )?
    } else {
        simulate(&hero, &board, opponents as usize, &deck, trials, &mut rng)?
    };
    tracing::info!(
        hero = %format_cards(&hero),
        opponents,
        trials,
        equity = result.probability(),
        "equity estimated"
    );

    if req.json {
        let body = serde_json::json!({
            "hero": format_cards(&hero),
            "board": format_cards(&board),
            "opponents": opponents,
            "seed": seed,
            "workers": workers,
            "wins": result.wins,
            "ties": result.ties,
            "losses": result.losses(),
            "total": result.total,
            "equity": result.probability(),
        });
        let line = serde_json::to_string(&body).map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
        return Ok(());
    }

    writeln!(
        out,
        "Hero {} vs {} opponent(s), board {}",
        format_cards(&hero),
        opponents,
        format_board(&board)
    )?;
    writeln!(
        out,
        "Equity (win or tie): {} over {} trials",
        format_percent(result.probability()),
        result.total
    )?;
    writeln!(
        out,
        "Win {} | Tie {} | Loss {}",
        format_percent(result.win_rate()),
        format_percent(result.tie_rate()),
        format_percent(result.loss_rate())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(hero: &str) -> EquityRequest {
        EquityRequest {
            hero: hero.to_string(),
            trials: Some(200),
            ..EquityRequest::default()
        }
    }

    #[test]
    fn text_output_uses_recorded_default_seed_counts() {
        let mut out = Vec::new();
        handle_equity_command(request("AhKh"), &Config::default(), &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("Hero AH KH vs 1 opponent(s), board []"), "{s}");
        assert!(s.contains("Equity (win or tie): 62.0% over 200 trials"), "{s}");
        assert!(s.contains("Win 61.0% | Tie 1.0% | Loss 38.0%"), "{s}");
    }

    #[test]
    fn json_output_carries_all_counts() {
        let mut out = Vec::new();
        let req = EquityRequest {
            json: true,
            ..request("AhKh")
        };
        handle_equity_command(req, &Config::default(), &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["wins"], 122);
        assert_eq!(v["ties"], 2);
        assert_eq!(v["losses"], 76);
        assert_eq!(v["total"], 200);
        assert_eq!(v["equity"], 0.62);
    }

    #[test]
    fn bad_hero_is_invalid_input() {
        let mut out = Vec::new();
        let err = handle_equity_command(request("Ah"), &Config::default(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn board_overlapping_hero_is_engine_error() {
        let mut out = Vec::new();
        let req = EquityRequest {
            board: Some("Ah 2c 3c".to_string()),
            ..request("AhKh")
        };
        let err = handle_equity_command(req, &Config::default(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Engine(_)), "{err}");
    }
}
