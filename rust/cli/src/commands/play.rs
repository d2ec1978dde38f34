//! # Play Command
//!
//! Deals one hand of Texas Hold'em from a seeded deck and walks the player
//! through it street by street.
//!
//! ## Flow
//!
//! 1. Shuffle a full deck, deal hero, every opponent, and the five board cards
//! 2. On each street show the visible board and hero's win-or-tie probability
//! 3. Ask `[C]all or [F]old?`; folding (or quitting, or EOF) ends the hand
//! 4. After the river, reveal opponent hole cards and settle the showdown
//!
//! Equity on every street is simulated against all cards hero cannot see,
//! so opponent hole cards and undealt board cards are treated alike.

use crate::error::CliError;
use crate::formatters::{format_cards, format_percent, format_strength};
use crate::io_utils::read_stdin_line;
use crate::validation::{Decision, parse_decision, validate_opponents};
use holdem_odds_engine::cards::{Card, build_deck};
use holdem_odds_engine::deck::Deck;
use holdem_odds_engine::equity::{BOARD_SIZE, Outcome, estimate_equity, showdown};
use holdem_odds_engine::hand::{HandStrength, rank_seven};
use holdem_odds_engine::lcg::Lcg;
use holdem_odds_engine::logger::{HandLogger, HandRecord, ShowdownInfo, Street, StreetEquity};
use std::io::{BufRead, Write};

/// Resolved settings for one interactive hand.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub opponents: u8,
    pub seed: u64,
    pub trials: u32,
    /// Where to write the finished hand as a JSON line
    pub log: Option<String>,
}

/// Handle the play command: one interactive hand.
///
/// # Returns
///
/// * `Ok(())` when the hand ends, by fold or by showdown
/// * `Err(CliError)` on invalid options, engine contract violations, or I/O errors
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    validate_opponents(opts.opponents).map_err(CliError::InvalidInput)?;
    let num_opponents = opts.opponents as usize;

    let mut rng = Lcg::new(opts.seed);
    let mut deck = Deck::full();
    deck.shuffle(&mut rng);
    let hero = deck.deal(2)?.to_vec();
    let mut holes = Vec::with_capacity(num_opponents);
    for _ in 0..num_opponents {
        holes.push(deck.deal(2)?.to_vec());
    }
    let board = deck.deal(BOARD_SIZE)?.to_vec();
    tracing::info!(seed = opts.seed, opponents = num_opponents, "hand dealt");

    let mut record = HandRecord {
        hand_id: String::new(),
        seed: Some(opts.seed),
        opponents: num_opponents,
        hero: hero.clone(),
        opponent_holes: Vec::new(),
        board: Vec::new(),
        equities: Vec::new(),
        folded_on: None,
        showdown: None,
        ts: None,
    };

    writeln!(out, "Welcome to Texas Hold'em!")?;
    writeln!(out, "Playing against {} opponent(s).", num_opponents)?;

    let unseen_pool = build_deck();
    for street in Street::all() {
        let visible = &board[..street.community_len()];
        let equity = estimate_equity(
            &hero,
            visible,
            num_opponents,
            &unseen_pool,
            opts.trials,
            &mut rng,
        )?;
        record.board = visible.to_vec();
        record.equities.push(StreetEquity { street, equity });
        tracing::debug!(street = street.name(), equity, "street equity");

        if street == Street::Preflop {
            writeln!(out, "\nYour hole cards:")?;
            writeln!(out, "{}", format_cards(&hero))?;
            writeln!(
                out,
                "Estimated probability of winning at showdown (pre-flop): {}",
                format_percent(equity)
            )?;
        } else {
            writeln!(out, "\n--- {} ---", street.name().to_uppercase())?;
            writeln!(out, "Community cards: {}", format_cards(visible))?;
            writeln!(out, "Win probability now: {}", format_percent(equity))?;
        }

        if !ask_to_continue(street, out, err, stdin)? {
            writeln!(out, "You folded. Game ends.")?;
            record.folded_on = Some(street);
            tracing::info!(street = street.name(), "hero folded");
            return finish(&opts, record);
        }
    }

    writeln!(out, "\n--- SHOWDOWN ---")?;
    let hero_strength = strength_with_board(&hero, &board)?;
    let mut seven = hero.clone();
    seven.extend_from_slice(&board);
    writeln!(out, "Your final 7 cards: {}", format_cards(&seven))?;
    writeln!(out, "Your hand: {}", format_strength(&hero_strength))?;

    let mut strengths = Vec::with_capacity(num_opponents);
    for (i, hole) in holes.iter().enumerate() {
        let hs = strength_with_board(hole, &board)?;
        writeln!(
            out,
            "Opponent #{} hole cards: {} ({})",
            i + 1,
            format_cards(hole),
            format_strength(&hs)
        )?;
        strengths.push(hs);
    }

    let beaten_by = strengths.iter().filter(|s| **s > hero_strength).count();
    let tied_with = strengths.iter().filter(|s| **s == hero_strength).count();
    let outcome = showdown(&hero_strength, &strengths);
    match outcome {
        Outcome::Win => writeln!(out, "You Win outright!")?,
        Outcome::Tie => writeln!(out, "You Tied with {} others!", tied_with)?,
        Outcome::Loss => writeln!(out, "You Lost. {} opponents have better hands.", beaten_by)?,
    }
    tracing::info!(?outcome, beaten_by, tied_with, "showdown settled");

    record.opponent_holes = holes;
    record.showdown = Some(ShowdownInfo {
        outcome,
        hero_strength,
        beaten_by,
        tied_with,
    });
    finish(&opts, record)
}

/// Prompts until the player calls (`true`) or folds/quits/closes input (`false`).
fn ask_to_continue(
    street: Street,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    loop {
        write!(out, "{} Action: [C]all or [F]old? ", street.name())?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(false);
        };
        match parse_decision(&line) {
            Decision::Call => return Ok(true),
            Decision::Fold | Decision::Quit => return Ok(false),
            Decision::Invalid(msg) => writeln!(err, "WARNING: {}", msg)?,
        }
    }
}

fn strength_with_board(hole: &[Card], board: &[Card]) -> Result<HandStrength, CliError> {
    let mut seven = hole.to_vec();
    seven.extend_from_slice(board);
    Ok(rank_seven(&seven)?)
}

fn finish(opts: &PlayOptions, mut record: HandRecord) -> Result<(), CliError> {
    let Some(path) = &opts.log else {
        return Ok(());
    };
    let mut logger = HandLogger::open(path)?;
    record.hand_id = logger.next_id();
    logger.append(&record)?;
    tracing::info!(path = %path, hand_id = %record.hand_id, "hand logged");
    Ok(())
}
