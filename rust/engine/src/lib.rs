//! # holdem-odds-engine: Hold'em Hand Ranking and Equity Core
//!
//! Deterministic Texas Hold'em hand evaluation and Monte Carlo win
//! probability estimation. Every random choice flows from an explicit
//! [`lcg::Lcg`] handle, so a given seed always reproduces the same numbers.
//!
//! ## Core Modules
//!
//! - [`lcg`] - Linear congruential sequence generator and Fisher–Yates shuffle
//! - [`cards`] - Card representation (Suit, Rank, Card), deck construction and exclusion
//! - [`deck`] - Cursor-based dealing deck
//! - [`hand`] - Five-card ranking and best-five-of-seven selection
//! - [`equity`] - Monte Carlo equity simulation (sequential and parallel)
//! - [`logger`] - Hand records serialized as JSON lines
//! - [`errors`] - Error types for contract violations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_odds_engine::cards::parse_cards;
//! use holdem_odds_engine::hand::{rank_seven, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3c").unwrap();
//! let strength = rank_seven(&cards).unwrap();
//! assert_eq!(strength.category, Category::StraightFlush);
//! assert_eq!(strength.tiebreaks[0], 14);
//! ```
//!
//! ## Deterministic Equity
//!
//! ```rust
//! use holdem_odds_engine::cards::{build_deck, parse_cards};
//! use holdem_odds_engine::equity::estimate_equity;
//! use holdem_odds_engine::lcg::Lcg;
//!
//! let hero = parse_cards("AhKh").unwrap();
//! let a = estimate_equity(&hero, &[], 2, &build_deck(), 300, &mut Lcg::new(42)).unwrap();
//! let b = estimate_equity(&hero, &[], 2, &build_deck(), 300, &mut Lcg::new(42)).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod equity;
pub mod errors;
pub mod hand;
pub mod lcg;
pub mod logger;
