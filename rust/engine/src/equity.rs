//! Monte Carlo equity estimation.
//!
//! Each trial copies the remaining deck, shuffles it with the shared [`Lcg`],
//! completes the board from the front, deals every opponent two cards and
//! compares best-of-seven strengths. Only the generator state carries over
//! from one trial to the next, so a run is reproducible from its seed.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{ensure_unique, exclude, Card};
use crate::errors::EngineError;
use crate::hand::{best_of_seven, HandStrength};
use crate::lcg::Lcg;

/// Trial count used for in-game equity queries.
pub const DEFAULT_TRIALS: u32 = 3000;

pub const BOARD_SIZE: usize = 5;

/// Hero's result against the whole table at showdown.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Hero strictly beats every opponent
    Win,
    /// Nobody beats hero, at least one opponent matches exactly
    Tie,
    /// At least one opponent is strictly stronger
    Loss,
}

pub fn showdown(hero: &HandStrength, opponents: &[HandStrength]) -> Outcome {
    if opponents.iter().any(|o| o > hero) {
        Outcome::Loss
    } else if opponents.iter().any(|o| o == hero) {
        Outcome::Tie
    } else {
        Outcome::Win
    }
}

/// Aggregated trial outcomes. `wins` and `ties` are disjoint.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub wins: u64,
    pub ties: u64,
    pub total: u64,
}

impl SimulationResult {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => {}
        }
        self.total += 1;
    }

    pub fn losses(&self) -> u64 {
        self.total - self.wins - self.ties
    }

    /// Win-or-tie equity: the share of trials in which hero is not beaten.
    pub fn probability(&self) -> f64 {
        self.ratio(self.wins + self.ties)
    }

    pub fn win_rate(&self) -> f64 {
        self.ratio(self.wins)
    }

    pub fn tie_rate(&self) -> f64 {
        self.ratio(self.ties)
    }

    pub fn loss_rate(&self) -> f64 {
        self.ratio(self.losses())
    }

    pub fn merge(self, other: SimulationResult) -> SimulationResult {
        SimulationResult {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            total: self.total + other.total,
        }
    }

    fn ratio(&self, count: u64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }
}

/// Validated inputs shared by every trial of a run.
#[derive(Debug)]
struct TrialSetup {
    hero: [Card; 2],
    board: [Card; BOARD_SIZE],
    known: usize,
    opponents: usize,
    base: Vec<Card>,
}

impl TrialSetup {
    fn new(
        hero: &[Card],
        known_community: &[Card],
        opponents: usize,
        deck: &[Card],
        trials: u32,
    ) -> Result<Self, EngineError> {
        let hero: [Card; 2] = hero.try_into().map_err(|_| EngineError::WrongCardCount {
            expected: 2,
            actual: hero.len(),
        })?;
        let known = known_community.len();
        if known > BOARD_SIZE {
            return Err(EngineError::TooManyCommunityCards(known));
        }
        if trials == 0 {
            return Err(EngineError::InvalidTrials);
        }

        let mut used = hero.to_vec();
        used.extend_from_slice(known_community);
        ensure_unique(&used)?;
        ensure_unique(deck)?;

        // no-op when the caller already removed the known cards
        let base = exclude(deck, &used);
        let needed = 2usize
            .checked_mul(opponents)
            .and_then(|n| n.checked_add(BOARD_SIZE - known))
            .unwrap_or(usize::MAX);
        if base.len() < needed {
            return Err(EngineError::InsufficientDeck {
                needed,
                available: base.len(),
            });
        }

        let mut board = [hero[0]; BOARD_SIZE];
        board[..known].copy_from_slice(known_community);
        Ok(Self {
            hero,
            board,
            known,
            opponents,
            base,
        })
    }

    fn run(&self, trials: u64, rng: &mut Lcg) -> SimulationResult {
        let mut result = SimulationResult::default();
        let mut scratch = self.base.clone();
        let mut strengths = Vec::with_capacity(self.opponents);

        for _ in 0..trials {
            scratch.copy_from_slice(&self.base);
            rng.shuffle(&mut scratch);

            let mut cursor = 0;
            let mut board = self.board;
            for slot in board[self.known..].iter_mut() {
                *slot = scratch[cursor];
                cursor += 1;
            }

            strengths.clear();
            for _ in 0..self.opponents {
                let hole = [scratch[cursor], scratch[cursor + 1]];
                cursor += 2;
                strengths.push(best_of_seven(&seven(hole, &board)));
            }
            let hero = best_of_seven(&seven(self.hero, &board));
            result.record(showdown(&hero, &strengths));
        }
        result
    }
}

fn seven(hole: [Card; 2], board: &[Card; BOARD_SIZE]) -> [Card; 7] {
    [
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ]
}

/// Runs `trials` independent board completions against `num_opponents`
/// random hands.
///
/// `deck` is the pool unknown cards are drawn from; hero and community cards
/// are removed from it once before the first trial if still present.
///
/// # Errors
///
/// Returns an [`EngineError`] when hero does not hold exactly two cards, more
/// than five community cards are known, `trials` is zero, any card repeats,
/// or the deck cannot supply `(5 - community) + 2 * num_opponents` cards.
///
/// # Example
///
/// ```
/// use holdem_odds_engine::cards::{build_deck, parse_cards};
/// use holdem_odds_engine::equity::simulate;
/// use holdem_odds_engine::lcg::Lcg;
///
/// let hero = parse_cards("AhKh").unwrap();
/// let mut rng = Lcg::default();
/// let result = simulate(&hero, &[], 1, &build_deck(), 200, &mut rng).unwrap();
/// assert_eq!(result.total, 200);
/// assert!(result.probability() > 0.5);
/// ```
pub fn simulate(
    hero: &[Card],
    known_community: &[Card],
    num_opponents: usize,
    deck: &[Card],
    trials: u32,
    rng: &mut Lcg,
) -> Result<SimulationResult, EngineError> {
    let setup = TrialSetup::new(hero, known_community, num_opponents, deck, trials)?;
    debug!(
        trials,
        opponents = num_opponents,
        community = known_community.len(),
        "starting equity simulation"
    );
    let result = setup.run(trials as u64, rng);
    debug!(
        wins = result.wins,
        ties = result.ties,
        total = result.total,
        "equity simulation finished"
    );
    Ok(result)
}

/// Win-or-tie probability of hero; see [`simulate`].
pub fn estimate_equity(
    hero: &[Card],
    known_community: &[Card],
    num_opponents: usize,
    deck: &[Card],
    trials: u32,
    rng: &mut Lcg,
) -> Result<f64, EngineError> {
    simulate(hero, known_community, num_opponents, deck, trials, rng).map(|r| r.probability())
}

/// Parallel variant of [`simulate`].
///
/// Every worker owns an [`Lcg`] seeded from `rng` (one draw per worker, in
/// worker order) and runs an even share of the trials; the first
/// `trials % workers` workers run one extra. The merged result depends only
/// on the seed and `workers`, never on thread scheduling.
pub fn simulate_parallel(
    hero: &[Card],
    known_community: &[Card],
    num_opponents: usize,
    deck: &[Card],
    trials: u32,
    workers: usize,
    rng: &mut Lcg,
) -> Result<SimulationResult, EngineError> {
    if workers == 0 {
        return Err(EngineError::InvalidWorkers);
    }
    let setup = TrialSetup::new(hero, known_community, num_opponents, deck, trials)?;

    let trials = trials as u64;
    let share = trials / workers as u64;
    let extra = trials % workers as u64;
    let jobs: Vec<(u64, u64)> = (0..workers as u64)
        .map(|w| (rng.derive_seed(), share + u64::from(w < extra)))
        .collect();
    debug!(trials, workers, opponents = num_opponents, "starting parallel equity simulation");

    let result = jobs
        .into_par_iter()
        .map(|(seed, count)| setup.run(count, &mut Lcg::new(seed)))
        .reduce(SimulationResult::default, SimulationResult::merge);
    debug!(
        wins = result.wins,
        ties = result.ties,
        total = result.total,
        "parallel equity simulation finished"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_deck, parse_cards};
    use crate::hand::Category;

    fn strength(category: Category, tiebreaks: [u8; 5]) -> HandStrength {
        HandStrength {
            category,
            tiebreaks,
        }
    }

    #[test]
    fn showdown_classifies_against_every_opponent() {
        let pair = strength(Category::OnePair, [9, 14, 7, 3, 0]);
        let weaker = strength(Category::OnePair, [9, 14, 7, 2, 0]);
        let stronger = strength(Category::TwoPair, [3, 2, 14, 0, 0]);

        assert_eq!(showdown(&pair, &[weaker]), Outcome::Win);
        assert_eq!(showdown(&pair, &[weaker, pair]), Outcome::Tie);
        assert_eq!(showdown(&pair, &[pair, stronger]), Outcome::Loss);
        assert_eq!(showdown(&pair, &[]), Outcome::Win);
    }

    #[test]
    fn result_rates_partition_trials() {
        let mut r = SimulationResult::default();
        for o in [Outcome::Win, Outcome::Win, Outcome::Tie, Outcome::Loss] {
            r.record(o);
        }
        assert_eq!(r.losses(), 1);
        assert_eq!(r.probability(), 0.75);
        assert_eq!(r.win_rate() + r.tie_rate() + r.loss_rate(), 1.0);
        assert_eq!(SimulationResult::default().probability(), 0.0);
    }

    #[test]
    fn setup_removes_known_cards_once() {
        let hero = parse_cards("AhKh").unwrap();
        let board = parse_cards("QhJhTh").unwrap();
        let setup = TrialSetup::new(&hero, &board, 2, &build_deck(), 1).unwrap();
        assert_eq!(setup.base.len(), 47);
        assert_eq!(setup.known, 3);
        assert_eq!(&setup.board[..3], board.as_slice());
    }
}
