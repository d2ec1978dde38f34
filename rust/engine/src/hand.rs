use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{ensure_unique, Card};
use crate::errors::EngineError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Category> {
        const ALL: [Category; 9] = [
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
        ];
        ALL.iter().copied().find(|c| c.value() == v)
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Totally ordered strength of a five-card hand.
///
/// `tiebreaks` holds rank values in descending significance; slots a category
/// does not use are 0, which sorts below every real rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub tiebreaks: [u8; 5],
}

impl HandStrength {
    fn with_leading(category: Category, leading: &[u8], ranks_desc: &[u8; 5]) -> Self {
        let mut tiebreaks = [0u8; 5];
        tiebreaks[..leading.len()].copy_from_slice(leading);
        let kickers = ranks_desc.iter().filter(|r| !leading.contains(r));
        for (slot, &r) in tiebreaks[leading.len()..].iter_mut().zip(kickers) {
            *slot = r;
        }
        Self {
            category,
            tiebreaks,
        }
    }

    /// Tiebreak ranks actually used by the category.
    pub fn ranks(&self) -> &[u8] {
        let used = self.tiebreaks.iter().take_while(|&&r| r != 0).count();
        &self.tiebreaks[..used]
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreaks.cmp(&b.tiebreaks),
        ord => ord,
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ranks exactly five distinct cards.
pub fn rank_five(cards: &[Card]) -> Result<HandStrength, EngineError> {
    let five: &[Card; 5] = cards.try_into().map_err(|_| EngineError::WrongCardCount {
        expected: 5,
        actual: cards.len(),
    })?;
    ensure_unique(five)?;
    Ok(rank_five_cards(five))
}

/// Best five-card strength among exactly seven distinct cards.
pub fn rank_seven(cards: &[Card]) -> Result<HandStrength, EngineError> {
    let seven: &[Card; 7] = cards.try_into().map_err(|_| EngineError::WrongCardCount {
        expected: 7,
        actual: cards.len(),
    })?;
    ensure_unique(seven)?;
    Ok(best_of_seven(seven))
}

/// Maximum of [`rank_five_cards`] over all 21 five-card subsets.
/// The caller guarantees the cards are distinct.
pub fn best_of_seven(cards: &[Card; 7]) -> HandStrength {
    let n = cards.len();
    let mut best = rank_five_cards(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    for i in 0..n - 4 {
        for j in i + 1..n - 3 {
            for k in j + 1..n - 2 {
                for l in k + 1..n - 1 {
                    for m in l + 1..n {
                        let hs =
                            rank_five_cards(&[cards[i], cards[j], cards[k], cards[l], cards[m]]);
                        if hs > best {
                            best = hs;
                        }
                    }
                }
            }
        }
    }
    best
}

/// Unchecked five-card ranking; the caller guarantees the cards are distinct.
pub fn rank_five_cards(cards: &[Card; 5]) -> HandStrength {
    let mut ranks = [0u8; 5];
    for (slot, c) in ranks.iter_mut().zip(cards) {
        *slot = c.rank.value();
    }
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&ranks);
    let (groups, len) = rank_groups(&ranks);
    let groups = &groups[..len];

    if let (true, Some(high)) = (flush, straight) {
        return HandStrength::with_leading(Category::StraightFlush, &[high], &[0; 5]);
    }

    let top = groups[0];
    let second = groups.get(1).map_or(0, |g| g.count);
    if top.count == 4 {
        return HandStrength::with_leading(Category::FourOfAKind, &[top.rank], &ranks);
    }
    if top.count == 3 && second == 2 {
        return HandStrength::with_leading(Category::FullHouse, &[top.rank, groups[1].rank], &ranks);
    }
    if flush {
        return HandStrength::with_leading(Category::Flush, &[], &ranks);
    }
    if let Some(high) = straight {
        return HandStrength::with_leading(Category::Straight, &[high], &[0; 5]);
    }
    if top.count == 3 {
        return HandStrength::with_leading(Category::ThreeOfAKind, &[top.rank], &ranks);
    }
    if top.count == 2 && second == 2 {
        // higher pair first whatever the group order
        let high = top.rank.max(groups[1].rank);
        let low = top.rank.min(groups[1].rank);
        return HandStrength::with_leading(Category::TwoPair, &[high, low], &ranks);
    }
    if top.count == 2 {
        return HandStrength::with_leading(Category::OnePair, &[top.rank], &ranks);
    }
    HandStrength::with_leading(Category::HighCard, &[], &ranks)
}

#[derive(Debug, Copy, Clone, Default)]
struct Group {
    count: u8,
    rank: u8,
}

/// Rank multiplicities sorted by (count desc, rank desc).
fn rank_groups(ranks: &[u8; 5]) -> ([Group; 5], usize) {
    let mut counts = [0u8; 15];
    for &r in ranks {
        counts[r as usize] += 1;
    }
    let mut groups = [Group::default(); 5];
    let mut len = 0;
    for r in (2..=14u8).rev() {
        let count = counts[r as usize];
        if count > 0 {
            groups[len] = Group { count, rank: r };
            len += 1;
        }
    }
    groups[..len].sort_by(|a, b| b.count.cmp(&a.count).then(b.rank.cmp(&a.rank)));
    (groups, len)
}

/// Top rank of a straight among descending ranks, with A-2-3-4-5 as 5-high.
fn straight_high(ranks_desc: &[u8; 5]) -> Option<u8> {
    let mut distinct = [0u8; 5];
    let mut n = 0;
    for &r in ranks_desc {
        if n == 0 || distinct[n - 1] != r {
            distinct[n] = r;
            n += 1;
        }
    }
    if n < 5 {
        return None;
    }
    // first window is the highest-starting one
    if let Some(w) = distinct[..n].windows(5).find(|w| w[0] - w[4] == 4) {
        return Some(w[0]);
    }
    let wheel = [14, 5, 4, 3, 2];
    wheel
        .iter()
        .all(|r| distinct[..n].contains(r))
        .then_some(5)
}
