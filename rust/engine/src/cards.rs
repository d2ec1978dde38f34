use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no ranking; the discriminant is only an index (0..=3).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts (index 0)
    Hearts,
    /// Diamonds (index 1)
    Diamonds,
    /// Clubs (index 2)
    Clubs,
    /// Spades (index 3)
    Spades,
}

impl Suit {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Suit> {
        all_suits().get(i).copied()
    }

    pub fn glyph(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'H' | '♥' => Some(Suit::Hearts),
            'D' | '♦' => Some(Suit::Diamonds),
            'C' | '♣' => Some(Suit::Clubs),
            'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the numeric rank used by hand evaluation (2..=14).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            2..=14 => Some(all_ranks()[(v - 2) as usize]),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn glyph(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            low => char::from(b'0' + low.value()),
        }
    }

    fn from_char(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            d @ '2'..='9' => Rank::from_u8(d as u8 - b'0'),
            _ => None,
        }
    }
}

/// Represents a single playing card with a rank and suit.
/// Equality is by value; the ordering (rank first) is only used for sorting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.glyph(), self.suit.glyph())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parses "Ah", "td", "10S" or "K♠" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidCard(s.to_string());
        let text = s.trim();
        let suit_char = text.chars().last().ok_or_else(invalid)?;
        let rank_text = &text[..text.len() - suit_char.len_utf8()];
        let rank = match rank_text {
            "10" => Rank::Ten,
            _ => {
                let mut chars = rank_text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Rank::from_char(c).ok_or_else(invalid)?,
                    _ => return Err(invalid()),
                }
            }
        };
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All 52 cards in canonical rank-major order (2H 2D 2C 2S 3H ... AS).
pub fn build_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

/// Every card of `deck` not in `cards`, in `deck` order. Cards of `cards`
/// that are absent from `deck` are ignored.
pub fn exclude(deck: &[Card], cards: &[Card]) -> Vec<Card> {
    let removed: HashSet<Card> = cards.iter().copied().collect();
    deck.iter().copied().filter(|c| !removed.contains(c)).collect()
}

/// Fails on the first card that appears twice.
pub fn ensure_unique(cards: &[Card]) -> Result<(), EngineError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for &c in cards {
        if !seen.insert(c) {
            return Err(EngineError::DuplicateCard(c));
        }
    }
    Ok(())
}

/// Parses a card list such as "AhKh", "Ah Kh" or "ah,10h".
pub fn parse_cards(text: &str) -> Result<Vec<Card>, EngineError> {
    let mut cards = Vec::new();
    for token in text.split(|c: char| c.is_whitespace() || c == ',') {
        let chars: Vec<char> = token.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let rank_len = if chars[i] == '1' && chars.get(i + 1) == Some(&'0') {
                2
            } else {
                1
            };
            let end = i + rank_len + 1;
            if end > chars.len() {
                return Err(EngineError::InvalidCard(chars[i..].iter().collect()));
            }
            let piece: String = chars[i..end].iter().collect();
            cards.push(piece.parse()?);
            i = end;
        }
    }
    Ok(cards)
}
