use crate::cards::{build_deck, ensure_unique, exclude, Card};
use crate::errors::EngineError;
use crate::lcg::Lcg;

/// An ordered set of unique cards dealt from the front through a cursor.
///
/// Dealing never reallocates; it only advances `position`.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::full()
    }
}

impl Deck {
    /// Full 52-card deck in canonical order; call [`Deck::shuffle`] before dealing.
    pub fn full() -> Self {
        Self {
            cards: build_deck(),
            position: 0,
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Result<Self, EngineError> {
        ensure_unique(&cards)?;
        Ok(Self { cards, position: 0 })
    }

    /// Shuffles every card (dealt or not) and rewinds the cursor.
    pub fn shuffle(&mut self, rng: &mut Lcg) {
        rng.shuffle(&mut self.cards);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn deal(&mut self, n: usize) -> Result<&[Card], EngineError> {
        if n > self.remaining() {
            return Err(EngineError::InsufficientDeck {
                needed: n,
                available: self.remaining(),
            });
        }
        let start = self.position;
        self.position += n;
        Ok(&self.cards[start..self.position])
    }

    /// Returns every dealt card to the deck without reordering.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Cards not yet dealt, in dealing order.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    /// A fresh, undealt deck of the remaining cards minus `cards`.
    pub fn without(&self, cards: &[Card]) -> Deck {
        Deck {
            cards: exclude(self.remaining_cards(), cards),
            position: 0,
        }
    }
}
