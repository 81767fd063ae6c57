//! Deck construction and the undealt pile.
//!
//! `build_deck` is the pure enumeration of all 81 cards. `Deck` is the
//! ordered pile of cards not yet dealt; its front is the next card out.
//! Shuffling is always an explicit call with a caller-supplied `GameRng`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, DECK_SIZE};
use crate::core::rng::GameRng;
use crate::error::{Result, SetError};

/// Every card exactly once, in ascending `CardId` order.
///
/// ```
/// use set_engine::cards::build_deck;
///
/// let deck = build_deck();
/// assert_eq!(deck.len(), 81);
/// assert_eq!(deck[0].to_string(), "1 solid red oval");
/// ```
#[must_use]
pub fn build_deck() -> [Card; DECK_SIZE] {
    std::array::from_fn(|i| CardId(i as u8).card())
}

/// Ordered pile of undealt cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<CardId>,
}

impl Deck {
    /// All 81 cards in enumeration order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: CardId::all().collect(),
        }
    }

    /// All 81 cards, shuffled with `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// All 81 cards with `top` dealt first, in the given order, and the
    /// rest following in enumeration order.
    ///
    /// Fails if `top` names a card twice.
    pub fn stacked(top: &[CardId]) -> Result<Self> {
        let mut placed = [false; DECK_SIZE];
        for &id in top {
            if std::mem::replace(&mut placed[id.index()], true) {
                return Err(SetError::DuplicateCard(id));
            }
        }

        let mut cards: VecDeque<CardId> = top.iter().copied().collect();
        cards.extend(CardId::all().filter(|id| !placed[id.index()]));
        Ok(Self { cards })
    }

    /// A pile holding exactly `cards`, front first. The caller is
    /// responsible for the partition.
    pub(crate) fn from_ids(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffle the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return the next card.
    pub fn draw(&mut self) -> Option<CardId> {
        self.cards.pop_front()
    }

    /// Next card, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<CardId> {
        self.cards.front().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in dealing order.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
