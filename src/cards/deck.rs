//! Ordered card piles.
//!
//! A `Deck` is used for draw piles and discard piles alike. The front is the
//! top: `draw_top` takes from the front, `prepend` puts cards back
//! on top, `draw_bottom` takes from the back.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::RandomSource;

/// An ordered pile of cards, top first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck whose top is `cards[0]`.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Uniform random permutation of the deck.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return up to `n` cards from the top, top first.
    ///
    /// Clamps to the cards available; callers compare the result length with
    /// `n` to detect a shortfall.
    pub fn draw_top(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Remove and return the bottom card.
    pub fn draw_bottom(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Put `cards` on top, keeping their order (`cards[0]` becomes the top).
    pub fn prepend(&mut self, cards: impl IntoIterator<Item = Card>) {
        let mut front: VecDeque<Card> = cards.into_iter().collect();
        front.append(&mut self.cards);
        self.cards = front;
    }

    /// Put one card at the bottom (used for discard piles).
    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Look at the top `n` cards without removing them.
    pub fn peek_top(&self, n: usize) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().take(n).copied()
    }

    /// Check if `card` is in the deck.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove the first copy of `card`. Returns whether it was present.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Take every card out, top first.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    /// Iterate top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}
