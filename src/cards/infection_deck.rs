//! Infection deck construction and the epidemic "intensify" step.

use super::card::Card;
use super::deck::Deck;
use crate::board::Board;
use crate::core::RandomSource;

/// One infection card per city, in map order.
#[must_use]
pub fn infection_cards(board: &Board) -> Vec<Card> {
    board.ids().map(Card::Infection).collect()
}

/// Shuffle `discard` and put it on top of `deck`, leaving `discard` empty.
pub fn intensify<R: RandomSource>(deck: &mut Deck, discard: &mut Deck, rng: &mut R) {
    discard.shuffle(rng);
    let returned = discard.take_all();
    log::debug!("returning {} infection cards to the top of the deck", returned.len());
    deck.prepend(returned);
}
