//! Player deck construction and epidemic seeding.
//!
//! The player deck holds one city card per city plus the event cards. After
//! the starting hands are dealt, epidemic cards are seeded so that they are
//! spread evenly:
//!
//! 1. Split the remaining `n` cards into `E` intervals of width `w = n / E`
//!    (the last interval also takes the remainder).
//! 2. Pick one uniformly random index inside each interval.
//! 3. Insert an epidemic card directly after each picked card.
//!
//! In the finished deck every run of `w + 1` cards (the last one running to
//! the end) therefore holds exactly one epidemic.

use super::card::{Card, EventKind};
use crate::board::Board;
use crate::core::RandomSource;

/// One city card per city, in map order.
#[must_use]
pub fn city_cards(board: &Board) -> Vec<Card> {
    board.ids().map(Card::City).collect()
}

/// One card per event.
#[must_use]
pub fn event_cards() -> Vec<Card> {
    EventKind::ALL.into_iter().map(Card::Event).collect()
}

/// Width of each epidemic interval for a deck of `len` cards.
#[must_use]
pub fn interval_width(len: usize, epidemics: usize) -> usize {
    if epidemics == 0 {
        return len;
    }
    (len / epidemics).max(1)
}

/// Insert `epidemics` epidemic cards into `cards`, one per interval.
///
/// Intervals that fall past the end of a very short deck put their epidemic
/// at the bottom.
pub fn seed_epidemics<R: RandomSource>(cards: Vec<Card>, epidemics: usize, rng: &mut R) -> Vec<Card> {
    let len = cards.len();
    let width = interval_width(len, epidemics);

    let mut after = vec![0usize; len];
    let mut at_bottom = 0usize;
    for k in 0..epidemics {
        let start = k * width;
        if start >= len {
            at_bottom += 1;
            continue;
        }
        let end = if k + 1 == epidemics { len } else { ((k + 1) * width).min(len) };
        let pick = start + rng.gen_index(end - start);
        after[pick] += 1;
    }

    let mut seeded = Vec::with_capacity(len + epidemics);
    for (card, count) in cards.into_iter().zip(after) {
        seeded.push(card);
        seeded.extend(std::iter::repeat(Card::Epidemic).take(count));
    }
    seeded.extend(std::iter::repeat(Card::Epidemic).take(at_bottom));

    log::debug!("seeded {epidemics} epidemics into {len} cards (interval width {width})");
    seeded
}

/// Positions of epidemic cards in `cards`.
#[must_use]
pub fn epidemic_positions(cards: &[Card]) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == Card::Epidemic)
        .map(|(i, _)| i)
        .collect()
}
