//! Event cards.
//!
//! Events cost no action and may be played by any holder at any time before
//! the game ends, including while a discard is pending. A card played from
//! the hand goes to the player discard pile; one played from the Contingency
//! Planner's slot is removed from the game.

use super::Game;
use crate::board::CityId;
use crate::cards::Card;
use crate::core::{ActionError, EventPlay, GameLog, PlayerId, RandomSource};

/// Infection cards revealed by Forecast.
pub(super) const FORECAST_DEPTH: usize = 6;

impl<R: RandomSource> Game<R> {
    pub(super) fn check_event(&self, holder: PlayerId, play: &EventPlay) -> Result<(), ActionError> {
        let player = self.player_ref(holder)?;
        let kind = play.kind();
        if !player.holds_event(kind) {
            return Err(ActionError::MissingCard { card: Card::Event(kind) });
        }

        match play {
            EventPlay::OneQuietNight => Ok(()),
            EventPlay::ResilientPopulation { city } => {
                let card = Card::Infection(*city);
                if self.decks.infection_discard.contains(card) {
                    Ok(())
                } else {
                    Err(ActionError::MissingCard { card })
                }
            }
            EventPlay::Airlift { player, city } => {
                let target = self.player_ref(*player)?;
                if self.board.city(*city).is_none() {
                    return Err(ActionError::UnknownCity(*city));
                }
                if target.location == *city {
                    return Err(ActionError::SameCity(self.city_name(*city)));
                }
                Ok(())
            }
            EventPlay::Forecast { order } => {
                let mut top = self.forecast_peek();
                let mut proposed = order.to_vec();
                top.sort_unstable();
                proposed.sort_unstable();
                if top == proposed {
                    Ok(())
                } else {
                    Err(ActionError::InvalidForecast(top.len()))
                }
            }
            EventPlay::GovernmentGrant { city, relocate_from } => self.check_station_site(*city, *relocate_from),
        }
    }

    pub(super) fn perform_event(&mut self, holder: PlayerId, play: &EventPlay, log: &mut GameLog) {
        let kind = play.kind();
        let card = Card::Event(kind);
        if self.players[holder].remove_card(card) {
            self.decks.player_discard.push_bottom(card);
        } else if self.players[holder].additional_card == Some(kind) {
            self.players[holder].additional_card = None;
            self.decks.removed.push_bottom(card);
        }
        log.push(format!("{} played {kind}", self.players[holder]));

        match play {
            EventPlay::OneQuietNight => {
                self.skip_next_infection_step = true;
            }
            EventPlay::ResilientPopulation { city } => {
                let infection = Card::Infection(*city);
                if self.decks.infection_discard.remove(infection) {
                    self.decks.removed.push_bottom(infection);
                    log.push(format!("{} was removed from the game", self.board.name(*city)));
                }
            }
            EventPlay::Airlift { player, city } => {
                log.push(format!("{} was airlifted to {}", self.players[*player], self.board.name(*city)));
                self.relocate(*player, *city, log);
            }
            EventPlay::Forecast { order } => {
                let taken = self.decks.infection_deck.draw_top(order.len());
                debug_assert_eq!(taken.len(), order.len());
                self.decks
                    .infection_deck
                    .prepend(order.iter().map(|&id| Card::Infection(id)));
                let names: Vec<&str> = order.iter().map(|&id| self.board.name(id)).collect();
                log.push(format!("Forecast order (top first): {}", names.join(", ")));
            }
            EventPlay::GovernmentGrant { city, relocate_from } => {
                self.place_station(*city, *relocate_from, log);
            }
        }
    }

    /// Forecast orders offered to drivers: as drawn, and reversed.
    pub(super) fn forecast_orders(&self) -> Vec<Vec<CityId>> {
        let top = self.forecast_peek();
        let mut reversed = top.clone();
        reversed.reverse();
        if reversed == top {
            vec![top]
        } else {
            vec![top, reversed]
        }
    }
}
