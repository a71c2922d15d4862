//! Infection, outbreaks and epidemics.
//!
//! ## Outbreaks
//!
//! A city that would receive a fourth cube of a color outbreaks instead.
//! Resolution is a breadth-first flood fill:
//!
//! - the origin is queued and marked visited
//! - each popped city bumps the outbreak counter and sends one cube to every
//!   neighbor that is not visited and not protected
//! - a neighbor that would overflow is marked visited and queued, and costs
//!   no cube; any other neighbor takes the cube from the supply
//!
//! A city outbreaks at most once per chain. Visited cities only grow and the
//! board is finite, so resolution always terminates.
//!
//! The public entry points refuse to run once the game is over, like every
//! other command. The outcome is re-evaluated after each call.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::Game;
use crate::board::CityId;
use crate::cards::{intensify, Card};
use crate::core::{ActionError, GameLog, RandomSource};
use crate::disease::Color;

/// What an `infect` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfectionOutcome {
    /// Cubes were placed.
    Placed(u8),
    /// A quarantine or a Medic kept the cubes out.
    Protected,
    /// The color is eradicated.
    Eradicated,
    /// The city overflowed; the chain caused this many outbreaks.
    Outbreak(u32),
    /// No such city.
    UnknownCity,
}

impl<R: RandomSource> Game<R> {
    /// Place `count` cubes of `color` in `city`, resolving any outbreak.
    pub fn infect(
        &mut self,
        city: CityId,
        color: Color,
        count: u8,
        log: &mut GameLog,
    ) -> Result<InfectionOutcome, ActionError> {
        self.refuse_if_over(log)?;
        let outcome = self.infect_city(city, color, count, log);
        self.evaluate_outcome(log);
        Ok(outcome)
    }

    /// Resolve an outbreak of `color` starting at `origin`.
    ///
    /// Returns the number of cities that outbroke.
    pub fn start_outbreak(&mut self, origin: CityId, color: Color, log: &mut GameLog) -> Result<u32, ActionError> {
        self.refuse_if_over(log)?;
        let outbreaks = self.spread(origin, color, log);
        self.evaluate_outcome(log);
        Ok(outbreaks)
    }

    /// Resolve an epidemic: escalate, infect the bottom card's city with three
    /// cubes, then shuffle the infection discard pile back on top.
    pub fn resolve_epidemic_card(&mut self, log: &mut GameLog) -> Result<(), ActionError> {
        self.refuse_if_over(log)?;
        self.epidemic(log);
        Ok(())
    }

    pub(super) fn epidemic(&mut self, log: &mut GameLog) {
        self.infection_rate_index += 1;
        log.push(format!(
            "Epidemic! Infection rate marker moved to {} ({} cards per turn)",
            self.infection_rate_index,
            self.infection_rate()
        ));

        if let Some(card) = self.decks.infection_deck.draw_bottom() {
            if let Some(city) = card.city() {
                let color = self.board.city(city).map(|c| c.color);
                if let Some(color) = color {
                    self.infect_city(city, color, 3, log);
                }
            }
            self.decks.infection_discard.push_bottom(card);
        }

        intensify(
            &mut self.decks.infection_deck,
            &mut self.decks.infection_discard,
            &mut self.rng,
        );
        self.evaluate_outcome(log);
    }

    /// Check if `color` cannot be placed in `city` right now.
    pub(super) fn is_protected(&self, city: CityId, color: Color) -> bool {
        let quarantined = self.board.city(city).is_some_and(|c| c.is_protected);
        let medic_guard = self.diseases.is_cured(color)
            && self
                .players
                .values()
                .any(|p| p.abilities.blocks_cured_placement && p.location == city);
        quarantined || medic_guard
    }

    pub(super) fn infect_city(&mut self, city: CityId, color: Color, count: u8, log: &mut GameLog) -> InfectionOutcome {
        if self.board.city(city).is_none() {
            log::warn!("infect called with unknown city {city}");
            return InfectionOutcome::UnknownCity;
        }
        let name = self.city_name(city);
        if self.is_protected(city, color) {
            log.push(format!("{name} was protected"));
            return InfectionOutcome::Protected;
        }
        if self.diseases.is_eradicated(color) {
            log.push(format!("{color} is eradicated, no cubes placed in {name}"));
            return InfectionOutcome::Eradicated;
        }

        let overflow = self
            .board
            .city_mut(city)
            .is_some_and(|c| c.add_diseases(count, color));
        if overflow {
            InfectionOutcome::Outbreak(self.spread(city, color, log))
        } else {
            self.diseases.take(color, count);
            log.push(format!(
                "Added {count} {color} {} in {name}",
                if count == 1 { "cube" } else { "cubes" }
            ));
            InfectionOutcome::Placed(count)
        }
    }

    fn spread(&mut self, origin: CityId, color: Color, log: &mut GameLog) -> u32 {
        let mut queue = VecDeque::from([origin]);
        let mut visited = FxHashSet::default();
        visited.insert(origin);
        let mut outbreaks = 0;

        while let Some(city) = queue.pop_front() {
            self.outbreak_counter += 1;
            outbreaks += 1;
            log.push(format!(
                "Outbreak of {color} in {} (outbreaks: {})",
                self.board.name(city),
                self.outbreak_counter
            ));

            let neighbors: Vec<CityId> = self.board.neighbors(city).to_vec();
            for neighbor in neighbors {
                if visited.contains(&neighbor) {
                    continue;
                }
                if self.is_protected(neighbor, color) || self.diseases.is_eradicated(color) {
                    log.push(format!("{} was protected", self.board.name(neighbor)));
                    continue;
                }
                let overflow = self
                    .board
                    .city_mut(neighbor)
                    .is_some_and(|c| c.add_diseases(1, color));
                if overflow {
                    visited.insert(neighbor);
                    queue.push_back(neighbor);
                } else {
                    self.diseases.take(color, 1);
                    log.push(format!("Outbreak spread 1 {color} cube to {}", self.board.name(neighbor)));
                }
            }
        }

        log::debug!("outbreak chain from {origin} caused {outbreaks} outbreaks");
        outbreaks
    }

    /// Draw infection cards for the infect phase and place one cube each.
    pub(super) fn infect_from_deck(&mut self, cards: usize, log: &mut GameLog) {
        let drawn = self.decks.infection_deck.draw_top(cards);
        for &card in &drawn {
            self.decks.infection_discard.push_bottom(card);
        }
        for card in drawn {
            let Card::Infection(city) = card else { continue };
            let Some(color) = self.board.city(city).map(|c| c.color) else {
                continue;
            };
            self.infect_city(city, color, 1, log);
            if self.evaluate_outcome(log).is_some() {
                break;
            }
        }
    }
}
