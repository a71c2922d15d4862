//! Player actions: preconditions and effects.
//!
//! `check` is pure and holds every precondition. `perform` assumes `check`
//! passed and only mutates, so a rejected command never leaves partial state.

use super::{Game, TurnPhase};
use crate::board::{City, CityId};
use crate::cards::{Card, EventKind};
use crate::core::{Action, ActionError, GameLog, MoveKind, PlayerId, RandomSource, ShareDirection};
use crate::disease::Color;
use crate::players::Player;

impl<R: RandomSource> Game<R> {
    /// Check every precondition of `action` against the current state.
    pub(super) fn check(&self, action: &Action) -> Result<(), ActionError> {
        match self.phase {
            TurnPhase::Finished(_) => return Err(ActionError::GameOver),
            TurnPhase::PendingDiscard { player, .. } => {
                if !matches!(action, Action::Discard { .. } | Action::PlayEvent { .. }) {
                    return Err(ActionError::DiscardPending { player });
                }
            }
            _ => {}
        }

        if action.consumes_action() && self.current().moves_remaining == 0 {
            return Err(ActionError::NoActionsLeft);
        }

        match action {
            Action::Move { target, kind } => self.check_move(*target, *kind),
            Action::BuildResearchStation { discard, relocate_from } => self.check_build(*discard, *relocate_from),
            Action::Treat { color } => self.check_treat(*color),
            Action::Cure { color } => self.check_cure(*color).map(|_| ()),
            Action::Share { card, other, direction } => self.check_share(*card, *other, *direction),
            Action::Skip | Action::EndTurn => Ok(()),
            Action::Link { target } => self.check_link(*target),
            Action::TakeEvent { event } => self.check_take_event(*event),
            Action::PlayEvent { holder, play } => self.check_event(*holder, play),
            Action::Discard { player, card } => self.check_discard(*player, *card),
        }
    }

    /// Apply a checked action.
    pub(super) fn perform(&mut self, action: &Action, log: &mut GameLog) {
        match action {
            Action::Move { target, kind } => self.perform_move(*target, *kind, log),
            Action::BuildResearchStation { discard, relocate_from } => {
                let city = self.current().location;
                self.place_station(city, *relocate_from, log);
                self.discard_from_hand(self.current, *discard);
                self.spend_action();
            }
            Action::Treat { color } => self.perform_treat(*color, log),
            Action::Cure { color } => self.perform_cure(*color, log),
            Action::Share { card, other, direction } => self.perform_share(*card, *other, *direction, log),
            Action::Skip => {
                self.players[self.current].moves_remaining = 0;
                log.push(format!("{} skipped the rest of the turn", self.current()));
            }
            Action::Link { target } => {
                self.players[self.current].link = *target;
                match target {
                    Some(p) => log.push(format!("{} now directs {}", self.current(), self.players[*p])),
                    None => log.push(format!("{} now moves their own pawn", self.current())),
                }
            }
            Action::TakeEvent { event } => {
                self.decks.player_discard.remove(Card::Event(*event));
                self.players[self.current].additional_card = Some(*event);
                self.spend_action();
                log.push(format!("{} took {event} from the discard pile", self.current()));
            }
            Action::PlayEvent { holder, play } => self.perform_event(*holder, play, log),
            Action::Discard { player, card } => {
                self.discard_from_hand(*player, *card);
                log.push(format!("{} discarded {}", self.players[*player], card.label(&self.board)));
            }
            Action::EndTurn => self.perform_end_turn(log),
        }
    }

    // === Movement ===

    /// The pawn moves issued by the current player apply to.
    pub(super) fn mover(&self) -> PlayerId {
        let current = self.current();
        match current.link {
            Some(linked) if current.abilities.controls_other_pawns => linked,
            _ => self.current,
        }
    }

    fn check_move(&self, target: CityId, kind: MoveKind) -> Result<(), ActionError> {
        if self.board.city(target).is_none() {
            return Err(ActionError::UnknownCity(target));
        }
        let spender = self.current();
        let mover = self.player_ref(self.mover())?;
        let from = mover.location;
        if from == target {
            return Err(ActionError::SameCity(self.city_name(target)));
        }

        match kind {
            MoveKind::Basic => {
                let drive = self.board.has_edge(from, target);
                let shuttle = self.board.has_research_station(from) && self.board.has_research_station(target);
                let to_pawn = spender.abilities.controls_other_pawns
                    && self.players_in(target).any(|p| p != mover.id);
                if drive || shuttle || to_pawn {
                    Ok(())
                } else {
                    Err(ActionError::NotAdjacent {
                        from: self.city_name(from),
                        to: self.city_name(target),
                    })
                }
            }
            MoveKind::Direct => require_card(spender, Card::City(target)),
            MoveKind::Charter => require_card(spender, Card::City(from)),
        }
    }

    fn perform_move(&mut self, target: CityId, kind: MoveKind, log: &mut GameLog) {
        let mover = self.mover();
        let from = self.players[mover].location;
        match kind {
            MoveKind::Basic => {}
            MoveKind::Direct => self.discard_from_hand(self.current, Card::City(target)),
            MoveKind::Charter => self.discard_from_hand(self.current, Card::City(from)),
        }
        self.spend_action();
        log.push(format!("{} moved to {}", self.players[mover], self.board.name(target)));
        self.relocate(mover, target, log);
    }

    /// Put a pawn in `target` and fire arrival abilities.
    pub(super) fn relocate(&mut self, player: PlayerId, target: CityId, log: &mut GameLog) {
        self.players[player].location = target;
        if self.players[player].abilities.clears_cured_on_arrival {
            for color in Color::ALL {
                if self.diseases.is_cured(color) {
                    self.clear_color(target, color, log);
                }
            }
        }
        self.refresh_protection();
    }

    /// Recompute quarantine flags from the pawns' current positions.
    pub(super) fn refresh_protection(&mut self) {
        let guarded: Vec<CityId> = self
            .players
            .values()
            .filter(|p| p.abilities.quarantines_neighborhood)
            .flat_map(|p| std::iter::once(p.location).chain(self.board.neighbors(p.location).iter().copied()))
            .collect();
        let ids: Vec<CityId> = self.board.ids().collect();
        for id in ids {
            if let Some(city) = self.board.city_mut(id) {
                city.is_protected = guarded.contains(&id);
            }
        }
    }

    // === Research stations ===

    fn check_build(&self, discard: Card, relocate_from: Option<CityId>) -> Result<(), ActionError> {
        let player = self.current();
        let city = player.location;
        require_card(player, discard)?;
        let card_fits = if player.abilities.builds_with_any_card {
            matches!(discard, Card::City(_))
        } else {
            discard == Card::City(city)
        };
        if !card_fits {
            return Err(ActionError::NotApplicable(format!(
                "{} cannot build in {} with {}",
                player,
                self.board.name(city),
                discard.label(&self.board)
            )));
        }
        self.check_station_site(city, relocate_from)
    }

    /// Preconditions shared by building and Government Grant.
    pub(super) fn check_station_site(&self, city: CityId, relocate_from: Option<CityId>) -> Result<(), ActionError> {
        if self.board.city(city).is_none() {
            return Err(ActionError::UnknownCity(city));
        }
        if self.board.has_research_station(city) {
            return Err(ActionError::StationAlreadyPresent(self.city_name(city)));
        }
        match relocate_from {
            Some(old) => {
                if self.board.city(old).is_none() {
                    return Err(ActionError::UnknownCity(old));
                }
                if !self.board.has_research_station(old) {
                    return Err(ActionError::NoResearchStation(self.city_name(old)));
                }
                Ok(())
            }
            None if self.research_station_pool == 0 => Err(ActionError::StationPoolEmpty),
            None => Ok(()),
        }
    }

    /// Build in `city`, first moving the station out of `relocate_from`.
    pub(super) fn place_station(&mut self, city: CityId, relocate_from: Option<CityId>, log: &mut GameLog) {
        if let Some(old) = relocate_from {
            if let Some(c) = self.board.city_mut(old) {
                c.has_research_station = false;
                self.research_station_pool += 1;
                log.push(format!("{} no longer has a research station", c.name));
            }
        }
        if let Some(c) = self.board.city_mut(city) {
            c.has_research_station = true;
            self.research_station_pool = self.research_station_pool.saturating_sub(1);
            log.push(format!("{} now has a research station", c.name));
        }
    }

    // === Treat and cure ===

    fn check_treat(&self, color: Color) -> Result<(), ActionError> {
        let city = self.current().location;
        let cubes = self.board.city(city).map_or(0, |c| c.cubes(color));
        if cubes == 0 {
            return Err(ActionError::NoCubes {
                color,
                city: self.city_name(city),
            });
        }
        Ok(())
    }

    fn perform_treat(&mut self, color: Color, log: &mut GameLog) {
        let player = self.current();
        let city = player.location;
        let amount = if self.diseases.is_cured(color) || player.abilities.treats_all_cubes {
            City::MAX_CUBES
        } else {
            1
        };
        let removed = self.board.city_mut(city).map_or(0, |c| c.remove_diseases(amount, color));
        self.diseases.give_back(color, removed);
        self.spend_action();
        log.push(format!(
            "{} treated {removed} {color} {} in {}",
            self.current(),
            if removed == 1 { "cube" } else { "cubes" },
            self.board.name(city)
        ));
        if self.diseases.is_eradicated(color) {
            log.push(format!("{color} is eradicated"));
        }
    }

    /// Returns the cards a cure would spend.
    fn check_cure(&self, color: Color) -> Result<Vec<Card>, ActionError> {
        if self.diseases.is_cured(color) {
            return Err(ActionError::AlreadyCured(color));
        }
        let player = self.current();
        if !self.board.has_research_station(player.location) {
            return Err(ActionError::NoResearchStation(self.city_name(player.location)));
        }
        let matching: Vec<Card> = player
            .city_cards()
            .filter(|&id| self.board.city(id).is_some_and(|c| c.color == color))
            .map(Card::City)
            .collect();
        let needed = player.abilities.cards_to_cure;
        if matching.len() < needed {
            return Err(ActionError::NotEnoughCards {
                color,
                needed,
                held: matching.len(),
            });
        }
        Ok(matching.into_iter().take(needed).collect())
    }

    fn perform_cure(&mut self, color: Color, log: &mut GameLog) {
        let Ok(spent) = self.check_cure(color) else {
            return;
        };
        for card in spent {
            self.discard_from_hand(self.current, card);
        }
        self.diseases.cure(color);
        self.spend_action();
        log.push(format!("{} discovered a cure for {color}", self.current()));

        let medic_cities: Vec<CityId> = self
            .players
            .values()
            .filter(|p| p.abilities.clears_cured_on_arrival)
            .map(|p| p.location)
            .collect();
        for city in medic_cities {
            self.clear_color(city, color, log);
        }
        if self.diseases.is_eradicated(color) {
            log.push(format!("{color} is eradicated"));
        }
    }

    /// Remove every cube of `color` from `city` and return them to the supply.
    fn clear_color(&mut self, city: CityId, color: Color, log: &mut GameLog) {
        let removed = self.board.city_mut(city).map_or(0, |c| c.clear_diseases(color));
        if removed > 0 {
            self.diseases.give_back(color, removed);
            log.push(format!("{removed} {color} cubes removed from {}", self.board.name(city)));
        }
    }

    // === Share ===

    fn check_share(&self, card: Card, other: PlayerId, direction: ShareDirection) -> Result<(), ActionError> {
        let me = self.current();
        let them = self.player_ref(other)?;
        if other == self.current {
            return Err(ActionError::NotApplicable(format!("{me} cannot share with themselves")));
        }
        if me.location != them.location {
            return Err(ActionError::NotCoLocated {
                other,
                city: self.city_name(me.location),
            });
        }
        if !matches!(card, Card::City(_)) {
            return Err(ActionError::NotApplicable("only city cards can be shared".to_string()));
        }
        let giver = match direction {
            ShareDirection::Give => me,
            ShareDirection::Take => them,
        };
        require_card(giver, card)?;
        if card != Card::City(me.location) && !giver.abilities.shares_any_city_card {
            return Err(ActionError::NotApplicable(format!(
                "{giver} can only share the {} card",
                self.board.name(me.location)
            )));
        }
        Ok(())
    }

    fn perform_share(&mut self, card: Card, other: PlayerId, direction: ShareDirection, log: &mut GameLog) {
        let (giver, receiver) = match direction {
            ShareDirection::Give => (self.current, other),
            ShareDirection::Take => (other, self.current),
        };
        self.players[giver].remove_card(card);
        self.players[receiver].draw([card]);
        self.spend_action();
        log.push(format!(
            "{} gave {} to {}",
            self.players[giver],
            card.label(&self.board),
            self.players[receiver]
        ));
        self.enforce_hand_limit(receiver, super::ResumePoint::Actions, log);
    }

    // === Roles ===

    fn check_link(&self, target: Option<PlayerId>) -> Result<(), ActionError> {
        let me = self.current();
        if !me.abilities.controls_other_pawns {
            return Err(ActionError::RoleCannot { role: me.role });
        }
        if let Some(p) = target {
            self.player_ref(p)?;
            if p == self.current {
                return Err(ActionError::NotApplicable("link to another pawn or to none".to_string()));
            }
        }
        if target == me.link {
            return Err(ActionError::NotApplicable("link is already set".to_string()));
        }
        Ok(())
    }

    fn check_take_event(&self, event: EventKind) -> Result<(), ActionError> {
        let me = self.current();
        if !me.abilities.event_slot {
            return Err(ActionError::RoleCannot { role: me.role });
        }
        if me.additional_card.is_some() {
            return Err(ActionError::NotApplicable(format!("{me} already stores an event")));
        }
        if !self.decks.player_discard.contains(Card::Event(event)) {
            return Err(ActionError::MissingCard {
                card: Card::Event(event),
            });
        }
        Ok(())
    }

    // === Hand limit ===

    fn check_discard(&self, player: PlayerId, card: Card) -> Result<(), ActionError> {
        match self.phase {
            TurnPhase::PendingDiscard { player: pending, .. } if pending == player => {
                require_card(self.player_ref(player)?, card)
            }
            _ => Err(ActionError::NoDiscardPending { player }),
        }
    }

    // === Helpers ===

    pub(super) fn spend_action(&mut self) {
        let player = &mut self.players[self.current];
        player.moves_remaining = player.moves_remaining.saturating_sub(1);
    }

    /// Move a held card to the player discard pile.
    pub(super) fn discard_from_hand(&mut self, player: PlayerId, card: Card) {
        if self.players[player].remove_card(card) {
            self.decks.player_discard.push_bottom(card);
        }
    }
}

fn require_card(player: &Player, card: Card) -> Result<(), ActionError> {
    if player.has(card) {
        Ok(())
    } else {
        Err(ActionError::MissingCard { card })
    }
}
