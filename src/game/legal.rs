//! Action enumeration and the `RulesEngine` implementation.
//!
//! Candidates are generated generously and filtered through `check`, so the
//! enumerated set and the accepted set cannot drift apart. Forecast is offered
//! in two orders only (as drawn and reversed) rather than all permutations.

use smallvec::SmallVec;

use super::{Game, TurnPhase};
use crate::board::CityId;
use crate::cards::{Card, EventKind};
use crate::core::{Action, ActionError, EventPlay, GameConfig, GameLog, MoveKind, PlayerId, RandomSource, ShareDirection};
use crate::disease::Color;
use crate::rules::{GameResult, RulesEngine};

impl<R: RandomSource> Game<R> {
    fn turn_candidates(&self, out: &mut Vec<Action>) {
        let me = self.current();

        for target in self.board.ids() {
            for kind in [MoveKind::Basic, MoveKind::Direct, MoveKind::Charter] {
                out.push(Action::Move { target, kind });
            }
        }

        let mut stations: Vec<Option<CityId>> = vec![None];
        stations.extend(self.board.research_stations().map(Some));
        for &discard in &me.hand {
            for &relocate_from in &stations {
                out.push(Action::BuildResearchStation { discard, relocate_from });
            }
        }

        for color in Color::ALL {
            out.push(Action::Treat { color });
            out.push(Action::Cure { color });
        }

        for (other, them) in self.players.iter() {
            if other == self.current {
                continue;
            }
            for &card in &me.hand {
                out.push(Action::Share { card, other, direction: ShareDirection::Give });
            }
            for &card in &them.hand {
                out.push(Action::Share { card, other, direction: ShareDirection::Take });
            }
            out.push(Action::Link { target: Some(other) });
        }
        out.push(Action::Link { target: None });

        for event in EventKind::ALL {
            out.push(Action::TakeEvent { event });
        }
        if me.moves_remaining > 0 {
            out.push(Action::Skip);
        }
        out.push(Action::EndTurn);
    }

    fn event_candidates(&self, out: &mut Vec<Action>) {
        for (holder, player) in self.players.iter() {
            let held = player
                .hand
                .iter()
                .filter_map(|&c| match c {
                    Card::Event(kind) => Some(kind),
                    _ => None,
                })
                .chain(player.additional_card);
            for kind in held {
                self.plays_for(kind, |play| out.push(Action::PlayEvent { holder, play }));
            }
        }
    }

    fn plays_for(&self, kind: EventKind, mut emit: impl FnMut(EventPlay)) {
        match kind {
            EventKind::OneQuietNight => {
                if !self.skip_next_infection_step {
                    emit(EventPlay::OneQuietNight);
                }
            }
            EventKind::ResilientPopulation => {
                for city in self.decks.infection_discard.iter().filter_map(Card::city) {
                    emit(EventPlay::ResilientPopulation { city });
                }
            }
            EventKind::Airlift => {
                for player in self.players.player_ids() {
                    for city in self.board.ids() {
                        emit(EventPlay::Airlift { player, city });
                    }
                }
            }
            EventKind::Forecast => {
                for order in self.forecast_orders() {
                    emit(EventPlay::Forecast {
                        order: SmallVec::from_vec(order),
                    });
                }
            }
            EventKind::GovernmentGrant => {
                let stations: Vec<CityId> = self.board.research_stations().collect();
                for city in self.board.ids() {
                    emit(EventPlay::GovernmentGrant { city, relocate_from: None });
                    if self.research_station_pool == 0 {
                        for &old in &stations {
                            emit(EventPlay::GovernmentGrant { city, relocate_from: Some(old) });
                        }
                    }
                }
            }
        }
    }
}

impl<R: RandomSource> RulesEngine for Game<R> {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn acting_player(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::Finished(_) => None,
            TurnPhase::PendingDiscard { player, .. } => Some(player),
            _ => Some(self.current),
        }
    }

    fn candidate_actions(&self) -> Vec<Action> {
        let mut out = Vec::new();
        match self.phase {
            TurnPhase::Finished(_) => return out,
            TurnPhase::PendingDiscard { player, .. } => {
                if let Some(p) = self.players.get(player) {
                    for &card in &p.hand {
                        let action = Action::Discard { player, card };
                        if !out.contains(&action) {
                            out.push(action);
                        }
                    }
                }
            }
            _ => self.turn_candidates(&mut out),
        }
        self.event_candidates(&mut out);
        out
    }

    fn check_action(&self, action: &Action) -> Result<(), ActionError> {
        self.check(action)
    }

    fn apply_action(&mut self, action: &Action, log: &mut GameLog) -> Result<(), ActionError> {
        self.execute(action.clone(), log)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result()
    }
}
