//! End of turn and the hand limit.

use super::{Game, ResumePoint, TurnPhase};
use crate::cards::Card;
use crate::core::{GameLog, PlayerId, RandomSource};

impl<R: RandomSource> Game<R> {
    /// Draw phase, then (unless a discard is now pending) infect phase.
    pub(super) fn perform_end_turn(&mut self, log: &mut GameLog) {
        let current = self.current;
        log.push(format!("{} ended their turn", self.players[current]));

        self.phase = TurnPhase::DrawPhase;
        let drawn = self.decks.player_deck.draw_top(self.config.cards_to_draw);
        if drawn.len() < self.config.cards_to_draw {
            log::warn!("player deck short: drew {} of {}", drawn.len(), self.config.cards_to_draw);
        }
        for card in drawn {
            if card == Card::Epidemic {
                self.decks.player_discard.push_bottom(card);
                if !self.is_over() {
                    self.epidemic(log);
                }
            } else {
                log.push(format!("{} drew {}", self.players[current], card.label(&self.board)));
                self.players[current].draw([card]);
            }
        }
        if self.evaluate_outcome(log).is_some() {
            return;
        }

        if self.enforce_hand_limit(current, ResumePoint::InfectPhase, log) {
            return;
        }
        self.run_infect_phase(log);
    }

    /// Enter `PendingDiscard` if `player` is over the hand limit.
    ///
    /// Returns whether a discard is now pending.
    pub(super) fn enforce_hand_limit(&mut self, player: PlayerId, resume: ResumePoint, log: &mut GameLog) -> bool {
        let excess = self.players[player].excess_cards(self.config.hand_limit);
        if excess == 0 {
            if resume == ResumePoint::Actions {
                self.phase = TurnPhase::AwaitingAction;
            }
            return false;
        }
        log.push(format!(
            "{} must discard {excess} {}",
            self.players[player],
            if excess == 1 { "card" } else { "cards" }
        ));
        self.phase = TurnPhase::PendingDiscard { player, resume };
        true
    }

    /// Leave `PendingDiscard` once the hand fits, resuming the turn.
    pub(super) fn settle_hand_limit(&mut self, log: &mut GameLog) {
        let TurnPhase::PendingDiscard { player, resume } = self.phase else {
            return;
        };
        if self.players[player].excess_cards(self.config.hand_limit) > 0 {
            return;
        }
        match resume {
            ResumePoint::Actions => self.phase = TurnPhase::AwaitingAction,
            ResumePoint::InfectPhase => self.run_infect_phase(log),
        }
    }

    /// Infect phase followed by the hand-over to the next seat.
    fn run_infect_phase(&mut self, log: &mut GameLog) {
        self.phase = TurnPhase::InfectPhase;
        if self.skip_next_infection_step {
            log.push("One Quiet Night: the infect phase is skipped".to_string());
        } else {
            self.infect_from_deck(self.infection_rate(), log);
        }
        self.skip_next_infection_step = false;
        if self.evaluate_outcome(log).is_some() {
            return;
        }
        self.finish_turn(log);
    }

    fn finish_turn(&mut self, log: &mut GameLog) {
        let ending = self.current;
        let actions = self.config.actions_per_turn;
        let player = &mut self.players[ending];
        player.replenish_moves(actions);
        player.link = None;

        self.current = ending.next(self.players.player_count());
        self.turn += 1;
        self.sequence = 0;
        self.phase = TurnPhase::AwaitingAction;
        log.push(format!("Turn {}: {}'s turn", self.turn, self.players[self.current]));
    }
}
