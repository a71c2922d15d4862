//! Win and loss evaluation.

use super::{Game, TurnPhase};
use crate::core::{GameLog, RandomSource};
use crate::rules::{GameResult, LossReason};

impl<R: RandomSource> Game<R> {
    /// Every disease is cured.
    #[must_use]
    pub fn did_win(&self) -> bool {
        self.diseases.all_cured()
    }

    /// A defeat condition holds.
    #[must_use]
    pub fn did_lose(&self) -> bool {
        self.loss_reason().is_some()
    }

    /// The first defeat condition that holds, if any.
    #[must_use]
    pub fn loss_reason(&self) -> Option<LossReason> {
        if self.outbreak_counter > self.config.max_outbreaks {
            return Some(LossReason::OutbreakLimit);
        }
        if let Some(color) = self.diseases.depleted() {
            return Some(LossReason::CubesExhausted(color));
        }
        if self.decks.player_deck.len() < self.config.cards_to_draw {
            return Some(LossReason::PlayerDeckExhausted);
        }
        None
    }

    /// Move to `Finished` if the game just ended. A win takes precedence.
    pub(super) fn evaluate_outcome(&mut self, log: &mut GameLog) -> Option<GameResult> {
        if let TurnPhase::Finished(result) = self.phase {
            return Some(result);
        }
        let result = if self.did_win() {
            GameResult::Won
        } else {
            GameResult::Lost(self.loss_reason()?)
        };
        self.phase = TurnPhase::Finished(result);
        log.push(match result {
            GameResult::Won => "All diseases are cured. You win!".to_string(),
            GameResult::Lost(reason) => format!("Game lost: {reason}"),
        });
        log::info!("game over after turn {}: {result}", self.turn);
        Some(result)
    }
}
