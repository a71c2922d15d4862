//! Rules engine trait.
//!
//! The trait is the generic surface drivers use: enumerate the commands that
//! would be accepted, apply one, and ask whether the game has ended.
//!
//! ## Implementation Notes
//!
//! - `candidate_actions`: may over-approximate; anything listed is filtered
//!   through `check_action`
//! - `check_action`: the single source of truth for preconditions
//! - `apply_action`: either applies fully or returns an error and changes
//!   nothing
//! - `is_terminal`: `None` while the game continues

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameConfig, GameLog, PlayerId};
use crate::disease::Color;

/// Why a game was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// The outbreak counter passed the configured maximum.
    OutbreakLimit,
    /// A color's cube supply ran out.
    CubesExhausted(Color),
    /// Fewer player cards remain than must be drawn.
    PlayerDeckExhausted,
}

impl std::fmt::Display for LossReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LossReason::OutbreakLimit => f.write_str("too many outbreaks"),
            LossReason::CubesExhausted(color) => write!(f, "{color} cubes exhausted"),
            LossReason::PlayerDeckExhausted => f.write_str("player deck exhausted"),
        }
    }
}

/// Result of a completed game. Play is cooperative: everyone wins or loses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Every disease was cured.
    Won,
    /// A defeat condition was reached.
    Lost(LossReason),
}

impl GameResult {
    /// Check if the players won.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, GameResult::Won)
    }

    /// The loss reason, if lost.
    #[must_use]
    pub fn loss_reason(&self) -> Option<LossReason> {
        match self {
            GameResult::Won => None,
            GameResult::Lost(reason) => Some(*reason),
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Won => f.write_str("won"),
            GameResult::Lost(reason) => write!(f, "lost ({reason})"),
        }
    }
}

/// Rules engine trait.
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// The seat expected to act next, or `None` once the game is over.
    fn acting_player(&self) -> Option<PlayerId>;

    /// Commands worth checking in the current state.
    fn candidate_actions(&self) -> Vec<Action>;

    /// Check whether `action` would be accepted, without applying it.
    fn check_action(&self, action: &Action) -> Result<(), ActionError>;

    /// Apply `action`, appending a description to `log`.
    fn apply_action(&mut self, action: &Action, log: &mut GameLog) -> Result<(), ActionError>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check whether `action` would be accepted.
    fn is_legal(&self, action: &Action) -> bool {
        self.check_action(action).is_ok()
    }

    /// Every command that would be accepted right now.
    fn legal_actions(&self) -> Vec<Action> {
        self.candidate_actions()
            .into_iter()
            .filter(|action| self.is_legal(action))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result() {
        assert!(GameResult::Won.is_win());
        let lost = GameResult::Lost(LossReason::CubesExhausted(Color::Red));
        assert!(!lost.is_win());
        assert_eq!(lost.loss_reason(), Some(LossReason::CubesExhausted(Color::Red)));
        assert_eq!(lost.to_string(), "lost (Red cubes exhausted)");
    }
}
