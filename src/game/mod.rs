//! The game aggregate.
//!
//! `Game` owns every piece of mutable state: the board, all piles, the disease
//! registry, the players and the turn machinery. Callers read through the
//! query methods and change state only through commands.
//!
//! ## Turn flow
//!
//! ```text
//! AwaitingAction --end_turn--> DrawPhase --> InfectPhase --> AwaitingAction (next seat)
//!        |                         |
//!        +-- share over limit      +-- hand over limit
//!        v                         v
//!  PendingDiscard(resume: Actions) PendingDiscard(resume: InfectPhase)
//! ```
//!
//! Draw and infect phases run to completion inside `end_turn` unless a
//! hand-limit discard suspends them. The outcome is evaluated after every
//! accepted command; once it is `Finished`, every command is rejected.
//!
//! ## Commands
//!
//! Each command has an [`Action`] counterpart. Named methods (`move_to`,
//! `treat`, ...) build the action and go through the same path as
//! `RulesEngine::apply_action`: check every precondition, reject with an
//! [`ActionError`] (logged, nothing changed) or apply, record and re-evaluate.

mod actions;
mod events;
mod infection;
mod legal;
mod outcome;
mod setup;
mod turn;

pub use infection::InfectionOutcome;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, CityId};
use crate::cards::{Card, EventKind, GameDecks};
use crate::core::{
    Action, ActionError, ActionRecord, EventPlay, GameConfig, GameLog, GameRng, MoveKind, PlayerId, PlayerMap,
    RandomSource, ShareDirection,
};
use crate::disease::{Color, DiseaseRegistry, DiseaseStatus};
use crate::players::Player;
use crate::rules::GameResult;

/// Where an interrupted turn continues once a pending discard is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResumePoint {
    /// Back to the current player's actions.
    Actions,
    /// The end-of-turn draw is done; run the infect phase next.
    InfectPhase,
}

/// Turn state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingAction,
    DrawPhase,
    InfectPhase,
    /// `player` holds more cards than the hand limit allows.
    PendingDiscard { player: PlayerId, resume: ResumePoint },
    Finished(GameResult),
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game<R: RandomSource = GameRng> {
    config: GameConfig,
    board: Board,
    decks: GameDecks,
    diseases: DiseaseRegistry,
    players: PlayerMap<Player>,
    current: PlayerId,
    outbreak_counter: u32,
    infection_rate_index: usize,
    research_station_pool: u32,
    skip_next_infection_step: bool,
    phase: TurnPhase,
    turn: u32,
    sequence: u32,
    history: Vector<ActionRecord>,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    // === Queries ===

    /// The rules this game runs under.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All card piles.
    #[must_use]
    pub fn decks(&self) -> &GameDecks {
        &self.decks
    }

    /// The disease registry.
    #[must_use]
    pub fn diseases(&self) -> &DiseaseRegistry {
        &self.diseases
    }

    /// Supply and cure status of one disease.
    #[must_use]
    pub fn disease_info(&self, color: Color) -> DiseaseStatus {
        self.diseases.status(color)
    }

    /// Check if `color` is eradicated.
    #[must_use]
    pub fn is_eradicated(&self, color: Color) -> bool {
        self.diseases.is_eradicated(color)
    }

    /// Every player, by seat.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Look up a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    /// Outbreaks so far.
    #[must_use]
    pub fn outbreak_counter(&self) -> u32 {
        self.outbreak_counter
    }

    /// Position on the infection-rate track.
    #[must_use]
    pub fn infection_rate_index(&self) -> usize {
        self.infection_rate_index
    }

    /// Infection cards the next infect phase will draw.
    #[must_use]
    pub fn infection_rate(&self) -> usize {
        self.config.infection_rate(self.infection_rate_index)
    }

    /// Research stations still available to build.
    #[must_use]
    pub fn research_station_pool(&self) -> u32 {
        self.research_station_pool
    }

    /// Check if the next infect phase will be skipped.
    #[must_use]
    pub fn skip_next_infection_step(&self) -> bool {
        self.skip_next_infection_step
    }

    /// Current turn state.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every accepted command in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The player who must discard, if any.
    #[must_use]
    pub fn pending_discard(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::PendingDiscard { player, .. } => Some(player),
            _ => None,
        }
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            TurnPhase::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Top infection cards as Forecast would reveal them, top first.
    #[must_use]
    pub fn forecast_peek(&self) -> Vec<CityId> {
        self.decks
            .infection_deck
            .peek_top(events::FORECAST_DEPTH)
            .filter_map(Card::city)
            .collect()
    }

    /// Seats whose pawn is in `city`.
    pub fn players_in(&self, city: CityId) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(move |(_, p)| p.location == city)
            .map(|(id, _)| id)
    }

    // === Commands ===

    /// Move the current pawn (or the Dispatcher's linked pawn).
    pub fn move_to(&mut self, target: CityId, kind: MoveKind, log: &mut GameLog) -> Result<(), ActionError> {
        self.execute(Action::Move { target, kind }, log)
    }

    /// Build a research station in the current city, discarding `discard`.
    ///
    /// When the pool is empty, `relocate_from` names the station to move.
    pub fn build_research_station(
        &mut self,
        discard: Card,
        relocate_from: Option<CityId>,
        log: &mut GameLog,
    ) -> Result<(), ActionError> {
        self.execute(Action::BuildResearchStation { discard, relocate_from }, log)
    }

    /// Treat `color` in the current city.
    pub fn treat(&mut self, color: Color, log: &mut GameLog) -> Result<(), ActionError> {
        self.execute(Action::Treat { color }, log)
    }

    /// Discover a cure for `color`.
    pub fn cure(&mut self, color: Color, log: &mut GameLog) -> Result<(), ActionError> {
        self.execute(Action::Cure { color }, log)
    }

    /// Exchange a city card with a co-located player.
    pub fn share(
        &mut self,
        card: Card,
        other: PlayerId,
        direction: ShareDirection,
        log: &mut GameLog,
    ) -> Result<(), ActionError> {
        self.execute(Action::Share { card, other, direction }, log)
    }

    /// Give up the remaining actions this turn.
    pub fn skip(&mut self, log: &mut GameLog) -> Result<(), ActionError> {
        self.execute(Action::Skip, log)
    }

    /// Dispatcher: choose the pawn subsequent moves apply to.
    pub fn set_link(&mut self, target: Option<PlayerId>, log: &mut GameLog) -> Result<(), ActionError> {
        self.execute(Action::Link { target }, log)
    }

    /// Contingency Planner: store an event card from the player discard pile.
    pub fn take_event(&mut self, event: EventKind, log: &mut GameLog) -> Result<(), ActionError> {
        self.execute(Action::TakeEvent { event }, log)
    }

    /// Play an event card held by `holder`.
    pub fn play_event(
        &mut self,
        holder: PlayerId,
        play: EventPlay,
        log: &mut GameLog,
    ) -> Result<(), ActionError> {
        self.execute(Action::PlayEvent { holder, play }, log)
    }

    /// Resolve a pending hand-limit discard.
    pub fn discard(&mut self, player: PlayerId, card: Card, log: &mut GameLog) -> Result<(), ActionError> {
        self.execute(Action::Discard { player, card }, log)
    }

    /// Finish the current turn: draw, infect, pass to the next seat.
    pub fn end_turn(&mut self, log: &mut GameLog) -> Result<(), ActionError> {
        self.execute(Action::EndTurn, log)
    }

    /// Move `card` from the current player's hand to the player discard pile.
    ///
    /// Presentation layers that resolve an event themselves use this to spend
    /// the card. No action is consumed and nothing is recorded in history.
    pub fn use_card(&mut self, card: Card, log: &mut GameLog) -> Result<(), ActionError> {
        self.refuse_if_over(log)?;
        let current = self.current;
        if !self.players[current].remove_card(card) {
            let err = ActionError::MissingCard { card };
            log.push(format!("Rejected: {err}"));
            return Err(err);
        }
        self.decks.player_discard.push_bottom(card);
        log.push(format!("{} discarded {}", self.players[current], card.label(&self.board)));
        self.settle_hand_limit(log);
        self.evaluate_outcome(log);
        Ok(())
    }

    // === Dispatch ===

    /// Reject with `GameOver` once the game has ended.
    fn refuse_if_over(&self, log: &mut GameLog) -> Result<(), ActionError> {
        if self.is_over() {
            log.push(format!("Rejected: {}", ActionError::GameOver));
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    /// Check, apply, record and re-evaluate.
    fn execute(&mut self, action: Action, log: &mut GameLog) -> Result<(), ActionError> {
        if let Err(err) = self.check(&action) {
            log::debug!("rejected {action:?}: {err}");
            log.push(format!("Rejected: {err}"));
            return Err(err);
        }

        let actor = self.actor_of(&action);
        self.sequence += 1;
        self.history
            .push_back(ActionRecord::new(actor, action.clone(), self.turn, self.sequence));

        self.perform(&action, log);
        self.settle_hand_limit(log);
        self.evaluate_outcome(log);
        Ok(())
    }

    /// Seat that issues `action`.
    fn actor_of(&self, action: &Action) -> PlayerId {
        match action {
            Action::Discard { player, .. } => *player,
            Action::PlayEvent { holder, .. } => *holder,
            _ => self.current,
        }
    }

    fn player_ref(&self, id: PlayerId) -> Result<&Player, ActionError> {
        self.players.get(id).ok_or(ActionError::UnknownPlayer(id))
    }

    fn city_name(&self, id: CityId) -> String {
        self.board.name(id).to_string()
    }
}
