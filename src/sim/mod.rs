//! Headless self-play.
//!
//! Plays seeded games with a uniform random policy over the legal actions
//! and aggregates the results. Useful as a smoke test of the rules and for
//! rough balance numbers per difficulty.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Action, ConfigError, GameConfig, GameLog, GameRng, RandomSource};
use crate::game::Game;
use crate::rules::{GameResult, LossReason, RulesEngine};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Rules every game is played with.
    pub game: GameConfig,

    /// Number of games to play.
    pub games: usize,

    /// Maximum accepted actions per game before it is abandoned.
    pub max_actions: usize,

    /// Seed offset (combined with game index for unique seeds).
    pub seed_offset: u64,

    /// Probability, in percent, that the policy ends the turn when it may.
    /// Without it a random policy spends most turns on free actions.
    pub end_turn_bias: u8,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            games: 100,
            max_actions: 5_000,
            seed_offset: 0,
            end_turn_bias: 20,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    #[must_use]
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            ..Self::default()
        }
    }

    /// Set number of games.
    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the per-game action cap.
    #[must_use]
    pub fn with_max_actions(mut self, max: usize) -> Self {
        self.max_actions = max;
        self
    }

    /// Set seed offset.
    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Outcome of one self-play game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    /// `None` if the action cap was hit first.
    pub result: Option<GameResult>,
    pub turns: u32,
    pub actions: usize,
    pub outbreaks: u32,
}

/// Aggregated self-play results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayReport {
    pub games: usize,
    pub wins: usize,
    pub losses: FxHashMap<String, usize>,
    pub unfinished: usize,
    pub mean_turns: f64,
    pub mean_outbreaks: f64,
}

impl SelfPlayReport {
    /// Total games lost for any reason.
    #[must_use]
    pub fn total_losses(&self) -> usize {
        self.losses.values().sum()
    }

    /// Games lost for `reason`.
    #[must_use]
    pub fn losses_by(&self, reason: LossReason) -> usize {
        self.losses.get(&loss_key(reason)).copied().unwrap_or(0)
    }

    fn from_summaries(summaries: &[GameSummary]) -> Self {
        let mut report = Self {
            games: summaries.len(),
            ..Self::default()
        };
        for summary in summaries {
            match summary.result {
                Some(GameResult::Won) => report.wins += 1,
                Some(GameResult::Lost(reason)) => *report.losses.entry(loss_key(reason)).or_default() += 1,
                None => report.unfinished += 1,
            }
        }
        if !summaries.is_empty() {
            let n = summaries.len() as f64;
            report.mean_turns = summaries.iter().map(|s| f64::from(s.turns)).sum::<f64>() / n;
            report.mean_outbreaks = summaries.iter().map(|s| f64::from(s.outbreaks)).sum::<f64>() / n;
        }
        report
    }
}

fn loss_key(reason: LossReason) -> String {
    match reason {
        LossReason::OutbreakLimit => "outbreaks".to_string(),
        LossReason::CubesExhausted(color) => format!("cubes_{}", color.name().to_lowercase()),
        LossReason::PlayerDeckExhausted => "player_deck".to_string(),
    }
}

/// Runs self-play games.
pub struct SelfPlayRunner {
    config: SelfPlayConfig,
}

impl SelfPlayRunner {
    /// Create a runner.
    #[must_use]
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    /// Play a single game from `seed`.
    pub fn play_game(&self, seed: u64) -> Result<GameSummary, ConfigError> {
        let mut log = GameLog::new();
        let mut game = Game::seeded(self.config.game.clone(), seed, &mut log)?;
        let mut policy = GameRng::new(seed).fork();
        let mut actions = 0;

        while game.is_terminal().is_none() && actions < self.config.max_actions {
            let legal = game.legal_actions();
            if legal.is_empty() {
                log::warn!("seed {seed}: no legal action in phase {:?}", game.phase());
                break;
            }
            let end_turn = legal.iter().find(|a| matches!(a, Action::EndTurn));
            let action = match end_turn {
                Some(end) if policy.gen_index(100) < usize::from(self.config.end_turn_bias) => end,
                _ => &legal[policy.gen_index(legal.len())],
            };
            if let Err(err) = game.apply_action(action, &mut log) {
                log::error!("seed {seed}: legal action {action:?} rejected: {err}");
                break;
            }
            actions += 1;
        }

        Ok(GameSummary {
            seed,
            result: game.is_terminal(),
            turns: game.turn(),
            actions,
            outbreaks: game.outbreak_counter(),
        })
    }

    /// Play every configured game.
    pub fn run(&self) -> Result<(Vec<GameSummary>, SelfPlayReport), ConfigError> {
        let summaries = (0..self.config.games as u64)
            .map(|i| self.play_game(self.config.seed_offset.wrapping_add(i)))
            .collect::<Result<Vec<_>, _>>()?;
        let report = SelfPlayReport::from_summaries(&summaries);
        log::info!(
            "self-play: {} games, {} won, {} lost, {} unfinished",
            report.games,
            report.wins,
            report.total_losses(),
            report.unfinished
        );
        Ok((summaries, report))
    }
}
