//! Game setup.
//!
//! Order matters for reproducibility, since every step may draw from the
//! random source:
//!
//! 1. build the board from map data
//! 2. shuffle the player deck (city + event cards) and the infection deck
//! 3. deal roles, missing seats drawing from the unused roles
//! 4. place every pawn and the first research station in the starting city
//! 5. initial infection: rows of three cities with 3, 2 and 1 cubes
//! 6. deal starting hands
//! 7. seed the epidemic cards into the remaining player deck

use im::Vector;

use super::{Game, TurnPhase};
use crate::board::{Board, MapData};
use crate::cards::{city_cards, event_cards, infection_cards, seed_epidemics, Deck, GameDecks};
use crate::core::{ConfigError, GameConfig, GameLog, GameRng, PlayerId, PlayerMap, RandomSource};
use crate::disease::DiseaseRegistry;
use crate::players::{Player, Role};

impl<R: RandomSource> Game<R> {
    /// Set up a game on the standard world map.
    pub fn setup(config: GameConfig, rng: R, log: &mut GameLog) -> Result<Self, ConfigError> {
        Self::setup_with_map(config, &MapData::standard()?, rng, log)
    }

    /// Set up a game on a custom map.
    pub fn setup_with_map(config: GameConfig, map: &MapData, mut rng: R, log: &mut GameLog) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut board = Board::from_map(map)?;
        let start = board
            .city_id(&config.starting_city)
            .ok_or_else(|| ConfigError::UnknownCity(config.starting_city.clone()))?;

        let infection_needed = config.initial_infections.len() * GameConfig::CITIES_PER_INFECTION_ROW;
        if infection_needed > board.len() {
            return Err(ConfigError::NotEnoughCards {
                needed: infection_needed,
                available: board.len(),
            });
        }
        let hands_needed = config.player_count * config.starting_hand_size();
        let player_cards = board.len() + event_cards().len();
        if hands_needed > player_cards {
            return Err(ConfigError::NotEnoughCards {
                needed: hands_needed,
                available: player_cards,
            });
        }

        let mut decks = GameDecks::new();
        decks.player_deck = city_cards(&board).into_iter().chain(event_cards()).collect();
        decks.player_deck.shuffle(&mut rng);
        decks.infection_deck = Deck::from_cards(infection_cards(&board));
        decks.infection_deck.shuffle(&mut rng);

        let roles = assign_roles(&config.roles, config.player_count, &mut rng);
        let players = PlayerMap::new(config.player_count, |id| {
            Player::new(id, roles[id.index()], start, config.actions_per_turn)
        });
        if let Some(city) = board.city_mut(start) {
            city.has_research_station = true;
        }

        let mut game = Self {
            diseases: DiseaseRegistry::new(config.cubes_per_color),
            research_station_pool: config.research_stations,
            board,
            decks,
            players,
            current: PlayerId::new(0),
            outbreak_counter: 0,
            infection_rate_index: 0,
            skip_next_infection_step: false,
            phase: TurnPhase::AwaitingAction,
            turn: 1,
            sequence: 0,
            history: Vector::new(),
            rng,
            config,
        };
        for (id, player) in game.players.iter() {
            log.push(format!("{id} is the {}", player.role));
        }
        game.refresh_protection();
        game.initial_infection(log);
        game.initial_draw(log);
        game.prepare_player_deck();
        game.evaluate_outcome(log);

        log::info!(
            "game set up: {} players, {}, player deck {} cards",
            game.players.player_count(),
            game.config.difficulty,
            game.decks.player_deck.len()
        );
        Ok(game)
    }

    /// Place the opening cubes. Protection does not apply during setup.
    fn initial_infection(&mut self, log: &mut GameLog) {
        let rows = self.config.initial_infections.clone();
        for cubes in rows {
            for card in self.decks.infection_deck.draw_top(GameConfig::CITIES_PER_INFECTION_ROW) {
                self.decks.infection_discard.push_bottom(card);
                let Some(id) = card.city() else { continue };
                let Some(city) = self.board.city_mut(id) else { continue };
                let color = city.color;
                if !city.add_diseases(cubes, color) {
                    self.diseases.take(color, cubes);
                    log.push(format!(
                        "Added {cubes} {color} {} in {}",
                        if cubes == 1 { "cube" } else { "cubes" },
                        city.name
                    ));
                }
            }
        }
    }

    fn initial_draw(&mut self, log: &mut GameLog) {
        let count = self.config.starting_hand_size();
        for id in self.players.player_ids() {
            let cards = self.decks.player_deck.draw_top(count);
            let labels: Vec<String> = cards.iter().map(|c| c.label(&self.board)).collect();
            log.push(format!("{} drew {}", self.players[id], labels.join(", ")));
            self.players[id].draw(cards);
        }
    }

    fn prepare_player_deck(&mut self) {
        let remaining = self.decks.player_deck.take_all();
        let epidemics = self.config.difficulty.epidemic_count();
        self.decks.player_deck = Deck::from_cards(seed_epidemics(remaining, epidemics, &mut self.rng));
    }
}

impl Game<GameRng> {
    /// Set up a game on the standard map with a seeded `GameRng`.
    pub fn seeded(config: GameConfig, seed: u64, log: &mut GameLog) -> Result<Self, ConfigError> {
        Self::setup(config, GameRng::new(seed), log)
    }
}

/// Explicit roles first, then random unused roles for the remaining seats.
fn assign_roles<R: RandomSource>(explicit: &[Role], players: usize, rng: &mut R) -> Vec<Role> {
    let mut unused: Vec<Role> = Role::ALL.into_iter().filter(|r| !explicit.contains(r)).collect();
    rng.shuffle(&mut unused);
    explicit
        .iter()
        .copied()
        .chain(unused)
        .take(players)
        .collect()
}
