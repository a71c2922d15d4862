//! Win and loss tests.
//!
//! These tests verify that the game ends exactly when a terminal condition
//! holds and that a finished game refuses every command.

use pandemic_engine::board::{CityDef, ConnectionDef};
use pandemic_engine::{
    ActionError, Card, CityId, Color, Game, GameConfig, GameLog, GameResult, LossReason, MapData, PlayerId,
    RulesEngine, ScriptedRng, ShareDirection,
};

const P1: PlayerId = PlayerId::new(0);

fn city(name: &str, color: Color) -> CityDef {
    CityDef {
        name: name.to_string(),
        color,
        x: 0,
        y: 0,
        image: String::new(),
    }
}

/// Sixteen cities in a ring, four per color: B0-B3, Y0-Y3, K0-K3, R0-R3.
fn four_color_ring() -> MapData {
    let mut cities = Vec::new();
    for (prefix, color) in [("B", Color::Blue), ("Y", Color::Yellow), ("K", Color::Black), ("R", Color::Red)] {
        for i in 0..4 {
            cities.push(city(&format!("{prefix}{i}"), color));
        }
    }
    let connections = (0..cities.len())
        .map(|i| ConnectionDef::new(cities[i].name.clone(), cities[(i + 1) % cities.len()].name.clone()))
        .collect();
    MapData { cities, connections }
}

fn triangle() -> MapData {
    MapData {
        cities: vec![city("A", Color::Blue), city("B", Color::Blue), city("C", Color::Blue)],
        connections: vec![
            ConnectionDef::new("A", "B"),
            ConnectionDef::new("B", "C"),
            ConnectionDef::new("C", "A"),
        ],
    }
}

/// Unshuffled game on `map` with no opening cubes and no infect phase draws.
fn quiet_game(map: &MapData, start: &str) -> (Game<ScriptedRng>, GameLog) {
    let mut log = GameLog::new();
    let mut config = GameConfig::new(2)
        .with_initial_infections(Vec::new())
        .with_infection_rates(vec![0]);
    config.starting_city = start.to_string();
    let game = Game::setup_with_map(config, map, ScriptedRng::identity(), &mut log).unwrap();
    (game, log)
}

fn card(game: &Game<ScriptedRng>, name: &str) -> Card {
    Card::City(game.board().city_id(name).unwrap())
}

fn give(game: &mut Game<ScriptedRng>, log: &mut GameLog, names: &[&str]) {
    for name in names {
        let c = card(game, name);
        game.share(c, P1, ShareDirection::Give, log).unwrap();
    }
}

/// Test a full game won by curing all four diseases.
///
/// The Scientist cures with four cards; the Researcher feeds them the cards
/// it draws.
#[test]
fn test_win_by_cures() {
    let (mut game, mut log) = quiet_game(&four_color_ring(), "B0");

    // Turn 1: Scientist holds B0-B3
    game.cure(Color::Blue, &mut log).unwrap();
    assert!(game.is_eradicated(Color::Blue));
    game.end_turn(&mut log).unwrap();

    // Turn 2: Researcher hands over Y0-Y3, then draws K2 and an epidemic
    give(&mut game, &mut log, &["Y0", "Y1", "Y2", "Y3"]);
    game.end_turn(&mut log).unwrap();
    assert_eq!(game.infection_rate_index(), 1);

    // Turn 3
    game.cure(Color::Yellow, &mut log).unwrap();
    game.end_turn(&mut log).unwrap();

    // Turn 4
    give(&mut game, &mut log, &["K2"]);
    game.end_turn(&mut log).unwrap();

    // Turn 5
    game.cure(Color::Black, &mut log).unwrap();
    game.end_turn(&mut log).unwrap();

    // Turn 6
    give(&mut game, &mut log, &["R1"]);
    game.end_turn(&mut log).unwrap();
    assert!(!game.is_over());
    assert_eq!(game.outbreak_counter(), 0);

    // Turn 7
    game.cure(Color::Red, &mut log).unwrap();

    assert!(game.did_win());
    assert_eq!(game.result(), Some(GameResult::Won));
    assert_eq!(game.is_terminal(), Some(GameResult::Won));
    assert!(log.contains("You win"));
    assert_eq!(game.end_turn(&mut log), Err(ActionError::GameOver));
}

/// Test the loss when the player deck cannot cover a draw.
#[test]
fn test_player_deck_exhausted() {
    // Every card is dealt; the player deck holds only the four epidemics
    let (mut game, mut log) = quiet_game(&triangle(), "A");
    assert_eq!(game.decks().player_deck.len(), 4);

    game.end_turn(&mut log).unwrap();
    assert!(!game.is_over());
    assert_eq!(game.infection_rate_index(), 2);

    game.end_turn(&mut log).unwrap();

    assert_eq!(game.result(), Some(GameResult::Lost(LossReason::PlayerDeckExhausted)));
    // The last epidemic is not resolved once the game is lost
    assert_eq!(game.infection_rate_index(), 3);
    assert_eq!(game.decks().player_discard.len(), 4);
    assert_eq!(game.outbreak_counter(), 0);
}

/// Test the loss when a color runs out of cubes.
#[test]
fn test_cubes_exhausted() {
    let mut log = GameLog::new();
    let config = GameConfig::new(2)
        .with_initial_infections(Vec::new())
        .with_cubes_per_color(4);
    let mut game = Game::setup(config, ScriptedRng::identity(), &mut log).unwrap();
    let madrid = game.board().city_id("Madrid").unwrap();
    let london = game.board().city_id("London").unwrap();

    game.infect(madrid, Color::Blue, 3, &mut log).unwrap();
    assert!(!game.is_over());
    game.infect(london, Color::Blue, 1, &mut log).unwrap();

    assert_eq!(game.diseases().remaining(Color::Blue), 0);
    assert!(game.did_lose());
    assert_eq!(game.loss_reason(), Some(LossReason::CubesExhausted(Color::Blue)));
    assert_eq!(game.result(), Some(GameResult::Lost(LossReason::CubesExhausted(Color::Blue))));
}

/// Test that a finished game refuses every command.
#[test]
fn test_finished_game_is_frozen() {
    let (mut game, mut log) = quiet_game(&triangle(), "A");
    let a = game.board().city_id("A").unwrap();
    for name in ["A", "B", "C"] {
        let id = game.board().city_id(name).unwrap();
        game.infect(id, Color::Blue, 3, &mut log).unwrap();
    }
    for _ in 0..3 {
        game.infect(a, Color::Blue, 1, &mut log).unwrap();
    }
    assert_eq!(game.result(), Some(GameResult::Lost(LossReason::OutbreakLimit)));

    let history = game.history().len();
    assert_eq!(game.treat(Color::Blue, &mut log), Err(ActionError::GameOver));
    assert_eq!(game.end_turn(&mut log), Err(ActionError::GameOver));
    assert_eq!(game.use_card(card(&game, "A"), &mut log), Err(ActionError::GameOver));
    assert_eq!(game.history().len(), history);
    assert_eq!(game.acting_player(), None);
    assert!(game.legal_actions().is_empty());
    assert_eq!(log.last(), Some("Rejected: the game is over"));
}

/// Test that infection entry points leave a finished game untouched.
#[test]
fn test_finished_game_refuses_infection() {
    let (mut game, mut log) = quiet_game(&triangle(), "A");
    let a = game.board().city_id("A").unwrap();
    for name in ["A", "B", "C"] {
        let id = game.board().city_id(name).unwrap();
        game.infect(id, Color::Blue, 3, &mut log).unwrap();
    }
    for _ in 0..3 {
        game.infect(a, Color::Blue, 1, &mut log).unwrap();
    }
    assert!(game.is_over());

    let board = game.board().clone();
    let decks = game.decks().clone();
    let diseases = game.diseases().clone();
    let outbreaks = game.outbreak_counter();
    let rate_index = game.infection_rate_index();

    assert_eq!(game.infect(a, Color::Blue, 1, &mut log), Err(ActionError::GameOver));
    assert_eq!(game.start_outbreak(a, Color::Blue, &mut log), Err(ActionError::GameOver));
    assert_eq!(game.resolve_epidemic_card(&mut log), Err(ActionError::GameOver));

    assert_eq!(game.board(), &board);
    assert_eq!(game.decks(), &decks);
    assert_eq!(game.diseases(), &diseases);
    assert_eq!(game.outbreak_counter(), outbreaks);
    assert_eq!(game.infection_rate_index(), rate_index);
    assert_eq!(log.last(), Some("Rejected: the game is over"));
}

/// Test spending a card outside the action economy.
#[test]
fn test_use_card() {
    let mut log = GameLog::new();
    let mut game = Game::setup(GameConfig::new(2), ScriptedRng::identity(), &mut log).unwrap();
    let chicago = Card::City(game.board().city_id("Chicago").unwrap());
    let sydney = Card::City(game.board().city_id("Sydney").unwrap());

    game.use_card(chicago, &mut log).unwrap();

    assert!(!game.current().has(chicago));
    assert!(game.decks().player_discard.contains(chicago));
    assert_eq!(game.current().moves_remaining, 4);
    assert!(game.history().is_empty());
    assert_eq!(game.use_card(sydney, &mut log), Err(ActionError::MissingCard { card: sydney }));
}

/// Test the outcome helpers on a fresh game.
#[test]
fn test_fresh_game_not_terminal() {
    let (game, _) = quiet_game(&four_color_ring(), "B0");
    assert!(!game.did_win());
    assert!(!game.did_lose());
    assert_eq!(game.loss_reason(), None);
    assert_eq!(game.is_terminal(), None);
    assert_eq!(game.board().city(CityId::new(15)).map(|c| c.name.as_str()), Some("R3"));
}
