//! Turn sequence tests.
//!
//! These tests verify the end-of-turn pipeline on unshuffled decks with no
//! opening cubes:
//! - Draw, infect and hand-over to the next seat
//! - Hand-limit discards suspending the turn
//! - Epidemics drawn from the player deck

use pandemic_engine::{
    Action, ActionError, Card, CityId, Color, Game, GameConfig, GameLog, MoveKind, PlayerId, ResumePoint,
    RulesEngine, ScriptedRng, TurnPhase,
};

const P1: PlayerId = PlayerId::new(0);
const P2: PlayerId = PlayerId::new(1);

fn clean_game(config: GameConfig) -> (Game<ScriptedRng>, GameLog) {
    let mut log = GameLog::new();
    let config = config.with_initial_infections(Vec::new());
    let game = Game::setup(config, ScriptedRng::identity(), &mut log).unwrap();
    (game, log)
}

fn id(game: &Game<ScriptedRng>, name: &str) -> CityId {
    game.board().city_id(name).unwrap()
}

fn blue(game: &Game<ScriptedRng>, name: &str) -> u8 {
    game.board().city(id(game, name)).unwrap().cubes(Color::Blue)
}

/// Test a plain end of turn.
#[test]
fn test_end_turn() {
    let (mut game, mut log) = clean_game(GameConfig::new(2));
    let washington = id(&game, "Washington");
    game.move_to(washington, MoveKind::Basic, &mut log).unwrap();

    game.end_turn(&mut log).unwrap();

    // Paris and Essen drawn
    let p1 = game.player(P1).unwrap();
    assert_eq!(p1.hand_size(), 6);
    assert!(p1.has(Card::City(id(&game, "Paris"))));
    assert!(p1.has(Card::City(id(&game, "Essen"))));
    assert_eq!(p1.moves_remaining, 4);
    assert_eq!(game.decks().player_deck.len(), 47);

    // Atlanta and Chicago infected
    assert_eq!(blue(&game, "Atlanta"), 1);
    assert_eq!(blue(&game, "Chicago"), 1);
    assert_eq!(game.decks().infection_discard.len(), 2);
    assert_eq!(game.decks().infection_deck.len(), 46);

    assert_eq!(game.current_player(), P2);
    assert_eq!(game.turn(), 2);
    assert_eq!(game.phase(), TurnPhase::AwaitingAction);
    assert!(log.contains("Turn 2: Player 2 (Researcher)'s turn"));
}

/// Test that seats rotate and history keeps per-turn sequences.
#[test]
fn test_seat_rotation() {
    let (mut game, mut log) = clean_game(GameConfig::new(3));

    for expected in [1, 2, 0, 1] {
        game.end_turn(&mut log).unwrap();
        assert_eq!(game.current_player(), PlayerId::new(expected));
    }
    assert_eq!(game.turn(), 5);

    let records: Vec<_> = game.history().iter().cloned().collect();
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.sequence == 1 && r.action == Action::EndTurn));
    assert_eq!(records[3].player, PlayerId::new(0));
    assert_eq!(records[3].turn, 4);
}

/// Test a hand-limit discard between the draw and infect phases.
#[test]
fn test_hand_limit_after_draw() {
    let (mut game, mut log) = clean_game(GameConfig::new(2));
    game.end_turn(&mut log).unwrap();
    game.end_turn(&mut log).unwrap();

    // Los Angeles and Mexico City bring seat 1 to eight cards
    game.end_turn(&mut log).unwrap();
    assert_eq!(
        game.phase(),
        TurnPhase::PendingDiscard {
            player: P1,
            resume: ResumePoint::InfectPhase
        }
    );
    assert_eq!(game.player(P1).unwrap().hand_size(), 8);
    assert_eq!(game.current_player(), P1);
    assert_eq!(game.decks().infection_deck.len(), 44);
    assert!(log.contains("must discard 1 card"));

    let washington = id(&game, "Washington");
    assert_eq!(
        game.move_to(washington, MoveKind::Basic, &mut log),
        Err(ActionError::DiscardPending { player: P1 })
    );

    let los_angeles = Card::City(id(&game, "Los Angeles"));
    game.discard(P1, los_angeles, &mut log).unwrap();

    // The suspended infect phase ran: Washington and San Francisco
    assert_eq!(blue(&game, "Washington"), 1);
    assert_eq!(blue(&game, "San Francisco"), 1);
    assert_eq!(game.player(P1).unwrap().hand_size(), 7);
    assert_eq!(game.current_player(), P2);
    assert_eq!(game.turn(), 4);
    assert_eq!(game.acting_player(), Some(P2));
}

/// Test an epidemic drawn at the end of the sixth turn.
#[test]
fn test_epidemic_from_player_deck() {
    let (mut game, mut log) = clean_game(GameConfig::new(2).with_hand_limit(20));
    for _ in 0..5 {
        game.end_turn(&mut log).unwrap();
    }
    assert_eq!(game.infection_rate_index(), 0);

    // Buenos Aires and the first epidemic
    game.end_turn(&mut log).unwrap();

    assert_eq!(game.infection_rate_index(), 1);
    assert!(game.decks().player_discard.contains(Card::Epidemic));
    assert_eq!(game.player(P2).unwrap().hand_size(), 9);
    assert!(!game.player(P2).unwrap().has(Card::Epidemic));

    let sydney = id(&game, "Sydney");
    assert_eq!(game.board().city(sydney).unwrap().cubes(Color::Red), 3);

    // The intensified discard pile came back on top: Atlanta and Chicago again
    assert_eq!(blue(&game, "Atlanta"), 2);
    assert_eq!(blue(&game, "Chicago"), 2);
    assert_eq!(blue(&game, "Essen"), 1);
    assert_eq!(game.decks().infection_discard.len(), 2);
    assert_eq!(game.decks().infection_deck.len(), 46);

    assert_eq!(game.current_player(), P1);
    assert_eq!(game.turn(), 7);
    assert!(!game.is_over());
}

/// Test that infect phases speed up with the infection rate table.
#[test]
fn test_infection_rate_track() {
    let config = GameConfig::new(2).with_infection_rates(vec![1, 3]);
    let (mut game, mut log) = clean_game(config);
    assert_eq!(game.infection_rate(), 1);

    game.end_turn(&mut log).unwrap();
    assert_eq!(game.decks().infection_discard.len(), 1);

    game.resolve_epidemic_card(&mut log).unwrap();
    assert_eq!(game.infection_rate(), 3);
    game.resolve_epidemic_card(&mut log).unwrap();
    // Past the end of the table the last rate holds
    assert_eq!(game.infection_rate(), 3);

    let before = game.decks().infection_deck.len();
    game.end_turn(&mut log).unwrap();
    assert_eq!(game.decks().infection_deck.len(), before - 3);
}
