//! Event card and role ability tests.
//!
//! Event games use a scripted shuffle that reverses the player deck, so the
//! five event cards are dealt first: seat 1 (Scientist) holds Government
//! Grant, Forecast, Airlift and Resilient Population; seat 2 (Researcher)
//! holds One Quiet Night, Sydney, Jakarta and Ho Chi Minh City.

use pandemic_engine::{
    Action, ActionError, Card, CityId, Color, EventKind, EventPlay, Game, GameConfig, GameLog, InfectionOutcome,
    MoveKind, PlayerId, Role, RulesEngine, ScriptedRng, ShareDirection, TurnPhase,
};

const P1: PlayerId = PlayerId::new(0);
const P2: PlayerId = PlayerId::new(1);

/// Fisher-Yates picks that reverse the 53-card player deck. The infection
/// deck and everything after it stay unshuffled.
fn reversed_player_deck() -> ScriptedRng {
    ScriptedRng::new(0..26)
}

fn event_game(config: GameConfig) -> (Game<ScriptedRng>, GameLog) {
    let mut log = GameLog::new();
    let game = Game::setup(config, reversed_player_deck(), &mut log).unwrap();
    (game, log)
}

fn plain_game(config: GameConfig) -> (Game<ScriptedRng>, GameLog) {
    let mut log = GameLog::new();
    let game = Game::setup(config, ScriptedRng::identity(), &mut log).unwrap();
    (game, log)
}

fn id(game: &Game<ScriptedRng>, name: &str) -> CityId {
    game.board().city_id(name).unwrap()
}

fn blue(game: &Game<ScriptedRng>, name: &str) -> u8 {
    game.board().city(id(game, name)).unwrap().cubes(Color::Blue)
}

// === Events ===

/// Test the scripted deal.
#[test]
fn test_events_dealt_first() {
    let (game, _) = event_game(GameConfig::new(2));
    let p1 = game.player(P1).unwrap();
    let p2 = game.player(P2).unwrap();

    for kind in [
        EventKind::GovernmentGrant,
        EventKind::Forecast,
        EventKind::Airlift,
        EventKind::ResilientPopulation,
    ] {
        assert!(p1.holds_event(kind));
    }
    assert!(p2.holds_event(EventKind::OneQuietNight));
    assert!(p2.has(Card::City(id(&game, "Sydney"))));
}

/// Test One Quiet Night, played by a seat whose turn it is not.
#[test]
fn test_one_quiet_night() {
    let (mut game, mut log) = event_game(GameConfig::new(2));

    game.play_event(P2, EventPlay::OneQuietNight, &mut log).unwrap();

    assert!(game.skip_next_infection_step());
    assert!(game.decks().player_discard.contains(Card::Event(EventKind::OneQuietNight)));
    assert_eq!(game.player(P2).unwrap().hand_size(), 3);
    assert_eq!(game.current().moves_remaining, 4);
    assert_eq!(game.history().last().map(|r| r.player), Some(P2));

    game.end_turn(&mut log).unwrap();

    assert_eq!(game.decks().infection_deck.len(), 39);
    assert_eq!(game.decks().infection_discard.len(), 9);
    assert!(!game.skip_next_infection_step());
    assert!(log.contains("infect phase is skipped"));
    assert_eq!(game.current_player(), P2);
}

/// Test Resilient Population removing a card from the infection discard.
#[test]
fn test_resilient_population() {
    let (mut game, mut log) = event_game(GameConfig::new(2));
    let sydney = id(&game, "Sydney");
    let chicago = id(&game, "Chicago");

    assert_eq!(
        game.play_event(P1, EventPlay::ResilientPopulation { city: sydney }, &mut log),
        Err(ActionError::MissingCard {
            card: Card::Infection(sydney)
        })
    );

    game.play_event(P1, EventPlay::ResilientPopulation { city: chicago }, &mut log)
        .unwrap();

    assert!(game.decks().removed.contains(Card::Infection(chicago)));
    assert!(!game.decks().infection_discard.contains(Card::Infection(chicago)));
    assert_eq!(game.decks().infection_discard.len(), 8);
    assert!(game
        .decks()
        .player_discard
        .contains(Card::Event(EventKind::ResilientPopulation)));

    // The card is gone
    assert_eq!(
        game.play_event(P1, EventPlay::ResilientPopulation { city: id(&game, "Atlanta") }, &mut log),
        Err(ActionError::MissingCard {
            card: Card::Event(EventKind::ResilientPopulation)
        })
    );
}

/// Test Airlift moving another seat's pawn for free.
#[test]
fn test_airlift() {
    let (mut game, mut log) = event_game(GameConfig::new(2));
    let atlanta = id(&game, "Atlanta");
    let sydney = id(&game, "Sydney");

    assert_eq!(
        game.play_event(P1, EventPlay::Airlift { player: P2, city: atlanta }, &mut log),
        Err(ActionError::SameCity("Atlanta".to_string()))
    );
    assert_eq!(
        game.play_event(P2, EventPlay::Airlift { player: P2, city: sydney }, &mut log),
        Err(ActionError::MissingCard {
            card: Card::Event(EventKind::Airlift)
        })
    );

    game.play_event(P1, EventPlay::Airlift { player: P2, city: sydney }, &mut log)
        .unwrap();

    assert_eq!(game.player(P2).unwrap().location, sydney);
    assert_eq!(game.player(P1).unwrap().location, atlanta);
    assert_eq!(game.current().moves_remaining, 4);
    assert!(log.contains("was airlifted to Sydney"));
}

/// Test Forecast rearranging the top six infection cards.
#[test]
fn test_forecast() {
    let (mut game, mut log) = event_game(GameConfig::new(2));
    let top = game.forecast_peek();
    let names: Vec<&str> = top.iter().map(|&c| game.board().name(c)).collect();
    assert_eq!(names, vec!["Essen", "Milan", "St. Petersburg", "Los Angeles", "Mexico City", "Miami"]);

    // Not a permutation of the top six
    let short: Vec<CityId> = top[..5].to_vec();
    assert_eq!(
        game.play_event(
            P1,
            EventPlay::Forecast {
                order: short.into_iter().collect()
            },
            &mut log
        ),
        Err(ActionError::InvalidForecast(6))
    );
    let mut wrong = top.clone();
    wrong[0] = id(&game, "Sydney");
    assert_eq!(
        game.play_event(
            P1,
            EventPlay::Forecast {
                order: wrong.into_iter().collect()
            },
            &mut log
        ),
        Err(ActionError::InvalidForecast(6))
    );

    let mut reversed = top.clone();
    reversed.reverse();
    game.play_event(
        P1,
        EventPlay::Forecast {
            order: reversed.iter().copied().collect(),
        },
        &mut log,
    )
    .unwrap();

    assert_eq!(game.forecast_peek(), reversed);
    assert_eq!(game.decks().infection_deck.len(), 39);

    // Miami is now drawn first
    game.end_turn(&mut log).unwrap();
    assert_eq!(game.board().city(id(&game, "Miami")).unwrap().cubes(Color::Yellow), 1);
    assert_eq!(game.board().city(id(&game, "Mexico City")).unwrap().cubes(Color::Yellow), 1);
    assert_eq!(blue(&game, "Essen"), 0);
}

/// Test Government Grant building without a card or an action.
#[test]
fn test_government_grant() {
    let (mut game, mut log) = event_game(GameConfig::new(2));
    let atlanta = id(&game, "Atlanta");
    let sydney = id(&game, "Sydney");

    assert_eq!(
        game.play_event(
            P1,
            EventPlay::GovernmentGrant {
                city: atlanta,
                relocate_from: None
            },
            &mut log
        ),
        Err(ActionError::StationAlreadyPresent("Atlanta".to_string()))
    );

    game.play_event(
        P1,
        EventPlay::GovernmentGrant {
            city: sydney,
            relocate_from: None,
        },
        &mut log,
    )
    .unwrap();

    assert!(game.board().has_research_station(sydney));
    assert_eq!(game.research_station_pool(), 6);
    assert_eq!(game.current().moves_remaining, 4);
}

/// Test that events may be played while a discard is pending.
#[test]
fn test_event_resolves_pending_discard() {
    let (mut game, mut log) = event_game(GameConfig::new(2).with_hand_limit(5));
    let sydney = id(&game, "Sydney");

    game.end_turn(&mut log).unwrap();
    assert_eq!(game.pending_discard(), Some(P1));
    assert_eq!(game.treat(Color::Blue, &mut log), Err(ActionError::DiscardPending { player: P1 }));

    let legal = game.legal_actions();
    assert!(legal.contains(&Action::PlayEvent {
        holder: P1,
        play: EventPlay::Airlift { player: P1, city: sydney }
    }));
    assert!(legal.contains(&Action::PlayEvent {
        holder: P2,
        play: EventPlay::OneQuietNight
    }));

    // Playing a card brings the hand back to the limit
    game.play_event(P1, EventPlay::Airlift { player: P1, city: sydney }, &mut log)
        .unwrap();

    assert_eq!(game.phase(), TurnPhase::AwaitingAction);
    assert_eq!(game.player(P1).unwrap().location, sydney);
    assert_eq!(game.decks().infection_discard.len(), 11);
    assert_eq!(game.current_player(), P2);
}

// === Roles ===

/// Test the Contingency Planner storing and replaying an event.
#[test]
fn test_contingency_planner() {
    let (mut game, mut log) = event_game(GameConfig::new(2).with_roles([Role::ContingencyPlanner]));
    let chicago = id(&game, "Chicago");
    let sydney = id(&game, "Sydney");
    let airlift = Card::Event(EventKind::Airlift);

    assert_eq!(
        game.take_event(EventKind::Airlift, &mut log),
        Err(ActionError::MissingCard { card: airlift })
    );

    game.play_event(P1, EventPlay::Airlift { player: P2, city: chicago }, &mut log)
        .unwrap();
    game.take_event(EventKind::Airlift, &mut log).unwrap();

    let planner = game.current();
    assert_eq!(planner.additional_card, Some(EventKind::Airlift));
    assert_eq!(planner.moves_remaining, 3);
    assert_eq!(planner.hand_size(), 3);
    assert!(!game.decks().player_discard.contains(airlift));

    // One stored event at a time
    game.play_event(
        P1,
        EventPlay::GovernmentGrant {
            city: chicago,
            relocate_from: None,
        },
        &mut log,
    )
    .unwrap();
    assert!(matches!(
        game.take_event(EventKind::GovernmentGrant, &mut log),
        Err(ActionError::NotApplicable(_))
    ));

    // A stored event leaves the game once played
    game.play_event(P1, EventPlay::Airlift { player: P2, city: sydney }, &mut log)
        .unwrap();
    assert_eq!(game.player(P2).unwrap().location, sydney);
    assert_eq!(game.current().additional_card, None);
    assert!(game.decks().removed.contains(airlift));
    assert!(!game.decks().player_discard.contains(airlift));
}

/// Test that only the Contingency Planner stores events.
#[test]
fn test_take_event_role() {
    let (mut game, mut log) = event_game(GameConfig::new(2));
    assert_eq!(
        game.take_event(EventKind::Airlift, &mut log),
        Err(ActionError::RoleCannot { role: Role::Scientist })
    );
}

/// Test the Medic clearing cured colors and blocking their placement.
#[test]
fn test_medic() {
    let (mut game, mut log) = plain_game(GameConfig::new(2).with_roles([Role::Scientist, Role::Medic]));
    let atlanta = id(&game, "Atlanta");
    let chicago = id(&game, "Chicago");

    // The Scientist cures blue while the Medic stands in Atlanta
    game.cure(Color::Blue, &mut log).unwrap();
    assert_eq!(blue(&game, "Atlanta"), 0);
    assert_eq!(game.diseases().remaining(Color::Blue), 9);
    assert_eq!(game.infect(atlanta, Color::Blue, 1, &mut log), Ok(InfectionOutcome::Protected));
    assert_eq!(game.infect(atlanta, Color::Red, 1, &mut log), Ok(InfectionOutcome::Placed(1)));

    game.end_turn(&mut log).unwrap();

    // Arriving in Chicago clears its three blue cubes without an action
    game.move_to(chicago, MoveKind::Basic, &mut log).unwrap();
    assert_eq!(blue(&game, "Chicago"), 0);
    assert_eq!(game.current().moves_remaining, 3);
    assert_eq!(game.infect(atlanta, Color::Blue, 1, &mut log), Ok(InfectionOutcome::Placed(1)));
    assert_eq!(game.infect(chicago, Color::Blue, 1, &mut log), Ok(InfectionOutcome::Protected));
}

/// Test the Quarantine Specialist's guard following the pawn.
#[test]
fn test_quarantine_specialist_moves() {
    let (mut game, mut log) = plain_game(GameConfig::new(2).with_roles([Role::QuarantineSpecialist]));
    let protected = |game: &Game<ScriptedRng>, name: &str| game.board().city(id(game, name)).unwrap().is_protected;

    for name in ["Atlanta", "Chicago", "Miami", "Washington"] {
        assert!(protected(&game, name));
    }
    assert!(!protected(&game, "New York"));

    game.move_to(id(&game, "Washington"), MoveKind::Basic, &mut log)
        .unwrap();

    for name in ["Atlanta", "Miami", "Washington", "New York", "Montreal"] {
        assert!(protected(&game, name));
    }
    assert!(!protected(&game, "Chicago"));
    assert_eq!(
        game.infect(id(&game, "New York"), Color::Blue, 1, &mut log),
        Ok(InfectionOutcome::Protected)
    );
}

/// Test the Dispatcher moving another pawn with its own cards.
#[test]
fn test_dispatcher() {
    let (mut game, mut log) = plain_game(GameConfig::new(2).with_roles([Role::Dispatcher]));
    let atlanta = id(&game, "Atlanta");
    let washington = id(&game, "Washington");
    let new_york = id(&game, "New York");

    assert!(matches!(game.set_link(None, &mut log), Err(ActionError::NotApplicable(_))));
    game.set_link(Some(P2), &mut log).unwrap();
    assert_eq!(game.current().moves_remaining, 4);

    game.move_to(washington, MoveKind::Basic, &mut log).unwrap();
    assert_eq!(game.player(P2).unwrap().location, washington);
    assert_eq!(game.player(P1).unwrap().location, atlanta);

    // The Dispatcher's New York card flies the linked pawn
    game.move_to(new_york, MoveKind::Direct, &mut log).unwrap();
    assert_eq!(game.player(P2).unwrap().location, new_york);
    assert!(!game.player(P1).unwrap().has(Card::City(new_york)));
    assert_eq!(game.player(P2).unwrap().hand_size(), 4);

    // Back to its own pawn, which may join any other pawn
    game.set_link(None, &mut log).unwrap();
    game.move_to(new_york, MoveKind::Basic, &mut log).unwrap();
    assert_eq!(game.player(P1).unwrap().location, new_york);
    assert_eq!(game.current().moves_remaining, 1);

    // The link ends with the turn
    game.set_link(Some(P2), &mut log).unwrap();
    game.end_turn(&mut log).unwrap();
    assert_eq!(game.player(P1).unwrap().link, None);
}

/// Test that only the Dispatcher links pawns.
#[test]
fn test_link_role() {
    let (mut game, mut log) = plain_game(GameConfig::new(2));
    assert_eq!(
        game.set_link(Some(P2), &mut log),
        Err(ActionError::RoleCannot { role: Role::Scientist })
    );
}

/// Test the Researcher giving a card that is not the current city's.
#[test]
fn test_researcher_gives_any_card() {
    let (mut game, mut log) = plain_game(GameConfig::new(2));
    game.end_turn(&mut log).unwrap();

    let london = Card::City(id(&game, "London"));
    game.share(london, P1, ShareDirection::Give, &mut log)
        .unwrap();
    assert!(game.player(P1).unwrap().has(london));
}
