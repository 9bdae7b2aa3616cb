use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, FleetError, Game, GameError, GamePhase, Orientation, ShotResult, Turn, Winner,
};

fn place_standard_fleet(board: &mut Board) {
    board.place_ship(0, 0, 4, Orientation::Horizontal).unwrap();
    board.place_ship(0, 5, 3, Orientation::Horizontal).unwrap();
    board.place_ship(2, 0, 3, Orientation::Horizontal).unwrap();
    board.place_ship(2, 5, 2, Orientation::Horizontal).unwrap();
    board.place_ship(4, 0, 2, Orientation::Horizontal).unwrap();
    board.place_ship(4, 3, 2, Orientation::Horizontal).unwrap();
    board.place_ship(6, 0, 1, Orientation::Horizontal).unwrap();
    board.place_ship(6, 2, 1, Orientation::Horizontal).unwrap();
    board.place_ship(6, 4, 1, Orientation::Horizontal).unwrap();
    board.place_ship(6, 6, 1, Orientation::Horizontal).unwrap();
}

#[test]
fn test_start_requires_valid_fleet() {
    let mut game = Game::new();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        game.start(&mut rng),
        Err(GameError::Fleet(FleetError::BadComposition))
    );
    assert_eq!(game.phase(), GamePhase::Placement);

    place_standard_fleet(game.human_board_mut());
    game.start(&mut rng).unwrap();
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.turn(), Turn::Human);
    // the computer fleet was auto-placed and is legal
    assert_eq!(game.computer_board().validate_fleet(), Ok(()));

    // starting twice is a phase error
    assert_eq!(game.start(&mut rng), Err(GameError::WrongPhase));
}

#[test]
fn test_shot_before_start_is_rejected() {
    let mut game = Game::new();
    assert_eq!(game.human_shot(0, 0), Err(GameError::WrongPhase));
}

#[test]
fn test_hit_grants_extra_turn_and_miss_passes() {
    let mut game = Game::new();
    let mut rng = SmallRng::seed_from_u64(7);
    place_standard_fleet(game.human_board_mut());
    game.start(&mut rng).unwrap();

    // cheat: read the hidden fleet so the test can hit on purpose
    let ship_cells: Vec<(usize, usize)> = game.computer_board().ships().iter().collect();
    let (row, col) = ship_cells[0];
    let result = game.human_shot(row, col).unwrap();
    assert!(matches!(result, ShotResult::Hit | ShotResult::Sunk));
    assert_eq!(game.turn(), Turn::Human, "a hit must keep the turn");

    // find a guaranteed miss and fire it
    let misses: Vec<(usize, usize)> = (!game.computer_board().ships()
        & !game.computer_board().shots())
    .iter()
    .collect();
    let (row, col) = misses[0];
    assert_eq!(game.human_shot(row, col).unwrap(), ShotResult::Miss);
    assert_eq!(game.turn(), Turn::Computer);

    // out of turn now
    assert_eq!(game.human_shot(9, 9), Err(GameError::NotYourTurn));

    let shots = game.computer_turn(&mut rng).unwrap();
    assert!(!shots.is_empty());
    if game.phase() == GamePhase::InProgress {
        assert_eq!(game.turn(), Turn::Human);
        assert_eq!(shots.last().unwrap().1, ShotResult::Miss);
    }
}

#[test]
fn test_human_sweep_wins() {
    let mut game = Game::new();
    let mut rng = SmallRng::seed_from_u64(99);
    place_standard_fleet(game.human_board_mut());
    game.start(&mut rng).unwrap();

    // hitting every deck in a row never yields the turn
    let ship_cells: Vec<(usize, usize)> = game.computer_board().ships().iter().collect();
    for (row, col) in ship_cells {
        if game.phase() != GamePhase::InProgress {
            break;
        }
        assert_eq!(game.turn(), Turn::Human);
        // outline clearing never touches other ships' decks, so every deck
        // is still shootable when its turn comes
        let result = game.human_shot(row, col).unwrap();
        assert_ne!(result, ShotResult::Miss);
    }
    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.winner(), Some(Winner::Human));
    assert!(!game.computer_board().has_ships_left());
}

#[test]
fn test_full_game_runs_to_completion() {
    let mut game = Game::new();
    let mut rng = SmallRng::seed_from_u64(2024);
    place_standard_fleet(game.human_board_mut());
    game.start(&mut rng).unwrap();

    // human plays a simple row-major sweep; the computer uses its engine
    let mut cursor = 0;
    let mut guard = 0;
    while game.phase() == GamePhase::InProgress {
        guard += 1;
        assert!(guard < 500, "game did not terminate");
        match game.turn() {
            Turn::Human => {
                let (row, col) = (cursor / 10, cursor % 10);
                cursor += 1;
                if game.computer_board().shootable(row, col) {
                    game.human_shot(row, col).unwrap();
                }
            }
            Turn::Computer => {
                game.computer_turn(&mut rng).unwrap();
            }
        }
    }
    assert!(game.winner().is_some());
}

#[test]
fn test_snapshot_roundtrip_preserves_session() {
    let mut game = Game::new();
    let mut rng = SmallRng::seed_from_u64(5);
    place_standard_fleet(game.human_board_mut());
    game.start(&mut rng).unwrap();
    let misses: Vec<(usize, usize)> = (!game.computer_board().ships()).iter().collect();
    game.human_shot(misses[0].0, misses[0].1).unwrap();

    let snapshot = game.snapshot();
    let mut restored = Game::from_snapshot(snapshot);
    assert_eq!(restored.phase(), GamePhase::InProgress);
    assert_eq!(restored.turn(), Turn::Computer);
    assert_eq!(restored.snapshot(), snapshot);

    // the restored session keeps playing
    restored.computer_turn(&mut rng).unwrap();
}

#[test]
fn test_reset_returns_to_placement() {
    let mut game = Game::new();
    let mut rng = SmallRng::seed_from_u64(3);
    place_standard_fleet(game.human_board_mut());
    game.start(&mut rng).unwrap();

    game.reset();
    assert_eq!(game.phase(), GamePhase::Placement);
    assert_eq!(game.turn(), Turn::Human);
    assert!(game.human_board().ships().is_empty());
    assert!(game.computer_board().ships().is_empty());
}
