use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seabattle::{Board, BoardError, BoardState, CellState, BOARD_SIZE};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.auto_place(&mut rng).unwrap();
    let shots = rng.random_range(0..30);
    for _ in 0..shots {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        let _ = board.shoot(row, col);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn auto_placed_fleet_is_always_valid(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.auto_place(&mut rng).unwrap();
        prop_assert_eq!(board.validate_fleet(), Ok(()));
        prop_assert_eq!(board.ships().count(), 20);
        prop_assert_eq!(board.ships_remaining(), 10);
    }

    #[test]
    fn shoot_is_not_repeatable(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.auto_place(&mut rng).unwrap();
        let before = BoardState::from(&board);
        board.shoot(row, col).unwrap();
        let after = BoardState::from(&board);
        let err = board.shoot(row, col).unwrap_err();
        prop_assert_eq!(err, BoardError::AlreadyResolved { row, col });
        prop_assert_eq!(BoardState::from(&board), after);
        prop_assert_ne!(before, after);
    }

    #[test]
    fn cells_never_revert(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        for _ in 0..40 {
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            let before = board.cell(row, col);
            let _ = board.shoot(row, col);
            let after = board.cell(row, col);
            match before {
                CellState::Hit | CellState::Miss => prop_assert_eq!(before, after),
                CellState::Ship => prop_assert!(matches!(after, CellState::Ship | CellState::Hit)),
                CellState::Empty => prop_assert!(matches!(after, CellState::Empty | CellState::Miss)),
            }
        }
    }

    #[test]
    fn sweeping_the_board_sinks_everything(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.auto_place(&mut rng).unwrap();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                // outline clearing may already have resolved this cell
                let _ = board.shoot(row, col);
            }
        }
        prop_assert!(!board.has_ships_left());
        prop_assert_eq!(board.ships_remaining(), 0);
        prop_assert_eq!(board.hits().count(), 20);
    }

    #[test]
    fn board_state_roundtrip(seed in any::<u64>()) {
        let board = random_board(seed);
        let state = BoardState::from(&board);
        let restored: Board = state.into();
        prop_assert_eq!(BoardState::from(&restored), state);
    }
}
