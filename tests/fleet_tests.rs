use seabattle::{Board, FleetError, Orientation};

/// Standard layout used across the fleet tests: every ship straight, nothing
/// touching.
fn standard_board() -> Board {
    let mut board = Board::new();
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
    board
}

#[test]
fn test_standard_fleet_is_valid() {
    assert_eq!(standard_board().validate_fleet(), Ok(()));
}

#[test]
fn test_empty_board_is_wrong_composition() {
    assert_eq!(
        Board::new().validate_fleet(),
        Err(FleetError::BadComposition)
    );
}

#[test]
fn test_partial_fleet_is_wrong_composition() {
    let mut board = Board::new();
    board.place_ship(0, 0, 4, Orientation::Horizontal).unwrap();
    board.place_ship(2, 0, 3, Orientation::Horizontal).unwrap();
    assert_eq!(board.validate_fleet(), Err(FleetError::BadComposition));
}

#[test]
fn test_diagonal_contact_is_reported() {
    let mut board = standard_board();
    // drag a submarine diagonally next to the battleship's last deck
    board.toggle_ship_cell(6, 6).unwrap();
    board.toggle_ship_cell(1, 4).unwrap();
    assert!(matches!(
        board.validate_fleet(),
        Err(FleetError::DiagonalContact { .. })
    ));
}

#[test]
fn test_bent_ship_is_rejected() {
    let mut board = standard_board();
    // grow a corner off the 4-ship; the bend's corner cells touch diagonally,
    // so the adjacency scan reports it
    board.toggle_ship_cell(6, 6).unwrap();
    board.toggle_ship_cell(1, 3).unwrap();
    assert!(board.validate_fleet().is_err());
}

#[test]
fn test_composition_with_right_total_but_wrong_sizes() {
    // twenty decks, but two 4-ships and none of the right mix
    let mut board = Board::new();
    board.place_ship(0, 0, 4, Orientation::Horizontal).unwrap();
    board.place_ship(2, 0, 4, Orientation::Horizontal).unwrap();
    board.place_ship(4, 0, 4, Orientation::Horizontal).unwrap();
    board.place_ship(6, 0, 4, Orientation::Horizontal).unwrap();
    board.place_ship(8, 0, 4, Orientation::Horizontal).unwrap();
    assert_eq!(board.validate_fleet(), Err(FleetError::BadComposition));
}

#[test]
fn test_validation_reasons_render() {
    assert_eq!(
        FleetError::BadComposition.to_string(),
        "incorrect fleet composition"
    );
    assert!(FleetError::DiagonalContact { row: 1, col: 4 }
        .to_string()
        .contains("must not touch diagonally"));
    assert!(FleetError::NotStraight { row: 0, col: 0 }
        .to_string()
        .contains("straight line"));
}
