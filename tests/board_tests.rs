use broadside::{
    CellStatus, Coordinate, GameConfig, GameError, ShipType, ShotResult, Board, CLASSIC_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn single_ship_config(length: usize) -> GameConfig {
    GameConfig::new(10, 10, vec![ShipType::new("Cruiser", length)])
}

#[test]
fn test_place_and_fire_to_sink() {
    let config = single_ship_config(3);
    let mut board = Board::new(&config);
    let cells = [
        Coordinate::new(2, 4),
        Coordinate::new(3, 4),
        Coordinate::new(4, 4),
    ];
    board.place_ship(0, &cells).unwrap();

    assert_eq!(board.fire_at(Coordinate::new(2, 4)).unwrap(), ShotResult::Hit);
    assert_eq!(board.fire_at(Coordinate::new(3, 4)).unwrap(), ShotResult::Hit);
    let result = board.fire_at(Coordinate::new(4, 4)).unwrap();
    assert_eq!(result.ship_sunk().unwrap().name(), "Cruiser");

    // every ship cell is marked sunk, not hit
    for cell in cells {
        assert_eq!(board.status(cell).unwrap(), CellStatus::Sunk);
    }
    assert!(board.all_sunk());
}

#[test]
fn test_miss_marks_cell() {
    let config = single_ship_config(3);
    let mut board = Board::new(&config);
    board
        .place_ship(0, &[Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(2, 0)])
        .unwrap();
    assert_eq!(board.fire_at(Coordinate::new(5, 5)).unwrap(), ShotResult::Miss);
    assert_eq!(board.status(Coordinate::new(5, 5)).unwrap(), CellStatus::Miss);
}

#[test]
fn test_fire_twice_fails() {
    let config = single_ship_config(3);
    let mut board = Board::new(&config);
    let target = Coordinate::new(7, 7);
    board.fire_at(target).unwrap();
    assert_eq!(
        board.fire_at(target).unwrap_err(),
        GameError::AlreadyFired(target)
    );
}

#[test]
fn test_non_contiguous_placement_rejected() {
    let config = single_ship_config(2);
    let mut board = Board::new(&config);
    let err = board
        .place_ship(0, &[Coordinate::new(0, 0), Coordinate::new(2, 0)])
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidPlacement { .. }));
}

#[test]
fn test_diagonal_placement_rejected() {
    let config = single_ship_config(2);
    let mut board = Board::new(&config);
    let err = board
        .place_ship(0, &[Coordinate::new(0, 0), Coordinate::new(1, 1)])
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidPlacement { .. }));
}

#[test]
fn test_wrong_cell_count_rejected() {
    let config = single_ship_config(3);
    let mut board = Board::new(&config);
    let err = board
        .place_ship(0, &[Coordinate::new(0, 0), Coordinate::new(1, 0)])
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidPlacement { .. }));
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let config = single_ship_config(3);
    let mut board = Board::new(&config);
    let err = board
        .place_ship(
            0,
            &[Coordinate::new(8, 0), Coordinate::new(9, 0), Coordinate::new(10, 0)],
        )
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidPlacement { .. }));
}

#[test]
fn test_overlapping_placement_rejected() {
    let config = GameConfig::new(
        10,
        10,
        vec![ShipType::new("Cruiser", 3), ShipType::new("Destroyer", 2)],
    );
    let mut board = Board::new(&config);
    board
        .place_ship(0, &[Coordinate::new(2, 2), Coordinate::new(3, 2), Coordinate::new(4, 2)])
        .unwrap();
    let err = board
        .place_ship(1, &[Coordinate::new(3, 1), Coordinate::new(3, 2)])
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidPlacement { .. }));
}

#[test]
fn test_double_placement_rejected() {
    let config = single_ship_config(2);
    let mut board = Board::new(&config);
    board
        .place_ship(0, &[Coordinate::new(0, 0), Coordinate::new(1, 0)])
        .unwrap();
    let err = board
        .place_ship(0, &[Coordinate::new(0, 2), Coordinate::new(1, 2)])
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidPlacement { .. }));
}

#[test]
fn test_random_fleet_placement_no_overlap() {
    let config = GameConfig::classic();
    let mut board = Board::new(&config);
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_fleet_randomly(&mut rng).unwrap();

    let mut occupied = Vec::new();
    for i in 0..CLASSIC_FLEET.len() {
        let ship = board.ship(i).unwrap().expect("ship placed");
        assert_eq!(ship.cells().len(), CLASSIC_FLEET[i].length());
        occupied.extend_from_slice(ship.cells());
    }
    let total: usize = CLASSIC_FLEET.iter().map(|s| s.length()).sum();
    assert_eq!(occupied.len(), total);
    occupied.sort_by_key(|c| (c.row, c.col));
    occupied.dedup();
    assert_eq!(occupied.len(), total, "ships must not overlap");
}

#[test]
fn test_placement_exhausted_on_tiny_board() {
    // six ships cannot fit on a 2x2 board
    let fleet = vec![
        ShipType::new("A", 2),
        ShipType::new("B", 2),
        ShipType::new("C", 2),
        ShipType::new("D", 2),
        ShipType::new("E", 2),
        ShipType::new("F", 2),
    ];
    let config = GameConfig::new(2, 2, fleet);
    let mut board = Board::new(&config);
    let mut rng = SmallRng::seed_from_u64(7);
    let err = board.place_fleet_randomly(&mut rng).unwrap_err();
    assert!(matches!(err, GameError::PlacementExhausted { .. }));
}

#[test]
fn test_remaining_lengths_zero_out_sunk_ships() {
    let config = GameConfig::new(
        10,
        10,
        vec![ShipType::new("Cruiser", 3), ShipType::new("Destroyer", 2)],
    );
    let mut board = Board::new(&config);
    board
        .place_ship(0, &[Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(2, 0)])
        .unwrap();
    board
        .place_ship(1, &[Coordinate::new(0, 5), Coordinate::new(0, 6)])
        .unwrap();
    assert_eq!(board.remaining_ship_lengths(), vec![3, 2]);

    board.fire_at(Coordinate::new(0, 5)).unwrap();
    board.fire_at(Coordinate::new(0, 6)).unwrap();
    assert_eq!(board.remaining_ship_lengths(), vec![3, 0]);
    assert!(!board.all_sunk());
}
