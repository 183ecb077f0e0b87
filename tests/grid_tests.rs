use broadside::{CellStatus, Coordinate, Grid, GridError};

#[test]
fn test_get_and_set_round_trip() {
    let mut grid = Grid::new(4, 3, CellStatus::Open);
    let coord = Coordinate::new(2, 1);
    assert!(grid.get(coord).unwrap().is_open());
    grid.set(coord, CellStatus::Hit).unwrap();
    assert_eq!(*grid.get(coord).unwrap(), CellStatus::Hit);
    // neighbors are untouched
    assert!(grid.get(Coordinate::new(1, 1)).unwrap().is_open());
    assert!(grid.get(Coordinate::new(2, 2)).unwrap().is_open());
}

#[test]
fn test_out_of_bounds_is_an_error_not_a_panic() {
    let mut grid = Grid::new(4, 3, 0u32);
    let coord = Coordinate::new(4, 0);
    assert!(!grid.in_bounds(coord));
    let expected = GridError::OutOfBounds {
        col: 4,
        row: 0,
        width: 4,
        height: 3,
    };
    assert_eq!(grid.get(coord).unwrap_err(), expected);
    assert_eq!(grid.set(coord, 7).unwrap_err(), expected);
    // row overflow too
    assert!(grid.get(Coordinate::new(0, 3)).is_err());
    // the corner just inside is fine
    assert!(grid.in_bounds(Coordinate::new(3, 2)));
    assert!(grid.get(Coordinate::new(3, 2)).is_ok());
}

#[test]
fn test_coords_cover_the_grid_row_major() {
    let grid = Grid::new(3, 2, ());
    let coords: Vec<Coordinate> = grid.coords().collect();
    assert_eq!(coords.len(), 6);
    assert_eq!(coords[0], Coordinate::new(0, 0));
    assert_eq!(coords[2], Coordinate::new(2, 0));
    assert_eq!(coords[3], Coordinate::new(0, 1));
    assert_eq!(coords[5], Coordinate::new(2, 1));
}

#[test]
fn test_same_line() {
    let center = Coordinate::new(3, 4);
    assert!(center.same_line(&Coordinate::new(7, 4)));
    assert!(center.same_line(&Coordinate::new(3, 0)));
    assert!(center.same_line(&center));
    assert!(!center.same_line(&Coordinate::new(4, 5)));
}

#[test]
fn test_cell_status_segment_blocking() {
    assert!(CellStatus::Open.is_open());
    assert!(!CellStatus::Open.blocks_segment());
    // a hit still admits segments through it
    assert!(!CellStatus::Hit.blocks_segment());
    assert!(CellStatus::Miss.blocks_segment());
    assert!(CellStatus::Sunk.blocks_segment());
    assert_eq!(CellStatus::default(), CellStatus::Open);
}

#[test]
fn test_coordinate_display() {
    assert_eq!(Coordinate::new(3, 4).to_string(), "(3, 4)");
}
