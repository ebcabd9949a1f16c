use adaptive_battleship::{
    Board, Cell, Coord, GameError, Orientation, PlacementError, PlacementQueue, PlacementState,
    PlacementStep, Ship, ShipType, BOARD_SIZE, FLEET, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const CARRIER: ShipType = FLEET[0];

fn occupied(board: &Board) -> usize {
    let mut n = 0;
    for row in 0..board.size() {
        for col in 0..board.size() {
            if board.cell(Coord::new(col, row)).unwrap() != Cell::Empty {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn carrier_at_origin_occupies_first_five_columns() {
    let ship = Ship::new(CARRIER, Coord::new(0, 0), Orientation::Horizontal);
    assert_eq!(
        ship.occupied_cells(),
        vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(3, 0),
            Coord::new(4, 0)
        ]
    );
    let mut board = Board::new(BOARD_SIZE);
    let id = board.place(ship).unwrap();
    for col in 0..5 {
        assert_eq!(board.cell(Coord::new(col, 0)).unwrap(), Cell::Ship(id));
    }
    assert_eq!(board.cell(Coord::new(5, 0)).unwrap(), Cell::Empty);
    assert_eq!(occupied(&board), 5);
}

#[test]
fn vertical_cells_increase_by_row() {
    let ship = Ship::new(ShipType::new("skiff", 3), Coord::new(4, 2), Orientation::Vertical);
    assert_eq!(
        ship.occupied_cells(),
        vec![Coord::new(4, 2), Coord::new(4, 3), Coord::new(4, 4)]
    );
}

#[test]
fn cannot_place_past_right_or_bottom_edge() {
    let board = Board::new(BOARD_SIZE);
    let fits = Ship::new(CARRIER, Coord::new(5, 9), Orientation::Horizontal);
    let too_far = Ship::new(CARRIER, Coord::new(6, 9), Orientation::Horizontal);
    assert!(board.can_place(&fits));
    assert!(!board.can_place(&too_far));
    assert_eq!(
        board.check_placement(&too_far),
        Err(PlacementError::OutOfBounds)
    );

    assert!(board.can_place(&Ship::new(CARRIER, Coord::new(9, 5), Orientation::Vertical)));
    assert!(!board.can_place(&Ship::new(CARRIER, Coord::new(9, 6), Orientation::Vertical)));
}

#[test]
fn anchor_off_board_is_rejected_without_overflow() {
    let board = Board::new(BOARD_SIZE);
    assert!(!board.can_place(&Ship::new(CARRIER, Coord::new(10, 0), Orientation::Vertical)));
    assert!(!board.can_place(&Ship::new(
        CARRIER,
        Coord::new(usize::MAX, 0),
        Orientation::Horizontal
    )));
    assert!(!board.can_place(&Ship::new(
        CARRIER,
        Coord::new(0, usize::MAX - 1),
        Orientation::Vertical
    )));
}

#[test]
fn rejected_placement_leaves_board_untouched() {
    let mut board = Board::new(BOARD_SIZE);
    board
        .place(Ship::new(CARRIER, Coord::new(2, 3), Orientation::Horizontal))
        .unwrap();
    // crosses the carrier at (4, 3)
    let crossing = Ship::new(FLEET[1], Coord::new(4, 0), Orientation::Vertical);
    assert!(!board.can_place(&crossing));
    assert_eq!(
        board.place(crossing),
        Err(GameError::InvalidPlacement(PlacementError::Overlaps))
    );
    assert_eq!(board.ships().len(), 1);
    assert_eq!(occupied(&board), 5);
    assert_eq!(board.cell(Coord::new(4, 0)).unwrap(), Cell::Empty);
}

#[test]
fn committed_ship_blocks_an_identical_ship() {
    let mut board = Board::new(BOARD_SIZE);
    let ship = Ship::new(FLEET[2], Coord::new(1, 1), Orientation::Vertical);
    assert!(board.can_place(&ship));
    board.place(ship).unwrap();
    assert_eq!(board.check_placement(&ship), Err(PlacementError::Overlaps));
}

#[test]
fn random_placement_places_whole_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new(BOARD_SIZE);
    for def in FLEET {
        let id = board.place_random(&mut rng, def).unwrap();
        assert_eq!(board.ship(id).unwrap().length(), def.length());
    }
    assert_eq!(board.ships().len(), FLEET.len());
    assert_eq!(occupied(&board), TOTAL_SHIP_CELLS);
}

#[test]
fn random_placement_finds_the_only_gap() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(2);
    let two = ShipType::new("two", 2);
    board
        .place(Ship::new(two, Coord::new(0, 0), Orientation::Horizontal))
        .unwrap();
    let id = board.place_random(&mut rng, two).unwrap();
    let ship = board.ship(id).unwrap();
    assert_eq!(ship.anchor(), Coord::new(0, 1));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
}

#[test]
fn random_placement_reports_full_board() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(2);
    let two = ShipType::new("two", 2);
    board.place_random(&mut rng, two).unwrap();
    board.place_random(&mut rng, two).unwrap();
    assert_eq!(
        board.place_random(&mut rng, two),
        Err(GameError::InvalidPlacement(PlacementError::NoRoom))
    );
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn second_selection_in_same_column_makes_vertical_ship() {
    let mut board = Board::new(BOARD_SIZE);
    let mut queue = PlacementQueue::new(&FLEET);
    assert_eq!(queue.state(), PlacementState::AwaitingAnchor);
    assert_eq!(queue.current(), Some(CARRIER));

    let step = queue.select(Coord::new(3, 1), &mut board).unwrap();
    assert_eq!(
        step,
        PlacementStep::Anchored {
            ship_type: CARRIER,
            anchor: Coord::new(3, 1)
        }
    );
    assert_eq!(
        queue.state(),
        PlacementState::AwaitingEnd {
            anchor: Coord::new(3, 1)
        }
    );
    assert!(board.ships().is_empty());

    match queue.select(Coord::new(3, 5), &mut board).unwrap() {
        PlacementStep::Placed { ship, .. } => {
            assert_eq!(ship.orientation(), Orientation::Vertical);
            assert_eq!(ship.anchor(), Coord::new(3, 1));
        }
        other => panic!("unexpected step {:?}", other),
    }
    assert_eq!(queue.current(), Some(FLEET[1]));
    assert_eq!(queue.state(), PlacementState::AwaitingAnchor);
}

#[test]
fn length_comes_from_ship_type_not_selection_distance() {
    let mut board = Board::new(BOARD_SIZE);
    let mut queue = PlacementQueue::new(&FLEET[..1]);
    queue.select(Coord::new(0, 0), &mut board).unwrap();
    let step = queue.select(Coord::new(1, 7), &mut board).unwrap();
    let PlacementStep::Placed { ship, .. } = step else {
        panic!("expected placement, got {:?}", step);
    };
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.occupied_cells().len(), 5);
    let anchor_cell = board.cell(Coord::new(0, 0)).unwrap();
    assert_ne!(anchor_cell, Cell::Empty);
    assert_eq!(board.cell(Coord::new(4, 0)).unwrap(), anchor_cell);
    assert_eq!(board.cell(Coord::new(1, 7)).unwrap(), Cell::Empty);
    assert!(queue.is_done());
    assert_eq!(queue.state(), PlacementState::Idle);
}

#[test]
fn overlapping_commit_is_rejected_and_ship_waits_again() {
    let mut board = Board::new(BOARD_SIZE);
    let mut queue = PlacementQueue::new(&FLEET);
    queue.select(Coord::new(0, 0), &mut board).unwrap();
    queue.select(Coord::new(4, 0), &mut board).unwrap();

    // battleship straight down through the carrier
    queue.select(Coord::new(2, 0), &mut board).unwrap();
    let step = queue.select(Coord::new(2, 3), &mut board).unwrap();
    assert_eq!(
        step,
        PlacementStep::Rejected {
            ship_type: FLEET[1],
            reason: PlacementError::Overlaps
        }
    );
    assert_eq!(board.ships().len(), 1);
    assert_eq!(queue.current(), Some(FLEET[1]));
    assert_eq!(queue.state(), PlacementState::AwaitingAnchor);

    queue.select(Coord::new(2, 1), &mut board).unwrap();
    assert!(matches!(
        queue.select(Coord::new(2, 4), &mut board).unwrap(),
        PlacementStep::Placed { .. }
    ));
}

#[test]
fn commit_past_the_edge_is_rejected() {
    let mut board = Board::new(BOARD_SIZE);
    let mut queue = PlacementQueue::new(&FLEET);
    queue.select(Coord::new(8, 0), &mut board).unwrap();
    let step = queue.select(Coord::new(9, 0), &mut board).unwrap();
    assert_eq!(
        step,
        PlacementStep::Rejected {
            ship_type: CARRIER,
            reason: PlacementError::OutOfBounds
        }
    );
    assert!(board.ships().is_empty());
}

#[test]
fn out_of_bounds_selection_changes_nothing() {
    let mut board = Board::new(BOARD_SIZE);
    let mut queue = PlacementQueue::new(&FLEET);
    assert!(matches!(
        queue.select(Coord::new(10, 0), &mut board),
        Err(GameError::OutOfBounds { .. })
    ));
    assert_eq!(queue.state(), PlacementState::AwaitingAnchor);
}

#[test]
fn finished_queue_rejects_input() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new(BOARD_SIZE);
    let mut queue = PlacementQueue::new(&FLEET);
    while !queue.is_done() {
        queue.place_current_random(&mut rng, &mut board).unwrap();
    }
    assert_eq!(board.ships().len(), FLEET.len());
    assert_eq!(
        queue.select(Coord::new(0, 0), &mut board),
        Err(GameError::NotPlacing)
    );
}
