use broadside::{
    span, Board, BoardError, Cell, CellState, ShipType, ShotOutcome, BOARD_SIZE, FLEET,
};

fn cell(label: &str) -> Cell {
    label.parse().unwrap()
}

fn labels(cells: &[Cell]) -> Vec<String> {
    cells.iter().map(Cell::label).collect()
}

#[test]
fn test_patrol_boat_scenario() {
    let mut board = Board::new();
    let patrol = FLEET[4];
    assert_eq!(patrol.length(), 2);

    let sterns = board.possible_stern_cells(cell("A1"), patrol.length());
    assert_eq!(labels(&sterns), vec!["A2", "B1"]);

    let ship = board
        .place_ship_between(patrol, cell("A1"), cell("A2"))
        .unwrap();
    assert_eq!(ship.cells(), &[cell("A1"), cell("A2")]);

    assert_eq!(board.attack(cell("A1")).unwrap().map(|s| s.name()), Some("Patrol Boat"));
    let hit = board.attack(cell("A2")).unwrap().unwrap();
    assert!(hit.is_dead());
    assert_eq!(board.cell_state(cell("A1"), false), CellState::Hit);
    assert_eq!(board.cell_state(cell("A2"), true), CellState::Hit);
    assert!(!board.is_fleet_alive());
}

#[test]
fn test_center_bow_has_four_candidates() {
    let board = Board::new();
    let bow = Cell::new(5, 5);
    let sterns = board.possible_stern_cells(bow, 3);
    assert_eq!(
        sterns,
        vec![Cell::new(5, 3), Cell::new(5, 7), Cell::new(3, 5), Cell::new(7, 5)]
    );
    for stern in sterns {
        let dr = stern.row().abs_diff(bow.row());
        let dc = stern.col().abs_diff(bow.col());
        assert!((dr == 2 && dc == 0) || (dr == 0 && dc == 2));
    }
}

#[test]
fn test_candidates_skip_existing_ships() {
    let mut board = Board::new();
    board
        .place_ship(FLEET[1], span(cell("C1"), cell("C4")))
        .unwrap();

    // Down from A2 would cross C2.
    let sterns = board.possible_stern_cells(cell("A2"), 3);
    assert_eq!(labels(&sterns), vec!["A4"]);

    // Bow on a ship blocks every direction.
    assert!(board.possible_stern_cells(cell("C2"), 3).is_empty());
}

#[test]
fn test_infeasible_bow_in_a_pocket() {
    let mut board = Board::new();
    board.place_ship(FLEET[4], vec![cell("A2"), cell("A3")]).unwrap();
    board.place_ship(FLEET[3], vec![cell("B1"), cell("C1"), cell("D1")]).unwrap();
    assert!(board.possible_stern_cells(cell("A1"), 2).is_empty());
    assert_eq!(
        board.place_ship_between(FLEET[4], cell("A1"), cell("A2")).unwrap_err(),
        BoardError::InfeasiblePlacement
    );
}

#[test]
fn test_candidate_edge_lengths() {
    let board = Board::new();
    assert!(board.possible_stern_cells(cell("E5"), 0).is_empty());
    assert_eq!(board.possible_stern_cells(cell("E5"), 1), vec![cell("E5")]);
    assert!(board.possible_stern_cells(cell("E5"), 11).is_empty());
    assert!(board.possible_stern_cells(Cell::new(11, 1), 2).is_empty());
    assert_eq!(
        labels(&board.possible_stern_cells(cell("J10"), 10)),
        vec!["J1", "A10"]
    );
}

#[test]
fn test_validated_placement_errors() {
    let mut board = Board::new();
    board
        .place_ship_between(FLEET[0], cell("A1"), cell("A5"))
        .unwrap();
    assert_eq!(
        board.place_ship_between(FLEET[1], cell("A3"), cell("D3")).unwrap_err(),
        BoardError::BowUnavailable
    );
    assert_eq!(
        board.place_ship_between(FLEET[1], Cell::new(11, 3), cell("J3")).unwrap_err(),
        BoardError::BowUnavailable
    );
    assert_eq!(
        board.place_ship_between(FLEET[1], cell("B1"), cell("B3")).unwrap_err(),
        BoardError::InvalidStern
    );
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_trusted_placement_allows_overlap() {
    let mut board = Board::new();
    board.place_ship(FLEET[2], span(cell("B2"), cell("B4"))).unwrap();
    board.place_ship(FLEET[3], span(cell("A3"), cell("C3"))).unwrap();
    assert_eq!(board.ships().len(), 2);

    // The first ship placed over a cell takes the hit.
    let hit = board.attack(cell("B3")).unwrap().unwrap();
    assert_eq!(hit.name(), "Submarine");
    assert!(!board.ships()[1].was_hit(cell("B3")));
}

#[test]
fn test_trusted_placement_rejects_off_board_cells() {
    let mut board = Board::new();
    let err = board
        .place_ship(FLEET[4], vec![Cell::new(10, 10), Cell::new(10, 11)])
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds { row: 10, col: 11 });
    assert!(board.ships().is_empty());
}

#[test]
fn test_cell_states() {
    let mut board = Board::new();
    board.place_ship(FLEET[4], span(cell("D4"), cell("D5"))).unwrap();

    assert!(matches!(
        board.cell_state(cell("D4"), true),
        CellState::ShipVisible(ship) if ship.name() == "Patrol Boat"
    ));
    assert_eq!(board.cell_state(cell("D4"), false), CellState::Open);
    assert_eq!(board.cell_state(cell("E4"), true), CellState::Open);

    assert!(board.attack(cell("E4")).unwrap().is_none());
    assert_eq!(board.cell_state(cell("E4"), false), CellState::AttackedMiss);
    assert_eq!(board.cell_state(cell("E4"), true), CellState::AttackedMiss);

    board.attack(cell("D5")).unwrap();
    assert_eq!(board.cell_state(cell("D5"), false), CellState::Hit);
    assert!(!board.is_open_for_bow(cell("E4")));
    assert!(!board.is_open_for_bow(cell("D4")));
    assert!(board.is_open_for_bow(cell("F4")));
}

#[test]
fn test_reattack_is_a_no_op() {
    let mut board = Board::new();
    board.place_ship(FLEET[4], span(cell("A1"), cell("A2"))).unwrap();
    board.attack(cell("A1")).unwrap();
    board.attack(cell("A1")).unwrap();
    board.attack(cell("H8")).unwrap();
    board.attack(cell("H8")).unwrap();
    assert_eq!(board.attack_count(), 2);
    assert_eq!(board.attacked_cells(), vec![cell("A1"), cell("H8")]);
    assert_eq!(board.ships()[0].hit_count(), 1);
    assert!(board.is_fleet_alive());
}

#[test]
fn test_attack_off_board() {
    let mut board = Board::new();
    let err = board.attack(Cell::new(1, BOARD_SIZE + 1)).unwrap_err();
    assert_eq!(
        err,
        BoardError::OutOfBounds {
            row: 1,
            col: BOARD_SIZE + 1
        }
    );
    assert_eq!(board.attack_count(), 0);
}

#[test]
fn test_fire_reports_outcomes() {
    let mut board = Board::new();
    board.place_ship(FLEET[4], span(cell("J9"), cell("J10"))).unwrap();
    assert_eq!(board.fire(cell("A1")).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.fire(cell("J9")).unwrap(), ShotOutcome::Hit("Patrol Boat"));
    assert_eq!(board.fire(cell("J10")).unwrap(), ShotOutcome::Sunk("Patrol Boat"));
    assert_eq!(board.fire(cell("J10")).unwrap(), ShotOutcome::Sunk("Patrol Boat"));
}

#[test]
fn test_empty_board_has_no_fleet() {
    let board = Board::new();
    assert!(!board.is_fleet_alive());
    assert_eq!(board.open_targets().len(), 100);
    assert_eq!(board.open_bows().len(), 100);
}

#[test]
fn test_custom_ship_type() {
    let mut board = Board::new();
    let raft = ShipType::new("Raft", 1);
    board
        .place_ship_between(raft, cell("F6"), cell("F6"))
        .unwrap();
    assert_eq!(board.fire(cell("F6")).unwrap(), ShotOutcome::Sunk("Raft"));
}
