use broadside::{from_label, span, to_label, Cell, ParseError, BOARD_SIZE};
use proptest::prelude::*;

#[test]
fn test_labels_and_pairs() {
    assert_eq!(to_label(1, 1), "A1");
    assert_eq!(from_label("A1"), Ok(Cell::new(1, 1)));
    assert_eq!(from_label("G2"), Ok(Cell::new(7, 2)));
    assert_eq!(from_label("J10"), Ok(Cell::new(10, 10)));
    assert_eq!("c7".parse::<Cell>(), Ok(Cell::new(3, 7)));
    assert_eq!(from_label("  b3\n"), Ok(Cell::new(2, 3)));
    assert_eq!(Cell::new(4, 9).to_string(), "D9");
}

#[test]
fn test_malformed_labels() {
    assert_eq!(from_label(""), Err(ParseError::Empty));
    assert_eq!(from_label("   "), Err(ParseError::Empty));
    assert_eq!(from_label("12"), Err(ParseError::MissingRow));
    assert_eq!(from_label("?4"), Err(ParseError::MissingRow));
    assert_eq!(from_label("A"), Err(ParseError::MissingColumn));
    assert_eq!(from_label("AB3"), Err(ParseError::InvalidColumn));
    assert_eq!(from_label("A3x"), Err(ParseError::InvalidColumn));
    assert_eq!(from_label("A 3"), Err(ParseError::InvalidColumn));
    assert_eq!(from_label("É3"), Err(ParseError::RowOutOfRange));
    assert_eq!(from_label("A0"), Err(ParseError::ColumnOutOfRange));
    assert_eq!(from_label("A100"), Err(ParseError::ColumnOutOfRange));
    assert_eq!(
        from_label("A99999999999999999999"),
        Err(ParseError::ColumnOutOfRange)
    );
}

#[test]
fn test_parse_on_board_checks_bounds() {
    assert_eq!(Cell::parse_on_board("J10", BOARD_SIZE), Ok(Cell::new(10, 10)));
    assert_eq!(
        Cell::parse_on_board("K1", BOARD_SIZE),
        Err(ParseError::OutOfBounds {
            row: 11,
            col: 1,
            size: BOARD_SIZE
        })
    );
    assert!(matches!(
        Cell::parse_on_board("A11", BOARD_SIZE),
        Err(ParseError::OutOfBounds { .. })
    ));
    assert_eq!(Cell::parse_on_board("", BOARD_SIZE), Err(ParseError::Empty));
}

#[test]
fn test_span_row() {
    let cells = span(Cell::new(1, 1), Cell::new(1, 5));
    assert_eq!(
        cells,
        vec![
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(1, 3),
            Cell::new(1, 4),
            Cell::new(1, 5)
        ]
    );
}

#[test]
fn test_span_column_reversed_and_single() {
    let cells = span(Cell::new(5, 3), Cell::new(2, 3));
    let labels: Vec<String> = cells.iter().map(Cell::label).collect();
    assert_eq!(labels, vec!["B3", "C3", "D3", "E3"]);

    assert_eq!(span(Cell::new(4, 4), Cell::new(4, 4)), vec![Cell::new(4, 4)]);
}

#[test]
fn test_grid_is_row_major() {
    let cells: Vec<Cell> = Cell::grid(3).collect();
    assert_eq!(cells.len(), 9);
    assert_eq!(cells[0], Cell::new(1, 1));
    assert_eq!(cells[1], Cell::new(1, 2));
    assert_eq!(cells[3], Cell::new(2, 1));
    assert_eq!(cells[8], Cell::new(3, 3));
}

#[test]
fn test_cell_serde() {
    let json = serde_json::to_string(&Cell::new(2, 7)).unwrap();
    let back: Cell = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Cell::new(2, 7));
}

proptest! {
    #[test]
    fn label_round_trip(row in 1u8..=26, col in 1u8..=99) {
        let label = to_label(row, col);
        prop_assert_eq!(from_label(&label), Ok(Cell::new(row, col)));
        prop_assert_eq!(from_label(&label.to_lowercase()), Ok(Cell::new(row, col)));
    }

    #[test]
    fn span_is_symmetric(
        row in 1u8..=10,
        col in 1u8..=10,
        other in 1u8..=10,
        horizontal in any::<bool>(),
    ) {
        let a = Cell::new(row, col);
        let b = if horizontal { Cell::new(row, other) } else { Cell::new(other, col) };
        let forward = span(a, b);
        let backward = span(b, a);
        prop_assert_eq!(&forward, &backward);
        let expected = if horizontal {
            col.abs_diff(other)
        } else {
            row.abs_diff(other)
        };
        prop_assert_eq!(forward.len(), usize::from(expected) + 1);
        prop_assert!(forward.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(forward.contains(&a) && forward.contains(&b));
    }
}
