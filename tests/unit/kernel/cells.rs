use super::*;
use crate::kernel::packer::pack;
use crate::kernel::vocabulary::Vocabulary;
use crate::kernel::pack_vocabulary;

fn small_grid() -> CellGrid {
    CellGrid::from_layout(&pack(&["AWS", "Git", "CSS"], 1), DEFAULT_DELAY_STEP)
}

#[test]
fn every_token_consumes_an_index() {
    let grid = small_grid();
    let seen: Vec<(usize, &str, bool)> = grid
        .iter()
        .map(|c| (c.index, c.text.as_str(), c.empty))
        .collect();
    assert_eq!(
        seen,
        vec![
            (1, "AWS", false),
            (2, "   ", true),
            (3, "Git", false),
            (4, "CSS", false),
            (5, "      ", true),
        ]
    );
    assert_eq!(grid.len(), 5);
    assert_eq!(grid.row_count(), 2);
}

#[test]
fn indices_are_consecutive_across_rows() {
    let grid = CellGrid::from_layout(&pack_vocabulary(&Vocabulary::default(), 10), DEFAULT_DELAY_STEP);
    let indices: Vec<usize> = grid.iter().map(|c| c.index).collect();
    let expected: Vec<usize> = (1..=grid.len()).collect();
    assert_eq!(indices, expected);
    assert_eq!(grid.len(), 74);
}

#[test]
fn delay_grows_with_index() {
    let grid = small_grid();
    let delays: Vec<u128> = grid.iter().map(|c| c.delay.as_millis()).collect();
    assert_eq!(delays, vec![100, 200, 300, 400, 500]);
    assert_eq!(grid.last_delay(), Duration::from_millis(500));
}

#[test]
fn column_offsets_reset_per_row() {
    let grid = small_grid();
    let rows = grid.rows();
    let spans: Vec<Vec<(usize, usize)>> = rows
        .iter()
        .map(|row| row.iter().map(WordCell::grid_column).collect())
        .collect();
    assert_eq!(spans, vec![vec![(1, 3), (4, 3), (7, 3)], vec![(1, 3), (4, 6)]]);
    assert_eq!(rows[0][2].column, 6);
    assert_eq!(rows[0][2].end_column(), 9);
    assert_eq!(rows[1][0].row, 1);
}

#[test]
fn cell_at_uses_actual_lengths() {
    let grid = CellGrid::from_layout(&pack(&["Kubernetes", "Go"], 3), DEFAULT_DELAY_STEP);
    assert_eq!(grid.columns(), 4);
    assert_eq!(grid.width(), 10);
    // Past the declared column count but still inside the over-wide word.
    let cell = grid.cell_at(1, 8).map(|c| c.text.as_str());
    assert_eq!(cell, Some("Kubernetes"));
    assert_eq!(grid.cell_at(0, 3).map(|c| c.empty), Some(true));
    assert!(grid.cell_at(0, 4).is_none());
    assert!(grid.cell_at(5, 0).is_none());
}

#[test]
fn get_finds_cells_by_index() {
    let grid = small_grid();
    assert_eq!(grid.get(3).map(|c| c.text.as_str()), Some("Git"));
    assert!(grid.get(0).is_none());
    assert!(grid.get(6).is_none());
}

#[test]
fn chars_split_into_one_cell_each() {
    let grid = small_grid();
    let Some(cell) = grid.get(1) else {
        panic!("missing first cell");
    };
    assert_eq!(cell.chars().collect::<Vec<_>>(), vec!["A", "W", "S"]);
}

#[test]
fn building_twice_gives_identical_cells() {
    let layout = pack_vocabulary(&Vocabulary::default(), 10);
    assert_eq!(
        CellGrid::from_layout(&layout, DEFAULT_DELAY_STEP),
        CellGrid::from_layout(&layout, DEFAULT_DELAY_STEP)
    );
}

#[test]
fn empty_layout_gives_empty_grid() {
    let empty: [&str; 0] = [];
    let grid = CellGrid::from_layout(&pack(&empty, 10), DEFAULT_DELAY_STEP);
    assert!(grid.is_empty());
    assert_eq!(grid.last_delay(), Duration::ZERO);
}
