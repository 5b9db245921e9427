use super::*;
use crate::kernel::cells::{CellGrid, DEFAULT_DELAY_STEP};
use crate::kernel::packer::pack_vocabulary;
use crate::kernel::vocabulary::Vocabulary;

fn grid() -> CellGrid {
    CellGrid::from_layout(&pack_vocabulary(&Vocabulary::default(), 10), DEFAULT_DELAY_STEP)
}

fn matched_words(grid: &CellGrid, query: &str) -> Vec<String> {
    find_matches(grid, query)
        .into_iter()
        .filter_map(|idx| grid.get(idx).map(|c| c.text.clone()))
        .collect()
}

#[test]
fn short_queries_match_nothing() {
    let grid = grid();
    assert!(find_matches(&grid, "").is_empty());
    assert!(find_matches(&grid, "j").is_empty());
    assert!(find_matches(&grid, "  j  ").is_empty());
    assert!(compile_query(" a").is_none());
}

#[test]
fn dock_matches_only_docker() {
    let grid = grid();
    assert_eq!(find_matches(&grid, "dock"), vec![38]);
    assert_eq!(matched_words(&grid, "DOCK"), vec!["Docker".to_string()]);
}

#[test]
fn matches_follow_cell_order() {
    let grid = grid();
    let words = matched_words(&grid, "java");
    assert_eq!(words, vec!["JavaScript".to_string(), "Java".to_string()]);
    let indices = find_matches(&grid, "java");
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn unknown_words_match_nothing() {
    assert!(find_matches(&grid(), "cobol").is_empty());
}

#[test]
fn regex_syntax_is_honoured() {
    let grid = grid();
    assert_eq!(
        matched_words(&grid, "^git"),
        vec!["GitLab".to_string(), "Git".to_string()]
    );
    assert_eq!(matched_words(&grid, "sql$").len(), 2);
}

#[test]
fn invalid_regex_falls_back_to_literal() {
    assert!(find_matches(&grid(), "(java").is_empty());

    let layout = crate::kernel::packer::pack(&["F(x)", "Go"], 1);
    let grid = CellGrid::from_layout(&layout, DEFAULT_DELAY_STEP);
    assert!(compile_query("f(").is_some());
    assert_eq!(matched_words(&grid, "f("), vec!["F(x)".to_string()]);
}

#[test]
fn blank_cells_are_never_matched() {
    let grid = grid();
    let matches = find_matches(&grid, "\\s+");
    assert!(matches.is_empty());
}
