use regex::{Regex, RegexBuilder};

use super::cells::CellGrid;

/// Queries shorter than this (after trimming) never highlight anything.
pub const MIN_QUERY_LEN: usize = 2;

/// Case-insensitive matcher for a query, or `None` when the query is too
/// short.
///
/// The query is used as a regular expression. Text that does not parse as one
/// is matched as a literal substring.
pub fn compile_query(query: &str) -> Option<Regex> {
    if query.trim().chars().count() < MIN_QUERY_LEN {
        return None;
    }

    match RegexBuilder::new(query).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::debug!(query, error = %err, "query is not a regex, matching literally");
            RegexBuilder::new(&regex::escape(query))
                .case_insensitive(true)
                .build()
                .ok()
        }
    }
}

/// Indices of the word cells whose text satisfies `query`, in cell order.
pub fn find_matches(cells: &CellGrid, query: &str) -> Vec<usize> {
    let Some(re) = compile_query(query) else {
        return Vec::new();
    };
    cells
        .iter()
        .filter(|cell| !cell.empty && re.is_match(&cell.text))
        .map(|cell| cell.index)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/search.rs"]
mod tests;
