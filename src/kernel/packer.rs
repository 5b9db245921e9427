//! Greedy line packing with justified padding.
//!
//! Words are sorted longest first and poured into rows of `columns`
//! characters. Each row keeps one blank between neighbouring words; leftover
//! width is spread over those gaps, the first gap taking any remainder. A row
//! holding a single word is padded on the right instead.

use super::vocabulary::{char_len, Vocabulary};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Word(String),
    /// A run of padding cells.
    Blank(usize),
}

impl Token {
    pub fn len(&self) -> usize {
        match self {
            Token::Word(text) => char_len(text),
            Token::Blank(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Token::Blank(_))
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            Token::Word(text) => Some(text),
            Token::Blank(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    tokens: Vec<Token>,
}

impl Row {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn width(&self) -> usize {
        self.tokens.iter().map(Token::len).sum()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(Token::word)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    columns: usize,
    requested_rows: usize,
    rows: Vec<Row>,
}

impl Layout {
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row count the column width was derived from. `rows().len()` can be
    /// larger when the words do not pack perfectly.
    pub fn requested_rows(&self) -> usize {
        self.requested_rows
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Widest row. Equals `columns` unless a single word is longer than
    /// `columns`.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Row::width)
            .max()
            .unwrap_or(0)
            .max(self.columns)
    }
}

/// `ceil(total / rows)`, with `rows == 0` treated as one row.
pub fn column_count(total_len: usize, rows: usize) -> usize {
    total_len.div_ceil(rows.max(1))
}

pub fn pack_vocabulary(vocabulary: &Vocabulary, rows: usize) -> Layout {
    pack(vocabulary.words(), rows)
}

pub fn pack<S: AsRef<str>>(words: &[S], rows: usize) -> Layout {
    let requested_rows = rows.max(1);
    let mut pool: Vec<(&str, usize)> = words
        .iter()
        .map(|w| {
            let w = w.as_ref();
            (w, char_len(w))
        })
        .collect();
    let total: usize = pool.iter().map(|(_, len)| len).sum();
    let columns = column_count(total, requested_rows);

    // `sort_by` is stable: equal lengths keep vocabulary order.
    pool.sort_by(|a, b| b.1.cmp(&a.1));

    let mut out = Vec::new();
    while !pool.is_empty() {
        let line = take_line(&mut pool, columns);
        out.push(justify(&line, columns));
    }

    tracing::debug!(
        words = words.len(),
        total,
        columns,
        requested_rows,
        packed_rows = out.len(),
        "packed word grid"
    );

    Layout {
        columns,
        requested_rows,
        rows: out,
    }
}

/// Removes and returns the words of the next row. `pool` must be non-empty.
fn take_line<'a>(pool: &mut Vec<(&'a str, usize)>, columns: usize) -> Vec<(&'a str, usize)> {
    let mut line = Vec::new();
    // Includes one reserved separator after every accepted word.
    let mut used = 0usize;
    let mut i = 0;
    while i < pool.len() {
        if used + pool[i].1 <= columns {
            let word = pool.remove(i);
            used += word.1 + 1;
            line.push(word);
        } else {
            i += 1;
        }
    }

    if line.is_empty() && !pool.is_empty() {
        // Longer than a whole row: it gets a row of its own.
        line.push(pool.remove(0));
    }
    line
}

fn justify(line: &[(&str, usize)], columns: usize) -> Row {
    let separators = line.len().saturating_sub(1);
    let line_len = line.iter().map(|(_, len)| len).sum::<usize>() + separators;
    let delta = columns.saturating_sub(line_len);

    let mut tokens = Vec::with_capacity(line.len() * 2);
    if separators == 0 {
        if let Some((word, _)) = line.first() {
            tokens.push(Token::Word((*word).to_string()));
        }
        if delta > 0 {
            tokens.push(Token::Blank(delta));
        }
        return Row::new(tokens);
    }

    let extra = distribute_padding(delta, separators);
    for (i, (word, _)) in line.iter().enumerate() {
        if i > 0 {
            tokens.push(Token::Blank(1 + extra[i - 1]));
        }
        tokens.push(Token::Word((*word).to_string()));
    }
    Row::new(tokens)
}

/// Extra blanks added to each of `separators` gaps to absorb `delta` cells.
///
/// Every gap gets `delta / separators`; the first also gets the remainder.
pub fn distribute_padding(delta: usize, separators: usize) -> Vec<usize> {
    if separators == 0 {
        return Vec::new();
    }
    let per_gap = delta / separators;
    let remainder = delta % separators;
    let mut extra = vec![per_gap; separators];
    extra[0] += remainder;
    extra
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/packer.rs"]
mod tests;
