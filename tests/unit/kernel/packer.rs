use super::*;
use proptest::prelude::*;

fn words(row: &Row) -> Vec<&str> {
    row.words().collect()
}

#[test]
fn three_short_words_on_one_requested_row() {
    let layout = pack(&["AWS", "Git", "CSS"], 1);
    assert_eq!(layout.columns(), 9);
    assert_eq!(layout.requested_rows(), 1);
    assert_eq!(
        layout.rows(),
        &[
            Row::new(vec![
                Token::Word("AWS".into()),
                Token::Blank(3),
                Token::Word("Git".into()),
            ]),
            Row::new(vec![Token::Word("CSS".into()), Token::Blank(6)]),
        ]
    );
}

#[test]
fn columns_is_ceil_of_total_over_rows() {
    assert_eq!(column_count(269, 10), 27);
    assert_eq!(column_count(270, 10), 27);
    assert_eq!(column_count(271, 10), 28);
    assert_eq!(column_count(0, 10), 0);
    // Zero rows is treated as a single row.
    assert_eq!(column_count(12, 0), 12);
}

#[test]
fn default_vocabulary_packs_into_twelve_full_rows() {
    let layout = pack_vocabulary(&Vocabulary::default(), 10);
    assert_eq!(layout.columns(), 27);
    assert_eq!(layout.rows().len(), 12);
    for row in layout.rows() {
        assert_eq!(row.width(), 27, "{row:?}");
    }
    assert_eq!(words(&layout.rows()[0]), vec!["MaterialDesign", "TailwindCSS"]);
    assert_eq!(
        layout.rows()[0].tokens()[1],
        Token::Blank(2),
        "single gap absorbs the whole delta"
    );
    assert_eq!(
        layout.rows()[11].tokens(),
        &[
            Token::Word("AWS".into()),
            Token::Blank(9),
            Token::Word("CSS".into()),
            Token::Blank(9),
            Token::Word("SSR".into()),
        ]
    );
}

#[test]
fn rows_fill_front_to_back() {
    // After "abc" only 1 cell is left, so "de" has to wait for the next row.
    let layout = pack(&["abc", "de", "fg", "hi"], 2);
    assert_eq!(layout.columns(), 5);
    let rows: Vec<Vec<&str>> = layout.rows().iter().map(words).collect();
    assert_eq!(rows, vec![vec!["abc"], vec!["de", "fg"], vec!["hi"]]);
    assert_eq!(layout.rows()[0].tokens()[1], Token::Blank(2));
    assert_eq!(layout.rows()[2].tokens()[1], Token::Blank(3));
}

#[test]
fn scan_skips_a_long_word_and_takes_a_shorter_one() {
    let layout = pack(&["Kubernetes", "Go"], 3);
    assert_eq!(layout.columns(), 4);
    assert_eq!(
        layout.rows()[0].tokens(),
        &[Token::Word("Go".into()), Token::Blank(2)]
    );
}

#[test]
fn over_wide_word_gets_its_own_unpadded_row() {
    let layout = pack(&["Kubernetes", "Go"], 3);
    let last = &layout.rows()[1];
    assert_eq!(last.tokens(), &[Token::Word("Kubernetes".into())]);
    assert_eq!(last.width(), 10);
    assert!(last.width() > layout.columns());
    assert_eq!(layout.width(), 10);
}

#[test]
fn single_word_rows_pad_on_the_right() {
    let layout = pack(&["ab", "cd"], 1);
    // columns = 4, "ab" then "cd" needs 3 + 2 > 4, so two rows of one word.
    assert_eq!(layout.columns(), 4);
    assert_eq!(
        layout.rows()[0].tokens(),
        &[Token::Word("ab".into()), Token::Blank(2)]
    );

    let layout = pack(&["abcd"], 1);
    assert_eq!(layout.rows()[0].tokens(), &[Token::Word("abcd".into())]);
}

#[test]
fn empty_vocabulary_has_no_rows() {
    let empty: [&str; 0] = [];
    let layout = pack(&empty, 10);
    assert_eq!(layout.columns(), 0);
    assert!(layout.rows().is_empty());
    assert_eq!(layout.width(), 0);
}

#[test]
fn padding_remainder_goes_to_the_first_gap() {
    assert_eq!(distribute_padding(7, 3), vec![3, 2, 2]);
    assert_eq!(distribute_padding(3, 1), vec![3]);
    assert_eq!(distribute_padding(6, 3), vec![2, 2, 2]);
    assert_eq!(distribute_padding(2, 3), vec![2, 0, 0]);
    assert!(distribute_padding(5, 0).is_empty());
}

#[test]
fn packed_row_puts_the_remainder_in_the_first_gap() {
    // columns 10; the first row holds aaa, bbb and d with one spare cell.
    let layout = pack(&["aaa", "bbb", "ccc", "d"], 1);
    assert_eq!(layout.columns(), 10);
    assert_eq!(
        layout.rows()[0].tokens(),
        &[
            Token::Word("aaa".to_string()),
            Token::Blank(2),
            Token::Word("bbb".to_string()),
            Token::Blank(1),
            Token::Word("d".to_string()),
        ]
    );
    assert_eq!(
        layout.rows()[1].tokens(),
        &[Token::Word("ccc".to_string()), Token::Blank(7)]
    );
}

#[test]
fn equal_lengths_keep_vocabulary_order() {
    let layout = pack(&["bb", "aa", "cc", "dddd"], 1);
    let all: Vec<&str> = layout.rows().iter().flat_map(Row::words).collect();
    assert_eq!(all, vec!["dddd", "bb", "aa", "cc"]);
}

#[test]
fn packing_is_deterministic() {
    let vocab = Vocabulary::default();
    assert_eq!(pack_vocabulary(&vocab, 10), pack_vocabulary(&vocab, 10));
}

prop_compose! {
    fn vocabulary()(words in prop::collection::vec("[A-Za-z]{1,14}", 1..40)) -> Vec<String> {
        words
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn rows_are_exactly_columns_wide_unless_a_word_overflows(
        words in vocabulary(),
        rows in 1usize..15,
    ) {
        let layout = pack(&words, rows);
        let total: usize = words.iter().map(|w| w.len()).sum();
        prop_assert_eq!(layout.columns(), total.div_ceil(rows));
        for row in layout.rows() {
            let tokens = row.tokens();
            let over_wide = tokens.len() == 1 && tokens[0].len() > layout.columns();
            if !over_wide {
                prop_assert_eq!(row.width(), layout.columns(), "{:?}", row);
            }
        }
    }

    #[test]
    fn every_word_is_placed_exactly_once(words in vocabulary(), rows in 1usize..15) {
        let layout = pack(&words, rows);
        let mut placed: Vec<&str> = layout.rows().iter().flat_map(Row::words).collect();
        let mut expected: Vec<&str> = words.iter().map(String::as_str).collect();
        placed.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(placed, expected);
    }

    #[test]
    fn equal_length_words_keep_relative_order(words in vocabulary(), rows in 1usize..15) {
        let layout = pack(&words, rows);
        let placed: Vec<&str> = layout.rows().iter().flat_map(Row::words).collect();
        for len in 1..=14 {
            let got: Vec<&str> = placed.iter().copied().filter(|w| w.len() == len).collect();
            let want: Vec<&str> = words
                .iter()
                .map(String::as_str)
                .filter(|w| w.len() == len)
                .collect();
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn blanks_never_touch(words in vocabulary(), rows in 1usize..15) {
        let layout = pack(&words, rows);
        for row in layout.rows() {
            for pair in row.tokens().windows(2) {
                prop_assert!(!(pair[0].is_blank() && pair[1].is_blank()));
            }
        }
    }
}
