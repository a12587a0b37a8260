// Property-based tests for the sort engine
// These tests use proptest to generate glossary tables and verify:
// 1. Fixing is idempotent
// 2. Fixing only permutes rows, never adds, drops or edits them
// 3. A fixed document passes the check
// 4. A table at the end of an unterminated document stays line-separated

use glossort_lib::row_key::KeyExtractor;
use glossort_lib::sorter::sort_rows;
use glossort_lib::{Config, Document, SortMode, process_document};
use proptest::prelude::*;

/// Strategy for the first cell of a glossary row
fn term_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just(""),
            Just("(an) "),
            Just("(a) "),
            Just("to "),
            Just("(on) ")
        ],
        prop::collection::vec("[a-zA-Z0-9+]{1,8}", 1..3),
    )
        .prop_map(|(particle, words)| format!("{particle}{}", words.join(" ")))
}

fn row_strategy() -> impl Strategy<Value = String> {
    (term_strategy(), "[a-z]{0,6}").prop_map(|(term, rest)| format!("{term} | {rest} | x\n"))
}

fn document_for(rows: &[String]) -> String {
    let mut text = String::from("# Glossary\n\n### A\nTerm | Part | BG\n-----|------|---\n");
    for row in rows {
        text.push_str(row);
    }
    text.push_str("\nFooter\n");
    text
}

fn config() -> Config {
    let mut config = Config::default();
    config.global.sections = vec!["A".to_string()];
    config
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn fix_is_idempotent(rows in prop::collection::vec(row_strategy(), 0..15)) {
        let mut doc = Document::from_text(&document_for(&rows));
        process_document(&mut doc, &config(), SortMode::Fix).unwrap();
        let once = doc.to_text();

        let report = process_document(&mut doc, &config(), SortMode::Fix).unwrap();
        prop_assert!(!report.changed());
        prop_assert_eq!(doc.to_text(), once);
    }

    #[test]
    fn fix_only_permutes_lines(rows in prop::collection::vec(row_strategy(), 0..15)) {
        let original = document_for(&rows);
        let mut doc = Document::from_text(&original);
        process_document(&mut doc, &config(), SortMode::Fix).unwrap();

        let mut before: Vec<String> = Document::from_text(&original).lines().to_vec();
        let mut after: Vec<String> = doc.lines().to_vec();
        prop_assert_eq!(before.len(), after.len());
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn fixed_document_passes_check(rows in prop::collection::vec(row_strategy(), 0..15)) {
        let mut doc = Document::from_text(&document_for(&rows));
        process_document(&mut doc, &config(), SortMode::Fix).unwrap();

        let report = process_document(&mut doc, &config(), SortMode::Check).unwrap();
        prop_assert!(report.is_sorted());
    }

    #[test]
    fn unterminated_table_keeps_line_count_and_length(rows in prop::collection::vec(row_strategy(), 1..15)) {
        let mut text = String::from("### A\nTerm | Part | BG\n-----|------|---\n");
        for row in &rows {
            text.push_str(row);
        }
        text.pop();

        let mut doc = Document::from_text(&text);
        process_document(&mut doc, &config(), SortMode::Fix).unwrap();
        let fixed = doc.to_text();
        prop_assert_eq!(fixed.len(), text.len());
        prop_assert_eq!(fixed.lines().count(), text.lines().count());
        prop_assert!(!fixed.ends_with('\n'));

        let report = process_document(&mut doc, &config(), SortMode::Check).unwrap();
        prop_assert!(report.is_sorted());
    }

    #[test]
    fn sorted_keys_are_non_decreasing(rows in prop::collection::vec(row_strategy(), 0..20)) {
        let extractor = KeyExtractor::default();
        let sorted = sort_rows(&rows, &extractor);
        let keys: Vec<String> = sorted.iter().map(|r| extractor.row_key(r)).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn equal_keys_keep_input_order(rows in prop::collection::vec(row_strategy(), 0..20)) {
        let extractor = KeyExtractor::default();
        let sorted = sort_rows(&rows, &extractor);
        for key in sorted.iter().map(|r| extractor.row_key(r)) {
            let in_input: Vec<&String> = rows.iter().filter(|r| extractor.row_key(r) == key).collect();
            let in_output: Vec<&String> = sorted.iter().filter(|r| extractor.row_key(r) == key).collect();
            prop_assert_eq!(in_input, in_output);
        }
    }
}
