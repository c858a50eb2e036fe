#[macro_use]
extern crate maplit;

use std::collections::HashMap;

use ranker_core::{Analyzer, EphemeralIndex, ParseError, Ranker, format_score};
use ranker_core::query::parser::parse;

const QUICK_BROWN_FOX: &'static str = "the quick brown fox";


fn rank(text: &str, query: &str) -> f64 {
    Ranker::default().rank(text, query).unwrap()
}


fn matches(text: &str, query: &str) -> bool {
    let index = EphemeralIndex::build(Analyzer::default().analyze(text));
    parse(query).unwrap().matches(&index)
}


/// Builds a document of `length` tokens where "fox" appears `k` times
fn document(k: usize, length: usize) -> String {
    let mut words = vec!["fox"; k];
    words.resize(length, "hen");
    words.join(" ")
}


#[test]
fn test_known_scores() {
    let expected: HashMap<&str, &str> = hashmap!{
        "fox" => "0.50",
        "\"quick brown\"" => "0.50",
        "cat" => "0.00",
        "fox cat" => "0.25",
        "fox AND quick" => "1.00",
        "fox AND cat" => "0.00",
        "fox^3" => "1.50",
        "\"brown quick\"" => "0.00",
    };

    for (query, score) in expected {
        assert_eq!(format_score(rank(QUICK_BROWN_FOX, query)), score, "query: {}", query);
    }
}


#[test]
fn test_score_increases_with_term_frequency() {
    let scores = (1..8).map(|k| rank(&document(k, 8), "fox")).collect::<Vec<f64>>();

    for pair in scores.windows(2) {
        assert!(pair[1] > pair[0], "{:?}", scores);
    }
}


#[test]
fn test_score_decreases_with_length() {
    let scores = (1..8).map(|length| rank(&document(1, length), "fox")).collect::<Vec<f64>>();

    for pair in scores.windows(2) {
        assert!(pair[1] < pair[0], "{:?}", scores);
    }
}


#[test]
fn test_idempotent() {
    let ranker = Ranker::default();

    for query in &["fox", "quick OR (brown AND NOT cat)^2", "\"quick brown\" fox"] {
        assert_eq!(ranker.rank(QUICK_BROWN_FOX, query), ranker.rank(QUICK_BROWN_FOX, query));
    }
}


#[test]
fn test_phrase_requires_adjacent_terms() {
    assert!(matches("a b", "\"a b\""));
    assert!(!matches("b a", "\"a b\""));
    assert!(!matches("a x b", "\"a b\""));

    assert_eq!(rank("a x b", "\"b a\""), 0.0);
    assert_eq!(rank("a x b", "\"a b\""), 0.0);
}


#[test]
fn test_double_negation_matches_the_same() {
    let queries = vec![
        "fox",
        "cat",
        "fox AND cat",
        "fox OR cat",
        "fox AND NOT cat",
        "\"quick brown\" AND NOT \"brown quick\"",
    ];

    for query in queries {
        let negated = format!("NOT NOT ({})", query);

        assert_eq!(matches(QUICK_BROWN_FOX, query), matches(QUICK_BROWN_FOX, &negated), "query: {}", query);
    }
}


#[test]
fn test_boost_monotonicity() {
    assert!(rank(QUICK_BROWN_FOX, "fox^2") > rank(QUICK_BROWN_FOX, "fox^1"));
    assert_eq!(rank(QUICK_BROWN_FOX, "cat^2"), rank(QUICK_BROWN_FOX, "cat^1"));
}


#[test]
fn test_malformed_queries() {
    let ranker = Ranker::default();

    assert_eq!(ranker.rank(QUICK_BROWN_FOX, ""), Err(ParseError::EmptyQuery));
    assert_eq!(ranker.rank(QUICK_BROWN_FOX, "unclosed (term"), Err(ParseError::UnbalancedGrouping));
    assert_eq!(ranker.rank(QUICK_BROWN_FOX, "fox^0"), Err(ParseError::InvalidBoost));
    assert_eq!(ranker.rank(QUICK_BROWN_FOX, "NOT fox"), Err(ParseError::DanglingNot));
    assert_eq!(ranker.rank(QUICK_BROWN_FOX, "fox AND"), Err(ParseError::MissingOperand));
}


#[test]
fn test_html_document() {
    let html = "<html><head><title>Quick</title><style>.fox { color: red }</style></head>\
                <body><!-- fox --><p>Brown &amp; <b>FOX</b></p></body></html>";

    // quick, brown, fox
    assert_eq!(format_score(rank(html, "fox")), "0.58");
    assert_eq!(format_score(rank(html, "\"brown fox\"")), "0.58");
    assert_eq!(rank(html, "color"), 0.0);
    assert_eq!(rank(html, "amp"), 0.0);
}


#[test]
fn test_explain() {
    let explanation = Ranker::default().explain(QUICK_BROWN_FOX, "fox").unwrap();

    assert_eq!(explanation.score, 0.5);
    assert_eq!(explanation.leaves.len(), 1);
    assert_eq!(explanation.leaves[0].query, "fox");
}


#[test]
fn test_large_document() {
    let text = format!("<html><body>{}fox</body></html>", "<p>lorem ipsum dolor sit amet,</p> ".repeat(40_000));

    // 200,000 filler tokens plus "fox"
    let expected = 1.0 / 200_001f64.sqrt();

    assert_eq!(rank(&text, "fox"), expected);
    assert_eq!(rank(&text, "\"sit amet\""), 40_000f64.sqrt() * expected);
}


#[test]
fn test_large_document_of_unclosed_tags() {
    let text = "<a".repeat(50_000);

    // Each "<a" is literal text, leaving one long run of "a" tokens
    assert_eq!(format_score(rank(&text, "a")), "1.00");
}


#[test]
fn test_large_document_of_joined_letters() {
    let text = "a.".repeat(40_000);

    assert_eq!(format_score(rank(&text, "a")), "1.00");
}


#[test]
fn test_long_negation_runs() {
    let ranker = Ranker::default();

    assert_eq!(ranker.rank(QUICK_BROWN_FOX, &format!("{}fox", "-".repeat(200_000))), Ok(0.5));
    assert_eq!(ranker.rank(QUICK_BROWN_FOX, &format!("{}fox", "-".repeat(200_001))), Err(ParseError::DanglingNot));
}


#[test]
fn test_deeply_nested_query() {
    let ranker = Ranker::default();
    let query = format!("{}fox{}", "(".repeat(100_000), ")".repeat(100_000));

    assert_eq!(ranker.rank(QUICK_BROWN_FOX, &query), Err(ParseError::NestingTooDeep));
    assert_eq!(ranker.rank(QUICK_BROWN_FOX, "((((fox))))^2"), Ok(1.0));
}
