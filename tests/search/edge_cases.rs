//! Edge cases: empty inputs, odd characters, degenerate options.

use super::common::{make_doc, make_doc_full, REFERENCE_QUERY};
use livesuggest::{confidence, rank, rank_with, reference_catalog, Document, RankOptions};

#[test]
fn empty_query_returns_empty() {
    let catalog = reference_catalog();
    assert!(rank("", &catalog).is_empty());
}

#[test]
fn whitespace_and_punctuation_only_queries_return_empty() {
    let catalog = reference_catalog();
    for query in ["   ", "\t\n", "!!!", "-- // ..", "a b c", "ci/cd"] {
        assert!(rank(query, &catalog).is_empty(), "query {:?}", query);
    }
}

#[test]
fn empty_catalog_returns_empty() {
    let catalog: Vec<Document> = Vec::new();
    assert!(rank(REFERENCE_QUERY, &catalog).is_empty());
}

#[test]
fn documents_with_empty_fields_are_fine() {
    let catalog = vec![Document::new("x", ""), make_doc(1, "Only title docker")];
    let results = rank("docker", &catalog);
    assert_eq!(results.len(), 1);
}

#[test]
fn unicode_query_does_not_panic() {
    let catalog = vec![make_doc_full(
        0,
        "Café deployment notes",
        "naïve résumé",
        &["café"],
        false,
    )];
    // "é" splits tokens, leaving "deployment" as the only keyword
    let results = rank("déjà deployment", &catalog);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matched_keywords, vec!["deployment"]);
}

#[test]
fn query_case_is_ignored() {
    let catalog = reference_catalog();
    let lower = rank("docker compose", &catalog);
    let upper = rank("DOCKER Compose", &catalog);
    assert_eq!(lower, upper);
}

#[test]
fn repeated_keywords_do_not_change_scores() {
    let catalog = reference_catalog();
    let once = rank("docker", &catalog);
    let thrice = rank("docker docker DOCKER", &catalog);
    assert_eq!(once, thrice);
}

#[test]
fn zero_title_weight_yields_zero_relevance() {
    let catalog = reference_catalog();
    let options = RankOptions {
        title_weight: 0.0,
        ..RankOptions::default()
    };
    let results = rank_with("docker", &catalog, &options).unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.relevance == 0.0));
    assert_eq!(confidence(&results), 0.0);
}

#[test]
fn catalog_is_untouched_by_ranking() {
    let catalog = reference_catalog();
    let before = catalog.clone();
    let _ = rank(REFERENCE_QUERY, &catalog);
    assert_eq!(catalog, before);
}
