//! Ordering, truncation and tie-breaking.

use super::common::{
    assert_results_well_formed, graded_query, ids, make_doc, make_doc_full, make_graded_docs,
};
use livesuggest::{extract_keywords, rank, rank_with, score_document, RankOptions};

#[test]
fn cap_enforced_with_ten_distinct_matches() {
    let catalog = make_graded_docs(10);
    let results = rank(&graded_query(), &catalog);

    assert_eq!(results.len(), 5);
    assert_results_well_formed(&results, 5);
    assert_eq!(ids(&results), vec!["doc-9", "doc-8", "doc-7", "doc-6", "doc-5"]);
}

#[test]
fn max_results_option_overrides_cap() {
    let catalog = make_graded_docs(10);
    let options = RankOptions {
        max_results: 8,
        ..RankOptions::default()
    };
    let results = rank_with(&graded_query(), &catalog, &options).unwrap();
    assert_eq!(results.len(), 8);
    assert_results_well_formed(&results, 8);
}

#[test]
fn scores_are_non_increasing() {
    let catalog = make_graded_docs(12);
    let options = RankOptions {
        max_results: 12,
        ..RankOptions::default()
    };
    let results = rank_with(&graded_query(), &catalog, &options).unwrap();
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn ties_preserve_catalog_order() {
    let catalog = vec![
        make_doc(0, "Rust basics"),
        make_doc(1, "Python basics"),
        make_doc(2, "Rust advanced"),
        make_doc(3, "Go basics"),
    ];
    let results = rank("basics", &catalog);
    assert_eq!(ids(&results), vec!["doc-0", "doc-1", "doc-3"]);
}

#[test]
fn adding_a_title_keyword_strictly_increases_score() {
    let doc = make_doc_full(
        0,
        "Kubernetes Deployment Best Practices",
        "",
        &[],
        false,
    );
    let options = RankOptions::default();

    let one = score_document(&doc, &extract_keywords("kubernetes"), &options);
    let two = score_document(&doc, &extract_keywords("kubernetes practices"), &options);
    assert!(two.score > one.score);
}

#[test]
fn zero_score_documents_never_appear() {
    let catalog = vec![
        make_doc(0, "Alpha"),
        make_doc_full(1, "Beta", "nothing relevant here", &["misc"], false),
    ];
    assert!(rank("gamma", &catalog).is_empty());
}

#[test]
fn trending_alone_does_not_qualify() {
    let catalog = vec![make_doc_full(0, "Hot topic", "", &[], true)];
    assert!(rank("unrelated", &catalog).is_empty());
    assert!(rank("", &catalog).is_empty());
}
