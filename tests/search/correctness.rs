//! Scoring correctness against hand-computed expectations.

use super::common::{helpdesk_catalog, titles, REFERENCE_QUERY};
use livesuggest::{extract_keywords, rank, rank_with, reference_catalog, RankOptions};

#[test]
fn reference_walkthrough() {
    let catalog = reference_catalog();

    assert_eq!(
        extract_keywords(REFERENCE_QUERY),
        vec!["kubernetes", "deployment", "troubleshooting"]
    );

    let results = rank(REFERENCE_QUERY, &catalog);
    assert_eq!(
        titles(&results),
        vec![
            "Kubernetes Deployment Best Practices",
            "Troubleshooting Container Issues"
        ]
    );

    // title 3 + 3, tags 1 + 1, trending 0.5
    assert!((results[0].score - 8.5).abs() < 1e-9);
    assert_eq!(results[0].matched_keywords, vec!["kubernetes", "deployment"]);

    // title 3, tag 1, trending 0.5
    assert!((results[1].score - 4.5).abs() < 1e-9);
    assert_eq!(results[1].matched_keywords, vec!["troubleshooting"]);
}

#[test]
fn body_match_scores_body_weight() {
    let catalog = helpdesk_catalog();
    let results = rank("cookies", &catalog);

    assert_eq!(titles(&results), vec!["Login troubleshooting"]);
    // body 2 + trending 0.5
    assert!((results[0].score - 2.5).abs() < 1e-9);
    assert_eq!(results[0].matched_keywords, vec!["cookies"]);
}

#[test]
fn tag_only_match_ranks_without_highlight_keywords() {
    let catalog = helpdesk_catalog();
    let results = rank("security", &catalog);

    assert_eq!(titles(&results), vec!["Two-factor setup"]);
    assert!((results[0].score - 1.0).abs() < 1e-9);
    assert!(results[0].matched_keywords.is_empty());
}

#[test]
fn relevance_divides_by_keyword_count_times_title_weight() {
    let catalog = helpdesk_catalog();
    let results = rank("password refunds", &catalog);

    // "Reset your password": title 3 → 3 / (2 × 3)
    let reset = results
        .iter()
        .find(|r| r.document.title == "Reset your password")
        .unwrap();
    assert!((reset.relevance - 0.5).abs() < 1e-9);

    // "Billing questions": body 2 → 2 / 6
    let billing = results
        .iter()
        .find(|r| r.document.title == "Billing questions")
        .unwrap();
    assert!((billing.relevance - 2.0 / 6.0).abs() < 1e-9);
}

#[test]
fn custom_weights_change_the_order() {
    let catalog = helpdesk_catalog();

    // Default: title beats body
    let results = rank("password", &catalog);
    assert_eq!(results[0].document.title, "Reset your password");

    // Body-heavy weights flip it: "Login troubleshooting" mentions password in
    // its body and is trending
    let options = RankOptions {
        title_weight: 1.0,
        body_weight: 5.0,
        ..RankOptions::default()
    };
    let results = rank_with("password", &catalog, &options).unwrap();
    assert_eq!(results[0].document.title, "Login troubleshooting");
}

#[test]
fn title_hit_outranks_tag_only_hit() {
    let catalog = helpdesk_catalog();
    let results = rank("login", &catalog);

    // Both carry the "login" tag; only "Login troubleshooting" has it in the title
    assert_eq!(
        titles(&results),
        vec!["Login troubleshooting", "Reset your password"]
    );
    assert!((results[0].score - 4.5).abs() < 1e-9);
    assert!((results[1].score - 1.0).abs() < 1e-9);
}
