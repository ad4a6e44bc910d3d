//! Shared test utilities and fixtures.

#![allow(dead_code)]

use livesuggest::{Document, RankedResult};

// Re-export canonical test utilities from livesuggest::testing
pub use livesuggest::testing::{graded_query, make_doc, make_doc_full, make_graded_docs};

/// The query from the reference walkthrough.
pub const REFERENCE_QUERY: &str = "kubernetes deployment troubleshooting";

/// Titles in result order.
pub fn titles<'a>(results: &[RankedResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.document.title.as_str()).collect()
}

/// Ids in result order.
pub fn ids<'a>(results: &[RankedResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.document.id.as_str()).collect()
}

/// Panic with a readable message if any ranking invariant is broken.
pub fn assert_results_well_formed(results: &[RankedResult<'_>], max_results: usize) {
    assert!(
        results.len() <= max_results,
        "{} results exceed the cap of {}",
        results.len(),
        max_results
    );

    for (i, result) in results.iter().enumerate() {
        assert!(result.score > 0.0, "result {} has score {}", i, result.score);
        assert!(
            (0.0..=1.0).contains(&result.relevance),
            "result {} has relevance {}",
            i,
            result.relevance
        );

        let mut seen = std::collections::HashSet::new();
        for keyword in &result.matched_keywords {
            assert!(seen.insert(keyword), "duplicate matched keyword {:?}", keyword);
        }
    }

    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results out of order: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }
}

/// A small helpdesk catalog with overlapping vocabulary.
pub fn helpdesk_catalog() -> Vec<Document> {
    vec![
        make_doc_full(
            0,
            "Reset your password",
            "Use the account page to reset a forgotten password.",
            &["account", "login"],
            false,
        ),
        make_doc_full(
            1,
            "Login troubleshooting",
            "If login fails after a password reset, clear cookies.",
            &["login", "troubleshooting"],
            true,
        ),
        make_doc_full(
            2,
            "Two-factor setup",
            "Enable two-factor authentication for your account.",
            &["security", "account"],
            false,
        ),
        make_doc_full(
            3,
            "Billing questions",
            "Invoices, refunds and payment methods.",
            &["billing"],
            false,
        ),
    ]
}
