// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Arbitrary queries, catalogs and weights must never panic, and every
//! result list must be capped, sorted, positive and normalized.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use livesuggest::{confidence, rank_with, reference_catalog, Document, RankOptions};

#[derive(Debug, Arbitrary)]
struct FuzzDoc {
    title: String,
    body: String,
    tags: Vec<String>,
    trending: bool,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    query: String,
    docs: Vec<FuzzDoc>,
    use_reference: bool,
    max_results: u8,
    title_weight: f64,
    body_weight: f64,
    tag_weight: f64,
    trending_boost: f64,
}

fuzz_target!(|input: FuzzInput| {
    // Cap sizes so the fuzzer spends time on content, not allocation
    if input.query.len() > 200 || input.docs.len() > 64 {
        return;
    }

    let catalog: Vec<Document> = if input.use_reference {
        reference_catalog()
    } else {
        input
            .docs
            .into_iter()
            .enumerate()
            .map(|(i, d)| {
                Document::new(i.to_string(), d.title)
                    .with_body(d.body)
                    .with_tags(d.tags)
                    .trending(d.trending)
            })
            .collect()
    };

    let options = RankOptions {
        max_results: input.max_results as usize,
        title_weight: input.title_weight,
        body_weight: input.body_weight,
        tag_weight: input.tag_weight,
        trending_boost: input.trending_boost,
    };

    // Invalid weights are rejected, never ranked with
    let Ok(results) = rank_with(&input.query, &catalog, &options) else {
        assert!(options.validate().is_err());
        return;
    };

    // INVARIANT: results are capped
    assert!(results.len() <= options.max_results);

    for r in &results {
        // INVARIANT: only positive scores are returned
        assert!(r.score > 0.0, "bad score {}", r.score);
        // INVARIANT: relevance is normalized
        assert!((0.0..=1.0).contains(&r.relevance), "bad relevance {}", r.relevance);
    }

    // INVARIANT: descending order
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // INVARIANT: deterministic
    let again = rank_with(&input.query, &catalog, &options).unwrap();
    assert_eq!(results, again);

    let c = confidence(&results);
    assert!((0.0..=1.0).contains(&c));
});
