// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking a catalog against a query.
//!
//! # Algorithm
//!
//! ```text
//! query ──▶ extract_keywords ──▶ score every document ──▶ drop score ≤ 0
//!                                                             │
//!          truncate(max_results) ◀── stable sort desc ◀── relevance
//! ```
//!
//! One pass over the catalog, no state kept between calls. The catalog is
//! borrowed immutably and every result borrows its document from it.
//!
//! # Example
//!
//! ```
//! use livesuggest::{rank, reference_catalog};
//!
//! let catalog = reference_catalog();
//! let results = rank("kubernetes deployment troubleshooting", &catalog);
//!
//! assert_eq!(results[0].document.title, "Kubernetes Deployment Best Practices");
//! assert_eq!(results[1].document.title, "Troubleshooting Container Issues");
//! assert_eq!(results.len(), 2);
//! ```

use crate::error::RankError;
use crate::keywords::extract_keywords;
use crate::scoring::ranking::rank_and_truncate;
use crate::scoring::{relevance, score_document};
use crate::types::{Document, RankOptions, RankedResult};
use tracing::{debug, instrument, trace};

/// Rank with default options.
///
/// Default options are always valid, so this can't fail.
pub fn rank<'a>(query: &str, catalog: &'a [Document]) -> Vec<RankedResult<'a>> {
    rank_validated(query, catalog, &RankOptions::default())
}

/// Rank with explicit options.
///
/// Fails only if `options` carries a negative or non-finite weight.
pub fn rank_with<'a>(
    query: &str,
    catalog: &'a [Document],
    options: &RankOptions,
) -> Result<Vec<RankedResult<'a>>, RankError> {
    options.validate()?;
    Ok(rank_validated(query, catalog, options))
}

/// Rank with options the caller has already validated.
#[instrument(
    name = "rank",
    level = "debug",
    skip_all,
    fields(query_len = query.len(), catalog_len = catalog.len())
)]
pub(crate) fn rank_validated<'a>(
    query: &str,
    catalog: &'a [Document],
    options: &RankOptions,
) -> Vec<RankedResult<'a>> {
    let keywords = extract_keywords(query);
    if keywords.is_empty() || catalog.is_empty() || options.max_results == 0 {
        debug!(keywords = keywords.len(), "nothing to rank");
        return Vec::new();
    }

    let mut results: Vec<RankedResult<'a>> = catalog
        .iter()
        .filter_map(|doc| {
            let scored = score_document(doc, &keywords, options);
            trace!(id = %doc.id, score = scored.score, "scored document");
            scored.is_match().then(|| RankedResult {
                document: doc,
                score: scored.score,
                relevance: relevance(scored.score, keywords.len(), options.title_weight),
                matched_keywords: scored.matched_keywords,
            })
        })
        .collect();

    let matched = results.len();
    rank_and_truncate(&mut results, options.max_results);

    debug!(
        keywords = keywords.len(),
        matched,
        returned = results.len(),
        "ranked suggestions"
    );
    results
}
