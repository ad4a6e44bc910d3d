// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Aggregate confidence for a result set.

use crate::types::RankedResult;

/// Mean relevance across results, or 0 for an empty list.
///
/// Drives the confidence meter under the suggestion list. Relevance is already
/// clamped to `[0, 1]`, so the mean is too.
pub fn confidence(results: &[RankedResult<'_>]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: f64 = results.iter().map(|r| r.relevance).sum();
    (total / results.len() as f64).clamp(0.0, 1.0)
}
