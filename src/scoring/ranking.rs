// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how suggestions get sorted.
//!
//! Higher raw score first. Ties keep catalog order: there is no secondary key,
//! so the sort must be stable. Curated catalogs put their best articles first,
//! and a tie should not reshuffle them between keystrokes.

use crate::types::RankedResult;
use std::cmp::Ordering;

/// Compare two results for ranking: descending by score.
///
/// Uses `total_cmp` so the comparison is a total order even if a NaN ever got
/// past option validation.
pub fn compare_results(a: &RankedResult<'_>, b: &RankedResult<'_>) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Sort in place (stable) and keep the best `limit`.
pub fn rank_and_truncate(results: &mut Vec<RankedResult<'_>>, limit: usize) {
    results.sort_by(compare_results);
    results.truncate(limit);
}
