// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the suggestion engine.
//!
//! Ranking itself can't fail: there is no I/O and nothing to parse. Everything
//! here is a caller contract violation caught at the boundary (ill-typed JSON,
//! nonsense weights, a catalog file that won't load). An empty result list is
//! not an error.

use thiserror::Error;

/// Errors raised before any ranking happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// An argument had the wrong shape (e.g. a number where the query goes).
    #[error("invalid argument `{field}`: expected {expected}, found {found}")]
    InvalidArgument {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// A catalog entry could not be read as a document.
    #[error("invalid document at catalog index {index}: {reason}")]
    InvalidDocument { index: usize, reason: String },
    /// A ranking option is out of range or mistyped.
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
    /// The catalog source could not be read or parsed.
    #[error("failed to load catalog: {0}")]
    Catalog(String),
}

impl From<RankError> for String {
    fn from(err: RankError) -> String {
        err.to_string()
    }
}
