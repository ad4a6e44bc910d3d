// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization: turning what the user typed into keywords.
//!
//! The rules are deliberately blunt. Lowercase, split on anything that isn't a
//! word character, throw away tokens of two characters or fewer. "How do I
//! fix CI/CD?" becomes `["how", "fix"]`: "do", "i", "ci" and "cd" are too
//! short to carry signal in a substring matcher (every title contains "ci").
//!
//! Word characters are ASCII letters, digits and underscore, matching the
//! browser's `\w`. Anything else, including accented letters, is a separator.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Tokens of this many characters or fewer are dropped.
pub const MIN_KEYWORD_EXCLUSIVE_LEN: usize = 2;

static NON_WORD_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_]+").expect("separator pattern is a valid regex")
});

/// Extract the keyword set from a raw query.
///
/// Duplicates collapse to their first occurrence, so "docker docker compose"
/// scores exactly like "docker compose".
pub fn extract_keywords(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let mut seen = HashSet::new();

    NON_WORD_RUN
        .split(&lowered)
        .filter(|token| token.len() > MIN_KEYWORD_EXCLUSIVE_LEN)
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}
