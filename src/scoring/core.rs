// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind suggestion scores.
//!
//! Each keyword is checked against a document three ways:
//!
//! ```text
//! keyword ⊂ title          → +title_weight, recorded as matched
//! else keyword ⊂ body      → +body_weight,  recorded as matched
//! keyword ⊂ any tag        → +tag_weight    (independent of the above)
//! ```
//!
//! "⊂" is plain substring containment on lowercased text, so "deploy" hits
//! "Deployment". A keyword can therefore score title + tag, or body + tag, but
//! never title + body.
//!
//! After every keyword has been checked, trending documents with a positive
//! score get `trending_boost` on top. The boost never rescues a document that
//! matched nothing; otherwise an empty query would return every trending
//! article.
//!
//! # Relevance
//!
//! ```text
//! relevance = min(score / (keyword_count × title_weight), 1)
//! ```
//!
//! The divisor treats "every keyword in the title" as the gold standard. Tag
//! and body hits alone rarely reach 1.0. The formula is kept as-is; the panel's
//! confidence meter is calibrated against it.

use crate::types::{Document, RankOptions};

/// Raw result of scoring one document against a keyword set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentScore {
    pub score: f64,
    /// Keywords that hit title or body, first hit first, no duplicates.
    pub matched_keywords: Vec<String>,
}

impl DocumentScore {
    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }
}

/// Score a single document.
///
/// `keywords` must already be lowercase (as produced by
/// [`extract_keywords`](crate::extract_keywords)). Duplicates in `keywords`
/// are scored once per occurrence but recorded once.
pub fn score_document(doc: &Document, keywords: &[String], options: &RankOptions) -> DocumentScore {
    let title = doc.title.to_lowercase();
    let body = doc.body.to_lowercase();
    let tags: Vec<String> = doc.tags.iter().map(|tag| tag.to_lowercase()).collect();

    let mut result = DocumentScore::default();

    for keyword in keywords {
        let keyword = keyword.as_str();

        if title.contains(keyword) {
            result.score += options.title_weight;
            record_match(&mut result.matched_keywords, keyword);
        } else if body.contains(keyword) {
            result.score += options.body_weight;
            record_match(&mut result.matched_keywords, keyword);
        }

        if tags.iter().any(|tag| tag.contains(keyword)) {
            result.score += options.tag_weight;
        }
    }

    if doc.trending && result.score > 0.0 {
        result.score += options.trending_boost;
    }

    result
}

fn record_match(matched: &mut Vec<String>, keyword: &str) {
    if !matched.iter().any(|existing| existing == keyword) {
        matched.push(keyword.to_string());
    }
}

/// Normalize a raw score into `[0, 1]`.
///
/// Returns 0 when there is nothing to normalize against (no keywords, or a
/// zero title weight).
pub fn relevance(score: f64, keyword_count: usize, title_weight: f64) -> f64 {
    let ceiling = keyword_count as f64 * title_weight;
    if ceiling <= 0.0 || !ceiling.is_finite() {
        return 0.0;
    }
    (score / ceiling).clamp(0.0, 1.0)
}
