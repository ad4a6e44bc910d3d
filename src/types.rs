// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a suggestion query.
//!
//! Documents come from the catalog and are never touched by the engine. Options
//! tune the weights. Ranked results borrow the documents they point at, so a
//! result can't outlive the catalog it was ranked against.
//!
//! # Invariants
//!
//! - **RankedResult**: `score > 0 ∧ 0 ≤ relevance ≤ 1`
//!   Zero-score candidates never make it into a result list.
//!
//! - **RankedResult::matched_keywords**: no duplicates, insertion order.
//!   Only title and body hits are recorded; tag hits add score but have
//!   nothing visible to highlight.
//!
//! - **RankOptions**: every weight is finite and `≥ 0`. Checked by
//!   [`RankOptions::validate`] before any scoring happens.

use crate::error::RankError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default number of suggestions shown in the panel.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default weight for a keyword found in the title.
pub const DEFAULT_TITLE_WEIGHT: f64 = 3.0;

/// Default weight for a keyword found in the body (when the title missed).
pub const DEFAULT_BODY_WEIGHT: f64 = 2.0;

/// Default weight for a keyword found inside any tag.
pub const DEFAULT_TAG_WEIGHT: f64 = 1.0;

/// Default boost for trending documents that matched at least one keyword.
pub const DEFAULT_TRENDING_BOOST: f64 = 0.5;

// =============================================================================
// DOCUMENTS
// =============================================================================

/// Opaque document identifier.
///
/// Catalogs in the wild use both `"kb-12"` and `12`, so numeric ids are
/// accepted on input and kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DocId(pub String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        DocId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId(id.to_string())
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        DocId(id)
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for DocId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
            // JavaScript numbers arrive as f64
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => DocId(text),
            RawId::Unsigned(n) => DocId(n.to_string()),
            RawId::Signed(n) => DocId(n.to_string()),
            RawId::Float(n) => DocId(n.to_string()),
        })
    }
}

/// A candidate article.
///
/// Everything except `id` and `title` is optional on input: a missing body is
/// empty, missing tags are no tags, and a missing `trending` flag is `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocId,
    pub title: String,
    /// Preview text shown under the title. Older catalogs call it `preview`.
    #[serde(default, alias = "preview")]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub trending: bool,
}

impl Document {
    pub fn new(id: impl Into<DocId>, title: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            title: title.into(),
            body: String::new(),
            tags: Vec::new(),
            trending: false,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn trending(mut self, trending: bool) -> Self {
        self.trending = trending;
        self
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Tuning knobs for a ranking call.
///
/// Deserializes from the camelCase JSON the panel sends (`maxResults`,
/// `titleWeight`, ...). Missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RankOptions {
    /// Maximum number of results returned (default: 5)
    pub max_results: usize,
    /// Title match weight (default: 3.0)
    pub title_weight: f64,
    /// Body match weight (default: 2.0)
    pub body_weight: f64,
    /// Tag match weight (default: 1.0)
    pub tag_weight: f64,
    /// Boost for trending documents (default: 0.5)
    pub trending_boost: f64,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            title_weight: DEFAULT_TITLE_WEIGHT,
            body_weight: DEFAULT_BODY_WEIGHT,
            tag_weight: DEFAULT_TAG_WEIGHT,
            trending_boost: DEFAULT_TRENDING_BOOST,
        }
    }
}

impl RankOptions {
    /// Reject weights that would make scores meaningless.
    ///
    /// NaN poisons every comparison in the sort, infinities turn every match
    /// into a tie, and negative weights can push a matching document below
    /// zero and silently drop it.
    pub fn validate(&self) -> Result<(), RankError> {
        let weights = [
            ("titleWeight", self.title_weight),
            ("bodyWeight", self.body_weight),
            ("tagWeight", self.tag_weight),
            ("trendingBoost", self.trending_boost),
        ];

        for (option, value) in weights {
            if !value.is_finite() {
                return Err(RankError::InvalidOption {
                    option,
                    reason: format!("must be finite, got {}", value),
                });
            }
            if value < 0.0 {
                return Err(RankError::InvalidOption {
                    option,
                    reason: format!("must be non-negative, got {}", value),
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One ranked suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult<'a> {
    pub document: &'a Document,
    /// Raw accumulated weight. Not normalized.
    pub score: f64,
    /// `score / (keyword_count × title_weight)`, capped at 1.
    pub relevance: f64,
    /// Keywords that hit the title or body, deduplicated, first hit first.
    pub matched_keywords: Vec<String>,
}

impl RankedResult<'_> {
    /// Detach the result from the catalog borrow.
    pub fn to_owned_result(&self) -> OwnedRankedResult {
        OwnedRankedResult {
            document: self.document.clone(),
            score: self.score,
            relevance: self.relevance,
            matched_keywords: self.matched_keywords.clone(),
        }
    }
}

/// A ranked suggestion that owns its document.
///
/// Used where results have to outlive the catalog borrow: session batches
/// and the WASM boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedRankedResult {
    pub document: Document,
    pub score: f64,
    pub relevance: f64,
    pub matched_keywords: Vec<String>,
}
