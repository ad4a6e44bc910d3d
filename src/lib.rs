// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Live article suggestions for issue-tracker widgets.
//!
//! As the user types into a ticket form, the suggestion panel ranks a small
//! catalog of knowledge-base articles against the text and shows the best few,
//! with matched keywords highlighted and a confidence meter underneath. This
//! crate is that ranking engine. The panel itself (DOM, timers, styling) lives
//! in the host page and talks to the engine through the WASM bindings.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ keywords.rs  │──▶│ scoring/     │──▶│ search.rs    │──▶│ highlight.rs │
//! │ (extract_    │   │ (score_doc,  │   │ (rank,       │   │ (spans,      │
//! │  keywords)   │   │  relevance)  │   │  rank_with)  │   │  markers)    │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!                                              │
//!        ┌─────────────────────┬───────────────┴──────┬──────────────────┐
//!        ▼                     ▼                      ▼                  ▼
//!   input.rs (JSON/JS    session.rs (debounce,   wasm.rs           cli/ (native
//!   validation)          last-call-wins)         (browser)         front end)
//! ```
//!
//! # Usage
//!
//! ```
//! use livesuggest::{confidence, highlight, rank, reference_catalog};
//!
//! let catalog = reference_catalog();
//! let results = rank("docker compose", &catalog);
//!
//! let top = &results[0];
//! assert_eq!(top.document.title, "Docker Compose Best Practices");
//! assert_eq!(
//!     highlight(&top.document.title, &top.matched_keywords),
//!     "<mark>Docker</mark> <mark>Compose</mark> Best Practices"
//! );
//! assert!(confidence(&results) > 0.0);
//! ```

mod catalog;
mod debounce;
mod error;
mod highlight;
mod input;
mod keywords;
mod scoring;
mod search;
mod session;
mod types;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::{reference_catalog, Catalog};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use error::RankError;
pub use highlight::{
    apply_spans, highlight, highlight_spans, highlight_with, merge_spans, HighlightSpan, Marker,
};
pub use input::{
    catalog_or_reference, documents_from_value, options_from_value, query_from_value,
    rank_documents, rank_value, RankResponse,
};
pub use keywords::extract_keywords;
pub use scoring::ranking::compare_results;
pub use scoring::{confidence, relevance, score_document, DocumentScore};
pub use search::{rank, rank_with};
pub use session::{SessionConfig, SuggestionBatch, SuggestionSession, DEFAULT_MIN_QUERY_LEN};
pub use types::{
    DocId, Document, OwnedRankedResult, RankOptions, RankedResult, DEFAULT_BODY_WEIGHT,
    DEFAULT_MAX_RESULTS, DEFAULT_TAG_WEIGHT, DEFAULT_TITLE_WEIGHT, DEFAULT_TRENDING_BOOST,
};

#[cfg(feature = "wasm")]
pub use wasm::SuggestionEngine;
