// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Owned state for one mounted suggestion panel.
//!
//! A session is created when the panel mounts and dropped when it unmounts.
//! It owns the catalog, the ranking options, the debouncer and a generation
//! counter. Nothing lives in globals.
//!
//! # Lifecycle
//!
//! ```text
//! input("kub") ─┐
//! input("kube") ┴─▶ debounce ──▶ poll() ──▶ SuggestionBatch { generation: 2 }
//! input("kubernetes") ─────────▶ (generation 3 now current)
//!                                           is_current(batch 2) == false
//! ```
//!
//! Every keystroke bumps the generation. A batch is only worth rendering while
//! its generation is still the latest; anything older is stale and the caller
//! drops it (last call wins).

use crate::catalog::Catalog;
use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use crate::error::RankError;
use crate::input::RankResponse;
use crate::search::rank_validated;
use crate::types::{OwnedRankedResult, RankOptions};
use std::time::{Duration, Instant};
use tracing::debug;

/// Queries shorter than this (in characters, after trimming) are not ranked.
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub options: RankOptions,
    pub debounce: Duration,
    pub min_query_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            options: RankOptions::default(),
            debounce: DEFAULT_DEBOUNCE,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

/// One round of suggestions, tagged with the keystroke that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionBatch {
    pub generation: u64,
    pub query: String,
    pub results: Vec<OwnedRankedResult>,
    pub confidence: f64,
}

impl SuggestionBatch {
    /// Nothing to show: render the "no matches" state.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[derive(Debug)]
pub struct SuggestionSession {
    catalog: Catalog,
    config: SessionConfig,
    debouncer: Debouncer<(u64, String)>,
    generation: u64,
}

impl SuggestionSession {
    pub fn new(catalog: Catalog, config: SessionConfig) -> Result<Self, RankError> {
        config.options.validate()?;
        Ok(SuggestionSession {
            catalog,
            debouncer: Debouncer::new(config.debounce),
            config,
            generation: 0,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Latest generation handed out by [`input`](Self::input).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Record a keystroke. Returns the generation assigned to it.
    pub fn input(&mut self, query: &str, now: Instant) -> u64 {
        self.generation += 1;
        self.debouncer
            .trigger((self.generation, query.to_string()), now);
        self.generation
    }

    /// When the next batch will be ready, if a keystroke is pending and the
    /// debounce interval fits in an `Instant`.
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Produce a batch if the debounce interval has elapsed.
    ///
    /// Short queries produce an empty batch so the panel can clear itself.
    pub fn poll(&mut self, now: Instant) -> Option<SuggestionBatch> {
        let (generation, query) = self.debouncer.poll(now)?;

        let response = if query.trim().chars().count() < self.config.min_query_len {
            debug!(generation, "query below minimum length");
            RankResponse::empty()
        } else {
            // Options were validated in `new` and can't change afterwards
            let ranked = rank_validated(&query, self.catalog.documents(), &self.config.options);
            RankResponse::from_results(&ranked)
        };

        Some(SuggestionBatch {
            generation,
            query,
            results: response.results,
            confidence: response.confidence,
        })
    }

    /// Whether `batch` came from the latest keystroke.
    pub fn is_current(&self, batch: &SuggestionBatch) -> bool {
        batch.generation == self.generation
    }

    /// Drop any pending keystroke (e.g. the panel lost focus).
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
