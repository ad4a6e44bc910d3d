// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how suggestions get their numbers.
//!
//! A title hit is worth more than a body hit, which is worth more than a tag
//! hit. Trending articles get a small nudge, but only once they've earned a
//! place by matching something. Ranking is then a plain stable sort on the raw
//! score.

mod confidence;
mod core;
pub mod ranking;

pub use self::confidence::confidence;
pub use self::core::*;
