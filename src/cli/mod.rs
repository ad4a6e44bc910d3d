// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the livesuggest command-line interface.
//!
//! Three subcommands: `rank` to run a query against a catalog, `highlight` to
//! preview keyword marking on arbitrary text, and `catalog` to dump the active
//! catalog as JSON. Weights can come from an options file and be overridden
//! one flag at a time.

pub mod display;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use livesuggest::RankOptions;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "livesuggest",
    about = "Rank knowledge-base articles against a live query",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the catalog against a query
    Rank {
        /// Free-text query
        query: String,

        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        weights: WeightArgs,

        /// Print `{results, confidence}` as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Highlight keywords in a piece of text
    Highlight {
        /// Text to mark up
        text: String,

        /// Comma-separated keywords
        #[arg(short, long, value_delimiter = ',', required = true)]
        keywords: Vec<String>,

        /// Opening marker
        #[arg(long, default_value = "<mark>")]
        open: String,

        /// Closing marker
        #[arg(long, default_value = "</mark>")]
        close: String,
    },

    /// Print the active catalog as JSON
    Catalog {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[derive(Args)]
pub struct CatalogArgs {
    /// JSON catalog file (defaults to the built-in reference articles)
    #[arg(long, env = "LIVESUGGEST_CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct WeightArgs {
    /// JSON options file (camelCase keys, missing keys keep defaults)
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Weight for a title match
    #[arg(long)]
    pub title_weight: Option<f64>,

    /// Weight for a body match
    #[arg(long)]
    pub body_weight: Option<f64>,

    /// Weight for a tag match
    #[arg(long)]
    pub tag_weight: Option<f64>,

    /// Boost for trending articles
    #[arg(long)]
    pub trending_boost: Option<f64>,
}

impl WeightArgs {
    /// Options file first, then individual flag overrides. The merged result
    /// must still be valid.
    pub fn resolve(&self) -> Result<RankOptions> {
        let mut options = match &self.options {
            Some(path) => read_options_file(path)?,
            None => RankOptions::default(),
        };

        if let Some(limit) = self.limit {
            options.max_results = limit;
        }
        if let Some(weight) = self.title_weight {
            options.title_weight = weight;
        }
        if let Some(weight) = self.body_weight {
            options.body_weight = weight;
        }
        if let Some(weight) = self.tag_weight {
            options.tag_weight = weight;
        }
        if let Some(boost) = self.trending_boost {
            options.trending_boost = boost;
        }

        options.validate()?;
        Ok(options)
    }
}

fn read_options_file(path: &Path) -> Result<RankOptions> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read options file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid options file {}", path.display()))
}
