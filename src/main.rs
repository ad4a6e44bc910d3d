// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use livesuggest::{highlight_with, rank_documents, Catalog, Marker};

mod cli;
use cli::{CatalogArgs, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays clean for listings and JSON.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info,livesuggest=debug",
        2 => "debug,livesuggest=trace",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env("LIVESUGGEST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rank {
            query,
            catalog,
            weights,
            json,
        } => {
            let catalog = load_catalog(&catalog)?;
            let options = weights.resolve()?;
            debug!(docs = catalog.len(), ?options, "ranking");

            let response = rank_documents(&query, catalog.documents(), &options)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                cli::display::print_response(&query, &response);
            }
        }
        Commands::Highlight {
            text,
            keywords,
            open,
            close,
        } => {
            let keywords: Vec<String> = keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            println!("{}", highlight_with(&text, &keywords, &Marker::new(open, close)));
        }
        Commands::Catalog { catalog } => {
            let catalog = load_catalog(&catalog)?;
            println!("{}", serde_json::to_string_pretty(catalog.documents())?);
        }
    }
    Ok(())
}

fn load_catalog(args: &CatalogArgs) -> Result<Catalog> {
    match &args.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("could not use catalog {}", path.display())),
        None => Ok(Catalog::reference()),
    }
}
