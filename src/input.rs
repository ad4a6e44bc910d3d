// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The untyped boundary: JSON and JavaScript values in, typed inputs out.
//!
//! Inside Rust the type system already rules out a numeric query or a catalog
//! that isn't a list. Callers on the other side of WASM or a JSON pipe have no
//! such luck, so every value is checked here before it reaches the engine.
//! Failure is immediate: one bad document rejects the whole call.

use crate::catalog::Catalog;
use crate::error::RankError;
use crate::scoring::confidence;
use crate::search::rank_with;
use crate::types::{Document, OwnedRankedResult, RankOptions, RankedResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ranked results plus the aggregate confidence, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub results: Vec<OwnedRankedResult>,
    pub confidence: f64,
}

impl RankResponse {
    /// Detach ranked results from the catalog and attach their confidence.
    pub fn from_results(results: &[RankedResult<'_>]) -> Self {
        RankResponse {
            confidence: confidence(results),
            results: results.iter().map(RankedResult::to_owned_result).collect(),
        }
    }

    pub fn empty() -> Self {
        RankResponse {
            results: Vec::new(),
            confidence: 0.0,
        }
    }
}

/// Human-readable JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The query must be a string.
pub fn query_from_value(value: &Value) -> Result<&str, RankError> {
    value.as_str().ok_or(RankError::InvalidArgument {
        field: "query",
        expected: "string",
        found: json_type_name(value),
    })
}

/// The catalog must be an array of documents.
pub fn documents_from_value(value: &Value) -> Result<Vec<Document>, RankError> {
    let entries = value.as_array().ok_or(RankError::InvalidArgument {
        field: "catalog",
        expected: "array",
        found: json_type_name(value),
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(RankError::InvalidDocument {
                    index,
                    reason: format!("expected object, found {}", json_type_name(entry)),
                });
            }
            Document::deserialize(entry).map_err(|e| RankError::InvalidDocument {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// A missing (`null`) catalog means the built-in reference articles.
pub fn catalog_or_reference(value: &Value) -> Result<Catalog, RankError> {
    match value {
        Value::Null => Ok(Catalog::reference()),
        value => Catalog::from_value(value),
    }
}

/// Options are optional; `null` means defaults.
pub fn options_from_value(value: Option<&Value>) -> Result<RankOptions, RankError> {
    let options = match value {
        None | Some(Value::Null) => RankOptions::default(),
        Some(value @ Value::Object(_)) => {
            RankOptions::deserialize(value).map_err(|e| RankError::InvalidOption {
                option: "options",
                reason: e.to_string(),
            })?
        }
        Some(other) => {
            return Err(RankError::InvalidArgument {
                field: "options",
                expected: "object",
                found: json_type_name(other),
            })
        }
    };
    options.validate()?;
    Ok(options)
}

/// Rank untyped input end to end.
pub fn rank_value(
    query: &Value,
    catalog: &Value,
    options: Option<&Value>,
) -> Result<RankResponse, RankError> {
    let query = query_from_value(query)?;
    let docs = documents_from_value(catalog)?;
    let options = options_from_value(options)?;
    rank_documents(query, &docs, &options)
}

/// Rank typed input and detach the results from the catalog.
pub fn rank_documents(
    query: &str,
    docs: &[Document],
    options: &RankOptions,
) -> Result<RankResponse, RankError> {
    let results = rank_with(query, docs, options)?;
    Ok(RankResponse::from_results(&results))
}
