// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the suggestion panel.
//!
//! The panel constructs one `SuggestionEngine` on mount and calls `rank` from
//! its debounced input handler. Every JavaScript value goes through the same
//! validation as JSON input ([`crate::input`]), so a number passed as the
//! query throws instead of silently ranking `"42"`.

use crate::catalog::Catalog;
use crate::highlight::highlight;
use crate::input::{catalog_or_reference, options_from_value, query_from_value, rank_documents};
use crate::types::RankOptions;
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

fn to_js_error(err: impl ToString) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn js_to_json(value: JsValue) -> Result<Value, JsValue> {
    if value.is_undefined() {
        return Ok(Value::Null);
    }
    from_value(value).map_err(to_js_error)
}

fn json_to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(to_js_error)
}

/// WASM-accessible suggestion engine over a fixed catalog.
#[wasm_bindgen]
pub struct SuggestionEngine {
    catalog: Catalog,
    options: RankOptions,
}

#[wasm_bindgen]
impl SuggestionEngine {
    /// Create an engine from a catalog array and optional options object.
    ///
    /// Pass `undefined` for the catalog to use the built-in articles.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: JsValue, options: JsValue) -> Result<SuggestionEngine, JsValue> {
        let catalog = catalog_or_reference(&js_to_json(catalog)?).map_err(to_js_error)?;
        let options = options_from_value(Some(&js_to_json(options)?)).map_err(to_js_error)?;
        Ok(SuggestionEngine { catalog, options })
    }

    /// Rank the catalog. Returns `{ results, confidence }`.
    #[wasm_bindgen]
    pub fn rank(&self, query: JsValue) -> Result<JsValue, JsValue> {
        let query = js_to_json(query)?;
        let query = query_from_value(&query).map_err(to_js_error)?;
        let response =
            rank_documents(query, self.catalog.documents(), &self.options).map_err(to_js_error)?;
        json_to_js(&response)
    }

    /// Wrap keyword occurrences in `<mark>` tags.
    #[wasm_bindgen]
    pub fn highlight(&self, text: &str, keywords: Vec<String>) -> String {
        highlight(text, &keywords)
    }

    /// Number of documents in the catalog.
    #[wasm_bindgen(js_name = docCount)]
    pub fn doc_count(&self) -> usize {
        self.catalog.len()
    }
}
