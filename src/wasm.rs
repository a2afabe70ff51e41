// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for browser extensions.
//!
//! Records and options cross the boundary as plain JS objects via
//! `serde-wasm-bindgen`:
//!
//! ```js
//! const found = search(cookies, "sess", { searchInDomain: true, minScore: 0.4 });
//! el.innerHTML = highlight(found[0].name, "sess");
//! ```

use crate::types::{Cookie, SearchOptions};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

fn js_error(msg: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&msg.to_string()).into()
}

fn parse_options(options: Option<JsValue>) -> Result<SearchOptions, JsValue> {
    let options: SearchOptions = match options {
        Some(value) if !value.is_undefined() && !value.is_null() => {
            from_value(value).map_err(js_error)?
        }
        _ => SearchOptions::default(),
    };
    options.validate().map_err(js_error)?;
    Ok(options)
}

/// Search an array of cookies. Returns the matching cookies, best first.
#[wasm_bindgen]
pub fn search(records: JsValue, term: &str, options: Option<JsValue>) -> Result<JsValue, JsValue> {
    let cookies: Vec<Cookie> = from_value(records).map_err(js_error)?;
    let options = parse_options(options)?;
    let found = crate::search(&cookies, term, &options);
    // Flattened cookie attributes serialize as a map; json_compatible keeps
    // them plain JS objects instead of `Map`s.
    found
        .serialize(&Serializer::json_compatible())
        .map_err(js_error)
}

/// Escape `text` and wrap every occurrence of `term` in `<mark>`.
#[wasm_bindgen]
pub fn highlight(text: &str, term: &str) -> String {
    crate::highlight(text, term)
}

#[wasm_bindgen(js_name = escapeForLiteralSearch)]
pub fn escape_for_literal_search(s: &str) -> String {
    crate::escape_for_literal_search(s)
}

/// Score a single term against a single candidate.
#[wasm_bindgen(js_name = fuzzyScore)]
pub fn fuzzy_score(term: &str, candidate: &str) -> f64 {
    crate::fuzzy_score(term, candidate)
}
