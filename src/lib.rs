// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search, filtering and highlighting for browser cookies.
//!
//! Three pure operations over records the caller already holds in memory:
//! score a term against a string, search a list of records with weighted
//! fields, and mark matches in a string for HTML display.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  fuzzy/     │────▶│  scoring/    │────▶│  search/    │
//! │ (fuzzy_     │     │ (field       │     │ (rank,      │
//! │  score)     │     │  weights)    │     │  search)    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌──────────────┐                         ┌─────────────┐
//! │ highlight.rs │                         │  load/      │
//! │ (<mark>)     │                         │ (json, txt) │
//! └──────────────┘                         └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use crumbs::{highlight, search, Cookie, SearchOptions};
//!
//! let jar = vec![
//!     Cookie::new("_ga").with_domain(".google.com"),
//!     Cookie::new("sessionid").with_domain("example.com"),
//! ];
//! let options = SearchOptions::new().in_domain(true);
//!
//! let found = search(&jar, "session", &options);
//! assert_eq!(found.len(), 1);
//! assert_eq!(highlight(&found[0].name, "session"), "<mark>session</mark>id");
//! ```

// Module declarations
pub mod contracts;
mod fuzzy;
mod highlight;
pub mod load;
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use fuzzy::{fuzzy_match, fuzzy_score, FuzzyMatch, MatchTier};
pub use highlight::{
    escape_for_literal_search, escape_html, find_matches, highlight, MARK_CLOSE, MARK_OPEN,
};
pub use load::{load_cookies, parse_cookies, parse_json, parse_netscape, Format, LoadError};
pub use scoring::ranking::compare_scored;
pub use scoring::{
    field_score, field_weight, record_score, DOMAIN_WEIGHT, EXACT_SCORE, NAME_WEIGHT,
    SUBSEQUENCE_WEIGHT, SUBSTRING_SCORE, VALUE_WEIGHT,
};
pub use search::{rank, search};
pub use types::{
    Cookie, Field, OptionsError, Record, ScoredRecord, SearchOptions, DEFAULT_MIN_SCORE,
};
pub use utils::fold_case;
