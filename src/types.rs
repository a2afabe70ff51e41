// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a cookie search.
//!
//! Records are whatever the caller hands us. We only ever look at three fields
//! by convention (`name`, `value`, `domain`), so the [`Record`] trait is the
//! seam: the typed [`Cookie`] implements it, and so do plain string maps.
//!
//! | Rust Type       | Purpose                                        |
//! |-----------------|------------------------------------------------|
//! | `Record`        | Read-only view over name / value / domain      |
//! | `Cookie`        | Typed browser cookie, extra attributes kept    |
//! | `Field`         | Which field a score came from (for weighting)  |
//! | `SearchOptions` | Which fields to search and the score cut-off   |
//! | `ScoredRecord`  | A borrowed record paired with its best score   |
//!
//! # Missing `name`
//!
//! `Cookie` requires `name` by type: an export without it fails to load.
//! Map records read a missing `name` as `""`, which scores 0 for every
//! non-empty search term.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

// =============================================================================
// RECORDS
// =============================================================================

/// Anything with a searchable name and, optionally, a value and a domain.
pub trait Record {
    /// The cookie name. Always scored.
    fn name(&self) -> &str;

    /// The cookie value, scored only with [`SearchOptions::search_in_value`].
    fn value(&self) -> Option<&str>;

    /// The cookie domain, scored only with [`SearchOptions::search_in_domain`].
    fn domain(&self) -> Option<&str>;
}

impl<R: Record + ?Sized> Record for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn value(&self) -> Option<&str> {
        (**self).value()
    }

    fn domain(&self) -> Option<&str> {
        (**self).domain()
    }
}

/// A browser cookie as exported by an extension or `cookies.txt`.
///
/// Only `name`, `value` and `domain` take part in search. Everything else the
/// export carried (`path`, `secure`, `httpOnly`, `expirationDate`, ...) rides
/// along in `attributes` and is written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Cookie {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            domain: None,
            attributes: serde_json::Map::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Attach an extra attribute (e.g. `path`, `secure`).
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

impl Record for Cookie {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}

impl Record for HashMap<String, String> {
    fn name(&self) -> &str {
        self.get("name").map(String::as_str).unwrap_or("")
    }

    fn value(&self) -> Option<&str> {
        self.get("value").map(String::as_str)
    }

    fn domain(&self) -> Option<&str> {
        self.get("domain").map(String::as_str)
    }
}

impl Record for BTreeMap<String, String> {
    fn name(&self) -> &str {
        self.get("name").map(String::as_str).unwrap_or("")
    }

    fn value(&self) -> Option<&str> {
        self.get("value").map(String::as_str)
    }

    fn domain(&self) -> Option<&str> {
        self.get("domain").map(String::as_str)
    }
}

/// The searchable fields, in weight order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Value,
    Domain,
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Default inclusive score cut-off.
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

/// Search options.
///
/// Deserializes from the camelCase shape browser code sends
/// (`{"searchInValue": true, "minScore": 0.5}`); absent keys take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Also score the `value` field (weight 0.7). Default: false.
    pub search_in_value: bool,
    /// Also score the `domain` field (weight 0.5). Default: false.
    pub search_in_domain: bool,
    /// Inclusive lower bound on a record's best score. Default: 0.3.
    pub min_score: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            search_in_value: false,
            search_in_domain: false,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_value(mut self, enabled: bool) -> Self {
        self.search_in_value = enabled;
        self
    }

    pub fn in_domain(mut self, enabled: bool) -> Self {
        self.search_in_domain = enabled;
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Is this field part of the search?
    pub fn searches(&self, field: Field) -> bool {
        match field {
            Field::Name => true,
            Field::Value => self.search_in_value,
            Field::Domain => self.search_in_domain,
        }
    }

    /// Check options coming in from outside the crate (CLI flags, JS).
    ///
    /// The cut-off must be finite and within [0, 1]. Search itself never
    /// fails, so this runs at the boundaries.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.min_score.is_finite() || !(0.0..=1.0).contains(&self.min_score) {
            return Err(OptionsError::MinScoreOutOfRange(self.min_score));
        }
        Ok(())
    }
}

/// Rejected search options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("minScore must be a finite number in [0, 1], got {0}")]
    MinScoreOutOfRange(f64),
}

// =============================================================================
// RESULTS
// =============================================================================

/// A record paired with the best weighted score it achieved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecord<'a, R> {
    pub record: &'a R,
    /// Best score across searched fields, in [0, 1].
    pub score: f64,
    /// Field that produced `score`. `None` for unscored (empty query) results.
    pub field: Option<Field>,
}
