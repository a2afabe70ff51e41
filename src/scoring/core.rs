// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind cookie ranking.
//!
//! Two sets of constants. Tier scores decide how well a term fits a single
//! string; field weights scale that by where the string came from.
//!
//! | Constant             | Value | Meaning                                 |
//! |----------------------|-------|-----------------------------------------|
//! | `EXACT_SCORE`        | 1.0   | Candidate equals the term               |
//! | `SUBSTRING_SCORE`    | 0.8   | Candidate contains the term             |
//! | `SUBSEQUENCE_WEIGHT` | 0.6   | Multiplier on `term_len/candidate_len`  |
//! | `NAME_WEIGHT`        | 1.0   | Name field                              |
//! | `VALUE_WEIGHT`       | 0.7   | Value field                             |
//! | `DOMAIN_WEIGHT`      | 0.5   | Domain field                            |
//!
//! The coarse tier buckets (1.0 and 0.8) mean lots of records tie. Ties are
//! resolved by input order, see [`crate::scoring::ranking`].

use crate::contracts::check_score_in_range;
use crate::fuzzy::fuzzy_score;
use crate::types::{Field, Record, SearchOptions};

// =============================================================================
// TIER SCORES
// =============================================================================

/// Score for a case-insensitive exact match.
pub const EXACT_SCORE: f64 = 1.0;

/// Score for a case-insensitive substring match.
pub const SUBSTRING_SCORE: f64 = 0.8;

/// Ceiling for subsequence matches. The ratio `term_len / candidate_len` is
/// strictly below 1 here (equal lengths would have been an exact match), so
/// a subsequence never reaches this value.
pub const SUBSEQUENCE_WEIGHT: f64 = 0.6;

// =============================================================================
// FIELD WEIGHTS
// =============================================================================

pub const NAME_WEIGHT: f64 = 1.0;
pub const VALUE_WEIGHT: f64 = 0.7;
pub const DOMAIN_WEIGHT: f64 = 0.5;

/// Weight applied to a raw fuzzy score from `field`.
pub fn field_weight(field: Field) -> f64 {
    // INVARIANT: NAME_WEIGHT >= VALUE_WEIGHT >= DOMAIN_WEIGHT (checked in contracts)
    match field {
        Field::Name => NAME_WEIGHT,
        Field::Value => VALUE_WEIGHT,
        Field::Domain => DOMAIN_WEIGHT,
    }
}

/// Weighted score of `term` against one field of `record`.
///
/// `None` when the field is not searched or the record doesn't have it.
pub fn field_score<R: Record + ?Sized>(
    record: &R,
    field: Field,
    term: &str,
    options: &SearchOptions,
) -> Option<f64> {
    if !options.searches(field) {
        return None;
    }
    let candidate = match field {
        Field::Name => Some(record.name()),
        Field::Value => record.value(),
        Field::Domain => record.domain(),
    }?;
    Some(fuzzy_score(term, candidate) * field_weight(field))
}

/// Best weighted score across the searched fields, and the field that won.
///
/// Name is always scored. On equal scores the earlier field (name, then
/// value, then domain) is reported.
pub fn record_score<R: Record + ?Sized>(
    record: &R,
    term: &str,
    options: &SearchOptions,
) -> (f64, Field) {
    let mut best = (0.0, Field::Name);

    for field in [Field::Name, Field::Value, Field::Domain] {
        if let Some(score) = field_score(record, field, term, options) {
            if score > best.0 {
                best = (score, field);
            }
        }
    }

    check_score_in_range(best.0);
    best
}
