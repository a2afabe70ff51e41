// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-field search: score, filter, rank.
//!
//! Everything culminates here. For each record take the best weighted field
//! score, drop what falls under `min_score`, stable-sort the rest best-first.
//! An empty term is a pass-through: every record comes back, in input order,
//! unscored.

use crate::contracts::check_ranked_descending;
use crate::scoring::ranking::sort_ranked;
use crate::scoring::{record_score, EXACT_SCORE};
use crate::types::{Record, ScoredRecord, SearchOptions};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rank `records` against `term`, keeping the scores.
///
/// Same filtering and order as [`search`]. For an empty term every record is
/// returned, in input order, with score 1.0 and no field.
pub fn rank<'a, R: Record + Sync>(
    records: &'a [R],
    term: &str,
    options: &SearchOptions,
) -> Vec<ScoredRecord<'a, R>> {
    if term.is_empty() {
        return records
            .iter()
            .map(|record| ScoredRecord {
                record,
                score: EXACT_SCORE,
                field: None,
            })
            .collect();
    }

    let score_one = |record: &'a R| {
        let (score, field) = record_score(record, term, options);
        ScoredRecord {
            record,
            score,
            field: Some(field),
        }
    };

    // Order-preserving collect; the stable sort below depends on it.
    #[cfg(feature = "parallel")]
    let scored = records.par_iter().map(score_one);
    #[cfg(not(feature = "parallel"))]
    let scored = records.iter().map(score_one);

    let mut results: Vec<ScoredRecord<'a, R>> = scored
        .filter(|r| r.score >= options.min_score)
        .collect();

    sort_ranked(&mut results);
    check_ranked_descending(&results);

    tracing::debug!(
        term,
        total = records.len(),
        kept = results.len(),
        min_score = options.min_score,
        "ranked records"
    );

    results
}

/// Search `records` for `term`, best matches first.
///
/// Returns references into `records`; the input is never reordered.
///
/// ```
/// use crumbs::{search, Cookie, SearchOptions};
///
/// let cookies = vec![
///     Cookie::new("theme"),
///     Cookie::new("session_id"),
///     Cookie::new("session"),
/// ];
/// let found = search(&cookies, "session", &SearchOptions::default());
/// let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, vec!["session", "session_id"]);
/// ```
pub fn search<'a, R: Record + Sync>(
    records: &'a [R],
    term: &str,
    options: &SearchOptions,
) -> Vec<&'a R> {
    rank(records, term, options)
        .into_iter()
        .map(|scored| scored.record)
        .collect()
}
