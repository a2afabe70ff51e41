// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term-vs-candidate scoring.
//!
//! Both strings are case-folded, then the first matching tier wins:
//!
//! | Tier          | Score                                  |
//! |---------------|----------------------------------------|
//! | `Exact`       | 1.0                                    |
//! | `Substring`   | 0.8                                    |
//! | `Subsequence` | `term_len / candidate_len * 0.6`       |
//! | `None`        | 0.0                                    |
//!
//! The subsequence tier is a single greedy left-to-right scan. It never looks
//! back, so it answers "are all term characters present in order?" and
//! nothing about where they landed. Since a full consumption always matches
//! exactly `term_len` characters, the score is a pure length ratio.
//!
//! An empty term matches everything (tier `Exact` or `Substring`). Callers
//! that care, like `search`, short-circuit before getting here.

use crate::contracts::check_score_in_range;
use crate::scoring::{EXACT_SCORE, SUBSEQUENCE_WEIGHT, SUBSTRING_SCORE};
use crate::utils::{char_len, fold_case};
use serde::Serialize;

/// Which rule produced a score.
///
/// Ordered best-first, so `Exact < Substring < Subsequence < None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Exact,
    Substring,
    Subsequence,
    None,
}

/// Outcome of matching one term against one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuzzyMatch {
    pub tier: MatchTier,
    /// In [0, 1].
    pub score: f64,
}

impl FuzzyMatch {
    const NO_MATCH: FuzzyMatch = FuzzyMatch {
        tier: MatchTier::None,
        score: 0.0,
    };

    pub fn is_match(&self) -> bool {
        self.tier != MatchTier::None
    }
}

/// Match `term` against `candidate`, case-insensitively.
pub fn fuzzy_match(term: &str, candidate: &str) -> FuzzyMatch {
    let term = fold_case(term);
    let candidate = fold_case(candidate);

    if candidate == term {
        return FuzzyMatch {
            tier: MatchTier::Exact,
            score: EXACT_SCORE,
        };
    }

    if candidate.contains(term.as_str()) {
        return FuzzyMatch {
            tier: MatchTier::Substring,
            score: SUBSTRING_SCORE,
        };
    }

    match subsequence_len(&term, &candidate) {
        Some(matched) => {
            let score = (matched as f64 / char_len(&candidate) as f64) * SUBSEQUENCE_WEIGHT;
            check_score_in_range(score);
            FuzzyMatch {
                tier: MatchTier::Subsequence,
                score,
            }
        }
        None => FuzzyMatch::NO_MATCH,
    }
}

/// Score `term` against `candidate`. See [`fuzzy_match`] for the tiers.
///
/// ```
/// use crumbs::fuzzy_score;
///
/// assert_eq!(fuzzy_score("Cookie", "cookie"), 1.0);
/// assert_eq!(fuzzy_score("coo", "cookie"), 0.8);
/// assert!((fuzzy_score("ke", "cookie") - 0.2).abs() < 1e-9);
/// assert_eq!(fuzzy_score("xyz", "cookie"), 0.0);
/// ```
pub fn fuzzy_score(term: &str, candidate: &str) -> f64 {
    fuzzy_match(term, candidate).score
}

/// Greedy in-order scan. Returns the matched character count when every
/// character of `term` was consumed, `None` otherwise.
///
/// Inputs are expected to be case-folded already.
fn subsequence_len(term: &str, candidate: &str) -> Option<usize> {
    let needle: Vec<char> = term.chars().collect();
    let mut cursor = 0;

    for c in candidate.chars() {
        if cursor == needle.len() {
            break;
        }
        if c == needle[cursor] {
            cursor += 1;
        }
    }

    (cursor == needle.len()).then_some(cursor)
}
