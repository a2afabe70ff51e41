// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for scoring and ranking.
//!
//! Debug-mode assertions (`debug_assert!`), free in release builds. They
//! catch a broken constant or comparator during development instead of
//! letting it surface as a subtly wrong result order.
//!
//! | Contract Function         | Property                                   |
//! |---------------------------|--------------------------------------------|
//! | `check_score_in_range`    | Every score lies in [0, 1]                 |
//! | `check_ranked_descending` | Ranked output never increases in score     |
//! | `check_marks_balanced`    | Highlighted output opens and closes marks  |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Tier and weight ordering. If any of these fail, the crate won't build.
const _: () = {
    use crate::scoring::{
        DOMAIN_WEIGHT, EXACT_SCORE, NAME_WEIGHT, SUBSEQUENCE_WEIGHT, SUBSTRING_SCORE,
        VALUE_WEIGHT,
    };

    // INVARIANT: exact beats substring beats any subsequence
    assert!(EXACT_SCORE > SUBSTRING_SCORE);
    assert!(SUBSTRING_SCORE > SUBSEQUENCE_WEIGHT);
    assert!(SUBSEQUENCE_WEIGHT > 0.0);

    // INVARIANT: scores stay in [0, 1]
    assert!(EXACT_SCORE <= 1.0);

    // INVARIANT: name >= value >= domain, all in (0, 1]
    assert!(NAME_WEIGHT <= 1.0);
    assert!(NAME_WEIGHT >= VALUE_WEIGHT);
    assert!(VALUE_WEIGHT >= DOMAIN_WEIGHT);
    assert!(DOMAIN_WEIGHT > 0.0);
};

use crate::highlight::{MARK_CLOSE, MARK_OPEN};
use crate::types::ScoredRecord;

/// Check that a score lies in [0, 1].
///
/// # Panics (debug builds only)
/// Panics if `score` is NaN or outside [0, 1].
#[inline]
pub fn check_score_in_range(score: f64) {
    // INVARIANT: 0 <= score <= 1
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: score {} outside [0, 1]",
        score
    );
}

/// Check that ranked results are sorted best-first.
///
/// # Panics (debug builds only)
/// Panics at the first position where the score goes up.
#[inline]
pub fn check_ranked_descending<R>(results: &[ScoredRecord<'_, R>]) {
    for (i, pair) in results.windows(2).enumerate() {
        // INVARIANT: results[i].score >= results[i + 1].score
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: ranked[{}].score {} < ranked[{}].score {}",
            i,
            pair[0].score,
            i + 1,
            pair[1].score
        );
    }
}

/// Check that every `<mark>` the highlighter added is closed.
///
/// The escaped input can't contain a literal `<`, so any tag in the output
/// is ours.
#[inline]
pub fn check_marks_balanced(highlighted: &str) {
    debug_assert_eq!(
        highlighted.matches(MARK_OPEN).count(),
        highlighted.matches(MARK_CLOSE).count(),
        "Contract violation: unbalanced marks in {:?}",
        highlighted
    );
}
