// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored cookies get sorted.
//!
//! Higher score first, and that's the whole comparator. Records that tie keep
//! the order the caller gave them, so every sort here must be stable
//! (`sort_by`, rayon's `par_sort_by`).

use crate::types::ScoredRecord;
use std::cmp::Ordering;

/// Compare two scored records for ranking: descending by score.
///
/// Incomparable scores (NaN) compare equal so they keep their input position.
pub fn compare_scored<R>(a: &ScoredRecord<'_, R>, b: &ScoredRecord<'_, R>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Stable sort, best first.
pub fn sort_ranked<R: Sync>(results: &mut [ScoredRecord<'_, R>]) {
    #[cfg(feature = "parallel")]
    {
        use rayon::slice::ParallelSliceMut;
        results.par_sort_by(compare_scored);
    }

    #[cfg(not(feature = "parallel"))]
    results.sort_by(compare_scored);
}
