// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, inside [0, 1], and deterministic. Ranked output
//! must be sorted, above the cut-off, and stable for equal scores.

#![no_main]

use arbitrary::Arbitrary;
use crumbs::{fuzzy_score, rank, Cookie, SearchOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    term: String,
    cookies: Vec<(String, Option<String>, Option<String>)>,
    in_value: bool,
    in_domain: bool,
    min_score: u8,
}

fuzz_target!(|input: Input| {
    let term: String = input.term.chars().take(64).collect();
    let jar: Vec<Cookie> = input
        .cookies
        .into_iter()
        .take(64)
        .map(|(name, value, domain)| Cookie {
            name,
            value,
            domain,
            attributes: Default::default(),
        })
        .collect();
    let options = SearchOptions::new()
        .in_value(input.in_value)
        .in_domain(input.in_domain)
        .min_score(f64::from(input.min_score) / 255.0);

    // INVARIANT 1: Raw scores are bounded and deterministic
    for cookie in &jar {
        let a = fuzzy_score(&term, &cookie.name);
        let b = fuzzy_score(&term, &cookie.name);
        assert!((0.0..=1.0).contains(&a), "score {} out of range", a);
        assert_eq!(a, b, "score changed between calls");
    }

    let first = rank(&jar, &term, &options);
    let second = rank(&jar, &term, &options);

    // INVARIANT 2: Ranking is deterministic
    assert_eq!(first.len(), second.len());
    for (r1, r2) in first.iter().zip(&second) {
        assert!(std::ptr::eq(r1.record, r2.record), "result order changed");
        assert_eq!(r1.score, r2.score);
    }

    if term.is_empty() {
        // INVARIANT 3: Empty term returns the jar unchanged
        assert_eq!(first.len(), jar.len());
        return;
    }

    let position = |c: &Cookie| jar.iter().position(|j| std::ptr::eq(j, c)).unwrap();
    for pair in first.windows(2) {
        // INVARIANT 4: Descending, and input order among ties
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(position(pair[0].record) < position(pair[1].record));
        }
    }
    for result in &first {
        // INVARIANT 5: Nothing below the cut-off
        assert!(result.score.is_finite());
        assert!(result.score >= options.min_score);
    }
});
