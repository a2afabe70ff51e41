//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations written from the scoring rules
//! with no shared code. The crate's versions must agree with them exactly.

use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Is `needle` an in-order subsequence of `haystack`? Recursive, no cursor.
pub fn oracle_is_subsequence(needle: &[char], haystack: &[char]) -> bool {
    match (needle.split_first(), haystack.split_first()) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some((n, rest_n)), Some((h, rest_h))) => {
            if n == h {
                oracle_is_subsequence(rest_n, rest_h)
            } else {
                oracle_is_subsequence(needle, rest_h)
            }
        }
    }
}

/// Term-vs-candidate score straight from the tier table.
pub fn oracle_score(term: &str, candidate: &str) -> f64 {
    let t = term.to_lowercase();
    let c = candidate.to_lowercase();
    if t == c {
        1.0
    } else if c.contains(&t) {
        0.8
    } else {
        let tc: Vec<char> = t.chars().collect();
        let cc: Vec<char> = c.chars().collect();
        if oracle_is_subsequence(&tc, &cc) {
            (tc.len() as f64 / cc.len() as f64) * 0.6
        } else {
            0.0
        }
    }
}

/// Search oracle: score everything, filter, then insertion-sort (stable by
/// construction). Returns indices into the input.
pub fn oracle_search(
    names: &[(String, Option<String>, Option<String>)],
    term: &str,
    in_value: bool,
    in_domain: bool,
    min_score: f64,
) -> Vec<usize> {
    if term.is_empty() {
        return (0..names.len()).collect();
    }

    let mut kept: Vec<(usize, f64)> = Vec::new();
    for (i, (name, value, domain)) in names.iter().enumerate() {
        let mut best = oracle_score(term, name);
        if in_value {
            if let Some(v) = value {
                best = best.max(oracle_score(term, v) * 0.7);
            }
        }
        if in_domain {
            if let Some(d) = domain {
                best = best.max(oracle_score(term, d) * 0.5);
            }
        }
        if best >= min_score {
            // insert after every entry with score >= best
            let pos = kept.iter().position(|&(_, s)| s < best).unwrap_or(kept.len());
            kept.insert(pos, (i, best));
        }
    }
    kept.into_iter().map(|(i, _)| i).collect()
}

/// Highlight oracle: escape, then scan for case-insensitive ASCII matches by
/// hand. Only valid for ASCII inputs.
pub fn oracle_highlight_ascii(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    let lower = escaped.to_ascii_lowercase();
    let needle = term.to_ascii_lowercase();

    let mut out = String::new();
    let mut i = 0;
    while i < escaped.len() {
        if lower[i..].starts_with(&needle) {
            out.push_str("<mark>");
            out.push_str(&escaped[i..i + needle.len()]);
            out.push_str("</mark>");
            i += needle.len();
        } else {
            out.push_str(&escaped[i..i + 1]);
            i += 1;
        }
    }
    out
}

// =============================================================================
// ORACLE SELF-CHECKS
// =============================================================================

#[test]
fn oracle_score_matches_known_values() {
    assert_eq!(oracle_score("cookie", "COOKIE"), 1.0);
    assert_eq!(oracle_score("coo", "cookie"), 0.8);
    assert!((oracle_score("ke", "cookie") - 0.2).abs() < 1e-9);
    assert_eq!(oracle_score("xyz", "cookie"), 0.0);
}

#[test]
fn oracle_highlight_matches_known_values() {
    assert_eq!(
        oracle_highlight_ascii("<a>&b", "a"),
        "&lt;<mark>a</mark>&gt;&<mark>a</mark>mp;b"
    );
}

proptest! {
    /// The oracle subsequence check accepts every actual subsequence.
    #[test]
    fn oracle_accepts_filtered_subsequences(
        haystack in "[a-d]{0,12}",
        mask in prop::collection::vec(any::<bool>(), 12),
    ) {
        let h: Vec<char> = haystack.chars().collect();
        let n: Vec<char> = h
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(c, _)| *c)
            .collect();
        prop_assert!(oracle_is_subsequence(&n, &h));
    }
}
