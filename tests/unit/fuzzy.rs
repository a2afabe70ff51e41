//! Scorer tiers through the public API.

use super::common::assert_score;
use crumbs::{fuzzy_match, fuzzy_score, MatchTier, SUBSEQUENCE_WEIGHT};

#[test]
fn self_match_scores_one() {
    for t in ["a", "session", "_ga", "Cookie-Consent", "ÉCLAIR"] {
        assert_eq!(fuzzy_score(t, t), 1.0, "term {:?}", t);
        assert_eq!(fuzzy_score(&t.to_lowercase(), &t.to_uppercase()), 1.0);
    }
}

#[test]
fn substring_scores_point_eight() {
    assert_eq!(fuzzy_score("coo", "cookie"), 0.8);
    assert_eq!(fuzzy_score("okie", "COOKIE"), 0.8);
    assert_eq!(fuzzy_match("ie", "cookie").tier, MatchTier::Substring);
}

#[test]
fn subsequence_is_length_ratio() {
    assert_score(fuzzy_score("ke", "cookie"), 0.2);
    assert_score(fuzzy_score("ck", "cookie"), 2.0 / 6.0 * SUBSEQUENCE_WEIGHT);
    assert_score(fuzzy_score("sid", "session_id"), 0.18);
}

#[test]
fn subsequence_ignores_match_position() {
    // Same lengths, characters in different places: same score
    assert_eq!(fuzzy_score("ac", "abcdef"), fuzzy_score("ac", "abxxxc"));
}

#[test]
fn greedy_scan_never_backtracks() {
    // First 'a' is taken for the first term char; the rest still follows
    assert_eq!(fuzzy_match("aab", "axaxb").tier, MatchTier::Subsequence);
    assert_eq!(fuzzy_match("ba", "ab").tier, MatchTier::None);
}

#[test]
fn non_subsequence_scores_zero() {
    assert_eq!(fuzzy_score("xyz", "cookie"), 0.0);
    assert_eq!(fuzzy_match("xyz", "cookie").tier, MatchTier::None);
}

#[test]
fn short_candidate_scores_zero() {
    assert_eq!(fuzzy_score("cookie", "coo"), 0.0);
    assert_eq!(fuzzy_score("x", ""), 0.0);
}

#[test]
fn subsequence_never_reaches_substring() {
    // term_len < candidate_len whenever we get to the subsequence tier
    let m = fuzzy_match("abcdefghi", "abcdefghxi");
    assert_eq!(m.tier, MatchTier::Subsequence);
    assert!(m.score < SUBSEQUENCE_WEIGHT);
    assert!(m.score < 0.8);
}
