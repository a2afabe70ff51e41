//! Same input, same output.
//!
//! Scoring is pure and the sort is stable, so repeated searches must agree
//! exactly, scores included, whether or not scoring ran in parallel.

use super::common::{make_full_cookie, numbered};
use crumbs::{rank, Cookie, SearchOptions};

fn mixed_jar() -> Vec<Cookie> {
    let mut jar = numbered("pref_", 300);
    for i in 0..300 {
        jar.push(make_full_cookie(
            &format!("c{}", i),
            &format!("pref{}", i % 7),
            &format!("pref{}.example", i % 5),
        ));
    }
    jar
}

#[test]
fn repeated_searches_agree() {
    let jar = mixed_jar();
    let opts = SearchOptions::new().in_value(true).in_domain(true).min_score(0.1);

    let first = rank(&jar, "pref", &opts);
    for _ in 0..5 {
        let again = rank(&jar, "pref", &opts);
        assert_eq!(first.len(), again.len());
        for (a, b) in first.iter().zip(again.iter()) {
            assert!(std::ptr::eq(a.record, b.record));
            assert_eq!(a.score, b.score);
            assert_eq!(a.field, b.field);
        }
    }
}

#[test]
fn equal_scores_follow_input_positions() {
    let jar = mixed_jar();
    let opts = SearchOptions::new().in_value(true).in_domain(true).min_score(0.1);
    let ranked = rank(&jar, "pref", &opts);

    let position = |c: &Cookie| jar.iter().position(|j| std::ptr::eq(j, c)).unwrap();
    for pair in ranked.windows(2) {
        if pair[0].score == pair[1].score {
            assert!(position(pair[0].record) < position(pair[1].record));
        }
    }
}
