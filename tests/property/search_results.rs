//! Search result property tests.
//!
//! - Output is a filtered, reordered view of the input
//! - Scores are non-increasing and at or above the cut-off
//! - Ties keep input order
//! - Results agree with the oracle search

use super::oracles::oracle_search;
use crumbs::{rank, search, Cookie, SearchOptions};
use proptest::prelude::*;

type Row = (String, Option<String>, Option<String>);

fn row_strategy() -> impl Strategy<Value = Row> {
    (
        "[a-d_]{0,8}",
        prop::option::of("[a-d]{0,8}"),
        prop::option::of("[a-d.]{0,10}"),
    )
}

fn jar_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(row_strategy(), 0..25)
}

fn to_cookies(rows: &[Row]) -> Vec<Cookie> {
    rows.iter()
        .map(|(name, value, domain)| Cookie {
            name: name.clone(),
            value: value.clone(),
            domain: domain.clone(),
            attributes: Default::default(),
        })
        .collect()
}

fn options_strategy() -> impl Strategy<Value = SearchOptions> {
    (any::<bool>(), any::<bool>(), 0u8..=10).prop_map(|(v, d, m)| {
        SearchOptions::new()
            .in_value(v)
            .in_domain(d)
            .min_score(f64::from(m) / 10.0)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: search agrees with the oracle, order included.
    #[test]
    fn prop_search_matches_oracle(
        rows in jar_strategy(),
        term in "[a-d]{0,4}",
        opts in options_strategy(),
    ) {
        let jar = to_cookies(&rows);
        let found = search(&jar, &term, &opts);
        let actual: Vec<usize> = found
            .iter()
            .map(|c| jar.iter().position(|j| std::ptr::eq(j, *c)).unwrap())
            .collect();
        let expected = oracle_search(
            &rows,
            &term,
            opts.search_in_value,
            opts.search_in_domain,
            opts.min_score,
        );
        prop_assert_eq!(actual, expected);
    }

    /// Property: scores never increase down the list and never drop below
    /// the cut-off.
    #[test]
    fn prop_ranked_descending_above_cut_off(
        rows in jar_strategy(),
        term in "[a-d]{1,4}",
        opts in options_strategy(),
    ) {
        let jar = to_cookies(&rows);
        let ranked = rank(&jar, &term, &opts);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for r in &ranked {
            prop_assert!(r.score >= opts.min_score);
        }
    }

    /// Property: equal scores appear in input order.
    #[test]
    fn prop_ties_stable(rows in jar_strategy(), term in "[a-d]{1,3}") {
        let jar = to_cookies(&rows);
        let opts = SearchOptions::new().in_value(true).in_domain(true).min_score(0.0);
        let ranked = rank(&jar, &term, &opts);
        let pos = |c: &Cookie| jar.iter().position(|j| std::ptr::eq(j, c)).unwrap();
        for pair in ranked.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(pos(pair[0].record) < pos(pair[1].record));
            }
        }
    }

    /// Property: an empty term hands back the whole jar untouched.
    #[test]
    fn prop_empty_term_identity(rows in jar_strategy(), opts in options_strategy()) {
        let jar = to_cookies(&rows);
        let found = search(&jar, "", &opts);
        prop_assert_eq!(found.len(), jar.len());
        for (a, b) in found.iter().zip(jar.iter()) {
            prop_assert!(std::ptr::eq(*a, b));
        }
    }

    /// Property: enabling more fields never loses a result.
    #[test]
    fn prop_more_fields_superset(rows in jar_strategy(), term in "[a-d]{1,4}") {
        let jar = to_cookies(&rows);
        let narrow = search(&jar, &term, &SearchOptions::default());
        let wide_opts = SearchOptions::new().in_value(true).in_domain(true);
        let wide = search(&jar, &term, &wide_opts);
        for c in &narrow {
            prop_assert!(wide.iter().any(|w| std::ptr::eq(*w, *c)));
        }
    }
}
