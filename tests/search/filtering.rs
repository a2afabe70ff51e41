//! Field selection and the min_score cut-off.

use super::common::{make_cookie, make_full_cookie, names, sample_jar};
use crumbs::{search, SearchOptions};

#[test]
fn value_ignored_unless_enabled() {
    let jar = vec![make_full_cookie("prefs", "darkmode", "example.com")];

    assert!(search(&jar, "darkmode", &SearchOptions::default()).is_empty());

    let opts = SearchOptions::new().in_value(true);
    assert_eq!(search(&jar, "darkmode", &opts).len(), 1);
}

#[test]
fn domain_ignored_unless_enabled() {
    let jar = vec![make_full_cookie("prefs", "x", "example.com")];

    assert!(search(&jar, "example", &SearchOptions::default()).is_empty());

    let opts = SearchOptions::new().in_domain(true);
    assert_eq!(search(&jar, "example", &opts).len(), 1);
}

#[test]
fn domain_only_match_against_cut_off() {
    // Substring in domain: 0.8 * 0.5 = 0.4
    let jar = vec![make_full_cookie("zz", "zz", "analytics.example")];

    let at_half = SearchOptions::new().in_domain(true).min_score(0.5);
    assert!(search(&jar, "analytics", &at_half).is_empty());

    let default = SearchOptions::new().in_domain(true);
    assert_eq!(search(&jar, "analytics", &default).len(), 1);
}

#[test]
fn min_score_boundary_is_inclusive() {
    let jar = vec![make_cookie("token")];
    let opts = SearchOptions::new().min_score(0.8);
    assert_eq!(search(&jar, "oke", &opts).len(), 1);

    let opts = SearchOptions::new().min_score(0.800_000_1);
    assert!(search(&jar, "oke", &opts).is_empty());
}

#[test]
fn zero_min_score_keeps_non_matches() {
    let jar = vec![make_cookie("alpha"), make_cookie("beta")];
    let opts = SearchOptions::new().min_score(0.0);
    let found = search(&jar, "zzz", &opts);
    assert_eq!(names(found), vec!["alpha", "beta"]);
}

#[test]
fn google_cookies_by_domain() {
    let jar = sample_jar();
    let opts = SearchOptions::new().in_domain(true);
    let found = search(&jar, "google", &opts);
    assert_eq!(names(found), vec!["_ga", "_gid"]);
}

#[test]
fn map_records_are_searchable() {
    use super::common::make_map_record;

    let jar = vec![
        make_map_record(&[("name", "lang"), ("domain", "wiki.org")]),
        make_map_record(&[("name", "session"), ("value", "xyz")]),
        // no name: scores 0 on name, still reachable through value
        make_map_record(&[("value", "session")]),
    ];
    let opts = SearchOptions::new().in_value(true);
    let found = search(&jar, "session", &opts);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].get("name").map(String::as_str), Some("session"));
    assert_eq!(found[1].get("name"), None);
}
