//! SearchOptions defaults, JSON shape, validation.

use crumbs::{OptionsError, SearchOptions, DEFAULT_MIN_SCORE};

#[test]
fn defaults() {
    let opts = SearchOptions::default();
    assert!(!opts.search_in_value);
    assert!(!opts.search_in_domain);
    assert_eq!(opts.min_score, 0.3);
    assert_eq!(DEFAULT_MIN_SCORE, 0.3);
}

#[test]
fn camel_case_json() {
    let opts: SearchOptions = serde_json::from_str(
        r#"{"searchInValue": true, "searchInDomain": true, "minScore": 0.5}"#,
    )
    .unwrap();
    assert_eq!(
        opts,
        SearchOptions::new().in_value(true).in_domain(true).min_score(0.5)
    );
}

#[test]
fn empty_json_is_default() {
    let opts: SearchOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, SearchOptions::default());
}

#[test]
fn validation_rejects_out_of_range() {
    for bad in [-0.1, 1.01, f64::INFINITY, f64::NAN] {
        let err = SearchOptions::new().min_score(bad).validate().unwrap_err();
        assert!(matches!(err, OptionsError::MinScoreOutOfRange(_)));
    }
}

#[test]
fn validation_message_names_the_field() {
    let err = SearchOptions::new().min_score(2.0).validate().unwrap_err();
    assert!(err.to_string().contains("minScore"));
}
