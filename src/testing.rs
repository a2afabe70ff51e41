// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Cookie;
use std::collections::HashMap;

/// Create a cookie with just a name.
///
/// This is the canonical implementation used across all tests.
pub fn make_cookie(name: &str) -> Cookie {
    Cookie::new(name)
}

/// Create a cookie with all three searchable fields.
pub fn make_full_cookie(name: &str, value: &str, domain: &str) -> Cookie {
    Cookie::new(name).with_value(value).with_domain(domain)
}

/// Create a map-shaped record, the way loosely typed callers hand them over.
pub fn make_map_record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A small, realistic cookie jar.
pub fn sample_jar() -> Vec<Cookie> {
    vec![
        make_full_cookie("_ga", "GA1.2.1234567890.1700000000", ".google.com"),
        make_full_cookie("session_id", "a1b2c3d4", "shop.example.com"),
        make_full_cookie("theme", "dark", "docs.rs"),
        make_full_cookie("SESSION", "ffee99", "github.com"),
        make_full_cookie("csrftoken", "Zx81kd", "www.djangoproject.com"),
        make_full_cookie("cookie_consent", "accepted", "news.example.org"),
        make_full_cookie("_gid", "GA1.2.987654321.1700000000", ".google.com"),
    ]
}

/// Names of cookies, in order.
pub fn names<'a, I>(cookies: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Cookie>,
{
    cookies.into_iter().map(|c| c.name.as_str()).collect()
}
