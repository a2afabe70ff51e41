// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting for display.
//!
//! `highlight` turns a field value into an HTML fragment: escape the text,
//! then wrap every case-insensitive occurrence of the search term in
//! `<mark>…</mark>`. The term is a literal, never a pattern. It goes through
//! [`escape_for_literal_search`] before being compiled into a regex, so
//! `a.b` only ever matches `a.b`.
//!
//! Two behaviors worth knowing before embedding the output:
//!
//! - An empty term returns the text **as-is, unescaped**. Only non-empty
//!   terms produce escaped output.
//! - The term is searched in the *escaped* text and is not escaped itself,
//!   so `amp` matches inside `&amp;`.

use crate::contracts::check_marks_balanced;
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::ops::Range;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Characters with special meaning in the regex engine.
const PATTERN_METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Backslash-escape regex metacharacters so `s` matches only itself.
///
/// ```
/// use crumbs::escape_for_literal_search;
///
/// assert_eq!(escape_for_literal_search("a.b*"), r"a\.b\*");
/// assert_eq!(escape_for_literal_search("plain"), "plain");
/// ```
pub fn escape_for_literal_search(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if PATTERN_METACHARACTERS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape `&`, `<` and `>` for HTML text content.
///
/// `&` goes first, otherwise the `&` in `&lt;` would be escaped again.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Compiled-pattern size cap, the regex crate's own default.
const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compile `term` into a case-insensitive literal matcher.
fn literal_matcher(term: &str, size_limit: usize) -> Option<Regex> {
    match RegexBuilder::new(&escape_for_literal_search(term))
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(term_len = term.len(), error = %e, "cannot compile highlight pattern");
            None
        }
    }
}

/// Byte ranges of every case-insensitive, non-overlapping occurrence of
/// `term` in `haystack`, left to right.
///
/// Empty term, or a term too large to compile, finds nothing.
pub fn find_matches(haystack: &str, term: &str) -> Vec<Range<usize>> {
    find_matches_within(haystack, term, PATTERN_SIZE_LIMIT)
}

fn find_matches_within(haystack: &str, term: &str, size_limit: usize) -> Vec<Range<usize>> {
    if term.is_empty() {
        return Vec::new();
    }
    match literal_matcher(term, size_limit) {
        Some(re) => re.find_iter(haystack).map(|m| m.range()).collect(),
        None => Vec::new(),
    }
}

/// Render `text` as an HTML fragment with every occurrence of `term` marked.
///
/// Original casing of the matched text is kept.
///
/// ```
/// use crumbs::highlight;
///
/// assert_eq!(highlight("SessionID", "id"), "Session<mark>ID</mark>");
/// assert_eq!(highlight("a<b", "b"), "a&lt;<mark>b</mark>");
/// assert_eq!(highlight("a<b", ""), "a<b");
/// ```
pub fn highlight<T: fmt::Display + ?Sized>(text: &T, term: &str) -> String {
    highlight_within(&text.to_string(), term, PATTERN_SIZE_LIMIT)
}

fn highlight_within(text: &str, term: &str, size_limit: usize) -> String {
    if term.is_empty() {
        return text.to_string();
    }

    let escaped = escape_html(text);
    let ranges = find_matches_within(&escaped, term, size_limit);
    if ranges.is_empty() {
        return escaped;
    }

    let extra = ranges.len() * (MARK_OPEN.len() + MARK_CLOSE.len());
    let mut out = String::with_capacity(escaped.len() + extra);
    let mut last = 0;
    for range in ranges {
        out.push_str(&escaped[last..range.start]);
        out.push_str(MARK_OPEN);
        out.push_str(&escaped[range.clone()]);
        out.push_str(MARK_CLOSE);
        last = range.end;
    }
    out.push_str(&escaped[last..]);

    check_marks_balanced(&out);
    out
}
