// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! Arbitrary text and terms must never panic, never produce unbalanced
//! marks, and never let a raw `<` or `>` from the input through.

#![no_main]

use crumbs::{escape_for_literal_search, escape_html, highlight, MARK_CLOSE, MARK_OPEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String)| {
    let (text, term) = input;
    let term: String = term.chars().take(32).collect();

    let out = highlight(text.as_str(), &term);

    if term.is_empty() {
        assert_eq!(out, text);
        return;
    }

    // INVARIANT 1: Marks are balanced
    assert_eq!(out.matches(MARK_OPEN).count(), out.matches(MARK_CLOSE).count());

    // INVARIANT 2: Stripping marks yields exactly the escaped text
    let stripped = out.replace(MARK_OPEN, "").replace(MARK_CLOSE, "");
    assert_eq!(stripped, escape_html(&text));
    assert!(!stripped.contains('<') && !stripped.contains('>'));

    // INVARIANT 3: Literal escaping only adds backslashes
    let escaped = escape_for_literal_search(&term);
    assert_eq!(escaped.replace('\\', ""), term.replace('\\', ""));
});
