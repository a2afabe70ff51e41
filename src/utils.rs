// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Fold a string for case-insensitive comparison.
///
/// Plain Unicode lowercasing and nothing else: no diacritic stripping, no
/// whitespace collapsing. "Café" folds to "café", not "cafe".
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Length in characters, not bytes. Scores are ratios of character counts.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
