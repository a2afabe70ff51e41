// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: how well does one search term fit one candidate string.
//!
//! Three tiers, tried in order: exact, substring, then a greedy in-order
//! subsequence check. No edit distance, no alignment.

mod matcher;

pub use matcher::*;
