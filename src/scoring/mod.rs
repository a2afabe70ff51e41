// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how cookies get their numbers.
//!
//! A record's score is the best weighted field score it reaches. Name matches
//! count in full, value matches at 0.7, domain matches at 0.5. Ranking is a
//! plain stable sort on that number.

mod core;
pub mod ranking;

pub use core::*;
