// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for export parsing. Malformed input must come back as an
//! error, never a panic.

#![no_main]

use crumbs::{parse_cookies, Format};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    for format in [Format::Json, Format::Netscape] {
        if let Ok(cookies) = parse_cookies(content, format) {
            // Every parsed Netscape line yields exactly one cookie
            if format == Format::Netscape {
                let lines = content.lines().count();
                assert!(cookies.len() <= lines);
            }
        }
    }
});
