// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Netscape `cookies.txt` parsing.
//!
//! One cookie per line, seven tab-separated columns:
//!
//! ```text
//! domain  include_subdomains  path  secure  expiry  name  value
//! ```
//!
//! Lines starting with `#` are comments, except the `#HttpOnly_` prefix curl
//! uses to mark HTTP-only cookies. Attribute names on the resulting cookies
//! follow the browser-extension JSON shape (`hostOnly`, `httpOnly`,
//! `expirationDate`, ...) so both formats search and print the same way.

use super::LoadError;
use crate::types::Cookie;
use serde_json::Value;

const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

fn flag(field: &str) -> bool {
    field.eq_ignore_ascii_case("TRUE")
}

/// Parse the contents of a `cookies.txt` file.
pub fn parse_netscape(content: &str) -> Result<Vec<Cookie>, LoadError> {
    let mut cookies = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');

        let (line, http_only) = match line.strip_prefix(HTTP_ONLY_PREFIX) {
            Some(rest) => (rest, true),
            None => (line, false),
        };
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        // The value column may be empty, and some exporters drop the
        // trailing tab along with it.
        let fields = match fields.len() {
            7 => fields,
            6 => {
                let mut padded = fields;
                padded.push("");
                padded
            }
            found => return Err(LoadError::NetscapeFields { line: line_no, found }),
        };

        let expiry: u64 = fields[4]
            .trim()
            .parse()
            .map_err(|_| LoadError::NetscapeExpiry {
                line: line_no,
                value: fields[4].to_string(),
            })?;

        let mut cookie = Cookie::new(fields[5])
            .with_value(fields[6])
            .with_domain(fields[0])
            .with_attribute("hostOnly", Value::Bool(!flag(fields[1])))
            .with_attribute("path", Value::String(fields[2].to_string()))
            .with_attribute("secure", Value::Bool(flag(fields[3])))
            .with_attribute("httpOnly", Value::Bool(http_only));
        // Expiry 0 marks a session cookie
        if expiry == 0 {
            cookie = cookie.with_attribute("session", Value::Bool(true));
        } else {
            cookie = cookie
                .with_attribute("session", Value::Bool(false))
                .with_attribute("expirationDate", Value::from(expiry));
        }
        cookies.push(cookie);
    }

    Ok(cookies)
}
