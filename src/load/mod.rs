// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading cookie exports from disk.
//!
//! Two formats are understood:
//!
//! - JSON, as written by browser extensions: a bare array of cookies, or an
//!   object with a `cookies` array.
//! - Netscape `cookies.txt`, as written by curl, wget and most "export
//!   cookies" extensions.
//!
//! Files ending in `.txt` are read as Netscape. Anything else is sniffed:
//! content opening with `[` or `{` is JSON, the rest Netscape.

mod netscape;

pub use netscape::parse_netscape;

use crate::types::Cookie;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a cookie export could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid cookie JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: expected 7 tab-separated fields, found {found}")]
    NetscapeFields { line: usize, found: usize },
    #[error("line {line}: invalid expiry {value:?}")]
    NetscapeExpiry { line: usize, value: String },
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Netscape,
}

impl Format {
    /// Pick a format from the file extension, falling back to the content.
    pub fn detect(path: &Path, content: &str) -> Self {
        let is_txt = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
        if is_txt {
            return Format::Netscape;
        }
        match content.trim_start().chars().next() {
            Some('[') | Some('{') => Format::Json,
            _ => Format::Netscape,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonExport {
    List(Vec<Cookie>),
    Wrapped { cookies: Vec<Cookie> },
}

/// Parse a JSON cookie export.
pub fn parse_json(content: &str) -> Result<Vec<Cookie>, LoadError> {
    // Try the array shape first so its error message is the one reported
    // for the common case.
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }
    match serde_json::from_str(trimmed)? {
        JsonExport::List(cookies) | JsonExport::Wrapped { cookies } => Ok(cookies),
    }
}

/// Parse an in-memory export in the given format.
pub fn parse_cookies(content: &str, format: Format) -> Result<Vec<Cookie>, LoadError> {
    match format {
        Format::Json => parse_json(content),
        Format::Netscape => parse_netscape(content),
    }
}

/// Load cookies from a file, detecting its format.
pub fn load_cookies(path: impl AsRef<Path>) -> Result<Vec<Cookie>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let format = Format::detect(path, &content);
    let cookies = parse_cookies(&content, format)?;
    tracing::info!(
        path = %path.display(),
        ?format,
        count = cookies.len(),
        "loaded cookies"
    );
    Ok(cookies)
}
