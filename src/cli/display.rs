// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for crumbs CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. Respects `NO_COLOR` and non-TTY
//! detection for pipelines.
//!
//! # Theme detection order
//!
//! 1. `CRUMBS_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use crumbs::{find_matches, Field, MatchTier};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn theme_from_env(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background colors 7 and up (except 8) are light
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    theme_from_env(
        std::env::var("CRUMBS_THEME").ok().as_deref(),
        std::env::var("COLORFGBG").ok().as_deref(),
    )
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const UNDERLINE: &str = "\x1b[4m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

/// One Light palette
mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_YELLOW);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut to at most `max_chars` characters, ending in `…` when shortened.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Border color and reset, both empty when colors are off
fn border(colors: bool) -> (String, &'static str) {
    if colors {
        (GRAY(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Content line: │ content          │
fn format_row(content: &str, colors: bool) -> String {
    let (border, reset) = border(colors);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!(
        "{}│{}{}{}{}│{}",
        border,
        reset,
        content,
        " ".repeat(pad),
        border,
        reset
    )
}

/// Section header: ┌─ LABEL ──────────┐
fn format_section_top(label: &str, colors: bool) -> String {
    let (border, reset) = border(colors);
    let label = if colors {
        format!("{}{}{}{}", BOLD, CYAN(), label, RESET)
    } else {
        label.to_string()
    };
    let label_part = format!("─ {} ", label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    )
}

/// Section footer: └──────────────────┘
fn format_section_bot(colors: bool) -> String {
    let (border, reset) = border(colors);
    format!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset)
}

pub fn row(content: &str) {
    println!("{}", format_row(content, use_colors()));
}

pub fn section_top(label: &str) {
    println!("{}", format_section_top(label, use_colors()));
}

pub fn section_bot() {
    println!("{}", format_section_bot(use_colors()));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal rendition of the HTML highlighter: matches bold and underlined
/// in the theme's yellow, no escaping. Cut to `max_chars` like [`truncate`].
///
/// Matches are found on the full text, so one running past the cut is
/// still marked up to the `…`.
pub fn highlight_terminal(text: &str, term: &str, max_chars: usize) -> String {
    render_marked(text, term, max_chars, use_colors())
}

fn render_marked(text: &str, term: &str, max_chars: usize, colors: bool) -> String {
    if !colors {
        return truncate(text, max_chars);
    }

    let (end, ellipsis) = if text.chars().count() <= max_chars {
        (text.len(), "")
    } else {
        let kept = max_chars.saturating_sub(1);
        let end = text.char_indices().nth(kept).map_or(text.len(), |(i, _)| i);
        (end, "…")
    };

    let mark = format!("{}{}{}", BOLD, UNDERLINE, BRIGHT_YELLOW());
    let mut out = String::with_capacity(end + 32);
    let mut last = 0;
    for range in find_matches(text, term) {
        if range.start >= end {
            break;
        }
        let stop = range.end.min(end);
        out.push_str(&text[last..range.start]);
        out.push_str(&mark);
        out.push_str(&text[range.start..stop]);
        out.push_str(RESET);
        last = stop;
    }
    out.push_str(&text[last..end]);
    out.push_str(ellipsis);
    out
}

/// Color-coded score value in [0, 1]
pub fn score_value(score: f64) -> String {
    if !use_colors() {
        return format!("{:>5.2}", score);
    }
    let color = if score >= 1.0 {
        BRIGHT_GREEN()
    } else if score >= 0.8 {
        GREEN()
    } else if score >= 0.3 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{:>5.2}{}", color, score, RESET)
}

/// Color-coded match tier label
pub fn tier_label(tier: MatchTier) -> String {
    let (name, color): (&str, fn() -> String) = match tier {
        MatchTier::Exact => ("exact", BRIGHT_GREEN),
        MatchTier::Substring => ("substring", GREEN),
        MatchTier::Subsequence => ("subsequence", BLUE),
        MatchTier::None => ("none", GRAY),
    };
    themed(color, &[], name)
}

/// Color-coded field label
pub fn field_label(field: Option<Field>) -> String {
    match field {
        Some(Field::Name) => themed(BRIGHT_CYAN, &[], "name"),
        Some(Field::Value) => themed(MAGENTA, &[], "value"),
        Some(Field::Domain) => themed(BLUE, &[], "domain"),
        None => themed(GRAY, &[], "-"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
