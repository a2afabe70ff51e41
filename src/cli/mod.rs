// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the crumbs command-line interface.
//!
//! Three subcommands: `search` to rank a cookie export, `highlight` to print
//! the HTML fragment for one string, and `score` to see which tier a single
//! term/candidate pair lands in.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "crumbs",
    about = "Fuzzy search and highlighting for browser cookie exports",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a cookie export (JSON or Netscape cookies.txt)
    Search {
        /// Path to the cookie export
        file: String,

        /// Search term (empty lists every cookie)
        term: String,

        /// Also match against cookie values (weight 0.7)
        #[arg(long)]
        in_value: bool,

        /// Also match against cookie domains (weight 0.5)
        #[arg(long)]
        in_domain: bool,

        /// Minimum score for a cookie to be listed, inclusive
        #[arg(long, default_value_t = crumbs::DEFAULT_MIN_SCORE)]
        min_score: f64,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print matching cookies as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print TEXT as HTML with every occurrence of TERM marked
    Highlight {
        text: String,
        term: String,
    },

    /// Score a single term against a single candidate
    Score {
        term: String,
        candidate: String,
    },
}
