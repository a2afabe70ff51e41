// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

use crumbs::{fuzzy_match, highlight, load_cookies, rank, Cookie, Record, SearchOptions};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            file,
            term,
            in_value,
            in_domain,
            min_score,
            limit,
            json,
        } => {
            let options = SearchOptions::new()
                .in_value(in_value)
                .in_domain(in_domain)
                .min_score(min_score);
            options.validate()?;

            let cookies =
                load_cookies(&file).with_context(|| format!("cannot load cookies from {}", file))?;
            run_search(&file, &cookies, &term, &options, limit, json)
        }
        Commands::Highlight { text, term } => {
            println!("{}", highlight(&text, &term));
            Ok(())
        }
        Commands::Score { term, candidate } => {
            let m = fuzzy_match(&term, &candidate);
            println!("{}  {}", score_value(m.score), tier_label(m.tier));
            Ok(())
        }
    }
}

fn run_search(
    file: &str,
    cookies: &[Cookie],
    term: &str,
    options: &SearchOptions,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let ranked = rank(cookies, term, options);
    let total = ranked.len();
    let shown = limit.unwrap_or(total).min(total);

    if json {
        let records: Vec<&Cookie> = ranked.iter().take(shown).map(|r| r.record).collect();
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &records).context("write JSON")?;
        writeln!(stdout).context("write JSON")?;
        return Ok(());
    }

    section_top(&format!("{} · {:?}", truncate(file, 40), term));
    if ranked.is_empty() {
        row(&format!(" {}", themed(GRAY, &[], "no matching cookies")));
    }
    for result in ranked.iter().take(shown) {
        let cookie = result.record;
        let name = highlight_terminal(cookie.name(), term, 28);
        let domain = cookie
            .domain()
            .map(|d| {
                if options.search_in_domain {
                    highlight_terminal(d, term, 30)
                } else {
                    truncate(d, 30)
                }
            })
            .unwrap_or_default();
        row(&format!(
            " {} {} {} {}",
            score_value(result.score),
            pad_right(&field_label(result.field), 7),
            pad_right(&name, 28),
            domain
        ));
        if options.search_in_value {
            if let Some(value) = cookie.value() {
                let value = highlight_terminal(value, term, 60);
                row(&format!("              {} {}", themed(GRAY, &[], "="), value));
            }
        }
    }
    section_bot();

    if shown < total {
        println!("  {} of {} matches shown", shown, total);
    } else {
        println!("  {} of {} cookies matched", total, cookies.len());
    }
    Ok(())
}
