use anyhow::{Context, Result};
use clap::Parser;
use rusty_golf_results::args::{Cli, load_settings};
use rusty_golf_results::{logging, report};
use std::fs;

fn main() -> Result<()> {
    let settings = load_settings(Cli::parse())?;
    logging::init(settings.log_level)?;

    let report = report::run(&settings)?;
    if report.leaderboard.is_empty() {
        log::info!("{}: no result data", settings.tournament_id);
    }

    let json = serde_json::to_string_pretty(&report).context("serialize report")?;
    match settings.output_json.as_ref() {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("write output json {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
