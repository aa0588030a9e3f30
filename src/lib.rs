pub mod cache;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod leveling;
pub mod locale;
pub mod presentation;
pub mod ranking;
pub mod services;
pub mod status;
pub mod timefmt;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use cli::{Cli, GlobalOptions};
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::{PointRecord, clamp_points};
use crate::errors::load_context;
use crate::presentation::{render_card, render_leaderboard, render_levels};
use crate::services::StatusService;

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Build the process-wide configuration; a malformed level table fails here
pub fn build_config(options: &GlobalOptions) -> Result<AppConfig> {
    let mut config = AppConfig::load(options.levels.as_deref())?
        .with_tie_break(options.tie_break)
        .with_locale(options.locale);
    if let Some(path) = &options.database {
        config = config.with_database_path(path.clone());
    }
    Ok(config)
}

pub fn handle_init(config: AppConfig, reset: bool) -> Result<()> {
    let mut service = StatusService::new(config)?;
    if reset {
        service.reset()?;
    }
    info!(
        "Database ready with {} participants",
        service.participant_count()?
    );
    Ok(())
}

pub fn handle_register(config: AppConfig, id: &str, name: &str, points: i64) -> Result<()> {
    let mut service = StatusService::new(config)?;
    let record = PointRecord::new(id, name, clamp_points(points), Utc::now());
    if service.register(&record)? {
        println!("Registered {} ({})", id, name);
    } else {
        println!("Participant {} is already registered", id);
    }
    Ok(())
}

pub fn handle_set_points(config: AppConfig, id: &str, points: i64) -> Result<()> {
    let mut service = StatusService::new(config)?;
    if service.set_points(id, points, Utc::now())? {
        println!("Updated {} to {}pt", id, clamp_points(points));
    } else {
        println!("Participant {} is not registered", id);
    }
    Ok(())
}

pub fn handle_import(config: AppConfig, path: &Path) -> Result<()> {
    let records = read_records(path)?;
    let mut service = StatusService::new(config)?;
    let summary = service.import(&records)?;
    println!(
        "Imported {} participants, skipped {} already registered",
        summary.inserted, summary.skipped
    );
    Ok(())
}

pub fn handle_status(config: AppConfig, id: &str, json: bool) -> Result<()> {
    let locale = config.display.locale;
    let bar_width = config.display.bar_width;
    let mut service = StatusService::new(config)?;

    match service.status(id, Utc::now())? {
        Some(report) if json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Some(report) => println!("{}", render_card(&report, locale, bar_width)),
        None => println!("No status available: {} is not registered", id),
    }
    Ok(())
}

pub fn handle_leaderboard(config: AppConfig, limit: usize) -> Result<()> {
    let mut service = StatusService::new(config)?;
    let entries = service.leaderboard(limit)?;
    println!("{}", render_leaderboard(&entries, &service.config().levels));
    Ok(())
}

pub fn handle_levels(config: &AppConfig) -> Result<()> {
    println!("{}", render_levels(&config.levels));
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn read_records(path: &Path) -> Result<Vec<PointRecord>> {
    let json = fs::read_to_string(path).with_context(|| load_context("point records", path))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid point records in {}", path.display()))
}
