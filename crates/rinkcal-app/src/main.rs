use chrono::Utc;
use clap::Parser;
use rinkcal_app::cli::{Cli, Commands};
use rinkcal_app::config::{Settings, load_config};
use rinkcal_app::error::AppError;
use rinkcal_app::{files, generate, table};
use rinkcal_core::{League, TeamDirectory, build_events};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();

    let settings = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(settings.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %settings.logging.level, "Invalid log level in config, keeping info");
    }

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Generate { schedule }) => {
            let written = generate::write_season_skeleton(&schedule)?;
            tracing::info!(path = %written.display(), "Done");
        }
        None => run_season(&cli, &settings)?,
    }

    Ok(())
}

/// Loads one season, prints the results table and writes the calendar file.
fn run_season(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let team = cli
        .team
        .clone()
        .or_else(|| settings.data.team.clone())
        .ok_or(AppError::MissingSelection)?;
    let year = cli
        .year
        .clone()
        .or_else(|| settings.data.year.clone())
        .ok_or(AppError::MissingSelection)?;

    tracing::info!(team, year, "Generating season calendar");

    let teams_path = files::locate(files::teams_file(&settings.data.path))?;
    let games_path = files::locate(files::games_file(&settings.data.path, &team, &year))?;

    let directory = TeamDirectory::from_entries(files::load_teams(&teams_path)?);
    let league = League::from_season(files::load_season(&games_path)?)?;

    println!("{}", table::render(&league, &directory));

    let events = build_events(&league, &directory, Utc::now());
    let ics = rinkcal_ical::to_ics(&events);
    let filename = format!("{team}_games_{year}.ics");
    let saved = files::write_calendar(&settings.output.dir, &filename, &ics)?;

    tracing::info!(path = %saved.display(), events = events.len(), "Saved calendar");

    Ok(())
}
