//! Data-file discovery and the thin YAML/ics I/O boundary.
//!
//! The layout under the data path is flat: one `teams.yml` shared by every
//! season, plus `{team}_games_{year}.yml` per team and year.

use std::fs;
use std::path::{Path, PathBuf};

use rinkcal_core::input::{SeasonFile, TeamEntries};

use crate::error::{AppError, AppResult};

/// Path of the season file for a team/year.
#[must_use]
pub fn games_file(data_path: &Path, team: &str, year: &str) -> PathBuf {
    data_path.join(format!("{team}_games_{year}.yml"))
}

/// Path of the shared team directory file.
#[must_use]
pub fn teams_file(data_path: &Path) -> PathBuf {
    data_path.join("teams.yml")
}

/// Checks that a data file exists before trying to parse it.
///
/// ## Errors
/// Returns [`AppError::MissingFile`] when it does not.
pub fn locate(path: PathBuf) -> AppResult<PathBuf> {
    if path.exists() {
        Ok(path)
    } else {
        Err(AppError::MissingFile(path))
    }
}

/// Reads and parses a season file.
///
/// ## Errors
/// Returns an error if the file cannot be read or is not valid YAML of the
/// expected shape.
pub fn load_season(path: &Path) -> AppResult<SeasonFile> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Reads and parses the team directory file.
///
/// ## Errors
/// Returns an error if the file cannot be read or is not valid YAML of the
/// expected shape.
pub fn load_teams(path: &Path) -> AppResult<TeamEntries> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Writes the serialised calendar, creating the output directory if needed.
///
/// ## Errors
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub fn write_calendar(dir: &Path, filename: &str, ics: &str) -> AppResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let target = dir.join(filename);
    fs::write(&target, ics.as_bytes())?;
    Ok(target)
}
