use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] rinkcal_core::CoreError),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot find file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("No team/year selected: pass --team/--year or set DATA_TEAM/DATA_YEAR")]
    MissingSelection,

    #[error("Invalid schedule file: {0}")]
    InvalidSchedule(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
