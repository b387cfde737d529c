use thiserror::Error;

/// Core-level errors raised while building a season from its raw mappings.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid match entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid time {value:?}: expected HH:MM")]
    InvalidTime { value: String },

    #[error("Invalid rescheduled date {value:?}: expected YYYY-MM-DD or \"tbd\"")]
    InvalidRescheduledDate { value: String },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
