use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MpmError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Birth date {date} is in the future")]
    FutureBirthDate { date: NaiveDate },

    #[error("No member at position {index} (there are {len})")]
    NotFound { index: usize, len: usize },

    #[error("Nothing to export: the member list is empty")]
    EmptyCollection,

    #[error("Invalid snapshot: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MpmResult<T> = Result<T, MpmError>;
