use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("A submission is already in progress")]
    SubmissionInProgress,
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
