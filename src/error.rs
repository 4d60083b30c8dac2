use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FastingError {
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid fasting duration {0}: must be a finite, non-negative number of hours")]
    InvalidHours(f64),

    #[error("Invalid target window: {message}")]
    InvalidTarget { message: String },
}

pub type Result<T> = std::result::Result<T, FastingError>;
