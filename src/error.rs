//! Ошибки предобработки

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Encoding error in {path}: {message}")]
    Encoding { path: String, message: String },

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Unexpected column: {0}")]
    UnexpectedColumn(String),

    #[error("Invalid value in column {column}, row {row}: {value:?}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Shape mismatch: {0}")]
    Shape(String),

    #[error("Normalizer not fitted")]
    NotFitted,

    #[error("Excel error: {0}")]
    Excel(String),
}

impl PrepError {
    pub fn invalid_value(column: &str, row: usize, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            column: column.to_string(),
            row,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
