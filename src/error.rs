use crate::domain::loan::ValidationErrors;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoanError>;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),
    #[error("{0}")]
    ValidationError(String),
    #[error("duplicate loan offer for customer {0}")]
    DuplicateOffer(u32),
    #[error("customer {0} not found")]
    CustomerNotFound(u32),
    #[error("calculation error: {0}")]
    CalculationError(String),
}
