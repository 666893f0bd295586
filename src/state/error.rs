use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid value error: {0}")]
    InvalidValue(String),
    #[error("State validation failed: {0}")]
    ValidationFailed(String),
}
