use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Salary cannot be negative: {0}")]
    NegativeSalary(i64),
    #[error("Salary must be an integer or empty: '{0}'")]
    InvalidSalary(String),
    #[error("Unknown vacancy field: '{0}'")]
    UnknownField(String),
    #[error("File IO operation failed, error: '{0}'")]
    Io(#[from] std::io::Error),
    #[error("Malformed vacancy data: '{0}'")]
    Serialization(#[from] serde_json::Error),
}
