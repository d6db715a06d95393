use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommissionError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Report not found: {0}")]
    ReportNotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Internal error: {0}")]
    InternalError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for CommissionError {
    fn from(err: rocksdb::Error) -> Self {
        CommissionError::InternalError(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, CommissionError>;
