use crate::domain::order::OrderStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, OrderError>;

/// Where in the per-order pipeline a failure surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Export,
    ApiCall,
    Persist,
}

impl OrderError {
    /// The terminal status a failure is absorbed into at `stage`.
    ///
    /// `None` means the failure is not part of the modeled taxonomy for that
    /// stage and must escape to the caller.
    pub fn absorbed_status(&self, stage: Stage) -> Option<OrderStatus> {
        match (stage, self) {
            (Stage::Export, OrderError::IoError(_) | OrderError::CsvError(_)) => {
                Some(OrderStatus::ExportFailed)
            }
            (Stage::ApiCall, OrderError::ApiError(_)) => Some(OrderStatus::ApiFailure),
            (Stage::Persist, OrderError::DatabaseError(_)) => Some(OrderStatus::DbError),
            _ => None,
        }
    }
}
