//! Engine error types
//!
//! Domain failures (no table available, preference not satisfiable) are
//! reported as [`SeatingOutcome`](shared::floor::SeatingOutcome) tags, never
//! as errors. `FloorError` covers only boundary rejections and store
//! failures; state is left untouched whenever one is returned.

use thiserror::Error;

use crate::store::StoreError;

/// Engine errors
#[derive(Debug, Error)]
pub enum FloorError {
    #[error("invalid table count {0}: allowed range is 1..=24")]
    InvalidTableCount(usize),

    #[error("invalid table capacity {0}: allowed range is 1..=20")]
    InvalidCapacity(i32),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl FloorError {
    pub fn validation(message: impl Into<String>) -> Self {
        FloorError::Validation(message.into())
    }
}

pub type FloorResult<T> = Result<T, FloorError>;
