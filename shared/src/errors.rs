//! Error types for the NutriPlan calculation core

use thiserror::Error;

/// Errors produced by the pure calculators
///
/// `MissingInput` carries the exact user-facing alert text; it is surfaced
/// verbatim and no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Vui lòng nhập đầy đủ Tuổi, Chiều cao và Cân nặng để tính toán chính xác.")]
    MissingInput,

    #[error("Validation error: {0}")]
    InvalidInput(String),
}

/// Service layer error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("External service error: {0}")]
    External(String),
}

impl From<CalcError> for ServiceError {
    fn from(err: CalcError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
