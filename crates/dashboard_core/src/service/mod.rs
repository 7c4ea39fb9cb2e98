//! Widget use-case services.
//!
//! # Responsibility
//! - Own one `RecordStore` per widget and expose its user actions.
//! - Apply widget rules (filtering, reordering, streaks, clock rendering)
//!   over the in-memory snapshot.
//!
//! # Invariants
//! - Every successful mutating action persists the full list exactly once.
//! - Actions addressed at an unknown id fail with `NotFound` and do not write.

use crate::model::record::{RecordId, RecordValidationError};
use crate::store::record_store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod bookmark_service;
pub mod clock_service;
pub mod habit_service;
pub mod todo_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for widget use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// User input failed creation-time validation.
    Validation(RecordValidationError),
    /// Target record does not exist in the widget's list.
    NotFound(RecordId),
    /// Preset index outside the popular-timezone catalog.
    UnknownPreset(usize),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::UnknownPreset(index) => write!(f, "unknown timezone preset: {index}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound(_) | Self::UnknownPreset(_) => None,
        }
    }
}

impl From<RecordValidationError> for ServiceError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
