//! Shared record identity and validation helpers.

use chrono::Utc;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable record identifier.
///
/// Kept as a string so legacy numeric ids (`"1700000000000"`) load unchanged.
pub type RecordId = String;

/// Anything stored in a `RecordStore` slot.
pub trait Record {
    fn id(&self) -> &str;
}

/// Generates a new time-derived unique id (UUID v7).
pub fn new_record_id() -> RecordId {
    Uuid::now_v7().to_string()
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Creation-time validation failure for user-supplied record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// A required text field is empty after trimming.
    BlankField(&'static str),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "`{field}` must not be blank"),
        }
    }
}

impl Error for RecordValidationError {}

pub(crate) fn require_text(
    field: &'static str,
    value: &str,
) -> Result<(), RecordValidationError> {
    if value.trim().is_empty() {
        return Err(RecordValidationError::BlankField(field));
    }
    Ok(())
}
