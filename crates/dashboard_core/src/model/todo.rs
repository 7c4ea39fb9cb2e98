//! Todo record.

use super::record::{
    new_record_id, now_epoch_ms, require_text, Record, RecordId, RecordValidationError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: RecordId,
    pub text: String,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Todo {
    /// Creates an open todo. Blank text is rejected.
    pub fn new(text: impl Into<String>) -> Result<Self, RecordValidationError> {
        let text = text.into();
        require_text("text", &text)?;
        Ok(Self {
            id: new_record_id(),
            text,
            completed: false,
            created_at: now_epoch_ms(),
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Record for Todo {
    fn id(&self) -> &str {
        &self.id
    }
}
