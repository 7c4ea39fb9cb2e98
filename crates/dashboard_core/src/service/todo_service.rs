//! Todo use-case service.

use crate::model::todo::Todo;
use crate::service::{ServiceError, ServiceResult};
use crate::storage::{SlotStorage, SLOT_TODOS};
use crate::store::record_store::RecordStore;
use std::fmt::{Display, Formatter};

/// Remaining/total counts shown under the todo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoSummary {
    pub remaining: usize,
    pub total: usize,
}

impl Display for TodoSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} remaining", self.remaining, self.total)
    }
}

/// Todo widget state bound to its persistent slot.
pub struct TodoService<S: SlotStorage> {
    store: RecordStore<Todo, S>,
}

impl<S: SlotStorage> TodoService<S> {
    pub fn open(storage: S) -> Self {
        Self {
            store: RecordStore::open(storage, SLOT_TODOS),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        self.store.records()
    }

    /// Appends an open todo. Blank text is rejected.
    pub fn add(&mut self, text: &str) -> ServiceResult<Todo> {
        let todo = Todo::new(text)?;
        self.store.append(todo.clone())?;
        Ok(todo)
    }

    /// Flips completion; returns the new state.
    pub fn toggle(&mut self, id: &str) -> ServiceResult<bool> {
        let completed = !self.require(id)?.completed;
        self.store.update(id, Todo::toggle)?;
        Ok(completed)
    }

    pub fn delete(&mut self, id: &str) -> ServiceResult<()> {
        self.require(id)?;
        self.store.remove_by_id(id)?;
        Ok(())
    }

    pub fn summary(&self) -> TodoSummary {
        let todos = self.store.records();
        TodoSummary {
            remaining: todos.iter().filter(|todo| !todo.completed).count(),
            total: todos.len(),
        }
    }

    fn require(&self, id: &str) -> ServiceResult<&Todo> {
        self.store
            .get(id)
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }
}
