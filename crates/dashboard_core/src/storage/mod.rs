//! Persistent slot storage boundary.
//!
//! # Responsibility
//! - Define the synchronous get/set-by-key contract every widget persists through.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - A slot holds exactly one serialized value; writes overwrite, never merge.
//! - Reading a never-written slot yields `Ok(None)`, not an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

mod memory;
mod sqlite;

pub use memory::MemorySlotStorage;
pub use sqlite::SqliteSlotStorage;

/// Slot holding the bookmark list.
pub const SLOT_BOOKMARKS: &str = "bookmarks";
/// Slot holding the todo list.
pub const SLOT_TODOS: &str = "todos";
/// Slot holding the world clock list.
pub const SLOT_WORLD_CLOCKS: &str = "worldClocks";
/// Slot holding the habit list.
pub const SLOT_HABITS: &str = "habits";

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport error raised by a slot storage backend.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Slot key is empty or whitespace-only.
    InvalidKey(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid slot key: `{key}`"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous key-value facility addressed by slot name.
///
/// Methods take `&self` so one handle can be shared by every widget on a
/// single thread.
pub trait SlotStorage {
    /// Returns the raw serialized value stored under `key`, if any.
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>>;
    /// Overwrites the value stored under `key`.
    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write_slot(key, value)
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for Rc<S> {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write_slot(key, value)
    }
}

fn validate_key(key: &str) -> StorageResult<()> {
    if key.trim().is_empty() {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
