//! SQLite-backed slot storage.
//!
//! # Invariants
//! - Each slot is one row in `slots`, keyed by slot name.
//! - Writes are upserts; `updated_at` tracks the last write in epoch ms.

use super::{validate_key, SlotStorage, StorageError, StorageResult};
use crate::db::{open_db, open_db_in_memory};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Slot storage over a migrated SQLite connection.
pub struct SqliteSlotStorage {
    conn: Connection,
}

impl SqliteSlotStorage {
    /// Wraps a connection that already went through `open_db*`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (or creates) a database file and wraps it.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Exposes the underlying connection for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl SlotStorage for SqliteSlotStorage {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteSlotStorage;
    use crate::storage::{SlotStorage, StorageError};

    #[test]
    fn unknown_slot_reads_as_none() {
        let storage = SqliteSlotStorage::open_in_memory().unwrap();
        assert_eq!(storage.read_slot("todos").unwrap(), None);
    }

    #[test]
    fn write_overwrites_previous_value() {
        let storage = SqliteSlotStorage::open_in_memory().unwrap();
        storage.write_slot("todos", "[1]").unwrap();
        storage.write_slot("todos", "[2]").unwrap();
        assert_eq!(storage.read_slot("todos").unwrap().as_deref(), Some("[2]"));

        let rows: i64 = storage
            .connection()
            .query_row("SELECT COUNT(*) FROM slots;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn blank_key_is_rejected() {
        let storage = SqliteSlotStorage::open_in_memory().unwrap();
        let err = storage.write_slot("  ", "[]").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }
}
