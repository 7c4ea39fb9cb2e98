//! All four widgets opened over one shared storage handle.

use crate::config::DashboardConfig;
use crate::date_source::{DateSource, SystemDateSource};
use crate::service::bookmark_service::BookmarkService;
use crate::service::clock_service::ClockService;
use crate::service::habit_service::HabitService;
use crate::service::todo_service::TodoService;
use crate::service::ServiceResult;
use crate::storage::{SlotStorage, SqliteSlotStorage, StorageResult};
use log::info;
use std::path::Path;
use std::rc::Rc;

/// Dashboard backed by a SQLite file and the system clock.
pub type SqliteDashboard = Dashboard<Rc<SqliteSlotStorage>, SystemDateSource>;

/// Widget set sharing one storage handle.
///
/// Each widget owns its own record list; nothing is shared between widgets
/// except the storage handle itself.
pub struct Dashboard<S: SlotStorage + Clone, D: DateSource> {
    pub bookmarks: BookmarkService<S>,
    pub todos: TodoService<S>,
    pub clocks: ClockService<S>,
    pub habits: HabitService<S, D>,
}

impl<S: SlotStorage + Clone, D: DateSource> Dashboard<S, D> {
    /// Loads every widget from `storage`.
    pub fn open(storage: S, dates: D) -> ServiceResult<Self> {
        let dashboard = Self {
            bookmarks: BookmarkService::open(storage.clone()),
            todos: TodoService::open(storage.clone()),
            clocks: ClockService::open(storage.clone())?,
            habits: HabitService::open(storage, dates),
        };
        info!(
            "event=dashboard_open module=core status=ok bookmarks={} todos={} clocks={} habits={}",
            dashboard.bookmarks.bookmarks().len(),
            dashboard.todos.todos().len(),
            dashboard.clocks.clocks().len(),
            dashboard.habits.habits().len()
        );
        Ok(dashboard)
    }
}

/// Opens the SQLite slot database at `path`.
pub fn open_sqlite_storage(path: impl AsRef<Path>) -> StorageResult<Rc<SqliteSlotStorage>> {
    Ok(Rc::new(SqliteSlotStorage::open(path)?))
}

impl SqliteDashboard {
    /// Opens the dashboard database named by `config`.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, String> {
        let storage = open_sqlite_storage(&config.db_path)
            .map_err(|err| format!("dashboard storage open failed: {err}"))?;
        Self::open(storage, SystemDateSource)
            .map_err(|err| format!("dashboard widgets open failed: {err}"))
    }
}
