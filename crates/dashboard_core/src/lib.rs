//! Core domain logic for the personal dashboard widgets.
//! This crate is the single source of truth for record persistence and
//! the shared list/date/time rules.

pub mod config;
pub mod dashboard;
pub mod date_source;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;
pub mod streak;
pub mod timefmt;

pub use config::DashboardConfig;
pub use dashboard::{open_sqlite_storage, Dashboard, SqliteDashboard};
pub use date_source::{DateSource, FixedDateSource, SystemDateSource};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingStatus};
pub use model::bookmark::{parse_tag_input, Bookmark};
pub use model::habit::Habit;
pub use model::record::{Record, RecordId, RecordValidationError};
pub use model::todo::Todo;
pub use model::world_clock::{default_clocks, CityZone, WorldClock, POPULAR_TIMEZONES};
pub use service::bookmark_service::{collect_tags, filter_bookmarks, BookmarkService};
pub use service::clock_service::ClockService;
pub use service::habit_service::{HabitProgress, HabitService};
pub use service::todo_service::{TodoService, TodoSummary};
pub use service::{ServiceError, ServiceResult};
pub use storage::{
    MemorySlotStorage, SlotStorage, SqliteSlotStorage, StorageError, StorageResult,
    SLOT_BOOKMARKS, SLOT_HABITS, SLOT_TODOS, SLOT_WORLD_CLOCKS,
};
pub use store::record_store::{RecordStore, StoreError, StoreResult};
pub use store::reorder::{move_adjacent, MoveDirection};
pub use streak::{streak, StreakCalculator};
pub use timefmt::{format_time, render_times, ClockTicker, INVALID_TIMEZONE, TICK_INTERVAL};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
