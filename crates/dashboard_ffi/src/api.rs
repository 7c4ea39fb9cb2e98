//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose widget actions and view models to Dart via FRB.
//! - Keep error semantics simple: envelopes with `ok` + `message`.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every storage-backed call opens the slot database named by
//!   `DASHBOARD_DB_PATH` (default: temp dir), so state lives in storage, not
//!   in this crate.
//! - `clock_tick` never touches storage; it is the once-per-second call.

use chrono::{DateTime, Utc};
use dashboard_core::{
    core_version as core_version_inner, format_time, init_logging as init_logging_inner,
    logging_status as logging_status_inner, ping as ping_inner, BookmarkService, ClockService,
    DashboardConfig, HabitService, MoveDirection, ServiceError, SqliteSlotStorage,
    SystemDateSource, TodoService, POPULAR_TIMEZONES,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Active logging configuration as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingStatusResponse {
    /// Whether `init_logging` has succeeded in this process.
    pub active: bool,
    /// Active level; empty when inactive.
    pub level: String,
    /// Active log directory; empty when inactive.
    pub log_dir: String,
}

/// Reports whether file logging is running and where it writes.
#[flutter_rust_bridge::frb(sync)]
pub fn logging_status() -> LoggingStatusResponse {
    match logging_status_inner() {
        Some(status) => LoggingStatusResponse {
            active: true,
            level: status.level.to_string(),
            log_dir: status.log_dir.display().to_string(),
        },
        None => LoggingStatusResponse {
            active: false,
            level: String::new(),
            log_dir: String::new(),
        },
    }
}

/// Generic action response envelope for widget mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Id of the created or affected record.
    pub record_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            ok: true,
            record_id: Some(record_id.into()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Bookmark row for list display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
    pub note: String,
    pub created_at: i64,
    /// Whether the item can move up/down in the full list.
    pub can_move_up: bool,
    pub can_move_down: bool,
}

/// Bookmark list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkListResponse {
    /// Items passing the current search + tag filter, in list order.
    pub items: Vec<BookmarkItem>,
    /// Every tag in use, for the filter bar.
    pub tags: Vec<String>,
    /// Size of the unfiltered list (distinguishes "none yet" from "no match").
    pub total: u32,
}

/// Todo row for list display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Todo list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    pub items: Vec<TodoItem>,
    pub remaining: u32,
    pub total: u32,
    /// `"N of M remaining"`.
    pub summary: String,
}

/// World clock row with its display time for the current tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockItem {
    pub id: String,
    pub city: String,
    pub timezone: String,
    /// `hh:mm:ss AM|PM` or the invalid-timezone marker.
    pub display: String,
}

/// Entry of the add-clock picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockPreset {
    pub city: String,
    pub timezone: String,
}

/// Habit row with derived progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitItem {
    pub id: String,
    pub name: String,
    pub streak: u32,
    pub total_completions: u32,
    pub completed_today: bool,
}

/// Lists bookmarks matching `search_term` and `selected_tag` (empty = any).
///
/// # FFI contract
/// - Never panics; storage failures yield an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn bookmark_list(search_term: String, selected_tag: String) -> BookmarkListResponse {
    let empty = BookmarkListResponse {
        items: Vec::new(),
        tags: Vec::new(),
        total: 0,
    };
    with_storage(|storage| Ok(bookmark_list_in(storage, &search_term, &selected_tag)))
        .unwrap_or(empty)
}

/// Adds a bookmark; `tags` is comma separated.
#[flutter_rust_bridge::frb(sync)]
pub fn bookmark_add(title: String, url: String, tags: String, note: String) -> ActionResponse {
    action("bookmark_add", |storage| {
        bookmark_add_in(storage, &title, &url, &tags, &note)
    })
}

/// Moves a bookmark one step; `direction` is `up` or `down`.
#[flutter_rust_bridge::frb(sync)]
pub fn bookmark_move(id: String, direction: String) -> ActionResponse {
    let direction = match direction.parse::<MoveDirection>() {
        Ok(direction) => direction,
        Err(message) => return ActionResponse::failure(message),
    };
    action("bookmark_move", |storage| {
        bookmark_move_in(storage, &id, direction)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn bookmark_delete(id: String) -> ActionResponse {
    action("bookmark_delete", |storage| bookmark_delete_in(storage, &id))
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_list() -> TodoListResponse {
    let empty = TodoListResponse {
        items: Vec::new(),
        remaining: 0,
        total: 0,
        summary: String::new(),
    };
    with_storage(|storage| Ok(todo_list_in(storage))).unwrap_or(empty)
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(text: String) -> ActionResponse {
    action("todo_add", |storage| todo_add_in(storage, &text))
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: String) -> ActionResponse {
    action("todo_toggle", |storage| todo_toggle_in(storage, &id))
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> ActionResponse {
    action("todo_delete", |storage| todo_delete_in(storage, &id))
}

/// Lists persisted clocks with display times for "now".
///
/// # FFI contract
/// - Call when the widget opens and after `clock_add`/`clock_delete`.
/// - Read-only apart from seeding default clocks on first use.
#[flutter_rust_bridge::frb(sync)]
pub fn clock_list() -> Vec<ClockItem> {
    with_storage(clock_list_in).unwrap_or_default()
}

/// Recomputes `display` for clocks the host already holds.
///
/// # FFI contract
/// - Called once per second while the clock widget is visible.
/// - Pure: no storage access, no logging.
#[flutter_rust_bridge::frb(sync)]
pub fn clock_tick(clocks: Vec<ClockItem>) -> Vec<ClockItem> {
    render_clocks(clocks, Utc::now())
}

/// Cities offered by the add-clock picker.
#[flutter_rust_bridge::frb(sync)]
pub fn clock_presets() -> Vec<ClockPreset> {
    POPULAR_TIMEZONES
        .iter()
        .map(|preset| ClockPreset {
            city: preset.city.to_string(),
            timezone: preset.timezone.to_string(),
        })
        .collect()
}

#[flutter_rust_bridge::frb(sync)]
pub fn clock_add(city: String, timezone: String) -> ActionResponse {
    action("clock_add", |storage| {
        clock_add_in(storage, &city, &timezone)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn clock_delete(id: String) -> ActionResponse {
    action("clock_delete", |storage| clock_delete_in(storage, &id))
}

#[flutter_rust_bridge::frb(sync)]
pub fn habit_list() -> Vec<HabitItem> {
    with_storage(|storage| Ok(habit_list_in(storage))).unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn habit_add(name: String) -> ActionResponse {
    action("habit_add", |storage| habit_add_in(storage, &name))
}

/// Marks or unmarks today's completion for one habit.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_toggle_today(id: String) -> ActionResponse {
    action("habit_toggle_today", |storage| {
        habit_toggle_today_in(storage, &id)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn habit_delete(id: String) -> ActionResponse {
    action("habit_delete", |storage| habit_delete_in(storage, &id))
}

type ActionResult = Result<(String, String), ServiceError>;

fn bookmark_list_in(
    storage: &SqliteSlotStorage,
    search_term: &str,
    selected_tag: &str,
) -> BookmarkListResponse {
    let service = BookmarkService::open(storage);
    let all = service.bookmarks();
    let last = all.len().saturating_sub(1);
    let items = service
        .visible(search_term, selected_tag)
        .into_iter()
        .map(|bookmark| {
            let index = all.iter().position(|b| b.id == bookmark.id).unwrap_or(0);
            BookmarkItem {
                id: bookmark.id.clone(),
                title: bookmark.title.clone(),
                url: bookmark.url.clone(),
                tags: bookmark.tags.clone(),
                note: bookmark.note.clone(),
                created_at: bookmark.created_at,
                can_move_up: index > 0,
                can_move_down: index < last,
            }
        })
        .collect();
    BookmarkListResponse {
        items,
        tags: service.all_tags(),
        total: to_u32(all.len()),
    }
}

fn bookmark_add_in(
    storage: &SqliteSlotStorage,
    title: &str,
    url: &str,
    tags: &str,
    note: &str,
) -> ActionResult {
    let mut service = BookmarkService::open(storage);
    let bookmark = service.add(title.trim(), url.trim(), tags, note)?;
    Ok(("Bookmark added.".to_string(), bookmark.id))
}

fn bookmark_move_in(
    storage: &SqliteSlotStorage,
    id: &str,
    direction: MoveDirection,
) -> ActionResult {
    let mut service = BookmarkService::open(storage);
    let message = if service.move_bookmark(id, direction)? {
        format!("Bookmark moved {direction}.")
    } else {
        "Bookmark already at the edge.".to_string()
    };
    Ok((message, id.to_string()))
}

fn bookmark_delete_in(storage: &SqliteSlotStorage, id: &str) -> ActionResult {
    BookmarkService::open(storage).delete(id)?;
    Ok(("Bookmark deleted.".to_string(), id.to_string()))
}

fn todo_list_in(storage: &SqliteSlotStorage) -> TodoListResponse {
    let service = TodoService::open(storage);
    let summary = service.summary();
    TodoListResponse {
        items: service
            .todos()
            .iter()
            .map(|todo| TodoItem {
                id: todo.id.clone(),
                text: todo.text.clone(),
                completed: todo.completed,
            })
            .collect(),
        remaining: to_u32(summary.remaining),
        total: to_u32(summary.total),
        summary: summary.to_string(),
    }
}

fn todo_add_in(storage: &SqliteSlotStorage, text: &str) -> ActionResult {
    let todo = TodoService::open(storage).add(text)?;
    Ok(("Todo added.".to_string(), todo.id))
}

fn todo_toggle_in(storage: &SqliteSlotStorage, id: &str) -> ActionResult {
    let completed = TodoService::open(storage).toggle(id)?;
    let message = if completed {
        "Todo completed."
    } else {
        "Todo reopened."
    };
    Ok((message.to_string(), id.to_string()))
}

fn todo_delete_in(storage: &SqliteSlotStorage, id: &str) -> ActionResult {
    TodoService::open(storage).delete(id)?;
    Ok(("Todo deleted.".to_string(), id.to_string()))
}

fn clock_list_in(storage: &SqliteSlotStorage) -> Result<Vec<ClockItem>, ServiceError> {
    let service = ClockService::open(storage)?;
    let mut times = service.display_times(Utc::now());
    Ok(service
        .clocks()
        .iter()
        .map(|clock| ClockItem {
            id: clock.id.clone(),
            city: clock.city.clone(),
            timezone: clock.timezone.clone(),
            display: times.remove(&clock.id).unwrap_or_default(),
        })
        .collect())
}

fn render_clocks(clocks: Vec<ClockItem>, now: DateTime<Utc>) -> Vec<ClockItem> {
    clocks
        .into_iter()
        .map(|clock| ClockItem {
            display: format_time(&clock.timezone, now),
            ..clock
        })
        .collect()
}

fn clock_add_in(storage: &SqliteSlotStorage, city: &str, timezone: &str) -> ActionResult {
    let clock = ClockService::open(storage)?.add(city.trim(), timezone.trim())?;
    Ok(("Clock added.".to_string(), clock.id))
}

fn clock_delete_in(storage: &SqliteSlotStorage, id: &str) -> ActionResult {
    ClockService::open(storage)?.delete(id)?;
    Ok(("Clock deleted.".to_string(), id.to_string()))
}

fn habit_list_in(storage: &SqliteSlotStorage) -> Vec<HabitItem> {
    HabitService::open(storage, SystemDateSource)
        .overview()
        .into_iter()
        .map(|row| HabitItem {
            id: row.id,
            name: row.name,
            streak: row.streak,
            total_completions: to_u32(row.total_completions),
            completed_today: row.completed_today,
        })
        .collect()
}

fn habit_add_in(storage: &SqliteSlotStorage, name: &str) -> ActionResult {
    let habit = HabitService::open(storage, SystemDateSource).add(name)?;
    Ok(("Habit added.".to_string(), habit.id))
}

fn habit_toggle_today_in(storage: &SqliteSlotStorage, id: &str) -> ActionResult {
    let done = HabitService::open(storage, SystemDateSource).toggle_today(id)?;
    let message = if done {
        "Habit done for today."
    } else {
        "Habit unmarked for today."
    };
    Ok((message.to_string(), id.to_string()))
}

fn habit_delete_in(storage: &SqliteSlotStorage, id: &str) -> ActionResult {
    HabitService::open(storage, SystemDateSource).delete(id)?;
    Ok(("Habit deleted.".to_string(), id.to_string()))
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| DashboardConfig::from_env().db_path)
        .clone()
}

fn with_storage<T>(
    f: impl FnOnce(&SqliteSlotStorage) -> Result<T, ServiceError>,
) -> Result<T, String> {
    let storage = SqliteSlotStorage::open(resolve_db_path())
        .map_err(|err| format!("dashboard DB open failed: {err}"))?;
    f(&storage).map_err(|err| err.to_string())
}

fn action(name: &str, f: impl FnOnce(&SqliteSlotStorage) -> ActionResult) -> ActionResponse {
    match with_storage(f) {
        Ok((message, record_id)) => ActionResponse::success(message, record_id),
        Err(err) => {
            warn!("event=ffi_action module=ffi status=error action={name} error={err}");
            ActionResponse::failure(format!("{name} failed: {err}"))
        }
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        bookmark_add_in, bookmark_delete_in, bookmark_list_in, bookmark_move, bookmark_move_in,
        clock_add_in, clock_delete_in, clock_list_in, clock_presets, clock_tick, core_version,
        habit_add_in, habit_list_in, habit_toggle_today_in, init_logging, logging_status, ping,
        render_clocks, todo_add_in, todo_list_in, todo_toggle_in, ClockItem,
    };
    use chrono::{TimeZone, Utc};
    use dashboard_core::{MoveDirection, ServiceError, SqliteSlotStorage, INVALID_TIMEZONE};

    fn storage() -> SqliteSlotStorage {
        SqliteSlotStorage::open_in_memory().expect("open in-memory storage")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn bookmark_list_reports_filter_and_move_bounds() {
        let storage = storage();
        let (_, first) = bookmark_add_in(&storage, " Rust ", "https://rust-lang.org", "lang", "")
            .expect("add first");
        let (_, second) = bookmark_add_in(&storage, "Docs", "https://docs.rs", "lang, docs", "")
            .expect("add second");

        let all = bookmark_list_in(&storage, "", "");
        assert_eq!(all.total, 2);
        assert_eq!(all.tags, vec!["lang", "docs"]);
        assert_eq!(all.items[0].title, "Rust");
        assert!(!all.items[0].can_move_up);
        assert!(all.items[0].can_move_down);
        assert!(!all.items[1].can_move_down);

        let filtered = bookmark_list_in(&storage, "", "docs");
        assert_eq!(filtered.items.len(), 1);
        assert_eq!(filtered.items[0].id, second);
        assert!(filtered.items[0].can_move_up);

        bookmark_move_in(&storage, &second, MoveDirection::Up).expect("move");
        assert_eq!(bookmark_list_in(&storage, "", "").items[0].id, second);

        bookmark_delete_in(&storage, &first).expect("delete");
        assert_eq!(bookmark_list_in(&storage, "", "").total, 1);
    }

    #[test]
    fn bookmark_move_rejects_unknown_direction() {
        let response = bookmark_move("any".to_string(), "sideways".to_string());
        assert!(!response.ok);
        assert!(response.record_id.is_none());
        assert!(response.message.contains("unsupported move direction"));
    }

    #[test]
    fn todo_flow_reports_summary() {
        let storage = storage();
        let (_, id) = todo_add_in(&storage, "ship it").expect("add");
        todo_add_in(&storage, "celebrate").expect("add");
        todo_toggle_in(&storage, &id).expect("toggle");

        let listed = todo_list_in(&storage);
        assert_eq!(listed.remaining, 1);
        assert_eq!(listed.total, 2);
        assert_eq!(listed.summary, "1 of 2 remaining");
        assert!(listed.items[0].completed);

        let err = todo_add_in(&storage, "  ").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn clocks_seed_defaults_and_mark_invalid_zones() {
        let storage = storage();
        assert_eq!(clock_list_in(&storage).expect("list").len(), 3);

        let (_, id) = clock_add_in(&storage, "Nowhere", "Bad/Zone").expect("add");
        let clocks = clock_list_in(&storage).expect("list");
        let broken = clocks.iter().find(|clock| clock.id == id).expect("added");
        assert_eq!(broken.display, INVALID_TIMEZONE);
        assert!(clocks[0].display.ends_with('M'));

        clock_delete_in(&storage, &id).expect("delete");
        assert_eq!(clock_list_in(&storage).expect("list").len(), 3);
        assert_eq!(clock_presets().len(), 8);
    }

    #[test]
    fn clock_tick_rerenders_held_clocks_without_storage() {
        let held = vec![
            ClockItem {
                id: "1".to_string(),
                city: "Tokyo".to_string(),
                timezone: "Asia/Tokyo".to_string(),
                display: "stale".to_string(),
            },
            ClockItem {
                id: "9".to_string(),
                city: "Nowhere".to_string(),
                timezone: "Bad/Zone".to_string(),
                display: String::new(),
            },
        ];
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 30, 0).unwrap();

        let rendered = render_clocks(held.clone(), now);
        assert_eq!(rendered[0].display, "09:30:00 AM");
        assert_eq!(rendered[0].city, "Tokyo");
        assert_eq!(rendered[1].display, INVALID_TIMEZONE);

        let ticked = clock_tick(held);
        assert_eq!(ticked.len(), 2);
        assert_ne!(ticked[0].display, "stale");
    }

    #[test]
    fn logging_status_reports_inactive_before_init() {
        let status = logging_status();
        assert!(!status.active);
        assert!(status.level.is_empty());
        assert!(status.log_dir.is_empty());
    }

    #[test]
    fn habit_toggle_today_starts_a_streak() {
        let storage = storage();
        let (_, id) = habit_add_in(&storage, "Journal").expect("add");
        habit_toggle_today_in(&storage, &id).expect("toggle");

        let habits = habit_list_in(&storage);
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].streak, 1);
        assert!(habits[0].completed_today);
    }
}
