use chrono::NaiveDate;
use dashboard_core::{
    open_sqlite_storage, Dashboard, DashboardConfig, FixedDateSource, MemorySlotStorage,
    SqliteDashboard, SLOT_BOOKMARKS, SLOT_HABITS, SLOT_TODOS, SLOT_WORLD_CLOCKS,
};

#[test]
fn widgets_write_only_their_own_slot() {
    let storage = MemorySlotStorage::new();
    let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let mut dashboard = Dashboard::open(&storage, FixedDateSource::at_date(day)).unwrap();

    dashboard.todos.add("one").unwrap();
    assert!(storage.raw(SLOT_TODOS).is_some());
    assert!(storage.raw(SLOT_BOOKMARKS).is_none());
    assert!(storage.raw(SLOT_HABITS).is_none());
    assert!(storage.raw(SLOT_WORLD_CLOCKS).is_some());

    dashboard
        .bookmarks
        .add("Docs", "https://docs.rs", "rust", "")
        .unwrap();
    let habit = dashboard.habits.add("Walk").unwrap();
    dashboard.habits.toggle_today(&habit.id).unwrap();

    assert_eq!(dashboard.todos.todos().len(), 1);
    assert_eq!(dashboard.bookmarks.bookmarks().len(), 1);
    assert_eq!(dashboard.habits.overview()[0].streak, 1);
    assert_eq!(dashboard.clocks.clocks().len(), 3);
}

#[test]
fn sqlite_dashboard_reloads_from_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = DashboardConfig {
        db_path: dir.path().join("dashboard.sqlite3"),
        ..DashboardConfig::default()
    };

    {
        let mut dashboard = SqliteDashboard::from_config(&config).unwrap();
        dashboard.todos.add("persisted").unwrap();
        let clock_id = dashboard.clocks.clocks()[0].id.clone();
        dashboard.clocks.delete(&clock_id).unwrap();
    }

    let storage = open_sqlite_storage(&config.db_path).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let dashboard = Dashboard::open(storage, FixedDateSource::at_date(day)).unwrap();
    assert_eq!(dashboard.todos.todos()[0].text, "persisted");
    assert_eq!(dashboard.clocks.clocks().len(), 2);
}
