use chrono::{Days, NaiveDate};
use dashboard_core::{FixedDateSource, HabitService, MemorySlotStorage, ServiceError, SLOT_HABITS};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn bad_persisted_date_keeps_other_habits_through_next_write() {
    let storage = MemorySlotStorage::with_slot(
        SLOT_HABITS,
        r#"[
            {"id":"1","name":"Run","completedDates":["2024-06-15"]},
            {"id":"2","name":"Read","completedDates":["2024-02-30"]}
        ]"#,
    );
    let mut service = HabitService::open(&storage, FixedDateSource::at_date(today()));
    assert_eq!(service.habits().len(), 2);

    service.add("New").unwrap();

    let raw = storage.raw(SLOT_HABITS).unwrap();
    assert!(raw.contains(r#""name":"Run","completedDates":["2024-06-15"]"#));
    assert!(raw.contains(r#""name":"Read","completedDates":[]"#));
    assert_eq!(service.habits().len(), 3);
}

#[test]
fn toggle_today_marks_and_unmarks() {
    let storage = MemorySlotStorage::new();
    let mut service = HabitService::open(&storage, FixedDateSource::at_date(today()));
    let habit = service.add("Meditate").unwrap();

    assert!(service.toggle_today(&habit.id).unwrap());
    assert!(service.is_completed_today(&service.habits()[0]));
    assert_eq!(service.streak(&service.habits()[0]), 1);

    assert!(!service.toggle_today(&habit.id).unwrap());
    assert!(!service.is_completed_today(&service.habits()[0]));
    assert_eq!(service.habits()[0].total_completions(), 0);
}

#[test]
fn overview_reports_streaks_from_persisted_dates() {
    let storage = MemorySlotStorage::with_slot(
        SLOT_HABITS,
        r#"[
            {"id":"1","name":"Run","completedDates":["2024-06-13","2024-06-14","2024-06-15"]},
            {"id":"2","name":"Read","completedDates":["2024-06-13","2024-06-14"]},
            {"id":"3","name":"Write","completedDates":["2024-06-13","2024-06-15"]},
            {"id":"4","name":"Swim","completedDates":[]}
        ]"#,
    );
    let service = HabitService::open(&storage, FixedDateSource::at_date(today()));

    let summary = service
        .overview()
        .into_iter()
        .map(|row| (row.name, row.streak, row.total_completions, row.completed_today))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![
            ("Run".to_string(), 3, 3, true),
            ("Read".to_string(), 0, 2, false),
            ("Write".to_string(), 1, 2, true),
            ("Swim".to_string(), 0, 0, false),
        ]
    );
}

#[test]
fn streak_grows_across_days() {
    let storage = MemorySlotStorage::new();
    let id = {
        let mut service = HabitService::open(&storage, FixedDateSource::at_date(today()));
        let habit = service.add("Floss").unwrap();
        service.toggle_today(&habit.id).unwrap();
        habit.id
    };

    let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
    let mut service = HabitService::open(&storage, FixedDateSource::at_date(tomorrow));
    assert_eq!(service.overview()[0].streak, 0);
    service.toggle_today(&id).unwrap();
    assert_eq!(service.overview()[0].streak, 2);
}

#[test]
fn blank_name_and_unknown_id_are_rejected() {
    let storage = MemorySlotStorage::new();
    let mut service = HabitService::open(&storage, FixedDateSource::at_date(today()));

    assert!(matches!(
        service.add("  ").unwrap_err(),
        ServiceError::Validation(_)
    ));
    assert!(matches!(
        service.toggle_today("ghost").unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        service.delete("ghost").unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert_eq!(storage.write_count(), 0);
}
