//! Properties every implementation of the tracker core must hold


use std::collections::HashSet;

use study_tracker::calendar::{self, CalendarCell, GRID_CELLS};
use study_tracker::filter::{self, Criteria};
use study_tracker::memory::MemoryStorage;
use study_tracker::progress;
use study_tracker::reschedule::{DragState, RescheduleCoordinator};
use study_tracker::{Category, Priority, TaskId, TaskStore};

use scenarii::{date, ids, semester_tasks};


fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn loaded_store() -> TaskStore<MemoryStorage> {
    let mut storage = MemoryStorage::with_key("study_tasks");
    storage.set_raw(serde_json::to_string(&semester_tasks()).unwrap());
    TaskStore::load(storage).unwrap()
}

#[test]
fn created_ids_are_unique() {
    init_logger();
    let mut store = loaded_store();
    let mut created = HashSet::new();
    for i in 0..100 {
        let task = store.create(format!("Task {}", i), Category::Homework, date("2024-03-20"), Priority::Low).unwrap();
        assert!(created.insert(task.id().clone()));
    }

    let all: HashSet<&TaskId> = store.tasks().iter().map(|t| t.id()).collect();
    assert_eq!(all.len(), store.len());
}

#[test]
fn toggle_twice_is_identity() {
    init_logger();
    let mut store = loaded_store();
    for task in semester_tasks() {
        store.toggle_complete(task.id()).unwrap();
        let back = store.toggle_complete(task.id()).unwrap();
        assert_eq!(back.completed(), task.completed());
    }
    assert_eq!(store.list(), semester_tasks());
}

#[test]
fn no_criteria_returns_everything_sorted() {
    init_logger();
    let store = loaded_store();
    let visible = filter::apply(store.tasks(), &Criteria::all());
    assert_eq!(ids(visible.iter().copied()), vec!["t5", "t2", "t3", "t1", "t4", "t6"]);
}

#[test]
fn filtering_is_idempotent() {
    init_logger();
    let store = loaded_store();
    let criteria = Criteria::all().with_search("re");
    let first = filter::apply(store.tasks(), &criteria);
    let second = filter::apply(store.tasks(), &criteria);
    assert_eq!(first, second);
}

#[test]
fn search_ignores_case() {
    init_logger();
    let store = loaded_store();
    for search in &["review", "REVIEW"] {
        let visible = filter::apply(store.tasks(), &Criteria::all().with_search(*search));
        assert_eq!(ids(visible.iter().copied()), vec!["t1"]);
    }
}

#[test]
fn thirty_day_month_starting_on_wednesday() {
    // November 2023
    let grid = calendar::build(&[], 2023, 10, date("2023-11-01"));
    let cells = grid.cells();
    assert_eq!(cells.len(), GRID_CELLS);
    assert!(cells[..3].iter().all(CalendarCell::is_empty));
    assert!(cells[3..33].iter().all(|c| !c.is_empty()));
    assert!(cells[33..].iter().all(CalendarCell::is_empty));
}

#[test]
fn progress_ratios() {
    let tasks = semester_tasks();
    assert_eq!(progress::ratio(&[]), 0);
    // t2 is completed, t1, t3 and t4 are not
    assert_eq!(progress::ratio(&[tasks[0].clone(), tasks[1].clone(), tasks[2].clone(), tasks[3].clone()]), 25);
    // t2 and t5 are completed
    assert_eq!(progress::ratio(&[tasks[1].clone(), tasks[4].clone(), tasks[5].clone()]), 67);
}

#[test]
fn drag_then_drop() {
    init_logger();
    let mut store = loaded_store();
    let mut coordinator = RescheduleCoordinator::new();

    coordinator.begin_drag(TaskId::from("t1"));
    coordinator.drop_on(&mut store, date("2024-03-15")).unwrap();
    assert_eq!(store.get(&TaskId::from("t1")).unwrap().date(), date("2024-03-15"));
    assert_eq!(coordinator.state(), DragState::Idle);

    coordinator.begin_drag(TaskId::from("t6"));
    coordinator.drop_on(&mut store, date("2024-03-20")).unwrap();
    assert_eq!(store.get(&TaskId::from("t6")).unwrap().date(), date("2024-03-20"));
    assert!(coordinator.dragged_task().is_none());
}

#[test]
fn drop_without_drag_changes_nothing() {
    init_logger();
    let mut store = loaded_store();
    let mut coordinator = RescheduleCoordinator::new();
    assert!(coordinator.drop_on(&mut store, date("2024-03-15")).is_none());
    assert_eq!(store.list(), semester_tasks());
}

#[test]
fn drop_of_a_deleted_task() {
    init_logger();
    let mut store = loaded_store();
    let mut coordinator = RescheduleCoordinator::new();

    coordinator.begin_drag(TaskId::from("t2"));
    assert!(store.delete(&TaskId::from("t2")));
    assert!(coordinator.drop_on(&mut store, date("2024-03-15")).is_none());
    assert!(!coordinator.is_dragging());

    let mut expected = semester_tasks();
    expected.retain(|t| t.id().as_str() != "t2");
    assert_eq!(store.list(), expected);
}
