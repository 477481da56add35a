//! Storing the task list between two runs


use study_tracker::cache::Cache;
use study_tracker::error::PersistenceError;
use study_tracker::memory::MemoryStorage;
use study_tracker::traits::TaskStorage;
use study_tracker::{Category, Priority, TaskDraft, TaskId, TaskStore};

use scenarii::{date, semester_tasks};


fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn file_cache_survives_a_restart() {
    init_logger();
    let folder = tempfile::tempdir().unwrap();

    let mut store = TaskStore::load(Cache::with_key(folder.path(), "study_tasks")).unwrap();
    assert!(store.is_empty());
    for task in semester_tasks() {
        store.create(task.name(), task.category(), task.date(), task.priority()).unwrap();
    }
    store.create_from_draft(&TaskDraft::new("Office hours", "Personal Study", "2024-03-21", "Medium")).unwrap();
    assert!(store.take_persistence_error().is_none());

    let reloaded = TaskStore::load(Cache::with_key(folder.path(), "study_tasks")).unwrap();
    assert_eq!(reloaded.list(), store.list());
    assert!(folder.path().join("study_tasks.json").exists());
}

#[test]
fn unwritable_cache_keeps_changes_in_memory() {
    init_logger();
    let folder = tempfile::tempdir().unwrap();
    // A file where the cache folder should be
    let blocker = folder.path().join("blocker");
    std::fs::write(&blocker, "not a folder").unwrap();

    let mut store = TaskStore::new(Cache::with_key(&blocker, "study_tasks"));
    store.create("Essay", Category::Homework, date("2024-03-15"), Priority::High).unwrap();
    assert_eq!(store.len(), 1);
    assert!(matches!(store.take_persistence_error(), Some(PersistenceError::Io(_))));
}

#[test]
fn stored_format() {
    init_logger();
    let mut storage = MemoryStorage::with_key("study_tasks");
    storage.save(&semester_tasks()[..1]).unwrap();

    let value: serde_json::Value = serde_json::from_str(storage.raw().unwrap()).unwrap();
    assert_eq!(value, serde_json::json!([{
        "id": "t1",
        "name": "Midterm Review",
        "category": "Exam",
        "date": "2024-03-15",
        "priority": "Low",
        "completed": false
    }]));
}

#[test]
fn legacy_numeric_ids() {
    init_logger();
    let mut storage = MemoryStorage::with_key("study_tasks");
    storage.set_raw(r#"[
        {"id":1709251200000,"name":"Old task","category":"Personal Study","date":"2024-03-01","priority":"Medium","completed":true},
        {"id":"b","name":"Newer task","category":"Homework","date":"2024-03-02","priority":"Low"}
    ]"#);

    let store = TaskStore::load(storage).unwrap();
    assert_eq!(store.len(), 2);
    let old = store.get(&TaskId::from("1709251200000")).unwrap();
    assert_eq!(old.category(), Category::PersonalStudy);
    assert!(old.completed());
    assert!(!store.get(&TaskId::from("b")).unwrap().completed());
}

#[test]
fn unreadable_list_is_backed_up() {
    init_logger();
    let mut storage = MemoryStorage::with_key("study_tasks");
    storage.set_raw("{not json");

    assert!(matches!(TaskStore::load(storage.clone()), Err(PersistenceError::Serialization(_))));

    let mut store = TaskStore::load_or_default(storage);
    assert!(store.is_empty());
    store.create("New", Category::Exam, date("2024-03-15"), Priority::High).unwrap();
    assert_eq!(store.storage().raw_backup(), Some("{not json"));
}

#[test]
fn tasks_written_by_the_edit_prompt_are_kept() {
    init_logger();
    // The edit prompt of older versions stored whatever was typed in
    let blob = r#"[
        {"id":1,"name":"Keep me","category":"Exam","date":"2024-03-15","priority":"High","completed":false},
        {"id":2,"name":"Lowercase","category":"homework","date":"2024-3-5","priority":"low","completed":true},
        {"id":3,"name":"Free text","category":"Chemistry","date":"2024-03-20","priority":"Low","completed":false}
    ]"#;
    let mut storage = MemoryStorage::with_key("study_tasks");
    storage.set_raw(blob);

    assert!(matches!(TaskStore::load(storage.clone()), Err(PersistenceError::InvalidData(_))));

    let mut store = TaskStore::load_or_default(storage);
    assert!(store.take_load_error().is_some());
    let names: Vec<&str> = store.tasks().iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["Keep me", "Lowercase"]);
    let lowercase = store.get(&TaskId::from("2")).unwrap();
    assert_eq!(lowercase.category(), Category::Homework);
    assert_eq!(lowercase.date(), date("2024-03-05"));

    // Saving again neither loses the readable tasks nor the original blob
    store.create("New", Category::Project, date("2024-03-21"), Priority::Medium).unwrap();
    let reloaded = TaskStore::load(store.storage().clone()).unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(store.storage().raw_backup(), Some(blob));
}

#[test]
fn tasks_without_a_name_are_not_loaded() {
    init_logger();
    let mut storage = MemoryStorage::with_key("study_tasks");
    storage.set_raw(r#"[
        {"id":"a","name":"","category":"Exam","date":"2024-03-15","priority":"High"},
        {"id":"b","name":"   ","category":"Exam","date":"2024-03-15","priority":"High"},
        {"id":"c","name":" Essay ","category":"Exam","date":"2024-03-15","priority":"High"}
    ]"#);

    match TaskStore::load(storage.clone()) {
        Err(PersistenceError::InvalidData(reason)) => assert!(reason.contains("name")),
        other => panic!("Unexpected result {:?}", other.map(|s| s.list())),
    }

    let store = TaskStore::load_or_default(storage);
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].name(), "Essay");
}

#[test]
fn cache_file_is_backed_up() {
    init_logger();
    let folder = tempfile::tempdir().unwrap();
    let cache = Cache::with_key(folder.path(), "study_tasks");
    std::fs::write(cache.backing_file(), r#"[{"id":"a","name":"Lab","category":"Chores","date":"2024-03-15","priority":"Low"}]"#).unwrap();

    let mut store = TaskStore::load_or_default(cache.clone());
    assert!(store.is_empty());
    assert!(store.take_load_error().is_some());
    assert!(std::fs::read_to_string(folder.path().join("study_tasks.json.bak")).unwrap().contains("Chores"));

    store.create("New", Category::Exam, date("2024-03-15"), Priority::High).unwrap();
    assert_eq!(TaskStore::load(cache).unwrap().len(), 1);
    assert!(folder.path().join("study_tasks.json.bak").exists());
}

#[test]
fn quota() {
    init_logger();
    let mut store = TaskStore::new(MemoryStorage::with_key("study_tasks").with_quota(200));
    store.create("Short", Category::Exam, date("2024-03-15"), Priority::High).unwrap();
    assert!(store.take_persistence_error().is_none());

    store.create("A second task that does not fit", Category::Exam, date("2024-03-16"), Priority::High).unwrap();
    assert!(matches!(store.take_persistence_error(), Some(PersistenceError::QuotaExceeded{ quota: 200, .. })));
    assert_eq!(store.len(), 2);
}
