//! This is an example of how study-tracker can be used

use std::path::Path;

use study_tracker::cache::Cache;
use study_tracker::config::PALETTE;
use study_tracker::traits::Renderer;
use study_tracker::{Notice, TaskDate, TaskDraft, TaskStore, Tracker, Views};

const CACHE_FOLDER: &str = "example_cache";


/// A renderer that prints everything to the terminal
struct Console;

impl Renderer for Console {
    fn render(&mut self, views: &Views) {
        println!("---- {} tasks shown, {}% done -----", views.visible.len(), views.progress);
        study_tracker::utils::print_task_list(&views.visible);
        study_tracker::utils::print_calendar(&views.calendar);
    }

    fn notify(&mut self, notice: &Notice) {
        if notice.is_error() {
            log::error!("{}", notice);
        } else {
            println!(">> {}", notice);
        }
    }
}


fn main() {
    env_logger::init();

    println!("This example adds a few tasks, then moves one of them to another day.");
    println!("Tasks are saved in the {:?} folder. You can set RUST_LOG to display more info.", CACHE_FOLDER);
    println!("Categories: {}", study_tracker::utils::format_legend(&PALETTE));
    println!();

    let cache = Cache::new(Path::new(CACHE_FOLDER));
    let store = TaskStore::load_or_default(cache);
    let mut tracker = Tracker::new(store, Console);

    let today = TaskDate::today();
    let drafts = [
        TaskDraft::new("Read chapter 4", "Homework", today.to_string(), "Medium"),
        TaskDraft::new("Midterm review", "Exam", today.to_string(), "High"),
        TaskDraft::new("Flashcards", "Personal Study", today.to_string(), "Low"),
    ];
    for draft in &drafts {
        if let Err(err) = tracker.add_task(draft) {
            log::warn!("Unable to add {:?}: {}", draft.name, err);
        }
    }

    let first_id = tracker.store().tasks().first().map(|t| t.id().clone());
    if let Some(id) = first_id {
        let tomorrow = TaskDate::from_naive(today.as_naive().succ_opt().unwrap_or(today.as_naive()));
        tracker.begin_drag(id.clone());
        tracker.drop_on(tomorrow);
        if let Err(err) = tracker.toggle_complete(&id) {
            log::warn!("Unable to complete task {}: {}", id, err);
        }
    }
}
