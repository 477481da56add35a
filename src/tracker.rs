//! The whole tracker: a task store, and everything the user sees of it
//!
//! After every operation, the [`Tracker`] recomputes its [`Views`] and hands them to its [`Renderer`],
//! so that the list, the calendar and the progress bar never disagree with the store.

use crate::calendar::{self, CalendarGrid, MonthCursor};
use crate::error::StoreResult;
use crate::filter::{self, Criteria};
use crate::notice::Notice;
use crate::progress;
use crate::reschedule::{DragState, RescheduleCoordinator};
use crate::store::TaskStore;
use crate::task::{Task, TaskDate, TaskDraft, TaskId, TaskPatch};
use crate::traits::{Renderer, TaskStorage};

/// Everything that is derived from the task list, ready to be displayed
#[derive(Clone, Debug, PartialEq)]
pub struct Views {
    /// Tasks that match the current criteria, in display order
    pub visible: Vec<Task>,
    /// The displayed month
    pub calendar: CalendarGrid,
    /// Percentage of completed tasks (over the whole list, regardless of the criteria)
    pub progress: u8,
}

/// Owns a task store and keeps a renderer up to date with it
pub struct Tracker<S: TaskStorage, R: Renderer> {
    store: TaskStore<S>,
    renderer: R,
    criteria: Criteria,
    month: MonthCursor,
    coordinator: RescheduleCoordinator,
    today: fn() -> TaskDate,
}

impl<S: TaskStorage, R: Renderer> Tracker<S, R> {
    /// Create a tracker that displays the current month, and render it a first time
    pub fn new(store: TaskStore<S>, renderer: R) -> Self {
        Self::with_clock(store, renderer, TaskDate::today)
    }

    /// Same as [`Tracker::new`], with a custom way to tell what day it is
    pub fn with_clock(store: TaskStore<S>, renderer: R, today: fn() -> TaskDate) -> Self {
        let mut tracker = Self {
            store,
            renderer,
            criteria: Criteria::all(),
            month: MonthCursor::containing(today()),
            coordinator: RescheduleCoordinator::new(),
            today,
        };
        tracker.finish(None);
        tracker
    }

    pub fn store(&self) -> &TaskStore<S>        { &self.store       }
    pub fn renderer(&self) -> &R                { &self.renderer    }
    pub fn renderer_mut(&mut self) -> &mut R    { &mut self.renderer }
    pub fn criteria(&self) -> &Criteria         { &self.criteria    }
    pub fn month(&self) -> MonthCursor          { self.month        }
    pub fn drag_state(&self) -> DragState       { self.coordinator.state() }

    /// Give back the store, e.g. to save it one last time
    pub fn into_store(self) -> TaskStore<S> {
        self.store
    }

    /// Add a task from the values of the "new task" form
    pub fn add_task(&mut self, draft: &TaskDraft) -> StoreResult<Task> {
        let result = self.store.create_from_draft(draft);
        let notice = match &result {
            Ok(task) => Notice::TaskAdded{ name: task.name().to_string() },
            Err(err) => Notice::Rejected{ reason: err.to_string() },
        };
        self.finish(Some(notice));
        result
    }

    pub fn edit_task(&mut self, id: &TaskId, patch: TaskPatch) -> StoreResult<Task> {
        let result = self.store.update(id, patch);
        let notice = match &result {
            Ok(task) => Notice::TaskUpdated{ name: task.name().to_string() },
            Err(err) => Notice::Rejected{ reason: err.to_string() },
        };
        self.finish(Some(notice));
        result
    }

    pub fn toggle_complete(&mut self, id: &TaskId) -> StoreResult<Task> {
        let result = self.store.toggle_complete(id);
        let notice = match &result {
            Ok(_) => None,
            Err(err) => Some(Notice::Rejected{ reason: err.to_string() }),
        };
        self.finish(notice);
        result
    }

    /// Delete a task. Returns whether it existed
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let name = self.store.get(id).map(|t| t.name().to_string());
        let deleted = self.store.delete(id);
        let notice = match name {
            Some(name) if deleted => Some(Notice::TaskDeleted{ name }),
            _ => None,
        };
        self.finish(notice);
        deleted
    }

    /// Change what the task list shows
    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
        self.finish(None);
    }

    /// Change the search text only, and keep the other criteria
    pub fn set_search<T: Into<String>>(&mut self, search: T) {
        self.criteria.search = search.into();
        self.finish(None);
    }

    pub fn show_month(&mut self, month: MonthCursor) {
        self.month = month;
        self.finish(None);
    }

    pub fn previous_month(&mut self) {
        self.show_month(self.month.previous());
    }

    pub fn next_month(&mut self) {
        self.show_month(self.month.next());
    }

    /// A task card is being dragged. Nothing needs to be rendered yet
    pub fn begin_drag(&mut self, id: TaskId) {
        self.coordinator.begin_drag(id);
    }

    pub fn cancel_drag(&mut self) {
        self.coordinator.cancel_drag();
    }

    /// The dragged task has been dropped onto a calendar day
    pub fn drop_on(&mut self, date: TaskDate) -> Option<Task> {
        let moved = self.coordinator.drop_on(&mut self.store, date);
        let notice = moved.as_ref().map(|task| Notice::TaskMoved{ name: task.name().to_string(), date: task.date() });
        self.finish(notice);
        moved
    }

    /// The tasks due on a given day, e.g. to show the details of a calendar cell
    pub fn open_day(&self, date: TaskDate) -> Vec<Task> {
        calendar::tasks_on(self.store.tasks(), date).into_iter().cloned().collect()
    }

    pub fn views(&self) -> Views {
        let tasks = self.store.tasks();
        Views {
            visible: filter::apply(tasks, &self.criteria).into_iter().cloned().collect(),
            calendar: calendar::build_month(tasks, self.month, (self.today)()),
            progress: progress::ratio(tasks),
        }
    }

    /// Render again, without changing anything
    pub fn refresh(&mut self) {
        self.finish(None);
    }

    fn finish(&mut self, notice: Option<Notice>) {
        if let Some(err) = self.store.take_load_error() {
            self.renderer.notify(&Notice::LoadFailed{ reason: err.to_string() });
        }
        if let Some(notice) = notice {
            self.renderer.notify(&notice);
        }
        if let Some(err) = self.store.take_persistence_error() {
            self.renderer.notify(&Notice::SaveFailed{ reason: err.to_string() });
        }

        let views = self.views();
        self.renderer.render(&views);
    }
}
