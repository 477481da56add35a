//! Drag-to-reschedule: a task card is picked up, then dropped onto a calendar day

use crate::error::StoreError;
use crate::store::TaskStore;
use crate::task::{Task, TaskDate, TaskId, TaskPatch};
use crate::traits::TaskStorage;

/// What the coordinator is currently doing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging(TaskId),
}

/// Remembers which task is being dragged, and moves it to the day it is dropped on
#[derive(Clone, Debug, Default)]
pub struct RescheduleCoordinator {
    dragged: Option<TaskId>,
}

impl RescheduleCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        match &self.dragged {
            None => DragState::Idle,
            Some(id) => DragState::Dragging(id.clone()),
        }
    }

    pub fn dragged_task(&self) -> Option<&TaskId> {
        self.dragged.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Start dragging a task. This replaces any drag in progress
    pub fn begin_drag(&mut self, id: TaskId) {
        if let Some(previous) = &self.dragged {
            log::debug!("Dropping the drag of task {} in favour of {}", previous, id);
        }
        self.dragged = Some(id);
    }

    /// Stop dragging, without moving anything
    pub fn cancel_drag(&mut self) {
        self.dragged = None;
    }

    /// Move the dragged task (if any) to `date`, and go back to idle.
    ///
    /// Returns the moved task. Dropping while idle does nothing, and so does dropping a task
    /// that has been deleted in the meantime.
    pub fn drop_on<S: TaskStorage>(&mut self, store: &mut TaskStore<S>, date: TaskDate) -> Option<Task> {
        let id = match self.dragged.take() {
            None => {
                log::debug!("Drop on {} while nothing is dragged", date);
                return None;
            },
            Some(id) => id,
        };

        match store.update(&id, TaskPatch::new().with_date(date)) {
            Ok(task) => {
                log::info!("Rescheduled task {} to {}", id, date);
                Some(task)
            },
            Err(StoreError::NotFound(_)) => {
                log::debug!("Dragged task {} no longer exists", id);
                None
            },
            Err(err) => {
                log::warn!("Unable to reschedule task {}: {}", id, err);
                None
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::memory::MemoryStorage;
    use crate::task::{Category, Priority};

    fn date(s: &str) -> TaskDate {
        s.parse().unwrap()
    }

    fn store_with_task() -> (TaskStore<MemoryStorage>, Task) {
        let mut store = TaskStore::new(MemoryStorage::with_key("study_tasks"));
        let task = store.create("Lab report", Category::Project, date("2024-03-10"), Priority::Medium).unwrap();
        (store, task)
    }

    #[test]
    fn test_reschedule() {
        let (mut store, task) = store_with_task();
        let mut coordinator = RescheduleCoordinator::new();

        coordinator.begin_drag(task.id().clone());
        assert_eq!(coordinator.state(), DragState::Dragging(task.id().clone()));

        let moved = coordinator.drop_on(&mut store, date("2024-03-15")).unwrap();
        assert_eq!(moved.date(), date("2024-03-15"));
        assert_eq!(moved.name(), task.name());
        assert_eq!(store.get(task.id()).unwrap().date(), date("2024-03-15"));
        assert_eq!(coordinator.state(), DragState::Idle);
    }

    #[test]
    fn test_drop_while_idle() {
        let (mut store, task) = store_with_task();
        let mut coordinator = RescheduleCoordinator::new();

        assert!(coordinator.drop_on(&mut store, date("2024-03-15")).is_none());
        assert_eq!(store.get(task.id()), Some(&task));
    }

    #[test]
    fn test_cancel() {
        let (mut store, task) = store_with_task();
        let mut coordinator = RescheduleCoordinator::new();

        coordinator.begin_drag(task.id().clone());
        coordinator.cancel_drag();
        assert!(!coordinator.is_dragging());
        assert!(coordinator.drop_on(&mut store, date("2024-03-15")).is_none());
        assert_eq!(store.get(task.id()), Some(&task));
    }

    #[test]
    fn test_dragged_task_was_deleted() {
        let (mut store, task) = store_with_task();
        let mut coordinator = RescheduleCoordinator::new();

        coordinator.begin_drag(task.id().clone());
        store.delete(task.id());
        assert!(coordinator.drop_on(&mut store, date("2024-03-15")).is_none());
        assert_eq!(coordinator.state(), DragState::Idle);
        assert!(store.is_empty());
    }

    #[test]
    fn test_new_drag_replaces_the_previous_one() {
        let (mut store, first) = store_with_task();
        let second = store.create("Quiz", Category::Exam, date("2024-03-11"), Priority::High).unwrap();
        let mut coordinator = RescheduleCoordinator::new();

        coordinator.begin_drag(first.id().clone());
        coordinator.begin_drag(second.id().clone());
        coordinator.drop_on(&mut store, date("2024-03-20")).unwrap();

        assert_eq!(store.get(first.id()).unwrap().date(), date("2024-03-10"));
        assert_eq!(store.get(second.id()).unwrap().date(), date("2024-03-20"));
    }
}
