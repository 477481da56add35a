//! The task store: the single source of truth for the task list
//!
//! Every mutation is followed by a save-point, where the whole list is handed to the [`TaskStorage`].
//! A failed save never rolls back the in-memory change. It is logged, and kept until someone calls
//! [`TaskStore::take_persistence_error`] to tell the user about it.
//!
//! A stored list that cannot be fully read is never overwritten: it is set aside first (see [`TaskStore::load_or_default`]).

use crate::error::{Field, PersistenceError, StoreError, StoreResult, ValidationError};
use crate::task::{Category, Priority, Task, TaskDate, TaskDraft, TaskId, TaskPatch};
use crate::traits::TaskStorage;


/// An owned, ordered collection of tasks (insertion order), backed by a storage
#[derive(Debug)]
pub struct TaskStore<S: TaskStorage> {
    tasks: Vec<Task>,
    storage: S,
    pending_error: Option<PersistenceError>,
    load_error: Option<PersistenceError>,
}

impl<S: TaskStorage> TaskStore<S> {
    /// An empty store. Nothing is read from `storage`
    pub fn new(storage: S) -> Self {
        Self { tasks: Vec::new(), storage, pending_error: None, load_error: None }
    }

    /// Initialize a store from the content of its storage.
    ///
    /// Fails if the storage cannot be read, or if any stored task is invalid (e.g. several tasks with the same id)
    pub fn load(mut storage: S) -> Result<Self, PersistenceError> {
        let list = storage.load()?;
        if !list.is_complete() {
            return Err(PersistenceError::InvalidData(list.rejected().join("; ")));
        }

        let tasks = list.into_tasks();
        log::info!("Loaded {} tasks", tasks.len());
        Ok(Self { tasks, storage, pending_error: None, load_error: None })
    }

    /// Initialize a store with every task of its storage that can be read.
    ///
    /// If some tasks (or the whole list) cannot be read, the stored list is set aside before anything
    /// is saved again, and the problem is kept until [`TaskStore::take_load_error`] is called
    pub fn load_or_default(mut storage: S) -> Self {
        let (tasks, load_error) = match storage.load() {
            Ok(list) if list.is_complete() => (list.into_tasks(), None),
            Ok(list) => {
                for reason in list.rejected() {
                    log::warn!("Skipping stored {}", reason);
                }
                let err = PersistenceError::InvalidData(format!("{} stored tasks could not be read", list.rejected().len()));
                (list.into_tasks(), Some(err))
            },
            Err(err) => {
                log::warn!("Invalid stored task list: {}. Starting with an empty list", err);
                (Vec::new(), Some(err))
            },
        };

        let mut store = Self { tasks, storage, pending_error: None, load_error: None };
        if let Some(err) = load_error {
            match store.storage.set_aside() {
                Err(backup_err) => log::error!("Unable to keep a backup of the stored task list: {}", backup_err),
                // The tasks that could be read become the stored list
                Ok(()) if !store.tasks.is_empty() => store.save_point(),
                Ok(()) => (),
            }
            store.load_error = Some(err);
        }

        log::info!("Loaded {} tasks", store.tasks.len());
        store
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// A snapshot of the task list. Modifying it does not affect the store
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Add a new, uncompleted task at the end of the list
    pub fn create<N: Into<String>>(&mut self, name: N, category: Category, date: TaskDate, priority: Priority) -> StoreResult<Task> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField(Field::Name).into());
        }

        let mut id = TaskId::random();
        while self.get(&id).is_some() {
            id = TaskId::random();
        }

        let task = Task::new_with_parameters(id, name.to_string(), category, date, priority, false);
        log::debug!("Creating task {} ({})", task.id(), task.name());
        self.tasks.push(task.clone());
        self.save_point();
        Ok(task)
    }

    /// Validate the values of the "new task" form, then add the task
    pub fn create_from_draft(&mut self, draft: &TaskDraft) -> StoreResult<Task> {
        let new_task = draft.validate()?;
        self.create(new_task.name, new_task.category, new_task.date, new_task.priority)
    }

    /// Change some fields of a task. Fields that are `None` in `patch` are left unchanged.
    ///
    /// An empty name is refused, and nothing is changed in that case
    pub fn update(&mut self, id: &TaskId, patch: TaskPatch) -> StoreResult<Task> {
        let index = self.position(id)?;

        let new_name = match patch.name {
            None => None,
            Some(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ValidationError::MissingField(Field::Name).into());
                }
                Some(name.to_string())
            }
        };

        let task = &mut self.tasks[index];
        if let Some(name) = new_name {
            task.set_name(name);
        }
        if let Some(category) = patch.category {
            task.set_category(category);
        }
        if let Some(date) = patch.date {
            task.set_date(date);
        }
        if let Some(priority) = patch.priority {
            task.set_priority(priority);
        }
        let updated = task.clone();

        log::debug!("Updated task {}", id);
        self.save_point();
        Ok(updated)
    }

    /// Mark a task as completed, or as pending again
    pub fn toggle_complete(&mut self, id: &TaskId) -> StoreResult<Task> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        task.toggle_completion();
        let toggled = task.clone();

        self.save_point();
        Ok(toggled)
    }

    /// Permanently remove a task.
    ///
    /// Deleting a task that does not exist is not an error. Returns whether a task was actually removed
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let len_before = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        if self.tasks.len() == len_before {
            log::debug!("Task {} is already gone, nothing to delete", id);
            return false;
        }

        self.save_point();
        true
    }

    /// Write the current task list to the storage now
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        self.storage.save(&self.tasks)
    }

    /// Returns (and forgets) the error of the last failed save-point, if any
    pub fn take_persistence_error(&mut self) -> Option<PersistenceError> {
        self.pending_error.take()
    }

    /// Returns (and forgets) why the stored list could not be fully read by [`TaskStore::load_or_default`], if it could not
    pub fn take_load_error(&mut self) -> Option<PersistenceError> {
        self.load_error.take()
    }

    fn position(&self, id: &TaskId) -> StoreResult<usize> {
        self.tasks.iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn save_point(&mut self) {
        if let Err(err) = self.storage.save(&self.tasks) {
            log::warn!("Unable to save the task list: {}. Changes are only kept in memory", err);
            self.pending_error = Some(err);
        }
    }
}
