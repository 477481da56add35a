//! Reading stored task lists, one task at a time
//!
//! Lists written by older versions of the app may contain tasks that are not valid anymore
//! (e.g. a category typed in lowercase, or a date that is not zero-padded).
//! Tasks that can be understood are normalized, the others are reported in [`StoredList::rejected`].

use std::collections::HashSet;
use std::io::Read;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::error::{Field, PersistenceError, ValidationError};
use crate::task::{Category, Priority, Task, TaskDate, TaskId};


/// A task as it is found in storage, before any validation
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    name: String,
    category: String,
    date: String,
    priority: String,
    #[serde(default)]
    completed: bool,
}

impl TaskRecord {
    fn into_task(self) -> Result<Task, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField(Field::Name));
        }

        let category = Category::ALL.iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(self.category.trim()))
            .copied()
            .ok_or_else(|| invalid(Field::Category, &self.category))?;
        let priority = Priority::ALL.iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(self.priority.trim()))
            .copied()
            .ok_or_else(|| invalid(Field::Priority, &self.priority))?;
        let date = loose_date(&self.date).ok_or_else(|| invalid(Field::Date, &self.date))?;

        Ok(Task::new_with_parameters(self.id, name.to_string(), category, date, priority, self.completed))
    }
}

fn invalid(field: Field, value: &str) -> ValidationError {
    ValidationError::InvalidField{ field, value: value.to_string() }
}

/// Also accepts dates that are not zero-padded (`2024-3-5`)
fn loose_date(s: &str) -> Option<TaskDate> {
    let date = NaiveDate::parse_from_str(s.trim(), TaskDate::FORMAT).ok()?;
    TaskDate::from_ymd(date.year(), date.month(), date.day())
}


/// The content of a storage: the tasks that could be read, and why the other ones could not
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoredList {
    tasks: Vec<Task>,
    rejected: Vec<String>,
}

impl StoredList {
    /// A list where every task is valid
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks, rejected: Vec::new() }
    }

    /// Parse a JSON array of tasks. Fails only if the blob is not a JSON array at all
    pub fn from_json_str(blob: &str) -> Result<Self, PersistenceError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(blob)?;
        Ok(Self::from_values(values))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PersistenceError> {
        let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        Ok(Self::from_values(values))
    }

    fn from_values(values: Vec<serde_json::Value>) -> Self {
        let mut list = Self::default();
        let mut seen_ids = HashSet::with_capacity(values.len());

        for (index, value) in values.into_iter().enumerate() {
            let record: TaskRecord = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(err) => {
                    list.rejected.push(format!("task #{}: {}", index, err));
                    continue;
                }
            };

            let id = record.id.clone();
            match record.into_task() {
                Err(err) => list.rejected.push(format!("task {}: {}", id, err)),
                Ok(task) => {
                    if seen_ids.insert(id.clone()) {
                        list.tasks.push(task);
                    } else {
                        list.rejected.push(format!("task {}: duplicate task id", id));
                    }
                },
            }
        }
        list
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Why some stored tasks have been left out
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Whether every stored task could be read
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}
