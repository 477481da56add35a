//! Filtering and sorting of the task list view

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{Field, ValidationError};
use crate::task::{Category, Priority, Task};


/// Either every value, or a single one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T: Display> Display for Selection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => write!(f, "All"),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Parses the value of a filter drop-down: `"All"`, or a value of `T`
impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "All" | "" => Ok(Selection::All),
            other => other.parse().map(Selection::Only),
        }
    }
}


/// Which completion status should be visible
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    All,
    Completed,
    Pending,
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl StatusFilter {
    pub fn matches(&self, completed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => completed,
            StatusFilter::Pending => !completed,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatusFilter::All => "All",
            StatusFilter::Completed => "Completed",
            StatusFilter::Pending => "Pending",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "All" | "" => Ok(StatusFilter::All),
            "Completed" => Ok(StatusFilter::Completed),
            "Pending" => Ok(StatusFilter::Pending),
            other => Err(ValidationError::InvalidField{ field: Field::Status, value: other.to_string() }),
        }
    }
}


/// The combination of filters applied to the task list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    pub category: Selection<Category>,
    pub priority: Selection<Priority>,
    pub status: StatusFilter,
    /// Case-insensitive substring of the task name. Empty matches everything
    pub search: String,
}

impl Criteria {
    /// Criteria that retain every task
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Selection<Category>) -> Self {
        self.category = category;
        self
    }
    pub fn with_priority(mut self, priority: Selection<Priority>) -> Self {
        self.priority = priority;
        self
    }
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }
    pub fn with_search<S: Into<String>>(mut self, search: S) -> Self {
        self.search = search.into();
        self
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.matches_with_needle(task, &self.search.to_lowercase())
    }

    fn matches_with_needle(&self, task: &Task, needle: &str) -> bool {
        self.category.matches(&task.category())
            && self.priority.matches(&task.priority())
            && self.status.matches(task.completed())
            && (needle.is_empty() || task.name().to_lowercase().contains(needle))
    }
}


/// Order of the task list: earliest date first, then highest priority first
pub fn compare(a: &Task, b: &Task) -> Ordering {
    a.date().cmp(&b.date())
        .then_with(|| b.priority().cmp(&a.priority()))
}

/// Returns the tasks that match `criteria`, sorted by [`compare`].
///
/// Tasks that compare equal keep their relative order from `tasks`
pub fn apply<'a>(tasks: &'a [Task], criteria: &Criteria) -> Vec<&'a Task> {
    let needle = criteria.search.to_lowercase();
    let mut visible: Vec<&Task> = tasks.iter()
        .filter(|t| criteria.matches_with_needle(t, &needle))
        .collect();
    visible.sort_by(|a, b| compare(a, b));
    visible
}
