//! Study tasks, and the raw input shapes used to create or edit them

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{Field, ValidationError};


/// Opaque, unique identifier of a task.
///
/// Newly created tasks get a random UUID. Task lists saved by older versions of the app used numeric ids,
/// these are still accepted when deserializing and are kept as their decimal representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self { content: s.to_string() }
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawTaskId {
            Text(String),
            Number(u64),
        }

        let content = match RawTaskId::deserialize(deserializer)? {
            RawTaskId::Text(s) => s,
            RawTaskId::Number(n) => n.to_string(),
        };
        Ok(TaskId{ content })
    }
}



/// A calendar date (no time component), always displayed and stored as a zero-padded `YYYY-MM-DD` string.
///
/// The ordering of `TaskDate`s is the chronological order, which is also the lexicographic order of their canonical strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskDate(NaiveDate);

impl TaskDate {
    /// The canonical `strftime` format of a date
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Build a date from a year, a 1-based month and a day. Returns `None` for dates that do not exist, or that cannot be written with a four-digit year
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today, according to the local clock
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for TaskDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Display for TaskDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for TaskDate {
    type Err = ValidationError;

    /// Only the canonical, zero-padded form is accepted (`2024-3-5` is rejected)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidField{ field: Field::Date, value: s.to_string() };

        let date = NaiveDate::parse_from_str(s, Self::FORMAT).map_err(|_| invalid())?;
        let parsed = Self::from_ymd(date.year(), date.month(), date.day()).ok_or_else(invalid)?;
        if parsed.to_string() != s {
            return Err(invalid());
        }
        Ok(parsed)
    }
}

/// Used to support serde
impl Serialize for TaskDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskDate {
    fn deserialize<D>(deserializer: D) -> Result<TaskDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}



/// The kind of study work a task belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Homework,
    Exam,
    Project,
    #[serde(rename = "Personal Study")]
    PersonalStudy,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Homework, Category::Exam, Category::Project, Category::PersonalStudy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Homework => "Homework",
            Category::Exam => "Exam",
            Category::Project => "Project",
            Category::PersonalStudy => "Personal Study",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL.iter()
            .find(|cat| cat.as_str() == s.trim())
            .copied()
            .ok_or_else(|| ValidationError::InvalidField{ field: Field::Category, value: s.to_string() })
    }
}



/// How urgent a task is.
///
/// Variants are declared in ascending order, so that `High > Medium > Low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL.iter()
            .find(|p| p.as_str() == s.trim())
            .copied()
            .ok_or_else(|| ValidationError::InvalidField{ field: Field::Priority, value: s.to_string() })
    }
}



/// A study task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned at creation, never changes
    id: TaskId,
    /// The display name of the task
    name: String,
    category: Category,
    /// The due date. Also decides which calendar cell shows this task
    date: TaskDate,
    priority: Priority,
    #[serde(default)]
    completed: bool,
}

impl Task {
    /// Create a brand new, uncompleted Task.
    /// This will pick a new (random) task ID.
    pub fn new(name: String, category: Category, date: TaskDate, priority: Priority) -> Self {
        Self::new_with_parameters(TaskId::random(), name, category, date, priority, false)
    }

    /// Create a new Task instance, that may already exist somewhere (e.g. in a saved task list)
    pub fn new_with_parameters(id: TaskId, name: String, category: Category, date: TaskDate,
                               priority: Priority, completed: bool) -> Self
    {
        Self { id, name, category, date, priority, completed }
    }

    pub fn id(&self) -> &TaskId          { &self.id       }
    pub fn name(&self) -> &str           { &self.name     }
    pub fn category(&self) -> Category   { self.category  }
    pub fn date(&self) -> TaskDate       { self.date      }
    pub fn priority(&self) -> Priority   { self.priority  }
    pub fn completed(&self) -> bool      { self.completed }

    pub(crate) fn set_name(&mut self, new_name: String) {
        self.name = new_name;
    }
    pub(crate) fn set_category(&mut self, new_category: Category) {
        self.category = new_category;
    }
    pub(crate) fn set_date(&mut self, new_date: TaskDate) {
        self.date = new_date;
    }
    pub(crate) fn set_priority(&mut self, new_priority: Priority) {
        self.priority = new_priority;
    }
    pub(crate) fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }
}



/// Raw values of the "new task" form, as typed by the user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    pub category: String,
    pub date: String,
    pub priority: String,
}

/// The validated content of a [`TaskDraft`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub category: Category,
    pub date: TaskDate,
    pub priority: Priority,
}

impl TaskDraft {
    pub fn new<N, C, D, P>(name: N, category: C, date: D, priority: P) -> Self
    where
        N: Into<String>, C: Into<String>, D: Into<String>, P: Into<String>,
    {
        Self {
            name: name.into(),
            category: category.into(),
            date: date.into(),
            priority: priority.into(),
        }
    }

    /// Check every field is filled in (the name is trimmed first), then parse them.
    pub fn validate(&self) -> Result<NewTask, ValidationError> {
        let name = self.name.trim();
        let fields = [
            (Field::Name, name),
            (Field::Category, self.category.trim()),
            (Field::Date, self.date.trim()),
            (Field::Priority, self.priority.trim()),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }

        Ok(NewTask {
            name: name.to_string(),
            category: self.category.parse()?,
            date: self.date.trim().parse()?,
            priority: self.priority.parse()?,
        })
    }
}



/// A partial update of a task. Fields left to `None` are not modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub date: Option<TaskDate>,
    pub priority: Option<Priority>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
    pub fn with_date(mut self, date: TaskDate) -> Self {
        self.date = Some(date);
        self
    }
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.date.is_none() && self.priority.is_none()
    }

    /// Build a patch from the answers of the edit prompt.
    ///
    /// Every answer is trimmed. An empty answer keeps the current value, any other answer must be valid.
    pub fn from_edit_prompt(name: &str, date: &str, category: &str, priority: &str) -> Result<Self, ValidationError> {
        let non_empty = |s: &str| {
            let s = s.trim();
            if s.is_empty() { None } else { Some(s.to_string()) }
        };

        Ok(Self {
            name: non_empty(name),
            date: non_empty(date).map(|d| d.parse()).transpose()?,
            category: non_empty(category).map(|c| c.parse()).transpose()?,
            priority: non_empty(priority).map(|p| p.parse()).transpose()?,
        })
    }
}
