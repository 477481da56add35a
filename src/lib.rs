//! This crate provides the core of a personal study planner.
//!
//! Study tasks (homework, exams, projects...) are kept in a [`TaskStore`](store::TaskStore), that saves
//! the whole list to a [`TaskStorage`](traits::TaskStorage) after every change. \
//! Two storages are provided: a JSON file [`Cache`](cache::Cache), and an in-memory [`MemoryStorage`](memory::MemoryStorage) that is mostly useful for tests.
//!
//! Everything the user sees is derived from the store by pure functions:
//! * the filtered, sorted task list ([`filter`])
//! * the month calendar ([`calendar`])
//! * the completion ratio ([`progress`])
//!
//! Tasks can be moved to another day by drag and drop, see [`reschedule`]. \
//! A [`Tracker`](tracker::Tracker) wires all of this together, and pushes fresh views to a [`Renderer`](traits::Renderer) after every operation.

pub mod traits;

mod task;
pub use task::{Category, NewTask, Priority, Task, TaskDate, TaskDraft, TaskId, TaskPatch};
pub mod error;
pub use error::{StoreError, StoreResult};

pub mod record;
pub use record::StoredList;
pub mod cache;
pub mod memory;
pub mod mock_behaviour;

pub mod store;
pub use store::TaskStore;
pub mod filter;
pub mod calendar;
pub mod progress;
pub mod reschedule;
pub mod notice;
pub use notice::Notice;
pub mod tracker;
pub use tracker::{Tracker, Views};

pub mod config;
pub mod utils;
