//! How much of the task list is done

use std::fmt::{Display, Formatter};

use crate::task::Task;

/// Completion counters of a task list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    completed: usize,
    total: usize,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|t| t.completed()).count(),
            total: tasks.len(),
        }
    }

    pub fn completed(&self) -> usize { self.completed }
    pub fn total(&self) -> usize     { self.total     }
    pub fn pending(&self) -> usize   { self.total - self.completed }

    /// Percentage of completed tasks, rounded half up. An empty list is 0% done
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = (200 * self.completed + self.total) / (2 * self.total);
        percent as u8
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}% ({}/{})", self.percent(), self.completed, self.total)
    }
}

/// Percentage (0 to 100) of completed tasks
pub fn ratio(tasks: &[Task]) -> u8 {
    Progress::of(tasks).percent()
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::task::{Category, Priority, TaskId};

    fn tasks(completed: usize, total: usize) -> Vec<Task> {
        (0..total)
            .map(|i| Task::new_with_parameters(TaskId::from(i.to_string()), format!("Task {}", i),
                Category::Homework, "2024-03-15".parse().unwrap(), Priority::Low, i < completed))
            .collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(ratio(&[]), 0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(ratio(&tasks(1, 4)), 25);
        assert_eq!(ratio(&tasks(2, 3)), 67);
        assert_eq!(ratio(&tasks(1, 3)), 33);
        assert_eq!(ratio(&tasks(1, 8)), 13);  // 12.5 rounds up
        assert_eq!(ratio(&tasks(3, 3)), 100);
        assert_eq!(ratio(&tasks(0, 5)), 0);
    }

    #[test]
    fn test_counters() {
        let progress = Progress::of(&tasks(2, 5));
        assert_eq!(progress.completed(), 2);
        assert_eq!(progress.pending(), 3);
        assert_eq!(progress.to_string(), "40% (2/5)");
    }
}
