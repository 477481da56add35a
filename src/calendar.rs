//! Month calendar: which tasks are due on which day of a 6-week grid

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::task::{Task, TaskDate};

/// Number of cells in a month grid (6 rows of 7 days)
pub const GRID_CELLS: usize = 42;
/// Number of columns in a month grid. Weeks start on Sunday
pub const WEEK_LENGTH: usize = 7;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;


/// A month of a given year.
///
/// Months are 0-based (0 is January). Out-of-range months roll over to the previous or next years,
/// so that `MonthCursor::new(2024, -1)` is December 2023 and `MonthCursor::new(2024, 12)` is January 2025.
/// Years are clamped to the ones a [`TaskDate`] can represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthCursor {
    year: i32,
    month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: i32) -> Self {
        let total = year as i64 * 12 + month0 as i64;
        let min = MIN_YEAR as i64 * 12;
        let max = MAX_YEAR as i64 * 12 + 11;
        let total = total.max(min).min(max);

        Self {
            year: total.div_euclid(12) as i32,
            month0: total.rem_euclid(12) as u32,
        }
    }

    /// The month `date` belongs to
    pub fn containing(date: TaskDate) -> Self {
        let date = date.as_naive();
        Self::new(date.year(), date.month0() as i32)
    }

    /// The current month, according to the local clock
    pub fn current() -> Self {
        Self::containing(TaskDate::today())
    }

    pub fn year(&self) -> i32 { self.year }
    /// 0-based month
    pub fn month0(&self) -> u32 { self.month0 }
    /// 1-based month
    pub fn month(&self) -> u32 { self.month0 + 1 }

    /// Move `months` months forward (or backwards when negative)
    pub fn offset(&self, months: i32) -> Self {
        Self::new(self.year, self.month0 as i32 + months)
    }

    pub fn previous(&self) -> Self {
        self.offset(-1)
    }

    pub fn next(&self) -> Self {
        self.offset(1)
    }

    pub fn first_day(&self) -> NaiveDate {
        // Cannot fail, the year is clamped in `new`
        NaiveDate::from_ymd_opt(self.year, self.month(), 1).unwrap_or(NaiveDate::MIN)
    }

    /// A given day of this month, if it exists
    pub fn day(&self, day: u32) -> Option<TaskDate> {
        TaskDate::from_ymd(self.year, self.month(), day)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if NaiveDate::from_ymd_opt(self.year, 2, 29).is_some() { 29 } else { 28 }
            }
        }
    }

    /// Index of the weekday of the 1st of the month (0 is Sunday)
    pub fn first_weekday(&self) -> usize {
        self.first_day().weekday().num_days_from_sunday() as usize
    }

    /// Human-readable name, e.g. "March 2024"
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl Display for MonthCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month())
    }
}



/// A day of the displayed month, and the tasks due on that day
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    /// 1-based day of the month
    pub day_number: u32,
    pub date: TaskDate,
    pub is_today: bool,
    /// Tasks due on this day, in store order
    pub tasks: Vec<Task>,
}

/// A cell of the month grid
#[derive(Clone, Debug, PartialEq)]
pub enum CalendarCell {
    /// Padding before the 1st or after the last day of the month
    Empty,
    Day(DayCell),
}

impl CalendarCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            CalendarCell::Day(day) => Some(day),
            CalendarCell::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarCell::Empty)
    }
}

/// The 42 cells of a month, Sunday first
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarGrid {
    month: MonthCursor,
    cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    pub fn month(&self) -> MonthCursor {
        self.month
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// The grid, one week at a time
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(WEEK_LENGTH)
    }

    /// Cells that are actual days of the month
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|cell| cell.as_day())
    }

    /// The cell of a given (1-based) day of the month
    pub fn day(&self, day_number: u32) -> Option<&DayCell> {
        self.days().find(|day| day.day_number == day_number)
    }

    /// Number of empty cells before the 1st of the month
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_empty()).count()
    }
}


/// Build the grid of a month, and place every task on the day it is due.
///
/// `month0` is 0-based, and is rolled over to other years when out of range (see [`MonthCursor::new`]).
pub fn build(tasks: &[Task], year: i32, month0: i32, today: TaskDate) -> CalendarGrid {
    build_month(tasks, MonthCursor::new(year, month0), today)
}

/// Same as [`build`], highlighting today's real date
pub fn build_for_today(tasks: &[Task], month: MonthCursor) -> CalendarGrid {
    build_month(tasks, month, TaskDate::today())
}

pub fn build_month(tasks: &[Task], month: MonthCursor, today: TaskDate) -> CalendarGrid {
    let mut by_date: HashMap<TaskDate, Vec<Task>> = HashMap::new();
    for task in tasks.iter().filter(|t| MonthCursor::containing(t.date()) == month) {
        by_date.entry(task.date()).or_default().push(task.clone());
    }

    let mut cells = Vec::with_capacity(GRID_CELLS);
    cells.resize(month.first_weekday(), CalendarCell::Empty);

    for day_number in 1..=month.days_in_month() {
        let date = match month.day(day_number) {
            Some(date) => date,
            None => continue,
        };
        cells.push(CalendarCell::Day(DayCell {
            day_number,
            date,
            is_today: date == today,
            tasks: by_date.remove(&date).unwrap_or_default(),
        }));
    }

    cells.resize(GRID_CELLS, CalendarCell::Empty);
    CalendarGrid { month, cells }
}

/// Every task due on `date`, in store order
pub fn tasks_on(tasks: &[Task], date: TaskDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.date() == date).collect()
}
