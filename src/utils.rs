//! Some utility functions

use std::fmt::Write;

use crate::calendar::{CalendarCell, CalendarGrid};
use crate::config::Palette;
use crate::progress::Progress;
use crate::task::{Category, Task};

/// One line describing a task
pub fn format_task(task: &Task) -> String {
    let completion = if task.completed() { "✓" } else { " " };
    format!("{} {} {:<6} {:<14} {}\t{}", completion, task.date(), task.priority().as_str(), task.category().as_str(), task.name(), task.id())
}

pub fn print_task(task: &Task) {
    println!("    {}", format_task(task));
}

/// A debug utility that pretty-prints a task list
pub fn format_task_list<'a, I>(tasks: I) -> String
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut out = String::new();
    for task in tasks {
        let _ = writeln!(out, "    {}", format_task(task));
    }
    out
}

pub fn print_task_list<'a, I>(tasks: I)
where
    I: IntoIterator<Item = &'a Task>,
{
    print!("{}", format_task_list(tasks));
}

/// A debug utility that draws a month grid.
///
/// Every day shows its number of tasks, and today is marked with a `*`
pub fn format_calendar(grid: &CalendarGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^42}", grid.month().label());
    let _ = writeln!(out, "  Sun   Mon   Tue   Wed   Thu   Fri   Sat");

    for row in grid.rows() {
        for cell in row {
            match cell {
                CalendarCell::Empty => out.push_str("      "),
                CalendarCell::Day(day) => {
                    let marker = if day.is_today { '*' } else { ' ' };
                    let count = match day.tasks.len() {
                        0 => "  ".to_string(),
                        n => format!("+{}", n),
                    };
                    let _ = write!(out, "{}{:>2}{:<3}", marker, day.day_number, count);
                },
            }
        }
        out.push('\n');
    }
    out
}

pub fn print_calendar(grid: &CalendarGrid) {
    print!("{}", format_calendar(grid));
}

/// A debug utility that draws a text progress bar, 20 characters wide
pub fn format_progress(progress: &Progress) -> String {
    let filled = progress.percent() as usize / 5;
    format!("[{}{}] {}", "#".repeat(filled), "-".repeat(20 - filled), progress)
}

/// The colour of every category, as hex codes
pub fn format_legend(palette: &Palette) -> String {
    Category::ALL.iter()
        .map(|category| format!("{} {}", palette.color_for(*category).to_hex_string(), category))
        .collect::<Vec<_>>()
        .join("  ")
}
