//! Burndown model and table formatting.
//!
//! This module provides the `BurndownModel` struct, which owns the sprint
//! range and the task list and derives the ideal burndown line from them,
//! along with helpers for printing the burndown table.

use serde::Serialize;

use crate::error::BurndownError;
use crate::fields::Status;
use crate::sprint::{format_date_long, SprintRange};
use crate::task::Task;

/// In-memory sprint state for one session.
///
/// Every task's `points` length equals `total_days()` after every operation.
#[derive(Debug, Clone)]
pub struct BurndownModel {
    range: SprintRange,
    tasks: Vec<Task>,
    next_id: u64,
}

/// Read-only view of the model plus its derived values, handed to renderers.
#[derive(Debug, Clone, Serialize)]
pub struct BurndownSnapshot {
    pub range: SprintRange,
    pub total_days: usize,
    pub tasks: Vec<Task>,
    pub ideal_points_per_day: f64,
    pub ideal_burndown: Vec<f64>,
}

impl BurndownModel {
    /// Create an empty model over `range`.
    pub fn new(range: SprintRange) -> Self {
        BurndownModel {
            range,
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    pub fn range(&self) -> &SprintRange {
        &self.range
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by ID.
    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn task_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn total_days(&self) -> usize {
        self.range.total_days()
    }

    /// Replace the sprint range and resize every task's points to the new length.
    ///
    /// A reversed range is rejected and the previous range kept.
    pub fn set_range(
        &mut self,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> Result<(), BurndownError> {
        let range = SprintRange::new(start, end).inspect_err(|e| {
            tracing::warn!(%start, %end, "rejected sprint range: {e}");
        })?;
        self.range = range;
        let days = self.total_days();
        for task in self.tasks.iter_mut() {
            task.resize_points(days);
        }
        tracing::debug!(%start, %end, days, "sprint range updated");
        Ok(())
    }

    /// Move the sprint start, keeping the end.
    pub fn set_start(&mut self, start: chrono::NaiveDate) -> Result<(), BurndownError> {
        self.set_range(start, self.range.end())
    }

    /// Move the sprint end, keeping the start.
    pub fn set_end(&mut self, end: chrono::NaiveDate) -> Result<(), BurndownError> {
        self.set_range(self.range.start(), end)
    }

    /// Append a new `Open` task with zeroed points for every sprint day.
    pub fn add_task(&mut self, name: &str) -> Result<&Task, BurndownError> {
        let name = name.trim();
        if name.is_empty() {
            tracing::warn!("rejected task with empty name");
            return Err(BurndownError::EmptyName);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, name, self.total_days()));
        tracing::debug!(id, name, "task added");
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Remove a task. Returns false when no task has `id`.
    pub fn delete_task(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            tracing::debug!(id, "task deleted");
        }
        removed
    }

    /// Set a task's status. Returns false when no task has `id`.
    pub fn update_task_status(&mut self, id: u64, status: Status) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.status = status;
                tracing::debug!(id, status = status.label(), "task status updated");
                true
            }
            None => false,
        }
    }

    /// Set one day's points for one task.
    ///
    /// Returns `Ok(false)` when no task has `id`. The points storage never grows.
    pub fn update_task_points(
        &mut self,
        id: u64,
        day: usize,
        value: f64,
    ) -> Result<bool, BurndownError> {
        let total_days = self.total_days();
        if day >= total_days {
            tracing::warn!(id, day, total_days, "rejected out-of-range day");
            return Err(BurndownError::OutOfRangeDayIndex { index: day, total_days });
        }
        if !value.is_finite() {
            tracing::warn!(id, day, "rejected non-finite points");
            return Err(BurndownError::NonFinitePoints(value));
        }
        match self.task_mut(id) {
            Some(task) => {
                task.points[day] = value;
                tracing::debug!(id, day, value, "task points updated");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Sum of each task's peak points spread evenly over the sprint.
    ///
    /// Zero for a zero-day sprint.
    pub fn ideal_points_per_day(&self) -> f64 {
        let total_days = self.total_days();
        if total_days == 0 {
            return 0.0;
        }
        let total: f64 = self.tasks.iter().map(Task::max_points).sum();
        total / total_days as f64
    }

    /// Ideal remaining points at the start of each sprint day.
    pub fn ideal_burndown_row(&self) -> Vec<f64> {
        let total_days = self.total_days();
        let rate = self.ideal_points_per_day();
        (0..total_days).map(|i| (total_days - i) as f64 * rate).collect()
    }

    /// Copy of the current state plus derived values.
    pub fn snapshot(&self) -> BurndownSnapshot {
        BurndownSnapshot {
            range: self.range,
            total_days: self.total_days(),
            tasks: self.tasks.clone(),
            ideal_points_per_day: self.ideal_points_per_day(),
            ideal_burndown: self.ideal_burndown_row(),
        }
    }
}

/// Format a task's point value as entered.
pub fn format_points(v: f64) -> String {
    format!("{v}")
}

/// Format an ideal burndown value to one decimal place.
pub fn format_ideal(v: f64) -> String {
    format!("{v:.1}")
}

/// Render the burndown table as plain text: one row per task plus the ideal row.
pub fn render_table(model: &BurndownModel) -> String {
    let days = model.total_days();
    let name_width = model
        .tasks()
        .iter()
        .map(|t| t.name.chars().count())
        .chain(std::iter::once("Ideal Burndown".len()))
        .max()
        .unwrap_or(0);
    let status_width = Status::ALL.iter().map(|s| s.label().len()).max().unwrap_or(0);
    let day_width = format!("Day {days}").len().max(6);

    let mut out = String::new();
    let range = model.range();
    out.push_str(&format!(
        "Sprint: {} -> {} ({} days)\n",
        format_date_long(range.start()),
        format_date_long(range.end()),
        days
    ));

    out.push_str(&format!("{:<name_width$}  {:<status_width$}", "Task", "Status"));
    for i in 0..days {
        out.push_str(&format!("  {:>day_width$}", format!("Day {}", i + 1)));
    }
    out.push('\n');

    for task in model.tasks() {
        out.push_str(&format!("{:<name_width$}  {:<status_width$}", task.name, task.status.label()));
        for p in &task.points {
            out.push_str(&format!("  {:>day_width$}", format_points(*p)));
        }
        out.push('\n');
    }

    out.push_str(&format!("{:<name_width$}  {:<status_width$}", "Ideal Burndown", ""));
    for v in model.ideal_burndown_row() {
        out.push_str(&format!("  {:>day_width$}", format_ideal(v)));
    }
    out.push('\n');
    out
}

/// Print the burndown table to stdout.
pub fn print_table(model: &BurndownModel) {
    print!("{}", render_table(model));
}
