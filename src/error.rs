//! Errors reported by burndown model operations.

use chrono::NaiveDate;
use thiserror::Error;

/// A rejected model operation. The model is left unchanged when one is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BurndownError {
    /// Task name is empty after trimming.
    #[error("task name cannot be empty")]
    EmptyName,
    /// Sprint end falls before its start.
    #[error("sprint end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    /// Day index outside `0..total_days`.
    #[error("day {index} is outside the sprint ({total_days} days)")]
    OutOfRangeDayIndex { index: usize, total_days: usize },
    /// Point value is NaN or infinite.
    #[error("point value must be a finite number, got {0}")]
    NonFinitePoints(f64),
}
