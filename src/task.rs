//! Task data structure and related functionality.
//!
//! This module defines the `Task` struct: a named work item with a status and
//! one point value per sprint day.

use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// A sprint task tracked in the burndown table.
///
/// `points` holds one entry per sprint day, in day order. The owning model
/// keeps its length equal to the sprint's day count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub status: Status,
    pub points: Vec<f64>,
}

impl Task {
    /// Create an `Open` task with `days` zeroed point entries.
    pub fn new(id: u64, name: impl Into<String>, days: usize) -> Self {
        Task {
            id,
            name: name.into(),
            status: Status::Open,
            points: vec![0.0; days],
        }
    }

    /// Peak point value across all days, or 0 when there are no days.
    pub fn max_points(&self) -> f64 {
        self.points.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// Truncate or zero-pad the points to `days` entries.
    /// Values at indices that still exist are kept.
    pub fn resize_points(&mut self, days: usize) {
        self.points.resize(days, 0.0);
    }
}
