//! Enumerations and field types for sprint tasks.
//!
//! This module defines the fixed task status set used by the burndown table.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task workflow status.
///
/// Any status may be set to any other status at any time; there are no
/// transition restrictions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    #[serde(alias = "Open")]
    Open,
    #[serde(alias = "In Development", alias = "InDevelopment")]
    #[value(alias = "dev")]
    InDevelopment,
    #[serde(alias = "Review")]
    Review,
    #[serde(alias = "Done")]
    Done,
}

impl Status {
    /// All statuses in table/selector order.
    pub const ALL: [Status; 4] = [Status::Open, Status::InDevelopment, Status::Review, Status::Done];

    /// Human-readable label shown in tables and selectors.
    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InDevelopment => "In Development",
            Status::Review => "Review",
            Status::Done => "Done",
        }
    }

    /// The following status in selector order, wrapping around.
    pub fn next(self) -> Status {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The preceding status in selector order, wrapping around.
    pub fn prev(self) -> Status {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(Status::Open.next(), Status::InDevelopment);
        assert_eq!(Status::Done.next(), Status::Open);
        assert_eq!(Status::Open.prev(), Status::Done);
        assert_eq!(Status::Review.prev(), Status::InDevelopment);
    }

    #[test]
    fn test_labels_match_selector_text() {
        let labels: Vec<_> = Status::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Open", "In Development", "Review", "Done"]);
    }

    #[test]
    fn test_serde_accepts_display_labels() {
        let s: Status = serde_json::from_str("\"In Development\"").unwrap();
        assert_eq!(s, Status::InDevelopment);
        assert_eq!(serde_json::to_string(&Status::InDevelopment).unwrap(), "\"in-development\"");
    }
}
