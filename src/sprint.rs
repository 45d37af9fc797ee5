//! Sprint date range and date utilities.
//!
//! Dates are day-granular (`NaiveDate`); time of day never enters the
//! calculation.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::BurndownError;

/// Number of calendar days from `start` to `end`.
///
/// Whole-day difference, which equals the ceiling of the elapsed days for
/// day-granular dates. Negative when `end` precedes `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// The sprint's start and end dates. `end >= start` holds for every constructed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SprintRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl SprintRange {
    /// Build a range, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, BurndownError> {
        if end < start {
            return Err(BurndownError::InvalidRange { start, end });
        }
        Ok(SprintRange { start, end })
    }

    /// A range starting on `start` and spanning `days` days.
    ///
    /// `None` when the end would fall outside the representable calendar.
    pub fn with_length(start: NaiveDate, days: u32) -> Option<Self> {
        let end = start.checked_add_signed(Duration::try_days(i64::from(days))?)?;
        Some(SprintRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Sprint length in days.
    pub fn total_days(&self) -> usize {
        usize::try_from(days_between(self.start, self.end)).unwrap_or(0)
    }

    /// Calendar date of the 0-indexed sprint day.
    pub fn day_date(&self, index: usize) -> NaiveDate {
        self.start + Duration::days(index as i64)
    }
}

/// Parse human-readable date input.
///
/// Supports:
/// - "today", "tomorrow", "yesterday"
/// - "in 3d", "in 2w"
/// - "YYYY-MM-DD" format
///
/// Offsets that overflow the calendar yield `None`.
pub fn parse_date_input(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return today.succ_opt(),
        "yesterday" => return today.pred_opt(),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(nd) = rest.strip_suffix('d') {
            if let Ok(days) = nd.trim().parse::<i64>() {
                return today.checked_add_signed(Duration::try_days(days)?);
            }
        }
        if let Some(nw) = rest.strip_suffix('w') {
            if let Ok(weeks) = nw.trim().parse::<i64>() {
                return today.checked_add_signed(Duration::try_weeks(weeks)?);
            }
        }
        return None;
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Format a date in long form, e.g. "October 18th, 2026".
pub fn format_date_long(d: NaiveDate) -> String {
    let day = d.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", d.format("%B"), day, suffix, d.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2026, 10, 1), date(2026, 10, 5)), 4);
        assert_eq!(days_between(date(2026, 10, 1), date(2026, 10, 1)), 0);
        assert_eq!(days_between(date(2026, 12, 30), date(2027, 1, 2)), 3);
        assert_eq!(days_between(date(2026, 10, 5), date(2026, 10, 1)), -4);
    }

    #[test]
    fn test_new_rejects_reversed_range() {
        let err = SprintRange::new(date(2026, 10, 5), date(2026, 10, 1)).unwrap_err();
        assert_eq!(
            err,
            BurndownError::InvalidRange { start: date(2026, 10, 5), end: date(2026, 10, 1) }
        );
        assert!(SprintRange::new(date(2026, 10, 5), date(2026, 10, 5)).is_ok());
    }

    #[test]
    fn test_with_length_and_day_date() {
        let r = SprintRange::with_length(date(2026, 2, 26), 14).unwrap();
        assert_eq!(r.end(), date(2026, 3, 12));
        assert_eq!(r.total_days(), 14);
        assert_eq!(r.day_date(0), date(2026, 2, 26));
        assert_eq!(r.day_date(3), date(2026, 3, 1));
    }

    #[test]
    fn test_parse_date_input() {
        let today = date(2026, 10, 18);
        assert_eq!(parse_date_input("today", today), Some(today));
        assert_eq!(parse_date_input(" Tomorrow ", today), Some(date(2026, 10, 19)));
        assert_eq!(parse_date_input("yesterday", today), Some(date(2026, 10, 17)));
        assert_eq!(parse_date_input("in 3d", today), Some(date(2026, 10, 21)));
        assert_eq!(parse_date_input("in 2w", today), Some(date(2026, 11, 1)));
        assert_eq!(parse_date_input("2026-11-02", today), Some(date(2026, 11, 2)));
        assert_eq!(parse_date_input("in soon", today), None);
        assert_eq!(parse_date_input("02/11/2026", today), None);
    }

    #[test]
    fn test_huge_offsets_are_rejected() {
        let today = date(2026, 10, 18);
        assert_eq!(parse_date_input("in 99999999d", today), None);
        assert_eq!(parse_date_input("in 200000000000000d", today), None);
        assert_eq!(parse_date_input("in -99999999w", today), None);
        assert_eq!(SprintRange::with_length(today, 4_000_000_000), None);
        assert!(SprintRange::with_length(NaiveDate::MAX, 1).is_none());
    }

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long(date(2026, 10, 18)), "October 18th, 2026");
        assert_eq!(format_date_long(date(2026, 11, 1)), "November 1st, 2026");
        assert_eq!(format_date_long(date(2026, 5, 2)), "May 2nd, 2026");
        assert_eq!(format_date_long(date(2026, 5, 23)), "May 23rd, 2026");
        assert_eq!(format_date_long(date(2026, 5, 12)), "May 12th, 2026");
        assert_eq!(format_date_long(date(2026, 5, 31)), "May 31st, 2026");
    }
}
