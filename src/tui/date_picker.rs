//! Calendar date picker popup.
//!
//! Shows one month as a Sunday-first grid. The cursor moves by day, week or
//! month; `Enter` confirms the date under the cursor.

use chrono::{Datelike, Duration, Months, NaiveDate};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::sprint::format_date_long;
use crate::tui::colors::DARK_PURPLE;

/// Picker state: the date under the cursor and the currently selected date.
#[derive(Clone, Debug)]
pub struct DatePicker {
    pub cursor: NaiveDate,
    pub selected: Option<NaiveDate>,
}

impl DatePicker {
    /// Open on `selected`, or on `today` when nothing is selected.
    pub fn new(selected: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            cursor: selected.unwrap_or(today),
            selected,
        }
    }

    pub fn move_days(&mut self, days: i64) {
        if let Some(d) = self.cursor.checked_add_signed(Duration::days(days)) {
            self.cursor = d;
        }
    }

    /// Move by whole months, clamping the day to the target month's length.
    pub fn move_months(&mut self, months: i32) {
        let step = Months::new(months.unsigned_abs());
        let moved = if months >= 0 {
            self.cursor.checked_add_months(step)
        } else {
            self.cursor.checked_sub_months(step)
        };
        if let Some(d) = moved {
            self.cursor = d;
        }
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.cursor = date;
    }

    /// Select the date under the cursor and return it.
    pub fn select(&mut self) -> NaiveDate {
        self.selected = Some(self.cursor);
        self.cursor
    }

    /// Trigger text: the selected date in long form, or a placeholder.
    pub fn label(&self) -> String {
        match self.selected {
            Some(d) => format_date_long(d),
            None => "Pick a date".to_string(),
        }
    }

    /// Render the picker as a popup centered on `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, title: &str, today: NaiveDate) {
        let block = Block::default()
            .title(format!("{title}: {}", self.label()))
            .borders(Borders::ALL)
            .style(Style::default().bg(DARK_PURPLE).fg(Color::White));

        let mut lines = vec![
            Line::from(Span::styled(
                self.cursor.format("%B %Y").to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Su Mo Tu We Th Fr Sa"),
        ];

        for week in month_grid(self.cursor.year(), self.cursor.month()) {
            let mut spans = Vec::with_capacity(14);
            for (i, cell) in week.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                match cell {
                    Some(d) => {
                        let mut style = Style::default();
                        if Some(*d) == self.selected {
                            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                        }
                        if *d == today {
                            style = style.add_modifier(Modifier::UNDERLINED);
                        }
                        if *d == self.cursor {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        spans.push(Span::styled(format!("{:>2}", d.day()), style));
                    }
                    None => spans.push(Span::raw("  ")),
                }
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from("←→ day  ↑↓ week  PgUp/PgDn month"));
        lines.push(Line::from("t today  Enter select  Esc cancel"));

        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(lines).block(block).alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}

/// Weeks of the month as Sunday-first rows; cells outside the month are `None`.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_sunday() as usize;
    let len = days_in_month(first);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    for n in 0..len {
        let slot = (lead + n) % 7;
        week[slot] = first.checked_add_signed(Duration::days(n as i64));
        if slot == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

fn days_in_month(first: NaiveDate) -> usize {
    first
        .checked_add_months(Months::new(1))
        .map(|next| (next - first).num_days() as usize)
        .unwrap_or(31)
}
