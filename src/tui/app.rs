//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the session's
//! `BurndownModel`, turns key presses into model operations, and renders the
//! burndown table with its popups (add task, edit points, date picker,
//! confirmation, help).

use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::model::{format_ideal, format_points, BurndownModel};
use crate::sprint::format_date_long;
use crate::task::Task;
use crate::tui::{
    colors::{status_color, DARK_GREEN, DARK_RED},
    date_picker::DatePicker,
    enums::{AppState, DateField},
    input::InputField,
    utils::{centered_fixed, centered_rect},
};

const NAME_WIDTH: u16 = 22;
const STATUS_WIDTH: u16 = 15;
const DAY_WIDTH: u16 = 7;

/// Application state for one burndown session.
pub struct App {
    state: AppState,
    model: BurndownModel,
    table_state: TableState,
    selected_day: usize,
    day_offset: usize,
    name_input: InputField,
    points_input: InputField,
    date_picker: DatePicker,
    date_field: DateField,
    status_message: String,
    today: NaiveDate,
}

impl App {
    /// Create an App over `model`, using the local date as "today".
    pub fn new(model: BurndownModel) -> Self {
        Self::with_today(model, Local::now().date_naive())
    }

    pub fn with_today(model: BurndownModel, today: NaiveDate) -> Self {
        let mut app = App {
            state: AppState::Table,
            date_picker: DatePicker::new(Some(model.range().start()), today),
            model,
            table_state: TableState::default(),
            selected_day: 0,
            day_offset: 0,
            name_input: InputField::new(),
            points_input: InputField::new(),
            date_field: DateField::Start,
            status_message: String::new(),
            today,
        };
        app.clamp_selection();
        app
    }

    pub fn model(&self) -> &BurndownModel {
        &self.model
    }

    fn selected_task(&self) -> Option<&Task> {
        self.table_state
            .selected()
            .and_then(|i| self.model.tasks().get(i))
    }

    fn selected_task_id(&self) -> Option<u64> {
        self.selected_task().map(|t| t.id)
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Keep the row and day cursors inside the current task list and sprint.
    fn clamp_selection(&mut self) {
        let rows = self.model.tasks().len();
        match self.table_state.selected() {
            _ if rows == 0 => self.table_state.select(None),
            Some(i) if i >= rows => self.table_state.select(Some(rows - 1)),
            None => self.table_state.select(Some(0)),
            _ => {}
        }
        let days = self.model.total_days();
        if self.selected_day >= days {
            self.selected_day = days.saturating_sub(1);
        }
    }

    fn open_date_picker(&mut self, field: DateField) {
        let current = match field {
            DateField::Start => self.model.range().start(),
            DateField::End => self.model.range().end(),
        };
        self.date_field = field;
        self.date_picker = DatePicker::new(Some(current), self.today);
        self.state = AppState::PickDate;
    }

    /// Handle keyboard input on the burndown table.
    ///
    /// Returns true if the application should quit.
    fn handle_table_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('q') | KeyCode::Esc => return true,

            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(selected) = self.table_state.selected() {
                    if selected > 0 {
                        self.table_state.select(Some(selected - 1));
                    }
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(selected) = self.table_state.selected() {
                    if selected + 1 < self.model.tasks().len() {
                        self.table_state.select(Some(selected + 1));
                    }
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_day = self.selected_day.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_day + 1 < self.model.total_days() {
                    self.selected_day += 1;
                }
            }

            KeyCode::Char('a') => {
                self.state = AppState::AddTask;
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if self.model.total_days() == 0 {
                    self.set_status_message("Sprint has no days to edit".to_string());
                } else if let Some(task) = self.selected_task() {
                    let current = task.points.get(self.selected_day).copied().unwrap_or(0.0);
                    self.points_input = InputField::with_value(&format_points(current));
                    self.state = AppState::EditPoints;
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                if let Some(task) = self.selected_task() {
                    let (id, status) = if key == KeyCode::Char('s') {
                        (task.id, task.status.next())
                    } else {
                        (task.id, task.status.prev())
                    };
                    self.model.update_task_status(id, status);
                    self.set_status_message(format!("Status: {}", status.label()));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.selected_task().is_some() {
                    self.state = AppState::Confirm;
                }
            }
            KeyCode::Char('[') => self.open_date_picker(DateField::Start),
            KeyCode::Char(']') => self.open_date_picker(DateField::End),
            KeyCode::Char('?') => self.state = AppState::Help,
            _ => {}
        }
        false
    }

    /// Handle keyboard input in the add-task popup.
    ///
    /// A rejected name keeps the popup open with the typed text intact.
    fn handle_add_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.state = AppState::Table,
            KeyCode::Enter => {
                let added = self.model.add_task(&self.name_input.value).map(|t| t.name.clone());
                match added {
                    Ok(name) => {
                        self.name_input.clear();
                        self.state = AppState::Table;
                        self.table_state.select(Some(self.model.tasks().len() - 1));
                        self.set_status_message(format!("Added task '{name}'"));
                    }
                    Err(e) => self.set_status_message(format!("Cannot add task: {e}")),
                }
            }
            KeyCode::Backspace => self.name_input.handle_backspace(),
            KeyCode::Delete => self.name_input.handle_delete(),
            KeyCode::Left => self.name_input.move_cursor_left(),
            KeyCode::Right => self.name_input.move_cursor_right(),
            KeyCode::Char(c) => self.name_input.handle_char(c),
            _ => {}
        }
    }

    /// Handle keyboard input in the edit-points popup.
    fn handle_points_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.state = AppState::Table,
            KeyCode::Enter => {
                let raw = self.points_input.value.trim().to_string();
                // An empty field counts as zero points.
                let parsed = if raw.is_empty() { Ok(0.0) } else { raw.parse::<f64>() };
                let Ok(value) = parsed else {
                    self.set_status_message(format!("Invalid number: '{raw}'"));
                    return;
                };
                let Some(id) = self.selected_task_id() else {
                    self.state = AppState::Table;
                    return;
                };
                match self.model.update_task_points(id, self.selected_day, value) {
                    Ok(_) => {
                        self.state = AppState::Table;
                        self.set_status_message(format!(
                            "Day {} set to {}",
                            self.selected_day + 1,
                            format_points(value)
                        ));
                    }
                    Err(e) => self.set_status_message(format!("Cannot set points: {e}")),
                }
            }
            KeyCode::Backspace => self.points_input.handle_backspace(),
            KeyCode::Delete => self.points_input.handle_delete(),
            KeyCode::Left => self.points_input.move_cursor_left(),
            KeyCode::Right => self.points_input.move_cursor_right(),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                self.points_input.handle_char(c)
            }
            _ => {}
        }
    }

    /// Handle keyboard input in the date picker popup.
    ///
    /// A rejected date keeps the picker open and leaves the sprint unchanged.
    fn handle_picker_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.state = AppState::Table,
            KeyCode::Left | KeyCode::Char('h') => self.date_picker.move_days(-1),
            KeyCode::Right | KeyCode::Char('l') => self.date_picker.move_days(1),
            KeyCode::Up | KeyCode::Char('k') => self.date_picker.move_days(-7),
            KeyCode::Down | KeyCode::Char('j') => self.date_picker.move_days(7),
            KeyCode::PageUp => self.date_picker.move_months(-1),
            KeyCode::PageDown => self.date_picker.move_months(1),
            KeyCode::Char('t') => self.date_picker.jump_to(self.today),
            KeyCode::Enter => {
                let date = self.date_picker.cursor;
                let result = match self.date_field {
                    DateField::Start => self.model.set_start(date),
                    DateField::End => self.model.set_end(date),
                };
                match result {
                    Ok(()) => {
                        self.date_picker.select();
                        self.state = AppState::Table;
                        self.clamp_selection();
                        self.set_status_message(format!(
                            "{} set to {} ({} days)",
                            self.date_field.label(),
                            format_date_long(date),
                            self.model.total_days()
                        ));
                    }
                    Err(e) => self.set_status_message(format!("Cannot change sprint: {e}")),
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if let Some(id) = self.selected_task_id() {
                    self.model.delete_task(id);
                    self.clamp_selection();
                    self.set_status_message("Deleted 1 task".to_string());
                }
                self.state = AppState::Table;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state = AppState::Table;
            }
            _ => {}
        }
    }

    fn handle_help_input(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
            self.state = AppState::Table;
        }
    }

    /// Dispatch one key press according to the current screen.
    ///
    /// Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        self.clear_status_message();
        match self.state {
            AppState::Table => return self.handle_table_input(key, modifiers),
            AppState::AddTask => self.handle_add_input(key),
            AppState::EditPoints => self.handle_points_input(key),
            AppState::PickDate => self.handle_picker_input(key),
            AppState::Confirm => self.handle_confirm_input(key),
            AppState::Help => self.handle_help_input(key),
        }
        false
    }

    /// Poll for and handle one keyboard event.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(self.handle_key(key.code, key.modifiers));
                }
            }
        }
        Ok(false)
    }

    /// Number of day columns that fit in `width`, at least one.
    fn visible_days(width: u16) -> usize {
        // Borders, highlight symbol, name and status columns, and column gaps.
        let fixed = 2 + 3 + NAME_WIDTH + 1 + STATUS_WIDTH + 1;
        (width.saturating_sub(fixed) / (DAY_WIDTH + 1)).max(1) as usize
    }

    /// Scroll the day window so the selected day stays visible.
    fn scroll_days(&mut self, visible: usize) {
        if self.selected_day < self.day_offset {
            self.day_offset = self.selected_day;
        } else if self.selected_day >= self.day_offset + visible {
            self.day_offset = self.selected_day + 1 - visible;
        }
        let max_offset = self.model.total_days().saturating_sub(visible);
        self.day_offset = self.day_offset.min(max_offset);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let range = self.model.range();
        let text = vec![Line::from(vec![
            Span::styled("SPRINT BURNDOWN", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!(
                    "Start: {}  End: {}  ({} days)",
                    format_date_long(range.start()),
                    format_date_long(range.end()),
                    self.model.total_days()
                ),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ])];
        let header = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render the task rows and the ideal burndown row.
    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        let total_days = self.model.total_days();
        let visible = Self::visible_days(area.width);
        self.scroll_days(visible);
        let days = self.day_offset..(self.day_offset + visible).min(total_days);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut header_cells = vec![Cell::from("Task").style(bold), Cell::from("Status").style(bold)];
        header_cells.extend(days.clone().map(|d| Cell::from(format!("Day {}", d + 1)).style(bold)));
        let header = Row::new(header_cells)
            .style(Style::default().bg(DARK_GREEN).fg(Color::White))
            .height(1);

        let selected_row = self.table_state.selected();
        let mut rows: Vec<Row> = self
            .model
            .tasks()
            .iter()
            .enumerate()
            .map(|(row, task)| {
                let mut cells = vec![
                    Cell::from(task.name.clone()),
                    Cell::from(task.status.label()),
                ];
                cells.extend(days.clone().map(|d| {
                    let cell = Cell::from(format_points(task.points[d]));
                    if Some(row) == selected_row && d == self.selected_day {
                        cell.style(Style::default().add_modifier(Modifier::REVERSED))
                    } else {
                        cell
                    }
                }));
                Row::new(cells).style(Style::default().fg(status_color(task.status)))
            })
            .collect();

        let ideal = self.model.ideal_burndown_row();
        let mut ideal_cells = vec![Cell::from("Ideal Burndown"), Cell::from("")];
        ideal_cells.extend(days.clone().map(|d| Cell::from(format_ideal(ideal[d]))));
        rows.push(
            Row::new(ideal_cells)
                .style(Style::default().fg(Color::White).bg(DARK_GREEN).add_modifier(Modifier::BOLD)),
        );

        let mut widths = vec![Constraint::Length(NAME_WIDTH), Constraint::Length(STATUS_WIDTH)];
        widths.extend(days.clone().map(|_| Constraint::Length(DAY_WIDTH)));

        let mut title = format!("Tasks ({}) - Press '?' for help", self.model.tasks().len());
        if days.len() < total_days {
            title.push_str(&format!(" - days {}-{} of {}", days.start + 1, days.end, total_days));
        }

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_input_popup(&self, f: &mut Frame, area: Rect, title: &str, input: &InputField, hint: &str) {
        let area = centered_fixed(50, 5, area);
        f.render_widget(Clear, area);
        let block = Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black).fg(Color::White));
        let text = vec![
            Line::from(input.value.clone()),
            Line::from(""),
            Line::from(Span::styled(hint.to_string(), Style::default().fg(Color::DarkGray))),
        ];
        f.render_widget(Paragraph::new(text).block(block), area);
        f.set_cursor_position((area.x + 1 + input.cursor as u16, area.y + 1));
    }

    fn render_confirm(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Confirm Action")
            .borders(Borders::ALL)
            .style(Style::default().bg(DARK_RED));

        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let name = self.selected_task().map(|t| t.name.as_str()).unwrap_or("");
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Are you sure you want to delete:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(name.to_string()),
            Line::from(""),
            Line::from("Press 'y' to confirm, 'n' to cancel"),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = |k: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("{k:<14}"), Style::default().fg(Color::Cyan)),
                Span::raw(what),
            ])
        };
        let text = vec![
            Line::from(Span::styled("Keys", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            key("↑↓ / j k", "Select task"),
            key("←→ / h l", "Select day"),
            key("a", "Add task"),
            key("Enter / e", "Edit points for the selected day"),
            key("s / S", "Next / previous status"),
            key("d / Del", "Delete task"),
            key("[ / ]", "Pick sprint start / end date"),
            key("?", "Toggle help"),
            key("q / Esc", "Quit"),
        ];
        let help = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: false });
        f.render_widget(help, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::Table => format!(
                    "Tasks: {} | Ideal: {} pts/day | Press '?' for help",
                    self.model.tasks().len(),
                    format_ideal(self.model.ideal_points_per_day())
                ),
                AppState::AddTask => "Add Task".to_string(),
                AppState::EditPoints => format!(
                    "Edit Day {} ({})",
                    self.selected_day + 1,
                    format_date_long(self.model.range().day_date(self.selected_day))
                ),
                AppState::PickDate => self.date_field.label().to_string(),
                AppState::Help => "Help".to_string(),
                AppState::Confirm => "Confirm Action".to_string(),
            }
        };
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(DARK_GREEN).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Render the current screen.
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        self.render_header(f, chunks[0]);
        match self.state {
            AppState::Help => self.render_help(f, chunks[1]),
            _ => self.render_table(f, chunks[1]),
        }
        match self.state {
            AppState::AddTask => self.render_input_popup(
                f,
                chunks[1],
                "New Task",
                &self.name_input,
                "Enter to add, Esc to cancel",
            ),
            AppState::EditPoints => {
                let title = match self.selected_task() {
                    Some(task) => format!("{} - Day {}", task.name, self.selected_day + 1),
                    None => format!("Day {}", self.selected_day + 1),
                };
                self.render_input_popup(f, chunks[1], &title, &self.points_input, "Enter to save, Esc to cancel");
            }
            AppState::PickDate => {
                let area = centered_fixed(40, 15, chunks[1]);
                self.date_picker.render(f, area, self.date_field.label(), self.today);
            }
            AppState::Confirm => self.render_confirm(f, chunks[1]),
            _ => {}
        }
        self.render_status_bar(f, chunks[2]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Status;
    use crate::sprint::SprintRange;
    use ratatui::backend::TestBackend;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app(days: u32) -> App {
        let model = BurndownModel::new(SprintRange::with_length(date(2026, 10, 1), days).unwrap());
        App::with_today(model, date(2026, 10, 18))
    }

    fn press(app: &mut App, key: KeyCode) -> bool {
        app.handle_key(key, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add(app: &mut App, name: &str) {
        press(app, KeyCode::Char('a'));
        type_str(app, name);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_add_task_selects_new_row() {
        let mut app = app(4);
        add(&mut app, "Login");
        add(&mut app, "Logout");
        assert_eq!(app.state, AppState::Table);
        assert_eq!(app.model().tasks().len(), 2);
        assert_eq!(app.table_state.selected(), Some(1));
        assert!(app.name_input.value.is_empty());
    }

    #[test]
    fn test_blank_name_keeps_popup_and_input() {
        let mut app = app(4);
        add(&mut app, "  ");
        assert_eq!(app.state, AppState::AddTask);
        assert_eq!(app.name_input.value, "  ");
        assert!(app.model().tasks().is_empty());
        assert!(app.status_message.contains("empty"));
    }

    #[test]
    fn test_edit_points_for_selected_day() {
        let mut app = app(4);
        add(&mut app, "Login");
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::EditPoints);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "5x");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Table);
        assert_eq!(app.model().tasks()[0].points, vec![0.0, 5.0, 0.0, 0.0]);
        assert_eq!(app.model().ideal_burndown_row(), vec![5.0, 3.75, 2.5, 1.25]);
    }

    #[test]
    fn test_invalid_points_keep_popup() {
        let mut app = app(2);
        add(&mut app, "Login");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "1.2.3");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::EditPoints);
        assert_eq!(app.model().tasks()[0].points, vec![0.0, 0.0]);
    }

    #[test]
    fn test_status_cycle_and_delete() {
        let mut app = app(3);
        add(&mut app, "Login");
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.model().tasks()[0].status, Status::InDevelopment);
        press(&mut app, KeyCode::Char('S'));
        press(&mut app, KeyCode::Char('S'));
        assert_eq!(app.model().tasks()[0].status, Status::Done);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state, AppState::Confirm);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.model().tasks().len(), 1);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.model().tasks().is_empty());
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn test_date_picker_rejects_end_before_start() {
        let mut app = app(4);
        add(&mut app, "Login");
        let before = *app.model().range();

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.state, AppState::PickDate);
        assert_eq!(app.date_picker.cursor, date(2026, 10, 5));
        for _ in 0..5 {
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::PickDate);
        assert_eq!(*app.model().range(), before);
        assert_eq!(app.model().tasks()[0].points.len(), 4);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Table);
        assert_eq!(app.model().total_days(), 6);
        assert_eq!(app.model().tasks()[0].points.len(), 6);
    }

    #[test]
    fn test_shrinking_sprint_clamps_day_cursor() {
        let mut app = app(5);
        for _ in 0..4 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_day, 4);

        press(&mut app, KeyCode::Char('['));
        for _ in 0..3 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model().range().start(), date(2026, 10, 4));
        assert_eq!(app.model().total_days(), 2);
        assert_eq!(app.selected_day, 1);

        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model().total_days(), 0);
        assert_eq!(app.selected_day, 0);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Table);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(1);
        assert!(!press(&mut app, KeyCode::Char('?')));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state, AppState::Table);
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_render_shows_table_and_ideal_row() {
        let mut app = app(3);
        add(&mut app, "Login");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "6");
        press(&mut app, KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("SPRINT BURNDOWN"));
        assert!(text.contains("October 1st, 2026"));
        assert!(text.contains("Day 3"));
        assert!(text.contains("Login"));
        assert!(text.contains("Ideal Burndown"));
        assert!(text.contains("6.0"));
        assert!(text.contains("2.0"));
    }

    #[test]
    fn test_day_window_scrolls_with_cursor() {
        let mut app = app(30);
        let visible = App::visible_days(80);
        for _ in 0..20 {
            press(&mut app, KeyCode::Right);
        }
        app.scroll_days(visible);
        assert!(app.day_offset <= 20 && 20 < app.day_offset + visible);
        for _ in 0..20 {
            press(&mut app, KeyCode::Left);
        }
        app.scroll_days(visible);
        assert_eq!(app.day_offset, 0);
    }
}
