//! Enumerations for TUI state management.

/// Screen the burndown UI is showing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AppState {
    Table,
    AddTask,
    EditPoints,
    PickDate,
    Help,
    Confirm,
}

/// Which sprint bound the date picker edits.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn label(self) -> &'static str {
        match self {
            DateField::Start => "Start Date",
            DateField::End => "End Date",
        }
    }
}
