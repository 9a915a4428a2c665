use super::types::{AttendanceEntry, AttendanceKind};
use crate::{error::AttendanceError, state::attendance::AttendanceSheet};

/// What a cell shows, derived from its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Populated(Vec<AttendanceEntry>),
}

impl CellState {
    pub fn from_entries(entries: &[AttendanceEntry]) -> Self {
        if entries.is_empty() {
            CellState::Empty
        } else {
            CellState::Populated(entries.to_vec())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    pub fn badge_letters(&self) -> String {
        match self {
            CellState::Empty => String::new(),
            CellState::Populated(entries) => entries.iter().map(|e| e.kind.letter()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    /// Click on the "+" affordance or the badge summary.
    Open,
    /// "Add Entry" inside the details dialog.
    AddEntry,
    /// A kind was chosen and appended.
    Marked,
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellDialog {
    #[default]
    Closed,
    Chooser,
    Details,
}

impl CellDialog {
    pub fn next(self, event: CellEvent, cell: &CellState) -> Self {
        match (self, event) {
            (_, CellEvent::Dismiss) => CellDialog::Closed,
            (CellDialog::Closed, CellEvent::Open) if cell.is_empty() => CellDialog::Chooser,
            (CellDialog::Closed, CellEvent::Open) => CellDialog::Details,
            (CellDialog::Details, CellEvent::AddEntry) => CellDialog::Chooser,
            (CellDialog::Chooser, CellEvent::Marked) => CellDialog::Closed,
            (current, _) => current,
        }
    }
}

/// The "pick a kind for this cell" command issued by the chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAttendance {
    pub employee_id: String,
    pub day: u32,
    pub kind: AttendanceKind,
    pub time: Option<String>,
    pub notes: Option<String>,
}

impl MarkAttendance {
    pub fn new(employee_id: impl Into<String>, day: u32, kind: AttendanceKind) -> Self {
        Self {
            employee_id: employee_id.into(),
            day,
            kind,
            time: None,
            notes: None,
        }
    }

    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        let trimmed = notes.trim();
        self.notes = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn entry(&self) -> AttendanceEntry {
        let mut entry = AttendanceEntry::new(self.kind);
        if let Some(time) = &self.time {
            entry = entry.with_time(time.as_str());
        }
        if let Some(notes) = &self.notes {
            entry = entry.with_notes(notes.as_str());
        }
        entry
    }

    pub fn apply(&self, sheet: &AttendanceSheet) -> Result<AttendanceSheet, AttendanceError> {
        sheet.appended(&self.employee_id, self.day, self.entry())
    }
}
