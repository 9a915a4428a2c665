use crate::error::AttendanceError;
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    Admin,
    SiteSupervisor,
    Employee,
}

impl EmployeeRole {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeRole::Admin => "Admin",
            EmployeeRole::SiteSupervisor => "Site Supervisor",
            EmployeeRole::Employee => "Employee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: EmployeeRole,
    pub initials: String,
    pub avatar_color: String,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: EmployeeRole,
        initials: impl Into<String>,
        avatar_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            initials: initials.into(),
            avatar_color: avatar_color.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceKind {
    Present,
    Absent,
    Late,
    Holiday,
}

impl AttendanceKind {
    pub const ALL: [AttendanceKind; 4] = [
        AttendanceKind::Present,
        AttendanceKind::Absent,
        AttendanceKind::Late,
        AttendanceKind::Holiday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceKind::Present => "Present",
            AttendanceKind::Absent => "Absent",
            AttendanceKind::Late => "Late",
            AttendanceKind::Holiday => "Holiday",
        }
    }

    pub fn letter(&self) -> char {
        match self {
            AttendanceKind::Present => 'P',
            AttendanceKind::Absent => 'A',
            AttendanceKind::Late => 'L',
            AttendanceKind::Holiday => 'H',
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AttendanceKind::Present => "bg-present text-present-foreground",
            AttendanceKind::Absent => "bg-absent text-absent-foreground",
            AttendanceKind::Late => "bg-late text-late-foreground",
            AttendanceKind::Holiday => "bg-holiday text-holiday-foreground",
        }
    }

    pub fn button_class(&self) -> &'static str {
        match self {
            AttendanceKind::Present => "bg-present hover:bg-present/90 text-present-foreground",
            AttendanceKind::Absent => "bg-absent hover:bg-absent/90 text-absent-foreground",
            AttendanceKind::Late => "bg-late hover:bg-late/90 text-late-foreground",
            AttendanceKind::Holiday => "bg-holiday hover:bg-holiday/90 text-holiday-foreground",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            AttendanceKind::Present => "fas fa-check",
            AttendanceKind::Absent => "fas fa-times",
            AttendanceKind::Late => "fas fa-clock",
            AttendanceKind::Holiday => "fas fa-calendar-day",
        }
    }
}

/// A single mark inside a record. Entries are never merged or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub kind: AttendanceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttendanceEntry {
    pub fn new(kind: AttendanceKind) -> Self {
        Self {
            kind,
            time: None,
            notes: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub date: NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

impl AttendanceRecord {
    pub fn is_for(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.employee_id == employee_id && self.date == date
    }
}

/// Month/year the sheet displays. Day numbers are resolved against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetPeriod {
    pub year: i32,
    pub month: u32,
}

impl SheetPeriod {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn date_for_day(&self, day: u32) -> Result<NaiveDate, AttendanceError> {
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or(AttendanceError::InvalidDate {
            year: self.year,
            month: self.month,
            day,
        })
    }

    pub fn days_in_month(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .and_then(|next| next.checked_sub_signed(Duration::days(1)))
            .map(|last| last.day())
            .unwrap_or(0)
    }

    /// Day numbers shown as columns, capped at the real month length.
    pub fn day_columns(&self, display_days: u32) -> Vec<u32> {
        (1..=display_days.min(self.days_in_month())).collect()
    }

    pub fn month_name(&self) -> &'static str {
        chrono::Month::try_from(u8::try_from(self.month).unwrap_or(0))
            .map(|month| month.name())
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let entry = AttendanceEntry::new(AttendanceKind::Holiday).with_time("09:15:00");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "holiday");
        assert_eq!(json["time"], "09:15:00");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn kind_letters_are_distinct() {
        let letters: Vec<char> = AttendanceKind::ALL.iter().map(|k| k.letter()).collect();
        assert_eq!(letters, vec!['P', 'A', 'L', 'H']);
    }

    #[test]
    fn record_date_serializes_zero_padded() {
        let record = AttendanceRecord {
            employee_id: "1".into(),
            date: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
            entries: vec![],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2025-07-05");
        assert!(record.is_for("1", NaiveDate::from_ymd_opt(2025, 7, 5).unwrap()));
        assert!(!record.is_for("2", NaiveDate::from_ymd_opt(2025, 7, 5).unwrap()));
    }

    #[test]
    fn date_for_day_rejects_days_outside_month() {
        let period = SheetPeriod::new(2025, 2);
        assert!(period.date_for_day(28).is_ok());
        assert_eq!(
            period.date_for_day(29),
            Err(AttendanceError::InvalidDate {
                year: 2025,
                month: 2,
                day: 29
            })
        );
        assert!(period.date_for_day(0).is_err());
    }

    #[test]
    fn day_columns_cap_at_month_length() {
        assert_eq!(SheetPeriod::new(2025, 7).day_columns(16).len(), 16);
        assert_eq!(SheetPeriod::new(2025, 2).day_columns(31).len(), 28);
        assert_eq!(SheetPeriod::new(2024, 2).day_columns(31).len(), 29);
        assert_eq!(SheetPeriod::new(2025, 7).day_columns(16)[0], 1);
    }

    #[test]
    fn month_name_resolves_calendar_month() {
        assert_eq!(SheetPeriod::new(2025, 7).month_name(), "July");
        assert_eq!(SheetPeriod::new(2025, 13).month_name(), "Unknown");
    }
}
