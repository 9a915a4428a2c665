use super::{interaction::CellState, types::Employee};
use crate::{state::attendance::AttendanceSheet, utils::csv::append_csv_row};

pub const MONTH_OPTIONS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
pub const YEAR_OPTIONS: &[&str] = &["2023", "2024", "2025", "2026"];
pub const USER_TYPE_OPTIONS: &[&str] = &["All User Types", "Admin", "Site Supervisor", "Employee"];
pub const SOCIETY_OPTIONS: &[&str] = &["All Societies", "Society A", "Society B", "Society C"];

/// Page-level filter selection. Fields are independent of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub month: String,
    pub year: String,
    pub user_type: String,
    pub society: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            month: "July".to_string(),
            year: "2025".to_string(),
            user_type: USER_TYPE_OPTIONS[0].to_string(),
            society: SOCIETY_OPTIONS[0].to_string(),
        }
    }
}

impl FilterState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Case-insensitive name search. Keeps roster order.
pub fn filter_roster(roster: &[Employee], term: &str) -> Vec<Employee> {
    let needle = term.to_lowercase();
    roster
        .iter()
        .filter(|employee| employee.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn export_file_name(sheet: &AttendanceSheet) -> String {
    format!(
        "attendance-{:04}-{:02}.csv",
        sheet.period.year, sheet.period.month
    )
}

pub fn sheet_to_csv(employees: &[Employee], days: &[u32], sheet: &AttendanceSheet) -> String {
    let mut csv = String::new();
    let header: Vec<String> = ["Employee", "Role"]
        .iter()
        .map(|label| label.to_string())
        .chain(days.iter().map(|day| day.to_string()))
        .collect();
    append_csv_row(&mut csv, &header);
    for employee in employees {
        let row: Vec<String> = [employee.name.clone(), employee.role.label().to_string()]
            .into_iter()
            .chain(days.iter().map(|day| {
                CellState::from_entries(sheet.entries_for(&employee.id, *day)).badge_letters()
            }))
            .collect();
        append_csv_row(&mut csv, &row);
    }
    csv
}
